use std::path::PathBuf;

use bon::Builder;

use crate::format::FormatMode;
use crate::painter::Color;

/// Interval of the demo animation timer.
pub const ANIMATION_INTERVAL_MS: u64 = 33;

/// Margin between the widget edge and the drawing bounds.
pub const CONTENT_MARGIN: f64 = 12.0;

/// Smallest size the meter is laid out for.
pub const MIN_WIDTH: u32 = 260;
pub const MIN_HEIGHT: u32 = 260;

/// Fixed color palette of the meter.
pub mod palette {
    use crate::painter::Color;

    pub const BACKGROUND: Color = Color::new(255, 255, 255);

    pub const TRACK: Color = Color::new(201, 209, 217);
    pub const ARC_DARK: Color = Color::new(46, 91, 255);
    pub const ARC_MID: Color = Color::new(74, 144, 255);
    pub const ARC_LIGHT: Color = Color::new(107, 182, 255);
    pub const TICK: Color = Color::with_alpha(128, 134, 150, 130);

    pub const PANEL_TOP: Color = Color::new(230, 232, 235);
    pub const PANEL_BOTTOM: Color = Color::new(210, 214, 219);
    pub const PANEL_BORDER: Color = Color::new(167, 175, 184);

    pub const SEGMENT_ON: Color = Color::new(47, 52, 58);
    pub const SEGMENT_OFF: Color = Color::with_alpha(47, 52, 58, 40);
    pub const SEGMENT_GLOW: Color = Color::with_alpha(169, 255, 227, 110);

    pub const UNIT_LABEL: Color = Color::new(126, 164, 189);
}

/// Font files tried, in order, when no font path is configured.
pub const FALLBACK_FONTS: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/TTF/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Bold.ttf",
    "/System/Library/Fonts/Supplemental/Arial Bold.ttf",
    "/Library/Fonts/Arial Bold.ttf",
    "C:\\Windows\\Fonts\\arialbd.ttf",
];

/// Settings of the desktop meter window.
#[derive(Debug, Clone, Builder)]
pub struct MeterConfig {
    #[builder(default = "Ammeter".to_string())]
    pub title: String,

    // Window configuration
    #[builder(default = 300)]
    pub window_width: u32,
    #[builder(default = 300)]
    pub window_height: u32,
    #[builder(default = 60.0)]
    pub max_framerate: f64,

    // Initial widget state
    #[builder(default = 0.0)]
    pub initial_value: f64,
    #[builder(default)]
    pub format_mode: FormatMode,
    #[builder(default = false)]
    pub demo_animation: bool,
    #[builder(default = ANIMATION_INTERVAL_MS)]
    pub animation_interval_ms: u64,

    // Rendering
    #[builder(default = palette::BACKGROUND)]
    pub background_color: Color,
    /// TrueType/OpenType file for the unit label. Falls back to
    /// [`FALLBACK_FONTS`] when unset.
    pub font_path: Option<PathBuf>,
}

impl Default for MeterConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = MeterConfig::default();
        assert_eq!(config.title, "Ammeter");
        assert_eq!((config.window_width, config.window_height), (300, 300));
        assert_eq!(config.format_mode, FormatMode::Decimal1);
        assert!(!config.demo_animation);
        assert_eq!(config.animation_interval_ms, 33);
        assert_eq!(config.background_color, palette::BACKGROUND);
        assert!(config.font_path.is_none());
    }

    #[test]
    fn builder_overrides() {
        let config = MeterConfig::builder()
            .title("Bench supply".to_string())
            .initial_value(12.5)
            .format_mode(FormatMode::Decimal2)
            .demo_animation(true)
            .font_path(PathBuf::from("/tmp/font.ttf"))
            .build();
        assert_eq!(config.title, "Bench supply");
        assert_eq!(config.initial_value, 12.5);
        assert_eq!(config.format_mode, FormatMode::Decimal2);
        assert!(config.demo_animation);
        assert_eq!(config.font_path, Some(PathBuf::from("/tmp/font.ttf")));
    }
}
