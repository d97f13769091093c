//! The drawing capability the gauge renders through.
//!
//! Renderers only ever talk to [`Painter`]. [`crate::scene::Scene`] records
//! the calls as draw commands so they can be inspected or rasterized later.

use crate::geometry::{PointF, RectF};

/// RGBA color. Alpha 255 is opaque.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 0xff }
    }

    pub const fn with_alpha(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn alpha_f32(self) -> f32 {
        f32::from(self.a) / 255.0
    }

    /// Linear interpolation between two colors, `t` in `[0, 1]`.
    pub fn lerp(self, other: Color, t: f64) -> Color {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| (f64::from(a) + (f64::from(b) - f64::from(a)) * t).round() as u8;
        Color::with_alpha(
            mix(self.r, other.r),
            mix(self.g, other.g),
            mix(self.b, other.b),
            mix(self.a, other.a),
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientStop {
    pub offset: f64,
    pub color: Color,
}

impl GradientStop {
    pub const fn new(offset: f64, color: Color) -> Self {
        Self { offset, color }
    }
}

/// Samples a sorted stop list at `t`.
fn sample_stops(stops: &[GradientStop], t: f64) -> Color {
    let (Some(first), Some(last)) = (stops.first(), stops.last()) else {
        return Color::with_alpha(0, 0, 0, 0);
    };
    if t <= first.offset {
        return first.color;
    }
    if t >= last.offset {
        return last.color;
    }
    for pair in stops.windows(2) {
        let (lo, hi) = (pair[0], pair[1]);
        if t <= hi.offset {
            let span = hi.offset - lo.offset;
            if span <= f64::EPSILON {
                return hi.color;
            }
            return lo.color.lerp(hi.color, (t - lo.offset) / span);
        }
    }
    last.color
}

/// What fills a shape or a pen stroke.
#[derive(Debug, Clone, PartialEq)]
pub enum Brush {
    Solid(Color),
    /// Varies along the segment `start -> end`.
    Linear {
        start: PointF,
        end: PointF,
        stops: Vec<GradientStop>,
    },
    /// Varies with the angle around `center`; offset 0 sits at `angle_deg`
    /// and offsets grow clockwise like arc sweeps, one full turn per unit.
    Conic {
        center: PointF,
        angle_deg: f64,
        stops: Vec<GradientStop>,
    },
}

impl Brush {
    /// Color of the brush at a pixel position.
    pub fn color_at(&self, p: PointF) -> Color {
        match self {
            Brush::Solid(color) => *color,
            Brush::Linear { start, end, stops } => {
                let dx = end.x - start.x;
                let dy = end.y - start.y;
                let len_sq = dx * dx + dy * dy;
                let t = if len_sq <= f64::EPSILON {
                    0.0
                } else {
                    ((p.x - start.x) * dx + (p.y - start.y) * dy) / len_sq
                };
                sample_stops(stops, t)
            }
            Brush::Conic {
                center,
                angle_deg,
                stops,
            } => {
                let screen = (p.y - center.y).atan2(p.x - center.x).to_degrees();
                let t = (screen - angle_deg).rem_euclid(360.0) / 360.0;
                sample_stops(stops, t)
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CapStyle {
    Flat,
    Round,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Pen {
    pub width: f64,
    pub cap: CapStyle,
    pub brush: Brush,
}

impl Pen {
    pub fn solid(color: Color, width: f64) -> Self {
        Self {
            width,
            cap: CapStyle::Flat,
            brush: Brush::Solid(color),
        }
    }

    pub fn with_cap(mut self, cap: CapStyle) -> Self {
        self.cap = cap;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontWeight {
    Normal,
    Bold,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub size: f64,
    pub weight: FontWeight,
    pub color: Color,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HAlign {
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VAlign {
    Top,
    Center,
    Bottom,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Alignment {
    pub horizontal: HAlign,
    pub vertical: VAlign,
}

impl Alignment {
    pub const BOTTOM_RIGHT: Alignment = Alignment {
        horizontal: HAlign::Right,
        vertical: VAlign::Bottom,
    };
    pub const CENTER: Alignment = Alignment {
        horizontal: HAlign::Center,
        vertical: VAlign::Center,
    };
}

/// 2D drawing primitives over floating-point geometry.
///
/// Arc angles are degrees, increasing clockwise from 3 o'clock.
pub trait Painter {
    fn fill_rect(&mut self, rect: RectF, color: Color);

    /// Strokes a circular arc of `radius` around `center`.
    fn stroke_arc(&mut self, center: PointF, radius: f64, start_deg: f64, sweep_deg: f64, pen: &Pen);

    /// Fills and/or outlines a rectangle with rounded corners.
    fn draw_rounded_rect(
        &mut self,
        rect: RectF,
        radius: f64,
        fill: Option<&Brush>,
        stroke: Option<&Pen>,
    );

    /// Fills the ellipse inscribed in `rect`.
    fn fill_ellipse(&mut self, rect: RectF, color: Color);

    fn draw_line(&mut self, from: PointF, to: PointF, pen: &Pen);

    /// Lays `text` out inside `rect` according to `align`.
    fn draw_text(&mut self, rect: RectF, text: &str, style: &TextStyle, align: Alignment);
}
