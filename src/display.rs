//! The seven-segment readout panel in the middle of the gauge.

use crate::config::palette;
use crate::format::{display_text, FormatMode};
use crate::geometry::RectF;
use crate::painter::{Alignment, Brush, FontWeight, GradientStop, Painter, Pen, TextStyle};
use crate::segments::{segment_on, Segment, SEGMENT_COUNT};

pub const PANEL_WIDTH_FACTOR: f64 = 0.56;
pub const PANEL_HEIGHT_FACTOR: f64 = 0.26;
pub const PANEL_CORNER_FACTOR: f64 = 0.2;
pub const PANEL_BORDER_WIDTH: f64 = 1.2;
/// Inset of the digit area, as a fraction of the panel height.
pub const PADDING_FACTOR: f64 = 0.18;
/// Segment thickness as a fraction of the short side of a digit cell.
pub const SEGMENT_THICKNESS_FACTOR: f64 = 0.14;
/// Segment corner radius as a fraction of the segment's own height.
pub const SEGMENT_CORNER_FACTOR: f64 = 0.4;
pub const GLOW_WIDTH: f64 = 1.0;
pub const UNIT_LABEL: &str = "A";
pub const UNIT_FONT_FACTOR: f64 = 0.12;

/// One character slot of the readout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DigitCell {
    pub rect: RectF,
    /// Digit value, `-1` for a character that is not a decimal digit.
    pub digit: i32,
    pub decimal_point: bool,
}

/// The panel rectangle for a set of drawing bounds.
pub fn panel_rect(bounds: RectF) -> RectF {
    RectF::centered(
        bounds.center(),
        bounds.width * PANEL_WIDTH_FACTOR,
        bounds.height * PANEL_HEIGHT_FACTOR,
    )
}

/// Splits the panel into one slot per character of `text` and returns a cell
/// for every character that is not a `.`.
///
/// A `.` still consumes its slot width; it is drawn as a dot attached to the
/// preceding cell instead of getting a cell of its own.
pub fn layout_cells(panel: RectF, text: &str) -> Vec<DigitCell> {
    let chars: Vec<char> = text.chars().collect();
    if chars.is_empty() {
        return Vec::new();
    }
    let padding = panel.height * PADDING_FACTOR;
    let area = panel.inset(padding);
    let slot_width = area.width / chars.len() as f64;

    chars
        .iter()
        .enumerate()
        .filter(|(_, c)| **c != '.')
        .map(|(i, c)| DigitCell {
            rect: RectF::new(area.left() + i as f64 * slot_width, area.top(), slot_width, area.height),
            digit: c.to_digit(10).map_or(-1, |d| d as i32),
            decimal_point: chars.get(i + 1) == Some(&'.'),
        })
        .collect()
}

/// Segment rectangles of a digit cell, indexed like [`Segment::ALL`].
pub fn segment_rects(cell: RectF) -> [RectF; SEGMENT_COUNT] {
    let w = cell.width;
    let h = cell.height;
    let t = w.min(h) * SEGMENT_THICKNESS_FACTOR;
    let mid = cell.center().y;
    let bar = w - 2.0 * t;
    let upright = h / 2.0 - t * 1.2;

    [
        RectF::new(cell.left() + t, cell.top(), bar, t),
        RectF::new(cell.right() - t, cell.top() + t, t, upright),
        RectF::new(cell.right() - t, mid + t * 0.2, t, upright),
        RectF::new(cell.left() + t, cell.bottom() - t, bar, t),
        RectF::new(cell.left(), mid + t * 0.2, t, upright),
        RectF::new(cell.left(), cell.top() + t, t, upright),
        RectF::new(cell.left() + t, mid - t / 2.0, bar, t),
    ]
}

/// Where the decimal point dot of a cell goes.
pub fn decimal_point_rect(cell: RectF) -> RectF {
    let t = cell.min_side() * SEGMENT_THICKNESS_FACTOR;
    RectF::new(cell.right() + t * 0.2, cell.bottom() - t * 1.5, t * 0.9, t * 0.9)
}

#[derive(Debug, Clone, Copy)]
pub struct SegmentDisplayRenderer {
    value: f64,
    mode: FormatMode,
}

impl SegmentDisplayRenderer {
    pub fn new(value: f64, mode: FormatMode) -> Self {
        Self { value, mode }
    }

    pub fn text(&self) -> String {
        display_text(self.value, self.mode)
    }

    pub fn draw_display(&self, painter: &mut dyn Painter, bounds: RectF) {
        let panel = panel_rect(bounds);
        let panel_fill = Brush::Linear {
            start: panel.top_left(),
            end: panel.bottom_left(),
            stops: vec![
                GradientStop::new(0.0, palette::PANEL_TOP),
                GradientStop::new(1.0, palette::PANEL_BOTTOM),
            ],
        };
        let border = Pen::solid(palette::PANEL_BORDER, PANEL_BORDER_WIDTH);
        painter.draw_rounded_rect(
            panel,
            panel.height * PANEL_CORNER_FACTOR,
            Some(&panel_fill),
            Some(&border),
        );

        let text = self.text();
        for cell in layout_cells(panel, &text) {
            self.draw_digit(painter, cell.rect, cell.digit, cell.decimal_point);
        }

        let padding = panel.height * PADDING_FACTOR;
        let unit_style = TextStyle {
            size: panel.height * UNIT_FONT_FACTOR,
            weight: FontWeight::Bold,
            color: palette::UNIT_LABEL,
        };
        painter.draw_text(
            panel.adjusted(0.0, 0.0, -padding * 0.7, -padding * 0.4),
            UNIT_LABEL,
            &unit_style,
            Alignment::BOTTOM_RIGHT,
        );
    }

    pub fn draw_digit(&self, painter: &mut dyn Painter, cell: RectF, digit: i32, decimal_point: bool) {
        let rects = segment_rects(cell);
        for segment in Segment::ALL {
            let lit = segment_on(digit, segment.index() as i32);
            self.draw_segment(painter, rects[segment.index()], segment.is_horizontal(), lit);
        }

        if decimal_point {
            painter.fill_ellipse(decimal_point_rect(cell), palette::SEGMENT_ON);
        }
    }

    /// One rounded bar of a glyph. Orientation does not change the shape:
    /// the corner radius already follows the bar's own height.
    pub fn draw_segment(&self, painter: &mut dyn Painter, rect: RectF, _horizontal: bool, lit: bool) {
        let radius = rect.height * SEGMENT_CORNER_FACTOR;
        let fill = Brush::Solid(if lit {
            palette::SEGMENT_ON
        } else {
            palette::SEGMENT_OFF
        });
        let glow = lit.then(|| Pen::solid(palette::SEGMENT_GLOW, GLOW_WIDTH));
        painter.draw_rounded_rect(rect, radius, Some(&fill), glow.as_ref());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::{DrawCommand, Scene};

    fn bounds() -> RectF {
        RectF::new(0.0, 0.0, 300.0, 300.0)
    }

    #[test]
    fn panel_is_centered() {
        let panel = panel_rect(bounds());
        assert!((panel.width - 168.0).abs() < 1e-9);
        assert!((panel.height - 78.0).abs() < 1e-9);
        assert!(panel.center().distance(bounds().center()) < 1e-9);
    }

    #[test]
    fn decimal_point_consumes_a_slot() {
        let panel = RectF::new(0.0, 0.0, 100.0, 50.0);
        let cells = layout_cells(panel, "07.3");
        assert_eq!(cells.len(), 3);

        // padding 9 on each side, 82 wide digit area, 4 slots.
        let slot = 82.0 / 4.0;
        assert!((cells[0].rect.left() - 9.0).abs() < 1e-9);
        assert!((cells[1].rect.left() - (9.0 + slot)).abs() < 1e-9);
        assert!((cells[2].rect.left() - (9.0 + 3.0 * slot)).abs() < 1e-9);
        assert!(cells.iter().all(|c| (c.rect.width - slot).abs() < 1e-9));

        let digits: Vec<i32> = cells.iter().map(|c| c.digit).collect();
        assert_eq!(digits, vec![0, 7, 3]);
        let points: Vec<bool> = cells.iter().map(|c| c.decimal_point).collect();
        assert_eq!(points, vec![false, true, false]);
    }

    #[test]
    fn integer_text_has_no_decimal_point() {
        let cells = layout_cells(panel_rect(bounds()), "042");
        assert_eq!(cells.len(), 3);
        assert!(cells.iter().all(|c| !c.decimal_point));
    }

    #[test]
    fn segments_stay_inside_the_cell() {
        let cell = RectF::new(10.0, 20.0, 30.0, 60.0);
        for rect in segment_rects(cell) {
            assert!(rect.left() >= cell.left() - 1e-9);
            assert!(rect.right() <= cell.right() + 1e-9);
            assert!(rect.top() >= cell.top() - 1e-9);
            assert!(rect.bottom() <= cell.bottom() + 1e-9);
        }
        // t = 0.14 * 30
        let a = segment_rects(cell)[Segment::A.index()];
        assert!((a.height - 4.2).abs() < 1e-9);
        assert!((a.width - (30.0 - 8.4)).abs() < 1e-9);
    }

    #[test]
    fn lit_segments_glow_unlit_ones_do_not() {
        let mut scene = Scene::new();
        let renderer = SegmentDisplayRenderer::new(0.0, FormatMode::Decimal1);
        renderer.draw_digit(&mut scene, RectF::new(0.0, 0.0, 20.0, 40.0), 1, false);

        let glows: Vec<bool> = scene
            .commands()
            .iter()
            .map(|c| match c {
                DrawCommand::RoundedRect { stroke, .. } => stroke.is_some(),
                other => panic!("unexpected command {other:?}"),
            })
            .collect();
        assert_eq!(glows, vec![false, true, true, false, false, false, false]);
    }

    #[test]
    fn decimal_point_is_a_dot_right_of_the_cell() {
        let mut scene = Scene::new();
        let renderer = SegmentDisplayRenderer::new(0.0, FormatMode::Decimal1);
        let cell = RectF::new(0.0, 0.0, 20.0, 40.0);
        renderer.draw_digit(&mut scene, cell, 7, true);

        let Some(DrawCommand::Ellipse { rect, color }) = scene.commands().last() else {
            panic!("expected the decimal point last");
        };
        assert!(rect.left() > cell.right());
        assert!(rect.bottom() < cell.bottom());
        assert_eq!(*color, palette::SEGMENT_ON);
    }

    #[test]
    fn display_draws_panel_digits_and_unit() {
        let mut scene = Scene::new();
        SegmentDisplayRenderer::new(7.3, FormatMode::Decimal2).draw_display(&mut scene, bounds());
        let commands = scene.commands();

        // panel + 3 digits x 7 segments + one decimal point + unit label
        assert_eq!(commands.len(), 1 + 3 * 7 + 1 + 1);
        assert!(matches!(
            commands[0],
            DrawCommand::RoundedRect { fill: Some(Brush::Linear { .. }), stroke: Some(_), .. }
        ));
        let Some(DrawCommand::Text { text, style, align, .. }) = commands.last() else {
            panic!("expected the unit label last");
        };
        assert_eq!(text, "A");
        assert_eq!(style.weight, FontWeight::Bold);
        assert_eq!(*align, Alignment::BOTTOM_RIGHT);
    }
}
