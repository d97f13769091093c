// ============================================================================
// SOFTWARE RASTERIZER
// ============================================================================
//
// Anti-aliased coverage rendering into an RGBA8 frame. Every primitive walks
// the pixels of its bounding box, estimates coverage of the pixel center from
// a distance function and alpha-blends the brush color.

use std::ops::Range;

use rusttype::{point, Font, PositionedGlyph, Scale};

use crate::geometry::{PointF, RectF};
use crate::painter::{Alignment, Brush, CapStyle, Color, FontWeight, HAlign, Pen, TextStyle, VAlign};

/// Point size to pixel scale at 96 dpi.
const POINTS_TO_PIXELS: f64 = 96.0 / 72.0;

pub struct Canvas<'a> {
    frame: &'a mut [u8],
    width: usize,
    height: usize,
    font: Option<&'a Font<'static>>,
}

impl<'a> Canvas<'a> {
    pub fn new(frame: &'a mut [u8], width: usize, height: usize) -> Self {
        let rows = if width == 0 { 0 } else { frame.len() / (width * 4) };
        Self {
            frame,
            width,
            height: height.min(rows),
            font: None,
        }
    }

    /// Font used for [`Canvas::draw_text`]. Without one, text is skipped.
    pub fn with_font(mut self, font: Option<&'a Font<'static>>) -> Self {
        self.font = font;
        self
    }

    pub fn clear(&mut self, color: Color) {
        for chunk in self.frame.chunks_exact_mut(4) {
            chunk.copy_from_slice(&[color.r, color.g, color.b, 0xff]);
        }
    }

    /// RGBA of a pixel, `None` outside the frame.
    pub fn pixel(&self, x: usize, y: usize) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = (y * self.width + x) * 4;
        let px = self.frame.get(idx..idx + 4)?;
        Some([px[0], px[1], px[2], px[3]])
    }

    fn set_pixel(&mut self, x: usize, y: usize, color: Color, coverage: f32) {
        if x >= self.width || y >= self.height {
            return;
        }
        let alpha = (color.alpha_f32() * coverage).clamp(0.0, 1.0);
        if alpha <= 0.0 {
            return;
        }
        let idx = (y * self.width + x) * 4;
        let Some(dst) = self.frame.get_mut(idx..idx + 4) else {
            return;
        };
        let src = [f32::from(color.r), f32::from(color.g), f32::from(color.b)];
        for (channel, s) in dst.iter_mut().zip(src) {
            *channel = (s * alpha + f32::from(*channel) * (1.0 - alpha)).round() as u8;
        }
        dst[3] = 0xff;
    }

    fn columns(&self, min: f64, max: f64) -> Range<usize> {
        pixel_range(min, max, self.width)
    }

    fn rows(&self, min: f64, max: f64) -> Range<usize> {
        pixel_range(min, max, self.height)
    }

    /// Calls `coverage` for every pixel center inside `bounds` and blends
    /// `brush` with the returned coverage.
    fn shade<F>(&mut self, bounds: RectF, brush: &Brush, coverage: F)
    where
        F: Fn(PointF) -> f64,
    {
        for y in self.rows(bounds.top(), bounds.bottom()) {
            for x in self.columns(bounds.left(), bounds.right()) {
                let p = PointF::new(x as f64 + 0.5, y as f64 + 0.5);
                let c = coverage(p);
                if c > 0.01 {
                    self.set_pixel(x, y, brush.color_at(p), c as f32);
                }
            }
        }
    }

    pub fn fill_rect(&mut self, rect: RectF, color: Color) {
        if rect.is_empty() {
            return;
        }
        for y in self.rows(rect.top(), rect.bottom()) {
            let cy = overlap(y as f64, rect.top(), rect.bottom());
            for x in self.columns(rect.left(), rect.right()) {
                let c = cy * overlap(x as f64, rect.left(), rect.right());
                if c > 0.0 {
                    self.set_pixel(x, y, color, c as f32);
                }
            }
        }
    }

    pub fn stroke_arc(&mut self, center: PointF, radius: f64, start_deg: f64, sweep_deg: f64, pen: &Pen) {
        if radius <= 0.0 || pen.width <= 0.0 || sweep_deg == 0.0 || !sweep_deg.is_finite() {
            return;
        }
        let (start, sweep) = if sweep_deg < 0.0 {
            (start_deg + sweep_deg, -sweep_deg)
        } else {
            (start_deg, sweep_deg)
        };
        let half = pen.width / 2.0;
        let caps = match pen.cap {
            CapStyle::Round => Some((center.polar(radius, start), center.polar(radius, start + sweep))),
            CapStyle::Flat => None,
        };
        let reach = radius + half + 1.0;
        let bounds = RectF::centered(center, reach * 2.0, reach * 2.0);

        self.shade(bounds, &pen.brush, |p| {
            let angle = (p.y - center.y).atan2(p.x - center.x).to_degrees();
            let mut c = 0.0;
            if sweep >= 360.0 || (angle - start).rem_euclid(360.0) <= sweep {
                c = edge(half - (p.distance(center) - radius).abs());
            }
            if let Some((a, b)) = caps {
                c = f64::max(c, edge(half - p.distance(a)));
                c = f64::max(c, edge(half - p.distance(b)));
            }
            c
        });
    }

    pub fn fill_rounded_rect(&mut self, rect: RectF, radius: f64, brush: &Brush) {
        if rect.is_empty() {
            return;
        }
        let bounds = rect.inset(-1.0);
        self.shade(bounds, brush, |p| edge(-rounded_rect_distance(rect, radius, p)));
    }

    pub fn stroke_rounded_rect(&mut self, rect: RectF, radius: f64, pen: &Pen) {
        if rect.is_empty() || pen.width <= 0.0 {
            return;
        }
        let half = pen.width / 2.0;
        let bounds = rect.inset(-(half + 1.0));
        self.shade(bounds, &pen.brush, |p| {
            edge(half - rounded_rect_distance(rect, radius, p).abs())
        });
    }

    pub fn fill_ellipse(&mut self, rect: RectF, color: Color) {
        if rect.is_empty() {
            return;
        }
        let center = rect.center();
        let (rx, ry) = (rect.width / 2.0, rect.height / 2.0);
        let scale = rx.min(ry);
        self.shade(rect.inset(-1.0), &Brush::Solid(color), |p| {
            let nx = (p.x - center.x) / rx;
            let ny = (p.y - center.y) / ry;
            edge(-(nx.hypot(ny) - 1.0) * scale)
        });
    }

    pub fn draw_line(&mut self, from: PointF, to: PointF, pen: &Pen) {
        if pen.width <= 0.0 {
            return;
        }
        let half = pen.width / 2.0;
        let bounds = RectF::new(
            from.x.min(to.x) - half - 1.0,
            from.y.min(to.y) - half - 1.0,
            (from.x - to.x).abs() + pen.width + 2.0,
            (from.y - to.y).abs() + pen.width + 2.0,
        );
        let dx = to.x - from.x;
        let dy = to.y - from.y;
        let len_sq = dx * dx + dy * dy;
        let cap = pen.cap;

        self.shade(bounds, &pen.brush, |p| {
            let t = if len_sq <= f64::EPSILON {
                0.0
            } else {
                ((p.x - from.x) * dx + (p.y - from.y) * dy) / len_sq
            };
            if cap == CapStyle::Flat && !(0.0..=1.0).contains(&t) {
                return 0.0;
            }
            let t = t.clamp(0.0, 1.0);
            let nearest = PointF::new(from.x + t * dx, from.y + t * dy);
            edge(half - p.distance(nearest))
        });
    }

    pub fn draw_text(&mut self, rect: RectF, text: &str, style: &TextStyle, align: Alignment) {
        let Some(font) = self.font else {
            tracing::trace!(text, "no font loaded, skipping text");
            return;
        };
        if style.size <= 0.0 || text.is_empty() {
            return;
        }
        let scale = Scale::uniform((style.size * POINTS_TO_PIXELS) as f32);
        let v_metrics = font.v_metrics(scale);
        let glyphs: Vec<PositionedGlyph> = font.layout(text, scale, point(0.0, 0.0)).collect();
        let text_width = calculate_text_width(&glyphs);

        let origin_x = match align.horizontal {
            HAlign::Left => rect.left(),
            HAlign::Center => rect.center().x - text_width / 2.0,
            HAlign::Right => rect.right() - text_width,
        };
        let baseline = match align.vertical {
            VAlign::Top => rect.top() + f64::from(v_metrics.ascent),
            VAlign::Center => {
                rect.center().y + f64::from(v_metrics.ascent + v_metrics.descent) / 2.0
            }
            VAlign::Bottom => rect.bottom() + f64::from(v_metrics.descent),
        };

        // Synthetic bold: a second pass shifted by a fraction of the size.
        let shifts = [0.0, (style.size / 18.0).max(0.6)];
        let passes = match style.weight {
            FontWeight::Normal => 1,
            FontWeight::Bold => 2,
        };
        for shift in &shifts[..passes] {
            for glyph in &glyphs {
                let Some(bb) = glyph.pixel_bounding_box() else {
                    continue;
                };
                let base_x = origin_x + shift + f64::from(bb.min.x);
                let base_y = baseline + f64::from(bb.min.y);
                glyph.draw(|gx, gy, v| {
                    let px = (base_x + f64::from(gx)).floor();
                    let py = (base_y + f64::from(gy)).floor();
                    if px >= 0.0 && py >= 0.0 {
                        self.set_pixel(px as usize, py as usize, style.color, v);
                    }
                });
            }
        }
    }
}

// ============================================================================
// HELPER FUNCTIONS
// ============================================================================

fn calculate_text_width(glyphs: &[PositionedGlyph]) -> f64 {
    glyphs
        .last()
        .map(|last| f64::from(last.position().x + last.unpositioned().h_metrics().advance_width))
        .unwrap_or(0.0)
}

/// Pixel indices touched by the span `[min, max)`, clipped to `0..limit`.
fn pixel_range(min: f64, max: f64, limit: usize) -> Range<usize> {
    if !(min.is_finite() && max.is_finite()) || max <= 0.0 {
        return 0..0;
    }
    let start = min.floor().max(0.0) as usize;
    let end = (max.ceil().max(0.0) as usize).min(limit);
    start.min(end)..end
}

/// Length of the intersection of `[cell, cell + 1]` and `[lo, hi]`.
fn overlap(cell: f64, lo: f64, hi: f64) -> f64 {
    ((cell + 1.0).min(hi) - cell.max(lo)).clamp(0.0, 1.0)
}

/// Coverage of a pixel whose center lies `inside` units within an edge.
fn edge(inside: f64) -> f64 {
    (inside + 0.5).clamp(0.0, 1.0)
}

/// Signed distance from `p` to a rounded rectangle, negative inside. The
/// corner radius is clamped to half the short side.
fn rounded_rect_distance(rect: RectF, radius: f64, p: PointF) -> f64 {
    let r = radius.clamp(0.0, rect.min_side() / 2.0);
    let c = rect.center();
    let qx = (p.x - c.x).abs() - (rect.width / 2.0 - r);
    let qy = (p.y - c.y).abs() - (rect.height / 2.0 - r);
    let outside = qx.max(0.0).hypot(qy.max(0.0));
    let inside = qx.max(qy).min(0.0);
    outside + inside - r
}
