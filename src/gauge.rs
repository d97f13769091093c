//! The circular part of the meter: track, value arc and tick marks.

use crate::config::palette;
use crate::geometry::{PointF, RectF};
use crate::painter::{Brush, CapStyle, GradientStop, Painter, Pen};

pub const MIN_VALUE: f64 = 0.0;
pub const MAX_VALUE: f64 = 99.9;

/// Radius as a fraction of the short side of the drawing bounds.
pub const RADIUS_FACTOR: f64 = 0.54;
/// Arc pen width as a fraction of the radius.
pub const TRACK_WIDTH_FACTOR: f64 = 0.12;

pub const ARC_START_DEG: f64 = 30.0;
pub const ARC_SWEEP_DEG: f64 = 300.0;
pub const GRADIENT_ANCHOR_DEG: f64 = -90.0;

pub const TICK_COUNT: usize = 11;
pub const TICK_START_DEG: f64 = -60.0;
pub const TICK_INNER_FACTOR: f64 = 0.76;
pub const TICK_OUTER_FACTOR: f64 = 0.87;
pub const TICK_WIDTH: f64 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingGeometry {
    pub center: PointF,
    pub radius: f64,
    pub track_width: f64,
}

impl RingGeometry {
    pub fn new(bounds: RectF) -> Self {
        let radius = bounds.min_side() * RADIUS_FACTOR;
        Self {
            center: bounds.center(),
            radius,
            track_width: radius * TRACK_WIDTH_FACTOR,
        }
    }
}

/// Sweep of the value arc for a value already bounded to the meter range.
pub fn value_sweep(value: f64) -> f64 {
    ARC_SWEEP_DEG * (value / MAX_VALUE)
}

/// Angles of the tick marks, evenly spread over the tick span.
pub fn tick_angles() -> impl Iterator<Item = f64> {
    let steps = (TICK_COUNT - 1) as f64;
    (0..TICK_COUNT).map(move |i| TICK_START_DEG + ARC_SWEEP_DEG * (i as f64 / steps))
}

#[derive(Debug, Clone, Copy)]
pub struct GaugeRenderer {
    value: f64,
}

impl GaugeRenderer {
    pub fn new(value: f64) -> Self {
        Self { value }
    }

    pub fn draw_ring(&self, painter: &mut dyn Painter, bounds: RectF) {
        let ring = RingGeometry::new(bounds);

        let track = Pen::solid(palette::TRACK, ring.track_width).with_cap(CapStyle::Round);
        painter.stroke_arc(ring.center, ring.radius, ARC_START_DEG, ARC_SWEEP_DEG, &track);

        let glow = Brush::Conic {
            center: ring.center,
            angle_deg: GRADIENT_ANCHOR_DEG,
            stops: vec![
                GradientStop::new(0.0, palette::ARC_DARK),
                GradientStop::new(0.55, palette::ARC_MID),
                GradientStop::new(1.0, palette::ARC_LIGHT),
            ],
        };
        let value_pen = Pen {
            width: ring.track_width,
            cap: CapStyle::Round,
            brush: glow,
        };
        painter.stroke_arc(
            ring.center,
            ring.radius,
            ARC_START_DEG,
            value_sweep(self.value),
            &value_pen,
        );

        let tick_pen = Pen::solid(palette::TICK, TICK_WIDTH);
        for angle in tick_angles() {
            painter.draw_line(
                ring.center.polar(ring.radius * TICK_INNER_FACTOR, angle),
                ring.center.polar(ring.radius * TICK_OUTER_FACTOR, angle),
                &tick_pen,
            );
        }
    }
}
