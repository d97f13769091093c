//! Floating-point geometry shared by the renderers and the rasterizer.

/// A point in logical drawing units, y growing downwards.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointF {
    pub x: f64,
    pub y: f64,
}

impl PointF {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// The point at `radius` from `self` along `angle_deg` (clockwise from 3 o'clock).
    pub fn polar(self, radius: f64, angle_deg: f64) -> Self {
        let rad = angle_deg.to_radians();
        Self::new(self.x + radius * rad.cos(), self.y + radius * rad.sin())
    }

    pub fn distance(self, other: PointF) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Axis-aligned rectangle. `right()` and `bottom()` are `x + width` and
/// `y + height`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RectF {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl RectF {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// A `width` x `height` rectangle centered on `center`.
    pub fn centered(center: PointF, width: f64, height: f64) -> Self {
        Self::new(
            center.x - width / 2.0,
            center.y - height / 2.0,
            width,
            height,
        )
    }

    pub fn left(&self) -> f64 {
        self.x
    }

    pub fn top(&self) -> f64 {
        self.y
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    pub fn center(&self) -> PointF {
        PointF::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    pub fn top_left(&self) -> PointF {
        PointF::new(self.left(), self.top())
    }

    pub fn bottom_left(&self) -> PointF {
        PointF::new(self.left(), self.bottom())
    }

    pub fn min_side(&self) -> f64 {
        self.width.min(self.height)
    }

    /// Moves each edge by the given deltas: left/top by `dx1`/`dy1`,
    /// right/bottom by `dx2`/`dy2`.
    pub fn adjusted(&self, dx1: f64, dy1: f64, dx2: f64, dy2: f64) -> Self {
        Self::new(
            self.x + dx1,
            self.y + dy1,
            self.width - dx1 + dx2,
            self.height - dy1 + dy2,
        )
    }

    /// Shrinks the rectangle by `margin` on every side.
    pub fn inset(&self, margin: f64) -> Self {
        self.adjusted(margin, margin, -margin, -margin)
    }

    pub fn is_empty(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }
}

/// Minimum widget size in logical units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeHint {
    pub width: u32,
    pub height: u32,
}
