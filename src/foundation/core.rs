pub use kurbo::{BezPath, Point, Vec2};

/// Page dimensions of the source drawing, in document units.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PageSize {
    /// Page width.
    pub width: f64,
    /// Page height.
    pub height: f64,
}

impl PageSize {
    /// Page of `width` by `height`.
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// One scalar coordinate of each control point of a cubic: `[p0, p1, p2, p3]`.
pub type Ctrl4 = [f64; 4];
