//! Normalized stroke geometry.
//!
//! A [`StrokePath`] is a list of sections, a [`Section`] is a list of 4-point cubic curves.
//! Straight lines are stored as cubics with `p1 == p0` and `p2 == p3`.

use kurbo::{CubicBez, Point, Vec2};

use crate::foundation::core::{Ctrl4, PageSize};
use crate::foundation::error::{TraceError, TraceResult};
use crate::geometry::bezier;

/// One cubic bezier curve (or degenerate line).
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CubicSegment {
    /// Start point.
    pub p0: Point,
    /// First control point.
    pub p1: Point,
    /// Second control point.
    pub p2: Point,
    /// End point.
    pub p3: Point,
}

impl CubicSegment {
    /// Curve from its four control points.
    pub fn new(p0: Point, p1: Point, p2: Point, p3: Point) -> Self {
        Self { p0, p1, p2, p3 }
    }

    /// A straight line encoded with control points on its endpoints.
    pub fn line(from: Point, to: Point) -> Self {
        Self::new(from, from, to, to)
    }

    /// X coordinates of the control points.
    pub fn xs(&self) -> Ctrl4 {
        [self.p0.x, self.p1.x, self.p2.x, self.p3.x]
    }

    /// Y coordinates of the control points.
    pub fn ys(&self) -> Ctrl4 {
        [self.p0.y, self.p1.y, self.p2.y, self.p3.y]
    }

    /// Point on the curve at parameter `t`.
    pub fn eval(&self, t: f64) -> Point {
        Point::new(
            bezier::evaluate(&self.xs(), t),
            bezier::evaluate(&self.ys(), t),
        )
    }

    /// Unnormalized tangent at `t`; see [`bezier::tangent`].
    pub fn tangent(&self, t: f64) -> TraceResult<Vec2> {
        bezier::tangent(t, &self.xs(), &self.ys())
    }

    /// Split into the sub-curves covering `[0, t]` and `[t, 1]`.
    pub fn split_at(&self, t: f64) -> (Self, Self) {
        let (lx, rx) = bezier::split(&self.xs(), t);
        let (ly, ry) = bezier::split(&self.ys(), t);
        (from_axes(&lx, &ly), from_axes(&rx, &ry))
    }

    /// Same curve traversed from `p3` to `p0`.
    pub fn reversed(&self) -> Self {
        Self::new(self.p3, self.p2, self.p1, self.p0)
    }

    /// Same curve as a kurbo [`CubicBez`].
    pub fn to_kurbo(&self) -> CubicBez {
        CubicBez::new(self.p0, self.p1, self.p2, self.p3)
    }
}

fn from_axes(xs: &Ctrl4, ys: &Ctrl4) -> CubicSegment {
    CubicSegment::new(
        Point::new(xs[0], ys[0]),
        Point::new(xs[1], ys[1]),
        Point::new(xs[2], ys[2]),
        Point::new(xs[3], ys[3]),
    )
}

impl From<CubicBez> for CubicSegment {
    fn from(c: CubicBez) -> Self {
        Self::new(c.p0, c.p1, c.p2, c.p3)
    }
}

/// Ordered, continuous run of curves forming one logical chunk of the logo boundary.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Section {
    curves: Vec<CubicSegment>,
}

impl Section {
    /// Build a section, checking that it is non-empty and that every curve starts exactly
    /// where the previous one ends.
    pub fn new(curves: Vec<CubicSegment>) -> TraceResult<Self> {
        if curves.is_empty() {
            return Err(TraceError::geometry("section must contain at least one curve"));
        }
        if let Some(i) = curves.windows(2).position(|w| w[0].p3 != w[1].p0) {
            return Err(TraceError::geometry(format!(
                "curve {} ends at {:?} but curve {} starts at {:?}",
                i,
                curves[i].p3,
                i + 1,
                curves[i + 1].p0
            )));
        }
        Ok(Self { curves })
    }

    /// Curves in drawing order.
    pub fn curves(&self) -> &[CubicSegment] {
        &self.curves
    }

    /// Curve at `index`, if any.
    pub fn curve(&self, index: usize) -> Option<&CubicSegment> {
        self.curves.get(index)
    }

    /// Number of curves.
    pub fn len(&self) -> usize {
        self.curves.len()
    }

    /// Always `false` for a constructed section.
    pub fn is_empty(&self) -> bool {
        self.curves.is_empty()
    }

    /// Start of the first curve.
    pub fn start(&self) -> Point {
        self.curves[0].p0
    }

    /// End of the last curve.
    pub fn end(&self) -> Point {
        self.curves[self.curves.len() - 1].p3
    }
}

/// Ordered sequence of sections traced in one direction.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct StrokePath {
    sections: Vec<Section>,
}

impl StrokePath {
    /// Gaps between consecutive sections larger than this are reported.
    pub const JOIN_TOLERANCE: f64 = 1e-6;

    /// Build a path; gaps between sections are logged, not rejected.
    pub fn new(sections: Vec<Section>) -> TraceResult<Self> {
        if sections.is_empty() {
            return Err(TraceError::geometry("path must contain at least one section"));
        }
        for (i, w) in sections.windows(2).enumerate() {
            let gap = w[0].end().distance(w[1].start());
            if gap > Self::JOIN_TOLERANCE {
                tracing::warn!(section = i, gap, "section does not end where the next one starts");
            }
        }
        Ok(Self { sections })
    }

    /// Sections in drawing order.
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Section at `index`, if any.
    pub fn section(&self, index: usize) -> Option<&Section> {
        self.sections.get(index)
    }

    /// Number of sections.
    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    /// Start of the first section.
    pub fn start(&self) -> Point {
        self.sections[0].start()
    }
}

/// Inner boundary, outer boundary and animation path of a logo, section-aligned.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct LogoGeometry {
    /// Page size of the source drawing.
    pub page: PageSize,
    /// Inner boundary.
    pub inner: StrokePath,
    /// Outer boundary.
    pub outer: StrokePath,
    /// Path whose arc length drives animation progress.
    pub animation: StrokePath,
}

impl LogoGeometry {
    /// Fails unless all three paths have the same number of sections.
    pub fn new(
        page: PageSize,
        inner: StrokePath,
        outer: StrokePath,
        animation: StrokePath,
    ) -> TraceResult<Self> {
        let counts = (
            inner.section_count(),
            outer.section_count(),
            animation.section_count(),
        );
        if counts.0 != counts.1 || counts.1 != counts.2 {
            return Err(TraceError::geometry(format!(
                "section counts differ: inner={} outer={} animation={}",
                counts.0, counts.1, counts.2
            )));
        }
        Ok(Self {
            page,
            inner,
            outer,
            animation,
        })
    }

    /// Number of sections, shared by all three paths.
    pub fn section_count(&self) -> usize {
        self.animation.section_count()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/path.rs"]
mod tests;
