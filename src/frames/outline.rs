//! Partial-stroke outline for one frame.
//!
//! The drawn region runs forward along the outer boundary up to the frame's split point, crosses
//! over to the inner boundary's split point and runs backwards along the inner boundary to its
//! start. Whole curves are emitted as-is; only the current curve of each boundary is subdivided.

use kurbo::{BezPath, Point};

use crate::foundation::error::{TraceError, TraceResult};
use crate::frames::table::FrameTable;
use crate::geometry::path::{CubicSegment, LogoGeometry, Section, StrokePath};
use crate::progress::draw_position::DrawPosition;

/// Closed outline of the stroke drawn so far at `frame`.
pub fn frame_outline(
    geometry: &LogoGeometry,
    table: &FrameTable,
    frame: usize,
) -> TraceResult<BezPath> {
    let pos = table.frame(frame)?;
    let mut out = OutlineBuilder::new(geometry.outer.start());

    let (outer_done, outer_section, outer_curve) = locate(&geometry.outer, pos.section, pos.outer)?;
    for section in outer_done {
        for c in section.curves() {
            out.forward(c);
        }
    }
    for c in &outer_section.curves()[..pos.outer.curve] {
        out.forward(c);
    }
    let (outer_head, _) = outer_curve.split_at(pos.outer.t);
    out.forward(&outer_head);

    let (inner_done, inner_section, inner_curve) = locate(&geometry.inner, pos.section, pos.inner)?;
    let (inner_head, _) = inner_curve.split_at(pos.inner.t);
    out.bridge(inner_head.p3);
    out.backward(&inner_head);
    for c in inner_section.curves()[..pos.inner.curve].iter().rev() {
        out.backward(c);
    }
    for section in inner_done.iter().rev() {
        for c in section.curves().iter().rev() {
            out.backward(c);
        }
    }

    Ok(out.finish())
}

/// Completed sections, the current section and the current curve of `path`.
fn locate(
    path: &StrokePath,
    section: usize,
    at: DrawPosition,
) -> TraceResult<(&[Section], &Section, &CubicSegment)> {
    let current = path
        .section(section)
        .ok_or_else(|| TraceError::range(format!("section {section} out of range")))?;
    let curve = current.curve(at.curve).ok_or_else(|| {
        TraceError::range(format!(
            "curve {} out of range for section {section} (have {})",
            at.curve,
            current.len()
        ))
    })?;
    Ok((&path.sections()[..section], current, curve))
}

struct OutlineBuilder {
    path: BezPath,
    cursor: Point,
}

impl OutlineBuilder {
    fn new(start: Point) -> Self {
        let mut path = BezPath::new();
        path.move_to(start);
        Self {
            path,
            cursor: start,
        }
    }

    /// Line to `to` unless the cursor is already there.
    fn bridge(&mut self, to: Point) {
        if self.cursor.distance(to) > StrokePath::JOIN_TOLERANCE {
            self.path.line_to(to);
        }
        self.cursor = to;
    }

    fn forward(&mut self, c: &CubicSegment) {
        self.bridge(c.p0);
        self.path.curve_to(c.p1, c.p2, c.p3);
        self.cursor = c.p3;
    }

    fn backward(&mut self, c: &CubicSegment) {
        self.forward(&c.reversed());
    }

    fn finish(mut self) -> BezPath {
        self.path.close_path();
        self.path
    }
}

#[cfg(test)]
#[path = "../../tests/unit/frames/outline.rs"]
mod tests;
