use crate::foundation::error::{TraceError, TraceResult};
use crate::progress::draw_position::{DrawPosition, ratio_to_draw_position};
use crate::progress::section_ratio::length_to_section_ratio;
use crate::sampling::arc_length::CumulativeLengths;
use crate::sampling::flatten::SampledPolyline;

/// Borrowed flattening results of one boundary path.
#[derive(Clone, Copy, Debug)]
pub struct PathTables<'a> {
    /// Cumulative lengths per section.
    pub lengths: &'a CumulativeLengths,
    /// Sampled polylines, one per section.
    pub samples: &'a [SampledPolyline],
}

/// Everything a renderer needs to draw one frame.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct FramePosition {
    /// Section shared by both boundaries on this frame.
    pub section: usize,
    /// Split point on the inner boundary.
    pub inner: DrawPosition,
    /// Split point on the outer boundary.
    pub outer: DrawPosition,
}

/// Per-frame draw positions, stored as parallel arrays of length `num_frames`.
///
/// Always rebuilt from scratch by [`build_frame_table`].
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct FrameTable {
    section_index_by_frame: Vec<usize>,
    inner_curve_index_by_frame: Vec<usize>,
    outer_curve_index_by_frame: Vec<usize>,
    inner_t_by_frame: Vec<f64>,
    outer_t_by_frame: Vec<f64>,
}

impl FrameTable {
    /// Number of frames.
    pub fn len(&self) -> usize {
        self.section_index_by_frame.len()
    }

    /// Whether the table has no frames.
    pub fn is_empty(&self) -> bool {
        self.section_index_by_frame.is_empty()
    }

    /// Section being drawn on each frame.
    pub fn section_index_by_frame(&self) -> &[usize] {
        &self.section_index_by_frame
    }

    /// Inner curve index within the section, per frame.
    pub fn inner_curve_index_by_frame(&self) -> &[usize] {
        &self.inner_curve_index_by_frame
    }

    /// Outer curve index within the section, per frame.
    pub fn outer_curve_index_by_frame(&self) -> &[usize] {
        &self.outer_curve_index_by_frame
    }

    /// Inner bezier parameter, per frame.
    pub fn inner_t_by_frame(&self) -> &[f64] {
        &self.inner_t_by_frame
    }

    /// Outer bezier parameter, per frame.
    pub fn outer_t_by_frame(&self) -> &[f64] {
        &self.outer_t_by_frame
    }

    /// All positions of one frame; out of range is a [`TraceError::Range`].
    pub fn frame(&self, frame: usize) -> TraceResult<FramePosition> {
        if frame >= self.len() {
            return Err(TraceError::range(format!(
                "frame {frame} out of range (have {})",
                self.len()
            )));
        }
        Ok(FramePosition {
            section: self.section_index_by_frame[frame],
            inner: DrawPosition {
                curve: self.inner_curve_index_by_frame[frame],
                t: self.inner_t_by_frame[frame],
            },
            outer: DrawPosition {
                curve: self.outer_curve_index_by_frame[frame],
                t: self.outer_t_by_frame[frame],
            },
        })
    }

    fn with_capacity(n: usize) -> Self {
        Self {
            section_index_by_frame: Vec::with_capacity(n),
            inner_curve_index_by_frame: Vec::with_capacity(n),
            outer_curve_index_by_frame: Vec::with_capacity(n),
            inner_t_by_frame: Vec::with_capacity(n),
            outer_t_by_frame: Vec::with_capacity(n),
        }
    }

    fn push(&mut self, p: FramePosition) {
        self.section_index_by_frame.push(p.section);
        self.inner_curve_index_by_frame.push(p.inner.curve);
        self.outer_curve_index_by_frame.push(p.outer.curve);
        self.inner_t_by_frame.push(p.inner.t);
        self.outer_t_by_frame.push(p.outer.t);
    }
}

fn check_frame_count(num_frames: usize) -> TraceResult<()> {
    if num_frames < 2 {
        return Err(TraceError::range(format!(
            "frame count must be at least 2, got {num_frames}"
        )));
    }
    Ok(())
}

/// Length along the animation path at `frame`: linear in time, `0` on the first frame and the
/// full length on the last.
pub fn length_at_frame(frame: usize, num_frames: usize, total: f64) -> TraceResult<f64> {
    check_frame_count(num_frames)?;
    if frame >= num_frames {
        return Err(TraceError::range(format!(
            "frame {frame} out of range (have {num_frames})"
        )));
    }
    // Dividing first keeps the last frame at exactly `total`.
    Ok(total * (frame as f64 / (num_frames - 1) as f64))
}

/// Build the frame table for `num_frames` frames.
///
/// Each frame's length ratio is computed once against the animation path and then mapped onto
/// both the inner and the outer path, so both report the same section on every frame.
#[tracing::instrument(skip(animation, inner, outer))]
pub fn build_frame_table(
    num_frames: usize,
    animation: &CumulativeLengths,
    inner: PathTables<'_>,
    outer: PathTables<'_>,
) -> TraceResult<FrameTable> {
    check_frame_count(num_frames)?;
    let sections = animation.section_count();
    if inner.lengths.section_count() != sections || outer.lengths.section_count() != sections {
        return Err(TraceError::geometry(format!(
            "section counts differ: animation={} inner={} outer={}",
            sections,
            inner.lengths.section_count(),
            outer.lengths.section_count()
        )));
    }

    let total = animation.total();
    let mut table = FrameTable::with_capacity(num_frames);
    for frame in 0..num_frames {
        let length = length_at_frame(frame, num_frames, total)?;
        let position = length_to_section_ratio(length, animation)?;
        table.push(FramePosition {
            section: position.section,
            inner: ratio_to_draw_position(position, inner.lengths, inner.samples)?,
            outer: ratio_to_draw_position(position, outer.lengths, outer.samples)?,
        });
    }
    tracing::debug!(frames = table.len(), total, "built frame table");
    Ok(table)
}

#[cfg(test)]
#[path = "../../tests/unit/frames/table.rs"]
mod tests;
