//! Segment-based drawings: one curve per segment, each with explicit start and end slopes.
//!
//! Accepted labels are `mask`, `segment{n}`, `segment{n}-{m}-...`, `start{n}`, `end{n}` and
//! `end{n}-start{m}`. Segments are numbered from 1 and read up to the first missing index.

use std::collections::{BTreeMap, HashMap};

use kurbo::{Point, Vec2};

use crate::foundation::core::PageSize;
use crate::foundation::error::{TraceError, TraceResult};
use crate::geometry::path::{CubicSegment, Section, StrokePath};
use crate::parse::document::{LabeledPath, labeled_paths, page_size, parse_document};
use crate::parse::label::PathLabel;
use crate::parse::path_data::{DrawCommand, OpenPath};

/// A straight line whose direction sets the slope at one end of a segment.
///
/// Only the direction matters; where the line sits in the drawing does not.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SlopeLine {
    /// Line start.
    pub from: Point,
    /// Line end.
    pub to: Point,
}

impl SlopeLine {
    /// Normalized direction from `from` to `to`.
    pub fn unit_direction(&self) -> TraceResult<Vec2> {
        let v = self.to - self.from;
        let len = v.hypot();
        if len == 0.0 {
            return Err(TraceError::geometry("slope line has zero length"));
        }
        Ok(v / len)
    }

    fn from_path(path: &OpenPath) -> TraceResult<Self> {
        match &path.commands[..] {
            &[DrawCommand::Line(to)] => Ok(Self {
                from: path.start,
                to,
            }),
            [_] => Err(TraceError::parse("path must end with L command")),
            _ => Err(TraceError::parse("path data has more than one segment")),
        }
    }
}

/// One segment curve with its start and end slopes.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SegmentParams {
    /// The segment itself.
    pub curve: CubicSegment,
    /// Slope at the segment start.
    pub start: SlopeLine,
    /// Slope at the segment end.
    pub end: SlopeLine,
}

/// Everything read from a segment-based drawing.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct AnimationParams {
    /// Page size of the drawing.
    pub page: PageSize,
    /// Source markup of the `mask` element, verbatim.
    pub mask_markup: String,
    /// Segments in index order, starting at `segment1`.
    pub segments: Vec<SegmentParams>,
}

impl AnimationParams {
    /// Parse a segment drawing.
    #[tracing::instrument(skip_all)]
    pub fn from_svg_str(text: &str) -> TraceResult<Self> {
        let doc = parse_document(text)?;
        let page = page_size(&doc)?;

        let mut mask = None;
        let mut slopes: HashMap<(SlopeEnd, usize), LabeledPath<'_, '_>> = HashMap::new();
        let mut curves: BTreeMap<usize, CubicSegment> = BTreeMap::new();
        for path in labeled_paths(&doc) {
            match PathLabel::parse(path.label) {
                Some(PathLabel::Mask) => mask = Some(path),
                Some(PathLabel::Start(n)) => {
                    slopes.insert((SlopeEnd::Start, n), path);
                }
                Some(PathLabel::End(n)) => {
                    slopes.insert((SlopeEnd::End, n), path);
                }
                Some(PathLabel::EndStart { end, start }) => {
                    slopes.insert((SlopeEnd::End, end), path);
                    slopes.insert((SlopeEnd::Start, start), path);
                }
                Some(PathLabel::Segment(indices)) => {
                    let pieces = split_segments(&path, indices.len())?;
                    curves.extend(indices.into_iter().zip(pieces));
                }
                _ => {
                    tracing::warn!(label = path.label, "failed to parse path label, skipping");
                }
            }
        }

        let mask = mask.ok_or_else(|| TraceError::parse("mask not found"))?;
        let mask_markup = text[mask.node.range()].to_owned();

        let mut segments = Vec::new();
        for index in 1.. {
            let Some(&curve) = curves.get(&index) else {
                break;
            };
            let slope = |end: SlopeEnd| -> TraceResult<SlopeLine> {
                let path = slopes.get(&(end, index)).ok_or_else(|| {
                    TraceError::parse(format!("{end} path for segment {index} is missing"))
                })?;
                SlopeLine::from_path(&path.open_path()?)
                    .map_err(|e| TraceError::parse(format!("path '{}': {e}", path.label)))
            };
            segments.push(SegmentParams {
                curve,
                start: slope(SlopeEnd::Start)?,
                end: slope(SlopeEnd::End)?,
            });
        }

        if segments.is_empty() {
            return Err(TraceError::parse("no path segments found"));
        }
        if segments.len() < curves.len() {
            tracing::warn!(
                segments = segments.len(),
                labeled = curves.len(),
                "found unreachable path segments"
            );
        }

        Ok(Self {
            page,
            mask_markup,
            segments,
        })
    }

    /// The segments as a path with one single-curve section per segment.
    pub fn to_stroke_path(&self) -> TraceResult<StrokePath> {
        let sections = self
            .segments
            .iter()
            .map(|s| Section::new(vec![s.curve]))
            .collect::<TraceResult<Vec<_>>>()?;
        StrokePath::new(sections)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
enum SlopeEnd {
    Start,
    End,
}

impl std::fmt::Display for SlopeEnd {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Start => "start",
            Self::End => "end",
        })
    }
}

/// One curve per drawing command of `path`, which must have exactly `expected` of them.
fn split_segments(path: &LabeledPath<'_, '_>, expected: usize) -> TraceResult<Vec<CubicSegment>> {
    let segments = path.open_path()?.segments();
    if segments.len() > expected {
        return Err(TraceError::parse(format!(
            "path '{}': path data has more segments than described by path label",
            path.label
        )));
    }
    if segments.len() < expected {
        return Err(TraceError::parse(format!(
            "path '{}': path data has fewer segments than described by path label",
            path.label
        )));
    }
    Ok(segments)
}

#[cfg(test)]
#[path = "../../tests/unit/parse/animation.rs"]
mod tests;
