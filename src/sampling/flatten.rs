use kurbo::Point;

use crate::foundation::error::{TraceError, TraceResult};
use crate::geometry::path::{Section, StrokePath};

/// One vertex of a polyline approximation, tagged with where on the source curves it came from.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct SamplePoint {
    /// Position.
    pub pos: Point,
    /// Parameter on the originating curve. A curve's last sample always has `t == 1`.
    pub t: f64,
    /// Index of the originating curve within its section. A point shared by two curves
    /// carries the smaller index.
    pub curve: usize,
}

/// Polyline approximation of one section, ordered by increasing arc position.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct SampledPolyline {
    samples: Vec<SamplePoint>,
}

impl SampledPolyline {
    /// Samples in order.
    pub fn samples(&self) -> &[SamplePoint] {
        &self.samples
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Whether there are no samples.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Sample positions in order.
    pub fn positions(&self) -> impl Iterator<Item = Point> + '_ {
        self.samples.iter().map(|s| s.pos)
    }

    /// Same `t`/curve tagging with every position replaced.
    pub fn with_positions(&self, positions: Vec<Point>) -> TraceResult<Self> {
        if positions.len() != self.samples.len() {
            return Err(TraceError::geometry(format!(
                "expected {} positions, got {}",
                self.samples.len(),
                positions.len()
            )));
        }
        let samples = self
            .samples
            .iter()
            .zip(positions)
            .map(|(s, pos)| SamplePoint { pos, ..*s })
            .collect();
        Ok(Self { samples })
    }
}

/// Approximate every curve of `section` with `iterations + 1` line segments.
///
/// The section start is emitted once with `t = 0` on curve 0; each curve then contributes
/// `iterations + 1` points at `t = (j + 1) / (iterations + 1)`, the last of which is its
/// endpoint. A single curve therefore yields `iterations + 2` points.
pub fn flatten_section(section: &Section, iterations: usize) -> SampledPolyline {
    let steps = iterations + 1;
    let mut samples = Vec::with_capacity(1 + section.len() * steps);
    samples.push(SamplePoint {
        pos: section.start(),
        t: 0.0,
        curve: 0,
    });
    for (curve, segment) in section.curves().iter().enumerate() {
        for j in 1..=steps {
            let t = j as f64 / steps as f64;
            samples.push(SamplePoint {
                pos: segment.eval(t),
                t,
                curve,
            });
        }
    }
    SampledPolyline { samples }
}

/// Flatten every section of `path`.
#[tracing::instrument(skip(path), fields(sections = path.section_count()))]
pub fn flatten_path(path: &StrokePath, iterations: usize) -> Vec<SampledPolyline> {
    path.sections()
        .iter()
        .map(|s| flatten_section(s, iterations))
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/sampling/flatten.rs"]
mod tests;
