use kurbo::{Point, Vec2};

use crate::foundation::error::{TraceError, TraceResult};
use crate::foundation::math::lerp_point;
use crate::sampling::arc_length::CumulativeLengths;
use crate::sampling::flatten::SampledPolyline;

/// Sampled polylines cut off at some length, one per section. Later sections may be empty.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct TruncatedStroke {
    sections: Vec<Vec<Point>>,
}

impl TruncatedStroke {
    /// Kept points, one list per section.
    pub fn sections(&self) -> &[Vec<Point>] {
        &self.sections
    }

    /// Index of the section being drawn: the one before the first section with fewer than two
    /// points, or the last section if none is that short. `None` if nothing is drawn yet.
    pub fn current_section(&self) -> Option<usize> {
        match self.sections.iter().position(|s| s.len() < 2) {
            Some(first_short) => first_short.checked_sub(1),
            None => self.sections.len().checked_sub(1),
        }
    }

    /// Last point of the current section.
    pub fn tip(&self) -> Option<Point> {
        self.sections[self.current_section()?].last().copied()
    }

    /// Unit normal of the final edge of the current section, rotated a quarter turn from the
    /// direction of travel. `None` when nothing is drawn or the final edge has zero length.
    pub fn tip_normal(&self) -> Option<Vec2> {
        let points = &self.sections[self.current_section()?];
        let [.., a, b] = points.as_slice() else {
            return None;
        };
        let d = *b - *a;
        let len = d.hypot();
        (len > 0.0).then(|| Vec2::new(-d.y / len, d.x / len))
    }
}

/// Keep every sample whose cumulative length is `<= current_length`.
///
/// With `interpolate`, the first sample beyond `current_length` in each section is replaced by
/// the point that lands exactly on it, so the stroke grows smoothly instead of sample by sample.
pub fn truncate_by_length(
    samples: &[SampledPolyline],
    lengths: &CumulativeLengths,
    current_length: f64,
    interpolate: bool,
) -> TraceResult<TruncatedStroke> {
    if samples.len() != lengths.section_count() {
        return Err(TraceError::range(format!(
            "{} sampled sections but {} length tables",
            samples.len(),
            lengths.section_count()
        )));
    }
    let sections = samples
        .iter()
        .zip(lengths.sections())
        .map(|(poly, table)| {
            if poly.len() != table.len() {
                return Err(TraceError::range(format!(
                    "{} samples but {} lengths",
                    poly.len(),
                    table.len()
                )));
            }
            let points = poly.samples();
            let mut kept = Vec::new();
            for (j, &length) in table.iter().enumerate() {
                if length <= current_length {
                    kept.push(points[j].pos);
                    continue;
                }
                if interpolate && j > 0 {
                    let t = (current_length - table[j - 1]) / (length - table[j - 1]);
                    kept.push(lerp_point(points[j - 1].pos, points[j].pos, t));
                }
                break;
            }
            Ok(kept)
        })
        .collect::<TraceResult<Vec<_>>>()?;
    Ok(TruncatedStroke { sections })
}

#[cfg(test)]
#[path = "../../tests/unit/trace/truncate.rs"]
mod tests;
