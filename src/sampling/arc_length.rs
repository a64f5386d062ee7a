use crate::foundation::error::{TraceError, TraceResult};
use crate::sampling::flatten::SampledPolyline;

/// Running euclidean length at every sample point, indexed `[section][point]`.
///
/// The running total continues across section boundaries, so the last entry of section `i`
/// equals the first entry of section `i + 1`, and the whole table is non-decreasing.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct CumulativeLengths {
    sections: Vec<Vec<f64>>,
}

impl CumulativeLengths {
    /// Wrap precomputed tables, checking that every section is non-empty and that the lengths
    /// start at `>= 0` and never decrease.
    pub fn from_sections(sections: Vec<Vec<f64>>) -> TraceResult<Self> {
        let mut previous = 0.0;
        for (i, lengths) in sections.iter().enumerate() {
            if lengths.is_empty() {
                return Err(TraceError::geometry(format!("section {i} has no lengths")));
            }
            for &l in lengths {
                if l.is_nan() || l < previous {
                    return Err(TraceError::geometry(format!(
                        "lengths of section {i} decrease ({l} after {previous})"
                    )));
                }
                previous = l;
            }
        }
        Ok(Self { sections })
    }

    /// Tables of every section.
    pub fn sections(&self) -> &[Vec<f64>] {
        &self.sections
    }

    /// Number of sections.
    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    /// Table of one section.
    pub fn section(&self, index: usize) -> TraceResult<&[f64]> {
        self.sections.get(index).map(Vec::as_slice).ok_or_else(|| {
            TraceError::range(format!(
                "section {index} out of range (have {})",
                self.sections.len()
            ))
        })
    }

    /// `(first, last)` cumulative length of a section.
    pub fn section_span(&self, index: usize) -> TraceResult<(f64, f64)> {
        let lengths = self.section(index)?;
        match (lengths.first(), lengths.last()) {
            (Some(&min), Some(&max)) => Ok((min, max)),
            _ => Err(TraceError::range(format!("section {index} has no lengths"))),
        }
    }

    /// Length of the whole path.
    pub fn total(&self) -> f64 {
        self.sections
            .last()
            .and_then(|s| s.last())
            .copied()
            .unwrap_or(0.0)
    }
}

/// Tabulate cumulative lengths over the flattened sections of one path.
#[tracing::instrument(skip_all, fields(sections = polylines.len()))]
pub fn cumulative_lengths(polylines: &[SampledPolyline]) -> CumulativeLengths {
    let mut running = 0.0;
    let sections = polylines
        .iter()
        .map(|poly| {
            let mut lengths = Vec::with_capacity(poly.len());
            lengths.push(running);
            for w in poly.samples().windows(2) {
                running += w[0].pos.distance(w[1].pos);
                lengths.push(running);
            }
            lengths
        })
        .collect();
    CumulativeLengths { sections }
}

#[cfg(test)]
#[path = "../../tests/unit/sampling/arc_length.rs"]
mod tests;
