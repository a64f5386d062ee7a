//! Re-projection of sampled points onto another path.
//!
//! The closest point on a section is approximated by finding the nearest sample of that section
//! and projecting onto the tangent line through it. Near the section ends this naturally extends
//! the section by its start/end tangent rays. Accuracy is controlled by sampling density rather
//! than by a true nearest-point search.

use kurbo::{Point, Vec2};

use crate::foundation::error::{TraceError, TraceResult};
use crate::geometry::path::{Section, StrokePath};
use crate::sampling::flatten::SampledPolyline;

/// Project every sample of `original` onto the matching section of `target`.
///
/// The returned polylines keep the `t`/curve tagging of `original`; only positions change.
#[tracing::instrument(skip_all, fields(sections = original.len()))]
pub fn project_samples(
    original: &[SampledPolyline],
    target_samples: &[SampledPolyline],
    target: &StrokePath,
) -> TraceResult<Vec<SampledPolyline>> {
    if original.len() != target_samples.len() || original.len() != target.section_count() {
        return Err(TraceError::geometry(format!(
            "cannot project {} sections onto {} sampled / {} actual sections",
            original.len(),
            target_samples.len(),
            target.section_count()
        )));
    }
    original
        .iter()
        .zip(target_samples)
        .zip(target.sections())
        .map(|((poly, target_poly), section)| {
            let projected = poly
                .positions()
                .map(|r| project_point(r, target_poly, section))
                .collect::<TraceResult<Vec<_>>>()?;
            poly.with_positions(projected)
        })
        .collect()
}

/// Approximate closest point to `reference` on `section` (extended by its end tangents).
pub fn project_point(
    reference: Point,
    samples: &SampledPolyline,
    section: &Section,
) -> TraceResult<Point> {
    let mut closest = None;
    let mut best = f64::INFINITY;
    for s in samples.samples() {
        let d = (reference - s.pos).hypot2();
        if d < best {
            best = d;
            closest = Some(s);
        }
    }
    let closest = closest.ok_or_else(|| TraceError::geometry("cannot project onto empty samples"))?;
    let curve = section.curve(closest.curve).ok_or_else(|| {
        TraceError::geometry(format!("sample refers to missing curve {}", closest.curve))
    })?;

    let tangent = curve.tangent(closest.t)?;
    let normal = Vec2::new(-tangent.y, tangent.x);
    // Moving R by the normal component of (S - R) lands it on the tangent line through S.
    let rs = closest.pos - reference;
    let rx = normal * (rs.dot(normal) / normal.hypot2());
    Ok(reference + rx)
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/projection.rs"]
mod tests;
