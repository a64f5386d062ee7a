use crate::foundation::error::{TraceError, TraceResult};
use crate::sampling::arc_length::CumulativeLengths;

/// Progress expressed as a section index and the fraction of that section's length covered.
///
/// Used to keep the inner and outer boundaries in the same logical section on every frame.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LengthRatioPosition {
    /// Section index.
    pub section: usize,
    /// In `[0, 1]`.
    pub ratio: f64,
}

/// Locate `target` (an absolute cumulative length) along the animation path.
///
/// Sections are scanned in order and the first one whose maximum length is `>= target` wins,
/// so a length exactly on a boundary resolves to the *earlier* section with `ratio == 1`.
/// A zero-length section that matches also reports `ratio == 1`.
pub fn length_to_section_ratio(
    target: f64,
    animation_lengths: &CumulativeLengths,
) -> TraceResult<LengthRatioPosition> {
    if target.is_nan() || target < 0.0 {
        return Err(TraceError::range(format!(
            "target length {target} must be a non-negative number"
        )));
    }
    for (section, lengths) in animation_lengths.sections().iter().enumerate() {
        let (Some(&min), Some(&max)) = (lengths.first(), lengths.last()) else {
            return Err(TraceError::range(format!("section {section} has no lengths")));
        };
        if target <= max {
            let span = max - min;
            let ratio = if span > 0.0 {
                (target - min) / span
            } else {
                1.0
            };
            return Ok(LengthRatioPosition { section, ratio });
        }
    }
    Err(TraceError::range(format!(
        "target length {target} exceeds total length {}",
        animation_lengths.total()
    )))
}

#[cfg(test)]
#[path = "../../tests/unit/progress/section_ratio.rs"]
mod tests;
