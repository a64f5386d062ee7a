use crate::foundation::error::{TraceError, TraceResult};
use crate::foundation::math::{inverse_lerp, lerp};
use crate::progress::section_ratio::LengthRatioPosition;
use crate::sampling::arc_length::CumulativeLengths;
use crate::sampling::flatten::SampledPolyline;

/// Position on one specific path: which curve of the section and the parameter on it.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct DrawPosition {
    /// Curve index within the section (restarts at 0 for every section).
    pub curve: usize,
    /// Bezier parameter in `[0, 1]`.
    pub t: f64,
}

/// Map a section-relative length ratio onto a path's own curves.
///
/// The ratio is rescaled into this path's section span, the bracketing pair of samples is found
/// by binary search, and `t` is interpolated between them. `ratio == 0` and `ratio == 1` map
/// exactly to the first / last sample of the section.
pub fn ratio_to_draw_position(
    position: LengthRatioPosition,
    lengths: &CumulativeLengths,
    samples: &[SampledPolyline],
) -> TraceResult<DrawPosition> {
    let LengthRatioPosition { section, ratio } = position;
    if !(0.0..=1.0).contains(&ratio) {
        return Err(TraceError::range(format!("length ratio {ratio} outside [0, 1]")));
    }
    let table = lengths.section(section)?;
    let points = samples
        .get(section)
        .ok_or_else(|| TraceError::range(format!("no samples for section {section}")))?
        .samples();
    if points.len() != table.len() || points.is_empty() {
        return Err(TraceError::range(format!(
            "section {section} has {} samples but {} lengths",
            points.len(),
            table.len()
        )));
    }

    if ratio == 0.0 {
        return Ok(DrawPosition {
            curve: points[0].curve,
            t: 0.0,
        });
    }
    if ratio == 1.0 {
        return Ok(DrawPosition {
            curve: points[points.len() - 1].curve,
            t: 1.0,
        });
    }

    let (min, max) = (table[0], table[table.len() - 1]);
    let current = min + ratio * (max - min);
    let (lo, hi) = bracket(current, table)?;
    // Equal entries come from zero-length curves; `current` then sits on `hi` itself.
    let fraction = if table[hi] == table[lo] {
        1.0
    } else {
        inverse_lerp(table[lo], table[hi], current)
    };
    if !(0.0..=1.0).contains(&fraction) {
        return Err(TraceError::range(format!(
            "fractional index {fraction} between samples {lo} and {hi}"
        )));
    }

    // t[lo] is 1 when `hi` opens a new curve: it belongs to the previous curve's span.
    let t_hi = points[hi].t;
    let t_lo = if points[lo].t > t_hi { 0.0 } else { points[lo].t };

    // A shared endpoint carries the smaller curve index, and `current` lies past it.
    Ok(DrawPosition {
        curve: points[hi].curve,
        t: lerp(t_lo, t_hi, fraction),
    })
}

/// For an ascending `table`, return `(i - 1, i)` with `table[i - 1] <= value <= table[i]`.
///
/// `i` is the first index whose entry exceeds `value`, except when `value` equals the final
/// entry, which brackets the last pair. Values outside `[table[0], table[last]]` are errors.
pub fn bracket(value: f64, table: &[f64]) -> TraceResult<(usize, usize)> {
    let (Some(&first), Some(&last)) = (table.first(), table.last()) else {
        return Err(TraceError::range("cannot search an empty length table"));
    };
    if value.is_nan() || value < first {
        return Err(TraceError::range(format!(
            "length {value} smaller than expected (min {first})"
        )));
    }
    if value > last {
        return Err(TraceError::range(format!(
            "length {value} larger than expected (max {last})"
        )));
    }
    if table.len() < 2 {
        return Err(TraceError::range("length table needs at least two entries"));
    }
    // At least `table[0]` is <= value, so `hi >= 1`.
    let hi = table.partition_point(|&l| l <= value).min(table.len() - 1);
    Ok((hi - 1, hi))
}

#[cfg(test)]
#[path = "../../tests/unit/progress/draw_position.rs"]
mod tests;
