//! Scalar cubic bezier math.
//!
//! Curves are handled one axis at a time: every function takes the four control values of a
//! single coordinate (`[p0, p1, p2, p3]`), so lines and curves share one code path.

use kurbo::Vec2;

use crate::foundation::core::Ctrl4;
use crate::foundation::error::{TraceError, TraceResult};
use crate::foundation::math::lerp;

/// De Casteljau evaluation of one axis of a cubic at `t`.
///
/// Works on a copy; the input control values are never modified.
pub fn evaluate(ctrl: &Ctrl4, t: f64) -> f64 {
    let mut buf = *ctrl;
    for len in (2..=buf.len()).rev() {
        for i in 0..len - 1 {
            buf[i] = lerp(buf[i], buf[i + 1], t);
        }
    }
    buf[0]
}

/// Analytic first derivative of one axis at `t`.
///
/// Collapses to zero at an endpoint whose neighbouring control point coincides with it; see
/// [`tangent`] for the endpoint handling.
pub fn derivative(ctrl: &Ctrl4, t: f64) -> f64 {
    let [c0, c1, c2, c3] = *ctrl;
    let s = 1.0 - t;
    3.0 * s * s * (c1 - c0) + 6.0 * s * t * (c2 - c1) + 3.0 * t * t * (c3 - c2)
}

/// Unnormalized tangent vector of the curve `(xs, ys)` at `t`.
///
/// At `t == 0` the first control point not coincident with `p0` gives the direction, at
/// `t == 1` the last control point not coincident with `p3` does. Fails with
/// [`TraceError::DegenerateCurve`] if all four control points coincide.
pub fn tangent(t: f64, xs: &Ctrl4, ys: &Ctrl4) -> TraceResult<Vec2> {
    if t == 0.0 {
        return (1..4)
            .find(|&i| xs[i] != xs[0] || ys[i] != ys[0])
            .map(|i| Vec2::new(xs[i] - xs[0], ys[i] - ys[0]))
            .ok_or(TraceError::DegenerateCurve);
    }
    if t == 1.0 {
        return (0..3)
            .rev()
            .find(|&i| xs[3] != xs[i] || ys[3] != ys[i])
            .map(|i| Vec2::new(xs[3] - xs[i], ys[3] - ys[i]))
            .ok_or(TraceError::DegenerateCurve);
    }
    Ok(Vec2::new(derivative(xs, t), derivative(ys, t)))
}

/// De Casteljau subdivision of one axis at `t`.
///
/// Returns `(left, right)` where `left` spans `[0, t]` and `right` spans `[t, 1]` of the
/// original parameter range. `left[3] == right[0] == evaluate(ctrl, t)`.
pub fn split(ctrl: &Ctrl4, t: f64) -> (Ctrl4, Ctrl4) {
    let [p0, p1, p2, p3] = *ctrl;
    let a = lerp(p0, p1, t);
    let b = lerp(p1, p2, t);
    let c = lerp(p2, p3, t);
    let ab = lerp(a, b, t);
    let bc = lerp(b, c, t);
    let mid = lerp(ab, bc, t);
    ([p0, a, ab, mid], [mid, bc, c, p3])
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/bezier.rs"]
mod tests;
