use kurbo::Point;

/// Linear interpolation between `a` and `b`.
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + t * (b - a)
}

/// Returns the `t` for which `lerp(min, max, t) == middle`.
///
/// Yields a non-finite value when `min == max`; callers range-check the result.
pub fn inverse_lerp(min: f64, max: f64, middle: f64) -> f64 {
    (middle - min) / (max - min)
}

pub(crate) fn lerp_point(a: Point, b: Point, t: f64) -> Point {
    Point::new(lerp(a.x, b.x, t), lerp(a.y, b.y, t))
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
