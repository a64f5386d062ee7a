use kurbo::Point;

/// Intersection of the infinite line through `a0, a1` with the one through `b0, b1`.
///
/// Returns `None` when the determinant is exactly zero (parallel or coincident lines).
pub fn line_intersection(a0: Point, a1: Point, b0: Point, b1: Point) -> Option<Point> {
    let denominator = (a0.x - a1.x) * (b0.y - b1.y) - (a0.y - a1.y) * (b0.x - b1.x);
    if denominator == 0.0 {
        return None;
    }
    let a_cross = a0.x * a1.y - a0.y * a1.x;
    let b_cross = b0.x * b1.y - b0.y * b1.x;
    let x = a_cross * (b0.x - b1.x) - (a0.x - a1.x) * b_cross;
    let y = a_cross * (b0.y - b1.y) - (a0.y - a1.y) * b_cross;
    Some(Point::new(x / denominator, y / denominator))
}

/// Intersection of the ray starting at `origin` and passing through `through` with the line
/// through `b0, b1`.
///
/// Intersections behind the ray origin (or exactly at it) are rejected.
pub fn ray_intersection(origin: Point, through: Point, b0: Point, b1: Point) -> Option<Point> {
    let hit = line_intersection(origin, through, b0, b1)?;
    let ray = through - origin;
    if ray.dot(hit - origin) > 0.0 {
        Some(hit)
    } else {
        None
    }
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/intersect.rs"]
mod tests;
