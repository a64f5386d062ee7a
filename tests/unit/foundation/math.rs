use super::*;

#[test]
fn lerp_hits_endpoints_and_midpoint() {
    assert_eq!(lerp(2.0, 6.0, 0.0), 2.0);
    assert_eq!(lerp(2.0, 6.0, 1.0), 6.0);
    assert_eq!(lerp(2.0, 6.0, 0.5), 4.0);
}

#[test]
fn inverse_lerp_inverts_lerp() {
    for t in [0.0, 0.25, 0.5, 0.75, 1.0] {
        let v = lerp(-3.0, 5.0, t);
        assert!((inverse_lerp(-3.0, 5.0, v) - t).abs() < 1e-12);
    }
}

#[test]
fn inverse_lerp_on_empty_span_is_not_finite() {
    assert!(!inverse_lerp(1.0, 1.0, 1.0).is_finite());
}

#[test]
fn lerp_point_interpolates_both_axes() {
    let p = lerp_point(Point::new(0.0, 10.0), Point::new(10.0, 0.0), 0.25);
    assert_eq!(p, Point::new(2.5, 7.5));
}
