use super::*;
use crate::geometry::path::CubicSegment;
use crate::sampling::flatten::{flatten_path, flatten_section};

fn p(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

fn horizontal() -> Section {
    Section::new(vec![CubicSegment::line(p(0.0, 0.0), p(10.0, 0.0))]).unwrap()
}

#[test]
fn point_above_a_line_drops_onto_it() {
    let section = horizontal();
    let samples = flatten_section(&section, 4);
    let x = project_point(p(3.0, 5.0), &samples, &section).unwrap();
    assert!(x.distance(p(3.0, 0.0)) < 1e-12);
}

#[test]
fn points_past_the_ends_follow_the_tangent_rays() {
    let section = horizontal();
    let samples = flatten_section(&section, 4);
    let after = project_point(p(15.0, 2.0), &samples, &section).unwrap();
    assert!(after.distance(p(15.0, 0.0)) < 1e-12);
    let before = project_point(p(-4.0, -1.0), &samples, &section).unwrap();
    assert!(before.distance(p(-4.0, 0.0)) < 1e-12);
}

#[test]
fn point_on_curve_sample_is_fixed() {
    let section = Section::new(vec![CubicSegment::new(
        p(0.0, 0.0),
        p(0.0, 10.0),
        p(10.0, 10.0),
        p(10.0, 0.0),
    )])
    .unwrap();
    let samples = flatten_section(&section, 9);
    let on = samples.samples()[4].pos;
    let x = project_point(on, &samples, &section).unwrap();
    assert!(x.distance(on) < 1e-9);
}

#[test]
fn degenerate_target_curve_fails() {
    let section = Section::new(vec![CubicSegment::line(p(1.0, 1.0), p(1.0, 1.0))]).unwrap();
    let samples = flatten_section(&section, 0);
    assert!(matches!(
        project_point(p(0.0, 0.0), &samples, &section),
        Err(TraceError::DegenerateCurve)
    ));
}

#[test]
fn project_samples_keeps_tags_and_moves_positions() {
    let target = StrokePath::new(vec![horizontal()]).unwrap();
    let target_samples = flatten_path(&target, 4);

    let offset = StrokePath::new(vec![
        Section::new(vec![CubicSegment::line(p(0.0, 3.0), p(10.0, 3.0))]).unwrap(),
    ])
    .unwrap();
    let original = flatten_path(&offset, 2);

    let projected = project_samples(&original, &target_samples, &target).unwrap();
    assert_eq!(projected.len(), 1);
    for (a, b) in original[0].samples().iter().zip(projected[0].samples()) {
        assert_eq!(a.t, b.t);
        assert_eq!(a.curve, b.curve);
        assert!((b.pos.y).abs() < 1e-12);
        assert!((b.pos.x - a.pos.x).abs() < 1e-12);
    }
}

#[test]
fn project_samples_rejects_mismatched_sections() {
    let target = StrokePath::new(vec![horizontal()]).unwrap();
    let target_samples = flatten_path(&target, 1);
    assert!(project_samples(&[], &target_samples, &target).is_err());
}
