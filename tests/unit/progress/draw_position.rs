use super::*;
use crate::geometry::path::{CubicSegment, Section, StrokePath};
use crate::progress::section_ratio::length_to_section_ratio;
use crate::sampling::arc_length::cumulative_lengths;
use crate::sampling::flatten::flatten_path;
use kurbo::Point;

fn p(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

/// Two unit-speed lines forming an L: lengths 0, 1, 2, 3, 4 with `k = 1`.
fn elbow() -> (CumulativeLengths, Vec<SampledPolyline>) {
    let section = Section::new(vec![
        CubicSegment::line(p(0.0, 0.0), p(2.0, 0.0)),
        CubicSegment::line(p(2.0, 0.0), p(2.0, 2.0)),
    ])
    .unwrap();
    let path = StrokePath::new(vec![section]).unwrap();
    let samples = flatten_path(&path, 1);
    (cumulative_lengths(&samples), samples)
}

fn at(section: usize, ratio: f64) -> LengthRatioPosition {
    LengthRatioPosition { section, ratio }
}

#[test]
fn bracket_finds_surrounding_pair() {
    let table = [0.0, 1.0, 3.0, 6.0];
    assert_eq!(bracket(0.0, &table).unwrap(), (0, 1));
    assert_eq!(bracket(2.0, &table).unwrap(), (1, 2));
    assert_eq!(bracket(3.0, &table).unwrap(), (2, 3));
    assert_eq!(bracket(6.0, &table).unwrap(), (2, 3));
}

#[test]
fn bracket_fails_loudly_outside_table() {
    let table = [0.0, 1.0, 3.0, 6.0];
    assert!(matches!(bracket(6.5, &table), Err(TraceError::Range(_))));
    assert!(matches!(bracket(-0.1, &table), Err(TraceError::Range(_))));
    assert!(bracket(f64::NAN, &table).is_err());
    assert!(bracket(0.0, &[]).is_err());
    assert!(bracket(0.0, &[0.0]).is_err());
}

#[test]
fn exact_ratio_endpoints_short_circuit() {
    let (lengths, samples) = elbow();
    assert_eq!(
        ratio_to_draw_position(at(0, 0.0), &lengths, &samples).unwrap(),
        DrawPosition { curve: 0, t: 0.0 }
    );
    assert_eq!(
        ratio_to_draw_position(at(0, 1.0), &lengths, &samples).unwrap(),
        DrawPosition { curve: 1, t: 1.0 }
    );
}

#[test]
fn interior_ratios_interpolate_t() {
    let (lengths, samples) = elbow();

    let d = ratio_to_draw_position(at(0, 0.25), &lengths, &samples).unwrap();
    assert_eq!(d.curve, 0);
    assert!((d.t - 0.5).abs() < 1e-12);

    let d = ratio_to_draw_position(at(0, 0.375), &lengths, &samples).unwrap();
    assert_eq!(d.curve, 0);
    assert!((d.t - 0.75).abs() < 1e-12);

    let d = ratio_to_draw_position(at(0, 0.625), &lengths, &samples).unwrap();
    assert_eq!(d.curve, 1);
    assert!((d.t - 0.25).abs() < 1e-12);
}

#[test]
fn curve_boundary_resolves_to_start_of_next_curve() {
    let (lengths, samples) = elbow();
    let d = ratio_to_draw_position(at(0, 0.5), &lengths, &samples).unwrap();
    assert_eq!(d, DrawPosition { curve: 1, t: 0.0 });
}

#[test]
fn bad_inputs_are_range_errors() {
    let (lengths, samples) = elbow();
    assert!(matches!(
        ratio_to_draw_position(at(1, 0.5), &lengths, &samples),
        Err(TraceError::Range(_))
    ));
    assert!(matches!(
        ratio_to_draw_position(at(0, 1.5), &lengths, &samples),
        Err(TraceError::Range(_))
    ));
    assert!(ratio_to_draw_position(at(0, 0.5), &lengths, &[]).is_err());
}

#[test]
fn tabulated_lengths_round_trip_to_their_samples() {
    let curve = |a: Point, b: Point, c: Point, d: Point| {
        Section::new(vec![CubicSegment::new(a, b, c, d)]).unwrap()
    };
    let path = StrokePath::new(vec![
        curve(p(0.0, 0.0), p(0.0, 10.0), p(10.0, 10.0), p(10.0, 0.0)),
        curve(p(10.0, 0.0), p(10.0, -6.0), p(18.0, -2.0), p(20.0, 4.0)),
    ])
    .unwrap();
    let samples = flatten_path(&path, 6);
    let lengths = cumulative_lengths(&samples);

    for (section, table) in lengths.sections().iter().enumerate() {
        // The first sample of a later section is the previous section's end.
        let skip = usize::from(section > 0);
        for (j, &length) in table.iter().enumerate().skip(skip) {
            let pos = length_to_section_ratio(length, &lengths).unwrap();
            assert_eq!(pos.section, section);
            let d = ratio_to_draw_position(pos, &lengths, &samples).unwrap();
            let expected = samples[section].samples()[j];
            assert_eq!(d.curve, expected.curve);
            assert!((d.t - expected.t).abs() < 1e-9, "sample {j}: {} vs {}", d.t, expected.t);
        }
    }
}

#[test]
fn shared_curve_endpoints_round_trip_to_the_same_point() {
    let section = Section::new(vec![
        CubicSegment::new(p(0.0, 0.0), p(0.0, 10.0), p(10.0, 10.0), p(10.0, 0.0)),
        CubicSegment::line(p(10.0, 0.0), p(14.0, 3.0)),
        CubicSegment::new(p(14.0, 3.0), p(18.0, 6.0), p(22.0, -2.0), p(20.0, -8.0)),
    ])
    .unwrap();
    let path = StrokePath::new(vec![section.clone()]).unwrap();
    let samples = flatten_path(&path, 3);
    let lengths = cumulative_lengths(&samples);

    let point = |d: DrawPosition| section.curve(d.curve).unwrap().eval(d.t);
    for (j, &length) in lengths.sections()[0].iter().enumerate() {
        let pos = length_to_section_ratio(length, &lengths).unwrap();
        let d = ratio_to_draw_position(pos, &lengths, &samples).unwrap();
        let expected = samples[0].samples()[j];
        // A curve end may read back as `t == 0` on the next curve: same point, other tag.
        assert!(point(d).distance(expected.pos) < 1e-9, "sample {j}");
    }
}

#[test]
fn trailing_zero_length_curve_stays_in_range() {
    let far = 1.0e6;
    let path = StrokePath::new(vec![
        Section::new(vec![CubicSegment::line(p(0.0, 0.0), p(far, 0.0))]).unwrap(),
        Section::new(vec![
            CubicSegment::line(p(far, 0.0), p(far + 0.3, 0.0)),
            CubicSegment::line(p(far + 0.3, 0.0), p(far + 0.3, 0.0)),
        ])
        .unwrap(),
    ])
    .unwrap();
    let samples = flatten_path(&path, 2);
    let lengths = cumulative_lengths(&samples);

    let d = ratio_to_draw_position(at(1, 1.0 - f64::EPSILON), &lengths, &samples).unwrap();
    let end = path.sections()[1].curve(d.curve).unwrap().eval(d.t);
    assert!(end.distance(p(far + 0.3, 0.0)) < 1e-6, "{d:?}");
}

#[test]
fn zero_length_section_maps_to_its_end() {
    let dot = p(3.0, 4.0);
    let path = StrokePath::new(vec![
        Section::new(vec![CubicSegment::line(dot, dot), CubicSegment::line(dot, dot)]).unwrap(),
    ])
    .unwrap();
    let samples = flatten_path(&path, 1);
    let lengths = cumulative_lengths(&samples);

    let d = ratio_to_draw_position(at(0, 0.5), &lengths, &samples).unwrap();
    assert_eq!(d, DrawPosition { curve: 1, t: 1.0 });
}
