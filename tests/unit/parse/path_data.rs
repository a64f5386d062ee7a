use super::*;

fn p(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

#[test]
fn absolute_lines_and_cubics() {
    let path = OpenPath::parse("M 0 0 L 10 0 C 10 5 15 10 20 10").unwrap();
    assert_eq!(path.start, p(0.0, 0.0));
    assert_eq!(
        path.commands,
        vec![
            DrawCommand::Line(p(10.0, 0.0)),
            DrawCommand::Cubic(p(10.0, 5.0), p(15.0, 10.0), p(20.0, 10.0)),
        ]
    );
}

#[test]
fn relative_and_axis_commands_are_normalized() {
    let path = OpenPath::parse("m 1 1 h 4 v 2 l -1 1").unwrap();
    let ends: Vec<Point> = path.commands.iter().map(DrawCommand::end).collect();
    assert_eq!(ends, vec![p(5.0, 1.0), p(5.0, 3.0), p(4.0, 4.0)]);
    assert!(path.commands.iter().all(|c| matches!(c, DrawCommand::Line(_))));
}

#[test]
fn quadratics_are_raised_to_cubics() {
    let path = OpenPath::parse("M 0 0 Q 3 3 6 0").unwrap();
    let &[DrawCommand::Cubic(c1, c2, end)] = &path.commands[..] else {
        panic!("expected one cubic, got {:?}", path.commands);
    };
    assert_eq!(end, p(6.0, 0.0));
    assert!(c1.distance(p(2.0, 2.0)) < 1e-12);
    assert!(c2.distance(p(4.0, 2.0)) < 1e-12);
}

#[test]
fn segments_chain_from_start() {
    let path = OpenPath::parse("M 0 0 L 1 0 L 1 1").unwrap();
    let section = path.to_section().unwrap();
    assert_eq!(section.len(), 2);
    assert_eq!(section.curves()[1], CubicSegment::line(p(1.0, 0.0), p(1.0, 1.0)));
}

#[test]
fn structural_errors() {
    for (d, needle) in [
        ("", "empty"),
        ("M 0 0", "too short"),
        ("L 1 1 L 2 2", "start with move"),
        ("M 0 0 L 1 1 M 2 2 L 3 3", "second move"),
        ("M 0 0 L 1 1 Z", "close"),
    ] {
        let err = OpenPath::parse(d).unwrap_err();
        assert!(matches!(err, TraceError::Parse(_)), "{d}: {err}");
        assert!(err.to_string().contains(needle), "{d}: {err}");
    }
}

#[test]
fn garbage_is_a_parse_error() {
    assert!(matches!(
        OpenPath::parse("M 0 0 L foo"),
        Err(TraceError::Parse(_))
    ));
}
