use super::*;

#[test]
fn defaults() {
    let cfg = TraceConfig::default();
    assert_eq!(cfg.iterations, 50);
    assert_eq!(cfg.num_frames, 256);
    assert!(!cfg.project_onto_animation);
    cfg.validate().unwrap();
}

#[test]
fn partial_json_fills_in_defaults() {
    let cfg = TraceConfig::from_reader(r#"{ "num_frames": 12 }"#.as_bytes()).unwrap();
    assert_eq!(
        cfg,
        TraceConfig {
            num_frames: 12,
            ..TraceConfig::default()
        }
    );
}

#[test]
fn too_few_frames_is_a_config_error() {
    let err = TraceConfig::from_reader(r#"{ "num_frames": 1 }"#.as_bytes()).unwrap_err();
    assert!(matches!(err, TraceError::Config(_)), "{err}");
}

#[test]
fn malformed_or_unknown_fields_are_rejected() {
    assert!(matches!(
        TraceConfig::from_reader("{ nope".as_bytes()),
        Err(TraceError::Other(_))
    ));
    assert!(TraceConfig::from_reader(r#"{ "frames": 10 }"#.as_bytes()).is_err());
    assert!(TraceConfig::from_reader(r#"{ "iterations": -1 }"#.as_bytes()).is_err());
}

#[test]
fn missing_file_mentions_path() {
    let err = TraceConfig::from_path(Path::new("/definitely/not/here.json")).unwrap_err();
    assert!(format!("{err:#}").contains("not/here.json"), "{err:#}");
}
