use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(TraceError::parse("x").to_string().contains("parse error:"));
    assert!(
        TraceError::geometry("x")
            .to_string()
            .contains("geometry error:")
    );
    assert!(TraceError::range("x").to_string().contains("range error:"));
    assert!(TraceError::store("x").to_string().contains("store error:"));
    assert!(TraceError::config("x").to_string().contains("config error:"));
    assert!(
        TraceError::DegenerateCurve
            .to_string()
            .contains("degenerate curve")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = TraceError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
