use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        FootprintError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        FootprintError::input_unavailable("x")
            .to_string()
            .contains("input unavailable:")
    );
    assert!(
        FootprintError::encode("x")
            .to_string()
            .contains("encode error:")
    );
    assert!(
        FootprintError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
    assert!(FootprintError::Cancelled.to_string().contains("cancelled"));
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = FootprintError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}

#[test]
fn input_unavailable_is_classified() {
    assert!(FootprintError::input_unavailable("no pixels").is_input_unavailable());
    assert!(!FootprintError::validation("bad").is_input_unavailable());
    assert!(!FootprintError::Cancelled.is_input_unavailable());
}
