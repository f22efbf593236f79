use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        BorderlineError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        BorderlineError::storage("x")
            .to_string()
            .contains("storage error:")
    );
    assert!(
        BorderlineError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = BorderlineError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
