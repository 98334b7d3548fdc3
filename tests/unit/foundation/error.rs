use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        RailcamError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(RailcamError::route("x").to_string().contains("route error:"));
    assert!(
        RailcamError::evaluation("x")
            .to_string()
            .contains("evaluation error:")
    );
    assert!(
        RailcamError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = RailcamError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}

#[test]
fn json_errors_map_to_serde_variant() {
    let err: RailcamError = serde_json::from_str::<u32>("not json").unwrap_err().into();
    assert!(matches!(err, RailcamError::Serde(_)));
}
