use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        GifAnimError::config("x")
            .to_string()
            .contains("configuration error:")
    );
    assert!(
        GifAnimError::not_found("missing.png")
            .to_string()
            .contains("not found: missing.png")
    );
    assert!(
        GifAnimError::encode("x")
            .to_string()
            .contains("encode error:")
    );
}

#[test]
fn pipeline_error_names_stage_and_effect() {
    let err = GifAnimError::pipeline(2, "jitter", "effect produced no frames");
    let msg = err.to_string();
    assert!(msg.contains("stage 2"));
    assert!(msg.contains("(jitter)"));
    assert!(msg.contains("no frames"));
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = GifAnimError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
