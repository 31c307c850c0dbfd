use serde_json::Value;

pub fn assert_clone_response(body: &Value, expected_voice_id: &str, expected_verification: bool) {
    assert_eq!(
        body.get("voice_id").and_then(|v| v.as_str()),
        Some(expected_voice_id),
        "Unexpected voice_id in {}",
        body
    );
    assert_eq!(
        body.get("requires_verification").and_then(|v| v.as_bool()),
        Some(expected_verification),
        "Unexpected requires_verification in {}",
        body
    );
    assert_eq!(
        body.as_object().map(|o| o.len()),
        Some(2),
        "Response should only carry voice_id and requires_verification: {}",
        body
    );
}
