use super::*;

#[test]
fn numbers_get_two_decimals_and_unit() {
    assert_eq!(reading_text(Some(&Reading::Number(21.5)), Some("C")), "21.50 C");
    assert_eq!(reading_text(Some(&Reading::Number(-0.126)), Some("V")), "-0.13 V");
}

#[test]
fn unit_is_optional() {
    assert_eq!(reading_text(Some(&Reading::Number(3.0)), None), "3.00");
    assert_eq!(reading_text(Some(&Reading::Number(3.0)), Some("  ")), "3.00");
}

#[test]
fn text_is_shown_verbatim() {
    assert_eq!(reading_text(Some(&Reading::Text("online".into())), None), "online");
}

#[test]
fn missing_or_empty_value_is_placeholder() {
    assert_eq!(reading_text(None, Some("C")), PLACEHOLDER);
    assert_eq!(reading_text(Some(&Reading::Text(String::new())), Some("C")), PLACEHOLDER);
}

#[test]
fn title_uses_state_fallback() {
    let p: TelemetryPoint =
        serde_json::from_value(serde_json::json!({"node": "n1", "cluster": "rack-a", "sensor": ""})).expect("point");
    assert_eq!(tile_title(&p), "rack-a / state");
}
