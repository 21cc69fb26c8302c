use super::*;

fn point(sensor: Option<&str>, value: Value) -> TelemetryPoint {
    let mut raw = serde_json::json!({
        "node": "n1",
        "cluster": "c1",
        "value": value,
        "unit": "C",
        "ts": "2024-01-01T00:00:00Z"
    });
    if let Some(sensor) = sensor {
        raw["sensor"] = Value::String(sensor.to_owned());
    }
    serde_json::from_value(raw).expect("point")
}

// =============================================================
// Key
// =============================================================

#[test]
fn key_joins_node_cluster_sensor() {
    assert_eq!(point(Some("temp"), serde_json::json!(1)).key().as_str(), "n1/c1/temp");
}

#[test]
fn key_falls_back_to_state_without_sensor() {
    assert_eq!(point(None, serde_json::json!(1)).key().as_str(), "n1/c1/state");
    assert_eq!(point(Some(""), serde_json::json!(1)).key().as_str(), "n1/c1/state");
}

#[test]
fn key_ignores_value_unit_and_ts() {
    let a = point(Some("temp"), serde_json::json!(21.5));
    let mut b = point(Some("temp"), serde_json::json!("warm"));
    b.unit = None;
    b.ts = Some("later".to_owned());
    assert_eq!(a.key(), b.key());
}

#[test]
fn keys_order_lexicographically() {
    let mut keys = vec![
        Key::new("n2", "a", Some("x")),
        Key::new("n1", "b", None),
        Key::new("n1", "a", Some("z")),
    ];
    keys.sort();
    let ordered: Vec<&str> = keys.iter().map(Key::as_str).collect();
    assert_eq!(ordered, vec!["n1/a/z", "n1/b/state", "n2/a/x"]);
}

// =============================================================
// Readings
// =============================================================

#[test]
fn reading_accepts_number_string_and_null() {
    assert_eq!(point(None, serde_json::json!(21.5)).value, Some(Reading::Number(21.5)));
    assert_eq!(point(None, serde_json::json!("on")).value, Some(Reading::Text("on".to_owned())));
    assert_eq!(point(None, Value::Null).value, None);
}

#[test]
fn reading_keeps_other_json_kinds_as_text() {
    assert_eq!(point(None, serde_json::json!(true)).value, Some(Reading::Text("true".to_owned())));
}

#[test]
fn point_without_optional_fields_decodes() {
    let p: TelemetryPoint = serde_json::from_str(r#"{"node":"n","cluster":"c"}"#).expect("point");
    assert!(p.sensor.is_none());
    assert!(p.value.is_none());
    assert!(p.unit.is_none());
    assert!(p.ts.is_none());
    assert_eq!(p.sensor_label(), "state");
}

// =============================================================
// Frame codec
// =============================================================

#[test]
fn decode_snapshot_frame() {
    let text = r#"{"type":"snapshot","data":[{"node":"n1","cluster":"c1","sensor":"temp","value":21.5,"unit":"C","ts":"2024-01-01T00:00:00Z"}]}"#;
    let StreamFrame::Snapshot(points) = decode_frame(text).expect("frame") else {
        panic!("expected snapshot");
    };
    assert_eq!(points.len(), 1);
    assert_eq!(points[0].key().as_str(), "n1/c1/temp");
}

#[test]
fn decode_update_frame() {
    let text = r#"{"type":"update","data":{"node":"n1","cluster":"c1","sensor":"temp","value":22.0}}"#;
    let frame = decode_frame(text).expect("frame");
    assert!(matches!(frame, StreamFrame::Update(ref p) if p.value == Some(Reading::Number(22.0))));
}

#[test]
fn decode_rejects_unknown_type() {
    let err = decode_frame(r#"{"type":"ping","data":{}}"#).expect_err("should reject");
    assert!(matches!(err, CodecError::UnknownType(ref t) if t == "ping"));
}

#[test]
fn decode_rejects_invalid_json() {
    assert!(matches!(decode_frame("{not json"), Err(CodecError::Json(_))));
}

#[test]
fn decode_rejects_update_without_node() {
    assert!(matches!(
        decode_frame(r#"{"type":"update","data":{"cluster":"c1"}}"#),
        Err(CodecError::Json(_))
    ));
}

// =============================================================
// Period / history
// =============================================================

#[test]
fn period_defaults_to_shortest_window() {
    assert_eq!(Period::default(), Period::Hour);
    assert_eq!(Period::ALL[0], Period::default());
}

#[test]
fn period_query_values_match_labels() {
    let values: Vec<String> = Period::ALL.iter().map(ToString::to_string).collect();
    assert_eq!(values, vec!["1h", "24h", "7d"]);
}

#[test]
fn history_response_tolerates_missing_unit_and_null_values() {
    let resp: HistoryResponse = serde_json::from_str(
        r#"{"data":[{"ts":"2024-01-01T00:00:00Z","value":1.5},{"ts":"2024-01-01T00:01:00Z","value":null}]}"#,
    )
    .expect("response");
    assert!(resp.unit.is_none());
    assert_eq!(resp.data.len(), 2);
    assert_eq!(resp.data[1].value, None);
}

#[test]
fn parse_timestamp_reads_rfc3339_and_zoneless_forms() {
    assert_eq!(parse_timestamp_ms("1970-01-01T00:00:01Z"), Some(1000.0));
    assert_eq!(parse_timestamp_ms("1970-01-01T01:00:00+01:00"), Some(0.0));
    assert_eq!(parse_timestamp_ms("1970-01-01T00:01:00"), Some(60_000.0));
    assert_eq!(parse_timestamp_ms("1970-01-01 00:00:02"), Some(2000.0));
    assert_eq!(parse_timestamp_ms("yesterday"), None);
}

#[test]
fn parse_timestamp_reads_zoneless_fractional_seconds() {
    assert_eq!(parse_timestamp_ms("1970-01-01T00:00:01.123456"), Some(1123.0));
    assert_eq!(parse_timestamp_ms("1970-01-01T00:00:00.5"), Some(500.0));
    assert_eq!(parse_timestamp_ms("1970-01-01 00:00:10.250"), Some(10_250.0));
}

#[test]
fn parse_timestamp_reads_zoneless_without_seconds() {
    assert_eq!(parse_timestamp_ms("1970-01-01T00:02"), Some(120_000.0));
    assert_eq!(parse_timestamp_ms("1970-01-01 01:00"), Some(3_600_000.0));
}

#[test]
fn python_isoformat_history_points_keep_their_order() {
    let resp: HistoryResponse = serde_json::from_str(
        r#"{"unit":"C","data":[{"ts":"2024-01-01T00:00:00","value":1.0},{"ts":"2024-01-01T00:00:00.250000","value":2.0}]}"#,
    )
    .expect("response");
    let times: Vec<f64> = resp.data.iter().map(|p| p.epoch_ms().expect("ts")).collect();
    assert_eq!(times[1] - times[0], 250.0);
}
