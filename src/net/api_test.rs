use super::*;

#[test]
fn history_endpoint_percent_encodes_key() {
    let key = Key::new("n1", "c1", Some("temp"));
    assert_eq!(history_endpoint(&key, Period::Hour), "/history?key=n1%2Fc1%2Ftemp&period=1h");
}

#[test]
fn history_endpoint_encodes_spaces_and_reserved_chars() {
    let key = Key::new("pi 4", "rack&a", Some("cpu=temp"));
    assert_eq!(
        history_endpoint(&key, Period::Week),
        "/history?key=pi%204%2Frack%26a%2Fcpu%3Dtemp&period=7d"
    );
}

#[test]
fn history_endpoint_uses_state_fallback() {
    let key = Key::new("n1", "c1", None);
    assert_eq!(history_endpoint(&key, Period::Day), "/history?key=n1%2Fc1%2Fstate&period=24h");
}

#[test]
fn history_error_messages() {
    assert_eq!(HistoryError::Status(503).to_string(), "history request returned HTTP 503");
    assert_eq!(
        HistoryError::Transport("offline".into()).to_string(),
        "history request failed: offline"
    );
    assert_eq!(HistoryError::Unavailable.to_string(), "history is only available in the browser");
}
