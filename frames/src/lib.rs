//! Shared wire model and JSON codec for the telemetry stream and history API.
//!
//! This crate owns the representation of everything that crosses the network
//! boundary: readings pushed over the websocket (`snapshot` / `update`
//! envelopes), the composite [`Key`] that identifies one data stream, and the
//! history service response consumed by the chart panels.
//!
//! Readings are decoded leniently (unknown value kinds become text) so one odd
//! sensor cannot poison a whole snapshot, while envelope-level problems are
//! reported as [`CodecError`] and left to the caller to log and discard.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{OffsetDateTime, PrimitiveDateTime};

/// Sensor segment used in a [`Key`] when a point carries no sensor name.
pub const STATE_SENSOR: &str = "state";

/// Error returned by [`decode_frame`].
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    /// The text is not JSON, or the payload does not match the frame type.
    #[error("failed to decode stream frame: {0}")]
    Json(#[from] serde_json::Error),
    /// The envelope `type` is not one this client understands.
    #[error("unknown frame type: {0}")]
    UnknownType(String),
}

/// Composite identity `node/cluster/sensor` naming one data stream.
///
/// Ordering is the lexicographic order of the key string, which is also the
/// display order of tiles.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Key(String);

impl Key {
    /// Build a key from its three segments. An empty sensor counts as absent.
    #[must_use]
    pub fn new(node: &str, cluster: &str, sensor: Option<&str>) -> Self {
        let sensor = sensor.filter(|s| !s.is_empty()).unwrap_or(STATE_SENSOR);
        Self(format!("{node}/{cluster}/{sensor}"))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Key {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// The value carried by one reading.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Reading {
    Number(f64),
    Text(String),
}

/// One reading as pushed by the stream server.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TelemetryPoint {
    /// Host that produced the reading.
    pub node: String,
    /// Logical group the sensor belongs to.
    pub cluster: String,
    /// Sensor name; absent for node-level state readings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sensor: Option<String>,
    /// Latest value; absent or `null` when the source had nothing to report.
    #[serde(default, deserialize_with = "deserialize_reading", skip_serializing_if = "Option::is_none")]
    pub value: Option<Reading>,
    /// Unit label, e.g. `"C"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    /// Source-side timestamp label. Displayed verbatim, never interpreted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ts: Option<String>,
}

impl TelemetryPoint {
    /// The stream identity of this reading.
    #[must_use]
    pub fn key(&self) -> Key {
        Key::new(&self.node, &self.cluster, self.sensor.as_deref())
    }

    /// Sensor segment as it appears in the key.
    #[must_use]
    pub fn sensor_label(&self) -> &str {
        self.sensor
            .as_deref()
            .filter(|s| !s.is_empty())
            .unwrap_or(STATE_SENSOR)
    }
}

fn deserialize_reading<'de, D>(deserializer: D) -> Result<Option<Reading>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(Value::Null) => None,
        Some(Value::Number(n)) => n.as_f64().map(Reading::Number),
        Some(Value::String(s)) => Some(Reading::Text(s)),
        Some(other) => Some(Reading::Text(other.to_string())),
    })
}

/// A decoded websocket message.
#[derive(Clone, Debug, PartialEq)]
pub enum StreamFrame {
    /// Full set of current readings, sent on connect.
    Snapshot(Vec<TelemetryPoint>),
    /// A single changed reading.
    Update(TelemetryPoint),
}

#[derive(Deserialize)]
struct Envelope {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    data: Value,
}

/// Decode one text message into a frame.
///
/// # Errors
///
/// Returns [`CodecError::Json`] for malformed JSON or payloads that do not fit
/// the frame type, and [`CodecError::UnknownType`] for unrecognised envelopes.
pub fn decode_frame(text: &str) -> Result<StreamFrame, CodecError> {
    let envelope: Envelope = serde_json::from_str(text)?;
    match envelope.kind.as_str() {
        "snapshot" => Ok(StreamFrame::Snapshot(serde_json::from_value(envelope.data)?)),
        "update" => Ok(StreamFrame::Update(serde_json::from_value(envelope.data)?)),
        _ => Err(CodecError::UnknownType(envelope.kind)),
    }
}

/// Historical window requested from the history service.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Period {
    #[default]
    #[serde(rename = "1h")]
    Hour,
    #[serde(rename = "24h")]
    Day,
    #[serde(rename = "7d")]
    Week,
}

impl Period {
    /// Every supported window, shortest first.
    pub const ALL: [Self; 3] = [Self::Hour, Self::Day, Self::Week];

    /// Query-string value, also used as the control label.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Hour => "1h",
            Self::Day => "24h",
            Self::Week => "7d",
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Body of a successful `GET /history` response.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct HistoryResponse {
    #[serde(default)]
    pub unit: Option<String>,
    #[serde(default)]
    pub data: Vec<HistoryPoint>,
}

/// One historical sample.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HistoryPoint {
    pub ts: String,
    #[serde(default)]
    pub value: Option<f64>,
}

impl HistoryPoint {
    /// Sample time in milliseconds since the Unix epoch, if `ts` parses.
    #[must_use]
    pub fn epoch_ms(&self) -> Option<f64> {
        parse_timestamp_ms(&self.ts)
    }
}

/// Parse an RFC 3339 timestamp, or a zone-less ISO 8601 date-time read as
/// UTC, into epoch milliseconds.
///
/// Zone-less forms accept `T` or a space as the separator, may omit seconds,
/// and may carry any number of fractional second digits.
#[must_use]
pub fn parse_timestamp_ms(ts: &str) -> Option<f64> {
    let ts = ts.trim();
    if let Ok(dt) = OffsetDateTime::parse(ts, &Rfc3339) {
        return Some(epoch_ms(dt));
    }
    PrimitiveDateTime::parse(ts, format_description!("[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond]"))
        .or_else(|_| PrimitiveDateTime::parse(ts, format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]")))
        .or_else(|_| PrimitiveDateTime::parse(ts, format_description!("[year]-[month]-[day]T[hour]:[minute]")))
        .or_else(|_| PrimitiveDateTime::parse(ts, format_description!("[year]-[month]-[day] [hour]:[minute]:[second].[subsecond]")))
        .or_else(|_| PrimitiveDateTime::parse(ts, format_description!("[year]-[month]-[day] [hour]:[minute]:[second]")))
        .or_else(|_| PrimitiveDateTime::parse(ts, format_description!("[year]-[month]-[day] [hour]:[minute]")))
        .map(|dt| epoch_ms(dt.assume_utc()))
        .ok()
}

#[allow(clippy::cast_precision_loss)]
fn epoch_ms(dt: OffsetDateTime) -> f64 {
    (dt.unix_timestamp_nanos() / 1_000_000) as f64
}

#[cfg(test)]
#[path = "lib_test.rs"]
mod tests;
