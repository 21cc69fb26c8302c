//! Display text for tile fields.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use frames::{Reading, TelemetryPoint};

/// Shown wherever a value is missing.
pub const PLACEHOLDER: &str = "—";

/// Value with two decimals (numbers) or verbatim (text), followed by the unit.
/// Missing or empty values render as [`PLACEHOLDER`] without a unit.
#[must_use]
pub fn reading_text(value: Option<&Reading>, unit: Option<&str>) -> String {
    let value = match value {
        Some(Reading::Number(n)) => format!("{n:.2}"),
        Some(Reading::Text(s)) if !s.trim().is_empty() => s.clone(),
        _ => return PLACEHOLDER.to_owned(),
    };
    match unit.map(str::trim).filter(|u| !u.is_empty()) {
        Some(unit) => format!("{value} {unit}"),
        None => value,
    }
}

/// Tile heading, `cluster / sensor`.
#[must_use]
pub fn tile_title(point: &TelemetryPoint) -> String {
    format!("{} / {}", point.cluster, point.sensor_label())
}
