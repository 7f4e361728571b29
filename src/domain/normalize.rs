// src/domain/normalize.rs

use crate::domain::listing::MonitoredField;
use serde_json::Value;

pub const YES: &str = "是";
pub const NO: &str = "否";
/// Shown in place of an empty value ("to be announced").
pub const TBA: &str = "待公布";

/// Lowercased spellings the feed uses for "no value".
const EMPTY_SENTINELS: [&str; 4] = ["-", "none", "null", ""];

/// Canonical text for a field value so that comparisons survive the feed
/// switching between `""`, `"-"`, `null`, `false` and `"False"`.
///
/// A missing `completed` reads as [`NO`]; every other missing field is `""`.
pub fn normalize(value: Option<&Value>, field: MonitoredField) -> String {
    let value = match value {
        None | Some(Value::Null) => {
            return if field == MonitoredField::Completed {
                NO.to_string()
            } else {
                String::new()
            };
        }
        Some(v) => v,
    };

    if let Value::Bool(flag) = value {
        return bool_marker(*flag).to_string();
    }

    let text = raw_text(value);
    let trimmed = text.trim();
    let lowered = trimmed.to_lowercase();

    if EMPTY_SENTINELS.contains(&lowered.as_str()) {
        return String::new();
    }

    match lowered.as_str() {
        "false" => NO.to_string(),
        "true" => YES.to_string(),
        _ => trimmed.to_string(),
    }
}

fn bool_marker(flag: bool) -> &'static str {
    if flag {
        YES
    } else {
        NO
    }
}

/// Plain text of a raw value: strings without quotes, everything else as JSON.
pub fn raw_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
