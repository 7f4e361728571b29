// src/domain/snapshot.rs

use crate::domain::listing::{Listing, MonitoredField};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// What the state file keeps per listing: the identity fields plus the
/// monitored ones. Raw values are kept as-is; absent values become `""`
/// except `completed`, which becomes `false`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default = "empty")]
    pub token: Value,
    #[serde(default = "empty")]
    pub name: Value,
    #[serde(default = "empty")]
    pub date: Value,
    #[serde(default = "empty")]
    pub time: Value,
    #[serde(default = "empty")]
    pub amount: Value,
    #[serde(default = "empty")]
    pub points: Value,
    #[serde(rename = "type", default = "empty")]
    pub kind: Value,
    #[serde(default = "empty")]
    pub phase: Value,
    #[serde(default = "not_completed")]
    pub completed: Value,
}

fn empty() -> Value {
    Value::String(String::new())
}

fn not_completed() -> Value {
    Value::Bool(false)
}

fn stored(value: &Option<Value>) -> Value {
    match value {
        Some(Value::Null) | None => empty(),
        Some(v) => v.clone(),
    }
}

impl Snapshot {
    pub fn from_listing(listing: &Listing) -> Self {
        let completed = match &listing.completed {
            Some(Value::Null) | None => not_completed(),
            Some(v) => v.clone(),
        };

        Self {
            token: stored(&listing.token),
            name: stored(&listing.name),
            date: stored(&listing.date),
            time: stored(&listing.time),
            amount: stored(&listing.amount),
            points: stored(&listing.points),
            kind: stored(&listing.kind),
            phase: stored(&listing.phase),
            completed,
        }
    }

    pub fn get(&self, field: MonitoredField) -> &Value {
        match field {
            MonitoredField::Name => &self.name,
            MonitoredField::Time => &self.time,
            MonitoredField::Amount => &self.amount,
            MonitoredField::Points => &self.points,
            MonitoredField::Type => &self.kind,
            MonitoredField::Completed => &self.completed,
        }
    }
}
