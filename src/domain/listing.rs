// src/domain/listing.rs

use serde::Deserialize;
use serde_json::Value;

/// One airdrop entry as delivered by the feed.
///
/// The feed is loose about types (amounts arrive as numbers or strings,
/// `completed` as a bool or a string), so every known field is kept as a raw
/// JSON value. `null` deserializes to `None`, the same as an absent field.
/// Fields outside the ones below are ignored.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Listing {
    // Identity
    #[serde(default)]
    pub token: Option<Value>,
    #[serde(default)]
    pub date: Option<Value>,
    #[serde(default)]
    pub phase: Option<Value>,

    // Monitored
    #[serde(default)]
    pub name: Option<Value>,
    #[serde(default)]
    pub time: Option<Value>,
    #[serde(default)]
    pub amount: Option<Value>,
    #[serde(default)]
    pub points: Option<Value>,
    #[serde(rename = "type", default)]
    pub kind: Option<Value>,
    #[serde(default)]
    pub completed: Option<Value>,
}

impl Listing {
    pub fn get(&self, field: MonitoredField) -> Option<&Value> {
        let value = match field {
            MonitoredField::Name => &self.name,
            MonitoredField::Time => &self.time,
            MonitoredField::Amount => &self.amount,
            MonitoredField::Points => &self.points,
            MonitoredField::Type => &self.kind,
            MonitoredField::Completed => &self.completed,
        };
        value.as_ref()
    }
}

/// The fields compared between passes. `ALL` fixes the order in which
/// changes are reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MonitoredField {
    Name,
    Time,
    Amount,
    Points,
    Type,
    Completed,
}

impl MonitoredField {
    pub const ALL: [MonitoredField; 6] = [
        MonitoredField::Name,
        MonitoredField::Time,
        MonitoredField::Amount,
        MonitoredField::Points,
        MonitoredField::Type,
        MonitoredField::Completed,
    ];

    /// Label shown in update notifications.
    pub fn label(self) -> &'static str {
        match self {
            MonitoredField::Name => "项目名称",
            MonitoredField::Time => "时间",
            MonitoredField::Amount => "数量",
            MonitoredField::Points => "积分要求",
            MonitoredField::Type => "类型",
            MonitoredField::Completed => "状态",
        }
    }
}
