// src/domain/notify.rs

use crate::domain::changes::ChangeRecord;
use crate::domain::listing::Listing;
use crate::domain::normalize::{raw_text, TBA};
use serde::Serialize;
use serde_json::Value;

pub const DEFAULT_DETAIL_URL: &str = "https://alpha123.uk/zh/";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    New,
    Update,
}

/// One line of output for the delivery job: `{"type", "text", "token"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    pub text: String,
    pub token: String,
}

impl Notification {
    pub fn new_listing(listing: &Listing, detail_url: &str) -> Self {
        Self {
            kind: NotificationKind::New,
            text: format_new(listing, detail_url),
            token: display_token(listing),
        }
    }

    pub fn update(listing: &Listing, changes: &[ChangeRecord], detail_url: &str) -> Self {
        Self {
            kind: NotificationKind::Update,
            text: format_update(listing, changes, detail_url),
            token: display_token(listing),
        }
    }
}

/// Human name for the listing type. Unknown types pass through unchanged.
pub fn type_label(raw: &str) -> &str {
    match raw {
        "tge" => "TGE",
        "grab" => "先到先得",
        "warning" => "预测",
        other => other,
    }
}

fn display_token(listing: &Listing) -> String {
    text_or(&listing.token, "?")
}

fn text_or(value: &Option<Value>, fallback: &str) -> String {
    value
        .as_ref()
        .map(raw_text)
        .unwrap_or_else(|| fallback.to_string())
}

/// Message for a listing seen for the first time. Values are shown raw.
pub fn format_new(listing: &Listing, detail_url: &str) -> String {
    let token = display_token(listing);
    let name = text_or(&listing.name, "?");
    let amount = text_or(&listing.amount, "-");
    let points = text_or(&listing.points, "-");
    let kind = text_or(&listing.kind, "");
    let time = text_or(&listing.time, "");

    let mut date = text_or(&listing.date, "");
    if date.is_empty() {
        date = TBA.to_string();
    }

    let mut when = if time.is_empty() {
        date
    } else {
        format!("{date} {time}")
    };
    // Only a numeric phase 2 marks the second stage.
    if listing.phase.as_ref().and_then(Value::as_f64) == Some(2.0) {
        when.push_str(" (二段)");
    }

    let mut lines = vec![
        format!("🎁 新 Alpha 空投: {token}"),
        format!("项目: {name}"),
        format!("时间: {when}"),
        format!("数量: {amount}"),
        format!("积分: {points}"),
    ];

    let label = type_label(&kind);
    if !label.is_empty() {
        lines.push(format!("类型: {label}"));
    }
    lines.push(format!("详情: {detail_url}"));

    lines.join("\n")
}

/// Message listing every changed field as `old → new`.
pub fn format_update(listing: &Listing, changes: &[ChangeRecord], detail_url: &str) -> String {
    let mut lines = vec![format!("📢 空投信息更新: {}", display_token(listing))];
    for change in changes {
        lines.push(format!("  {}: {} → {}", change.field, change.old, change.new));
    }
    lines.push(format!("详情: {detail_url}"));

    lines.join("\n")
}
