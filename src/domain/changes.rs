// src/domain/changes.rs

use crate::domain::listing::{Listing, MonitoredField};
use crate::domain::normalize::{normalize, TBA};
use crate::domain::snapshot::Snapshot;
use serde::Serialize;

/// A single field that moved between the stored snapshot and the feed.
/// Both sides are normalized; an empty side is shown as the TBA placeholder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChangeRecord {
    /// Display label of the field, e.g. "数量".
    pub field: String,
    pub old: String,
    pub new: String,
}

/// Compares every monitored field in [`MonitoredField::ALL`] order.
///
/// Fields that are empty on both sides carry no information and are skipped.
/// Neither input is modified.
pub fn detect_changes(old: &Snapshot, new: &Listing) -> Vec<ChangeRecord> {
    let mut changes = Vec::new();

    for field in MonitoredField::ALL {
        let before = normalize(Some(old.get(field)), field);
        let after = normalize(new.get(field), field);

        if before.is_empty() && after.is_empty() {
            continue;
        }

        if before != after {
            changes.push(ChangeRecord {
                field: field.label().to_string(),
                old: or_tba(before),
                new: or_tba(after),
            });
        }
    }

    changes
}

fn or_tba(value: String) -> String {
    if value.is_empty() {
        TBA.to_string()
    } else {
        value
    }
}
