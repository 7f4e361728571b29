// src/domain/identity.rs

use crate::domain::listing::Listing;
use crate::domain::normalize::raw_text;

/// Stands in for a missing token. All token-less listings with the same
/// date and phase share one key.
pub const UNKNOWN_TOKEN: &str = "UNKNOWN";
pub const DEFAULT_PHASE: &str = "1";

/// Stable state key `{token}_{date}_P{phase}`. Only identity fields feed the
/// key, so a listing keeps its key however the monitored fields change.
pub fn derive_key(listing: &Listing) -> String {
    let token = listing
        .token
        .as_ref()
        .map(raw_text)
        .unwrap_or_else(|| UNKNOWN_TOKEN.to_string());
    let date = listing.date.as_ref().map(raw_text).unwrap_or_default();
    let phase = listing
        .phase
        .as_ref()
        .map(raw_text)
        .unwrap_or_else(|| DEFAULT_PHASE.to_string());

    format!("{token}_{date}_P{phase}")
}
