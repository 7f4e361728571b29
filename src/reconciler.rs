// src/reconciler.rs

use crate::db::{StateMap, StateStore};
use crate::domain::{derive_key, detect_changes, Listing, Notification, NotificationKind, Snapshot};
use crate::errors::PassError;
use crate::scraper::ListingSource;
use tracing::{debug, info};

/// Runs reconciliation passes against one state document.
///
/// Snapshots are never deleted: a listing that drops out of the feed keeps
/// its last snapshot indefinitely.
pub struct Reconciler {
    store: StateStore,
    detail_url: String,
}

impl Reconciler {
    pub fn new(store: StateStore, detail_url: impl Into<String>) -> Self {
        Self {
            store,
            detail_url: detail_url.into(),
        }
    }

    /// One full pass: fetch, load, compare, save once.
    ///
    /// A fetch failure returns before the state document is touched. An empty
    /// result means the pass succeeded with nothing to report.
    pub fn check<S: ListingSource + ?Sized>(
        &self,
        source: &S,
    ) -> Result<Vec<Notification>, PassError> {
        let listings = source.fetch()?;

        let mut state = self.store.load();
        let notifications = reconcile(&listings, &mut state, &self.detail_url);
        self.store.save(&state)?;

        let new = notifications
            .iter()
            .filter(|n| n.kind == NotificationKind::New)
            .count();
        info!(
            listings = listings.len(),
            new,
            updated = notifications.len() - new,
            "✅ check pass complete"
        );

        Ok(notifications)
    }

    /// Replaces the state document with snapshots of the current feed
    /// without reporting anything. Returns the number of stored keys.
    pub fn initialize<S: ListingSource + ?Sized>(&self, source: &S) -> Result<usize, PassError> {
        let listings = source.fetch()?;

        let state = seed(&listings);
        self.store.save(&state)?;

        info!(
            path = %self.store.path().display(),
            keys = state.len(),
            "✅ state initialized"
        );
        Ok(state.len())
    }
}

/// Applies one batch to `state` in batch order and returns what to report.
pub fn reconcile(listings: &[Listing], state: &mut StateMap, detail_url: &str) -> Vec<Notification> {
    let mut notifications = Vec::new();

    for listing in listings {
        let key = derive_key(listing);

        match state.get(&key) {
            None => {
                debug!(%key, "new listing");
                notifications.push(Notification::new_listing(listing, detail_url));
                state.insert(key, Snapshot::from_listing(listing));
            }
            Some(stored) => {
                let changes = detect_changes(stored, listing);
                if changes.is_empty() {
                    continue;
                }

                debug!(%key, changed = changes.len(), "listing changed");
                notifications.push(Notification::update(listing, &changes, detail_url));
                state.insert(key, Snapshot::from_listing(listing));
            }
        }
    }

    notifications
}

/// Fresh state holding a snapshot of every listing in the batch. Later
/// listings win when keys collide.
pub fn seed(listings: &[Listing]) -> StateMap {
    listings
        .iter()
        .map(|listing| (derive_key(listing), Snapshot::from_listing(listing)))
        .collect()
}
