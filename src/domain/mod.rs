pub mod changes;
pub mod identity;
pub mod listing;
pub mod normalize;
pub mod notify;
pub mod snapshot;

pub use changes::detect_changes;
pub use identity::derive_key;
pub use listing::Listing;
pub use notify::{Notification, NotificationKind};
pub use snapshot::Snapshot;
