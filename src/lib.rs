//! Client-side Activity Management
//!
//! Activity records are kept as a single serialized collection in a
//! key-value storage slot. The [`ActivityStore`] mediates every read and
//! write of that slot and broadcasts a change signal to subscribed views.

pub mod domain;
pub use domain::{
    Activity, ActivityDraft, ActivityFilter, ActivityId, ActivityKind, ActivityPatch,
    ActivityStatus, StatusSummary,
};

/// Change broadcasting between the store and mounted views.
pub mod notify;
pub use notify::{ChangeNotifier, Subscription};

/// Key-value storage capabilities and backends.
pub mod storage;
pub use storage::{FileStorage, MemoryStorage, NullStorage, Storage, StorageError};

mod store;
pub use store::{ActivityStore, DEFAULT_SLOT, PersistenceError};
