//! Domain models for activity management.
//!
//! This module contains the core domain types: the activity record itself,
//! its identifier, the fixed sample collection used to initialize empty
//! storage, and the pure query transformations applied by views over a
//! snapshot of the collection.

/// Activity record, its enumerations, and partial-update types.
pub mod activity;
pub use activity::{Activity, ActivityDraft, ActivityKind, ActivityPatch, ActivityStatus};

/// Opaque activity identifiers and their time-derived generator.
pub mod id;
pub use id::{ActivityId, IdGenerator};

/// Stateless filtering, search, and summary transformations.
pub mod query;
pub use query::{ActivityFilter, StatusSummary, filter, search, summarize};

mod seed;
pub use seed::seed_activities;
