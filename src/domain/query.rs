//! Stateless transformations over a snapshot of the collection.
//!
//! Filtering, search, and summary counting are not store responsibilities:
//! views obtain a snapshot with `read_all` and shape it locally with the
//! functions in this module. Nothing here touches storage.

use chrono::NaiveDate;

use crate::domain::{Activity, ActivityKind, ActivityStatus};

/// Criteria for narrowing a list of activities.
///
/// Absent criteria match everything; present criteria must all hold.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActivityFilter {
    /// Keep only activities of this kind.
    pub kind: Option<ActivityKind>,
    /// Keep only activities with this status.
    pub status: Option<ActivityStatus>,
    /// Case-insensitive term matched against title, description,
    /// coordinator, and every tag.
    pub search: Option<String>,
    /// Keep only activities starting on or after this day.
    pub start_from: Option<NaiveDate>,
    /// Keep only activities ending on or before this day.
    pub end_until: Option<NaiveDate>,
}

impl ActivityFilter {
    /// Whether the given activity satisfies every present criterion.
    #[must_use]
    pub fn matches(&self, activity: &Activity) -> bool {
        if self.kind.is_some_and(|kind| activity.kind != kind) {
            return false;
        }
        if self.status.is_some_and(|status| activity.status != status) {
            return false;
        }
        if self
            .start_from
            .is_some_and(|from| activity.start_date < from)
        {
            return false;
        }
        if self.end_until.is_some_and(|until| activity.end_date > until) {
            return false;
        }
        self.search
            .as_deref()
            .is_none_or(|term| contains_term(activity, term))
    }
}

/// Case-insensitive substring containment across the searchable fields:
/// title, description, coordinator, and any tag.
fn contains_term(activity: &Activity, term: &str) -> bool {
    let term = term.to_lowercase();
    activity.title.to_lowercase().contains(&term)
        || activity.description.to_lowercase().contains(&term)
        || activity.coordinator.to_lowercase().contains(&term)
        || activity
            .tags
            .iter()
            .any(|tag| tag.to_lowercase().contains(&term))
}

/// Returns the activities satisfying `filter`, preserving order.
#[must_use]
pub fn filter<'a>(activities: &'a [Activity], filter: &ActivityFilter) -> Vec<&'a Activity> {
    activities
        .iter()
        .filter(|activity| filter.matches(activity))
        .collect()
}

/// Returns the activities matching a free-text query, preserving order.
///
/// Same containment rule as [`ActivityFilter::search`].
#[must_use]
pub fn search<'a>(activities: &'a [Activity], query: &str) -> Vec<&'a Activity> {
    activities
        .iter()
        .filter(|activity| contains_term(activity, query))
        .collect()
}

/// Per-status record counts for the dashboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusSummary {
    /// Total number of records.
    pub total: usize,
    /// Records with status `PENDING`.
    pub pending: usize,
    /// Records with status `IN_PROGRESS`.
    pub in_progress: usize,
    /// Records with status `COMPLETED`.
    pub completed: usize,
    /// Records with status `CANCELLED`.
    pub cancelled: usize,
}

/// Counts records by status.
#[must_use]
pub fn summarize(activities: &[Activity]) -> StatusSummary {
    let mut summary = StatusSummary {
        total: activities.len(),
        ..StatusSummary::default()
    };
    for activity in activities {
        match activity.status {
            ActivityStatus::Pending => summary.pending += 1,
            ActivityStatus::InProgress => summary.in_progress += 1,
            ActivityStatus::Completed => summary.completed += 1,
            ActivityStatus::Cancelled => summary.cancelled += 1,
        }
    }
    summary
}
