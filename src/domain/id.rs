use std::{
    fmt,
    sync::{Mutex, PoisonError},
};

use chrono::Utc;
use serde::{Deserialize, Serialize};

/// The opaque identifier of an activity record.
///
/// Identifiers are unique within a collection, assigned when a record is
/// created, and never change afterwards. Views treat them as plain strings.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActivityId(String);

impl ActivityId {
    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for ActivityId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for ActivityId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl AsRef<str> for ActivityId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ActivityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A source of fresh, unique [`ActivityId`]s.
///
/// Identifiers are the current Unix time in milliseconds, rendered as a
/// decimal string. The generator remembers the last value it issued and
/// bumps past it whenever the clock has not advanced, so consecutive calls
/// never collide even within a single millisecond. Uniqueness is by
/// construction; the store never scans the collection for clashes.
#[derive(Debug, Default)]
pub struct IdGenerator {
    last: Mutex<i64>,
}

impl IdGenerator {
    /// Creates a generator with no issued identifiers.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Issues the next identifier.
    #[must_use]
    pub fn mint(&self) -> ActivityId {
        let now = Utc::now().timestamp_millis();
        let mut last = self.last.lock().unwrap_or_else(PoisonError::into_inner);
        let issued = if now > *last { now } else { *last + 1 };
        *last = issued;
        ActivityId(issued.to_string())
    }
}
