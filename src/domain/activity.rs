use std::{fmt, str::FromStr};

use chrono::{DateTime, NaiveDate, Utc};
use nonempty::NonEmpty;
use serde::{Deserialize, Serialize};

use crate::domain::ActivityId;

/// The category of an activity.
///
/// Serialized in its canonical wire form (`"COURSE"`, `"WORKSHOP"`, ...),
/// which is also the form produced by [`ActivityKind::as_str`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActivityKind {
    /// A taught course running over several weeks.
    Course,
    /// A short, hands-on workshop.
    Workshop,
    /// A seminar or talk.
    Seminar,
    /// A research project.
    Research,
    /// A community extension program.
    Extension,
    /// Anything that does not fit the categories above.
    Other,
}

impl ActivityKind {
    /// The canonical wire form of the kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Course => "COURSE",
            Self::Workshop => "WORKSHOP",
            Self::Seminar => "SEMINAR",
            Self::Research => "RESEARCH",
            Self::Extension => "EXTENSION",
            Self::Other => "OTHER",
        }
    }

    /// The default image path for activities of this kind.
    ///
    /// Used by the creation flow whenever no image URL is supplied.
    #[must_use]
    pub fn image_path(self) -> String {
        format!("/images/{}.jpg", self.as_str().to_lowercase())
    }
}

impl fmt::Display for ActivityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActivityKind {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "COURSE" => Ok(Self::Course),
            "WORKSHOP" => Ok(Self::Workshop),
            "SEMINAR" => Ok(Self::Seminar),
            "RESEARCH" => Ok(Self::Research),
            "EXTENSION" => Ok(Self::Extension),
            "OTHER" => Ok(Self::Other),
            _ => Err(ParseEnumError {
                value: s.to_string(),
                expected: "activity kind",
            }),
        }
    }
}

/// The lifecycle status of an activity.
///
/// The canonical value set is `PENDING`, `IN_PROGRESS`, `COMPLETED` and
/// `CANCELLED`. Documents written by earlier revisions of the application
/// used `UPCOMING` and `ACTIVE` for the first two states; those spellings
/// are still accepted when deserializing and normalize to the canonical
/// variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActivityStatus {
    /// Scheduled, but not yet started.
    #[serde(alias = "UPCOMING")]
    Pending,
    /// Currently running.
    #[serde(alias = "ACTIVE")]
    InProgress,
    /// Finished.
    Completed,
    /// Called off.
    Cancelled,
}

impl ActivityStatus {
    /// The canonical wire form of the status.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::InProgress => "IN_PROGRESS",
            Self::Completed => "COMPLETED",
            Self::Cancelled => "CANCELLED",
        }
    }
}

impl fmt::Display for ActivityStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActivityStatus {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PENDING" | "UPCOMING" => Ok(Self::Pending),
            "IN_PROGRESS" | "ACTIVE" => Ok(Self::InProgress),
            "COMPLETED" => Ok(Self::Completed),
            "CANCELLED" => Ok(Self::Cancelled),
            _ => Err(ParseEnumError {
                value: s.to_string(),
                expected: "activity status",
            }),
        }
    }
}

/// Error returned when a string is not a recognized enumeration value.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("'{value}' is not a valid {expected}")]
pub struct ParseEnumError {
    value: String,
    expected: &'static str,
}

/// A single activity record.
///
/// This is the shared contract between the store and the form collaborators.
/// The store does not validate field contents; length and ordering rules
/// (non-empty title, `end_date >= start_date`, and so on) are enforced by
/// the forms before a record reaches the store. The one structural guarantee
/// is that `tags` always holds at least one entry.
///
/// Serialized field names follow the persisted document layout
/// (`startDate`, `imageUrl`, ...), with the kind stored under `type`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    /// Unique identifier, assigned at creation and immutable thereafter.
    pub id: ActivityId,
    /// Display title.
    pub title: String,
    /// Longer description shown on the detail page.
    pub description: String,
    /// Category of the activity.
    #[serde(rename = "type")]
    pub kind: ActivityKind,
    /// Lifecycle status.
    pub status: ActivityStatus,
    /// First day of the activity.
    pub start_date: NaiveDate,
    /// Last day of the activity.
    pub end_date: NaiveDate,
    /// Free-form display string for the daily schedule (e.g. `"18:30 - 22:00"`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    /// Where the activity takes place.
    pub location: String,
    /// Person responsible for the activity.
    pub coordinator: String,
    /// Number of available places.
    pub participants: u32,
    /// Display tags, in insertion order. Always at least one.
    pub tags: NonEmpty<String>,
    /// Image shown on cards and detail pages.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Prerequisites for enrolling.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requirements: Option<Vec<String>>,
    /// Stamped by the store on every update mutation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Activity {
    /// Merges the fields present in `patch` over this record.
    ///
    /// Absent fields are left untouched. Optional fields (`time`,
    /// `image_url`, `requirements`) can be replaced but not cleared through
    /// a patch. The identifier is never patched, and `updated_at` is stamped
    /// by the store rather than carried by the patch.
    pub fn apply(&mut self, patch: ActivityPatch) {
        let ActivityPatch {
            title,
            description,
            kind,
            status,
            start_date,
            end_date,
            time,
            location,
            coordinator,
            participants,
            tags,
            image_url,
            requirements,
        } = patch;

        if let Some(title) = title {
            self.title = title;
        }
        if let Some(description) = description {
            self.description = description;
        }
        if let Some(kind) = kind {
            self.kind = kind;
        }
        if let Some(status) = status {
            self.status = status;
        }
        if let Some(start_date) = start_date {
            self.start_date = start_date;
        }
        if let Some(end_date) = end_date {
            self.end_date = end_date;
        }
        if let Some(time) = time {
            self.time = Some(time);
        }
        if let Some(location) = location {
            self.location = location;
        }
        if let Some(coordinator) = coordinator {
            self.coordinator = coordinator;
        }
        if let Some(participants) = participants {
            self.participants = participants;
        }
        if let Some(tags) = tags {
            self.tags = tags;
        }
        if let Some(image_url) = image_url {
            self.image_url = Some(image_url);
        }
        if let Some(requirements) = requirements {
            self.requirements = Some(requirements);
        }
    }
}

/// An activity as submitted by the creation form, before the store has
/// assigned it an identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityDraft {
    /// Display title.
    pub title: String,
    /// Longer description shown on the detail page.
    pub description: String,
    /// Category of the activity.
    #[serde(rename = "type")]
    pub kind: ActivityKind,
    /// Lifecycle status.
    pub status: ActivityStatus,
    /// First day of the activity.
    pub start_date: NaiveDate,
    /// Last day of the activity.
    pub end_date: NaiveDate,
    /// Free-form display string for the daily schedule.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    /// Where the activity takes place.
    pub location: String,
    /// Person responsible for the activity.
    pub coordinator: String,
    /// Number of available places.
    pub participants: u32,
    /// Display tags, in insertion order. Always at least one.
    pub tags: NonEmpty<String>,
    /// Image shown on cards and detail pages. Derived from the kind when
    /// absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Prerequisites for enrolling.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requirements: Option<Vec<String>>,
}

impl ActivityDraft {
    /// Promotes the draft to a full record under the given identifier.
    ///
    /// A missing image URL is derived from the kind
    /// (see [`ActivityKind::image_path`]).
    #[must_use]
    pub fn into_activity(self, id: ActivityId) -> Activity {
        let image_url = self.image_url.unwrap_or_else(|| self.kind.image_path());
        Activity {
            id,
            title: self.title,
            description: self.description,
            kind: self.kind,
            status: self.status,
            start_date: self.start_date,
            end_date: self.end_date,
            time: self.time,
            location: self.location,
            coordinator: self.coordinator,
            participants: self.participants,
            tags: self.tags,
            image_url: Some(image_url),
            requirements: self.requirements,
            updated_at: None,
        }
    }
}

/// A partial record merged over an existing activity by the update
/// mutation.
///
/// Every field is optional; absent fields leave the record untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ActivityPatch {
    /// Replacement title.
    pub title: Option<String>,
    /// Replacement description.
    pub description: Option<String>,
    /// Replacement kind.
    #[serde(rename = "type")]
    pub kind: Option<ActivityKind>,
    /// Replacement status.
    pub status: Option<ActivityStatus>,
    /// Replacement first day.
    pub start_date: Option<NaiveDate>,
    /// Replacement last day.
    pub end_date: Option<NaiveDate>,
    /// Replacement schedule string.
    pub time: Option<String>,
    /// Replacement location.
    pub location: Option<String>,
    /// Replacement coordinator.
    pub coordinator: Option<String>,
    /// Replacement number of places.
    pub participants: Option<u32>,
    /// Replacement tag list.
    pub tags: Option<NonEmpty<String>>,
    /// Replacement image URL.
    pub image_url: Option<String>,
    /// Replacement prerequisites.
    pub requirements: Option<Vec<String>>,
}
