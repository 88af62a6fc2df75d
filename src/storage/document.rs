//! Versioned serialization of the persisted collection.
//!
//! The storage slot holds a JSON envelope carrying an explicit schema
//! version, so the layout can evolve without a guessing game at read time.
//! Documents written before the envelope existed were a bare JSON array of
//! records; those are still read and migrated forward.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::domain::Activity;

/// The serialized versions of the persisted collection.
///
/// This allows future changes to the document layout and to the record
/// shape without breaking compatibility.
#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "_version")]
enum Versions {
    #[serde(rename = "1")]
    V1 {
        /// The full record collection, in storage order.
        activities: Vec<Activity>,
    },
}

/// Serializes the collection into the current envelope layout.
pub(crate) fn encode(records: &[Activity]) -> Result<String, serde_json::Error> {
    serde_json::to_string(&Versions::V1 {
        activities: records.to_vec(),
    })
}

/// The persisted content could not be parsed as any known layout.
#[derive(Debug, thiserror::Error)]
#[error("malformed activity document: {0}")]
pub(crate) struct DecodeError(#[from] serde_json::Error);

/// Parses a persisted document, migrating legacy layouts forward.
///
/// The versioned envelope is tried first. Anything that is not a versioned
/// envelope is treated as the legacy layout: a bare array of records, with
/// the legacy status spellings (`UPCOMING`, `ACTIVE`) normalized on the
/// way in.
pub(crate) fn decode(raw: &str) -> Result<Vec<Activity>, DecodeError> {
    if let Ok(Versions::V1 { activities }) = serde_json::from_str(raw) {
        return Ok(activities);
    }
    decode_legacy(raw)
}

/// Migrates a legacy unversioned document.
///
/// The legacy writer never validated what it stored, so migration screens
/// record-by-record: entries that do not parse as records are skipped
/// rather than poisoning the whole collection.
fn decode_legacy(raw: &str) -> Result<Vec<Activity>, DecodeError> {
    let entries: Vec<serde_json::Value> = serde_json::from_str(raw)?;
    let total = entries.len();

    let activities: Vec<Activity> = entries
        .into_iter()
        .filter_map(|entry| match serde_json::from_value(entry) {
            Ok(activity) => Some(activity),
            Err(err) => {
                warn!("skipping malformed record in legacy document: {err}");
                None
            }
        })
        .collect();

    info!(
        "migrated legacy activity document ({} of {total} records)",
        activities.len()
    );
    Ok(activities)
}

#[cfg(test)]
mod tests {
    use super::{decode, encode};
    use crate::domain::{ActivityStatus, seed_activities};

    #[test]
    fn encode_then_decode_round_trips() {
        let records = seed_activities();
        let raw = encode(&records).unwrap();
        assert_eq!(decode(&raw).unwrap(), records);
    }

    #[test]
    fn envelope_carries_the_schema_version() {
        let raw = encode(&seed_activities()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value["_version"], "1");
        assert!(value["activities"].is_array());
    }

    #[test]
    fn legacy_bare_array_is_migrated() {
        let raw = r#"[{
            "id": "1",
            "title": "Curso de Programação Web",
            "description": "Aprenda desenvolvimento web.",
            "type": "COURSE",
            "status": "UPCOMING",
            "startDate": "2025-03-01",
            "endDate": "2025-05-30",
            "location": "Laboratório 1",
            "coordinator": "Prof. Carlos Silva",
            "participants": 30,
            "tags": ["web"]
        }]"#;

        let records = decode(raw).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].status, ActivityStatus::Pending);
        assert_eq!(records[0].id.as_str(), "1");
    }

    #[test]
    fn legacy_migration_screens_malformed_entries() {
        let raw = r#"[{"garbage": true}, {
            "id": "2",
            "title": "Workshop de Robótica",
            "description": "Hands-on com Arduino.",
            "type": "WORKSHOP",
            "status": "ACTIVE",
            "startDate": "2025-05-10",
            "endDate": "2025-05-12",
            "location": "Laboratório de Robótica",
            "coordinator": "Prof. Ricardo Alves",
            "participants": 25,
            "tags": ["arduino"]
        }]"#;

        let records = decode(raw).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].status, ActivityStatus::InProgress);
    }

    #[test]
    fn garbage_is_rejected() {
        assert!(decode("not json at all").is_err());
        assert!(decode(r#"{"_version": "99"}"#).is_err());
    }

    #[test]
    fn empty_collection_round_trips_without_falling_back() {
        let raw = encode(&[]).unwrap();
        assert_eq!(decode(&raw).unwrap(), Vec::new());
    }
}
