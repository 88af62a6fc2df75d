//! The activity store.
//!
//! Sole mediator between the rest of the application and the persisted
//! collection of activity records. Views hold only transient snapshots
//! obtained from [`ActivityStore::read_all`]; they must never assume a
//! snapshot stays fresh without re-reading.

use chrono::Utc;
use tracing::{debug, info, warn};

use crate::{
    domain::{Activity, ActivityDraft, ActivityId, ActivityPatch, IdGenerator, seed_activities},
    notify::{ChangeNotifier, Subscription},
    storage::{Storage, StorageError, document},
};

/// The storage slot the collection is persisted under by default.
pub const DEFAULT_SLOT: &str = "activities";

/// The store owning canonical read and write access to the activity
/// collection.
///
/// The collection lives in a single slot of the injected [`Storage`]
/// capability, serialized as a versioned document. All operations are
/// synchronous and run to completion; a single logical writer is assumed.
/// Two stores over one shared backend race, and the later write wins.
#[derive(Debug)]
pub struct ActivityStore<S> {
    storage: S,
    slot: String,
    ids: IdGenerator,
    notifier: ChangeNotifier,
}

impl<S: Storage> ActivityStore<S> {
    /// Creates a store over the given backend, using the default slot.
    #[must_use]
    pub fn new(storage: S) -> Self {
        Self::with_slot(storage, DEFAULT_SLOT)
    }

    /// Creates a store persisting under a custom slot key.
    #[must_use]
    pub fn with_slot(storage: S, slot: impl Into<String>) -> Self {
        Self {
            storage,
            slot: slot.into(),
            ids: IdGenerator::new(),
            notifier: ChangeNotifier::new(),
        }
    }

    /// Returns the full current collection.
    ///
    /// This operation never fails visibly:
    ///
    /// - If no collection has been persisted yet, the slot is initialized
    ///   with the fixed seed collection and the seed is returned.
    /// - If the backend reports that storage is unavailable in this
    ///   context, the seed is returned without attempting to persist it.
    /// - If the persisted content is malformed, it is discarded in favour
    ///   of the seed; the failure is logged, never propagated.
    #[must_use]
    pub fn read_all(&self) -> Vec<Activity> {
        match self.storage.get(&self.slot) {
            Ok(Some(raw)) => match document::decode(&raw) {
                Ok(records) => records,
                Err(err) => {
                    warn!("discarding malformed activity document: {err}");
                    self.seed_slot()
                }
            },
            Ok(None) => self.seed_slot(),
            Err(StorageError::Unavailable) => {
                debug!("storage unavailable; serving the seed collection");
                seed_activities()
            }
            Err(err) => {
                warn!("failed to read the activity collection: {err}");
                seed_activities()
            }
        }
    }

    /// Replaces the entire persisted collection with `records`, verbatim.
    ///
    /// No merging and no validation of uniqueness or field shape happens at
    /// this layer; callers own the shape of what they write. This does not
    /// raise the change notification — only the record-level mutations do.
    ///
    /// # Errors
    ///
    /// Returns a [`PersistenceError`] if the underlying write fails.
    pub fn write_all(&self, records: &[Activity]) -> Result<(), PersistenceError> {
        self.persist(records)
    }

    /// Assigns a fresh identifier to `draft`, appends the resulting record
    /// to the collection, persists, and returns the stored record.
    ///
    /// A missing image URL is derived from the draft's kind. Creation does
    /// not broadcast a change: creation flows navigate away, and the
    /// destination view re-reads on mount.
    ///
    /// # Errors
    ///
    /// Returns a [`PersistenceError`] if the underlying write fails. The
    /// write is not retried.
    pub fn create(&self, draft: ActivityDraft) -> Result<Activity, PersistenceError> {
        let record = draft.into_activity(self.ids.mint());

        let mut records = self.read_all();
        records.push(record.clone());
        self.persist(&records)?;

        info!("created activity {}", record.id);
        Ok(record)
    }

    /// Merges `patch` over the record with the given identifier and stamps
    /// its `updated_at`, then persists and broadcasts a change.
    ///
    /// An unknown identifier is a no-op: the call returns `Ok(())`, nothing
    /// is persisted, and no change is broadcast.
    ///
    /// # Errors
    ///
    /// Returns a [`PersistenceError`] if the underlying write fails.
    pub fn update(&self, id: &ActivityId, patch: ActivityPatch) -> Result<(), PersistenceError> {
        let mut records = self.read_all();
        let Some(record) = records.iter_mut().find(|record| record.id == *id) else {
            debug!("update for unknown activity {id}; nothing to do");
            return Ok(());
        };

        record.apply(patch);
        record.updated_at = Some(Utc::now());
        self.persist(&records)?;
        self.notifier.notify();

        info!("updated activity {id}");
        Ok(())
    }

    /// Removes the record with the given identifier, if present, then
    /// persists and broadcasts a change.
    ///
    /// Deleting an absent identifier is a harmless no-op on the collection;
    /// the (unchanged) collection is still persisted and the change still
    /// broadcast, so repeated deletes are idempotent.
    ///
    /// # Errors
    ///
    /// Returns a [`PersistenceError`] if the underlying write fails.
    pub fn delete(&self, id: &ActivityId) -> Result<(), PersistenceError> {
        let mut records = self.read_all();
        let before = records.len();
        records.retain(|record| record.id != *id);
        let removed = records.len() != before;

        self.persist(&records)?;
        self.notifier.notify();

        if removed {
            info!("deleted activity {id}");
        } else {
            debug!("delete for unknown activity {id}");
        }
        Ok(())
    }

    /// Registers `callback` to run after every mutation that broadcasts a
    /// change (`update` and `delete`).
    ///
    /// The callback stays registered for as long as the returned
    /// [`Subscription`] lives; a view drops it on unmount.
    pub fn subscribe(&self, callback: impl Fn() + Send + Sync + 'static) -> Subscription {
        self.notifier.subscribe(callback)
    }

    /// Initializes the slot with the seed collection and returns it.
    ///
    /// A failed write is masked: first-run seeding must not turn a read
    /// into a visible failure.
    fn seed_slot(&self) -> Vec<Activity> {
        let records = seed_activities();
        match document::encode(&records) {
            Ok(raw) => {
                if let Err(err) = self.storage.set(&self.slot, &raw) {
                    debug!("failed to persist the seed collection: {err}");
                }
            }
            Err(err) => debug!("failed to serialize the seed collection: {err}"),
        }
        records
    }

    fn persist(&self, records: &[Activity]) -> Result<(), PersistenceError> {
        let raw = document::encode(records)?;
        self.storage.set(&self.slot, &raw)?;
        Ok(())
    }
}

/// The persisted collection could not be written.
///
/// This is the only error that crosses the store boundary; read-side
/// failures are recovered internally by falling back to the seed
/// collection.
#[derive(Debug, thiserror::Error)]
pub enum PersistenceError {
    /// The collection could not be serialized.
    #[error("failed to serialize the activity collection: {0}")]
    Serialize(#[from] serde_json::Error),
    /// The backend rejected the write.
    #[error("failed to write the activity collection: {0}")]
    Storage(#[from] StorageError),
}

#[cfg(test)]
mod tests {
    use std::sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    };

    use chrono::NaiveDate;
    use nonempty::nonempty;
    use tempfile::TempDir;

    use super::ActivityStore;
    use crate::{
        domain::{
            Activity, ActivityDraft, ActivityId, ActivityKind, ActivityPatch, ActivityStatus,
            seed_activities,
        },
        storage::{FileStorage, MemoryStorage, NullStorage, Storage},
    };

    fn draft(title: &str, kind: ActivityKind) -> ActivityDraft {
        ActivityDraft {
            title: title.to_string(),
            description: "Uma descrição suficientemente longa.".to_string(),
            kind,
            status: ActivityStatus::Pending,
            start_date: NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2025, 5, 30).unwrap(),
            time: None,
            location: "Bloco A".to_string(),
            coordinator: "Prof. Teste".to_string(),
            participants: 30,
            tags: nonempty!["teste".to_string()],
            image_url: None,
            requirements: None,
        }
    }

    #[test]
    fn empty_slot_seeds_and_persists_the_sample_collection() {
        let storage = MemoryStorage::new();
        let store = ActivityStore::new(&storage);

        assert_eq!(store.read_all(), seed_activities());

        // The seed must now be persisted verbatim: a second read comes from
        // storage, not from a fresh seeding.
        assert!(storage.get("activities").unwrap().is_some());
        assert_eq!(store.read_all(), seed_activities());
    }

    #[test]
    fn unavailable_storage_serves_the_seed_without_persisting() {
        let store = ActivityStore::new(NullStorage);
        assert_eq!(store.read_all(), seed_activities());
    }

    #[test]
    fn malformed_document_falls_back_to_the_seed() {
        let storage = MemoryStorage::new();
        storage.set("activities", "{{{ not json").unwrap();

        let store = ActivityStore::new(&storage);
        assert_eq!(store.read_all(), seed_activities());
    }

    #[test]
    fn create_appends_and_returns_the_stored_record() {
        let store = ActivityStore::new(MemoryStorage::new());

        let record = store.create(draft("Test", ActivityKind::Course)).unwrap();

        assert!(!record.id.as_str().is_empty());
        assert_eq!(record.image_url.as_deref(), Some("/images/course.jpg"));

        let records = store.read_all();
        assert_eq!(records.len(), 11);
        assert_eq!(records.last().unwrap(), &record);
    }

    #[test]
    fn created_records_never_share_an_id() {
        let store = ActivityStore::new(MemoryStorage::new());

        let mut ids: Vec<ActivityId> = (0..50)
            .map(|i| {
                store
                    .create(draft(&format!("Atividade {i}"), ActivityKind::Other))
                    .unwrap()
                    .id
            })
            .collect();

        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 50);
    }

    #[test]
    fn update_merges_only_the_patched_fields() {
        let store = ActivityStore::new(MemoryStorage::new());
        let record = store
            .create(draft("Original", ActivityKind::Seminar))
            .unwrap();

        store
            .update(
                &record.id,
                ActivityPatch {
                    status: Some(ActivityStatus::Completed),
                    ..ActivityPatch::default()
                },
            )
            .unwrap();

        let records = store.read_all();
        let updated = records.iter().find(|a| a.id == record.id).unwrap();

        assert_eq!(updated.status, ActivityStatus::Completed);
        assert!(updated.updated_at.is_some());

        // Every other field is untouched.
        let mut expected = record;
        expected.status = ActivityStatus::Completed;
        expected.updated_at = updated.updated_at;
        assert_eq!(updated, &expected);
    }

    #[test]
    fn update_of_unknown_id_is_a_silent_no_op() {
        let store = ActivityStore::new(MemoryStorage::new());
        let before = store.read_all();

        store
            .update(
                &ActivityId::from("nonexistent-id"),
                ActivityPatch {
                    title: Some("X".to_string()),
                    ..ActivityPatch::default()
                },
            )
            .unwrap();

        assert_eq!(store.read_all(), before);
    }

    #[test]
    fn delete_is_idempotent() {
        let store = ActivityStore::new(MemoryStorage::new());
        let record = store.create(draft("Efêmera", ActivityKind::Other)).unwrap();

        store.delete(&record.id).unwrap();
        let after_first = store.read_all();
        assert!(after_first.iter().all(|a| a.id != record.id));

        store.delete(&record.id).unwrap();
        assert_eq!(store.read_all(), after_first);
    }

    #[test]
    fn write_all_round_trips_in_order() {
        let store = ActivityStore::new(MemoryStorage::new());

        let mut records = seed_activities();
        records.reverse();
        store.write_all(&records).unwrap();

        assert_eq!(store.read_all(), records);
    }

    #[test]
    fn write_all_accepts_an_empty_collection() {
        let store = ActivityStore::new(MemoryStorage::new());
        store.write_all(&[]).unwrap();
        assert_eq!(store.read_all(), Vec::<Activity>::new());
    }

    #[test]
    fn update_and_delete_broadcast_a_change() {
        let store = ActivityStore::new(MemoryStorage::new());
        let record = store.create(draft("Observada", ActivityKind::Course)).unwrap();

        let seen = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&seen);
        let _subscription = store.subscribe(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        store
            .update(
                &record.id,
                ActivityPatch {
                    status: Some(ActivityStatus::InProgress),
                    ..ActivityPatch::default()
                },
            )
            .unwrap();
        assert_eq!(seen.load(Ordering::SeqCst), 1);

        store.delete(&record.id).unwrap();
        assert_eq!(seen.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn create_and_write_all_do_not_broadcast() {
        let store = ActivityStore::new(MemoryStorage::new());

        let seen = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&seen);
        let _subscription = store.subscribe(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        store.create(draft("Silenciosa", ActivityKind::Course)).unwrap();
        store.write_all(&seed_activities()).unwrap();

        assert_eq!(seen.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn update_of_unknown_id_does_not_broadcast() {
        let store = ActivityStore::new(MemoryStorage::new());

        let seen = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&seen);
        let _subscription = store.subscribe(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        store
            .update(&ActivityId::from("missing"), ActivityPatch::default())
            .unwrap();

        assert_eq!(seen.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn callbacks_can_re_read_the_store() {
        let store = Arc::new(ActivityStore::new(Arc::new(MemoryStorage::new())));
        let record = store.create(draft("Relida", ActivityKind::Course)).unwrap();

        let observed = Arc::new(AtomicUsize::new(0));
        let observed_len = Arc::clone(&observed);
        let handle = Arc::clone(&store);
        let _subscription = store.subscribe(move || {
            observed_len.store(handle.read_all().len(), Ordering::SeqCst);
        });

        store.delete(&record.id).unwrap();

        assert_eq!(observed.load(Ordering::SeqCst), 10);
    }

    #[test]
    fn collection_survives_a_store_rebuild_on_disk() {
        let tmp = TempDir::new().unwrap();

        let created = {
            let store = ActivityStore::new(FileStorage::new(tmp.path().to_path_buf()));
            store.create(draft("Persistida", ActivityKind::Research)).unwrap()
        };

        let store = ActivityStore::new(FileStorage::new(tmp.path().to_path_buf()));
        let records = store.read_all();
        assert_eq!(records.len(), 11);
        assert!(records.iter().any(|a| a.id == created.id));
    }

    #[test]
    fn legacy_document_in_the_slot_is_migrated_on_read() {
        let storage = MemoryStorage::new();
        storage
            .set(
                "activities",
                r#"[{
                    "id": "42",
                    "title": "Curso Antigo",
                    "description": "Persistido pela versão anterior.",
                    "type": "COURSE",
                    "status": "UPCOMING",
                    "startDate": "2024-03-01",
                    "endDate": "2024-05-30",
                    "location": "Bloco B",
                    "coordinator": "Prof. Antigo",
                    "participants": 20,
                    "tags": ["legado"]
                }]"#,
            )
            .unwrap();

        let store = ActivityStore::new(&storage);
        let records = store.read_all();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id.as_str(), "42");
        assert_eq!(records[0].status, ActivityStatus::Pending);
    }

    #[test]
    fn custom_slot_keys_are_honoured() {
        let storage = MemoryStorage::new();
        let store = ActivityStore::with_slot(&storage, "agenda");

        assert_eq!(store.read_all().len(), 10);

        assert!(storage.get("agenda").unwrap().is_some());
        assert!(storage.get("activities").unwrap().is_none());
    }

    #[test]
    fn null_storage_surfaces_the_write_failure() {
        let store = ActivityStore::new(NullStorage);
        assert!(store.create(draft("Perdida", ActivityKind::Other)).is_err());
        assert!(store.write_all(&[]).is_err());
    }
}
