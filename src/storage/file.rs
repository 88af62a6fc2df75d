use std::{fs, io, path::PathBuf};

use super::{Storage, StorageError};

/// A storage backend keeping each slot in its own file under a root
/// directory.
///
/// The slot named `activities` lives at `{root}/activities.json`. A missing
/// file reads as an empty slot; writes create the root directory on demand
/// and replace the file wholesale.
#[derive(Debug, Clone)]
pub struct FileStorage {
    root: PathBuf,
}

impl FileStorage {
    /// Creates a backend rooted at the given directory.
    ///
    /// The directory does not need to exist until the first write.
    #[must_use]
    pub const fn new(root: PathBuf) -> Self {
        Self { root }
    }

    fn slot_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }
}

impl Storage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        match fs::read_to_string(self.slot_path(key)) {
            Ok(contents) => Ok(Some(contents)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        fs::create_dir_all(&self.root)?;
        fs::write(self.slot_path(key), value)?;
        Ok(())
    }
}
