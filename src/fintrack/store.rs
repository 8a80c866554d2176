//! Durable slots on disk: one JSON file per key inside the data directory.

use fintrack_core::{store::DurableStore, Error};
use std::{
    fs, io,
    path::{Path, PathBuf},
};
use tracing::warn;

#[derive(Clone, Debug)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// File backing `key`.
    ///
    /// # Errors
    /// Returns [`Error::StorageUnavailable`] for keys that are not a plain file name.
    pub fn path(&self, key: &str) -> Result<PathBuf, Error> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(Error::StorageUnavailable(format!("invalid slot key: {key:?}")));
        }
        Ok(self.dir.join(format!("{key}.json")))
    }
}

fn unavailable(path: &Path, err: &io::Error) -> Error {
    Error::StorageUnavailable(format!("{}: {err}", path.display()))
}

impl DurableStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, Error> {
        let path = self.path(key)?;
        match fs::read_to_string(&path) {
            Ok(value) => Ok(Some(value)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(unavailable(&path, &err)),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), Error> {
        let path = self.path(key)?;
        fs::create_dir_all(&self.dir).map_err(|err| unavailable(&self.dir, &err))?;

        // write-then-rename so a crash never leaves a truncated record behind
        let staging = path.with_extension("json.tmp");
        fs::write(&staging, value).map_err(|err| unavailable(&staging, &err))?;
        fs::rename(&staging, &path).map_err(|err| {
            if let Err(cleanup) = fs::remove_file(&staging) {
                warn!(path = %staging.display(), "failed to remove staging file: {cleanup}");
            }
            unavailable(&path, &err)
        })
    }

    fn remove(&self, key: &str) -> Result<(), Error> {
        let path = self.path(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(unavailable(&path, &err)),
        }
    }
}
