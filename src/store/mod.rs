use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;
use tempfile::NamedTempFile;
use tracing::{debug, info, warn};

use crate::error::AppResult;

pub mod calendar;
pub mod courses;
pub mod drivers;
pub mod schedule;
pub mod vehicles;

/// Owner of the data directory. Every aggregate lives in its own JSON file;
/// the typed stores in the submodules go through this handle.
#[derive(Clone, Debug)]
pub struct JsonStore {
    dir: PathBuf,
}

impl JsonStore {
    pub fn new<P: Into<PathBuf>>(dir: P) -> AppResult<Self> {
        let dir = dir.into();
        info!(target: "app::store", data_dir = %dir.display(), "initializing data store");
        if !dir.exists() {
            fs::create_dir_all(&dir)?;
        }
        Ok(Self { dir })
    }

    pub fn path_for(&self, file_name: &str) -> PathBuf {
        self.dir.join(file_name)
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Load one aggregate, falling back to its default when the file is
    /// missing, empty or unreadable. Bad data never aborts a run.
    pub(crate) fn read_or_default<T>(&self, file_name: &str) -> T
    where
        T: DeserializeOwned + Default,
    {
        let path = self.path_for(file_name);
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => {
                debug!(target: "app::store", file = file_name, "file not found, using defaults");
                return T::default();
            }
            Err(error) => {
                warn!(target: "app::store", file = file_name, %error, "read failed, using defaults");
                return T::default();
            }
        };

        if content.trim().is_empty() {
            debug!(target: "app::store", file = file_name, "file empty, using defaults");
            return T::default();
        }

        match serde_json::from_str(&content) {
            Ok(value) => value,
            Err(error) => {
                warn!(target: "app::store", file = file_name, %error, "parse failed, using defaults");
                T::default()
            }
        }
    }

    /// Serialize pretty-printed and atomically replace the target file.
    /// Readers only ever see a complete old or new file; concurrent writers
    /// serialize on the rename and the last one wins.
    pub(crate) fn write_atomic<T>(&self, file_name: &str, value: &T) -> AppResult<()>
    where
        T: Serialize,
    {
        let path = self.path_for(file_name);
        let mut temp = NamedTempFile::new_in(&self.dir)?;
        serde_json::to_writer_pretty(&mut temp, value)?;
        temp.flush()?;
        temp.persist(&path)?;
        debug!(target: "app::store", file = file_name, "file saved");
        Ok(())
    }
}
