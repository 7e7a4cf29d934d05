//! File-backed preference store.
//!
//! All keys live in one JSON object file. The file is read once at open
//! and rewritten on every mutation.

use crate::model::StoreError;
use crate::store::PreferenceStore;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Preference store persisted as a JSON object on disk.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileStore {
    /// Open the store at `path`.
    ///
    /// A missing file opens as an empty store. A file that is not a JSON
    /// object of strings also opens empty (with a warning) and is
    /// overwritten on the next write.
    ///
    /// # Errors
    ///
    /// Returns error only if the file exists but cannot be read.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();

        if !path.exists() {
            debug!(path = ?path, "Preference file missing, starting empty");
            return Ok(Self {
                path,
                entries: BTreeMap::new(),
            });
        }

        let contents = std::fs::read_to_string(&path).map_err(|source| StoreError::Io {
            path: path.clone(),
            source,
        })?;

        let entries = match serde_json::from_str::<BTreeMap<String, String>>(&contents) {
            Ok(entries) => entries,
            Err(e) => {
                warn!(path = ?path, error = %e, "Corrupt preference file, ignoring contents");
                BTreeMap::new()
            }
        };

        Ok(Self { path, entries })
    }

    /// Backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|source| StoreError::Io {
                    path: parent.to_path_buf(),
                    source,
                })?;
            }
        }
        let contents = serde_json::to_string_pretty(&self.entries)?;
        std::fs::write(&self.path, contents).map_err(|source| StoreError::Io {
            path: self.path.clone(),
            source,
        })
    }
}

impl PreferenceStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value.to_string());
        self.flush()
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        if self.entries.remove(key).is_some() {
            self.flush()
        } else {
            Ok(())
        }
    }
}

/// Resolve the default preference file path.
///
/// Returns `~/.local/state/recview/preferences.json` on Unix-like systems,
/// or the platform state directory elsewhere. Falls back to the current
/// directory if no state directory can be determined.
pub fn default_preferences_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("recview").join("preferences.json")
    } else {
        PathBuf::from("recview-preferences.json")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("recview_store_{}_{}", name, std::process::id()))
            .join("preferences.json")
    }

    #[test]
    fn open_missing_file_is_empty() {
        let path = temp_path("missing");
        let _ = fs::remove_dir_all(path.parent().unwrap());

        let store = FileStore::open(&path).expect("missing file is not an error");
        assert_eq!(store.get("anything").unwrap(), None);
    }

    #[test]
    fn set_persists_across_reopen() {
        let path = temp_path("reopen");
        let _ = fs::remove_dir_all(path.parent().unwrap());

        let mut store = FileStore::open(&path).unwrap();
        store.set("inv_viewMode", "table").unwrap();
        drop(store);

        let reopened = FileStore::open(&path).unwrap();
        assert_eq!(
            reopened.get("inv_viewMode").unwrap(),
            Some("table".to_string())
        );

        let _ = fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn remove_persists_across_reopen() {
        let path = temp_path("remove");
        let _ = fs::remove_dir_all(path.parent().unwrap());

        let mut store = FileStore::open(&path).unwrap();
        store.set("a", "1").unwrap();
        store.remove("a").unwrap();
        drop(store);

        let reopened = FileStore::open(&path).unwrap();
        assert_eq!(reopened.get("a").unwrap(), None);

        let _ = fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn corrupt_file_opens_empty() {
        let path = temp_path("corrupt");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "{ not json").unwrap();

        let store = FileStore::open(&path).expect("corrupt file should not fail open");
        assert_eq!(store.get("a").unwrap(), None);

        let _ = fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn default_preferences_path_ends_with_file_name() {
        let path = default_preferences_path();
        let text = path.to_string_lossy();
        assert!(
            text.ends_with("preferences.json"),
            "unexpected default path: {text}"
        );
    }
}
