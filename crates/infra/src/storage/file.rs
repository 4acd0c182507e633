use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use edgeshield_core::KeyValueStore;
use edgeshield_domain::constants::ENV_STATE_PATH;
use edgeshield_domain::Result;
use parking_lot::Mutex;
use tracing::debug;

use crate::errors::InfraError;

/// Store persisted as a flat JSON object, e.g. `{"tenantId": "acme"}`.
///
/// Nothing is cached: every `get` reads the file, so writes made by another
/// instance or process are picked up on the next request. Writes go to a
/// sibling temporary file that is then renamed over the original, so a crash
/// never leaves a half-written state file behind.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl FileStore {
    /// Store backed by the JSON file at `path`. The file is created on the
    /// first `set`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into(), write_lock: Mutex::new(()) }
    }

    /// Store at `EDGESHIELD_STATE_PATH`, if that variable is set.
    pub fn from_env() -> Option<Self> {
        std::env::var(ENV_STATE_PATH)
            .ok()
            .filter(|path| !path.trim().is_empty())
            .map(Self::new)
    }

    /// Location of the state file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_entries(&self) -> Result<BTreeMap<String, String>> {
        match fs::read_to_string(&self.path) {
            Ok(contents) if contents.trim().is_empty() => Ok(BTreeMap::new()),
            Ok(contents) => Ok(serde_json::from_str(&contents).map_err(InfraError::from)?),
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "state file not found, starting empty");
                Ok(BTreeMap::new())
            }
            Err(err) => Err(InfraError::from(err).into()),
        }
    }

    fn persist(&self, entries: &BTreeMap<String, String>) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(InfraError::from)?;
        }

        let contents = serde_json::to_string_pretty(entries).map_err(InfraError::from)?;
        let staging = self.path.with_extension("tmp");
        fs::write(&staging, contents).map_err(InfraError::from)?;
        if let Err(err) = fs::rename(&staging, &self.path) {
            let _ = fs::remove_file(&staging);
            return Err(InfraError::from(err).into());
        }

        debug!(path = %self.path.display(), "state file written");
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.read_entries()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let _guard = self.write_lock.lock();
        let mut entries = self.read_entries()?;
        entries.insert(key.to_string(), value.to_string());
        self.persist(&entries)
    }
}

#[cfg(test)]
mod tests {
    use edgeshield_domain::ShieldError;
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn missing_file_reads_as_empty() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::new(dir.path().join("state.json"));

        assert_eq!(store.get("tenantId").unwrap(), None);
        assert!(!store.path().exists());
    }

    #[test]
    fn set_persists_across_instances() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested/state.json");

        FileStore::new(&path).set("tenantId", "acme").unwrap();
        let reopened = FileStore::new(&path);

        assert_eq!(reopened.get("tenantId").unwrap().as_deref(), Some("acme"));
        let raw: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(raw, serde_json::json!({"tenantId": "acme"}));
        assert!(!path.with_extension("tmp").exists());
    }

    #[test]
    fn set_keeps_other_keys() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("state.json");
        fs::write(&path, r#"{"theme": "dark"}"#).unwrap();

        let store = FileStore::new(&path);
        store.set("tenantId", "t-7").unwrap();

        let reopened = FileStore::new(&path);
        assert_eq!(reopened.get("theme").unwrap().as_deref(), Some("dark"));
        assert_eq!(reopened.get("tenantId").unwrap().as_deref(), Some("t-7"));
    }

    #[test]
    fn instances_on_one_path_see_each_others_writes() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("state.json");
        let first = FileStore::new(&path);
        let second = FileStore::new(&path);

        first.set("tenantId", "first").unwrap();
        assert_eq!(second.get("tenantId").unwrap().as_deref(), Some("first"));

        second.set("tenantId", "second").unwrap();
        assert_eq!(first.get("tenantId").unwrap().as_deref(), Some("second"));
    }

    #[test]
    fn failed_write_leaves_previous_value() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("state.json");
        let store = FileStore::new(&path);
        store.set("tenantId", "before").unwrap();

        // a directory in the staging slot makes the write fail
        fs::create_dir(path.with_extension("tmp")).unwrap();
        let result = store.set("tenantId", "after");

        assert!(matches!(result, Err(ShieldError::Storage(_))));
        assert_eq!(store.get("tenantId").unwrap().as_deref(), Some("before"));
    }

    #[test]
    fn failed_first_write_stores_nothing() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("state.json");
        fs::create_dir(path.with_extension("tmp")).unwrap();
        let store = FileStore::new(&path);

        assert!(matches!(store.set("tenantId", "acme"), Err(ShieldError::Storage(_))));
        assert!(!path.exists());
        assert_eq!(store.get("tenantId").unwrap(), None);
    }

    #[test]
    fn corrupt_file_reports_storage_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("state.json");
        fs::write(&path, "{broken").unwrap();

        let result = FileStore::new(&path).get("tenantId");
        assert!(matches!(result, Err(ShieldError::Storage(_))));
    }
}
