//! State persistence for the registry.
//!
//! # Storage layout
//!
//! ```text
//! ~/.tombola/
//!   config.json   (desk configuration — written by init, mode 0600)
//!   roster.json   (roster as a camelCase JSON array — mode 0600)
//!   counter       (decimal next-ticket value — mode 0600)
//! ```
//!
//! The roster and counter are deliberately two independent string values
//! behind the [`StateStore`] trait; the registry owns their encoding and
//! saves them one after the other, roster first. There is no cross-value
//! transaction.
//!
//! # API pattern
//!
//! Path-taking functions come in two forms:
//! - `fn_at(dir: &Path, …)` — explicit state dir; used in tests with `TempDir`
//! - `fn(…)` — derives the dir from `dirs::home_dir()`, delegates to `_at`
//!
//! Tests must NEVER call the no-arg wrappers; always use `_at`.

use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};

use log::{debug, warn};

use crate::error::RegistryError;
use crate::types::DeskConfig;

pub const CONFIG_FILE: &str = "config.json";
pub const ROSTER_FILE: &str = "roster.json";
pub const COUNTER_FILE: &str = "counter";

// ---------------------------------------------------------------------------
// 1. The store trait
// ---------------------------------------------------------------------------

/// Two named string slots, mirroring the web version's key-value storage:
/// one holds the roster as a JSON array, the other the stringified counter.
///
/// Loads distinguish "absent" (`Ok(None)`) from "unreadable" (`Err`); the
/// registry degrades gracefully on both. Saves must be durable before they
/// return.
pub trait StateStore {
    fn load_roster(&self) -> Result<Option<String>, RegistryError>;
    fn save_roster(&mut self, json: &str) -> Result<(), RegistryError>;
    fn load_counter(&self) -> Result<Option<String>, RegistryError>;
    fn save_counter(&mut self, value: &str) -> Result<(), RegistryError>;
}

// ---------------------------------------------------------------------------
// 2. Path helpers
// ---------------------------------------------------------------------------

/// `<home>/.tombola/` — pure, no I/O.
pub fn state_dir_at(home: &Path) -> PathBuf {
    home.join(".tombola")
}

/// `state_dir_at` convenience wrapper (uses `dirs::home_dir()`).
pub fn state_dir() -> Result<PathBuf, RegistryError> {
    Ok(state_dir_at(&home()?))
}

// ---------------------------------------------------------------------------
// 3. File-backed store
// ---------------------------------------------------------------------------

/// [`StateStore`] backed by plain files in a state directory.
///
/// Write flow: `.tmp` sibling → `chmod 0600` → `rename`. The `.tmp` lives in
/// the same directory as the target (same filesystem — no EXDEV on macOS).
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// A store rooted at an explicit state directory. Nothing is created
    /// until the first save.
    pub fn at(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// A store rooted at `~/.tombola/`.
    pub fn open_default() -> Result<Self, RegistryError> {
        Ok(Self::at(state_dir()?))
    }

    /// The state directory this store reads and writes.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn load_slot(&self, file: &str) -> Result<Option<String>, RegistryError> {
        match std::fs::read_to_string(self.dir.join(file)) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn save_slot(&self, file: &str, contents: &str) -> Result<(), RegistryError> {
        ensure_dir(&self.dir)?;
        let path = self.dir.join(file);
        let tmp = self.dir.join(format!("{file}.tmp"));
        std::fs::write(&tmp, contents)?;
        set_file_permissions(&tmp)?;
        std::fs::rename(&tmp, &path)?;
        debug!("wrote: {}", path.display());
        Ok(())
    }
}

impl StateStore for FileStore {
    fn load_roster(&self) -> Result<Option<String>, RegistryError> {
        self.load_slot(ROSTER_FILE)
    }

    fn save_roster(&mut self, json: &str) -> Result<(), RegistryError> {
        self.save_slot(ROSTER_FILE, json)
    }

    fn load_counter(&self) -> Result<Option<String>, RegistryError> {
        self.load_slot(COUNTER_FILE)
    }

    fn save_counter(&mut self, value: &str) -> Result<(), RegistryError> {
        self.save_slot(COUNTER_FILE, value)
    }
}

// ---------------------------------------------------------------------------
// 4. In-memory store
// ---------------------------------------------------------------------------

/// [`StateStore`] that keeps everything in a map. For tests and dry runs.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    slots: HashMap<&'static str, String>,
}

impl StateStore for MemoryStore {
    fn load_roster(&self) -> Result<Option<String>, RegistryError> {
        Ok(self.slots.get(ROSTER_FILE).cloned())
    }

    fn save_roster(&mut self, json: &str) -> Result<(), RegistryError> {
        self.slots.insert(ROSTER_FILE, json.to_owned());
        Ok(())
    }

    fn load_counter(&self) -> Result<Option<String>, RegistryError> {
        Ok(self.slots.get(COUNTER_FILE).cloned())
    }

    fn save_counter(&mut self, value: &str) -> Result<(), RegistryError> {
        self.slots.insert(COUNTER_FILE, value.to_owned());
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// 5. Desk configuration file
// ---------------------------------------------------------------------------

/// Load `<dir>/config.json`, degrading to defaults.
///
/// A missing file is the normal first-run case; an unreadable or malformed
/// one logs a warning. Either way the desk comes up with a usable
/// configuration.
pub fn load_config_at(dir: &Path) -> DeskConfig {
    let path = dir.join(CONFIG_FILE);
    let contents = match std::fs::read_to_string(&path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return DeskConfig::default(),
        Err(e) => {
            warn!("cannot read {}: {e}, using default configuration", path.display());
            return DeskConfig::default();
        }
    };
    match serde_json::from_str(&contents) {
        Ok(config) => config,
        Err(e) => {
            warn!("malformed {}: {e}, using default configuration", path.display());
            DeskConfig::default()
        }
    }
}

/// `load_config_at` convenience wrapper.
pub fn load_config() -> Result<DeskConfig, RegistryError> {
    Ok(load_config_at(&state_dir()?))
}

/// Atomically save `<dir>/config.json`.
pub fn save_config_at(dir: &Path, config: &DeskConfig) -> Result<(), RegistryError> {
    ensure_dir(dir)?;
    let path = dir.join(CONFIG_FILE);
    let tmp = dir.join(format!("{CONFIG_FILE}.tmp"));
    let json = serde_json::to_string_pretty(config)?;
    std::fs::write(&tmp, json)?;
    set_file_permissions(&tmp)?;
    std::fs::rename(&tmp, &path)?;
    debug!("wrote: {}", path.display());
    Ok(())
}

/// `save_config_at` convenience wrapper.
pub fn save_config(config: &DeskConfig) -> Result<(), RegistryError> {
    save_config_at(&state_dir()?, config)
}

// ---------------------------------------------------------------------------
// Private helpers
// ---------------------------------------------------------------------------

fn home() -> Result<PathBuf, RegistryError> {
    dirs::home_dir().ok_or(RegistryError::HomeNotFound)
}

fn ensure_dir(dir: &Path) -> Result<(), RegistryError> {
    if !dir.exists() {
        std::fs::create_dir_all(dir)?;
        set_dir_permissions(dir)?;
    }
    Ok(())
}

#[cfg(unix)]
fn set_dir_permissions(path: &Path) -> Result<(), RegistryError> {
    use std::os::unix::fs::PermissionsExt;
    std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o700))?;
    Ok(())
}
#[cfg(not(unix))]
fn set_dir_permissions(_path: &Path) -> Result<(), RegistryError> {
    Ok(())
}

#[cfg(unix)]
fn set_file_permissions(path: &Path) -> Result<(), RegistryError> {
    use std::os::unix::fs::PermissionsExt;
    std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o600))?;
    Ok(())
}
#[cfg(not(unix))]
fn set_file_permissions(_path: &Path) -> Result<(), RegistryError> {
    Ok(())
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn make_dir() -> TempDir {
        TempDir::new().expect("tempdir")
    }

    #[test]
    fn state_dir_is_dot_tombola() {
        let dir = state_dir_at(Path::new("/home/desk"));
        assert_eq!(dir, PathBuf::from("/home/desk/.tombola"));
    }

    #[test]
    fn empty_store_loads_nothing() {
        let dir = make_dir();
        let store = FileStore::at(dir.path());
        assert_eq!(store.load_roster().expect("load"), None);
        assert_eq!(store.load_counter().expect("load"), None);
    }

    #[test]
    fn slots_roundtrip() {
        let dir = make_dir();
        let mut store = FileStore::at(dir.path());
        store.save_roster("[]").expect("save roster");
        store.save_counter("48").expect("save counter");
        assert_eq!(store.load_roster().expect("load").as_deref(), Some("[]"));
        assert_eq!(store.load_counter().expect("load").as_deref(), Some("48"));
    }

    #[test]
    fn save_creates_dir_with_perms() {
        let dir = make_dir();
        let nested = dir.path().join(".tombola");
        let mut store = FileStore::at(&nested);
        store.save_counter("47").expect("save");
        assert!(nested.exists());
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mode = std::fs::metadata(&nested).unwrap().permissions().mode() & 0o777;
            assert_eq!(mode, 0o700);
        }
    }

    #[test]
    fn atomic_write_cleans_up_tmp() {
        let dir = make_dir();
        let mut store = FileStore::at(dir.path());
        store.save_roster("[]").expect("save");
        assert!(!dir.path().join("roster.json.tmp").exists(), ".tmp must be gone after save");
    }

    #[test]
    fn saved_files_are_private() {
        let dir = make_dir();
        let mut store = FileStore::at(dir.path());
        store.save_roster("[]").expect("save");
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mode = std::fs::metadata(dir.path().join(ROSTER_FILE))
                .unwrap()
                .permissions()
                .mode()
                & 0o777;
            assert_eq!(mode, 0o600);
        }
    }

    #[test]
    fn memory_store_roundtrips() {
        let mut store = MemoryStore::default();
        assert_eq!(store.load_counter().expect("load"), None);
        store.save_counter("103").expect("save");
        assert_eq!(store.load_counter().expect("load").as_deref(), Some("103"));
    }

    #[test]
    fn missing_config_defaults() {
        let dir = make_dir();
        assert_eq!(load_config_at(dir.path()), DeskConfig::default());
    }

    #[test]
    fn malformed_config_degrades_to_defaults() {
        let dir = make_dir();
        std::fs::write(dir.path().join(CONFIG_FILE), "{ not json").expect("write");
        assert_eq!(load_config_at(dir.path()), DeskConfig::default());
    }

    #[test]
    fn config_roundtrips() {
        let dir = make_dir();
        let config = DeskConfig {
            seed: 100,
            collect_address: false,
            identity_code_digits: Some(8),
            ..DeskConfig::default()
        };
        save_config_at(dir.path(), &config).expect("save");
        assert_eq!(load_config_at(dir.path()), config);
    }

    #[test]
    fn config_keys_are_snake_case_json() {
        let dir = make_dir();
        save_config_at(dir.path(), &DeskConfig::default()).expect("save");
        let raw = std::fs::read_to_string(dir.path().join(CONFIG_FILE)).expect("read");
        assert!(raw.contains("\"seed\": 47"));
        assert!(raw.contains("\"collect_address\": true"));
    }
}
