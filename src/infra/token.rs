//! Persistent bearer-token storage.

use std::fmt;
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use super::error::InfraError;

/// Where the console keeps the signed-in user's bearer token between runs.
pub trait TokenStore: Send + Sync + fmt::Debug {
    /// Current token, if one is stored. Blank contents count as absent.
    fn load(&self) -> Result<Option<String>, InfraError>;
    fn store(&self, token: &str) -> Result<(), InfraError>;
    /// Forget the token. Clearing an empty store is not an error.
    fn clear(&self) -> Result<(), InfraError>;
}

#[derive(Debug, Clone)]
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TokenStore for FileTokenStore {
    fn load(&self) -> Result<Option<String>, InfraError> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => {
                let token = contents.trim();
                Ok((!token.is_empty()).then(|| token.to_string()))
            }
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(InfraError::token_storage(&self.path, err)),
        }
    }

    fn store(&self, token: &str) -> Result<(), InfraError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|err| InfraError::token_storage(parent, err))?;
        }

        let mut options = fs::OpenOptions::new();
        options.write(true).create(true).truncate(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(0o600);
        }

        let mut file = options
            .open(&self.path)
            .map_err(|err| InfraError::token_storage(&self.path, err))?;
        file.write_all(token.trim().as_bytes())
            .map_err(|err| InfraError::token_storage(&self.path, err))
    }

    fn clear(&self) -> Result<(), InfraError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(InfraError::token_storage(&self.path, err)),
        }
    }
}

/// Process-local store; counts clears so callers can observe session resets.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: Mutex<Option<String>>,
    clears: AtomicUsize,
}

impl MemoryTokenStore {
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: Mutex::new(Some(token.into())),
            clears: AtomicUsize::new(0),
        }
    }

    pub fn clear_count(&self) -> usize {
        self.clears.load(Ordering::SeqCst)
    }

    fn slot(&self) -> std::sync::MutexGuard<'_, Option<String>> {
        self.token
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Result<Option<String>, InfraError> {
        Ok(self.slot().clone())
    }

    fn store(&self, token: &str) -> Result<(), InfraError> {
        *self.slot() = Some(token.trim().to_string());
        Ok(())
    }

    fn clear(&self) -> Result<(), InfraError> {
        self.clears.fetch_add(1, Ordering::SeqCst);
        *self.slot() = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_store_round_trips_and_clears() {
        let dir = tempfile::tempdir().expect("tmp dir");
        let store = FileTokenStore::new(dir.path().join("nested").join("token"));

        assert_eq!(store.load().expect("load"), None);
        store.store("abc123\n").expect("store");
        assert_eq!(store.load().expect("load").as_deref(), Some("abc123"));

        store.clear().expect("clear");
        assert_eq!(store.load().expect("load"), None);
        store.clear().expect("clearing twice is fine");
    }

    #[test]
    fn blank_token_file_reads_as_absent() {
        let dir = tempfile::tempdir().expect("tmp dir");
        let path = dir.path().join("token");
        fs::write(&path, "  \n").expect("write");
        assert_eq!(FileTokenStore::new(path).load().expect("load"), None);
    }

    #[test]
    fn memory_store_counts_clears() {
        let store = MemoryTokenStore::with_token("t");
        store.clear().expect("clear");
        assert_eq!(store.clear_count(), 1);
        assert_eq!(store.load().expect("load"), None);
    }
}
