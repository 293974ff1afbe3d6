use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::errors::{Result, SigeaError};

/// Key-value persistence behind the session, mirroring the two entries the
/// original front-end kept in browser local storage.
#[async_trait]
pub trait SessionStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>>;
    async fn set(&self, key: &str, value: &str) -> Result<()>;
    async fn remove(&self, key: &str) -> Result<()>;
}

/// File-backed store: a single JSON object under the data directory.
pub struct FileSessionStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileSessionStore {
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            path: dir.as_ref().join("sessao.json"),
            lock: Mutex::new(()),
        }
    }

    /// Store under the configured directory, or the platform data dir.
    pub fn from_config(dir: &str) -> Self {
        if dir.is_empty() {
            let base = dirs::data_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("sigea");
            Self::new(base)
        } else {
            Self::new(dir)
        }
    }

    fn read_map(&self) -> Result<HashMap<String, String>> {
        if !self.path.exists() {
            return Ok(HashMap::new());
        }
        let raw = std::fs::read_to_string(&self.path)
            .map_err(|e| SigeaError::session_store(format!("read failed: {e}")))?;
        serde_json::from_str(&raw)
            .map_err(|e| SigeaError::session_store(format!("corrupt session file: {e}")))
    }

    fn write_map(&self, map: &HashMap<String, String>) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| SigeaError::session_store(format!("create dir failed: {e}")))?;
        }
        let raw = serde_json::to_string_pretty(map)?;
        std::fs::write(&self.path, raw)
            .map_err(|e| SigeaError::session_store(format!("write failed: {e}")))
    }
}

#[async_trait]
impl SessionStore for FileSessionStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let _guard = self.lock.lock().expect("session store lock poisoned");
        Ok(self.read_map()?.remove(key))
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        let _guard = self.lock.lock().expect("session store lock poisoned");
        let mut map = self.read_map()?;
        map.insert(key.to_string(), value.to_string());
        self.write_map(&map)
    }

    async fn remove(&self, key: &str) -> Result<()> {
        let _guard = self.lock.lock().expect("session store lock poisoned");
        let mut map = self.read_map()?;
        if map.remove(key).is_some() {
            self.write_map(&map)?;
        }
        Ok(())
    }
}

/// In-memory store for tests and throwaway sessions.
#[derive(Default)]
pub struct MemorySessionStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionStore for MemorySessionStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self
            .entries
            .lock()
            .expect("session store lock poisoned")
            .get(key)
            .cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        self.entries
            .lock()
            .expect("session store lock poisoned")
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<()> {
        self.entries
            .lock()
            .expect("session store lock poisoned")
            .remove(key);
        Ok(())
    }
}
