//! Session/token persistence.
//!
//! The auth collaborator owns the token lifecycle; this module only provides
//! the injected store it persists through, with an explicit
//! load/save/clear lifecycle. The core never touches storage directly.

use crate::paths::ChitPaths;
use chit_core::error::{ChitError, Result};
use chit_core::identity::SessionIdentity;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tokio::fs;
use tokio::sync::RwLock;

/// What the auth layer persists between launches: the bearer token and the
/// session-user payload it was issued for.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub access_token: String,
    pub user: SessionIdentity,
}

/// An abstract key-value store for the session snapshot.
///
/// # Lifecycle
///
/// - `load`: read the persisted snapshot, `None` when absent
/// - `save`: replace the snapshot (login)
/// - `clear`: remove it (logout)
#[async_trait]
pub trait TokenStore: Send + Sync {
    async fn load(&self) -> Result<Option<SessionSnapshot>>;
    async fn save(&self, snapshot: &SessionSnapshot) -> Result<()>;
    async fn clear(&self) -> Result<()>;
}

/// File-backed store writing `session.json` under the config directory.
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    /// Creates a store at the default session file path.
    pub fn new_default() -> Result<Self> {
        let path = ChitPaths::session_file()
            .map_err(|e| ChitError::config(format!("cannot resolve session path: {e}")))?;
        Ok(Self::new(path))
    }

    /// Creates a store at an explicit path.
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

#[async_trait]
impl TokenStore for FileTokenStore {
    async fn load(&self) -> Result<Option<SessionSnapshot>> {
        match fs::read_to_string(&self.path).await {
            Ok(content) => {
                if content.trim().is_empty() {
                    return Ok(None);
                }
                Ok(Some(serde_json::from_str(&content)?))
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn save(&self, snapshot: &SessionSnapshot) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).await?;
        }
        let content = serde_json::to_string_pretty(snapshot)?;
        fs::write(&self.path, content).await?;
        Ok(())
    }

    async fn clear(&self) -> Result<()> {
        match fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// In-memory store for tests and ephemeral sessions.
#[derive(Default)]
pub struct InMemoryTokenStore {
    snapshot: RwLock<Option<SessionSnapshot>>,
}

impl InMemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TokenStore for InMemoryTokenStore {
    async fn load(&self) -> Result<Option<SessionSnapshot>> {
        Ok(self.snapshot.read().await.clone())
    }

    async fn save(&self, snapshot: &SessionSnapshot) -> Result<()> {
        *self.snapshot.write().await = Some(snapshot.clone());
        Ok(())
    }

    async fn clear(&self) -> Result<()> {
        *self.snapshot.write().await = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn snapshot() -> SessionSnapshot {
        SessionSnapshot {
            access_token: "tok-123".to_string(),
            user: SessionIdentity::new(json!(42), "alice"),
        }
    }

    #[tokio::test]
    async fn test_file_store_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileTokenStore::new(dir.path().join("session.json"));

        assert!(store.load().await.unwrap().is_none());

        store.save(&snapshot()).await.unwrap();
        let loaded = store.load().await.unwrap().unwrap();
        assert_eq!(loaded.access_token, "tok-123");
        assert_eq!(loaded.user.username, "alice");

        store.clear().await.unwrap();
        assert!(store.load().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_file_store_clear_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileTokenStore::new(dir.path().join("session.json"));
        store.clear().await.unwrap();
        store.clear().await.unwrap();
    }

    #[tokio::test]
    async fn test_in_memory_store_round_trip() {
        let store = InMemoryTokenStore::new();
        store.save(&snapshot()).await.unwrap();
        assert!(store.load().await.unwrap().is_some());
        store.clear().await.unwrap();
        assert!(store.load().await.unwrap().is_none());
    }
}
