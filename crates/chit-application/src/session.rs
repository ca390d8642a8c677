//! Session service: one resolved member id per authenticated session.
//!
//! The fallback chain in `chit_core::identity` is only run once per session
//! load; every screen reads the cached id afterwards. Logout drops both the
//! cache and the persisted snapshot, so a different user never sees a stale
//! id.

use chit_core::error::{ChitError, Result};
use chit_core::identity::resolve_member_id;
use chit_core::member::{MemberDirectory, MemberId};
use chit_infrastructure::TokenStore;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Resolves and caches the canonical member id for the current session.
pub struct SessionService {
    token_store: Arc<dyn TokenStore>,
    members: Arc<dyn MemberDirectory>,
    /// Resolved id, kept until logout
    resolved: RwLock<Option<MemberId>>,
}

impl SessionService {
    pub fn new(token_store: Arc<dyn TokenStore>, members: Arc<dyn MemberDirectory>) -> Self {
        Self {
            token_store,
            members,
            resolved: RwLock::new(None),
        }
    }

    /// Returns the member id for the current session, resolving it on first
    /// use.
    ///
    /// # Returns
    ///
    /// - `Ok(MemberId)`: The canonical id, cached for subsequent calls
    /// - `Err(ChitError::Resolution)`: No authenticated session, or no
    ///   source in the fallback chain produced a valid id
    pub async fn current_member_id(&self) -> Result<MemberId> {
        if let Some(id) = *self.resolved.read().await {
            return Ok(id);
        }

        let snapshot = self
            .token_store
            .load()
            .await?
            .ok_or_else(|| ChitError::resolution("no authenticated session"))?;

        let id = resolve_member_id(&snapshot.user, self.members.as_ref()).await?;
        *self.resolved.write().await = Some(id);
        tracing::debug!(member_id = %id, "session member id resolved");
        Ok(id)
    }

    /// Forgets the cached id and removes the persisted snapshot (logout).
    pub async fn logout(&self) -> Result<()> {
        *self.resolved.write().await = None;
        self.token_store.clear().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use chit_core::committee::CommitteeId;
    use chit_core::identity::SessionIdentity;
    use chit_core::member::MemberSummary;
    use chit_infrastructure::{InMemoryTokenStore, SessionSnapshot};
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CountingDirectory {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl MemberDirectory for CountingDirectory {
        async fn search_by_username(&self, _username: &str) -> Result<Vec<MemberSummary>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(vec![MemberSummary {
                member_id: MemberId::new(7),
                username: "alice".to_string(),
                name: "Alice".to_string(),
            }])
        }

        async fn list_by_committee(&self, _id: CommitteeId) -> Result<Vec<MemberSummary>> {
            Ok(Vec::new())
        }
    }

    async fn logged_in_store() -> Arc<InMemoryTokenStore> {
        let store = Arc::new(InMemoryTokenStore::new());
        store
            .save(&SessionSnapshot {
                access_token: "tok".to_string(),
                user: SessionIdentity::new(json!("x"), "alice"),
            })
            .await
            .unwrap();
        store
    }

    #[tokio::test]
    async fn test_resolution_runs_once_per_session() {
        let store = logged_in_store().await;
        let directory = Arc::new(CountingDirectory {
            calls: AtomicUsize::new(0),
        });
        let service = SessionService::new(store, directory.clone());

        let first = service.current_member_id().await.unwrap();
        let second = service.current_member_id().await.unwrap();

        assert_eq!(first, second);
        assert_eq!(directory.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_logout_forgets_id_and_snapshot() {
        let store = logged_in_store().await;
        let directory = Arc::new(CountingDirectory {
            calls: AtomicUsize::new(0),
        });
        let service = SessionService::new(store.clone(), directory);

        service.current_member_id().await.unwrap();
        service.logout().await.unwrap();

        assert!(store.load().await.unwrap().is_none());
        let err = service.current_member_id().await.unwrap_err();
        assert!(err.is_resolution());
    }

    #[tokio::test]
    async fn test_no_session_is_a_resolution_failure() {
        let store = Arc::new(InMemoryTokenStore::new());
        let directory = Arc::new(CountingDirectory {
            calls: AtomicUsize::new(0),
        });
        let service = SessionService::new(store, directory);

        let err = service.current_member_id().await.unwrap_err();
        assert!(err.is_resolution());
    }
}
