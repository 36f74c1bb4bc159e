use crate::core::{EngineError, EngineResult, Session};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use uuid::Uuid;

/// Shared handle to one session's state
pub type SessionHandle = Arc<Mutex<Session>>;

/// In-memory session registry
///
/// Sessions are evicted after `idle_ttl` without access, which is how a
/// session "ends" for callers that never close it explicitly. Nothing is
/// persisted.
#[derive(Clone)]
pub struct SessionStore {
    sessions: moka::future::Cache<Uuid, SessionHandle>,
}

impl SessionStore {
    pub fn new(max_sessions: u64, idle_ttl: Duration) -> Self {
        let sessions = moka::future::CacheBuilder::new(max_sessions)
            .time_to_idle(idle_ttl)
            .build();

        Self { sessions }
    }

    /// Create an empty session and return its id
    pub async fn create(&self) -> Uuid {
        let id = Uuid::new_v4();
        self.sessions
            .insert(id, Arc::new(Mutex::new(Session::new())))
            .await;
        tracing::debug!("Created session {}", id);
        id
    }

    /// Look up a live session
    pub async fn get(&self, id: &Uuid) -> EngineResult<SessionHandle> {
        self.sessions
            .get(id)
            .await
            .ok_or_else(|| EngineError::SessionNotFound(id.to_string()))
    }

    /// Snapshot of a session's current state
    pub async fn snapshot(&self, id: &Uuid) -> EngineResult<Session> {
        let handle = self.get(id).await?;
        let session = handle.lock().await;
        Ok(session.clone())
    }

    /// End a session explicitly
    pub async fn remove(&self, id: &Uuid) -> EngineResult<()> {
        self.sessions
            .remove(id)
            .await
            .map(|_| tracing::debug!("Removed session {}", id))
            .ok_or_else(|| EngineError::SessionNotFound(id.to_string()))
    }

    /// Approximate number of live sessions
    pub fn len(&self) -> u64 {
        self.sessions.entry_count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Apply pending evictions and bookkeeping, mostly useful in tests
    pub async fn sync(&self) {
        self.sessions.run_pending_tasks().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PaymentPolicy;
    use crate::models::PaymentMethod;

    #[tokio::test]
    async fn test_create_and_get() {
        let store = SessionStore::new(100, Duration::from_secs(60));
        let id = store.create().await;

        let handle = store.get(&id).await.unwrap();
        handle
            .lock()
            .await
            .initiate_payment(&PaymentPolicy::default(), 10_000, PaymentMethod::OrangeMoney, "70123456")
            .unwrap();

        let snapshot = store.snapshot(&id).await.unwrap();
        assert_eq!(snapshot.payment.unwrap().amount, 10_000);
    }

    #[tokio::test]
    async fn test_unknown_session() {
        let store = SessionStore::new(100, Duration::from_secs(60));
        let result = store.get(&Uuid::new_v4()).await;

        assert!(matches!(result, Err(EngineError::SessionNotFound(_))));
    }

    #[tokio::test]
    async fn test_remove_session() {
        let store = SessionStore::new(100, Duration::from_secs(60));
        let id = store.create().await;

        store.remove(&id).await.unwrap();
        assert!(store.get(&id).await.is_err());
        assert!(store.remove(&id).await.is_err());
    }

    #[tokio::test]
    async fn test_sessions_are_isolated() {
        let store = SessionStore::new(100, Duration::from_secs(60));
        let a = store.create().await;
        let b = store.create().await;

        store
            .get(&a)
            .await
            .unwrap()
            .lock()
            .await
            .initiate_dispute("late", "")
            .unwrap();

        assert!(store.snapshot(&a).await.unwrap().dispute.is_some());
        assert!(store.snapshot(&b).await.unwrap().dispute.is_none());

        store.sync().await;
        assert_eq!(store.len(), 2);
    }
}
