use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

/// One request and the cleaned diagram returned for it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Exchange {
    pub request: String,
    pub output: String,
}

impl Exchange {
    pub fn new(request: impl Into<String>, output: impl Into<String>) -> Self {
        Self {
            request: request.into(),
            output: output.into(),
        }
    }
}

/// In-memory, append-only transcripts keyed by session id.
///
/// Nothing is persisted and nothing is evicted; callers own the lifecycle
/// and may clear sessions explicitly.
#[derive(Debug, Default)]
pub struct SessionStore {
    sessions: RwLock<HashMap<String, Vec<Exchange>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of a session's exchanges. Unknown sessions are empty.
    pub async fn history(&self, session_id: &str) -> Vec<Exchange> {
        let sessions = self.sessions.read().await;
        sessions.get(session_id).cloned().unwrap_or_default()
    }

    pub async fn append(&self, session_id: &str, exchange: Exchange) {
        let mut sessions = self.sessions.write().await;
        let history = sessions.entry(session_id.to_string()).or_default();
        history.push(exchange);
        log::debug!("[{}] history now holds {} exchange(s)", session_id, history.len());
    }

    /// Returns `true` if the session existed.
    pub async fn clear(&self, session_id: &str) -> bool {
        self.sessions.write().await.remove(session_id).is_some()
    }

    pub async fn clear_all(&self) {
        self.sessions.write().await.clear();
    }

    /// Number of sessions with at least one exchange.
    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[tokio::test]
    async fn unknown_session_has_empty_history() {
        let store = SessionStore::new();
        assert!(store.history("missing").await.is_empty());
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn append_preserves_order_per_session() {
        let store = SessionStore::new();
        store.append("a", Exchange::new("one", "1")).await;
        store.append("b", Exchange::new("other", "x")).await;
        store.append("a", Exchange::new("two", "2")).await;

        let history = store.history("a").await;
        assert_eq!(
            history,
            vec![Exchange::new("one", "1"), Exchange::new("two", "2")]
        );
        assert_eq!(store.history("b").await.len(), 1);
        assert_eq!(store.len().await, 2);
    }

    #[tokio::test]
    async fn clear_removes_single_session() {
        let store = SessionStore::new();
        store.append("a", Exchange::new("one", "1")).await;
        store.append("b", Exchange::new("two", "2")).await;

        assert!(store.clear("a").await);
        assert!(!store.clear("a").await);
        assert!(store.history("a").await.is_empty());
        assert_eq!(store.len().await, 1);

        store.clear_all().await;
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn concurrent_appends_are_not_lost() {
        let store = Arc::new(SessionStore::new());
        let mut handles = Vec::new();
        for i in 0..32 {
            let store = Arc::clone(&store);
            handles.push(tokio::spawn(async move {
                store
                    .append("shared", Exchange::new(format!("req-{i}"), "out"))
                    .await;
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        assert_eq!(store.history("shared").await.len(), 32);
    }
}
