use moka::future::Cache;
use std::time::Duration;

/// Who is making a request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionContext {
    Anonymous,
    Authenticated { profile_id: String },
}

impl SessionContext {
    pub fn profile_id(&self) -> Option<&str> {
        match self {
            SessionContext::Anonymous => None,
            SessionContext::Authenticated { profile_id } => Some(profile_id.as_str()),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, SessionContext::Authenticated { .. })
    }
}

/// In-memory session store
///
/// Maps opaque tokens to profile ids. Entries expire after the configured
/// TTL and the oldest are evicted once capacity is reached.
pub struct SessionStore {
    sessions: Cache<String, String>,
}

impl SessionStore {
    pub fn new(max_sessions: u64, ttl_secs: u64) -> Self {
        let sessions = Cache::builder()
            .max_capacity(max_sessions)
            .time_to_live(Duration::from_secs(ttl_secs))
            .build();

        Self { sessions }
    }

    /// Open a session and return its token
    pub async fn login(&self, profile_id: &str) -> String {
        let token = uuid::Uuid::new_v4().to_string();
        self.sessions.insert(token.clone(), profile_id.to_string()).await;
        tracing::debug!("Session opened for profile {}", profile_id);
        token
    }

    /// Close a session, returning whether it existed
    pub async fn logout(&self, token: &str) -> bool {
        let removed = self.sessions.remove(token).await;
        if let Some(profile_id) = &removed {
            tracing::debug!("Session closed for profile {}", profile_id);
        }
        removed.is_some()
    }

    /// Resolve a token, treating missing or unknown tokens as anonymous
    pub async fn resolve(&self, token: Option<&str>) -> SessionContext {
        let Some(token) = token else {
            return SessionContext::Anonymous;
        };

        match self.sessions.get(token).await {
            Some(profile_id) => SessionContext::Authenticated { profile_id },
            None => SessionContext::Anonymous,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_login_resolve_logout() {
        let store = SessionStore::new(100, 60);

        let token = store.login("1").await;
        assert_eq!(
            store.resolve(Some(&token)).await,
            SessionContext::Authenticated { profile_id: "1".to_string() }
        );

        assert!(store.logout(&token).await);
        assert_eq!(store.resolve(Some(&token)).await, SessionContext::Anonymous);
        assert!(!store.logout(&token).await);
    }

    #[tokio::test]
    async fn test_unknown_token_is_anonymous() {
        let store = SessionStore::new(100, 60);

        assert_eq!(store.resolve(None).await, SessionContext::Anonymous);
        assert_eq!(store.resolve(Some("not-a-token")).await, SessionContext::Anonymous);
    }

    #[tokio::test]
    async fn test_tokens_are_distinct() {
        let store = SessionStore::new(100, 60);

        let first = store.login("1").await;
        let second = store.login("1").await;

        assert_ne!(first, second);
    }

    #[test]
    fn test_context_accessors() {
        let context = SessionContext::Authenticated { profile_id: "3".to_string() };
        assert!(context.is_authenticated());
        assert_eq!(context.profile_id(), Some("3"));

        assert!(!SessionContext::Anonymous.is_authenticated());
        assert_eq!(SessionContext::Anonymous.profile_id(), None);
    }
}
