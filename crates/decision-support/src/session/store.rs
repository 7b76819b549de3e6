use serde::{Deserialize, Serialize};

use super::Session;

/// Identifier wrapper for visitor sessions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(pub String);

/// Storage abstraction so the service module can be exercised in isolation.
///
/// `update` applies the change while the store holds the session, so concurrent requests for
/// one visitor are serialized.
pub trait SessionStore: Send + Sync {
    fn insert(&self, id: SessionId, session: Session) -> Result<(), SessionStoreError>;
    fn fetch(&self, id: &SessionId) -> Result<Option<Session>, SessionStoreError>;
    fn update<T, F>(&self, id: &SessionId, apply: F) -> Result<T, SessionStoreError>
    where
        F: FnOnce(&mut Session) -> T;
    /// Drop a session for good, returning its last state.
    fn remove(&self, id: &SessionId) -> Result<Session, SessionStoreError>;
}

#[derive(Debug, thiserror::Error)]
pub enum SessionStoreError {
    #[error("session already exists")]
    Conflict,
    #[error("session not found")]
    NotFound,
    #[error("session store unavailable: {0}")]
    Unavailable(String),
}
