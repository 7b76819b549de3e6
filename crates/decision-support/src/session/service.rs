use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tracing::info;

use super::store::{SessionId, SessionStore, SessionStoreError};
use super::{Session, SessionError, SessionView, Transition};
use crate::analysis::CaseAttributesDraft;

/// Service driving stored sessions through the sign-in, form, and results screens.
pub struct SessionService<S> {
    store: Arc<S>,
    sign_in_delay: Duration,
}

static SESSION_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_session_id() -> SessionId {
    let id = SESSION_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    SessionId(format!("session-{id:06}"))
}

impl<S> SessionService<S>
where
    S: SessionStore + 'static,
{
    pub fn new(store: Arc<S>, sign_in_delay: Duration) -> Self {
        Self {
            store,
            sign_in_delay,
        }
    }

    /// Start a signed-out session.
    pub fn open(&self) -> Result<SessionView, SessionServiceError> {
        let id = next_session_id();
        let session = Session::new();
        let view = session.view(&id);
        self.store.insert(id.clone(), session)?;
        info!(session_id = %id.0, "session opened");
        Ok(view)
    }

    pub fn get(&self, id: &SessionId) -> Result<SessionView, SessionServiceError> {
        let session = self
            .store
            .fetch(id)?
            .ok_or(SessionStoreError::NotFound)?;
        Ok(session.view(id))
    }

    /// Sign in after the configured pause. Blank usernames return the unchanged view at once.
    pub async fn sign_in(
        &self,
        id: &SessionId,
        username: &str,
    ) -> Result<SessionView, SessionServiceError> {
        let session = self
            .store
            .fetch(id)?
            .ok_or(SessionStoreError::NotFound)?;
        let mut preview = session.clone();
        if preview.sign_in(username)? == Transition::Ignored {
            return Ok(session.view(id));
        }

        if !self.sign_in_delay.is_zero() {
            tokio::time::sleep(self.sign_in_delay).await;
        }

        let view = self.store.update(id, |session| {
            session.sign_in(username)?;
            Ok::<_, SessionError>(session.view(id))
        })??;
        info!(session_id = %id.0, "session signed in");
        Ok(view)
    }

    pub fn submit(
        &self,
        id: &SessionId,
        draft: &CaseAttributesDraft,
    ) -> Result<SessionView, SessionServiceError> {
        let view = self.store.update(id, |session| {
            session.submit(draft)?;
            Ok::<_, SessionError>(session.view(id))
        })??;
        info!(session_id = %id.0, "case parameters analyzed");
        Ok(view)
    }

    pub fn back(&self, id: &SessionId) -> Result<SessionView, SessionServiceError> {
        let view = self.store.update(id, |session| {
            session.back()?;
            Ok::<_, SessionError>(session.view(id))
        })??;
        Ok(view)
    }

    pub fn sign_out(&self, id: &SessionId) -> Result<SessionView, SessionServiceError> {
        let view = self.store.update(id, |session| {
            session.sign_out();
            session.view(id)
        })?;
        info!(session_id = %id.0, "session signed out");
        Ok(view)
    }

    /// Discard the session entirely; later requests for the id report not found.
    pub fn close(&self, id: &SessionId) -> Result<(), SessionServiceError> {
        let session = self.store.remove(id)?;
        info!(session_id = %id.0, screen = %session.screen(), "session closed");
        Ok(())
    }
}

/// Error raised by the session service.
#[derive(Debug, thiserror::Error)]
pub enum SessionServiceError {
    #[error(transparent)]
    Session(#[from] SessionError),
    #[error(transparent)]
    Store(#[from] SessionStoreError),
}
