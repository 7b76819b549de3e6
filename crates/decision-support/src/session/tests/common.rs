use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::response::Response;
use serde_json::Value;

use crate::analysis::CaseAttributesDraft;
use crate::session::store::{SessionId, SessionStore, SessionStoreError};
use crate::session::{session_router, Session, SessionService};

#[derive(Default, Clone)]
pub(super) struct MemoryStore {
    sessions: Arc<Mutex<HashMap<SessionId, Session>>>,
}

impl SessionStore for MemoryStore {
    fn insert(&self, id: SessionId, session: Session) -> Result<(), SessionStoreError> {
        let mut guard = self.sessions.lock().unwrap();
        if guard.contains_key(&id) {
            return Err(SessionStoreError::Conflict);
        }
        guard.insert(id, session);
        Ok(())
    }

    fn fetch(&self, id: &SessionId) -> Result<Option<Session>, SessionStoreError> {
        Ok(self.sessions.lock().unwrap().get(id).cloned())
    }

    fn update<T, F>(&self, id: &SessionId, apply: F) -> Result<T, SessionStoreError>
    where
        F: FnOnce(&mut Session) -> T,
    {
        let mut guard = self.sessions.lock().unwrap();
        let session = guard.get_mut(id).ok_or(SessionStoreError::NotFound)?;
        Ok(apply(session))
    }

    fn remove(&self, id: &SessionId) -> Result<Session, SessionStoreError> {
        self.sessions
            .lock()
            .unwrap()
            .remove(id)
            .ok_or(SessionStoreError::NotFound)
    }
}

impl MemoryStore {
    pub(super) fn len(&self) -> usize {
        self.sessions.lock().unwrap().len()
    }
}

pub(super) struct UnavailableStore;

impl SessionStore for UnavailableStore {
    fn insert(&self, _id: SessionId, _session: Session) -> Result<(), SessionStoreError> {
        Err(SessionStoreError::Unavailable("maintenance".to_string()))
    }

    fn fetch(&self, _id: &SessionId) -> Result<Option<Session>, SessionStoreError> {
        Err(SessionStoreError::Unavailable("maintenance".to_string()))
    }

    fn update<T, F>(&self, _id: &SessionId, _apply: F) -> Result<T, SessionStoreError>
    where
        F: FnOnce(&mut Session) -> T,
    {
        Err(SessionStoreError::Unavailable("maintenance".to_string()))
    }

    fn remove(&self, _id: &SessionId) -> Result<Session, SessionStoreError> {
        Err(SessionStoreError::Unavailable("maintenance".to_string()))
    }
}

pub(super) fn build_service() -> (SessionService<MemoryStore>, MemoryStore) {
    let store = MemoryStore::default();
    let service = SessionService::new(Arc::new(store.clone()), Duration::ZERO);
    (service, store)
}

pub(super) fn router_with_service(service: SessionService<MemoryStore>) -> axum::Router {
    session_router(Arc::new(service))
}

pub(super) fn complete_draft() -> CaseAttributesDraft {
    CaseAttributesDraft {
        county: "Bronx".to_string(),
        court_type: "Local".to_string(),
        top_charge: "PL 120.00 - Assault 3rd".to_string(),
        pending_cases: "No open cases".to_string(),
        on_supervision: "No".to_string(),
        prior_convictions: "No prior convictions".to_string(),
    }
}

pub(super) fn partial_draft() -> CaseAttributesDraft {
    CaseAttributesDraft {
        county: "Queens".to_string(),
        court_type: "Superior".to_string(),
        ..CaseAttributesDraft::default()
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body readable");
    serde_json::from_slice(&bytes).expect("valid json body")
}
