use decision_support::analysis::AttributeDomain;
use decision_support::config::SessionConfig;
use decision_support::session::{Session, SessionId, SessionStore, SessionStoreError};
use metrics_exporter_prometheus::PrometheusHandle;
use std::collections::{HashMap, VecDeque};
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::debug;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Keeps at most `capacity` sessions, evicting the oldest when a new one arrives.
#[derive(Clone)]
pub(crate) struct InMemorySessionStore {
    inner: Arc<Mutex<StoredSessions>>,
    capacity: usize,
}

#[derive(Default)]
struct StoredSessions {
    sessions: HashMap<SessionId, Session>,
    opened: VecDeque<SessionId>,
}

impl InMemorySessionStore {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            inner: Arc::new(Mutex::new(StoredSessions::default())),
            capacity: capacity.max(1),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, StoredSessions>, SessionStoreError> {
        self.inner
            .lock()
            .map_err(|_| SessionStoreError::Unavailable("session store mutex poisoned".into()))
    }
}

impl Default for InMemorySessionStore {
    fn default() -> Self {
        Self::with_capacity(SessionConfig::DEFAULT_CAPACITY)
    }
}

impl SessionStore for InMemorySessionStore {
    fn insert(&self, id: SessionId, session: Session) -> Result<(), SessionStoreError> {
        let mut guard = self.lock()?;
        if guard.sessions.contains_key(&id) {
            return Err(SessionStoreError::Conflict);
        }
        while guard.sessions.len() >= self.capacity {
            let Some(oldest) = guard.opened.pop_front() else {
                break;
            };
            guard.sessions.remove(&oldest);
            debug!(session_id = %oldest.0, "evicted oldest session at capacity");
        }
        guard.opened.push_back(id.clone());
        guard.sessions.insert(id, session);
        Ok(())
    }

    fn fetch(&self, id: &SessionId) -> Result<Option<Session>, SessionStoreError> {
        let guard = self.lock()?;
        Ok(guard.sessions.get(id).cloned())
    }

    fn update<T, F>(&self, id: &SessionId, apply: F) -> Result<T, SessionStoreError>
    where
        F: FnOnce(&mut Session) -> T,
    {
        let mut guard = self.lock()?;
        let session = guard
            .sessions
            .get_mut(id)
            .ok_or(SessionStoreError::NotFound)?;
        Ok(apply(session))
    }

    fn remove(&self, id: &SessionId) -> Result<Session, SessionStoreError> {
        let mut guard = self.lock()?;
        let session = guard
            .sessions
            .remove(id)
            .ok_or(SessionStoreError::NotFound)?;
        guard.opened.retain(|opened| opened != id);
        Ok(session)
    }
}

/// clap value parser accepting the exact display label of an attribute option.
pub(crate) fn parse_label<T: AttributeDomain>(raw: &str) -> Result<T, String> {
    T::from_label(raw).map_err(|err| {
        let options: Vec<_> = T::all().iter().map(|option| option.label()).collect();
        format!("{err}; expected one of: {}", options.join(", "))
    })
}
