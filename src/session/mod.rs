use std::collections::HashMap;
use std::fmt;

use crate::registry::Registry;

/// Handle to a live registry session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SessionId(u32);

impl SessionId {
    pub(crate) fn new(id: u32) -> Self {
        Self(id)
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A registry snapshot pinned for the duration of its queries.
#[derive(Debug, Clone)]
pub struct RegistrySession {
    registry: Registry,
}

impl RegistrySession {
    pub fn registry(&self) -> &Registry {
        &self.registry
    }
}

/// Explicit session table mapping handles to registry snapshots.
///
/// Owned by the caller and injected into the query operations; a handle
/// stays valid until its session is closed.
#[derive(Debug, Default)]
pub struct SessionManager {
    sessions: HashMap<SessionId, RegistrySession>,
    next_id: u32,
}

impl SessionManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create_session(&mut self, registry: Registry) -> SessionId {
        self.next_id += 1;
        let id = SessionId(self.next_id);
        self.sessions.insert(id, RegistrySession { registry });
        id
    }

    pub fn resolve(&self, id: SessionId) -> Option<&RegistrySession> {
        self.sessions.get(&id)
    }

    /// Close a session, handing the snapshot back to the caller.
    pub fn close_session(&mut self, id: SessionId) -> Option<Registry> {
        self.sessions.remove(&id).map(|session| session.registry)
    }
}
