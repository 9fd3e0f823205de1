//! Shared HTTP adapter state.
//!
//! Handlers receive this via `web::Data` and depend only on driving ports, so
//! they can be exercised with mocks and no I/O.

use std::sync::Arc;

use crate::domain::ports::{MembersCommand, MembersQuery};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub members: Arc<dyn MembersCommand>,
    pub members_query: Arc<dyn MembersQuery>,
}

impl HttpState {
    pub fn new(members: Arc<dyn MembersCommand>, members_query: Arc<dyn MembersQuery>) -> Self {
        Self {
            members,
            members_query,
        }
    }

    /// Build state from one value implementing both member ports.
    pub fn from_service<T>(service: Arc<T>) -> Self
    where
        T: MembersCommand + MembersQuery + 'static,
    {
        Self {
            members: service.clone(),
            members_query: service,
        }
    }
}
