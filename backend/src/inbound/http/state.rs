//! Shared HTTP adapter state.
//!
//! Handlers accept this state via `actix_web::web::Data` so they depend only
//! on domain services and stay testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{AcronymRepository, CategoryRepository, UserRepository};
use crate::domain::{AcronymService, AcronymServicePorts, CategoryService, UserService};

/// Parameter object bundling the repository implementations.
#[derive(Clone)]
pub struct HttpStatePorts {
    pub users: Arc<dyn UserRepository>,
    pub acronyms: Arc<dyn AcronymRepository>,
    pub categories: Arc<dyn CategoryRepository>,
}

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub users: UserService,
    pub acronyms: AcronymService,
    pub categories: CategoryService,
}

impl From<HttpStatePorts> for HttpState {
    fn from(ports: HttpStatePorts) -> Self {
        Self::new(ports)
    }
}

impl HttpState {
    /// Build the services over a set of repositories.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use acronyms::inbound::http::state::{HttpState, HttpStatePorts};
    /// use acronyms::outbound::memory::InMemoryStore;
    ///
    /// let store = Arc::new(InMemoryStore::default());
    /// let state = HttpState::new(HttpStatePorts {
    ///     users: store.clone(),
    ///     acronyms: store.clone(),
    ///     categories: store,
    /// });
    /// let _users = state.users.clone();
    /// ```
    pub fn new(ports: HttpStatePorts) -> Self {
        let HttpStatePorts {
            users,
            acronyms,
            categories,
        } = ports;
        Self {
            users: UserService::new(users.clone()),
            acronyms: AcronymService::new(AcronymServicePorts {
                acronyms,
                users,
                categories: categories.clone(),
            }),
            categories: CategoryService::new(categories),
        }
    }
}
