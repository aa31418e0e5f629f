//! Builders wiring repository adapters into the HTTP state.

use std::sync::Arc;

use actix_web::web;
use tracing::warn;

use acronyms::inbound::http::state::{HttpState, HttpStatePorts};
use acronyms::outbound::memory::InMemoryStore;
use acronyms::outbound::persistence::{
    DbPool, DieselAcronymRepository, DieselCategoryRepository, DieselUserRepository,
};

use super::ServerConfig;

fn diesel_ports(pool: &DbPool) -> HttpStatePorts {
    HttpStatePorts {
        users: Arc::new(DieselUserRepository::new(pool.clone())),
        acronyms: Arc::new(DieselAcronymRepository::new(pool.clone())),
        categories: Arc::new(DieselCategoryRepository::new(pool.clone())),
    }
}

fn memory_ports(store: Arc<InMemoryStore>) -> HttpStatePorts {
    HttpStatePorts {
        users: store.clone(),
        acronyms: store.clone(),
        categories: store,
    }
}

/// Build the shared handler state.
///
/// Uses the Diesel repositories when a pool is configured, otherwise a
/// single in-memory store backing all three ports.
pub(super) fn build_http_state(config: &ServerConfig) -> web::Data<HttpState> {
    let ports = match &config.db_pool {
        Some(pool) => diesel_ports(pool),
        None => {
            warn!("no database pool configured; data will not outlive the process");
            memory_ports(Arc::new(InMemoryStore::new()))
        }
    };
    web::Data::new(HttpState::new(ports))
}
