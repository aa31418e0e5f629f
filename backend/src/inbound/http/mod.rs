//! HTTP inbound adapter exposing the REST endpoints.

pub mod acronyms;
pub mod categories;
pub mod error;
pub mod greeting;
pub mod health;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub mod users;

use actix_web::{HttpRequest, HttpResponse, Scope, web};

use crate::domain::Error;

pub use error::ApiResult;

async fn unknown_route(req: HttpRequest) -> ApiResult<HttpResponse> {
    Err(Error::not_found(format!("no route for {} {}", req.method(), req.path())))
}

fn api_scope() -> Scope {
    web::scope("/api")
        .service(acronyms::list_acronyms)
        .service(acronyms::create_acronym)
        .service(acronyms::search_acronyms)
        .service(acronyms::first_acronym)
        .service(acronyms::sorted_acronyms)
        .service(acronyms::get_acronym)
        .service(acronyms::update_acronym)
        .service(acronyms::delete_acronym)
        .service(acronyms::acronym_user)
        .service(acronyms::acronym_categories)
        .service(acronyms::attach_category)
        .service(acronyms::detach_category)
        .service(categories::list_categories)
        .service(categories::create_category)
        .service(categories::get_category)
        .service(categories::delete_category)
        .service(categories::category_acronyms)
        .service(users::list_users)
        .service(users::create_user)
        .service(users::get_user)
        .service(users::user_acronyms)
        .default_service(web::to(unknown_route))
}

/// Register extractor error handlers, the greeting route and the `/api`
/// scope. Callers provide `web::Data<HttpState>`.
///
/// # Examples
/// ```
/// use std::sync::Arc;
///
/// use actix_web::{App, web};
/// use acronyms::inbound::http::configure;
/// use acronyms::inbound::http::state::{HttpState, HttpStatePorts};
/// use acronyms::outbound::memory::InMemoryStore;
///
/// let store = Arc::new(InMemoryStore::new());
/// let state = HttpState::new(HttpStatePorts {
///     users: store.clone(),
///     acronyms: store.clone(),
///     categories: store,
/// });
/// let _app = App::new()
///     .app_data(web::Data::new(state))
///     .configure(configure);
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(error::json_error_handler))
        .app_data(web::QueryConfig::default().error_handler(error::query_error_handler))
        .app_data(web::PathConfig::default().error_handler(error::path_error_handler))
        .service(greeting::hello)
        .service(api_scope());
}
