//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every HTTP endpoint from the inbound layer together
//! with the entity, request and error schemas. The document is served by
//! Swagger UI in debug builds and printed by `cargo run --bin openapi-dump`.

use utoipa::OpenApi;

use crate::domain::{Acronym, Category, Error, ErrorCode, User};
use crate::inbound::http::acronyms::AcronymRequest;
use crate::inbound::http::categories::CategoryRequest;
use crate::inbound::http::users::UserRequest;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Acronyms API",
        description = "Acronyms, the users who own them and the categories they are filed under."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::acronyms::list_acronyms,
        crate::inbound::http::acronyms::create_acronym,
        crate::inbound::http::acronyms::search_acronyms,
        crate::inbound::http::acronyms::first_acronym,
        crate::inbound::http::acronyms::sorted_acronyms,
        crate::inbound::http::acronyms::get_acronym,
        crate::inbound::http::acronyms::update_acronym,
        crate::inbound::http::acronyms::delete_acronym,
        crate::inbound::http::acronyms::acronym_user,
        crate::inbound::http::acronyms::acronym_categories,
        crate::inbound::http::acronyms::attach_category,
        crate::inbound::http::acronyms::detach_category,
        crate::inbound::http::users::list_users,
        crate::inbound::http::users::create_user,
        crate::inbound::http::users::get_user,
        crate::inbound::http::users::user_acronyms,
        crate::inbound::http::categories::list_categories,
        crate::inbound::http::categories::create_category,
        crate::inbound::http::categories::get_category,
        crate::inbound::http::categories::delete_category,
        crate::inbound::http::categories::category_acronyms,
        crate::inbound::http::greeting::hello,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        Acronym,
        AcronymRequest,
        Category,
        CategoryRequest,
        Error,
        ErrorCode,
        User,
        UserRequest
    )),
    tags(
        (name = "acronyms", description = "Acronyms and their category links"),
        (name = "users", description = "Users owning acronyms"),
        (name = "categories", description = "Categories grouping acronyms"),
        (name = "greeting", description = "Smoke-test greeting"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
