//! Users API handlers.
//!
//! ```text
//! GET  /api/users
//! POST /api/users {"name":"Ada Lovelace","username":"ada"}
//! GET  /api/users/{id}
//! GET  /api/users/{id}/acronyms
//! ```

use actix_web::{get, post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Acronym, DraftValidationError, Error, User, UserDraft, UserId};
use crate::inbound::http::ApiResult;
use crate::inbound::http::error::map_draft_validation_error;
use crate::inbound::http::state::HttpState;

/// Request body for `POST /api/users`.
///
/// Example JSON:
/// `{"name":"Ada Lovelace","username":"ada"}`
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct UserRequest {
    /// Ignored; identifiers are assigned by storage.
    #[serde(default)]
    pub id: Option<i32>,
    pub name: String,
    pub username: String,
}

impl TryFrom<UserRequest> for UserDraft {
    type Error = DraftValidationError;

    fn try_from(value: UserRequest) -> Result<Self, Self::Error> {
        Self::new(value.name, value.username)
    }
}

/// List every user.
#[utoipa::path(
    get,
    path = "/api/users",
    responses(
        (status = 200, description = "Users", body = [User]),
        (status = 503, description = "Storage unavailable", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["users"],
    operation_id = "listUsers"
)]
#[get("/users")]
pub async fn list_users(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<User>>> {
    state.users.list().await.map(web::Json)
}

/// Create a user.
#[utoipa::path(
    post,
    path = "/api/users",
    request_body = UserRequest,
    responses(
        (status = 200, description = "Created user", body = User),
        (status = 400, description = "Invalid request", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["users"],
    operation_id = "createUser"
)]
#[post("/users")]
pub async fn create_user(
    state: web::Data<HttpState>,
    payload: web::Json<UserRequest>,
) -> ApiResult<web::Json<User>> {
    let draft = UserDraft::try_from(payload.into_inner()).map_err(map_draft_validation_error)?;
    state.users.create(draft).await.map(web::Json)
}

/// Fetch a user by id.
#[utoipa::path(
    get,
    path = "/api/users/{id}",
    params(("id" = i32, Path, description = "User identifier")),
    responses(
        (status = 200, description = "User", body = User),
        (status = 404, description = "Not found", body = Error)
    ),
    tags = ["users"],
    operation_id = "getUser"
)]
#[get("/users/{id}")]
pub async fn get_user(
    state: web::Data<HttpState>,
    id: web::Path<UserId>,
) -> ApiResult<web::Json<User>> {
    state.users.get(id.into_inner()).await.map(web::Json)
}

/// List the acronyms a user owns.
#[utoipa::path(
    get,
    path = "/api/users/{id}/acronyms",
    params(("id" = i32, Path, description = "User identifier")),
    responses(
        (status = 200, description = "Owned acronyms", body = [Acronym]),
        (status = 404, description = "Not found", body = Error)
    ),
    tags = ["users"],
    operation_id = "listUserAcronyms"
)]
#[get("/users/{id}/acronyms")]
pub async fn user_acronyms(
    state: web::Data<HttpState>,
    id: web::Path<UserId>,
) -> ApiResult<web::Json<Vec<Acronym>>> {
    state.users.acronyms(id.into_inner()).await.map(web::Json)
}
