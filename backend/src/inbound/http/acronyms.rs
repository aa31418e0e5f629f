//! Acronym API handlers.
//!
//! ```text
//! GET    /api/acronyms
//! POST   /api/acronyms {"short":"OMG","long":"Oh My God","userID":1}
//! GET    /api/acronyms/search?term=OMG
//! GET    /api/acronyms/first
//! GET    /api/acronyms/sorted
//! GET    /api/acronyms/{id}
//! PUT    /api/acronyms/{id}
//! DELETE /api/acronyms/{id}
//! GET    /api/acronyms/{id}/user
//! GET    /api/acronyms/{id}/categories
//! POST   /api/acronyms/{id}/categories/{category_id}
//! DELETE /api/acronyms/{id}/categories/{category_id}
//! ```
//!
//! The fixed segments (`search`, `first`, `sorted`) must be registered ahead
//! of `/acronyms/{id}`.

use actix_web::{HttpResponse, delete, get, post, put, web};
use serde::{Deserialize, Serialize};
use serde_json::json;
use utoipa::{IntoParams, ToSchema};

use crate::domain::{
    Acronym, AcronymDraft, AcronymId, Category, CategoryId, DraftValidationError, Error, User,
    UserId,
};
use crate::inbound::http::ApiResult;
use crate::inbound::http::error::map_draft_validation_error;
use crate::inbound::http::state::HttpState;

/// Request body for creating or replacing an acronym.
///
/// Example JSON:
/// `{"short":"OMG","long":"Oh My God","userID":1}`
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct AcronymRequest {
    /// Ignored; the path id or the storage-assigned id wins.
    #[serde(default)]
    pub id: Option<i32>,
    #[schema(example = "OMG")]
    pub short: String,
    #[schema(example = "Oh My God")]
    pub long: String,
    #[serde(rename = "userID")]
    #[schema(example = 1)]
    pub user_id: i32,
}

impl TryFrom<AcronymRequest> for AcronymDraft {
    type Error = DraftValidationError;

    fn try_from(value: AcronymRequest) -> Result<Self, Self::Error> {
        Self::new(value.short, value.long, UserId::new(value.user_id))
    }
}

/// Query string for `GET /api/acronyms/search`.
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchQuery {
    /// Exact short or long form to match.
    pub term: Option<String>,
}

fn missing_term() -> Error {
    Error::invalid_request("missing required query parameter: term")
        .with_details(json!({ "field": "term", "code": "missing_field" }))
}

fn parse_draft(payload: web::Json<AcronymRequest>) -> ApiResult<AcronymDraft> {
    AcronymDraft::try_from(payload.into_inner()).map_err(map_draft_validation_error)
}

/// List every acronym.
#[utoipa::path(
    get,
    path = "/api/acronyms",
    responses(
        (status = 200, description = "Acronyms", body = [Acronym]),
        (status = 503, description = "Storage unavailable", body = Error)
    ),
    tags = ["acronyms"],
    operation_id = "listAcronyms"
)]
#[get("/acronyms")]
pub async fn list_acronyms(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<Acronym>>> {
    state.acronyms.list().await.map(web::Json)
}

/// Create an acronym owned by an existing user.
#[utoipa::path(
    post,
    path = "/api/acronyms",
    request_body = AcronymRequest,
    responses(
        (status = 200, description = "Created acronym", body = Acronym),
        (status = 400, description = "Invalid request or unknown owner", body = Error)
    ),
    tags = ["acronyms"],
    operation_id = "createAcronym"
)]
#[post("/acronyms")]
pub async fn create_acronym(
    state: web::Data<HttpState>,
    payload: web::Json<AcronymRequest>,
) -> ApiResult<web::Json<Acronym>> {
    let draft = parse_draft(payload)?;
    state.acronyms.create(draft).await.map(web::Json)
}

/// Acronyms whose short or long form equals `term`.
#[utoipa::path(
    get,
    path = "/api/acronyms/search",
    params(SearchQuery),
    responses(
        (status = 200, description = "Matching acronyms", body = [Acronym]),
        (status = 400, description = "Missing term", body = Error)
    ),
    tags = ["acronyms"],
    operation_id = "searchAcronyms"
)]
#[get("/acronyms/search")]
pub async fn search_acronyms(
    state: web::Data<HttpState>,
    query: web::Query<SearchQuery>,
) -> ApiResult<web::Json<Vec<Acronym>>> {
    let term = query.into_inner().term.ok_or_else(missing_term)?;
    state.acronyms.search(&term).await.map(web::Json)
}

/// The first acronym in storage order.
#[utoipa::path(
    get,
    path = "/api/acronyms/first",
    responses(
        (status = 200, description = "First acronym", body = Acronym),
        (status = 404, description = "No acronyms exist", body = Error)
    ),
    tags = ["acronyms"],
    operation_id = "firstAcronym"
)]
#[get("/acronyms/first")]
pub async fn first_acronym(state: web::Data<HttpState>) -> ApiResult<web::Json<Acronym>> {
    state.acronyms.first().await.map(web::Json)
}

/// Every acronym ordered by short form.
#[utoipa::path(
    get,
    path = "/api/acronyms/sorted",
    responses((status = 200, description = "Acronyms sorted by short form", body = [Acronym])),
    tags = ["acronyms"],
    operation_id = "sortedAcronyms"
)]
#[get("/acronyms/sorted")]
pub async fn sorted_acronyms(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<Acronym>>> {
    state.acronyms.sorted().await.map(web::Json)
}

/// Fetch an acronym by id.
#[utoipa::path(
    get,
    path = "/api/acronyms/{id}",
    params(("id" = i32, Path, description = "Acronym identifier")),
    responses(
        (status = 200, description = "Acronym", body = Acronym),
        (status = 404, description = "Not found", body = Error)
    ),
    tags = ["acronyms"],
    operation_id = "getAcronym"
)]
#[get("/acronyms/{id}")]
pub async fn get_acronym(
    state: web::Data<HttpState>,
    id: web::Path<AcronymId>,
) -> ApiResult<web::Json<Acronym>> {
    state.acronyms.get(id.into_inner()).await.map(web::Json)
}

/// Replace every field of an acronym.
#[utoipa::path(
    put,
    path = "/api/acronyms/{id}",
    params(("id" = i32, Path, description = "Acronym identifier")),
    request_body = AcronymRequest,
    responses(
        (status = 200, description = "Updated acronym", body = Acronym),
        (status = 400, description = "Invalid request or unknown owner", body = Error),
        (status = 404, description = "Not found", body = Error)
    ),
    tags = ["acronyms"],
    operation_id = "updateAcronym"
)]
#[put("/acronyms/{id}")]
pub async fn update_acronym(
    state: web::Data<HttpState>,
    id: web::Path<AcronymId>,
    payload: web::Json<AcronymRequest>,
) -> ApiResult<web::Json<Acronym>> {
    let draft = parse_draft(payload)?;
    state
        .acronyms
        .update(id.into_inner(), draft)
        .await
        .map(web::Json)
}

/// Delete an acronym and its category links.
#[utoipa::path(
    delete,
    path = "/api/acronyms/{id}",
    params(("id" = i32, Path, description = "Acronym identifier")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Not found", body = Error)
    ),
    tags = ["acronyms"],
    operation_id = "deleteAcronym"
)]
#[delete("/acronyms/{id}")]
pub async fn delete_acronym(
    state: web::Data<HttpState>,
    id: web::Path<AcronymId>,
) -> ApiResult<HttpResponse> {
    state.acronyms.delete(id.into_inner()).await?;
    Ok(HttpResponse::NoContent().finish())
}

/// The user owning an acronym.
#[utoipa::path(
    get,
    path = "/api/acronyms/{id}/user",
    params(("id" = i32, Path, description = "Acronym identifier")),
    responses(
        (status = 200, description = "Owner", body = User),
        (status = 404, description = "Not found", body = Error)
    ),
    tags = ["acronyms"],
    operation_id = "getAcronymOwner"
)]
#[get("/acronyms/{id}/user")]
pub async fn acronym_user(
    state: web::Data<HttpState>,
    id: web::Path<AcronymId>,
) -> ApiResult<web::Json<User>> {
    state.acronyms.owner(id.into_inner()).await.map(web::Json)
}

/// Categories linked to an acronym.
#[utoipa::path(
    get,
    path = "/api/acronyms/{id}/categories",
    params(("id" = i32, Path, description = "Acronym identifier")),
    responses(
        (status = 200, description = "Linked categories", body = [Category]),
        (status = 404, description = "Not found", body = Error)
    ),
    tags = ["acronyms"],
    operation_id = "listAcronymCategories"
)]
#[get("/acronyms/{id}/categories")]
pub async fn acronym_categories(
    state: web::Data<HttpState>,
    id: web::Path<AcronymId>,
) -> ApiResult<web::Json<Vec<Category>>> {
    state
        .acronyms
        .categories(id.into_inner())
        .await
        .map(web::Json)
}

/// Link a category to an acronym.
#[utoipa::path(
    post,
    path = "/api/acronyms/{id}/categories/{category_id}",
    params(
        ("id" = i32, Path, description = "Acronym identifier"),
        ("category_id" = i32, Path, description = "Category identifier")
    ),
    responses(
        (status = 201, description = "Linked"),
        (status = 404, description = "Acronym or category not found", body = Error)
    ),
    tags = ["acronyms"],
    operation_id = "attachCategory"
)]
#[post("/acronyms/{id}/categories/{category_id}")]
pub async fn attach_category(
    state: web::Data<HttpState>,
    path: web::Path<(AcronymId, CategoryId)>,
) -> ApiResult<HttpResponse> {
    let (acronym, category) = path.into_inner();
    state.acronyms.attach_category(acronym, category).await?;
    Ok(HttpResponse::Created().finish())
}

/// Unlink a category from an acronym.
#[utoipa::path(
    delete,
    path = "/api/acronyms/{id}/categories/{category_id}",
    params(
        ("id" = i32, Path, description = "Acronym identifier"),
        ("category_id" = i32, Path, description = "Category identifier")
    ),
    responses(
        (status = 204, description = "Unlinked, or was never linked"),
        (status = 404, description = "Acronym or category not found", body = Error)
    ),
    tags = ["acronyms"],
    operation_id = "detachCategory"
)]
#[delete("/acronyms/{id}/categories/{category_id}")]
pub async fn detach_category(
    state: web::Data<HttpState>,
    path: web::Path<(AcronymId, CategoryId)>,
) -> ApiResult<HttpResponse> {
    let (acronym, category) = path.into_inner();
    state.acronyms.detach_category(acronym, category).await?;
    Ok(HttpResponse::NoContent().finish())
}

#[cfg(test)]
mod tests;
