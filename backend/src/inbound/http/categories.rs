//! Category API handlers.
//!
//! ```text
//! GET    /api/categories
//! POST   /api/categories {"name":"Funny"}
//! GET    /api/categories/{id}
//! DELETE /api/categories/{id}
//! GET    /api/categories/{id}/acronyms
//! ```

use actix_web::{HttpResponse, delete, get, post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Acronym, Category, CategoryDraft, CategoryId, DraftValidationError, Error};
use crate::inbound::http::ApiResult;
use crate::inbound::http::error::map_draft_validation_error;
use crate::inbound::http::state::HttpState;

/// Request body for `POST /api/categories`.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct CategoryRequest {
    /// Ignored; identifiers are assigned by storage.
    #[serde(default)]
    pub id: Option<i32>,
    #[schema(example = "Funny")]
    pub name: String,
}

impl TryFrom<CategoryRequest> for CategoryDraft {
    type Error = DraftValidationError;

    fn try_from(value: CategoryRequest) -> Result<Self, Self::Error> {
        Self::new(value.name)
    }
}

/// List every category.
#[utoipa::path(
    get,
    path = "/api/categories",
    responses((status = 200, description = "Categories", body = [Category])),
    tags = ["categories"],
    operation_id = "listCategories"
)]
#[get("/categories")]
pub async fn list_categories(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<Category>>> {
    state.categories.list().await.map(web::Json)
}

/// Create a category.
#[utoipa::path(
    post,
    path = "/api/categories",
    request_body = CategoryRequest,
    responses(
        (status = 200, description = "Created category", body = Category),
        (status = 400, description = "Invalid request", body = Error)
    ),
    tags = ["categories"],
    operation_id = "createCategory"
)]
#[post("/categories")]
pub async fn create_category(
    state: web::Data<HttpState>,
    payload: web::Json<CategoryRequest>,
) -> ApiResult<web::Json<Category>> {
    let draft =
        CategoryDraft::try_from(payload.into_inner()).map_err(map_draft_validation_error)?;
    state.categories.create(draft).await.map(web::Json)
}

/// Fetch a category by id.
#[utoipa::path(
    get,
    path = "/api/categories/{id}",
    params(("id" = i32, Path, description = "Category identifier")),
    responses(
        (status = 200, description = "Category", body = Category),
        (status = 404, description = "Not found", body = Error)
    ),
    tags = ["categories"],
    operation_id = "getCategory"
)]
#[get("/categories/{id}")]
pub async fn get_category(
    state: web::Data<HttpState>,
    id: web::Path<CategoryId>,
) -> ApiResult<web::Json<Category>> {
    state.categories.get(id.into_inner()).await.map(web::Json)
}

/// Delete a category and its acronym links.
#[utoipa::path(
    delete,
    path = "/api/categories/{id}",
    params(("id" = i32, Path, description = "Category identifier")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Not found", body = Error)
    ),
    tags = ["categories"],
    operation_id = "deleteCategory"
)]
#[delete("/categories/{id}")]
pub async fn delete_category(
    state: web::Data<HttpState>,
    id: web::Path<CategoryId>,
) -> ApiResult<HttpResponse> {
    state.categories.delete(id.into_inner()).await?;
    Ok(HttpResponse::NoContent().finish())
}

/// Acronyms tagged with a category.
#[utoipa::path(
    get,
    path = "/api/categories/{id}/acronyms",
    params(("id" = i32, Path, description = "Category identifier")),
    responses(
        (status = 200, description = "Tagged acronyms", body = [Acronym]),
        (status = 404, description = "Not found", body = Error)
    ),
    tags = ["categories"],
    operation_id = "listCategoryAcronyms"
)]
#[get("/categories/{id}/acronyms")]
pub async fn category_acronyms(
    state: web::Data<HttpState>,
    id: web::Path<CategoryId>,
) -> ApiResult<web::Json<Vec<Acronym>>> {
    state
        .categories
        .acronyms(id.into_inner())
        .await
        .map(web::Json)
}

#[cfg(test)]
mod tests {
    use crate::inbound::http::test_utils::{empty_store, seeded_store, test_app};
    use actix_web::http::StatusCode;
    use actix_web::test as actix_test;
    use rstest::rstest;
    use serde_json::{Value, json};

    #[rstest]
    #[actix_web::test]
    async fn create_then_list() {
        let app = actix_test::init_service(test_app(empty_store())).await;

        let created: Value = actix_test::call_and_read_body_json(
            &app,
            actix_test::TestRequest::post()
                .uri("/api/categories")
                .set_json(json!({"name": "Funny"}))
                .to_request(),
        )
        .await;
        let listed: Value = actix_test::call_and_read_body_json(
            &app,
            actix_test::TestRequest::get()
                .uri("/api/categories")
                .to_request(),
        )
        .await;

        assert_eq!(created, json!({"id": 1, "name": "Funny"}));
        assert_eq!(listed, json!([created]));
    }

    #[rstest]
    #[actix_web::test]
    async fn deleting_category_unlinks_acronyms() {
        let app = actix_test::init_service(test_app(seeded_store().await)).await;
        let attach = actix_test::call_service(
            &app,
            actix_test::TestRequest::post()
                .uri("/api/acronyms/3/categories/1")
                .to_request(),
        )
        .await;
        assert_eq!(attach.status(), StatusCode::CREATED);

        let tagged: Value = actix_test::call_and_read_body_json(
            &app,
            actix_test::TestRequest::get()
                .uri("/api/categories/1/acronyms")
                .to_request(),
        )
        .await;
        assert_eq!(tagged[0]["short"], "BRB");

        let deleted = actix_test::call_service(
            &app,
            actix_test::TestRequest::delete()
                .uri("/api/categories/1")
                .to_request(),
        )
        .await;
        assert_eq!(deleted.status(), StatusCode::NO_CONTENT);

        let linked: Value = actix_test::call_and_read_body_json(
            &app,
            actix_test::TestRequest::get()
                .uri("/api/acronyms/3/categories")
                .to_request(),
        )
        .await;
        assert_eq!(linked, json!([]));
    }

    #[rstest]
    #[case("/api/categories/42")]
    #[case("/api/categories/42/acronyms")]
    #[actix_web::test]
    async fn missing_categories_are_not_found(#[case] uri: &str) {
        let app = actix_test::init_service(test_app(seeded_store().await)).await;

        let res =
            actix_test::call_service(&app, actix_test::TestRequest::get().uri(uri).to_request())
                .await;

        assert_eq!(res.status(), StatusCode::NOT_FOUND);
    }

    #[rstest]
    #[actix_web::test]
    async fn blank_name_is_rejected() {
        let app = actix_test::init_service(test_app(empty_store())).await;

        let res = actix_test::call_service(
            &app,
            actix_test::TestRequest::post()
                .uri("/api/categories")
                .set_json(json!({"name": " "}))
                .to_request(),
        )
        .await;

        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    }
}
