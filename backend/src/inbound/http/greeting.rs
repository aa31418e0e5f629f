//! Plain-text smoke route.

use actix_web::{HttpResponse, get};

/// Answer `Hello, world!`.
#[utoipa::path(
    get,
    path = "/hello",
    responses((status = 200, description = "Greeting", body = String, content_type = "text/plain")),
    tags = ["greeting"],
    operation_id = "hello"
)]
#[get("/hello")]
pub async fn hello() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body("Hello, world!")
}
