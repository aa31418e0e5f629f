//! Handler tests for the acronym routes, run against the in-memory store.

use actix_web::dev::ServiceResponse;
use actix_web::http::StatusCode;
use actix_web::test as actix_test;
use rstest::rstest;
use serde_json::{Value, json};

use crate::inbound::http::test_utils::{empty_store, seeded_store, test_app};

async fn split(res: ServiceResponse) -> (StatusCode, Value) {
    let status = res.status();
    let body = actix_test::read_body(res).await;
    let value = if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body).expect("JSON body")
    };
    (status, value)
}

macro_rules! send {
    ($app:expr, $request:expr $(,)?) => {
        split(actix_test::call_service($app, $request.to_request()).await)
    };
}

fn shorts(value: &Value) -> Vec<String> {
    value
        .as_array()
        .expect("array body")
        .iter()
        .filter_map(|a| a["short"].as_str().map(str::to_owned))
        .collect()
}

#[rstest]
#[actix_web::test]
async fn create_then_fetch_round_trips() {
    let app = actix_test::init_service(test_app(seeded_store().await)).await;

    let (status, created) = send!(
        &app,
        actix_test::TestRequest::post()
            .uri("/api/acronyms")
            .set_json(json!({"short": "IKR", "long": "I Know Right", "userID": 2})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(created["userID"], 2);

    let id = created["id"].as_i64().expect("assigned id");
    let (status, fetched) = send!(
        &app,
        actix_test::TestRequest::get().uri(&format!("/api/acronyms/{id}")),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);
}

#[rstest]
#[actix_web::test]
async fn create_with_unknown_owner_is_bad_request() {
    let app = actix_test::init_service(test_app(empty_store())).await;

    let (status, body) = send!(
        &app,
        actix_test::TestRequest::post()
            .uri("/api/acronyms")
            .set_json(json!({"short": "OMG", "long": "Oh My God", "userID": 5})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["details"]["field"], "userID");
}

#[rstest]
#[case(json!({"short": "OMG", "long": "Oh My God"}))]
#[case(json!({"short": "OMG", "long": "Oh My God", "userID": 1, "extra": true}))]
#[case(json!({"short": "OMG", "long": "Oh My God", "userID": "one"}))]
#[actix_web::test]
async fn malformed_bodies_are_bad_requests(#[case] body: Value) {
    let app = actix_test::init_service(test_app(seeded_store().await)).await;

    let (status, value) = send!(
        &app,
        actix_test::TestRequest::post()
            .uri("/api/acronyms")
            .set_json(body),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(value["code"], "invalid_request");
}

#[rstest]
#[actix_web::test]
async fn update_overwrites_every_field() {
    let app = actix_test::init_service(test_app(seeded_store().await)).await;

    let (status, updated) = send!(
        &app,
        actix_test::TestRequest::put()
            .uri("/api/acronyms/1")
            .set_json(json!({"id": 40, "short": "OMG", "long": "Oh My Gosh", "userID": 2})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        updated,
        json!({"id": 1, "short": "OMG", "long": "Oh My Gosh", "userID": 2})
    );
}

#[rstest]
#[actix_web::test]
async fn update_of_missing_acronym_is_not_found() {
    let app = actix_test::init_service(test_app(seeded_store().await)).await;

    let (status, _) = send!(
        &app,
        actix_test::TestRequest::put()
            .uri("/api/acronyms/99")
            .set_json(json!({"short": "OMG", "long": "Oh My God", "userID": 1})),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[rstest]
#[actix_web::test]
async fn delete_then_fetch_is_not_found() {
    let app = actix_test::init_service(test_app(seeded_store().await)).await;

    let (status, body) = send!(
        &app,
        actix_test::TestRequest::delete().uri("/api/acronyms/2")
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(body, Value::Null);

    let (status, _) = send!(&app, actix_test::TestRequest::get().uri("/api/acronyms/2")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send!(&app, actix_test::TestRequest::delete().uri("/api/acronyms/2")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[rstest]
#[case("OMG", vec!["OMG"])]
#[case("Be Right Back", vec!["BRB"])]
#[case("nothing", vec![])]
#[actix_web::test]
async fn search_matches_short_or_long_form(#[case] term: &str, #[case] expected: Vec<&str>) {
    let app = actix_test::init_service(test_app(seeded_store().await)).await;

    let uri = format!("/api/acronyms/search?term={}", term.replace(' ', "%20"));
    let (status, body) = send!(&app, actix_test::TestRequest::get().uri(&uri)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(shorts(&body), expected);
}

#[rstest]
#[actix_web::test]
async fn search_without_term_is_bad_request() {
    let app = actix_test::init_service(test_app(seeded_store().await)).await;

    let (status, body) = send!(
        &app,
        actix_test::TestRequest::get().uri("/api/acronyms/search")
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["details"]["field"], "term");
}

#[rstest]
#[actix_web::test]
async fn first_returns_lowest_id_and_404_when_empty() {
    let app = actix_test::init_service(test_app(seeded_store().await)).await;
    let (status, body) = send!(
        &app,
        actix_test::TestRequest::get().uri("/api/acronyms/first")
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["short"], "OMG");

    let empty = actix_test::init_service(test_app(empty_store())).await;
    let (status, _) = send!(
        &empty,
        actix_test::TestRequest::get().uri("/api/acronyms/first")
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[rstest]
#[actix_web::test]
async fn sorted_orders_by_short_form() {
    let app = actix_test::init_service(test_app(seeded_store().await)).await;

    let (status, body) = send!(
        &app,
        actix_test::TestRequest::get().uri("/api/acronyms/sorted")
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(shorts(&body), ["BRB", "OMG", "TIL"]);
}

#[rstest]
#[actix_web::test]
async fn owner_is_resolved() {
    let app = actix_test::init_service(test_app(seeded_store().await)).await;

    let (status, body) = send!(
        &app,
        actix_test::TestRequest::get().uri("/api/acronyms/2/user")
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["username"], "grace");
}

#[rstest]
#[actix_web::test]
async fn attach_list_detach_cycle() {
    let app = actix_test::init_service(test_app(seeded_store().await)).await;

    for _ in 0..2 {
        let (status, body) = send!(
            &app,
            actix_test::TestRequest::post().uri("/api/acronyms/1/categories/2"),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body, Value::Null);
    }

    let (_, linked) = send!(
        &app,
        actix_test::TestRequest::get().uri("/api/acronyms/1/categories"),
    )
    .await;
    assert_eq!(linked, json!([{"id": 2, "name": "Teenager"}]));

    for _ in 0..2 {
        let (status, _) = send!(
            &app,
            actix_test::TestRequest::delete().uri("/api/acronyms/1/categories/2"),
        )
        .await;
        assert_eq!(status, StatusCode::NO_CONTENT);
    }

    let (_, linked) = send!(
        &app,
        actix_test::TestRequest::get().uri("/api/acronyms/1/categories"),
    )
    .await;
    assert_eq!(linked, json!([]));
}

#[rstest]
#[case("/api/acronyms/9/categories/1")]
#[case("/api/acronyms/1/categories/9")]
#[actix_web::test]
async fn attach_with_missing_end_is_not_found(#[case] uri: &str) {
    let app = actix_test::init_service(test_app(seeded_store().await)).await;

    let (status, body) = send!(&app, actix_test::TestRequest::post().uri(uri)).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "not_found");
}

#[rstest]
#[case("/api/acronyms/abc")]
#[case("/api/acronyms/abc/user")]
#[case("/api/acronyms/1/categories/abc")]
#[actix_web::test]
async fn non_numeric_ids_are_not_found(#[case] uri: &str) {
    let app = actix_test::init_service(test_app(seeded_store().await)).await;

    let (status, _) = send!(&app, actix_test::TestRequest::get().uri(uri)).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[rstest]
#[actix_web::test]
async fn responses_carry_trace_header() {
    let app = actix_test::init_service(test_app(empty_store())).await;

    let res = actix_test::call_service(
        &app,
        actix_test::TestRequest::get()
            .uri("/api/acronyms/1")
            .to_request(),
    )
    .await;
    let header = res
        .headers()
        .get(crate::domain::TRACE_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned)
        .expect("trace-id header");
    let body: Value = actix_test::read_body_json(res).await;

    assert_eq!(body["traceId"], header.as_str());
}
