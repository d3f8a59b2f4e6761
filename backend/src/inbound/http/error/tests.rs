//! Tests for HTTP error mapping.

use super::*;
use crate::domain::{EntityKind, FieldViolation};
use actix_web::body::to_bytes;
use actix_web::http::StatusCode;
use actix_web::{App, ResponseError, test as actix_test};
use chrono::TimeZone;
use rstest::{fixture, rstest};
use serde_json::{Value, json};

#[fixture]
fn fixed_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 17, 9, 0, 0)
        .single()
        .expect("valid timestamp")
}

async fn body_of(error: Error) -> (StatusCode, Value) {
    let response = ResponseError::error_response(&error);
    let status = response.status();
    let bytes = to_bytes(response.into_body())
        .await
        .expect("reading response body succeeds");
    (
        status,
        serde_json::from_slice(&bytes).expect("error JSON deserialisation succeeds"),
    )
}

#[rstest]
#[case(Error::not_found(EntityKind::Photo, 1), StatusCode::NOT_FOUND)]
#[case(Error::EmptyCollection, StatusCode::NO_CONTENT)]
#[case(Error::PageOutOfRange { max_page: 0 }, StatusCode::BAD_REQUEST)]
#[case(Error::invalid_argument("bad"), StatusCode::BAD_REQUEST)]
#[case(
    Error::unresolvable_sort_field(EntityKind::User, "password"),
    StatusCode::BAD_REQUEST
)]
#[case(Error::validation(Vec::new()), StatusCode::BAD_REQUEST)]
#[case(Error::constraint_violation("dup"), StatusCode::BAD_REQUEST)]
#[case(Error::route_not_found("GET", "/nope"), StatusCode::BAD_REQUEST)]
#[case(Error::service_unavailable("down"), StatusCode::SERVICE_UNAVAILABLE)]
#[case(Error::internal("boom"), StatusCode::INTERNAL_SERVER_ERROR)]
fn every_error_kind_has_a_status(#[case] error: Error, #[case] expected: StatusCode) {
    assert_eq!(ResponseError::status_code(&error), expected);
}

#[rstest]
#[case(StatusCode::NOT_FOUND, "NOT_FOUND")]
#[case(StatusCode::BAD_REQUEST, "BAD_REQUEST")]
#[case(StatusCode::NO_CONTENT, "NO_CONTENT")]
#[case(StatusCode::SERVICE_UNAVAILABLE, "SERVICE_UNAVAILABLE")]
fn status_names_are_upper_snake_case(#[case] status: StatusCode, #[case] expected: &str) {
    assert_eq!(status_name(status), expected);
}

#[rstest]
fn body_omits_detailed_errors_when_there_are_none(fixed_time: DateTime<Utc>) {
    let body = ErrorResponse::from_error(&Error::not_found(EntityKind::Photo, 7), fixed_time);

    let value = serde_json::to_value(body).expect("serialises");
    assert_eq!(
        value,
        json!({
            "timestamp": "2024-05-17T09:00:00Z",
            "httpStatus": "NOT_FOUND",
            "httpStatusCode": 404,
            "message": "Photo not found for this id :: 7",
        })
    );
}

#[rstest]
fn violations_become_detailed_errors(fixed_time: DateTime<Utc>) {
    let error = Error::validation(vec![
        FieldViolation::new(EntityKind::Photo, "title", "must not be blank")
            .with_rejected_value(json!("")),
        FieldViolation::unnamed("duplicate value"),
    ]);

    let value =
        serde_json::to_value(ErrorResponse::from_error(&error, fixed_time)).expect("serialises");

    assert_eq!(value["message"], "Validation error");
    assert_eq!(
        value["detailedErrors"],
        json!([
            {
                "field": "title",
                "message": "must not be blank",
                "objectName": "photo",
                "rejectedValue": "",
            },
            { "message": "duplicate value" },
        ])
    );
}

#[actix_web::test]
async fn internal_errors_are_redacted() {
    let (status, body) = body_of(Error::internal("connection string leaked")).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["message"], REDACTED_MESSAGE);
    assert_eq!(body["httpStatus"], "INTERNAL_SERVER_ERROR");
}

#[actix_web::test]
async fn unavailable_store_message_is_passed_through() {
    let (status, body) = body_of(Error::service_unavailable("database unreachable")).await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["message"], "database unreachable");
}

#[actix_web::test]
async fn empty_collection_still_carries_a_body() {
    let (status, body) = body_of(Error::EmptyCollection).await;

    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(body["message"], "The repository is empty");
    assert_eq!(body["httpStatusCode"], 204);
}

#[test]
fn from_actix_error_is_internal() {
    let err: Error = actix_web::error::ErrorBadRequest("boom").into();

    assert!(matches!(err, Error::Internal { .. }));
}

#[actix_web::test]
async fn unmatched_routes_render_route_not_found() {
    let app = actix_test::init_service(App::new().default_service(web::to(route_not_found))).await;
    let request = actix_test::TestRequest::patch()
        .uri("/photos/1?x=y")
        .to_request();

    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(
        body["message"],
        "Could not find the method PATCH for the URL /photos/1?x=y"
    );
}

#[actix_web::test]
async fn malformed_json_is_an_invalid_argument() {
    async fn echo(body: web::Json<Value>) -> HttpResponse {
        HttpResponse::Ok().json(body.into_inner())
    }
    let app = actix_test::init_service(
        App::new()
            .app_data(json_config())
            .route("/", web::post().to(echo)),
    )
    .await;
    let request = actix_test::TestRequest::post()
        .uri("/")
        .insert_header(("content-type", "application/json"))
        .set_payload("{not json")
        .to_request();

    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = actix_test::read_body_json(response).await;
    let message = body["message"].as_str().expect("message");
    assert!(message.starts_with("Malformed JSON request body"), "{message}");
}
