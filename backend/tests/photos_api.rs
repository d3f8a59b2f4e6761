//! End-to-end behaviour of the photo endpoints.

#[path = "support/app.rs"]
mod app_support;

use actix_web::test::TestRequest;
use app_support::{init_app, send};
use rstest::rstest;
use serde_json::json;

#[actix_web::test]
async fn sunset_scenario() {
    let app = init_app().await;

    let (status, created) = send(
        &app,
        TestRequest::post()
            .uri("/photos")
            .set_json(json!({ "title": "Sunset", "url": "https://x.test/a.jpg" }))
            .to_request(),
    )
    .await;
    assert_eq!(status, 201);
    assert_eq!(created["views"], 0);
    let id = created["photoId"].as_i64().expect("server-assigned id");

    let uri = format!("/photos/{id}");
    send(&app, TestRequest::get().uri(&uri).to_request()).await;
    let (status, second) = send(&app, TestRequest::get().uri(&uri).to_request()).await;
    assert_eq!(status, 200);
    assert_eq!(second["views"], 2);

    let (status, body) = send(
        &app,
        TestRequest::get().uri("/photos?page=5&size=10").to_request(),
    )
    .await;
    assert_eq!(status, 400);
    assert_eq!(body["message"], "Page value out of bounds, max page = 0");
}

#[rstest]
#[case(1, 10, 1)]
#[case(10, 10, 1)]
#[case(11, 10, 2)]
#[case(7, 3, 3)]
#[actix_web::test]
async fn total_pages_is_the_ceiling(
    #[case] items: usize,
    #[case] size: usize,
    #[case] expected_pages: u64,
) {
    let app = init_app().await;
    for n in 0..items {
        send(
            &app,
            TestRequest::post()
                .uri("/photos")
                .set_json(json!({ "title": format!("Photo {n}"), "url": format!("https://x.test/{n}.jpg") }))
                .to_request(),
        )
        .await;
    }

    let last_page = expected_pages - 1;
    let (status, body) = send(
        &app,
        TestRequest::get()
            .uri(&format!("/photos?size={size}&page={last_page}"))
            .to_request(),
    )
    .await;
    assert_eq!(status, 200);
    assert_eq!(body["totalPages"], expected_pages);
    assert_eq!(body["totalItems"], items);

    let (status, body) = send(
        &app,
        TestRequest::get()
            .uri(&format!("/photos?size={size}&page={expected_pages}"))
            .to_request(),
    )
    .await;
    assert_eq!(status, 400);
    assert_eq!(
        body["message"],
        format!("Page value out of bounds, max page = {last_page}")
    );
}

#[rstest]
#[case("/photos")]
#[case("/photos?page=9")]
#[actix_web::test]
async fn empty_collection_wins_over_page_bounds(#[case] uri: &str) {
    let app = init_app().await;

    let (status, _) = send(&app, TestRequest::get().uri(uri).to_request()).await;

    assert_eq!(status, 204);
}

#[rstest]
#[case("ASC")]
#[case("descending")]
#[case("")]
#[actix_web::test]
async fn only_asc_and_desc_are_sort_orders(#[case] order: &str) {
    let app = init_app().await;

    let (status, body) = send(
        &app,
        TestRequest::get()
            .uri(&format!("/photos?sortOrder={order}"))
            .to_request(),
    )
    .await;

    assert_eq!(status, 400);
    assert_eq!(body["httpStatus"], "BAD_REQUEST");
    let message = body["message"].as_str().expect("message");
    assert!(message.contains("Possible values: 'asc'"), "{message}");
}

#[actix_web::test]
async fn deleting_twice_is_not_found() {
    let app = init_app().await;
    send(
        &app,
        TestRequest::post()
            .uri("/photos")
            .set_json(json!({ "title": "Sunset", "url": "https://x.test/a.jpg" }))
            .to_request(),
    )
    .await;

    let (first, body) = send(&app, TestRequest::delete().uri("/photos/1").to_request()).await;
    let (second, error) = send(&app, TestRequest::delete().uri("/photos/1").to_request()).await;
    let (lookup, _) = send(&app, TestRequest::get().uri("/photos/1").to_request()).await;

    assert_eq!(first, 200);
    assert_eq!(body["status"]["deleted"], true);
    assert_eq!(second, 404);
    assert_eq!(error["message"], "Photo not found for this id :: 1");
    assert_eq!(lookup, 404);
}

#[actix_web::test]
async fn concurrent_views_are_all_counted() {
    let app = init_app().await;
    send(
        &app,
        TestRequest::post()
            .uri("/photos")
            .set_json(json!({ "title": "Sunset", "url": "https://x.test/a.jpg" }))
            .to_request(),
    )
    .await;

    let views = (0..8).map(|_| send(&app, TestRequest::get().uri("/photos/1").to_request()));
    futures_util::future::join_all(views).await;

    let (_, listing) = send(&app, TestRequest::get().uri("/photos").to_request()).await;
    assert_eq!(listing["photos"][0]["views"], 8);
}
