//! Documentation surface.

use axum::http::{Method, StatusCode};
use axum::body::to_bytes;
use wiremock::matchers::any;
use wiremock::{Mock, MockServer, ResponseTemplate};

mod common;

use common::{call, call_json, gateway};

#[tokio::test]
async fn test_openapi_document_served_outside_api_prefix() {
    let upstream = MockServer::start().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&upstream)
        .await;

    let router = gateway(&upstream);
    let (status, doc) = call_json(router.clone(), Method::GET, "/openapi.json", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(doc["info"]["title"], "FakeStore API");
    assert_eq!(doc["servers"][0]["url"], "http://localhost:3000/api");
    assert!(doc["paths"]["/products"]["get"].is_object());
    assert!(doc["paths"]["/carts/user/{userId}"]["get"].is_object());
    assert!(doc["paths"]["/auth/login"]["post"]["responses"]["401"].is_object());

    let response = call(router, Method::GET, "/api/openapi.json", None).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_openapi_document_is_identical_across_requests() {
    let upstream = MockServer::start().await;
    let router = gateway(&upstream);

    let (_, first) = call_json(router.clone(), Method::GET, "/openapi.json", None).await;
    let (_, second) = call_json(router, Method::GET, "/openapi.json", None).await;
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_swagger_ui_served() {
    let upstream = MockServer::start().await;

    let response = call(gateway(&upstream), Method::GET, "/swagger/", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let html = String::from_utf8_lossy(&bytes);
    assert!(html.contains("swagger"));
}
