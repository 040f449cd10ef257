mod support;

use axum::http::{Method, StatusCode};
use serde_json::{json, Value};

use support::{TestApp, ADMIN};

async fn place(app: &TestApp, owner: &str, body: Value) -> String {
    let (status, ack) = app.call(Method::POST, "/orders", Some(owner), Some(body)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ack["acknowledged"], true);
    ack["insertedId"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn ownership_scenario() {
    let app = TestApp::new().await;
    let id = place(&app, "a@x.com", json!({"title": "Oil change", "price": 20, "date": "2024-05-01"})).await;
    let uri = format!("/orders/{id}");

    let (status, order) = app.call(Method::GET, &uri, Some("a@x.com"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(order["email"], "a@x.com");
    assert_eq!(order["status"], "pending");
    assert_eq!(order["date"], "2024-05-01");

    let (status, body) = app.call(Method::GET, &uri, Some("b@x.com"), None).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["message"], "Forbidden");

    let (status, order) = app.call(Method::GET, &uri, Some(ADMIN), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(order["_id"], id.as_str());
}

#[tokio::test]
async fn owner_comes_from_the_token_not_the_body() {
    let app = TestApp::new().await;
    let id = place(&app, "a@x.com", json!({"title": "Brakes", "price": "35.5", "email": "victim@x.com"})).await;
    let (status, order) = app.call(Method::GET, &format!("/orders/{id}"), Some("a@x.com"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(order["email"], "a@x.com");
    assert_eq!(order["price"], 35.5);

    let (status, _) = app.call(Method::GET, &format!("/orders/{id}"), Some("victim@x.com"), None).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn patch_and_delete_are_owner_or_admin() {
    let app = TestApp::new().await;
    let id = place(&app, "a@x.com", json!({"title": "Tyres", "price": 80})).await;
    let uri = format!("/orders/{id}");

    let (status, _) = app.call(Method::PATCH, &uri, Some("b@x.com"), Some(json!({"status": "confirm"}))).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    let (status, _) = app.call(Method::DELETE, &uri, Some("b@x.com"), None).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, ack) = app.call(Method::PATCH, &uri, Some(ADMIN), Some(json!({"status": "confirm"}))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ack["matchedCount"], 1);
    assert_eq!(ack["modifiedCount"], 1);
    let (_, order) = app.call(Method::GET, &uri, Some("a@x.com"), None).await;
    assert_eq!(order["status"], "confirm");

    let (status, ack) = app.call(Method::DELETE, &uri, Some("a@x.com"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ack["deletedCount"], 1);

    let (status, body) = app.call(Method::GET, &uri, Some("a@x.com"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Not Found");
}

#[tokio::test]
async fn missing_order_is_not_found_even_for_strangers() {
    let app = TestApp::new().await;
    let uri = format!("/orders/{}", uuid::Uuid::new_v4());
    for method in [Method::GET, Method::DELETE] {
        let (status, _) = app.call(method, &uri, Some("stranger@x.com"), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
    let (status, _) = app.call(Method::PATCH, &uri, Some("stranger@x.com"), Some(json!({"status": "x"}))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn malformed_order_id_is_internal_failure() {
    let app = TestApp::new().await;
    let (status, body) = app.call(Method::GET, "/orders/not-an-id", Some("a@x.com"), None).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["message"], "Internal Server Error");
}

#[tokio::test]
async fn own_orders_by_email() {
    let app = TestApp::new().await;
    place(&app, "a@x.com", json!({"title": "One", "price": 1})).await;
    place(&app, "a@x.com", json!({"title": "Two", "price": 2})).await;
    place(&app, "b@x.com", json!({"title": "Three", "price": 3})).await;

    let (status, list) = app.call(Method::GET, "/orders/email/a@x.com", Some("a@x.com"), None).await;
    assert_eq!(status, StatusCode::OK);
    let list = list.as_array().unwrap();
    assert_eq!(list.len(), 2);
    assert!(list.iter().all(|o| o["email"] == "a@x.com"));

    let (status, _) = app.call(Method::GET, "/orders/email/b@x.com", Some("a@x.com"), None).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, all) = app.call(Method::GET, "/orders", Some(ADMIN), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(all.as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn untitled_order_is_inserted() {
    let app = TestApp::new().await;
    let id = place(&app, "a@x.com", json!({"price": 40})).await;
    let (status, order) = app.call(Method::GET, &format!("/orders/{id}"), Some("a@x.com"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(order["price"], 40.0);
    assert_eq!(order["title"], "");
}

#[tokio::test]
async fn unreadable_patch_body_gets_json_error() {
    let app = TestApp::new().await;
    let id = place(&app, "a@x.com", json!({"title": "Oil", "price": 10})).await;
    let (status, body) = app
        .call(Method::PATCH, &format!("/orders/{id}"), Some("a@x.com"), Some(json!({"price": "cheap"})))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"message": "Invalid request body"}));
}
