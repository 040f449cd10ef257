#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use serde_json::Value;
use service::auth::TokenService;
use service::catalog::repository::mock::MockCatalogRepository;
use service::errors::ServiceError;
use service::orders::domain::{Order, OrderPatch};
use service::orders::repository::{mock::MockOrderRepository, OrderRepository};
use service::results::{DeleteResult, UpdateResult};
use service::users::domain::{ProfileUpdate, Role, User};
use service::users::repository::{mock::MockUserRepository, UserRepository};
use service::AppServices;
use tower::ServiceExt;

use server::routes::build_router;
use server::startup::build_cors;
use server::state::ServerState;

pub const SECRET: &str = "test-secret";
pub const ADMIN: &str = "admin@x.com";

pub struct TestApp {
    pub router: Router,
    pub tokens: Arc<TokenService>,
    pub users: Arc<MockUserRepository>,
    pub catalog: Arc<MockCatalogRepository>,
    pub orders: Arc<CountingOrders>,
}

impl TestApp {
    /// Router over in-memory repositories with one admin user seeded.
    pub async fn new() -> Self {
        let users = Arc::new(MockUserRepository::default());
        users.upsert_profile(ADMIN, ProfileUpdate::default()).await.expect("seed admin");
        users.set_role(ADMIN, Some(Role::Admin)).await;
        Self::with_users(users.clone(), users)
    }

    /// Same wiring, but role lookups and profile calls go to `user_repo`.
    pub fn with_users(user_repo: Arc<dyn UserRepository>, users: Arc<MockUserRepository>) -> Self {
        let catalog = Arc::new(MockCatalogRepository::default());
        let orders = Arc::new(CountingOrders::default());
        let services = AppServices::new(catalog.clone(), orders.clone(), user_repo);
        let auth = configs::AuthConfig { jwt_secret: SECRET.into(), cookie_secure: false, ..Default::default() };
        let state = ServerState::new(services, &auth);
        let tokens = state.tokens.clone();
        let cors = build_cors(&configs::CorsConfig::default()).expect("cors");
        let router = build_router(state, cors);
        Self { router, tokens, users, catalog, orders }
    }

    pub fn token_for(&self, email: &str) -> String {
        self.tokens.issue(email).expect("issue").token
    }

    pub async fn send(&self, req: Request<Body>) -> (StatusCode, Value) {
        let resp = self.router.clone().oneshot(req).await.expect("infallible");
        let status = resp.status();
        let bytes = to_bytes(resp.into_body(), usize::MAX).await.expect("body");
        let body = serde_json::from_slice(&bytes).unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()));
        (status, body)
    }

    pub async fn call(&self, method: Method, uri: &str, email: Option<&str>, body: Option<Value>) -> (StatusCode, Value) {
        let token = email.map(|e| self.token_for(e));
        self.send(request(method, uri, token.as_deref(), body)).await
    }
}

pub fn request(method: Method, uri: &str, token: Option<&str>, body: Option<Value>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(t) = token {
        builder = builder.header(header::COOKIE, format!("token={t}"));
    }
    match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .expect("request"),
        None => builder.body(Body::empty()).expect("request"),
    }
}

/// In-memory orders that count how often the collection was read or written.
#[derive(Default)]
pub struct CountingOrders {
    inner: MockOrderRepository,
    calls: AtomicUsize,
}

impl CountingOrders {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn hit(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }
}

#[async_trait]
impl OrderRepository for CountingOrders {
    async fn insert(&self, order: Order) -> Result<Order, ServiceError> {
        self.hit();
        self.inner.insert(order).await
    }
    async fn find(&self, id: uuid::Uuid) -> Result<Option<Order>, ServiceError> {
        self.hit();
        self.inner.find(id).await
    }
    async fn list(&self, owner: Option<&str>) -> Result<Vec<Order>, ServiceError> {
        self.hit();
        self.inner.list(owner).await
    }
    async fn update(&self, id: uuid::Uuid, patch: OrderPatch) -> Result<UpdateResult, ServiceError> {
        self.hit();
        self.inner.update(id, patch).await
    }
    async fn delete(&self, id: uuid::Uuid) -> Result<DeleteResult, ServiceError> {
        self.hit();
        self.inner.delete(id).await
    }
}

/// A user store that is down: every call fails.
pub struct UnreachableUsers;

#[async_trait]
impl UserRepository for UnreachableUsers {
    async fn find(&self, _email: &str) -> Result<Option<User>, ServiceError> {
        Err(ServiceError::Db("connection refused".into()))
    }
    async fn list(&self) -> Result<Vec<User>, ServiceError> {
        Err(ServiceError::Db("connection refused".into()))
    }
    async fn upsert_profile(&self, _email: &str, _profile: ProfileUpdate) -> Result<UpdateResult, ServiceError> {
        Err(ServiceError::Db("connection refused".into()))
    }
}
