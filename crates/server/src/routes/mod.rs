use axum::{
    middleware,
    routing::{get, post, put},
    Json, Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use common::types::Health;

use crate::middleware::{require_admin, require_authenticated};
use crate::openapi::ApiDoc;
use crate::state::ServerState;

pub mod auth;
pub mod catalog;
pub mod orders;
pub mod users;

#[utoipa::path(get, path = "/", tag = "health", responses((status = 200, description = "Liveness text")))]
pub async fn root() -> &'static str {
    "Car Doctor Server is running"
}

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "OK", body = crate::openapi::HealthResponse)))]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// Build the full application router.
///
/// Access levels are composed from the gate middleware:
/// - public: catalog, token issuance, logout, liveness
/// - authenticated: order and profile routes (self / owner-or-admin checks
///   run inside the services once the target is known)
/// - authenticated + admin: the full `/orders` and `/users` listings
pub fn build_router(state: ServerState, cors: CorsLayer) -> Router {
    let public = Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route("/jwt", post(auth::issue_token))
        .route("/logout", get(auth::logout))
        .route("/services", get(catalog::list_services))
        .route("/services/titles", get(catalog::service_titles))
        .route("/services/min", get(catalog::service_summaries))
        .route("/services/min/:id", get(catalog::service_summary))
        .route("/services/:id", get(catalog::get_service))
        .route("/products", get(catalog::list_products))
        .route("/products/:id", get(catalog::get_product));

    let admin_only = Router::new()
        .route("/orders", get(orders::list_all))
        .route("/users", get(users::list_all))
        .route_layer(middleware::from_fn_with_state(state.clone(), require_admin));

    let authenticated = Router::new()
        .route("/orders", post(orders::create))
        .route("/orders/email/:email", get(orders::list_own))
        .route("/orders/:id", get(orders::get_one).patch(orders::update).delete(orders::delete))
        .route("/users", put(users::upsert).patch(users::upsert))
        .route("/users/:email", get(users::get_one))
        .route("/users/admin/:email", get(users::admin_status))
        .merge(admin_only)
        .route_layer(middleware::from_fn_with_state(state.clone(), require_authenticated));

    public
        .merge(authenticated)
        .with_state(state)
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
