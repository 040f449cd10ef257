use axum::{
    extract::{Path, State},
    Json,
};
use service::orders::domain::{NewOrder, Order, OrderPatch};
use service::results::{DeleteResult, InsertOneResult, UpdateResult};

use crate::errors::ApiError;
use crate::extract::ApiJson;
use crate::middleware::Authenticated;
use crate::state::ServerState;

/// Place an order. The owner is the cookie identity; a body `email` is ignored.
#[utoipa::path(
    post, path = "/orders", tag = "orders",
    request_body = crate::openapi::NewOrderDoc,
    responses((status = 200, description = "Inserted"), (status = 401, description = "Not authorized", body = crate::openapi::MessageDoc))
)]
pub async fn create(
    State(state): State<ServerState>,
    Authenticated(identity): Authenticated,
    ApiJson(input): ApiJson<NewOrder>,
) -> Result<Json<InsertOneResult>, ApiError> {
    Ok(Json(state.services.orders.create(&identity, input).await?))
}

#[utoipa::path(
    get, path = "/orders", tag = "orders",
    responses((status = 200, description = "All orders"), (status = 401, description = "Not authorized", body = crate::openapi::MessageDoc), (status = 403, description = "Forbidden", body = crate::openapi::MessageDoc))
)]
pub async fn list_all(State(state): State<ServerState>) -> Result<Json<Vec<Order>>, ApiError> {
    Ok(Json(state.services.orders.list_all().await?))
}

#[utoipa::path(
    get, path = "/orders/email/{email}", tag = "orders",
    params(("email" = String, Path, description = "Owner email; must be the requester")),
    responses((status = 200, description = "Own orders"), (status = 403, description = "Forbidden", body = crate::openapi::MessageDoc))
)]
pub async fn list_own(
    State(state): State<ServerState>,
    Authenticated(identity): Authenticated,
    Path(email): Path<String>,
) -> Result<Json<Vec<Order>>, ApiError> {
    Ok(Json(state.services.orders.list_own(&identity, &email).await?))
}

#[utoipa::path(
    get, path = "/orders/{id}", tag = "orders",
    params(("id" = String, Path, description = "Order id")),
    responses((status = 200, description = "Order"), (status = 403, description = "Forbidden", body = crate::openapi::MessageDoc), (status = 404, description = "Not Found", body = crate::openapi::MessageDoc))
)]
pub async fn get_one(
    State(state): State<ServerState>,
    Authenticated(identity): Authenticated,
    Path(id): Path<String>,
) -> Result<Json<Order>, ApiError> {
    Ok(Json(state.services.orders.get(&identity, &id).await?))
}

#[utoipa::path(
    patch, path = "/orders/{id}", tag = "orders",
    params(("id" = String, Path, description = "Order id")),
    request_body = crate::openapi::OrderPatchDoc,
    responses((status = 200, description = "Updated"), (status = 403, description = "Forbidden", body = crate::openapi::MessageDoc), (status = 404, description = "Not Found", body = crate::openapi::MessageDoc))
)]
pub async fn update(
    State(state): State<ServerState>,
    Authenticated(identity): Authenticated,
    Path(id): Path<String>,
    ApiJson(patch): ApiJson<OrderPatch>,
) -> Result<Json<UpdateResult>, ApiError> {
    Ok(Json(state.services.orders.update(&identity, &id, patch).await?))
}

#[utoipa::path(
    delete, path = "/orders/{id}", tag = "orders",
    params(("id" = String, Path, description = "Order id")),
    responses((status = 200, description = "Deleted"), (status = 403, description = "Forbidden", body = crate::openapi::MessageDoc), (status = 404, description = "Not Found", body = crate::openapi::MessageDoc))
)]
pub async fn delete(
    State(state): State<ServerState>,
    Authenticated(identity): Authenticated,
    Path(id): Path<String>,
) -> Result<Json<DeleteResult>, ApiError> {
    Ok(Json(state.services.orders.delete(&identity, &id).await?))
}
