use axum::{
    extract::{Path, State},
    Json,
};
use service::catalog::domain::{CatalogItem, CatalogKind, ItemSummary, ItemTitle};

use crate::errors::ApiError;
use crate::state::ServerState;

#[utoipa::path(get, path = "/services", tag = "catalog", responses((status = 200, description = "All services")))]
pub async fn list_services(State(state): State<ServerState>) -> Result<Json<Vec<CatalogItem>>, ApiError> {
    Ok(Json(state.services.catalog.list(CatalogKind::Services).await?))
}

#[utoipa::path(get, path = "/services/titles", tag = "catalog", responses((status = 200, description = "Service titles")))]
pub async fn service_titles(State(state): State<ServerState>) -> Result<Json<Vec<ItemTitle>>, ApiError> {
    Ok(Json(state.services.catalog.service_titles().await?))
}

#[utoipa::path(get, path = "/services/min", tag = "catalog", responses((status = 200, description = "Service summaries")))]
pub async fn service_summaries(State(state): State<ServerState>) -> Result<Json<Vec<ItemSummary>>, ApiError> {
    Ok(Json(state.services.catalog.service_summaries().await?))
}

#[utoipa::path(
    get, path = "/services/min/{id}", tag = "catalog",
    params(("id" = String, Path, description = "Service id")),
    responses((status = 200, description = "Service summary"), (status = 404, description = "Not Found", body = crate::openapi::MessageDoc))
)]
pub async fn service_summary(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> Result<Json<ItemSummary>, ApiError> {
    Ok(Json(state.services.catalog.service_summary(&id).await?))
}

#[utoipa::path(
    get, path = "/services/{id}", tag = "catalog",
    params(("id" = String, Path, description = "Service id")),
    responses((status = 200, description = "Service"), (status = 404, description = "Not Found", body = crate::openapi::MessageDoc))
)]
pub async fn get_service(State(state): State<ServerState>, Path(id): Path<String>) -> Result<Json<CatalogItem>, ApiError> {
    Ok(Json(state.services.catalog.get(CatalogKind::Services, &id).await?))
}

#[utoipa::path(get, path = "/products", tag = "catalog", responses((status = 200, description = "All products")))]
pub async fn list_products(State(state): State<ServerState>) -> Result<Json<Vec<CatalogItem>>, ApiError> {
    Ok(Json(state.services.catalog.list(CatalogKind::Products).await?))
}

#[utoipa::path(
    get, path = "/products/{id}", tag = "catalog",
    params(("id" = String, Path, description = "Product id")),
    responses((status = 200, description = "Product"), (status = 404, description = "Not Found", body = crate::openapi::MessageDoc))
)]
pub async fn get_product(State(state): State<ServerState>, Path(id): Path<String>) -> Result<Json<CatalogItem>, ApiError> {
    Ok(Json(state.services.catalog.get(CatalogKind::Products, &id).await?))
}
