use axum::{
    extract::{Path, State},
    Json,
};
use service::results::UpdateResult;
use service::users::domain::{AdminStatus, ProfileUpdate, User};

use crate::errors::ApiError;
use crate::extract::ApiJson;
use crate::middleware::Authenticated;
use crate::state::ServerState;

#[utoipa::path(
    put, path = "/users", tag = "users",
    request_body = crate::openapi::ProfileUpdateDoc,
    responses((status = 200, description = "Upserted"), (status = 401, description = "Not authorized", body = crate::openapi::MessageDoc))
)]
pub async fn upsert(
    State(state): State<ServerState>,
    Authenticated(identity): Authenticated,
    ApiJson(profile): ApiJson<ProfileUpdate>,
) -> Result<Json<UpdateResult>, ApiError> {
    Ok(Json(state.services.users.upsert_own(&identity, profile).await?))
}

#[utoipa::path(
    get, path = "/users", tag = "users",
    responses((status = 200, description = "All users"), (status = 403, description = "Forbidden", body = crate::openapi::MessageDoc))
)]
pub async fn list_all(State(state): State<ServerState>) -> Result<Json<Vec<User>>, ApiError> {
    Ok(Json(state.services.users.list_all().await?))
}

#[utoipa::path(
    get, path = "/users/{email}", tag = "users",
    params(("email" = String, Path, description = "Must be the requester")),
    responses((status = 200, description = "Profile"), (status = 403, description = "Forbidden", body = crate::openapi::MessageDoc), (status = 404, description = "Not Found", body = crate::openapi::MessageDoc))
)]
pub async fn get_one(
    State(state): State<ServerState>,
    Authenticated(identity): Authenticated,
    Path(email): Path<String>,
) -> Result<Json<User>, ApiError> {
    Ok(Json(state.services.users.get(&identity, &email).await?))
}

#[utoipa::path(
    get, path = "/users/admin/{email}", tag = "users",
    params(("email" = String, Path, description = "Must be the requester")),
    responses((status = 200, description = "Admin flag"), (status = 403, description = "Forbidden", body = crate::openapi::MessageDoc))
)]
pub async fn admin_status(
    State(state): State<ServerState>,
    Authenticated(identity): Authenticated,
    Path(email): Path<String>,
) -> Result<Json<AdminStatus>, ApiError> {
    Ok(Json(state.services.users.admin_status(&identity, &email).await?))
}
