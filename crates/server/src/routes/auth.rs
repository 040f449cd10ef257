use axum::{extract::State, Json};
use axum_extra::extract::cookie::CookieJar;
use common::types::Success;
use service::auth::domain::TokenRequest;
use tracing::info;

use crate::errors::ApiError;
use crate::extract::ApiJson;
use crate::state::ServerState;

/// Sign a 10 hour token for the given email and set it as the `token` cookie.
#[utoipa::path(
    post, path = "/jwt", tag = "auth",
    request_body = crate::openapi::TokenRequestDoc,
    responses((status = 200, description = "Token cookie set"), (status = 400, description = "Invalid request body", body = crate::openapi::MessageDoc))
)]
pub async fn issue_token(
    State(state): State<ServerState>,
    jar: CookieJar,
    ApiJson(input): ApiJson<TokenRequest>,
) -> Result<(CookieJar, Json<Success>), ApiError> {
    let issued = state.tokens.issue(&input.email)?;
    info!(email = %input.email, expires_at = %issued.expires_at, "token_issued");
    let jar = jar.add(state.cookies.session_cookie(issued.token));
    Ok((jar, Json(Success::ok())))
}

/// Clear the `token` cookie. The token itself stays valid until it expires;
/// there is no server-side revocation.
#[utoipa::path(get, path = "/logout", tag = "auth", responses((status = 200, description = "Cookie cleared")))]
pub async fn logout(State(state): State<ServerState>, jar: CookieJar) -> (CookieJar, Json<Success>) {
    let jar = jar.remove(state.cookies.removal_cookie());
    (jar, Json(Success::ok()))
}
