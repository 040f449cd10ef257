//! Access gate middleware.
//!
//! `require_authenticated` turns the `token` cookie into an [`Identity`] in
//! the request extensions; `require_admin` runs after it on admin-only
//! routes. Both short-circuit, so a rejected request never reaches a handler.

use axum::{
    async_trait,
    extract::{FromRequestParts, Request, State},
    http::request::Parts,
    middleware::Next,
    response::Response,
};
use axum_extra::extract::cookie::CookieJar;
use service::auth::Identity;
use tracing::warn;

use crate::errors::ApiError;
use crate::state::{ServerState, TOKEN_COOKIE};

pub async fn require_authenticated(
    State(state): State<ServerState>,
    jar: CookieJar,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let path = req.uri().path().to_string();
    let Some(token) = jar.get(TOKEN_COOKIE).map(|c| c.value().to_string()).filter(|t| !t.is_empty()) else {
        warn!(%path, "missing token cookie");
        return Err(ApiError::Unauthenticated);
    };
    let claims = state.tokens.verify(&token).map_err(|e| {
        warn!(%path, err = %e, "token validation failed");
        ApiError::from(e)
    })?;
    req.extensions_mut().insert(Identity::from(claims));
    Ok(next.run(req).await)
}

pub async fn require_admin(
    State(state): State<ServerState>,
    Authenticated(identity): Authenticated,
    req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    state.services.gate.require_admin(&identity).await?;
    Ok(next.run(req).await)
}

/// The identity attached by [`require_authenticated`]. Rejects with 401 when
/// absent, so a handler mounted without the middleware fails closed.
#[derive(Debug, Clone)]
pub struct Authenticated(pub Identity);

#[async_trait]
impl<S> FromRequestParts<S> for Authenticated
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Identity>()
            .cloned()
            .map(Authenticated)
            .ok_or(ApiError::Unauthenticated)
    }
}
