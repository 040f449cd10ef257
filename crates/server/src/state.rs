use std::sync::Arc;

use axum_extra::extract::cookie::{Cookie, SameSite};
use chrono::Duration;
use service::{auth::TokenService, AppServices};

/// Name of the cookie carrying the bearer token.
pub const TOKEN_COOKIE: &str = "token";

/// Attributes of the `token` cookie. `secure` comes from configuration and
/// is never guessed from the request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CookiePolicy {
    pub secure: bool,
}

impl CookiePolicy {
    pub fn new(secure: bool) -> Self {
        Self { secure }
    }

    // Cross-site browsers only send SameSite=None cookies when Secure is set,
    // so plain-HTTP local setups fall back to Lax.
    fn same_site(&self) -> SameSite {
        if self.secure { SameSite::None } else { SameSite::Lax }
    }

    pub fn session_cookie(&self, token: String) -> Cookie<'static> {
        let mut cookie = Cookie::new(TOKEN_COOKIE, token);
        cookie.set_path("/");
        cookie.set_http_only(true);
        cookie.set_secure(self.secure);
        cookie.set_same_site(self.same_site());
        cookie
    }

    /// Cookie matching the session cookie's path/attributes, for removal.
    pub fn removal_cookie(&self) -> Cookie<'static> {
        let mut cookie = Cookie::from(TOKEN_COOKIE);
        cookie.set_path("/");
        cookie.set_http_only(true);
        cookie.set_secure(self.secure);
        cookie.set_same_site(self.same_site());
        cookie
    }
}

#[derive(Clone)]
pub struct ServerState {
    pub tokens: Arc<TokenService>,
    pub cookies: CookiePolicy,
    pub services: AppServices,
}

impl ServerState {
    pub fn new(services: AppServices, auth: &configs::AuthConfig) -> Self {
        let tokens = TokenService::new(&auth.jwt_secret, Duration::hours(auth.token_ttl_hours));
        Self { tokens: Arc::new(tokens), cookies: CookiePolicy::new(auth.cookie_secure), services }
    }
}
