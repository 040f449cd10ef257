use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Signed token payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    pub email: String,
    pub iat: i64,
    pub exp: i64,
    /// Unique per issuance, so two tokens for one identity never collide.
    pub jti: String,
}

/// The authenticated requester, as established by a verified token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub email: String,
}

impl Identity {
    pub fn new(email: impl Into<String>) -> Self {
        Self { email: email.into() }
    }
}

impl From<Claims> for Identity {
    fn from(c: Claims) -> Self {
        Self { email: c.email }
    }
}

/// Body of `POST /jwt`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenRequest {
    pub email: String,
}

#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub token: String,
    pub expires_at: DateTime<Utc>,
}
