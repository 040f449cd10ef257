use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use tracing::debug;
use uuid::Uuid;

use super::domain::{Claims, IssuedToken};
use super::errors::TokenError;

/// Fixed token lifetime; tokens are never renewed.
pub const DEFAULT_TTL_HOURS: i64 = 10;

/// Issues and verifies HS256 tokens with a process-wide secret.
///
/// Built once at startup and shared read-only; the secret is never rotated
/// while the process runs. There is no server-side revocation: a token stays
/// valid until `exp` even after the client logs out.
#[derive(Clone)]
pub struct TokenService {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
    ttl: Duration,
}

impl TokenService {
    pub fn new(secret: &str, ttl: Duration) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation.validate_exp = true;
        validation.set_required_spec_claims(&["exp"]);
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            validation,
            ttl,
        }
    }

    /// Service with the default 10 hour lifetime.
    ///
    /// # Examples
    /// ```
    /// use service::auth::TokenService;
    /// let tokens = TokenService::from_secret("secret");
    /// let issued = tokens.issue("a@x.com").unwrap();
    /// assert_eq!(tokens.verify(&issued.token).unwrap().email, "a@x.com");
    /// ```
    pub fn from_secret(secret: &str) -> Self {
        Self::new(secret, Duration::hours(DEFAULT_TTL_HOURS))
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    pub fn issue(&self, email: &str) -> Result<IssuedToken, TokenError> {
        self.issue_at(email, Utc::now())
    }

    /// Sign a token as if issued at `issued_at`; expiry is `issued_at + ttl`.
    pub fn issue_at(&self, email: &str, issued_at: DateTime<Utc>) -> Result<IssuedToken, TokenError> {
        let expires_at = issued_at + self.ttl;
        let claims = Claims {
            email: email.to_string(),
            iat: issued_at.timestamp(),
            exp: expires_at.timestamp(),
            jti: Uuid::new_v4().to_string(),
        };
        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)
            .map_err(|e| TokenError::Signing(e.to_string()))?;
        debug!(jti = %claims.jti, exp = claims.exp, "token issued");
        Ok(IssuedToken { token, expires_at })
    }

    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        match decode::<Claims>(token, &self.decoding, &self.validation) {
            Ok(data) => Ok(data.claims),
            Err(e) => match e.kind() {
                ErrorKind::ExpiredSignature => Err(TokenError::Expired),
                _ => Err(TokenError::Invalid(e.to_string())),
            },
        }
    }
}
