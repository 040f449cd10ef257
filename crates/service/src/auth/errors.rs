use thiserror::Error;

use crate::errors::ServiceError;

/// Token verification/signing failures. `Invalid` and `Expired` are only
/// distinguished in logs; clients see both as unauthenticated.
#[derive(Debug, Error)]
pub enum TokenError {
    #[error("invalid token: {0}")]
    Invalid(String),
    #[error("token expired")]
    Expired,
    #[error("token signing failed: {0}")]
    Signing(String),
}

/// Outcome of an access decision that did not admit the request.
#[derive(Debug, Error)]
pub enum AccessError {
    #[error("not authorized")]
    Unauthenticated,
    #[error("forbidden")]
    Forbidden,
    #[error(transparent)]
    Service(#[from] ServiceError),
}
