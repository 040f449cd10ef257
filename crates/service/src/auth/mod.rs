//! Authentication and authorization core.
//!
//! - [`token::TokenService`] issues and verifies the signed bearer tokens
//!   carried in the `token` cookie.
//! - [`access::AccessGate`] answers the role, self and owner-or-admin
//!   questions that the HTTP middleware and the application services ask.

pub mod access;
pub mod domain;
pub mod errors;
pub mod token;

pub use access::AccessGate;
pub use domain::{Claims, Identity, IssuedToken};
pub use errors::{AccessError, TokenError};
pub use token::TokenService;
