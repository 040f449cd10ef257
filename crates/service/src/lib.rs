//! Service layer: domain types, repositories and the application services
//! that sit between the HTTP handlers and the store.
//! - `auth` holds the token service and the access gate.
//! - `catalog`, `orders`, `users` each pair a repository trait (SeaORM and
//!   in-memory implementations) with an application service.

pub mod app;
pub mod auth;
pub mod catalog;
pub mod document;
pub mod errors;
pub mod orders;
pub mod results;
pub mod users;

pub use app::AppServices;
