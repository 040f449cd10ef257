//! User profiles and roles, keyed by email.

pub mod domain;
pub mod repository;
pub mod seaorm;
pub mod service;

pub use service::UserService;
