//! Orders placed by authenticated users; owner-or-admin access.

pub mod domain;
pub mod repository;
pub mod seaorm;
pub mod service;

pub use service::OrderService;
