//! Read-only catalog: services and products. No access rules apply.

pub mod domain;
pub mod repository;
pub mod seaorm;
pub mod service;

pub use service::CatalogService;
