//! Store entities. Each table is an independent collection; there are no
//! relations or joins between them.

pub mod car_service;
pub mod db;
pub mod errors;
pub mod order;
pub mod product;
pub mod user;

#[cfg(test)]
mod tests;
