use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::auth::AccessGate;
use crate::catalog::{repository::CatalogRepository, seaorm::SeaOrmCatalogRepository, CatalogService};
use crate::orders::{repository::OrderRepository, seaorm::SeaOrmOrderRepository, OrderService};
use crate::users::{repository::UserRepository, seaorm::SeaOrmUserRepository, UserService};

/// The application services wired to one set of repositories. The access
/// gate shares the user repository with [`UserService`].
#[derive(Clone)]
pub struct AppServices {
    pub catalog: Arc<CatalogService>,
    pub orders: Arc<OrderService>,
    pub users: Arc<UserService>,
    pub gate: AccessGate,
}

impl AppServices {
    pub fn new(
        catalog: Arc<dyn CatalogRepository>,
        orders: Arc<dyn OrderRepository>,
        users: Arc<dyn UserRepository>,
    ) -> Self {
        let gate = AccessGate::new(users.clone());
        Self {
            catalog: Arc::new(CatalogService::new(catalog)),
            orders: Arc::new(OrderService::new(orders, gate.clone())),
            users: Arc::new(UserService::new(users, gate.clone())),
            gate,
        }
    }

    /// Services backed by the SeaORM repositories over one pool.
    pub fn seaorm(db: DatabaseConnection) -> Self {
        Self::new(
            Arc::new(SeaOrmCatalogRepository { db: db.clone() }),
            Arc::new(SeaOrmOrderRepository { db: db.clone() }),
            Arc::new(SeaOrmUserRepository { db }),
        )
    }
}
