use async_trait::async_trait;
use uuid::Uuid;

use super::domain::{Order, OrderPatch};
use crate::errors::ServiceError;
use crate::results::{DeleteResult, UpdateResult};

#[async_trait]
pub trait OrderRepository: Send + Sync {
    async fn insert(&self, order: Order) -> Result<Order, ServiceError>;
    async fn find(&self, id: Uuid) -> Result<Option<Order>, ServiceError>;
    /// All orders, or only those whose owner equals `owner`.
    async fn list(&self, owner: Option<&str>) -> Result<Vec<Order>, ServiceError>;
    async fn update(&self, id: Uuid, patch: OrderPatch) -> Result<UpdateResult, ServiceError>;
    async fn delete(&self, id: Uuid) -> Result<DeleteResult, ServiceError>;
}

/// Simple in-memory repository for tests and doc examples
pub mod mock {
    use super::*;
    use tokio::sync::RwLock;

    #[derive(Default)]
    pub struct MockOrderRepository {
        orders: RwLock<Vec<Order>>,
    }

    #[async_trait]
    impl OrderRepository for MockOrderRepository {
        async fn insert(&self, order: Order) -> Result<Order, ServiceError> {
            self.orders.write().await.push(order.clone());
            Ok(order)
        }

        async fn find(&self, id: Uuid) -> Result<Option<Order>, ServiceError> {
            Ok(self.orders.read().await.iter().find(|o| o.id == id).cloned())
        }

        async fn list(&self, owner: Option<&str>) -> Result<Vec<Order>, ServiceError> {
            let orders = self.orders.read().await;
            Ok(orders
                .iter()
                .filter(|o| owner.map_or(true, |e| o.email == e))
                .cloned()
                .collect())
        }

        async fn update(&self, id: Uuid, patch: OrderPatch) -> Result<UpdateResult, ServiceError> {
            let mut orders = self.orders.write().await;
            match orders.iter_mut().find(|o| o.id == id) {
                Some(order) => Ok(UpdateResult::matched(order.apply(patch))),
                None => Ok(UpdateResult::unmatched()),
            }
        }

        async fn delete(&self, id: Uuid) -> Result<DeleteResult, ServiceError> {
            let mut orders = self.orders.write().await;
            let before = orders.len();
            orders.retain(|o| o.id != id);
            Ok(DeleteResult::deleted((before - orders.len()) as u64))
        }
    }
}
