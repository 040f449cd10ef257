use async_trait::async_trait;
use uuid::Uuid;

use super::domain::{CatalogItem, CatalogKind};
use crate::errors::ServiceError;

#[async_trait]
pub trait CatalogRepository: Send + Sync {
    async fn list(&self, kind: CatalogKind) -> Result<Vec<CatalogItem>, ServiceError>;
    async fn get(&self, kind: CatalogKind, id: Uuid) -> Result<Option<CatalogItem>, ServiceError>;
}

/// Simple in-memory repository for tests and doc examples
pub mod mock {
    use super::*;
    use std::collections::HashMap;
    use tokio::sync::RwLock;

    #[derive(Default)]
    pub struct MockCatalogRepository {
        items: RwLock<HashMap<CatalogKind, Vec<CatalogItem>>>,
    }

    impl MockCatalogRepository {
        pub async fn insert(&self, kind: CatalogKind, item: CatalogItem) {
            self.items.write().await.entry(kind).or_default().push(item);
        }
    }

    #[async_trait]
    impl CatalogRepository for MockCatalogRepository {
        async fn list(&self, kind: CatalogKind) -> Result<Vec<CatalogItem>, ServiceError> {
            Ok(self.items.read().await.get(&kind).cloned().unwrap_or_default())
        }

        async fn get(&self, kind: CatalogKind, id: Uuid) -> Result<Option<CatalogItem>, ServiceError> {
            let items = self.items.read().await;
            Ok(items.get(&kind).and_then(|v| v.iter().find(|i| i.id == id).cloned()))
        }
    }
}
