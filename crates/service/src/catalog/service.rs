use std::sync::Arc;

use super::domain::{CatalogItem, CatalogKind, ItemSummary, ItemTitle};
use super::repository::CatalogRepository;
use crate::document::parse_id;
use crate::errors::ServiceError;

/// Catalog reads with the field projections the storefront asks for.
pub struct CatalogService {
    repo: Arc<dyn CatalogRepository>,
}

impl CatalogService {
    pub fn new(repo: Arc<dyn CatalogRepository>) -> Self { Self { repo } }

    pub async fn list(&self, kind: CatalogKind) -> Result<Vec<CatalogItem>, ServiceError> {
        self.repo.list(kind).await
    }

    pub async fn get(&self, kind: CatalogKind, id: &str) -> Result<CatalogItem, ServiceError> {
        let id = parse_id(id)?;
        self.repo
            .get(kind, id)
            .await?
            .ok_or_else(|| ServiceError::not_found(kind.entity_name()))
    }

    pub async fn service_titles(&self) -> Result<Vec<ItemTitle>, ServiceError> {
        let items = self.repo.list(CatalogKind::Services).await?;
        Ok(items.into_iter().map(ItemTitle::from).collect())
    }

    pub async fn service_summaries(&self) -> Result<Vec<ItemSummary>, ServiceError> {
        let items = self.repo.list(CatalogKind::Services).await?;
        Ok(items.into_iter().map(ItemSummary::from).collect())
    }

    pub async fn service_summary(&self, id: &str) -> Result<ItemSummary, ServiceError> {
        self.get(CatalogKind::Services, id).await.map(ItemSummary::from)
    }
}
