use async_trait::async_trait;
use sea_orm::{DatabaseConnection, EntityTrait};
use uuid::Uuid;

use super::domain::{CatalogItem, CatalogKind};
use super::repository::CatalogRepository;
use crate::document;
use crate::errors::ServiceError;
use models::{car_service, product};

pub struct SeaOrmCatalogRepository {
    pub db: DatabaseConnection,
}

impl From<car_service::Model> for CatalogItem {
    fn from(m: car_service::Model) -> Self {
        CatalogItem {
            id: m.id,
            title: m.title,
            img: m.img,
            price: m.price,
            description: m.description,
            details: document::into_map(m.details),
        }
    }
}

impl From<product::Model> for CatalogItem {
    fn from(m: product::Model) -> Self {
        CatalogItem {
            id: m.id,
            title: m.title,
            img: m.img,
            price: m.price,
            description: m.description,
            details: document::into_map(m.details),
        }
    }
}

#[async_trait]
impl CatalogRepository for SeaOrmCatalogRepository {
    async fn list(&self, kind: CatalogKind) -> Result<Vec<CatalogItem>, ServiceError> {
        let items = match kind {
            CatalogKind::Services => car_service::Entity::find()
                .all(&self.db)
                .await
                .map_err(|e| ServiceError::Db(e.to_string()))?
                .into_iter()
                .map(CatalogItem::from)
                .collect(),
            CatalogKind::Products => product::Entity::find()
                .all(&self.db)
                .await
                .map_err(|e| ServiceError::Db(e.to_string()))?
                .into_iter()
                .map(CatalogItem::from)
                .collect(),
        };
        Ok(items)
    }

    async fn get(&self, kind: CatalogKind, id: Uuid) -> Result<Option<CatalogItem>, ServiceError> {
        let item = match kind {
            CatalogKind::Services => car_service::Entity::find_by_id(id)
                .one(&self.db)
                .await
                .map_err(|e| ServiceError::Db(e.to_string()))?
                .map(CatalogItem::from),
            CatalogKind::Products => product::Entity::find_by_id(id)
                .one(&self.db)
                .await
                .map_err(|e| ServiceError::Db(e.to_string()))?
                .map(CatalogItem::from),
        };
        Ok(item)
    }
}
