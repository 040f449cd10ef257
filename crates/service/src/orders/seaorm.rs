use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set};
use uuid::Uuid;

use super::domain::{Order, OrderPatch};
use super::repository::OrderRepository;
use crate::document;
use crate::errors::ServiceError;
use crate::results::{DeleteResult, UpdateResult};
use models::order;

pub struct SeaOrmOrderRepository {
    pub db: DatabaseConnection,
}

impl From<order::Model> for Order {
    fn from(m: order::Model) -> Self {
        Order {
            id: m.id,
            email: m.email,
            title: m.title,
            img: m.img,
            price: m.price,
            status: m.status,
            order_type: m.order_type,
            details: document::into_map(m.details),
        }
    }
}

#[async_trait]
impl OrderRepository for SeaOrmOrderRepository {
    async fn insert(&self, o: Order) -> Result<Order, ServiceError> {
        let am = order::ActiveModel {
            id: Set(o.id),
            email: Set(o.email),
            title: Set(o.title),
            img: Set(o.img),
            price: Set(o.price),
            status: Set(o.status),
            order_type: Set(o.order_type),
            details: Set(document::from_map(o.details)),
            created_at: Set(Utc::now().into()),
        };
        let created = am.insert(&self.db).await.map_err(|e| ServiceError::Db(e.to_string()))?;
        Ok(created.into())
    }

    async fn find(&self, id: Uuid) -> Result<Option<Order>, ServiceError> {
        let found = order::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))?;
        Ok(found.map(Order::from))
    }

    async fn list(&self, owner: Option<&str>) -> Result<Vec<Order>, ServiceError> {
        let mut query = order::Entity::find();
        if let Some(email) = owner {
            query = query.filter(order::Column::Email.eq(email));
        }
        let all = query
            .order_by_asc(order::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))?;
        Ok(all.into_iter().map(Order::from).collect())
    }

    async fn update(&self, id: Uuid, patch: OrderPatch) -> Result<UpdateResult, ServiceError> {
        let Some(existing) = order::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))?
        else {
            return Ok(UpdateResult::unmatched());
        };
        let mut current = Order::from(existing.clone());
        if !current.apply(patch) {
            return Ok(UpdateResult::matched(false));
        }
        let mut am: order::ActiveModel = existing.into();
        am.title = Set(current.title);
        am.img = Set(current.img);
        am.price = Set(current.price);
        am.status = Set(current.status);
        am.order_type = Set(current.order_type);
        am.update(&self.db).await.map_err(|e| ServiceError::Db(e.to_string()))?;
        Ok(UpdateResult::matched(true))
    }

    async fn delete(&self, id: Uuid) -> Result<DeleteResult, ServiceError> {
        let res = order::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))?;
        Ok(DeleteResult::deleted(res.rows_affected))
    }
}
