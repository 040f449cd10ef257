use async_trait::async_trait;
use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder};

use super::domain::{ProfileUpdate, Role, User};
use super::repository::UserRepository;
use crate::errors::ServiceError;
use crate::results::UpdateResult;
use models::user::{self, Upserted};

pub struct SeaOrmUserRepository {
    pub db: DatabaseConnection,
}

impl From<user::Model> for User {
    fn from(m: user::Model) -> Self {
        let role = Role::parse(m.role.as_deref());
        User { email: m.email, name: m.name, phone: m.phone, phone2: m.phone2, address: m.address, role }
    }
}

#[async_trait]
impl UserRepository for SeaOrmUserRepository {
    async fn find(&self, email: &str) -> Result<Option<User>, ServiceError> {
        let found = user::Entity::find_by_id(email.to_string())
            .one(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))?;
        Ok(found.map(User::from))
    }

    async fn list(&self) -> Result<Vec<User>, ServiceError> {
        let all = user::Entity::find()
            .order_by_asc(user::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))?;
        Ok(all.into_iter().map(User::from).collect())
    }

    async fn upsert_profile(&self, email: &str, profile: ProfileUpdate) -> Result<UpdateResult, ServiceError> {
        let result = match user::upsert_profile(&self.db, email, profile.into()).await? {
            Upserted::Inserted(m) => UpdateResult::upserted(m.email),
            Upserted::Updated { modified, .. } => UpdateResult::matched(modified),
        };
        Ok(result)
    }
}
