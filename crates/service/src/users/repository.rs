use async_trait::async_trait;

use super::domain::{ProfileUpdate, User};
use crate::errors::ServiceError;
use crate::results::UpdateResult;

/// Persistence for the user collection.
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find(&self, email: &str) -> Result<Option<User>, ServiceError>;
    async fn list(&self) -> Result<Vec<User>, ServiceError>;
    /// Insert or overwrite the profile fields stored under `email`. Never
    /// touches `role`.
    async fn upsert_profile(&self, email: &str, profile: ProfileUpdate) -> Result<UpdateResult, ServiceError>;
}

/// Simple in-memory repository for tests and doc examples
pub mod mock {
    use super::*;
    use crate::users::domain::Role;
    use tokio::sync::RwLock;

    #[derive(Default)]
    pub struct MockUserRepository {
        // insertion order is kept so listings are stable
        users: RwLock<Vec<User>>,
    }

    impl MockUserRepository {
        /// Grant or clear a role out of band, the way an operator would.
        pub async fn set_role(&self, email: &str, role: Option<Role>) {
            let mut users = self.users.write().await;
            if let Some(u) = users.iter_mut().find(|u| u.email == email) {
                u.role = role;
            } else {
                users.push(User { email: email.to_string(), name: None, phone: None, phone2: None, address: None, role });
            }
        }

        pub async fn len(&self) -> usize {
            self.users.read().await.len()
        }
    }

    #[async_trait]
    impl UserRepository for MockUserRepository {
        async fn find(&self, email: &str) -> Result<Option<User>, ServiceError> {
            let users = self.users.read().await;
            Ok(users.iter().find(|u| u.email == email).cloned())
        }

        async fn list(&self) -> Result<Vec<User>, ServiceError> {
            Ok(self.users.read().await.clone())
        }

        async fn upsert_profile(&self, email: &str, profile: ProfileUpdate) -> Result<UpdateResult, ServiceError> {
            let mut users = self.users.write().await;
            if let Some(u) = users.iter_mut().find(|u| u.email == email) {
                let modified = u.name != profile.name
                    || u.phone != profile.phone
                    || u.phone2 != profile.phone2
                    || u.address != profile.address;
                u.name = profile.name;
                u.phone = profile.phone;
                u.phone2 = profile.phone2;
                u.address = profile.address;
                return Ok(UpdateResult::matched(modified));
            }
            users.push(User {
                email: email.to_string(),
                name: profile.name,
                phone: profile.phone,
                phone2: profile.phone2,
                address: profile.address,
                role: None,
            });
            Ok(UpdateResult::upserted(email))
        }
    }
}
