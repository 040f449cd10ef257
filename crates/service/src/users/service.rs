use std::sync::Arc;

use tracing::{info, instrument, warn};

use super::domain::{AdminStatus, ProfileUpdate, User};
use super::repository::UserRepository;
use crate::auth::{AccessError, AccessGate, Identity};
use crate::errors::ServiceError;
use crate::results::UpdateResult;

/// User profile operations with their self/admin rules applied.
pub struct UserService {
    repo: Arc<dyn UserRepository>,
    gate: AccessGate,
}

impl UserService {
    pub fn new(repo: Arc<dyn UserRepository>, gate: AccessGate) -> Self {
        Self { repo, gate }
    }

    /// Upsert the requester's own profile. The record key is always the
    /// authenticated email, whatever the body says.
    #[instrument(skip(self, identity, profile), fields(email = %identity.email))]
    pub async fn upsert_own(&self, identity: &Identity, mut profile: ProfileUpdate) -> Result<UpdateResult, ServiceError> {
        if let Some(claimed) = profile.email.take() {
            if claimed != identity.email {
                warn!(claimed = %claimed, "ignoring body email on profile upsert");
            }
        }
        let result = self.repo.upsert_profile(&identity.email, profile).await?;
        info!(upserted = result.upserted_count, modified = result.modified_count, "profile_upserted");
        Ok(result)
    }

    /// Full collection; callers gate this behind the admin check.
    pub async fn list_all(&self) -> Result<Vec<User>, ServiceError> {
        self.repo.list().await
    }

    pub async fn get(&self, identity: &Identity, email: &str) -> Result<User, AccessError> {
        self.gate.require_self(identity, email)?;
        let user = self.repo.find(email).await?.ok_or_else(|| ServiceError::not_found("user"))?;
        Ok(user)
    }

    /// Whether the requester holds the admin role. Missing record → false.
    pub async fn admin_status(&self, identity: &Identity, email: &str) -> Result<AdminStatus, AccessError> {
        self.gate.require_self(identity, email)?;
        let admin = self.gate.is_admin(email).await?;
        Ok(AdminStatus { admin })
    }
}
