use std::sync::Arc;

use tracing::{debug, instrument, warn};

use super::domain::Identity;
use super::errors::AccessError;
use crate::errors::ServiceError;
use crate::users::repository::UserRepository;

/// Role and ownership decisions layered on top of an authenticated identity.
///
/// Roles are read from the user collection on every call; nothing is cached,
/// so granting or revoking `admin` takes effect on the next request.
#[derive(Clone)]
pub struct AccessGate {
    users: Arc<dyn UserRepository>,
}

impl AccessGate {
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }

    /// Whether `email` has a user record whose role is admin. A missing
    /// record is simply "not admin".
    pub async fn is_admin(&self, email: &str) -> Result<bool, ServiceError> {
        let admin = self
            .users
            .find(email)
            .await?
            .is_some_and(|u| u.is_admin());
        debug!(email, admin, "role lookup");
        Ok(admin)
    }

    #[instrument(skip(self, identity), fields(email = %identity.email))]
    pub async fn require_admin(&self, identity: &Identity) -> Result<(), AccessError> {
        if self.is_admin(&identity.email).await? {
            Ok(())
        } else {
            warn!("admin required");
            Err(AccessError::Forbidden)
        }
    }

    /// The path email must be the requester's own.
    pub fn require_self(&self, identity: &Identity, email: &str) -> Result<(), AccessError> {
        if identity.email == email {
            Ok(())
        } else {
            warn!(requester = %identity.email, target = email, "self access mismatch");
            Err(AccessError::Forbidden)
        }
    }

    /// Admit the resource owner, or anyone holding the admin role. The
    /// caller must have fetched the resource first; `owner` is its owner
    /// attribute. The owner path skips the role lookup.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    /// use service::auth::{AccessGate, Identity};
    /// use service::users::repository::mock::MockUserRepository;
    /// let gate = AccessGate::new(Arc::new(MockUserRepository::default()));
    /// let owner = Identity::new("a@x.com");
    /// let other = Identity::new("b@x.com");
    /// assert!(tokio_test::block_on(gate.require_owner_or_admin(&owner, "a@x.com")).is_ok());
    /// assert!(tokio_test::block_on(gate.require_owner_or_admin(&other, "a@x.com")).is_err());
    /// ```
    #[instrument(skip(self, identity), fields(email = %identity.email))]
    pub async fn require_owner_or_admin(&self, identity: &Identity, owner: &str) -> Result<(), AccessError> {
        if identity.email == owner {
            return Ok(());
        }
        if self.is_admin(&identity.email).await? {
            debug!(owner, "admitted as admin");
            return Ok(());
        }
        warn!(owner, "not owner and not admin");
        Err(AccessError::Forbidden)
    }
}
