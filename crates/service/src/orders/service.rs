use std::sync::Arc;

use tracing::{info, instrument, warn};
use uuid::Uuid;

use super::domain::{NewOrder, Order, OrderPatch};
use super::repository::OrderRepository;
use crate::auth::{AccessError, AccessGate, Identity};
use crate::document::parse_id;
use crate::errors::ServiceError;
use crate::results::{DeleteResult, InsertOneResult, UpdateResult};

/// Application service encapsulating order access rules.
///
/// Every single-order operation fetches the order first, answers
/// `NotFound` when it is absent, and only then compares owners.
pub struct OrderService {
    repo: Arc<dyn OrderRepository>,
    gate: AccessGate,
}

impl OrderService {
    pub fn new(repo: Arc<dyn OrderRepository>, gate: AccessGate) -> Self { Self { repo, gate } }

    /// Place an order owned by the requester.
    #[instrument(skip(self, identity, new), fields(email = %identity.email))]
    pub async fn create(&self, identity: &Identity, new: NewOrder) -> Result<InsertOneResult, ServiceError> {
        if let Some(claimed) = new.claimed_email() {
            if claimed != identity.email {
                warn!(claimed, "ignoring body email on order create");
            }
        }
        let order = new.into_order(Uuid::new_v4(), &identity.email);
        let created = self.repo.insert(order).await?;
        info!(order_id = %created.id, "order_created");
        Ok(InsertOneResult::new(created.id))
    }

    /// Full collection; callers gate this behind the admin check.
    pub async fn list_all(&self) -> Result<Vec<Order>, ServiceError> {
        self.repo.list(None).await
    }

    /// Orders owned by `email`, which must be the requester.
    pub async fn list_own(&self, identity: &Identity, email: &str) -> Result<Vec<Order>, AccessError> {
        self.gate.require_self(identity, email)?;
        Ok(self.repo.list(Some(email)).await?)
    }

    pub async fn get(&self, identity: &Identity, id: &str) -> Result<Order, AccessError> {
        self.authorized(identity, id).await
    }

    #[instrument(skip(self, identity, patch), fields(email = %identity.email))]
    pub async fn update(&self, identity: &Identity, id: &str, patch: OrderPatch) -> Result<UpdateResult, AccessError> {
        let order = self.authorized(identity, id).await?;
        let result = self.repo.update(order.id, patch).await?;
        info!(order_id = %order.id, modified = result.modified_count, "order_updated");
        Ok(result)
    }

    #[instrument(skip(self, identity), fields(email = %identity.email))]
    pub async fn delete(&self, identity: &Identity, id: &str) -> Result<DeleteResult, AccessError> {
        let order = self.authorized(identity, id).await?;
        let result = self.repo.delete(order.id).await?;
        info!(order_id = %order.id, deleted = result.deleted_count, "order_deleted");
        Ok(result)
    }

    /// Fetch the order, then apply the owner-or-admin rule to it.
    async fn authorized(&self, identity: &Identity, id: &str) -> Result<Order, AccessError> {
        let id = parse_id(id)?;
        let order = self.repo.find(id).await?.ok_or_else(|| ServiceError::not_found("order"))?;
        self.gate.require_owner_or_admin(identity, &order.email).await?;
        Ok(order)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::orders::repository::mock::MockOrderRepository;
    use crate::users::domain::Role;
    use crate::users::repository::mock::MockUserRepository;
    use serde_json::json;

    struct Fixture {
        svc: OrderService,
        alice: Identity,
        bob: Identity,
        admin: Identity,
    }

    async fn fixture() -> Fixture {
        let users = Arc::new(MockUserRepository::default());
        users.set_role("admin@x.com", Some(Role::Admin)).await;
        let gate = AccessGate::new(users);
        Fixture {
            svc: OrderService::new(Arc::new(MockOrderRepository::default()), gate),
            alice: Identity::new("a@x.com"),
            bob: Identity::new("b@x.com"),
            admin: Identity::new("admin@x.com"),
        }
    }

    fn oil_change() -> NewOrder {
        serde_json::from_value(json!({"email": "a@x.com", "title": "Oil Change", "price": 40})).unwrap()
    }

    #[tokio::test]
    async fn owner_admin_and_stranger_on_get() -> anyhow::Result<()> {
        let f = fixture().await;
        let created = f.svc.create(&f.alice, oil_change()).await?;
        let id = created.inserted_id.to_string();

        assert!(matches!(f.svc.get(&f.bob, &id).await, Err(AccessError::Forbidden)));
        let as_admin = f.svc.get(&f.admin, &id).await.map_err(|e| anyhow::anyhow!(e))?;
        assert_eq!(as_admin.title, "Oil Change");
        let as_owner = f.svc.get(&f.alice, &id).await.map_err(|e| anyhow::anyhow!(e))?;
        assert_eq!(as_owner.email, "a@x.com");
        Ok(())
    }

    #[tokio::test]
    async fn spoofed_owner_is_replaced_by_identity() -> anyhow::Result<()> {
        let f = fixture().await;
        let spoof: NewOrder = serde_json::from_value(json!({"email": "a@x.com", "title": "Tires", "price": 300}))?;
        let created = f.svc.create(&f.bob, spoof).await?;
        let id = created.inserted_id.to_string();

        assert!(matches!(f.svc.get(&f.alice, &id).await, Err(AccessError::Forbidden)));
        let order = f.svc.get(&f.bob, &id).await.map_err(|e| anyhow::anyhow!(e))?;
        assert_eq!(order.email, "b@x.com");
        Ok(())
    }

    #[tokio::test]
    async fn update_and_delete_follow_owner_or_admin() -> anyhow::Result<()> {
        let f = fixture().await;
        let id = f.svc.create(&f.alice, oil_change()).await?.inserted_id.to_string();
        let patch = OrderPatch { status: Some("confirmed".into()), ..Default::default() };

        assert!(matches!(f.svc.update(&f.bob, &id, patch.clone()).await, Err(AccessError::Forbidden)));
        assert!(matches!(f.svc.delete(&f.bob, &id).await, Err(AccessError::Forbidden)));

        let updated = f.svc.update(&f.admin, &id, patch).await.map_err(|e| anyhow::anyhow!(e))?;
        assert_eq!((updated.matched_count, updated.modified_count), (1, 1));

        let deleted = f.svc.delete(&f.alice, &id).await.map_err(|e| anyhow::anyhow!(e))?;
        assert_eq!(deleted.deleted_count, 1);
        Ok(())
    }

    #[tokio::test]
    async fn missing_order_is_not_found_before_ownership() {
        let f = fixture().await;
        let ghost = Uuid::new_v4().to_string();
        for who in [&f.alice, &f.bob, &f.admin] {
            assert!(matches!(f.svc.get(who, &ghost).await, Err(AccessError::Service(ServiceError::NotFound(_)))));
            assert!(matches!(
                f.svc.delete(who, &ghost).await,
                Err(AccessError::Service(ServiceError::NotFound(_)))
            ));
        }
        assert!(matches!(
            f.svc.get(&f.alice, "nope").await,
            Err(AccessError::Service(ServiceError::InvalidId(_)))
        ));
    }

    #[tokio::test]
    async fn own_listing_is_self_only() -> anyhow::Result<()> {
        let f = fixture().await;
        f.svc.create(&f.alice, oil_change()).await?;
        f.svc.create(&f.bob, oil_change()).await?;

        let mine = f.svc.list_own(&f.alice, "a@x.com").await.map_err(|e| anyhow::anyhow!(e))?;
        assert_eq!(mine.len(), 1);
        assert!(matches!(f.svc.list_own(&f.alice, "b@x.com").await, Err(AccessError::Forbidden)));
        assert_eq!(f.svc.list_all().await?.len(), 2);
        Ok(())
    }
}
