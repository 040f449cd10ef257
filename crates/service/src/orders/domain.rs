use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

use crate::document::{de_price, de_price_opt};

pub const DEFAULT_STATUS: &str = "pending";

/// Fields a client may never set on an order; stripped from `details`.
const RESERVED: [&str; 3] = ["_id", "email", "owner"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    #[serde(rename = "_id")]
    pub id: Uuid,
    /// Owner email.
    pub email: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub img: Option<String>,
    pub price: f64,
    pub status: String,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub order_type: Option<String>,
    #[serde(flatten)]
    pub details: Map<String, Value>,
}

/// Body of `POST /orders`. Unknown fields (date, customer name, service id,
/// ...) are kept in `details`; any owner field is discarded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewOrder {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub img: Option<String>,
    #[serde(default, deserialize_with = "de_price")]
    pub price: f64,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(rename = "type", default)]
    pub order_type: Option<String>,
    #[serde(flatten)]
    pub details: Map<String, Value>,
}

impl NewOrder {
    /// Client-claimed owner email, if the body carried one.
    pub fn claimed_email(&self) -> Option<&str> {
        self.details.get("email").and_then(Value::as_str)
    }

    /// Build the stored order, owned by `owner` regardless of the body.
    pub fn into_order(mut self, id: Uuid, owner: &str) -> Order {
        for key in RESERVED {
            self.details.remove(key);
        }
        Order {
            id,
            email: owner.to_string(),
            title: self.title,
            img: self.img,
            price: self.price,
            status: self.status.unwrap_or_else(|| DEFAULT_STATUS.to_string()),
            order_type: self.order_type,
            details: self.details,
        }
    }
}

/// Body of `PATCH /orders/:id`. Absent fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrderPatch {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub img: Option<String>,
    #[serde(default, deserialize_with = "de_price_opt")]
    pub price: Option<f64>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(rename = "type", default)]
    pub order_type: Option<String>,
}

impl Order {
    /// Apply the patch; returns whether any field actually changed.
    pub fn apply(&mut self, patch: OrderPatch) -> bool {
        let mut modified = false;
        if let Some(title) = patch.title {
            modified |= self.title != title;
            self.title = title;
        }
        if let Some(img) = patch.img {
            modified |= self.img.as_deref() != Some(img.as_str());
            self.img = Some(img);
        }
        if let Some(price) = patch.price {
            modified |= self.price != price;
            self.price = price;
        }
        if let Some(status) = patch.status {
            modified |= self.status != status;
            self.status = status;
        }
        if let Some(order_type) = patch.order_type {
            modified |= self.order_type.as_deref() != Some(order_type.as_str());
            self.order_type = Some(order_type);
        }
        modified
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn new_order_keeps_extras_but_not_owner() {
        let body = json!({
            "email": "mallory@x.com",
            "_id": "forged",
            "title": "Oil Change",
            "price": "40",
            "date": "2024-05-01",
            "customerName": "A"
        });
        let new: NewOrder = serde_json::from_value(body).unwrap();
        assert_eq!(new.claimed_email(), Some("mallory@x.com"));
        let order = new.into_order(Uuid::nil(), "a@x.com");
        assert_eq!(order.email, "a@x.com");
        assert_eq!(order.price, 40.0);
        assert_eq!(order.status, DEFAULT_STATUS);
        assert!(!order.details.contains_key("email"));
        assert!(!order.details.contains_key("_id"));

        let out = serde_json::to_value(&order).unwrap();
        assert_eq!(out["email"], "a@x.com");
        assert_eq!(out["date"], "2024-05-01");
        assert_eq!(out["_id"], json!(Uuid::nil()));
    }

    #[test]
    fn patch_reports_modification() {
        let mut order = NewOrder {
            title: "Oil Change".into(),
            img: None,
            price: 40.0,
            status: None,
            order_type: Some("service".into()),
            details: Map::new(),
        }
        .into_order(Uuid::nil(), "a@x.com");

        assert!(!order.apply(OrderPatch { title: Some("Oil Change".into()), ..Default::default() }));
        assert!(order.apply(OrderPatch { status: Some("confirmed".into()), ..Default::default() }));
        assert_eq!(order.status, "confirmed");
        assert_eq!(order.email, "a@x.com");
    }

    #[test]
    fn patch_reads_type_and_string_price() {
        let patch: OrderPatch = serde_json::from_value(json!({"type": "product", "price": "12.5"})).unwrap();
        assert_eq!(patch.order_type.as_deref(), Some("product"));
        assert_eq!(patch.price, Some(12.5));
        let empty: OrderPatch = serde_json::from_value(json!({})).unwrap();
        assert_eq!(empty, OrderPatch::default());
    }

    #[test]
    fn untitled_order_is_accepted() {
        let new: NewOrder = serde_json::from_value(json!({"price": 40})).unwrap();
        let order = new.into_order(Uuid::nil(), "a@x.com");
        assert_eq!(order.title, "");
        assert_eq!(order.price, 40.0);
        assert_eq!(order.status, DEFAULT_STATUS);
    }
}
