use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

/// Which catalog collection an operation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CatalogKind {
    Services,
    Products,
}

impl CatalogKind {
    pub fn entity_name(&self) -> &'static str {
        match self {
            CatalogKind::Services => "service",
            CatalogKind::Products => "product",
        }
    }
}

/// A service or product document. Fields the API does not model (e.g.
/// `facility`, `service_id`) travel in `details` and are flattened back
/// into the document on output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogItem {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub img: Option<String>,
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(flatten)]
    pub details: Map<String, Value>,
}

/// `{_id, title}` projection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemTitle {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub title: String,
}

/// `{_id, title, img, price}` projection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemSummary {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub img: Option<String>,
    pub price: f64,
}

impl From<CatalogItem> for ItemTitle {
    fn from(i: CatalogItem) -> Self {
        Self { id: i.id, title: i.title }
    }
}

impl From<CatalogItem> for ItemSummary {
    fn from(i: CatalogItem) -> Self {
        Self { id: i.id, title: i.title, img: i.img, price: i.price }
    }
}
