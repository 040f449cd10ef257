//! Helpers for the open, schemaless part of stored documents.

use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};
use uuid::Uuid;

use crate::errors::ServiceError;

/// Stored `details` column to a field map; anything but an object is dropped.
pub fn into_map(details: Option<Value>) -> Map<String, Value> {
    match details {
        Some(Value::Object(map)) => map,
        _ => Map::new(),
    }
}

/// Field map to the stored `details` column; empty maps are stored as NULL.
pub fn from_map(map: Map<String, Value>) -> Option<Value> {
    if map.is_empty() { None } else { Some(Value::Object(map)) }
}

/// Parse a path identifier. A malformed id is a store-level failure, not a
/// missing document.
pub fn parse_id(raw: &str) -> Result<Uuid, ServiceError> {
    Uuid::parse_str(raw).map_err(|_| ServiceError::InvalidId(raw.to_string()))
}

/// Prices arrive either as JSON numbers or as numeric strings ("40.00").
pub fn de_price<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Num(f64),
        Text(String),
    }
    match Raw::deserialize(deserializer)? {
        Raw::Num(n) => Ok(n),
        Raw::Text(s) => s.trim().parse::<f64>().map_err(serde::de::Error::custom),
    }
}

pub fn de_price_opt<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    struct Wrap(#[serde(deserialize_with = "de_price")] f64);
    Option::<Wrap>::deserialize(deserializer).map(|w| w.map(|Wrap(p)| p))
}
