use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// A product as carried by a shareable link.
///
/// Timestamps are kept as the ISO-8601 text they arrived with so a decoded
/// list re-encodes to the same payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub category: String,
    pub image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated: Option<String>,
}

/// A product as stored in the hosted `products` collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRecord {
    pub id: String,
    pub name: String,
    pub category: String,
    pub price: f64,
    pub image: String,
    pub created: String,
    pub updated: String,
}

/// Current time as an ISO-8601 UTC timestamp with millisecond precision.
pub fn timestamp_now() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}
