use serde::Deserialize;
use chrono::{DateTime, Utc};

/// One catalog item as the server reports it.
///
/// Document-store backends emit `_id` and `createdAt`; the aliases accept
/// both spellings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Product {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    pub price: f64,
    pub description: String,
    pub image: String,
    #[serde(default, alias = "createdAt")]
    pub created_at: Option<DateTime<Utc>>,
}
