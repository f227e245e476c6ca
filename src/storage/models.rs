use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Action tag written for every public call submission
pub const ACTION_CALL_CREATED: &str = "call_created";

/// Editable display content of an offer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OfferFields {
    pub title: String,
    pub bonus: String,
    pub description: String,
    pub color: String,
    pub logo: String,
    pub link: String,
    /// Display order is preserved, duplicates are kept
    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Offer {
    pub id: String,
    pub title: String,
    pub bonus: String,
    pub description: String,
    pub color: String,
    pub logo: String,
    pub link: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub clicks: u64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Offer {
    /// Build a fresh offer: new identity, zero clicks, both timestamps equal
    pub fn new(fields: OfferFields, now: DateTime<Utc>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            title: fields.title,
            bonus: fields.bonus,
            description: fields.description,
            color: fields.color,
            logo: fields.logo,
            link: fields.link,
            tags: fields.tags,
            clicks: 0,
            created_at: now,
            updated_at: now,
        }
    }
}

/// One row of the call board
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallEntry {
    pub id: String,
    pub slot: String,
    pub username: String,
    pub created_at: DateTime<Utc>,
}

impl CallEntry {
    pub fn new(slot: String, username: String, now: DateTime<Utc>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            slot,
            username,
            created_at: now,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClickRecord {
    pub id: String,
    pub offer_id: String,
    pub source_address: Option<String>,
    pub clicked_at: DateTime<Utc>,
}

impl ClickRecord {
    pub fn new(offer_id: &str, source_address: Option<String>, now: DateTime<Utc>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            offer_id: offer_id.to_string(),
            source_address,
            clicked_at: now,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionLogEntry {
    pub id: String,
    pub timestamp: DateTime<Utc>,
    pub ip: Option<String>,
    pub slot: String,
    pub username: String,
    pub action: String,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct StorageConfig {
    pub storage_type: String,
}
