use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, warn};

use crate::errors::{CallboardError, Result};
use crate::storage::{ClickRecord, SeaOrmStorage};

/// Public click tracking: counter increment plus an audit record
pub struct ClickTracker {
    storage: Arc<SeaOrmStorage>,
}

impl ClickTracker {
    pub fn new(storage: Arc<SeaOrmStorage>) -> Self {
        Self { storage }
    }

    /// Count one click on `offer_id`
    ///
    /// The increment is a single conditional UPDATE, so it doubles as the
    /// existence check. The record is appended only after a successful increment.
    pub async fn record_click(
        &self,
        offer_id: &str,
        source_address: Option<String>,
    ) -> Result<ClickRecord> {
        if !self.storage.increment_offer_clicks(offer_id).await? {
            warn!("ClickTracker: click on unknown offer {}", offer_id);
            return Err(CallboardError::not_found("Offer not found"));
        }

        let record = ClickRecord::new(offer_id, source_address, Utc::now());
        self.storage.insert_click(&record).await?;

        debug!(
            "ClickTracker: click on {} from {}",
            offer_id,
            record.source_address.as_deref().unwrap_or("unknown")
        );
        Ok(record)
    }

    /// Number of stored click records for an offer (including deleted offers)
    pub async fn record_count(&self, offer_id: &str) -> Result<u64> {
        self.storage.count_clicks_for(offer_id).await
    }
}
