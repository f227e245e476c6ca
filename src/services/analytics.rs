use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::Result;
use crate::services::capability::{CapabilityGate, Session};
use crate::storage::SeaOrmStorage;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OfferStat {
    pub id: String,
    pub title: String,
    pub clicks: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyticsSummary {
    pub offers_stats: Vec<OfferStat>,
    pub total_clicks: u64,
    pub total_calls: u64,
}

/// Read-only view over the catalog counters and the call board
pub struct AnalyticsAggregator {
    storage: Arc<SeaOrmStorage>,
    gate: Arc<CapabilityGate>,
}

impl AnalyticsAggregator {
    pub fn new(storage: Arc<SeaOrmStorage>, gate: Arc<CapabilityGate>) -> Self {
        Self { storage, gate }
    }

    pub async fn summarize(&self, session: &Session) -> Result<AnalyticsSummary> {
        self.gate.require(session, "read analytics")?;

        let offers = self.storage.list_offers().await?;
        let total_calls = self.storage.count_calls().await?;

        // 以计数器为准，已删除 offer 的历史点击不计入
        let offers_stats: Vec<OfferStat> = offers
            .into_iter()
            .map(|offer| OfferStat {
                id: offer.id,
                title: offer.title,
                clicks: offer.clicks,
            })
            .collect();
        let total_clicks = offers_stats.iter().map(|s| s.clicks).sum();

        debug!(
            "AnalyticsAggregator: {} offers, {} clicks, {} calls",
            offers_stats.len(),
            total_clicks,
            total_calls
        );

        Ok(AnalyticsSummary {
            offers_stats,
            total_clicks,
            total_calls,
        })
    }
}
