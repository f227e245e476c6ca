use std::sync::Arc;

use crate::config::StaticConfig;
use crate::services::{
    ActionLog, AnalyticsAggregator, CallQueue, CapabilityGate, ClickTracker, OfferCatalog,
};
use crate::storage::SeaOrmStorage;
use crate::utils::ip::TrustedProxies;

/// Everything the handlers need, shared across workers
pub struct ApiState {
    pub gate: Arc<CapabilityGate>,
    pub offers: OfferCatalog,
    pub calls: CallQueue,
    pub clicks: ClickTracker,
    pub analytics: AnalyticsAggregator,
    pub action_log: ActionLog,
    pub trusted_proxies: TrustedProxies,
    pub cookie_secure: bool,
}

impl ApiState {
    pub fn new(storage: Arc<SeaOrmStorage>, config: &StaticConfig) -> Self {
        let gate = Arc::new(CapabilityGate::new(&config.auth));

        Self {
            offers: OfferCatalog::new(storage.clone(), gate.clone()),
            calls: CallQueue::new(storage.clone(), gate.clone()),
            clicks: ClickTracker::new(storage.clone()),
            analytics: AnalyticsAggregator::new(storage.clone(), gate.clone()),
            action_log: ActionLog::new(storage, gate.clone()),
            trusted_proxies: TrustedProxies::new(&config.api.trusted_proxies),
            cookie_secure: config.auth.cookie_secure,
            gate,
        }
    }
}
