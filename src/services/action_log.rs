use std::sync::Arc;

use chrono::Utc;
use tracing::debug;

use crate::errors::Result;
use crate::services::capability::{CapabilityGate, Session};
use crate::storage::{ACTION_CALL_CREATED, ActionLogEntry, SeaOrmStorage};

/// Maximum number of entries returned by `recent`
pub const RECENT_LOG_WINDOW: u64 = 100;

/// Append-only audit trail of call submissions. No retention.
pub struct ActionLog {
    storage: Arc<SeaOrmStorage>,
    gate: Arc<CapabilityGate>,
}

impl ActionLog {
    pub fn new(storage: Arc<SeaOrmStorage>, gate: Arc<CapabilityGate>) -> Self {
        Self { storage, gate }
    }

    pub async fn record_call_created(
        &self,
        ip: Option<String>,
        slot: &str,
        username: &str,
    ) -> Result<ActionLogEntry> {
        let entry = ActionLogEntry {
            id: uuid::Uuid::new_v4().to_string(),
            timestamp: Utc::now(),
            ip,
            slot: slot.to_string(),
            username: username.to_string(),
            action: ACTION_CALL_CREATED.to_string(),
        };
        self.storage.insert_action_log(&entry).await?;

        debug!("ActionLog: {} '{}' by '{}'", entry.action, slot, username);
        Ok(entry)
    }

    /// Newest first, capped at `RECENT_LOG_WINDOW`
    pub async fn recent(&self, session: &Session) -> Result<Vec<ActionLogEntry>> {
        self.gate.require(session, "read logs")?;
        self.storage.recent_action_logs(RECENT_LOG_WINDOW).await
    }
}
