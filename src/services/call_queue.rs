//! Shared call board
//!
//! Read order is ascending creation time, ties broken by insertion order.
//! After a reorder every entry is re-created with the reorder timestamp, so the
//! board then follows re-insertion order instead; previous identities and
//! timestamps are not carried over.
//!
//! Positional deletes are resolved against the current read order and then
//! executed by identity, so a concurrent append or delete can never shift the
//! target. A reorder is a clear followed by sequential inserts without a
//! surrounding transaction: an append racing with it may be wiped by the clear
//! or survive behind the re-inserted entries.

use std::sync::Arc;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::errors::{CallboardError, Result};
use crate::services::capability::{CapabilityGate, Session};
use crate::storage::{CallEntry, SeaOrmStorage};

/// One requested position in a reorder
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueueItem {
    pub slot: String,
    pub username: String,
}

pub struct CallQueue {
    storage: Arc<SeaOrmStorage>,
    gate: Arc<CapabilityGate>,
}

impl CallQueue {
    pub fn new(storage: Arc<SeaOrmStorage>, gate: Arc<CapabilityGate>) -> Self {
        Self { storage, gate }
    }

    /// Public: add an entry at the tail
    pub async fn append(&self, slot: String, username: String) -> Result<CallEntry> {
        let entry = CallEntry::new(slot, username, Utc::now());
        self.storage.insert_call(&entry).await?;

        info!(
            "CallQueue: appended '{}' for '{}' ({})",
            entry.slot, entry.username, entry.id
        );
        Ok(entry)
    }

    /// Public: entries in board order
    pub async fn list(&self) -> Result<Vec<CallEntry>> {
        self.storage.list_calls().await
    }

    /// Remove the entry currently shown at `index`
    ///
    /// Fails with `NotFound` if that entry disappeared between the read and
    /// the delete.
    pub async fn delete_at(&self, session: &Session, index: i64) -> Result<CallEntry> {
        self.gate.require(session, "delete call")?;

        let entries = self.storage.list_calls().await?;
        let target = resolve_index(&entries, index)?.clone();

        if !self.storage.delete_call_by_id(&target.id).await? {
            return Err(CallboardError::not_found(format!(
                "Call at index {} was removed concurrently",
                index
            )));
        }

        info!(
            "CallQueue: deleted index {} ('{}' / '{}', {})",
            index, target.slot, target.username, target.id
        );
        Ok(target)
    }

    /// Clear the whole board; idempotent
    pub async fn reset(&self, session: &Session) -> Result<()> {
        self.gate.require(session, "reset calls")?;

        let removed = self.storage.clear_calls().await?;
        info!("CallQueue: reset, {} entries removed", removed);
        Ok(())
    }

    /// Replace the board with `items`, in the given order
    pub async fn reorder(&self, session: &Session, items: Vec<QueueItem>) -> Result<Vec<CallEntry>> {
        self.gate.require(session, "reorder calls")?;

        let removed = self.storage.clear_calls().await?;
        debug!("CallQueue: reorder cleared {} entries", removed);

        // 同一时间戳，顺序由插入序号决定
        let reordered_at = Utc::now();
        let mut created = Vec::with_capacity(items.len());
        for item in items {
            let entry = CallEntry::new(item.slot, item.username, reordered_at);
            self.storage.insert_call(&entry).await?;
            created.push(entry);
        }

        info!("CallQueue: reordered, {} entries re-created", created.len());
        Ok(created)
    }

    pub async fn len(&self) -> Result<u64> {
        self.storage.count_calls().await
    }
}

/// Map a caller-supplied index onto the current read order
pub fn resolve_index(entries: &[CallEntry], index: i64) -> Result<&CallEntry> {
    usize::try_from(index)
        .ok()
        .and_then(|i| entries.get(i))
        .ok_or_else(|| {
            CallboardError::invalid_index(format!(
                "Invalid index {} (queue length {})",
                index,
                entries.len()
            ))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries(n: usize) -> Vec<CallEntry> {
        (0..n)
            .map(|i| CallEntry::new(format!("slot-{}", i), format!("user-{}", i), Utc::now()))
            .collect()
    }

    #[test]
    fn test_resolve_index_in_range() {
        let list = entries(3);
        assert_eq!(resolve_index(&list, 0).unwrap().slot, "slot-0");
        assert_eq!(resolve_index(&list, 2).unwrap().slot, "slot-2");
    }

    #[test]
    fn test_resolve_index_negative() {
        let list = entries(3);
        let err = resolve_index(&list, -1).unwrap_err();
        assert!(matches!(err, CallboardError::InvalidIndex(_)));
    }

    #[test]
    fn test_resolve_index_past_end() {
        let list = entries(3);
        assert!(matches!(
            resolve_index(&list, 3),
            Err(CallboardError::InvalidIndex(_))
        ));
        assert!(matches!(
            resolve_index(&[], 0),
            Err(CallboardError::InvalidIndex(_))
        ));
    }
}
