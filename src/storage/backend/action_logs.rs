//! Action log collection operations (append-only)

use sea_orm::{EntityTrait, QueryOrder, QuerySelect};

use super::SeaOrmStorage;
use super::converters::{action_log_to_active_model, model_to_action_log};
use crate::errors::Result;
use crate::storage::ActionLogEntry;

use migration::entities::action_log;

impl SeaOrmStorage {
    pub async fn insert_action_log(&self, entry: &ActionLogEntry) -> Result<()> {
        action_log::Entity::insert(action_log_to_active_model(entry))
            .exec(&self.db)
            .await?;
        Ok(())
    }

    /// 最近的日志，按时间倒序，同一时间戳按插入顺序倒序
    pub async fn recent_action_logs(&self, limit: u64) -> Result<Vec<ActionLogEntry>> {
        let models = action_log::Entity::find()
            .order_by_desc(action_log::Column::Timestamp)
            .order_by_desc(action_log::Column::Seq)
            .limit(limit)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(model_to_action_log).collect())
    }
}
