//! Call queue collection operations

use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder};
use tracing::debug;

use super::SeaOrmStorage;
use super::converters::{call_to_active_model, model_to_call};
use crate::errors::Result;
use crate::storage::CallEntry;

use migration::entities::call_entry;

impl SeaOrmStorage {
    /// 队列读取顺序：created_at 升序，同一时间戳按插入顺序
    pub async fn list_calls(&self) -> Result<Vec<CallEntry>> {
        let models = call_entry::Entity::find()
            .order_by_asc(call_entry::Column::CreatedAt)
            .order_by_asc(call_entry::Column::Seq)
            .all(&self.db)
            .await?;

        debug!("Loaded {} call entries", models.len());
        Ok(models.into_iter().map(model_to_call).collect())
    }

    pub async fn insert_call(&self, entry: &CallEntry) -> Result<()> {
        call_entry::Entity::insert(call_to_active_model(entry))
            .exec(&self.db)
            .await?;
        Ok(())
    }

    /// 按 identity 删除；返回 false 表示该条目已不存在
    pub async fn delete_call_by_id(&self, id: &str) -> Result<bool> {
        let result = call_entry::Entity::delete_many()
            .filter(call_entry::Column::Id.eq(id))
            .exec(&self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// 清空队列，返回删除条数
    pub async fn clear_calls(&self) -> Result<u64> {
        let result = call_entry::Entity::delete_many().exec(&self.db).await?;
        Ok(result.rows_affected)
    }

    pub async fn count_calls(&self) -> Result<u64> {
        Ok(call_entry::Entity::find().count(&self.db).await?)
    }
}
