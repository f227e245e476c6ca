//! Click record collection operations (append-only)

use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter};

use super::SeaOrmStorage;
use super::converters::click_to_active_model;
use crate::errors::Result;
use crate::storage::ClickRecord;

use migration::entities::click_record;

impl SeaOrmStorage {
    pub async fn insert_click(&self, record: &ClickRecord) -> Result<()> {
        click_record::Entity::insert(click_to_active_model(record))
            .exec(&self.db)
            .await?;
        Ok(())
    }

    /// Number of click records referencing an offer id, whether or not the offer still exists
    pub async fn count_clicks_for(&self, offer_id: &str) -> Result<u64> {
        Ok(click_record::Entity::find()
            .filter(click_record::Column::OfferId.eq(offer_id))
            .count(&self.db)
            .await?)
    }
}
