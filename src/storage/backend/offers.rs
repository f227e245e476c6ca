//! Offer collection operations

use chrono::{DateTime, Utc};
use sea_orm::{
    ColumnTrait, EntityTrait, ExprTrait, PaginatorTrait, QueryFilter, QueryOrder,
    sea_query::Expr,
};
use tracing::{debug, info};

use super::SeaOrmStorage;
use super::converters::{model_to_offer, offer_fields_to_active_model, offer_to_active_model};
use crate::errors::Result;
use crate::storage::{Offer, OfferFields};

use migration::entities::offer;

impl SeaOrmStorage {
    /// All offers, oldest first (id 兜底，保证结果稳定)
    pub async fn list_offers(&self) -> Result<Vec<Offer>> {
        let models = offer::Entity::find()
            .order_by_asc(offer::Column::CreatedAt)
            .order_by_asc(offer::Column::Id)
            .all(&self.db)
            .await?;

        debug!("Loaded {} offers", models.len());
        models.into_iter().map(model_to_offer).collect()
    }

    pub async fn get_offer(&self, id: &str) -> Result<Option<Offer>> {
        offer::Entity::find_by_id(id.to_string())
            .one(&self.db)
            .await?
            .map(model_to_offer)
            .transpose()
    }

    pub async fn count_offers(&self) -> Result<u64> {
        Ok(offer::Entity::find().count(&self.db).await?)
    }

    pub async fn insert_offer(&self, offer: &Offer) -> Result<()> {
        offer::Entity::insert(offer_to_active_model(offer)?)
            .exec(&self.db)
            .await?;

        info!("Offer inserted: {} ({})", offer.id, offer.title);
        Ok(())
    }

    pub async fn insert_offers(&self, offers: &[Offer]) -> Result<()> {
        if offers.is_empty() {
            return Ok(());
        }

        let models = offers
            .iter()
            .map(offer_to_active_model)
            .collect::<Result<Vec<_>>>()?;

        offer::Entity::insert_many(models).exec(&self.db).await?;

        info!("Batch inserted {} offers", offers.len());
        Ok(())
    }

    /// 更新展示字段与 updated_at，不触碰 clicks / created_at
    ///
    /// 返回 None 表示 id 不存在
    ///
    /// rows_affected 为 0 不代表不存在：MySQL 只统计实际改变的行，
    /// 同一秒内重复提交相同内容也会得到 0，因此以重新读取为准
    pub async fn update_offer_fields(
        &self,
        id: &str,
        fields: &OfferFields,
        updated_at: DateTime<Utc>,
    ) -> Result<Option<Offer>> {
        let result = offer::Entity::update_many()
            .set(offer_fields_to_active_model(fields, updated_at)?)
            .filter(offer::Column::Id.eq(id))
            .exec(&self.db)
            .await?;

        if result.rows_affected == 0 {
            debug!("Offer update on {} changed no rows", id);
        }

        self.get_offer(id).await
    }

    /// 返回 false 表示 id 不存在
    pub async fn delete_offer(&self, id: &str) -> Result<bool> {
        let result = offer::Entity::delete_by_id(id.to_string())
            .exec(&self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// 原子自增：单条 `UPDATE offers SET clicks = clicks + 1 WHERE id = ?`
    ///
    /// 返回 false 表示 id 不存在
    pub async fn increment_offer_clicks(&self, id: &str) -> Result<bool> {
        let result = offer::Entity::update_many()
            .col_expr(
                offer::Column::Clicks,
                Expr::col(offer::Column::Clicks).add(Expr::val(1i64)),
            )
            .filter(offer::Column::Id.eq(id))
            .exec(&self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
