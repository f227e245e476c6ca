use chrono::{DateTime, Utc};

use crate::errors::{CallboardError, Result};
use crate::storage::{ActionLogEntry, CallEntry, ClickRecord, Offer, OfferFields};
use migration::entities::{action_log, call_entry, click_record, offer};

/// 将 offers Model 转换为 Offer（tags 以 JSON 文本存储）
pub fn model_to_offer(model: offer::Model) -> Result<Offer> {
    let tags: Vec<String> = serde_json::from_str(&model.tags).map_err(|e| {
        CallboardError::serialization(format!("Offer '{}' has unreadable tags: {}", model.id, e))
    })?;

    Ok(Offer {
        id: model.id,
        title: model.title,
        bonus: model.bonus,
        description: model.description,
        color: model.color,
        logo: model.logo,
        link: model.link,
        tags,
        clicks: model.clicks.max(0) as u64,
        created_at: model.created_at,
        updated_at: model.updated_at,
    })
}

/// 将新建的 Offer 转换为 ActiveModel（所有列都写入）
pub fn offer_to_active_model(offer: &Offer) -> Result<offer::ActiveModel> {
    use sea_orm::ActiveValue::*;

    Ok(offer::ActiveModel {
        id: Set(offer.id.clone()),
        title: Set(offer.title.clone()),
        bonus: Set(offer.bonus.clone()),
        description: Set(offer.description.clone()),
        color: Set(offer.color.clone()),
        logo: Set(offer.logo.clone()),
        link: Set(offer.link.clone()),
        tags: Set(serde_json::to_string(&offer.tags)?),
        clicks: Set(offer.clicks as i64),
        created_at: Set(offer.created_at),
        updated_at: Set(offer.updated_at),
    })
}

/// 字段更新用的 ActiveModel：id、clicks、created_at 保持 NotSet
pub fn offer_fields_to_active_model(
    fields: &OfferFields,
    updated_at: DateTime<Utc>,
) -> Result<offer::ActiveModel> {
    use sea_orm::ActiveValue::*;

    Ok(offer::ActiveModel {
        id: NotSet,
        title: Set(fields.title.clone()),
        bonus: Set(fields.bonus.clone()),
        description: Set(fields.description.clone()),
        color: Set(fields.color.clone()),
        logo: Set(fields.logo.clone()),
        link: Set(fields.link.clone()),
        tags: Set(serde_json::to_string(&fields.tags)?),
        clicks: NotSet,
        created_at: NotSet,
        updated_at: Set(updated_at),
    })
}

pub fn model_to_call(model: call_entry::Model) -> CallEntry {
    CallEntry {
        id: model.id,
        slot: model.slot,
        username: model.username,
        created_at: model.created_at,
    }
}

/// seq 由数据库分配
pub fn call_to_active_model(entry: &CallEntry) -> call_entry::ActiveModel {
    use sea_orm::ActiveValue::*;

    call_entry::ActiveModel {
        seq: NotSet,
        id: Set(entry.id.clone()),
        slot: Set(entry.slot.clone()),
        username: Set(entry.username.clone()),
        created_at: Set(entry.created_at),
    }
}

pub fn click_to_active_model(record: &ClickRecord) -> click_record::ActiveModel {
    use sea_orm::ActiveValue::*;

    click_record::ActiveModel {
        id: Set(record.id.clone()),
        offer_id: Set(record.offer_id.clone()),
        source_address: Set(record.source_address.clone()),
        clicked_at: Set(record.clicked_at),
    }
}

pub fn model_to_action_log(model: action_log::Model) -> ActionLogEntry {
    ActionLogEntry {
        id: model.id,
        timestamp: model.timestamp,
        ip: model.ip,
        slot: model.slot,
        username: model.username,
        action: model.action,
    }
}

/// seq 由数据库分配
pub fn action_log_to_active_model(entry: &ActionLogEntry) -> action_log::ActiveModel {
    use sea_orm::ActiveValue::*;

    action_log::ActiveModel {
        seq: NotSet,
        id: Set(entry.id.clone()),
        timestamp: Set(entry.timestamp),
        ip: Set(entry.ip.clone()),
        slot: Set(entry.slot.clone()),
        username: Set(entry.username.clone()),
        action: Set(entry.action.clone()),
    }
}
