use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info};

use crate::errors::{CallboardError, Result};
use crate::services::capability::{CapabilityGate, Session};
use crate::services::seed::default_offers;
use crate::storage::{Offer, OfferFields, SeaOrmStorage};

/// Offer catalog: public listing, admin-gated editing
pub struct OfferCatalog {
    storage: Arc<SeaOrmStorage>,
    gate: Arc<CapabilityGate>,
}

impl OfferCatalog {
    pub fn new(storage: Arc<SeaOrmStorage>, gate: Arc<CapabilityGate>) -> Self {
        Self { storage, gate }
    }

    pub async fn list(&self) -> Result<Vec<Offer>> {
        let offers = self.storage.list_offers().await?;
        debug!("OfferCatalog: listed {} offers", offers.len());
        Ok(offers)
    }

    pub async fn get(&self, id: &str) -> Result<Offer> {
        self.storage
            .get_offer(id)
            .await?
            .ok_or_else(|| CallboardError::not_found("Offer not found"))
    }

    pub async fn create(&self, session: &Session, fields: OfferFields) -> Result<Offer> {
        self.gate.require(session, "create offer")?;
        validate_fields(&fields)?;

        let offer = Offer::new(fields, Utc::now());
        self.storage.insert_offer(&offer).await?;

        info!("OfferCatalog: created offer '{}' ({})", offer.title, offer.id);
        Ok(offer)
    }

    /// Replace display fields; the click counter and creation time are never touched
    pub async fn update(&self, session: &Session, id: &str, fields: OfferFields) -> Result<Offer> {
        self.gate.require(session, "update offer")?;
        validate_fields(&fields)?;

        let updated = self
            .storage
            .update_offer_fields(id, &fields, Utc::now())
            .await?
            .ok_or_else(|| CallboardError::not_found("Offer not found"))?;

        info!("OfferCatalog: updated offer '{}' ({})", updated.title, id);
        Ok(updated)
    }

    /// Remove an offer; its click records are kept as history
    pub async fn delete(&self, session: &Session, id: &str) -> Result<()> {
        self.gate.require(session, "delete offer")?;

        if !self.storage.delete_offer(id).await? {
            return Err(CallboardError::not_found("Offer not found"));
        }

        info!("OfferCatalog: deleted offer {}", id);
        Ok(())
    }

    /// Insert the default offers when the catalog is empty. Returns how many were inserted.
    pub async fn seed_defaults_if_empty(&self) -> Result<usize> {
        let existing = self.storage.count_offers().await?;
        if existing > 0 {
            debug!("OfferCatalog: {} offers present, seeding skipped", existing);
            return Ok(0);
        }

        let offers = default_offers(Utc::now());
        self.storage.insert_offers(&offers).await?;

        info!("OfferCatalog: seeded {} default offers", offers.len());
        Ok(offers.len())
    }
}

fn validate_fields(fields: &OfferFields) -> Result<()> {
    if fields.title.trim().is_empty() {
        return Err(CallboardError::validation("Offer title must not be empty"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(title: &str) -> OfferFields {
        OfferFields {
            title: title.to_string(),
            bonus: String::new(),
            description: String::new(),
            color: String::new(),
            logo: String::new(),
            link: String::new(),
            tags: vec![],
        }
    }

    #[test]
    fn test_validate_fields() {
        assert!(validate_fields(&fields("Betify")).is_ok());
        assert!(matches!(
            validate_fields(&fields("   ")),
            Err(CallboardError::Validation(_))
        ));
    }
}
