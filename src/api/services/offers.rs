//! Offer 目录端点

use actix_web::{Responder, Result as ActixResult, web};
use tracing::trace;

use crate::services::Session;
use crate::storage::OfferFields;

use super::helpers::api_result;
use super::state::ApiState;
use super::types::MessageResponse;

/// GET /api/offers
pub async fn get_offers(state: web::Data<ApiState>) -> ActixResult<impl Responder> {
    trace!("API: list offers");
    Ok(api_result(state.offers.list().await))
}

/// POST /api/offers
pub async fn create_offer(
    state: web::Data<ApiState>,
    session: Session,
    body: web::Json<OfferFields>,
) -> ActixResult<impl Responder> {
    Ok(api_result(
        state.offers.create(&session, body.into_inner()).await,
    ))
}

/// PUT /api/offers/{id}
pub async fn update_offer(
    state: web::Data<ApiState>,
    session: Session,
    path: web::Path<String>,
    body: web::Json<OfferFields>,
) -> ActixResult<impl Responder> {
    let id = path.into_inner();
    Ok(api_result(
        state.offers.update(&session, &id, body.into_inner()).await,
    ))
}

/// DELETE /api/offers/{id}
pub async fn delete_offer(
    state: web::Data<ApiState>,
    session: Session,
    path: web::Path<String>,
) -> ActixResult<impl Responder> {
    let id = path.into_inner();
    let result = state
        .offers
        .delete(&session, &id)
        .await
        .map(|()| MessageResponse {
            message: "Offer deleted successfully".to_string(),
        });
    Ok(api_result(result))
}
