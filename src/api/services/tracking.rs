//! 点击统计、分析与操作日志端点

use actix_web::{HttpRequest, Responder, Result as ActixResult, web};

use crate::services::Session;

use super::helpers::api_result;
use super::state::ApiState;
use super::types::{ClickRequest, SuccessResponse};

/// POST /api/click
pub async fn track_click(
    req: HttpRequest,
    state: web::Data<ApiState>,
    body: web::Json<ClickRequest>,
) -> ActixResult<impl Responder> {
    let ip = state.trusted_proxies.client_ip(&req);
    let result = state
        .clicks
        .record_click(&body.offer_id, ip)
        .await
        .map(|_| SuccessResponse::ok());
    Ok(api_result(result))
}

/// GET /api/analytics
pub async fn get_analytics(
    state: web::Data<ApiState>,
    session: Session,
) -> ActixResult<impl Responder> {
    Ok(api_result(state.analytics.summarize(&session).await))
}

/// GET /api/logs
pub async fn get_logs(
    state: web::Data<ApiState>,
    session: Session,
) -> ActixResult<impl Responder> {
    Ok(api_result(state.action_log.recent(&session).await))
}
