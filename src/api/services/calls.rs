//! 呼叫队列端点

use actix_web::{HttpRequest, Responder, Result as ActixResult, web};
use tracing::trace;

use crate::errors::CallboardError;
use crate::services::{QueueItem, Session};

use super::helpers::{api_result, error_from_callboard};
use super::state::ApiState;
use super::types::{CallView, CallsResponse, NewCall, SuccessResponse};

/// GET /api/calls
pub async fn get_calls(state: web::Data<ApiState>) -> ActixResult<impl Responder> {
    let result = state.calls.list().await.map(|entries| {
        trace!("API: returning {} calls", entries.len());
        CallsResponse {
            calls: entries.into_iter().map(CallView::from).collect(),
        }
    });
    Ok(api_result(result))
}

/// POST /api/calls
///
/// 先写操作日志，再追加到队列
pub async fn create_call(
    req: HttpRequest,
    state: web::Data<ApiState>,
    body: web::Json<NewCall>,
) -> ActixResult<impl Responder> {
    let NewCall { slot, username } = body.into_inner();
    let ip = state.trusted_proxies.client_ip(&req);

    if let Err(e) = state
        .action_log
        .record_call_created(ip, &slot, &username)
        .await
    {
        return Ok(error_from_callboard(&e));
    }

    let result = state
        .calls
        .append(slot, username)
        .await
        .map(|_| SuccessResponse::with_message("Call added"));
    Ok(api_result(result))
}

/// DELETE /api/calls/{index}
pub async fn delete_call(
    state: web::Data<ApiState>,
    session: Session,
    path: web::Path<String>,
) -> ActixResult<impl Responder> {
    // 先鉴权，再解析下标
    if let Err(e) = state.gate.require(&session, "delete call") {
        return Ok(error_from_callboard(&e));
    }

    let raw = path.into_inner();
    let Ok(index) = raw.parse::<i64>() else {
        return Ok(error_from_callboard(&CallboardError::invalid_index(format!(
            "Invalid index {}",
            raw
        ))));
    };

    let result = state
        .calls
        .delete_at(&session, index)
        .await
        .map(|_| SuccessResponse::ok());
    Ok(api_result(result))
}

/// POST /api/calls/reset
pub async fn reset_calls(
    state: web::Data<ApiState>,
    session: Session,
) -> ActixResult<impl Responder> {
    let result = state
        .calls
        .reset(&session)
        .await
        .map(|()| SuccessResponse::ok());
    Ok(api_result(result))
}

/// POST /api/calls/reorder
pub async fn reorder_calls(
    state: web::Data<ApiState>,
    session: Session,
    body: web::Json<Vec<CallView>>,
) -> ActixResult<impl Responder> {
    let items: Vec<QueueItem> = body.into_inner().into_iter().map(QueueItem::from).collect();
    let result = state
        .calls
        .reorder(&session, items)
        .await
        .map(|_| SuccessResponse::ok());
    Ok(api_result(result))
}
