//! 登录 / 登出端点

use actix_web::{HttpResponse, Responder, Result as ActixResult, web};
use tracing::info;

use super::helpers::{SessionCookieBuilder, error_from_callboard};
use super::state::ApiState;
use super::types::{LoginCredentials, SuccessResponse};

/// POST /api/login
pub async fn login(
    state: web::Data<ApiState>,
    body: web::Json<LoginCredentials>,
) -> ActixResult<impl Responder> {
    let marker = match state.gate.login(&body.password) {
        Ok(marker) => marker,
        Err(e) => return Ok(error_from_callboard(&e)),
    };

    let cookie =
        SessionCookieBuilder::new(state.gate.cookie_name(), state.cookie_secure).build(marker);

    Ok(HttpResponse::Ok()
        .cookie(cookie)
        .append_header(("Content-Type", "application/json; charset=utf-8"))
        .json(SuccessResponse::ok()))
}

/// POST /api/logout
pub async fn logout(state: web::Data<ApiState>) -> ActixResult<impl Responder> {
    info!("API: logout");

    let cookie =
        SessionCookieBuilder::new(state.gate.cookie_name(), state.cookie_secure).build_expired();

    Ok(HttpResponse::Ok()
        .cookie(cookie)
        .append_header(("Content-Type", "application/json; charset=utf-8"))
        .json(SuccessResponse::ok()))
}
