//! Session 提取器：从 cookie 中读取会话标记

use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest, web};
use futures_util::future::{Ready, ready};
use tracing::trace;

use crate::services::Session;

use super::state::ApiState;

impl FromRequest for Session {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let marker = req
            .app_data::<web::Data<ApiState>>()
            .and_then(|state| req.cookie(state.gate.cookie_name()))
            .map(|cookie| cookie.value().to_string());

        trace!("Session cookie present: {}", marker.is_some());
        ready(Ok(Session::from_marker(marker)))
    }
}
