//! API 帮助函数

use actix_web::cookie::{Cookie, SameSite};
use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, error::JsonPayloadError, web};
use serde::Serialize;
use tracing::{debug, error};

use crate::errors::CallboardError;

use super::error_code::ErrorCode;
use super::types::ErrorBody;

/// 构建 JSON 响应
pub fn json_response<T: Serialize>(status: StatusCode, body: &T) -> HttpResponse {
    HttpResponse::build(status)
        .append_header(("Content-Type", "application/json; charset=utf-8"))
        .json(body)
}

/// 构建成功响应
pub fn success_response<T: Serialize>(data: T) -> HttpResponse {
    json_response(StatusCode::OK, &data)
}

/// 构建错误响应
pub fn error_response(status: StatusCode, code: ErrorCode, detail: &str) -> HttpResponse {
    json_response(
        status,
        &ErrorBody {
            code,
            detail: detail.to_string(),
        },
    )
}

/// 从 CallboardError 构建错误响应（自动映射 HTTP 状态码和 ErrorCode）
pub fn error_from_callboard(err: &CallboardError) -> HttpResponse {
    let status = err.http_status();
    if status.is_server_error() {
        error!("API error: {}", err);
    } else {
        debug!("API error: {}", err);
    }
    error_response(status, ErrorCode::from(err), err.message())
}

/// 统一 Result → HttpResponse 转换
pub fn api_result<T, E>(result: Result<T, E>) -> HttpResponse
where
    T: Serialize,
    E: Into<CallboardError>,
{
    match result {
        Ok(data) => success_response(data),
        Err(e) => error_from_callboard(&e.into()),
    }
}

/// JSON 请求体解析失败时返回统一错误格式
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(64 * 1024)
        .error_handler(|err: JsonPayloadError, _req: &HttpRequest| {
            let response = error_response(
                StatusCode::BAD_REQUEST,
                ErrorCode::BadRequest,
                &format!("Invalid request body: {}", err),
            );
            actix_web::error::InternalError::from_response(err, response).into()
        })
}

/// Session cookie 构建器
pub struct SessionCookieBuilder<'a> {
    name: &'a str,
    secure: bool,
}

impl<'a> SessionCookieBuilder<'a> {
    pub fn new(name: &'a str, secure: bool) -> Self {
        Self { name, secure }
    }

    fn base(&self, value: String) -> Cookie<'static> {
        let mut cookie = Cookie::new(self.name.to_string(), value);
        cookie.set_path("/");
        // 前端脚本需要读取该 cookie 判断登录态
        cookie.set_http_only(false);
        cookie.set_secure(self.secure);
        cookie.set_same_site(SameSite::Lax);
        cookie
    }

    pub fn build(&self, marker: String) -> Cookie<'static> {
        self.base(marker)
    }

    pub fn build_expired(&self) -> Cookie<'static> {
        let mut cookie = self.base(String::new());
        cookie.make_removal();
        cookie
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expired_cookie_has_zero_max_age() {
        let cookie = SessionCookieBuilder::new("admin", false).build_expired();
        assert_eq!(cookie.name(), "admin");
        assert_eq!(cookie.value(), "");
        assert_eq!(
            cookie.max_age(),
            Some(actix_web::cookie::time::Duration::ZERO)
        );
    }

    #[test]
    fn test_session_cookie_attributes() {
        let cookie = SessionCookieBuilder::new("admin", true).build("marker".to_string());
        assert_eq!(cookie.value(), "marker");
        assert_eq!(cookie.path(), Some("/"));
        assert_eq!(cookie.secure(), Some(true));
        assert_eq!(cookie.same_site(), Some(SameSite::Lax));
    }

    #[test]
    fn test_error_status_follows_error_kind() {
        let resp = error_from_callboard(&CallboardError::invalid_index("Invalid index 9"));
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let resp = error_from_callboard(&CallboardError::transient_store("db down"));
        assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
    }
}
