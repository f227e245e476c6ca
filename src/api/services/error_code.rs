//! 统一 API 错误码定义

use serde_repr::{Deserialize_repr, Serialize_repr};

use crate::errors::CallboardError;

/// API 错误码枚举
///
/// 使用 serde_repr 序列化为数字。按千位分域：
/// - 1000-1099: 通用错误
/// - 2000-2099: 认证错误
/// - 3000-3099: 呼叫队列错误
/// - 4000-4099: Offer 错误
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize_repr, Deserialize_repr)]
#[repr(i32)]
pub enum ErrorCode {
    // 通用错误 1000-1099
    BadRequest = 1000,
    NotFound = 1004,
    InternalServerError = 1005,
    ServiceUnavailable = 1030,

    // 认证错误 2000-2099
    AuthFailed = 2000,
    Forbidden = 2001,

    // 呼叫队列错误 3000-3099
    CallIndexInvalid = 3000,

    // Offer 错误 4000-4099
    OfferInvalid = 4001,
}

impl From<&CallboardError> for ErrorCode {
    fn from(err: &CallboardError) -> Self {
        match err {
            CallboardError::Forbidden(_) => ErrorCode::Forbidden,
            CallboardError::BadCredentials(_) => ErrorCode::AuthFailed,
            CallboardError::InvalidIndex(_) => ErrorCode::CallIndexInvalid,
            CallboardError::NotFound(_) => ErrorCode::NotFound,
            CallboardError::Validation(_) => ErrorCode::OfferInvalid,
            CallboardError::TransientStore(_) => ErrorCode::ServiceUnavailable,
            CallboardError::Serialization(_) | CallboardError::Config(_) => {
                ErrorCode::InternalServerError
            }
        }
    }
}
