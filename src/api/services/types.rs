//! API 请求 / 响应类型

use serde::{Deserialize, Serialize};

use crate::services::QueueItem;
use crate::storage::CallEntry;

use super::error_code::ErrorCode;

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct LoginCredentials {
    pub password: String,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct NewCall {
    pub slot: String,
    pub username: String,
}

/// Board row as shown to clients; `user` is the stored username
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct CallView {
    pub slot: String,
    pub user: String,
}

impl From<CallEntry> for CallView {
    fn from(entry: CallEntry) -> Self {
        Self {
            slot: entry.slot,
            user: entry.username,
        }
    }
}

impl From<CallView> for QueueItem {
    fn from(view: CallView) -> Self {
        QueueItem {
            slot: view.slot,
            username: view.user,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct CallsResponse {
    pub calls: Vec<CallView>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ClickRequest {
    pub offer_id: String,
    /// Accepted for compatibility, the connection address is recorded instead
    #[serde(default)]
    pub user_ip: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct SuccessResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl SuccessResponse {
    pub fn ok() -> Self {
        Self {
            success: true,
            message: None,
        }
    }

    pub fn with_message(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ErrorBody {
    pub code: ErrorCode,
    pub detail: String,
}
