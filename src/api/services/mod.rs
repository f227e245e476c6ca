//! HTTP API 服务模块
//!
//! - 公开：offer 列表、呼叫队列读取与提交、点击统计、登录登出
//! - 需要管理员会话：offer 编辑、队列删除/重置/重排、分析、操作日志

mod auth;
mod calls;
pub mod error_code;
mod helpers;
mod offers;
pub mod routes;
mod session;
mod state;
mod tracking;
mod types;

pub use error_code::ErrorCode;
pub use helpers::{api_result, error_from_callboard, error_response, success_response};
pub use routes::api_routes;
pub use state::ApiState;
pub use types::*;
