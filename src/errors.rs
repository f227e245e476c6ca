use std::fmt;

use actix_web::http::StatusCode;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallboardError {
    Forbidden(String),
    NotFound(String),
    InvalidIndex(String),
    BadCredentials(String),
    TransientStore(String),
    Validation(String),
    Serialization(String),
    Config(String),
}

impl CallboardError {
    /// 获取错误代码
    pub fn code(&self) -> &'static str {
        match self {
            CallboardError::Forbidden(_) => "E001",
            CallboardError::NotFound(_) => "E002",
            CallboardError::InvalidIndex(_) => "E003",
            CallboardError::BadCredentials(_) => "E004",
            CallboardError::TransientStore(_) => "E005",
            CallboardError::Validation(_) => "E006",
            CallboardError::Serialization(_) => "E007",
            CallboardError::Config(_) => "E008",
        }
    }

    /// 获取错误类型名称
    pub fn error_type(&self) -> &'static str {
        match self {
            CallboardError::Forbidden(_) => "Forbidden",
            CallboardError::NotFound(_) => "Resource Not Found",
            CallboardError::InvalidIndex(_) => "Invalid Index",
            CallboardError::BadCredentials(_) => "Bad Credentials",
            CallboardError::TransientStore(_) => "Store Unavailable",
            CallboardError::Validation(_) => "Validation Error",
            CallboardError::Serialization(_) => "Serialization Error",
            CallboardError::Config(_) => "Configuration Error",
        }
    }

    /// 获取错误详情
    pub fn message(&self) -> &str {
        match self {
            CallboardError::Forbidden(msg) => msg,
            CallboardError::NotFound(msg) => msg,
            CallboardError::InvalidIndex(msg) => msg,
            CallboardError::BadCredentials(msg) => msg,
            CallboardError::TransientStore(msg) => msg,
            CallboardError::Validation(msg) => msg,
            CallboardError::Serialization(msg) => msg,
            CallboardError::Config(msg) => msg,
        }
    }

    /// HTTP status the API layer answers with
    pub fn http_status(&self) -> StatusCode {
        match self {
            CallboardError::Forbidden(_) => StatusCode::FORBIDDEN,
            CallboardError::NotFound(_) => StatusCode::NOT_FOUND,
            CallboardError::InvalidIndex(_) => StatusCode::BAD_REQUEST,
            CallboardError::BadCredentials(_) => StatusCode::UNAUTHORIZED,
            CallboardError::TransientStore(_) => StatusCode::SERVICE_UNAVAILABLE,
            CallboardError::Validation(_) => StatusCode::BAD_REQUEST,
            CallboardError::Serialization(_) | CallboardError::Config(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// 格式化为彩色输出（用于启动失败时输出到终端）
    pub fn format_colored(&self) -> String {
        use colored::Colorize;
        format!(
            "{} {} {}\n  {}",
            "[ERROR]".red().bold(),
            self.code().yellow(),
            self.error_type().red(),
            self.message().white()
        )
    }

    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for CallboardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for CallboardError {}

// 便捷的构造函数
impl CallboardError {
    pub fn forbidden<T: Into<String>>(msg: T) -> Self {
        CallboardError::Forbidden(msg.into())
    }

    pub fn not_found<T: Into<String>>(msg: T) -> Self {
        CallboardError::NotFound(msg.into())
    }

    pub fn invalid_index<T: Into<String>>(msg: T) -> Self {
        CallboardError::InvalidIndex(msg.into())
    }

    pub fn bad_credentials<T: Into<String>>(msg: T) -> Self {
        CallboardError::BadCredentials(msg.into())
    }

    pub fn transient_store<T: Into<String>>(msg: T) -> Self {
        CallboardError::TransientStore(msg.into())
    }

    pub fn validation<T: Into<String>>(msg: T) -> Self {
        CallboardError::Validation(msg.into())
    }

    pub fn serialization<T: Into<String>>(msg: T) -> Self {
        CallboardError::Serialization(msg.into())
    }

    pub fn config<T: Into<String>>(msg: T) -> Self {
        CallboardError::Config(msg.into())
    }
}

// 存储层错误统一视为暂时不可用，由调用方决定是否重试
impl From<sea_orm::DbErr> for CallboardError {
    fn from(err: sea_orm::DbErr) -> Self {
        CallboardError::TransientStore(err.to_string())
    }
}

impl From<serde_json::Error> for CallboardError {
    fn from(err: serde_json::Error) -> Self {
        CallboardError::Serialization(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, CallboardError>;
