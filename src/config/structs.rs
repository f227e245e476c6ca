use serde::{Deserialize, Serialize};
use crate::errors::{CallboardError, Result};

/// Built-in admin password; a warning is logged at startup while it is in use
pub const DEFAULT_ADMIN_PASSWORD: &str = "admin123";

/// 静态配置（从 TOML + 环境变量加载，启动时使用）
///
/// 包含：
/// - server: 监听地址、端口、worker 数量
/// - database: 数据库连接配置
/// - auth: 管理员密码与会话 cookie
/// - cors: 跨域配置
/// - api: 可信代理
/// - logging: 日志配置
/// - seed: 默认 offer 初始化
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct StaticConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub auth: AuthConfig,
    #[serde(default)]
    pub cors: CorsConfig,
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub seed: SeedConfig,
}

impl StaticConfig {
    /// 从 TOML 文件和环境变量加载配置
    ///
    /// 优先级：旧版 ENV（ADMIN_PASSWORD / DATABASE_URL）> CB__ ENV > TOML > 默认值
    /// ENV 前缀：CB，分隔符：__
    /// 示例：CB__SERVER__PORT=9999
    pub fn load(path: &str) -> Result<Self> {
        use config::{Config, Environment, File};

        let builder = Config::builder()
            // 1. 从 TOML 文件加载（可选）
            .add_source(File::with_name(path).required(false))
            // 2. 从环境变量覆盖，前缀 CB，分隔符 __
            .add_source(
                Environment::with_prefix("CB")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("cors.allowed_origins")
                    .with_list_parse_key("api.trusted_proxies")
                    .try_parsing(true),
            );

        let settings = builder
            .build()
            .map_err(|e| CallboardError::config(format!("Failed to build config: {}", e)))?;

        let mut config: StaticConfig = settings
            .try_deserialize()
            .map_err(|e| CallboardError::config(format!("Failed to deserialize config: {}", e)))?;

        config.apply_legacy_env(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    /// 兼容旧部署的环境变量
    pub fn apply_legacy_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(password) = lookup("ADMIN_PASSWORD").filter(|p| !p.is_empty()) {
            self.auth.admin_password = password;
        }
        if let Some(url) = lookup("DATABASE_URL").filter(|u| !u.is_empty()) {
            self.database.database_url = url;
        }
    }

    /// Reject values that would make the server unusable
    pub fn validate(&self) -> Result<()> {
        if self.auth.admin_password.is_empty() {
            return Err(CallboardError::config("auth.admin_password must not be empty"));
        }
        if self.auth.cookie_name.is_empty() {
            return Err(CallboardError::config("auth.cookie_name must not be empty"));
        }
        if self.database.database_url.is_empty() {
            return Err(CallboardError::config(
                "database.database_url must not be empty",
            ));
        }
        Ok(())
    }

    pub fn uses_default_password(&self) -> bool {
        self.auth.admin_password == DEFAULT_ADMIN_PASSWORD
    }

    /// 生成示例 TOML 配置文件
    pub fn generate_sample_config() -> std::result::Result<String, toml::ser::Error> {
        toml::to_string_pretty(&Self::default())
    }

    /// 将示例配置写入文件，必要时创建父目录
    pub fn write_sample_config<P: AsRef<std::path::Path>>(
        path: P,
    ) -> std::result::Result<(), Box<dyn std::error::Error>> {
        let content = Self::generate_sample_config()?;

        if let Some(parent) = path.as_ref().parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, content)?;
        Ok(())
    }
}

/// 服务器配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_server_host")]
    pub host: String,
    #[serde(default = "default_server_port")]
    pub port: u16,
    #[serde(default = "default_cpu_count")]
    pub cpu_count: usize,
}

/// 数据库连接配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    #[serde(default = "default_database_url")]
    pub database_url: String,
    #[serde(default = "default_database_pool_size")]
    pub pool_size: u32,
    /// Connect/acquire timeout in seconds
    #[serde(default = "default_database_timeout")]
    pub timeout: u64,
}

/// 管理员认证配置
#[derive(Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    #[serde(default = "default_admin_password")]
    pub admin_password: String,
    #[serde(default = "default_cookie_name")]
    pub cookie_name: String,
    /// Expected session cookie value; a random token is generated at startup when unset
    #[serde(default)]
    pub session_marker: Option<String>,
    #[serde(default)]
    pub cookie_secure: bool,
}

// 不在日志里输出密码
impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfig")
            .field("admin_password", &"***")
            .field("cookie_name", &self.cookie_name)
            .field(
                "session_marker",
                &self.session_marker.as_ref().map(|_| "***"),
            )
            .field("cookie_secure", &self.cookie_secure)
            .finish()
    }
}

/// CORS 配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorsConfig {
    #[serde(default = "default_cors_enabled")]
    pub enabled: bool,
    #[serde(default = "default_cors_allowed_origins")]
    pub allowed_origins: Vec<String>,
    #[serde(default = "default_cors_allow_credentials")]
    pub allow_credentials: bool,
    #[serde(default = "default_cors_max_age")]
    pub max_age: usize,
}

/// API 配置
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ApiConfig {
    /// 可信代理（IP 或 CIDR），来自这些地址的请求使用 X-Forwarded-For
    #[serde(default)]
    pub trusted_proxies: Vec<String>,
}

/// 日志配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
    #[serde(default)]
    pub file: Option<String>,
    #[serde(default = "default_max_backups")]
    pub max_backups: u32,
    #[serde(default = "default_enable_rotation")]
    pub enable_rotation: bool,
}

/// 默认数据初始化配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedConfig {
    #[serde(default = "default_seed_enabled")]
    pub enabled: bool,
}

// ============================================================
// Default value functions
// ============================================================

fn default_server_host() -> String {
    "0.0.0.0".to_string()
}

fn default_server_port() -> u16 {
    8001
}

fn default_cpu_count() -> usize {
    num_cpus::get()
}

fn default_database_url() -> String {
    "callboard.db".to_string()
}

fn default_database_pool_size() -> u32 {
    10
}

fn default_database_timeout() -> u64 {
    8
}

fn default_admin_password() -> String {
    DEFAULT_ADMIN_PASSWORD.to_string()
}

fn default_cookie_name() -> String {
    "admin".to_string()
}

fn default_cors_enabled() -> bool {
    true
}

fn default_cors_allowed_origins() -> Vec<String> {
    vec!["*".to_string()]
}

fn default_cors_allow_credentials() -> bool {
    true
}

fn default_cors_max_age() -> usize {
    3600
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "text".to_string()
}

fn default_max_backups() -> u32 {
    5
}

fn default_enable_rotation() -> bool {
    true
}

fn default_seed_enabled() -> bool {
    true
}

// ============================================================
// Default implementations
// ============================================================

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_server_host(),
            port: default_server_port(),
            cpu_count: default_cpu_count(),
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            database_url: default_database_url(),
            pool_size: default_database_pool_size(),
            timeout: default_database_timeout(),
        }
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            admin_password: default_admin_password(),
            cookie_name: default_cookie_name(),
            session_marker: None,
            cookie_secure: false,
        }
    }
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            enabled: default_cors_enabled(),
            allowed_origins: default_cors_allowed_origins(),
            allow_credentials: default_cors_allow_credentials(),
            max_age: default_cors_max_age(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            file: None,
            max_backups: default_max_backups(),
            enable_rotation: default_enable_rotation(),
        }
    }
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            enabled: default_seed_enabled(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let config = StaticConfig::default();
        assert_eq!(config.server.port, 8001);
        assert_eq!(config.auth.admin_password, "admin123");
        assert_eq!(config.auth.cookie_name, "admin");
        assert!(config.auth.session_marker.is_none());
        assert!(config.seed.enabled);
        assert_eq!(config.cors.allowed_origins, vec!["*".to_string()]);
    }

    #[test]
    fn test_legacy_env_overrides() {
        let mut config = StaticConfig::default();
        config.apply_legacy_env(|key| match key {
            "ADMIN_PASSWORD" => Some("hunter2".to_string()),
            "DATABASE_URL" => Some("sqlite://legacy.db".to_string()),
            _ => None,
        });
        assert_eq!(config.auth.admin_password, "hunter2");
        assert_eq!(config.database.database_url, "sqlite://legacy.db");
    }

    #[test]
    fn test_legacy_env_ignores_empty_values() {
        let mut config = StaticConfig::default();
        config.apply_legacy_env(|_| Some(String::new()));
        assert_eq!(config.auth.admin_password, DEFAULT_ADMIN_PASSWORD);
        assert_eq!(config.database.database_url, "callboard.db");
    }

    #[test]
    fn test_validate_rejects_empty_password() {
        let mut config = StaticConfig::default();
        config.auth.admin_password.clear();
        assert!(matches!(config.validate(), Err(CallboardError::Config(_))));
    }

    #[test]
    fn test_auth_debug_hides_secrets() {
        let mut auth = AuthConfig::default();
        auth.session_marker = Some("s3cret-marker".to_string());
        let debug = format!("{:?}", auth);
        assert!(!debug.contains("admin123"));
        assert!(!debug.contains("s3cret-marker"));
    }

    #[test]
    fn test_sample_config_roundtrips_through_toml() {
        let sample = StaticConfig::generate_sample_config().expect("sample config serializes");
        let parsed: StaticConfig = toml::from_str(&sample).expect("sample config parses");
        assert_eq!(parsed.server.port, 8001);
        assert_eq!(parsed.auth.cookie_name, "admin");
    }

    #[test]
    fn test_write_sample_config_creates_parent_dir() {
        let dir = tempfile::TempDir::new().expect("temp dir");
        let path = dir.path().join("nested").join("config.toml");

        StaticConfig::write_sample_config(&path).expect("sample config written");

        let content = std::fs::read_to_string(&path).expect("sample config readable");
        let parsed: StaticConfig = toml::from_str(&content).expect("sample config parses");
        assert_eq!(parsed.database.database_url, StaticConfig::default().database.database_url);
    }
}
