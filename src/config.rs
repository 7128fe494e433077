use crate::error::ConfigError;
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

/// 默认配置文件名
pub const DEFAULT_CONFIG_FILE: &str = "matricula.toml";

/// 程序配置文件
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    // --- Supabase 配置 ---
    pub supabase_url: String,
    pub supabase_anon_key: String,
    // --- Webhook 配置 ---
    pub webhook_url: String,
    /// HTTP 请求超时（秒）
    pub http_timeout_secs: u64,
    /// 附件大小提示上限（MB），只用于提示，不强制
    pub max_upload_mb: u64,
    /// 是否显示详细日志
    pub verbose_logging: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            supabase_url: "http://localhost:54321".to_string(),
            supabase_anon_key: String::new(),
            webhook_url: "https://n8n.colegiozampieri.com/webhook/zapsign".to_string(),
            http_timeout_secs: 30,
            max_upload_mb: 10,
            verbose_logging: false,
        }
    }
}

impl Config {
    /// 只从环境变量加载，未设置的项使用默认值
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::default().with_env_overrides()
    }

    /// 先读取 TOML 配置文件（不存在则使用默认值），再用环境变量覆盖
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let base = if path.exists() {
            let content = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadFailed {
                path: path.display().to_string(),
                source,
            })?;
            Self::from_toml_str(&content, &path.display().to_string())?
        } else {
            Self::default()
        };
        base.with_env_overrides()
    }

    /// 解析 TOML 文本
    pub fn from_toml_str(content: &str, origin: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|source| ConfigError::TomlParseFailed {
            path: origin.to_string(),
            source,
        })
    }

    /// HTTP 请求超时
    pub fn http_timeout(&self) -> Duration {
        Duration::from_secs(self.http_timeout_secs)
    }

    /// 附件提示上限（字节）
    pub fn max_upload_bytes(&self) -> u64 {
        self.max_upload_mb.saturating_mul(1024 * 1024)
    }

    fn with_env_overrides(self) -> Result<Self, ConfigError> {
        Ok(Self {
            supabase_url: std::env::var("SUPABASE_URL").unwrap_or(self.supabase_url),
            supabase_anon_key: std::env::var("SUPABASE_ANON_KEY").unwrap_or(self.supabase_anon_key),
            webhook_url: std::env::var("WEBHOOK_URL").unwrap_or(self.webhook_url),
            http_timeout_secs: parse_env("HTTP_TIMEOUT_SECS", "u64")?.unwrap_or(self.http_timeout_secs),
            max_upload_mb: parse_env("MAX_UPLOAD_MB", "u64")?.unwrap_or(self.max_upload_mb),
            verbose_logging: parse_env("VERBOSE_LOGGING", "bool")?.unwrap_or(self.verbose_logging),
        })
    }
}

/// 读取并解析环境变量，未设置时返回 `None`
fn parse_env<T: std::str::FromStr>(
    var_name: &str,
    expected_type: &'static str,
) -> Result<Option<T>, ConfigError> {
    match std::env::var(var_name) {
        Ok(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::EnvVarParseFailed {
                var_name: var_name.to_string(),
                value,
                expected_type,
            }),
        Err(_) => Ok(None),
    }
}
