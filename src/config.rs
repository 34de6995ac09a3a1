use crate::error::{AppError, AppResult};
use serde::Deserialize;
use std::fmt;
use std::time::Duration;

#[derive(Deserialize, Clone)]
pub struct Config {
    /// xoxc 会话令牌，缺失时在请求阶段报告配置错误
    #[serde(default)]
    pub slack_xoxc: Option<String>,
    /// d cookie 的值
    #[serde(default)]
    pub slack_xoxd: Option<String>,
    #[serde(default = "default_team_id")]
    pub slack_team_id: String,
    #[serde(default = "default_api_base_url")]
    pub slack_api_base_url: String,
    #[serde(default = "default_request_timeout")]
    pub slack_request_timeout_secs: u64,

    #[serde(default = "default_host")]
    pub server_host: String,
    #[serde(default = "default_port")]
    pub server_port: u16,

    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default = "default_log_format")]
    pub log_format: String,
}

/// Credentials lifted from an authenticated browser session.
#[derive(Clone)]
pub struct SlackCredentials {
    pub token: String,
    pub cookie: String,
    pub team_id: String,
}

#[derive(Clone, Debug)]
pub struct SlackConfig {
    pub api_base_url: String,
    pub request_timeout: Duration,
}

#[derive(Clone, Debug)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

// Default value functions
fn default_team_id() -> String {
    "T0266FRGM".to_string()
}
fn default_api_base_url() -> String {
    "https://slack.com/api".to_string()
}
fn default_request_timeout() -> u64 {
    30
}
fn default_host() -> String {
    "0.0.0.0".to_string()
}
fn default_port() -> u16 {
    5000
}
fn default_log_level() -> String {
    "info".to_string()
}
fn default_log_format() -> String {
    "json".to_string()
}

impl Config {
    pub fn from_env() -> AppResult<Self> {
        dotenvy::dotenv().ok();

        let config = envy::from_env::<Config>()
            .map_err(|e| AppError::Config(format!("Failed to load config: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Builds a config from explicit key/value pairs, using the same
    /// variable names and defaults as the process environment.
    pub fn from_vars<I, K, V>(vars: I) -> AppResult<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let vars = vars
            .into_iter()
            .map(|(k, v)| (Into::<String>::into(k), Into::<String>::into(v)));

        let config = envy::from_iter::<_, Config>(vars)
            .map_err(|e| AppError::Config(format!("Failed to load config: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> AppResult<()> {
        if self.slack_request_timeout_secs == 0 {
            return Err(AppError::Config(
                "SLACK_REQUEST_TIMEOUT_SECS must be > 0".to_string(),
            ));
        }

        if self.slack_api_base_url.trim().is_empty() {
            return Err(AppError::Config(
                "SLACK_API_BASE_URL cannot be empty".to_string(),
            ));
        }

        if self.slack_team_id.trim().is_empty() {
            return Err(AppError::Config(
                "SLACK_TEAM_ID cannot be empty".to_string(),
            ));
        }

        Ok(())
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }

    /// Returns the session credentials, or a `Misconfigured` error when
    /// either token is unset or empty.
    pub fn slack_credentials(&self) -> AppResult<SlackCredentials> {
        let token = non_empty(self.slack_xoxc.as_deref());
        let cookie = non_empty(self.slack_xoxd.as_deref());

        match (token, cookie) {
            (Some(token), Some(cookie)) => Ok(SlackCredentials {
                token: token.to_string(),
                cookie: cookie.to_string(),
                team_id: self.slack_team_id.clone(),
            }),
            _ => Err(AppError::misconfigured(
                "Slack tokens not configured in environment",
            )),
        }
    }

    pub fn slack(&self) -> SlackConfig {
        SlackConfig {
            api_base_url: self.slack_api_base_url.trim_end_matches('/').to_string(),
            request_timeout: Duration::from_secs(self.slack_request_timeout_secs),
        }
    }

    pub fn logging(&self) -> LoggingConfig {
        LoggingConfig {
            level: self.log_level.clone(),
            format: self.log_format.clone(),
        }
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

fn redact(value: &Option<String>) -> &'static str {
    match value {
        Some(v) if !v.is_empty() => "[REDACTED]",
        _ => "<unset>",
    }
}

// 令牌不能出现在日志里
impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("slack_xoxc", &redact(&self.slack_xoxc))
            .field("slack_xoxd", &redact(&self.slack_xoxd))
            .field("slack_team_id", &self.slack_team_id)
            .field("slack_api_base_url", &self.slack_api_base_url)
            .field("slack_request_timeout_secs", &self.slack_request_timeout_secs)
            .field("server_host", &self.server_host)
            .field("server_port", &self.server_port)
            .field("log_level", &self.log_level)
            .field("log_format", &self.log_format)
            .finish()
    }
}

impl fmt::Debug for SlackCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SlackCredentials")
            .field("token", &"[REDACTED]")
            .field("cookie", &"[REDACTED]")
            .field("team_id", &self.team_id)
            .finish()
    }
}
