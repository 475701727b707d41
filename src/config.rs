use anyhow::{anyhow, Result};
use std::env;
use std::time::Duration;

/// Aladhan API root used when `PRAYER_API_BASE_URL` is unset.
pub const DEFAULT_PRAYER_API_BASE_URL: &str = "http://api.aladhan.com/v1";
/// Egyptian General Authority of Survey.
pub const DEFAULT_CALCULATION_METHOD: u8 = 5;
/// Upper bound on a single prayer-times request.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

/// Process configuration, read once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Telegram bot access token. Mandatory.
    pub telegram_bot_token: String,
    /// Port for the health endpoints.
    pub http_port: u16,
    /// Prayer-times API root, without a trailing slash.
    pub prayer_api_base_url: String,
    /// Aladhan calculation method selector.
    pub calculation_method: u8,
    /// Timeout applied to every prayer-times request.
    pub request_timeout: Duration,
}

impl Config {
    /// Reads the configuration from the environment.
    ///
    /// Fails when the bot token is missing or blank, or when a numeric
    /// variable does not parse. There is no built-in token fallback.
    pub fn from_env() -> Result<Self> {
        let token = env::var("TELEGRAM_BOT_TOKEN")
            .map_err(|_| anyhow!("TELEGRAM_BOT_TOKEN must be set"))?;

        if token.trim().is_empty() {
            return Err(anyhow!("TELEGRAM_BOT_TOKEN must be set"));
        }

        let port_str = env::var("HTTP_PORT").unwrap_or_else(|_| "3000".to_string());
        let http_port = port_str
            .trim()
            .parse()
            .map_err(|_| anyhow!("Invalid HTTP_PORT"))?;

        let base_url = env::var("PRAYER_API_BASE_URL")
            .ok()
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| DEFAULT_PRAYER_API_BASE_URL.to_string());

        let calculation_method = match env::var("PRAYER_CALCULATION_METHOD") {
            Ok(raw) => raw
                .trim()
                .parse()
                .map_err(|_| anyhow!("Invalid PRAYER_CALCULATION_METHOD"))?,
            Err(_) => DEFAULT_CALCULATION_METHOD,
        };

        let timeout_secs: u64 = match env::var("PRAYER_API_TIMEOUT_SECS") {
            Ok(raw) => raw
                .trim()
                .parse()
                .map_err(|_| anyhow!("Invalid PRAYER_API_TIMEOUT_SECS"))?,
            Err(_) => DEFAULT_REQUEST_TIMEOUT_SECS,
        };
        if timeout_secs == 0 {
            return Err(anyhow!("PRAYER_API_TIMEOUT_SECS must be greater than zero"));
        }

        Ok(Config {
            telegram_bot_token: token,
            http_port,
            prayer_api_base_url: base_url,
            calculation_method,
            request_timeout: Duration::from_secs(timeout_secs),
        })
    }
}
