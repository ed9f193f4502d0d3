use anyhow::{Result, bail};
use std::env;

/// Default Telegram Bot API endpoint; overridable for local mocks.
pub const DEFAULT_API_BASE_URL: &str = "https://api.telegram.org";

/// Default timeout for the outbound sendMessage call.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Execution mode, selected once at startup by the `ENVIRONMENT` variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    /// One request per process invocation, driven by an external orchestrator.
    Direct,
    /// Local development HTTP server on a fixed port.
    LocalServer,
}

/// Immutable process-wide configuration, loaded once at startup and passed
/// by reference into the relay and front ends.
#[derive(Debug, Clone)]
pub struct Settings {
    pub bot_token: String,
    pub chat_id: String,
    pub api_base_url: String,
    pub mode: RunMode,
    pub request_timeout_secs: u64,
}

impl Settings {
    /// Loads settings from the process environment.
    ///
    /// # Environment Variables
    ///
    /// - `TELEGRAM_BOT_TOKEN`: Telegram bot token (required, non-empty)
    /// - `TELEGRAM_CHAT_ID`: target chat identifier (required, non-empty)
    /// - `ENVIRONMENT`: `dev` selects local server mode; anything else or
    ///   absent selects direct invocation mode
    /// - `TELEGRAM_API_BASE_URL`: base URL of the Telegram API (optional)
    /// - `REQUEST_TIMEOUT_SECS`: outbound HTTP timeout in seconds (optional)
    ///
    /// # Errors
    ///
    /// Returns an error if either required variable is missing or empty.
    /// This is an unrecoverable startup failure, not a per-request error.
    pub fn from_env() -> Result<Self> {
        let bot_token = require_var("TELEGRAM_BOT_TOKEN")?;
        let chat_id = require_var("TELEGRAM_CHAT_ID")?;

        let api_base_url = env::var("TELEGRAM_API_BASE_URL")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());

        let mode = match env::var("ENVIRONMENT").as_deref() {
            Ok("dev") => RunMode::LocalServer,
            _ => RunMode::Direct,
        };

        let request_timeout_secs = match env::var("REQUEST_TIMEOUT_SECS") {
            Ok(v) if !v.trim().is_empty() => v
                .trim()
                .parse()
                .map_err(|e| anyhow::anyhow!("invalid REQUEST_TIMEOUT_SECS: {}", e))?,
            _ => DEFAULT_REQUEST_TIMEOUT_SECS,
        };

        Ok(Self {
            bot_token,
            chat_id,
            api_base_url,
            mode,
            request_timeout_secs,
        })
    }
}

fn require_var(name: &str) -> Result<String> {
    match env::var(name) {
        Ok(v) if !v.trim().is_empty() => Ok(v),
        _ => bail!("Environment variable {} is not set or empty", name),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn set(name: &str, value: &str) {
        unsafe { env::set_var(name, value) }
    }

    fn unset(name: &str) {
        unsafe { env::remove_var(name) }
    }

    fn set_required() {
        set("TELEGRAM_BOT_TOKEN", "TEST_TOKEN");
        set("TELEGRAM_CHAT_ID", "42");
    }

    fn clear_all() {
        for name in [
            "TELEGRAM_BOT_TOKEN",
            "TELEGRAM_CHAT_ID",
            "TELEGRAM_API_BASE_URL",
            "ENVIRONMENT",
            "REQUEST_TIMEOUT_SECS",
        ] {
            unset(name);
        }
    }

    #[test]
    #[serial]
    fn missing_token_is_fatal() {
        clear_all();
        set("TELEGRAM_CHAT_ID", "42");
        let err = Settings::from_env().unwrap_err();
        assert!(err.to_string().contains("TELEGRAM_BOT_TOKEN"));
    }

    #[test]
    #[serial]
    fn empty_chat_id_is_fatal() {
        clear_all();
        set("TELEGRAM_BOT_TOKEN", "TEST_TOKEN");
        set("TELEGRAM_CHAT_ID", "   ");
        let err = Settings::from_env().unwrap_err();
        assert!(err.to_string().contains("TELEGRAM_CHAT_ID"));
    }

    #[test]
    #[serial]
    fn defaults_to_direct_mode_and_public_api() {
        clear_all();
        set_required();
        let settings = Settings::from_env().unwrap();
        assert_eq!(settings.mode, RunMode::Direct);
        assert_eq!(settings.api_base_url, DEFAULT_API_BASE_URL);
        assert_eq!(settings.request_timeout_secs, DEFAULT_REQUEST_TIMEOUT_SECS);
    }

    #[test]
    #[serial]
    fn dev_environment_selects_local_server() {
        clear_all();
        set_required();
        set("ENVIRONMENT", "dev");
        let settings = Settings::from_env().unwrap();
        assert_eq!(settings.mode, RunMode::LocalServer);
    }

    #[test]
    #[serial]
    fn other_environment_values_select_direct_mode() {
        clear_all();
        set_required();
        set("ENVIRONMENT", "production");
        let settings = Settings::from_env().unwrap();
        assert_eq!(settings.mode, RunMode::Direct);
    }

    #[test]
    #[serial]
    fn non_numeric_timeout_is_rejected() {
        clear_all();
        set_required();
        set("REQUEST_TIMEOUT_SECS", "soon");
        let err = Settings::from_env().unwrap_err();
        assert!(err.to_string().contains("invalid REQUEST_TIMEOUT_SECS"));
    }

    #[test]
    #[serial]
    fn base_url_and_timeout_overrides() {
        clear_all();
        set_required();
        set("TELEGRAM_API_BASE_URL", "http://127.0.0.1:9999");
        set("REQUEST_TIMEOUT_SECS", "5");
        let settings = Settings::from_env().unwrap();
        assert_eq!(settings.api_base_url, "http://127.0.0.1:9999");
        assert_eq!(settings.request_timeout_secs, 5);
    }
}
