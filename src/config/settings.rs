//! Application settings and configuration structures.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

use crate::domain::entities::intents;

/// Root configuration structure containing all application settings.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Platform API access
    pub api: ApiSettings,

    /// Logging configuration
    pub telemetry: TelemetrySettings,

    /// Current environment (development, staging, production)
    pub environment: String,
}

/// Platform API configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiSettings {
    /// Base URL without version, e.g. "https://discord.com/api"
    pub base_url: String,

    /// API version appended to the base URL
    pub version: u8,

    /// Bot token; empty when running offline
    #[serde(default)]
    pub token: String,

    /// Application the commands are registered for
    pub application_id: i64,

    /// Account the session acts as. Defaults to the application id, which
    /// is what bot accounts use.
    #[serde(default)]
    pub user_id: Option<i64>,

    /// Gateway intents bitfield
    pub intents: u64,
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct TelemetrySettings {
    /// `EnvFilter` directive used when `RUST_LOG` is unset
    pub log_filter: String,
}

impl Settings {
    /// Load settings from environment variables and configuration files.
    ///
    /// The loading order is:
    /// 1. config/default.toml (base configuration)
    /// 2. config/{RUN_ENV}.toml (environment-specific overrides)
    /// 3. Environment variables (highest priority)
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if configuration cannot be loaded or parsed,
    /// or if the API base URL is not http(s).
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let environment = std::env::var("RUN_ENV").unwrap_or_else(|_| "development".into());

        Config::builder()
            .set_default("environment", environment.clone())?
            .set_default("api.base_url", "https://discord.com/api")?
            .set_default("api.version", 10)?
            .set_default("api.token", "")?
            .set_default("api.application_id", 0)?
            .set_default("api.intents", intents::DEFAULT)?
            .set_default("telemetry.log_filter", "info,chat_client=debug")?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // APP__API__VERSION=9 -> api.version = 9
            .add_source(
                Environment::default()
                    .prefix("APP")
                    .separator("__")
                    .try_parsing(true),
            )
            .set_override_option("api.token", std::env::var("CHAT_TOKEN").ok())?
            .set_override_option(
                "api.application_id",
                std::env::var("CHAT_APPLICATION_ID").ok(),
            )?
            .build()?
            .try_deserialize()
            .and_then(|settings: Self| {
                settings.api.check()?;
                Ok(settings)
            })
    }
}

impl ApiSettings {
    fn check(&self) -> Result<(), ConfigError> {
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ConfigError::Message(format!(
                "api.base_url must be an http(s) URL, got {:?}",
                self.base_url
            )));
        }
        Ok(())
    }

    /// Versioned base every route is appended to.
    pub fn base_url(&self) -> String {
        format!("{}/v{}", self.base_url.trim_end_matches('/'), self.version)
    }

    pub fn has_token(&self) -> bool {
        !self.token.trim().is_empty()
    }

    /// Account id of the session, falling back to the application id.
    pub fn session_user_id(&self) -> i64 {
        self.user_id.unwrap_or(self.application_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn api(base_url: &str) -> ApiSettings {
        ApiSettings {
            base_url: base_url.to_string(),
            version: 10,
            token: String::new(),
            application_id: 42,
            user_id: None,
            intents: intents::DEFAULT,
        }
    }

    #[test]
    fn test_base_url_appends_version() {
        assert_eq!(api("https://discord.com/api/").base_url(), "https://discord.com/api/v10");
    }

    #[test]
    fn test_rejects_non_http_base_url() {
        assert!(api("ftp://example.com").check().is_err());
        assert!(api("http://localhost:8080/api").check().is_ok());
    }

    #[test]
    fn test_user_id_defaults_to_application() {
        let mut settings = api("https://discord.com/api");
        assert_eq!(settings.session_user_id(), 42);
        settings.user_id = Some(7);
        assert_eq!(settings.session_user_id(), 7);
        assert!(!settings.has_token());
    }
}
