use std::net::{Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use crate::app_config::{AppConfig, DirectApiCredentials, Environment, WebhookUrls};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the process environment so it can be tested with a plain
/// `HashMap` lookup.
pub(crate) fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    // Blank values are treated the same as unset ones.
    let optional = |var: &str| -> Option<String> {
        lookup(var)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    };

    let or_default =
        |var: &str, default: &str| -> String { optional(var).unwrap_or_else(|| default.to_string()) };

    let invalid = |var: &str, reason: String| ConfigError::InvalidEnvVar {
        var: var.to_string(),
        reason,
    };

    let env = parse_environment(&or_default("JPOST_ENV", "development"))?;

    let bind_addr = match (optional("JPOST_BIND_ADDR"), optional("PORT")) {
        (Some(raw), _) => raw
            .parse::<SocketAddr>()
            .map_err(|e| invalid("JPOST_BIND_ADDR", e.to_string()))?,
        (None, Some(port)) => {
            let port = port
                .parse::<u16>()
                .map_err(|e| invalid("PORT", e.to_string()))?;
            SocketAddr::from((Ipv4Addr::UNSPECIFIED, port))
        }
        (None, None) => SocketAddr::from((Ipv4Addr::UNSPECIFIED, 3000)),
    };

    let log_level = or_default("JPOST_LOG_LEVEL", "info");
    let routes_path = optional("JPOST_ROUTES_PATH").map(PathBuf::from);

    let http_timeout_secs = or_default("JPOST_HTTP_TIMEOUT_SECS", "30")
        .parse::<u64>()
        .map_err(|e| invalid("JPOST_HTTP_TIMEOUT_SECS", e.to_string()))?;
    if http_timeout_secs == 0 {
        return Err(invalid(
            "JPOST_HTTP_TIMEOUT_SECS",
            "must be greater than zero".to_string(),
        ));
    }

    let webhooks = WebhookUrls {
        tiktok: optional("PIPEDREAM_TIKTOK_WEBHOOK"),
        threads: optional("PIPEDREAM_THREADS_WEBHOOK"),
        linkedin: optional("PIPEDREAM_LINKEDIN_WEBHOOK"),
        twitter: optional("PIPEDREAM_TWITTER_WEBHOOK"),
    };
    let webhook_api_key = optional("PIPEDREAM_API_KEY");

    let direct_api = DirectApiCredentials {
        twitter_api_url: optional("TWITTER_API_URL"),
        twitter_bearer_token: optional("TWITTER_BEARER_TOKEN"),
        linkedin_api_url: optional("LINKEDIN_API_URL"),
        linkedin_access_token: optional("LINKEDIN_ACCESS_TOKEN"),
        linkedin_person_urn: optional("LINKEDIN_PERSON_URN"),
    };

    Ok(AppConfig {
        env,
        bind_addr,
        log_level,
        routes_path,
        http_timeout_secs,
        webhooks,
        webhook_api_key,
        direct_api,
    })
}

/// Parse a string into an `Environment` variant.
///
/// # Errors
///
/// Returns `ConfigError::InvalidEnvVar` for unrecognized values.
fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "JPOST_ENV".to_string(),
            reason: format!("expected development, test, or production; got '{other}'"),
        }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
