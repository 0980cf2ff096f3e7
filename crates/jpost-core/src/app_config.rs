use std::net::SocketAddr;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

/// Webhook endpoints, one per platform.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct WebhookUrls {
    pub tiktok: Option<String>,
    pub threads: Option<String>,
    pub linkedin: Option<String>,
    pub twitter: Option<String>,
}

/// Credentials for the direct-API posting path.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct DirectApiCredentials {
    pub twitter_api_url: Option<String>,
    pub twitter_bearer_token: Option<String>,
    pub linkedin_api_url: Option<String>,
    pub linkedin_access_token: Option<String>,
    pub linkedin_person_urn: Option<String>,
}

#[derive(Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub bind_addr: SocketAddr,
    pub log_level: String,
    pub routes_path: Option<PathBuf>,
    pub http_timeout_secs: u64,
    pub webhooks: WebhookUrls,
    pub webhook_api_key: Option<String>,
    pub direct_api: DirectApiCredentials,
}

fn redact(value: Option<&String>) -> Option<&'static str> {
    value.map(|_| "[redacted]")
}

impl std::fmt::Debug for WebhookUrls {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Webhook URLs embed their own secret path segment.
        f.debug_struct("WebhookUrls")
            .field("tiktok", &redact(self.tiktok.as_ref()))
            .field("threads", &redact(self.threads.as_ref()))
            .field("linkedin", &redact(self.linkedin.as_ref()))
            .field("twitter", &redact(self.twitter.as_ref()))
            .finish()
    }
}

impl std::fmt::Debug for DirectApiCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DirectApiCredentials")
            .field("twitter_api_url", &self.twitter_api_url)
            .field(
                "twitter_bearer_token",
                &redact(self.twitter_bearer_token.as_ref()),
            )
            .field("linkedin_api_url", &self.linkedin_api_url)
            .field(
                "linkedin_access_token",
                &redact(self.linkedin_access_token.as_ref()),
            )
            .field("linkedin_person_urn", &self.linkedin_person_urn)
            .finish()
    }
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("env", &self.env)
            .field("bind_addr", &self.bind_addr)
            .field("log_level", &self.log_level)
            .field("routes_path", &self.routes_path)
            .field("http_timeout_secs", &self.http_timeout_secs)
            .field("webhooks", &self.webhooks)
            .field("webhook_api_key", &redact(self.webhook_api_key.as_ref()))
            .field("direct_api", &self.direct_api)
            .finish()
    }
}
