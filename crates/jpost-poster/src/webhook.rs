//! Webhook posting path.

use std::collections::BTreeMap;

use jpost_core::app_config::WebhookUrls;
use jpost_core::{AppConfig, FormattedContent, Platform, PostResult, Route};
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::client::{build_http_client, id_string};
use crate::error::PosterError;

/// Error text returned when a platform has no webhook configured.
pub const WEBHOOK_NOT_CONFIGURED: &str = "Webhook URL not configured";

/// Forwards formatted content to the webhook configured for each platform.
pub struct PlatformPoster {
    client: Client,
    webhooks: WebhookUrls,
    api_key: Option<String>,
}

#[derive(Debug, Serialize)]
struct WebhookPayload<'a> {
    content: &'a str,
    platform: Platform,
    metadata: WebhookMetadata<'a>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct WebhookMetadata<'a> {
    hashtags: &'a [String],
    #[serde(skip_serializing_if = "Option::is_none")]
    thread_count: Option<usize>,
    suggestions: &'a BTreeMap<String, Vec<String>>,
    route: &'a Route,
}

#[derive(Debug, Default, Deserialize)]
struct WebhookAck {
    #[serde(default, rename = "postId")]
    post_id: Option<serde_json::Value>,
    #[serde(default)]
    url: Option<serde_json::Value>,
}

impl PlatformPoster {
    /// Creates a poster with an explicit webhook table.
    ///
    /// # Errors
    ///
    /// Returns [`PosterError::Http`] if the HTTP client cannot be constructed.
    pub fn new(
        webhooks: WebhookUrls,
        api_key: Option<String>,
        timeout_secs: u64,
    ) -> Result<Self, PosterError> {
        Ok(Self {
            client: build_http_client(timeout_secs)?,
            webhooks,
            api_key,
        })
    }

    /// Creates a poster from the application's webhook settings.
    ///
    /// # Errors
    ///
    /// Returns [`PosterError::Http`] if the HTTP client cannot be constructed.
    pub fn from_app_config(config: &AppConfig) -> Result<Self, PosterError> {
        Self::new(
            config.webhooks.clone(),
            config.webhook_api_key.clone(),
            config.http_timeout_secs,
        )
    }

    #[must_use]
    pub fn webhook_url(&self, platform: Platform) -> Option<&str> {
        match platform {
            Platform::TikTok => self.webhooks.tiktok.as_deref(),
            Platform::Threads => self.webhooks.threads.as_deref(),
            Platform::LinkedIn => self.webhooks.linkedin.as_deref(),
            Platform::Twitter => self.webhooks.twitter.as_deref(),
        }
    }

    /// Posts `content` to the webhook for `route.platform`.
    ///
    /// Never fails: a missing webhook, a network error, or a non-2xx status
    /// is returned as a `PostResult` with `success: false`.
    pub async fn post(&self, content: &FormattedContent, route: &Route) -> PostResult {
        let platform = route.platform;

        let Some(url) = self.webhook_url(platform) else {
            tracing::warn!(
                platform = %platform,
                "{} webhook URL not configured",
                platform.display_name()
            );
            return PostResult::failed(platform, WEBHOOK_NOT_CONFIGURED);
        };

        let thread_count = match platform {
            Platform::Threads => content.thread_count,
            Platform::TikTok | Platform::LinkedIn | Platform::Twitter => None,
        };
        let payload = WebhookPayload {
            content: &content.text,
            platform,
            metadata: WebhookMetadata {
                hashtags: &content.hashtags,
                thread_count,
                suggestions: &content.suggestions,
                route,
            },
        };

        match self.send(url, &payload).await {
            Ok(ack) => {
                let post_id = ack.post_id.as_ref().and_then(id_string);
                let post_url = ack.url.as_ref().and_then(id_string);
                tracing::info!(
                    platform = %platform,
                    archetype = %route.archetype,
                    post_id = post_id.as_deref().unwrap_or("-"),
                    "posted to webhook"
                );
                PostResult::posted(platform, post_id, post_url)
            }
            Err(e) => {
                tracing::error!(
                    platform = %platform,
                    error = %e,
                    "error posting to {}",
                    platform.display_name()
                );
                PostResult::failed(platform, e.to_string())
            }
        }
    }

    async fn send(
        &self,
        url: &str,
        payload: &WebhookPayload<'_>,
    ) -> Result<WebhookAck, reqwest::Error> {
        let mut request = self.client.post(url).json(payload);
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        let response = request.send().await?.error_for_status()?;
        let body = response.text().await?;

        // A delivered post with an unreadable acknowledgement still counts.
        Ok(serde_json::from_str(&body).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "webhook acknowledgement is not JSON; no post id");
            WebhookAck::default()
        }))
    }
}
