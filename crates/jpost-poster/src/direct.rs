//! Direct-API posting path for Twitter and LinkedIn.
//!
//! Only used when a caller asks for it explicitly. Missing credentials are a
//! hard error here, while upstream failures are still reduced to a failed
//! [`PostResult`].

use jpost_core::app_config::DirectApiCredentials;
use jpost_core::{AppConfig, FormattedContent, Platform, PostResult, Route};
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;

use crate::client::{build_http_client, id_string, send_json};
use crate::error::PosterError;

const RESTLI_PROTOCOL_HEADER: &str = "X-Restli-Protocol-Version";
const RESTLI_PROTOCOL_VERSION: &str = "2.0.0";

pub struct DirectApiClient {
    client: Client,
    credentials: DirectApiCredentials,
}

#[derive(Debug, Deserialize)]
struct TweetResponse {
    data: TweetData,
}

#[derive(Debug, Deserialize)]
struct TweetData {
    id: serde_json::Value,
}

#[derive(Debug, Deserialize)]
struct UgcPostResponse {
    id: serde_json::Value,
}

impl DirectApiClient {
    /// # Errors
    ///
    /// Returns [`PosterError::Http`] if the HTTP client cannot be constructed.
    pub fn new(credentials: DirectApiCredentials, timeout_secs: u64) -> Result<Self, PosterError> {
        Ok(Self {
            client: build_http_client(timeout_secs)?,
            credentials,
        })
    }

    /// # Errors
    ///
    /// Returns [`PosterError::Http`] if the HTTP client cannot be constructed.
    pub fn from_app_config(config: &AppConfig) -> Result<Self, PosterError> {
        Self::new(config.direct_api.clone(), config.http_timeout_secs)
    }

    /// Posts straight to the platform's native API, bypassing webhooks.
    ///
    /// # Errors
    ///
    /// - [`PosterError::MissingCredentials`] when the platform's API URL or
    ///   token is not configured.
    /// - [`PosterError::DirectUnsupported`] for platforms without a direct
    ///   integration (TikTok, Threads).
    ///
    /// Network and HTTP failures are returned as `Ok` with `success: false`.
    pub async fn post_directly(
        &self,
        content: &FormattedContent,
        route: &Route,
    ) -> Result<PostResult, PosterError> {
        match route.platform {
            Platform::Twitter => self.post_tweet(content).await,
            Platform::LinkedIn => self.post_linkedin_share(content).await,
            platform @ (Platform::TikTok | Platform::Threads) => {
                Err(PosterError::DirectUnsupported(platform))
            }
        }
    }

    async fn post_tweet(&self, content: &FormattedContent) -> Result<PostResult, PosterError> {
        let creds = &self.credentials;
        let (Some(api_url), Some(token)) = (
            creds.twitter_api_url.as_deref(),
            creds.twitter_bearer_token.as_deref(),
        ) else {
            return Err(PosterError::MissingCredentials {
                platform: Platform::Twitter,
            });
        };

        let url = format!("{}/2/tweets", api_url.trim_end_matches('/'));
        let request = self
            .client
            .post(&url)
            .bearer_auth(token)
            .json(&json!({ "text": content.text }));

        let result = match send_json::<TweetResponse>(request).await {
            Ok(tweet) => match id_string(&tweet.data.id) {
                Some(id) => {
                    let status_url = format!("https://twitter.com/user/status/{id}");
                    PostResult::posted(Platform::Twitter, Some(id), Some(status_url))
                }
                None => PostResult::failed(Platform::Twitter, "Twitter API returned no tweet id"),
            },
            Err(e) => {
                tracing::error!(error = %e, "error posting to Twitter API");
                PostResult::failed(Platform::Twitter, e.to_string())
            }
        };
        Ok(result)
    }

    async fn post_linkedin_share(
        &self,
        content: &FormattedContent,
    ) -> Result<PostResult, PosterError> {
        let creds = &self.credentials;
        let (Some(api_url), Some(token), Some(person_urn)) = (
            creds.linkedin_api_url.as_deref(),
            creds.linkedin_access_token.as_deref(),
            creds.linkedin_person_urn.as_deref(),
        ) else {
            return Err(PosterError::MissingCredentials {
                platform: Platform::LinkedIn,
            });
        };

        let url = format!("{}/ugcPosts", api_url.trim_end_matches('/'));
        let body = json!({
            "author": format!("urn:li:person:{person_urn}"),
            "lifecycleState": "PUBLISHED",
            "specificContent": {
                "com.linkedin.ugc.ShareContent": {
                    "shareCommentary": { "text": content.text },
                    "shareMediaCategory": "NONE"
                }
            },
            "visibility": {
                "com.linkedin.ugc.MemberNetworkVisibility": "PUBLIC"
            }
        });
        let request = self
            .client
            .post(&url)
            .bearer_auth(token)
            .header(RESTLI_PROTOCOL_HEADER, RESTLI_PROTOCOL_VERSION)
            .json(&body);

        let result = match send_json::<UgcPostResponse>(request).await {
            // LinkedIn has no public permalink for a share; the URN stands in.
            Ok(share) => match id_string(&share.id) {
                Some(id) => PostResult::posted(Platform::LinkedIn, Some(id.clone()), Some(id)),
                None => PostResult::failed(Platform::LinkedIn, "LinkedIn API returned no share id"),
            },
            Err(e) => {
                tracing::error!(error = %e, "error posting to LinkedIn API");
                PostResult::failed(Platform::LinkedIn, e.to_string())
            }
        };
        Ok(result)
    }
}
