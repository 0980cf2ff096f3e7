use serde::{Deserialize, Serialize};

use crate::platform::Platform;

/// Uniform outcome of one posting attempt.
///
/// Configuration gaps and upstream failures are reported here with
/// `success: false` rather than as errors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostResult {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub post_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    pub platform: Platform,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl PostResult {
    #[must_use]
    pub fn posted(platform: Platform, post_id: Option<String>, url: Option<String>) -> Self {
        Self {
            success: true,
            post_id,
            url,
            platform,
            error: None,
        }
    }

    #[must_use]
    pub fn failed(platform: Platform, error: impl Into<String>) -> Self {
        Self {
            success: false,
            post_id: None,
            url: None,
            platform,
            error: Some(error.into()),
        }
    }
}
