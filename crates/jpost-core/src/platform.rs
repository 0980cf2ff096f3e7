use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::CoreError;

/// Social platform a journal entry can be routed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    TikTok,
    Threads,
    LinkedIn,
    Twitter,
}

impl Platform {
    pub const ALL: [Platform; 4] = [
        Platform::TikTok,
        Platform::Threads,
        Platform::LinkedIn,
        Platform::Twitter,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Platform::TikTok => "tiktok",
            Platform::Threads => "threads",
            Platform::LinkedIn => "linkedin",
            Platform::Twitter => "twitter",
        }
    }

    /// Human-readable name used in log lines and error messages.
    #[must_use]
    pub fn display_name(self) -> &'static str {
        match self {
            Platform::TikTok => "TikTok",
            Platform::Threads => "Threads",
            Platform::LinkedIn => "LinkedIn",
            Platform::Twitter => "Twitter",
        }
    }

    /// Length budget applied when the caller does not supply one.
    #[must_use]
    pub fn default_max_length(self) -> usize {
        match self {
            Platform::TikTok | Platform::Twitter => 280,
            Platform::Threads => 500,
            Platform::LinkedIn => 1300,
        }
    }

    /// The format a platform's formatter produces.
    #[must_use]
    pub fn content_format(self) -> ContentFormat {
        match self {
            Platform::TikTok => ContentFormat::ShortForm,
            Platform::Threads => ContentFormat::LongForm,
            Platform::LinkedIn => ContentFormat::Professional,
            Platform::Twitter => ContentFormat::MicroBlog,
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "tiktok" => Ok(Platform::TikTok),
            "threads" => Ok(Platform::Threads),
            "linkedin" => Ok(Platform::LinkedIn),
            "twitter" => Ok(Platform::Twitter),
            other => Err(CoreError::UnsupportedPlatform(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ContentFormat {
    ShortForm,
    LongForm,
    Professional,
    MicroBlog,
}

impl ContentFormat {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ContentFormat::ShortForm => "short-form",
            ContentFormat::LongForm => "long-form",
            ContentFormat::Professional => "professional",
            ContentFormat::MicroBlog => "micro-blog",
        }
    }
}

impl std::fmt::Display for ContentFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
