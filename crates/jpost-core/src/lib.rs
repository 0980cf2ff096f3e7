//! Core domain for jpost: platforms, the archetype route table, the
//! per-platform content formatter, and application configuration.

pub mod app_config;
pub mod config;
pub mod format;
pub mod platform;
pub mod post_result;
pub mod routes;

use thiserror::Error;

pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env};
pub use format::{format_content, FormatOptions, FormattedContent};
pub use platform::{ContentFormat, Platform};
pub use post_result::PostResult;
pub use routes::{load_routes, route_table_for, Route, RouteSpec, RouteTable};

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Unsupported platform: {0}")]
    UnsupportedPlatform(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read routes file {path}: {source}")]
    RoutesFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse routes file: {0}")]
    RoutesFileParse(#[from] serde_yaml::Error),

    #[error("route validation failed: {0}")]
    Validation(String),
}
