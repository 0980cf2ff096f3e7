//! Archetype → platform routing table.
//!
//! A [`RouteTable`] is an explicit store object owned by whoever builds it
//! (the server at startup, the CLI per invocation). Lookups are read-only;
//! `add`/`remove` take `&mut self` so mutation is only possible before the
//! table is shared.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::app_config::AppConfig;
use crate::platform::{ContentFormat, Platform};
use crate::ConfigError;

/// Resolved platform and formatting parameters for one archetype.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Route {
    pub archetype: String,
    pub platform: Platform,
    pub format: ContentFormat,
    pub max_length: usize,
    pub hashtags: Vec<String>,
    pub target_audience: String,
}

/// Route configuration as supplied by an operator, before validation.
///
/// Every field except the archetype key may be absent; [`RouteTable::validate`]
/// reports whether it is complete enough to become a [`Route`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteSpec {
    pub archetype: String,
    #[serde(default)]
    pub platform: Option<Platform>,
    #[serde(default)]
    pub format: Option<ContentFormat>,
    #[serde(default)]
    pub max_length: Option<usize>,
    #[serde(default)]
    pub hashtags: Option<Vec<String>>,
    #[serde(default)]
    pub target_audience: Option<String>,
}

impl RouteSpec {
    /// Converts a complete entry into a [`Route`].
    ///
    /// Returns `None` when [`RouteTable::validate`] would reject the spec.
    #[must_use]
    pub fn into_route(self) -> Option<Route> {
        if !RouteTable::validate(&self) {
            return None;
        }
        Some(Route {
            archetype: self.archetype,
            platform: self.platform?,
            format: self.format?,
            max_length: self.max_length?,
            hashtags: self.hashtags?,
            target_audience: self.target_audience?,
        })
    }
}

impl From<Route> for RouteSpec {
    fn from(route: Route) -> Self {
        Self {
            archetype: route.archetype,
            platform: Some(route.platform),
            format: Some(route.format),
            max_length: Some(route.max_length),
            hashtags: Some(route.hashtags),
            target_audience: Some(route.target_audience),
        }
    }
}

/// Ordered archetype → [`Route`] mapping.
///
/// Iteration order is insertion order; `add` on an existing key replaces
/// the entry in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteTable {
    routes: Vec<Route>,
}

#[derive(Debug, Deserialize)]
struct RoutesFile {
    routes: Vec<RouteSpec>,
}

impl RouteTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The default table shipped with the service.
    #[must_use]
    pub fn builtin() -> Self {
        let mut table = Self::new();
        for (archetype, platform, hashtags, audience) in BUILTIN_ROUTES {
            table.add(
                archetype,
                Route {
                    archetype: (*archetype).to_string(),
                    platform: *platform,
                    format: platform.content_format(),
                    max_length: platform.default_max_length(),
                    hashtags: hashtags.iter().map(|h| (*h).to_string()).collect(),
                    target_audience: (*audience).to_string(),
                },
            );
        }
        table
    }

    /// Exact-key lookup. An unknown archetype is a normal outcome.
    #[must_use]
    pub fn lookup(&self, archetype: &str) -> Option<&Route> {
        self.routes.iter().find(|r| r.archetype == archetype)
    }

    #[must_use]
    pub fn archetypes(&self) -> Vec<&str> {
        self.routes.iter().map(|r| r.archetype.as_str()).collect()
    }

    #[must_use]
    pub fn by_platform(&self, platform: Platform) -> Vec<&Route> {
        self.routes
            .iter()
            .filter(|r| r.platform == platform)
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Route> {
        self.routes.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Inserts or replaces the route for `archetype`.
    ///
    /// The stored route's `archetype` field is set to the key. No validation
    /// is performed; see [`RouteTable::validate`].
    pub fn add(&mut self, archetype: &str, mut route: Route) {
        archetype.clone_into(&mut route.archetype);
        match self.routes.iter_mut().find(|r| r.archetype == archetype) {
            Some(existing) => *existing = route,
            None => self.routes.push(route),
        }
    }

    /// Removes and returns the route for `archetype`, if present.
    pub fn remove(&mut self, archetype: &str) -> Option<Route> {
        let idx = self.routes.iter().position(|r| r.archetype == archetype)?;
        Some(self.routes.remove(idx))
    }

    /// Checks that every required route field is present and that
    /// `maxLength` is positive.
    #[must_use]
    pub fn validate(spec: &RouteSpec) -> bool {
        spec.platform.is_some()
            && spec.format.is_some()
            && spec.max_length.is_some_and(|n| n > 0)
            && spec.hashtags.is_some()
            && spec.target_audience.is_some()
    }
}

/// Load and validate a routes table from a YAML file.
///
/// The file holds a top-level `routes` list; entries keep their file order.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read or parsed, an entry is
/// incomplete, or an archetype appears twice.
pub fn load_routes(path: &Path) -> Result<RouteTable, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::RoutesFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    let file: RoutesFile = serde_yaml::from_str(&content)?;
    build_table(file.routes)
}

/// The table the process should serve: the file at `routes_path` when one is
/// configured, the built-in table otherwise.
///
/// # Errors
///
/// Propagates [`load_routes`] failures for a configured file.
pub fn route_table_for(config: &AppConfig) -> Result<RouteTable, ConfigError> {
    match &config.routes_path {
        Some(path) => load_routes(path),
        None => Ok(RouteTable::builtin()),
    }
}

fn build_table(specs: Vec<RouteSpec>) -> Result<RouteTable, ConfigError> {
    let mut seen = HashSet::new();
    let mut table = RouteTable::new();

    for spec in specs {
        let archetype = spec.archetype.trim().to_string();
        if archetype.is_empty() {
            return Err(ConfigError::Validation(
                "route archetype must be non-empty".to_string(),
            ));
        }
        if !seen.insert(archetype.clone()) {
            return Err(ConfigError::Validation(format!(
                "duplicate archetype: '{archetype}'"
            )));
        }
        let route = spec.into_route().ok_or_else(|| {
            ConfigError::Validation(format!(
                "route '{archetype}' requires platform, format, maxLength > 0, hashtags and targetAudience"
            ))
        })?;
        table.add(&archetype, route);
    }

    Ok(table)
}

const BUILTIN_ROUTES: &[(&str, Platform, &[&str], &str)] = &[
    (
        "coding-tips",
        Platform::TikTok,
        &["#coding", "#programming", "#techtips", "#developer"],
        "developers",
    ),
    (
        "code-review",
        Platform::TikTok,
        &["#codereview", "#programming", "#bestpractices", "#developer"],
        "developers",
    ),
    (
        "debugging",
        Platform::TikTok,
        &["#debugging", "#programming", "#coding", "#developer"],
        "developers",
    ),
    (
        "tech-news",
        Platform::Threads,
        &["#technews", "#programming", "#technology", "#innovation"],
        "tech-enthusiasts",
    ),
    (
        "tutorial",
        Platform::Threads,
        &["#tutorial", "#programming", "#coding", "#learntocode"],
        "learners",
    ),
    (
        "industry-insights",
        Platform::Threads,
        &["#techindustry", "#programming", "#career", "#developer"],
        "professionals",
    ),
    (
        "career-advice",
        Platform::LinkedIn,
        &["#career", "#programming", "#techcareer", "#developer"],
        "professionals",
    ),
    (
        "project-showcase",
        Platform::LinkedIn,
        &["#project", "#programming", "#portfolio", "#developer"],
        "professionals",
    ),
    (
        "quick-tips",
        Platform::Twitter,
        &["#coding", "#programming", "#tips", "#developer"],
        "developers",
    ),
    (
        "tech-quotes",
        Platform::Twitter,
        &["#techquotes", "#programming", "#motivation", "#developer"],
        "developers",
    ),
];

#[cfg(test)]
#[path = "routes_test.rs"]
mod tests;
