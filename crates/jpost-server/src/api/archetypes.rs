use axum::{
    extract::{Path, State},
    Json,
};
use jpost_core::{Platform, Route};
use serde::Serialize;

use super::{ApiError, AppState};

#[derive(Debug, Serialize)]
pub(super) struct ArchetypeList {
    archetypes: Vec<Route>,
}

#[derive(Debug, Serialize)]
pub(super) struct PlatformRoutes {
    platform: Platform,
    routes: Vec<Route>,
}

pub(super) async fn list_archetypes(State(state): State<AppState>) -> Json<ArchetypeList> {
    Json(ArchetypeList {
        archetypes: state.routes.iter().cloned().collect(),
    })
}

pub(super) async fn list_platform_routes(
    State(state): State<AppState>,
    Path(platform): Path<String>,
) -> Result<Json<PlatformRoutes>, ApiError> {
    let platform: Platform = platform
        .parse()
        .map_err(|e: jpost_core::CoreError| ApiError::BadRequest(e.to_string()))?;

    let routes = state
        .routes
        .by_platform(platform)
        .into_iter()
        .cloned()
        .collect();
    Ok(Json(PlatformRoutes { platform, routes }))
}
