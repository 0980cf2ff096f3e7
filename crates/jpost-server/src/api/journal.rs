//! `POST /webhook/journal`: route, format, and post one journal entry.

use axum::{
    extract::{rejection::JsonRejection, State},
    Extension, Json,
};
use jpost_core::{format_content, FormatOptions, Platform};
use serde::{Deserialize, Serialize};

use crate::middleware::RequestId;

use super::{ApiError, AppState};

pub(super) const MISSING_FIELDS: &str = "Missing required fields: content and archetype";

#[derive(Debug, Deserialize)]
pub(super) struct JournalEntryRequest {
    #[serde(default)]
    content: Option<String>,
    #[serde(default)]
    archetype: Option<String>,
    #[serde(default)]
    metadata: Option<EntryMetadata>,
}

#[derive(Debug, Deserialize)]
struct EntryMetadata {
    #[serde(default)]
    hashtags: Option<Vec<String>>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct JournalEntryResponse {
    success: bool,
    message: &'static str,
    platform: Platform,
    post_id: Option<String>,
    url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

pub(super) async fn receive_journal_entry(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    payload: Result<Json<JournalEntryRequest>, JsonRejection>,
) -> Result<Json<JournalEntryResponse>, ApiError> {
    let Json(body) = payload.map_err(|rejection| {
        tracing::warn!(request_id = %req_id.0, error = %rejection, "rejected journal entry body");
        ApiError::BadRequest(format!("Invalid request body: {}", rejection.body_text()))
    })?;

    let (Some(content), Some(archetype)) = (non_blank(body.content), non_blank(body.archetype))
    else {
        return Err(ApiError::BadRequest(MISSING_FIELDS.to_string()));
    };

    tracing::info!(request_id = %req_id.0, archetype = %archetype, "received journal entry");

    let Some(route) = state.routes.lookup(&archetype) else {
        return Err(ApiError::BadRequest(format!(
            "Unknown archetype: {archetype}"
        )));
    };

    // Hashtags from the entry win over the route's defaults.
    let options = FormatOptions {
        hashtags: body
            .metadata
            .and_then(|m| m.hashtags)
            .unwrap_or_else(|| route.hashtags.clone()),
        max_length: Some(route.max_length),
    };
    let formatted = format_content(&content, route.platform, &options);
    let result = state.poster.post(&formatted, route).await;

    let message = if result.success {
        "Content processed and posted successfully"
    } else {
        "Content processed but posting failed"
    };
    tracing::info!(
        request_id = %req_id.0,
        archetype = %archetype,
        platform = %route.platform,
        success = result.success,
        "journal entry processed"
    );

    Ok(Json(JournalEntryResponse {
        success: result.success,
        message,
        platform: result.platform,
        post_id: result.post_id,
        url: result.url,
        error: result.error,
    }))
}
