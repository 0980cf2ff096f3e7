//! `preview` and `post` commands.
//!
//! Both resolve the archetype and format the entry the same way the server's
//! journal webhook does; `post` then hands the result to a poster.

use std::io::Read;

use anyhow::Context;
use jpost_core::{
    format_content, AppConfig, FormatOptions, FormattedContent, PostResult, Route, RouteTable,
};
use jpost_poster::{DirectApiClient, PlatformPoster};

use crate::EntryArgs;

/// Entry text from `--content`, or all of stdin when the flag is absent.
fn read_content(arg: Option<&str>) -> anyhow::Result<String> {
    let content = match arg {
        Some(text) => text.to_string(),
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read entry from stdin")?;
            buf
        }
    };
    Ok(content)
}

/// Resolve the archetype and format `content` for its platform.
///
/// Hashtags given on the command line replace the route's defaults.
pub(crate) fn prepare_entry(
    table: &RouteTable,
    entry: &EntryArgs,
    content: &str,
) -> anyhow::Result<(Route, FormattedContent)> {
    if content.trim().is_empty() {
        anyhow::bail!("entry content is empty");
    }
    let route = table
        .lookup(&entry.archetype)
        .cloned()
        .ok_or_else(|| anyhow::anyhow!("Unknown archetype: {}", entry.archetype))?;

    let mut options = FormatOptions::for_route(&route);
    if !entry.hashtags.is_empty() {
        options.hashtags.clone_from(&entry.hashtags);
    }
    let formatted = format_content(content, route.platform, &options);
    Ok((route, formatted))
}

/// Print the formatted entry as JSON without posting.
pub(crate) fn run_preview(table: &RouteTable, entry: &EntryArgs) -> anyhow::Result<()> {
    let content = read_content(entry.content.as_deref())?;
    let (route, formatted) = prepare_entry(table, entry, &content)?;

    println!("{}", serde_json::to_string_pretty(&formatted)?);
    if formatted.length > route.max_length {
        eprintln!(
            "warning: formatted text is {} characters, over the {} limit for {}",
            formatted.length,
            route.max_length,
            route.platform.display_name()
        );
    }
    Ok(())
}

/// Post one formatted entry through the webhook or direct-API path.
///
/// # Errors
///
/// Webhook failures come back as a failed [`PostResult`]; only client
/// construction and direct-API configuration problems are errors.
pub(crate) async fn publish_entry(
    config: &AppConfig,
    route: &Route,
    formatted: &FormattedContent,
    direct: bool,
) -> anyhow::Result<PostResult> {
    if direct {
        let client = DirectApiClient::from_app_config(config)?;
        return Ok(client.post_directly(formatted, route).await?);
    }
    let poster = PlatformPoster::from_app_config(config)?;
    Ok(poster.post(formatted, route).await)
}

/// Format and post an entry, printing the post result as JSON.
///
/// # Errors
///
/// Returns an error when the entry cannot be prepared, the poster cannot be
/// built, or the post itself did not succeed.
pub(crate) async fn run_post(
    table: &RouteTable,
    config: &AppConfig,
    entry: &EntryArgs,
    direct: bool,
) -> anyhow::Result<()> {
    let content = read_content(entry.content.as_deref())?;
    let (route, formatted) = prepare_entry(table, entry, &content)?;

    tracing::info!(
        archetype = %route.archetype,
        platform = %route.platform,
        direct,
        length = formatted.length,
        "posting entry"
    );
    let result = publish_entry(config, &route, &formatted, direct).await?;
    println!("{}", serde_json::to_string_pretty(&result)?);

    if !result.success {
        anyhow::bail!(
            "posting to {} failed: {}",
            result.platform.display_name(),
            result.error.as_deref().unwrap_or("unknown error")
        );
    }
    Ok(())
}
