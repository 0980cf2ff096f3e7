use super::*;
use jpost_core::app_config::{DirectApiCredentials, WebhookUrls};
use jpost_core::{AppConfig, Environment, Platform, RouteTable};
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn entry(archetype: &str, hashtags: &[&str]) -> EntryArgs {
    EntryArgs {
        archetype: archetype.to_string(),
        content: None,
        hashtags: hashtags.iter().map(ToString::to_string).collect(),
    }
}

fn test_config(webhooks: WebhookUrls) -> AppConfig {
    AppConfig {
        env: Environment::Test,
        bind_addr: "127.0.0.1:0".parse().expect("addr"),
        log_level: "warn".to_string(),
        routes_path: None,
        http_timeout_secs: 5,
        webhooks,
        webhook_api_key: None,
        direct_api: DirectApiCredentials::default(),
    }
}

#[test]
fn parses_routes_with_platform_filter() {
    let cli = Cli::try_parse_from(["jpost", "routes", "--platform", "threads"])
        .expect("expected valid cli args");

    assert!(matches!(
        cli.command,
        Commands::Routes { platform: Some(ref p) } if p == "threads"
    ));
}

#[test]
fn parses_preview_with_repeated_hashtags() {
    let cli = Cli::try_parse_from([
        "jpost",
        "preview",
        "coding-tips",
        "--content",
        "Hello.",
        "--hashtag",
        "#a",
        "--hashtag",
        "#b",
    ])
    .expect("expected valid cli args");

    let Commands::Preview(entry) = cli.command else {
        panic!("expected preview command");
    };
    assert_eq!(entry.archetype, "coding-tips");
    assert_eq!(entry.content.as_deref(), Some("Hello."));
    assert_eq!(entry.hashtags, ["#a", "#b"]);
}

#[test]
fn parses_post_with_direct_flag() {
    let cli = Cli::try_parse_from(["jpost", "post", "quick-tips", "--direct"])
        .expect("expected valid cli args");

    assert!(matches!(
        cli.command,
        Commands::Post { ref entry, direct: true } if entry.archetype == "quick-tips" && entry.content.is_none()
    ));
}

#[test]
fn subcommand_is_required() {
    assert!(Cli::try_parse_from(["jpost"]).is_err());
}

#[test]
fn render_routes_has_header_and_one_line_per_route() {
    let table = RouteTable::builtin();
    let routes = table.by_platform(Platform::Twitter);

    let out = routes::render_routes(&routes);
    let lines: Vec<&str> = out.lines().collect();

    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("ARCHETYPE"));
    assert!(lines[1].starts_with("quick-tips"));
    assert!(lines[1].contains("micro-blog"));
    assert!(lines[2].starts_with("tech-quotes"));
}

#[test]
fn run_routes_rejects_unknown_platform() {
    let err = routes::run_routes(&RouteTable::builtin(), Some("myspace")).unwrap_err();
    assert_eq!(err.to_string(), "Unsupported platform: myspace");
}

#[test]
fn prepare_entry_uses_route_hashtags_by_default() {
    let table = RouteTable::builtin();
    let (route, formatted) = publish::prepare_entry(
        &table,
        &entry("career-advice", &[]),
        "Ask for feedback early. It is cheaper than rework.",
    )
    .expect("prepared");

    assert_eq!(route.platform, Platform::LinkedIn);
    assert_eq!(formatted.hashtags, route.hashtags);
    assert!(formatted.text.starts_with("💡 Professional Insight:"));
}

#[test]
fn prepare_entry_prefers_cli_hashtags() {
    let table = RouteTable::builtin();
    let (_, formatted) = publish::prepare_entry(
        &table,
        &entry("quick-tips", &["#rustlang"]),
        "Run clippy before you push.",
    )
    .expect("prepared");

    assert_eq!(formatted.hashtags, ["#rustlang"]);
    assert_eq!(formatted.text, "Run clippy before you push. #rustlang");
}

#[test]
fn prepare_entry_rejects_unknown_archetype() {
    let err = publish::prepare_entry(&RouteTable::builtin(), &entry("poetry", &[]), "Roses.")
        .unwrap_err();
    assert_eq!(err.to_string(), "Unknown archetype: poetry");
}

#[test]
fn prepare_entry_rejects_blank_content() {
    let err = publish::prepare_entry(&RouteTable::builtin(), &entry("tutorial", &[]), "  \n")
        .unwrap_err();
    assert!(err.to_string().contains("empty"));
}

#[tokio::test]
async fn publish_entry_posts_through_webhook() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/threads"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "postId": "th-1" })))
        .expect(1)
        .mount(&server)
        .await;

    let config = test_config(WebhookUrls {
        threads: Some(format!("{}/threads", server.uri())),
        ..WebhookUrls::default()
    });
    let table = RouteTable::builtin();
    let (route, formatted) = publish::prepare_entry(
        &table,
        &entry("tutorial", &[]),
        "Start with the failing test. Make it pass. Then clean up.",
    )
    .expect("prepared");

    let result = publish::publish_entry(&config, &route, &formatted, false)
        .await
        .expect("webhook path never errors");

    assert!(result.success, "{result:?}");
    assert_eq!(result.post_id.as_deref(), Some("th-1"));
}

#[tokio::test]
async fn publish_entry_direct_to_webhook_only_platform_is_an_error() {
    let config = test_config(WebhookUrls::default());
    let table = RouteTable::builtin();
    let (route, formatted) =
        publish::prepare_entry(&table, &entry("coding-tips", &[]), "Write tests.")
            .expect("prepared");

    let err = publish::publish_entry(&config, &route, &formatted, true)
        .await
        .unwrap_err();

    assert!(err.to_string().contains("not implemented for tiktok"), "{err}");
}
