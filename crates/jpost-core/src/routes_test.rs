use std::io::Write;

use super::*;

fn sample_route(archetype: &str, platform: Platform) -> Route {
    Route {
        archetype: archetype.to_string(),
        platform,
        format: platform.content_format(),
        max_length: platform.default_max_length(),
        hashtags: vec!["#rust".to_string()],
        target_audience: "rustaceans".to_string(),
    }
}

fn complete_spec() -> RouteSpec {
    RouteSpec::from(sample_route("weekly-recap", Platform::Threads))
}

#[test]
fn builtin_table_has_ten_archetypes_in_order() {
    let table = RouteTable::builtin();
    assert_eq!(
        table.archetypes(),
        vec![
            "coding-tips",
            "code-review",
            "debugging",
            "tech-news",
            "tutorial",
            "industry-insights",
            "career-advice",
            "project-showcase",
            "quick-tips",
            "tech-quotes",
        ]
    );
}

#[test]
fn builtin_routes_are_consistent_with_their_platform() {
    for route in RouteTable::builtin().iter() {
        assert_eq!(route.format, route.platform.content_format(), "{route:?}");
        assert_eq!(
            route.max_length,
            route.platform.default_max_length(),
            "{route:?}"
        );
        assert_eq!(route.hashtags.len(), 4, "{route:?}");
        assert!(RouteTable::validate(&RouteSpec::from(route.clone())));
    }
}

#[test]
fn lookup_returns_route_for_known_archetype() {
    let table = RouteTable::builtin();
    let route = table.lookup("career-advice").expect("career-advice route");
    assert_eq!(route.platform, Platform::LinkedIn);
    assert_eq!(route.format, ContentFormat::Professional);
    assert_eq!(route.max_length, 1300);
    assert_eq!(route.target_audience, "professionals");
}

#[test]
fn lookup_unknown_archetype_is_none() {
    let table = RouteTable::builtin();
    assert!(table.lookup("unknown-archetype").is_none());
}

#[test]
fn by_platform_filters_in_table_order() {
    let table = RouteTable::builtin();
    let threads: Vec<&str> = table
        .by_platform(Platform::Threads)
        .into_iter()
        .map(|r| r.archetype.as_str())
        .collect();
    assert_eq!(threads, vec!["tech-news", "tutorial", "industry-insights"]);
    assert_eq!(table.by_platform(Platform::Twitter).len(), 2);
}

#[test]
fn add_appends_new_archetype() {
    let mut table = RouteTable::builtin();
    table.add("release-notes", sample_route("ignored", Platform::Twitter));

    assert_eq!(table.len(), 11);
    assert_eq!(table.archetypes().last(), Some(&"release-notes"));
    let route = table.lookup("release-notes").expect("added route");
    assert_eq!(route.archetype, "release-notes");
    assert_eq!(route.platform, Platform::Twitter);
}

#[test]
fn add_replaces_existing_archetype_in_place() {
    let mut table = RouteTable::builtin();
    table.add("debugging", sample_route("debugging", Platform::LinkedIn));

    assert_eq!(table.len(), 10);
    assert_eq!(table.archetypes()[2], "debugging");
    assert_eq!(
        table.lookup("debugging").map(|r| r.platform),
        Some(Platform::LinkedIn)
    );
}

#[test]
fn remove_drops_archetype() {
    let mut table = RouteTable::builtin();
    let removed = table.remove("tutorial").expect("tutorial existed");
    assert_eq!(removed.platform, Platform::Threads);
    assert!(table.lookup("tutorial").is_none());
    assert!(table.remove("tutorial").is_none());
    assert_eq!(table.len(), 9);
}

#[test]
fn validate_accepts_complete_spec() {
    assert!(RouteTable::validate(&complete_spec()));
}

#[test]
fn validate_rejects_each_missing_field() {
    let mut spec = complete_spec();
    spec.platform = None;
    assert!(!RouteTable::validate(&spec));

    let mut spec = complete_spec();
    spec.format = None;
    assert!(!RouteTable::validate(&spec));

    let mut spec = complete_spec();
    spec.max_length = None;
    assert!(!RouteTable::validate(&spec));

    let mut spec = complete_spec();
    spec.hashtags = None;
    assert!(!RouteTable::validate(&spec));

    let mut spec = complete_spec();
    spec.target_audience = None;
    assert!(!RouteTable::validate(&spec));
}

#[test]
fn validate_rejects_zero_max_length() {
    let mut spec = complete_spec();
    spec.max_length = Some(0);
    assert!(!RouteTable::validate(&spec));
}

#[test]
fn validate_accepts_empty_hashtag_list() {
    let mut spec = complete_spec();
    spec.hashtags = Some(vec![]);
    assert!(RouteTable::validate(&spec));
}

#[test]
fn into_route_requires_complete_spec() {
    let mut spec = complete_spec();
    spec.format = None;
    assert!(spec.into_route().is_none());
    assert!(complete_spec().into_route().is_some());
}

fn write_routes_file(yaml: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    file.write_all(yaml.as_bytes()).expect("write yaml");
    file
}

#[test]
fn load_routes_reads_yaml_in_file_order() {
    let file = write_routes_file(
        r##"
routes:
  - archetype: standup
    platform: threads
    format: long-form
    maxLength: 400
    hashtags: ["#standup"]
    targetAudience: teammates
  - archetype: hot-take
    platform: twitter
    format: micro-blog
    maxLength: 280
    hashtags: []
    targetAudience: developers
"##,
    );

    let table = load_routes(file.path()).expect("routes should load");
    assert_eq!(table.archetypes(), vec!["standup", "hot-take"]);
    let standup = table.lookup("standup").unwrap();
    assert_eq!(standup.max_length, 400);
    assert_eq!(standup.hashtags, vec!["#standup".to_string()]);
}

#[test]
fn load_routes_rejects_incomplete_entry() {
    let file = write_routes_file(
        r"
routes:
  - archetype: half-done
    platform: tiktok
    maxLength: 280
",
    );

    let err = load_routes(file.path()).unwrap_err();
    assert!(
        matches!(err, ConfigError::Validation(ref msg) if msg.contains("half-done")),
        "expected Validation naming the archetype, got: {err:?}"
    );
}

#[test]
fn load_routes_rejects_duplicate_archetype() {
    let file = write_routes_file(
        r"
routes:
  - archetype: twice
    platform: twitter
    format: micro-blog
    maxLength: 280
    hashtags: []
    targetAudience: everyone
  - archetype: twice
    platform: twitter
    format: micro-blog
    maxLength: 280
    hashtags: []
    targetAudience: everyone
",
    );

    let err = load_routes(file.path()).unwrap_err();
    assert!(matches!(err, ConfigError::Validation(ref msg) if msg.contains("duplicate")));
}

#[test]
fn load_routes_rejects_unknown_platform() {
    let file = write_routes_file(
        r"
routes:
  - archetype: retro
    platform: myspace
    format: micro-blog
    maxLength: 280
    hashtags: []
    targetAudience: nostalgics
",
    );

    let err = load_routes(file.path()).unwrap_err();
    assert!(matches!(err, ConfigError::RoutesFileParse(_)), "{err:?}");
}

#[test]
fn load_routes_reports_missing_file() {
    let err = load_routes(Path::new("/nonexistent/jpost-routes.yaml")).unwrap_err();
    assert!(matches!(err, ConfigError::RoutesFileIo { .. }));
}

fn config_with_routes_path(path: Option<&Path>) -> AppConfig {
    let path = path.map(|p| p.display().to_string());
    crate::config::build_app_config(|key| match (key, &path) {
        ("JPOST_ROUTES_PATH", Some(p)) => Ok(p.clone()),
        _ => Err(std::env::VarError::NotPresent),
    })
    .expect("config")
}

#[test]
fn route_table_for_defaults_to_builtin() {
    let table = route_table_for(&config_with_routes_path(None)).expect("table");
    assert_eq!(table, RouteTable::builtin());
}

#[test]
fn route_table_for_prefers_configured_file() {
    let file = write_routes_file(
        r"
routes:
  - archetype: standup
    platform: threads
    format: long-form
    maxLength: 500
    hashtags: ['#standup']
    targetAudience: teammates
",
    );

    let table = route_table_for(&config_with_routes_path(Some(file.path()))).expect("table");
    assert_eq!(table.archetypes(), vec!["standup"]);
}

#[test]
fn shipped_routes_file_matches_builtin_table() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../config/routes.yaml");
    let table = load_routes(&path).expect("config/routes.yaml loads");
    assert_eq!(table, RouteTable::builtin());
}
