//! `routes` command: print the archetype table.

use jpost_core::{Platform, Route, RouteTable};

/// Print the route table, optionally narrowed to one platform.
///
/// # Errors
///
/// Returns an error if `platform` is not a supported platform name.
pub(crate) fn run_routes(table: &RouteTable, platform: Option<&str>) -> anyhow::Result<()> {
    let routes: Vec<&Route> = match platform {
        Some(name) => {
            let platform: Platform = name.parse()?;
            table.by_platform(platform)
        }
        None => table.iter().collect(),
    };

    if routes.is_empty() {
        println!(
            "no routes configured{}",
            platform.map(|p| format!(" for {p}")).unwrap_or_default()
        );
        return Ok(());
    }

    print!("{}", render_routes(&routes));
    Ok(())
}

pub(crate) fn render_routes(routes: &[&Route]) -> String {
    let mut out = format!(
        "{:<20}{:<10}{:<14}{:>6}  HASHTAGS\n",
        "ARCHETYPE", "PLATFORM", "FORMAT", "MAX"
    );
    for route in routes {
        out.push_str(&format!(
            "{:<20}{:<10}{:<14}{:>6}  {}\n",
            route.archetype,
            route.platform.as_str(),
            route.format.as_str(),
            route.max_length,
            route.hashtags.join(" ")
        ));
    }
    out
}
