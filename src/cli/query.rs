//! Navigation route listing.

use anyhow::{Context, Result};
use serde::Serialize;
use std::fs;

use crate::cli::QueryArgs;
use crate::config::{LinkTarget, SiteConfig};
use crate::log;

/// A single route row in query output.
#[derive(Debug, Serialize)]
struct RouteEntry {
    title: String,
    path: String,
    #[serde(skip_serializing_if = "is_false")]
    directory: bool,
}

fn is_false(v: &bool) -> bool {
    !*v
}

/// List the nav tree's page links as JSON, in sidebar order.
pub fn run_query(config: &SiteConfig, args: &QueryArgs) -> Result<()> {
    let routes = collect_routes(config, args.internal);

    if routes.is_empty() {
        log!("query"; "no routes found");
        return Ok(());
    }

    let formatted = if args.pretty {
        serde_json::to_string_pretty(&routes)?
    } else {
        serde_json::to_string(&routes)?
    };

    // Output to file or stdout
    if let Some(ref output_path) = args.output {
        let mut content = formatted;
        content.push('\n');
        fs::write(output_path, content)
            .with_context(|| format!("Failed to write '{}'", output_path.display()))?;
        log!("query"; "wrote output to {}", output_path.display());
    } else {
        println!("{}", formatted);
    }

    Ok(())
}

/// Collect leaf routes, optionally skipping external URLs.
fn collect_routes(config: &SiteConfig, internal_only: bool) -> Vec<RouteEntry> {
    config
        .theme_config
        .sidebar
        .leaves()
        .into_iter()
        .filter_map(|leaf| {
            let path = leaf.path.as_deref()?;
            if internal_only && matches!(LinkTarget::classify(path), Ok(LinkTarget::External(_))) {
                return None;
            }
            Some(RouteEntry {
                title: leaf.title.clone(),
                path: path.to_string(),
                directory: leaf.directory,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collect_routes_in_sidebar_order() {
        let config = SiteConfig::builtin();
        let routes = collect_routes(&config, false);

        assert_eq!(routes.len(), 13);
        assert_eq!(routes[0].path, "/Education/getting_started.html");
        assert!(routes.iter().any(|r| r.path == "/tools/sentinel.html"));

        // Sentinel comes right before Auction, as in the sidebar
        let sentinel = routes.iter().position(|r| r.title == "Sentinel Bot").unwrap();
        assert_eq!(routes[sentinel + 1].title, "Auction Bot");
    }

    #[test]
    fn test_internal_filter_skips_external_urls() {
        let config = SiteConfig::builtin();
        let routes = collect_routes(&config, true);

        assert_eq!(routes.len(), 11);
        assert!(routes.iter().all(|r| r.path.starts_with('/')));
        assert!(!routes.iter().any(|r| r.title == "REST API Spec"));
    }

    #[test]
    fn test_directory_flag_only_when_set() {
        let config = SiteConfig::builtin();
        let routes = collect_routes(&config, false);
        let json = serde_json::to_string(&routes).unwrap();

        assert!(json.contains(r#"{"title":"Module Specs","path":"/Modules","directory":true}"#));
        assert!(
            json.contains(r#"{"title":"Sentinel Bot","path":"/tools/sentinel.html"}"#)
        );
    }
}
