//! Config validation command.

use anyhow::Result;
use owo_colors::OwoColorize;

use crate::cli::ValidateArgs;
use crate::config::{ConfigError, NavNode, SiteConfig};
use crate::log;
use crate::logger::plural_count;

/// Validate the loaded config and print a report.
///
/// `SiteConfig::load` skips validation for this command so the full report
/// lands here instead of dying at startup.
pub fn validate_config(config: &SiteConfig, args: &ValidateArgs) -> Result<()> {
    log!("validate"; "checking {}", config.config_path.display());

    let (groups, leaves) = nav_stats(&config.theme_config.sidebar.nav);
    log!(
        "validate";
        "sidebar: {}, {}",
        plural_count(groups, "group"),
        plural_count(leaves, "page link")
    );
    let footer = &config.theme_config.footer;
    log!(
        "validate";
        "footer: {}, {}",
        plural_count(footer.services.len(), "service link"),
        plural_count(footer.links.len(), "link group")
    );

    let diag = config.diagnostics();
    diag.print_warnings();

    match diag.into_result() {
        Ok(()) => {
            eprintln!("{}", "all checks passed".green());
            Ok(())
        }
        Err(diag) => {
            if args.warn_only {
                eprintln!("{diag}");
                log!("validate"; "treating {} as warnings", plural_count(diag.len(), "error"));
                Ok(())
            } else {
                Err(ConfigError::Diagnostics(diag).into())
            }
        }
    }
}

/// Count groups and page links across the nav tree.
fn nav_stats(nodes: &[NavNode]) -> (usize, usize) {
    let mut groups = 0;
    let mut leaves = 0;
    for node in nodes {
        match node {
            NavNode::Leaf(_) => leaves += 1,
            NavNode::Group(group) => {
                groups += 1;
                let (g, l) = nav_stats(&group.children);
                groups += g;
                leaves += l;
            }
        }
    }
    (groups, leaves)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nav_stats() {
        let config = SiteConfig::builtin();
        let (groups, leaves) = nav_stats(&config.theme_config.sidebar.nav);
        assert_eq!(groups, 3); // two top-level plus "Run Bots"
        assert_eq!(leaves, 13);
    }
}
