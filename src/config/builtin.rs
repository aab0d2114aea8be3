//! Built-in site configuration.
//!
//! The complete configuration for the documentation site, exactly as the
//! theme renderer consumes it. `init` writes it out as the starting config
//! file, and the tests below pin its shape.

use crate::config::SiteConfig;
use crate::config::section::{
    FooterConfig, FooterLink, LinkGroup, LogoConfig, NavNode, ServiceLink, SidebarConfig, TextLink,
    ThemeConfig,
};

impl SiteConfig {
    /// The built-in site configuration: deterministic, fully populated, and
    /// valid. Same value on every call.
    pub fn builtin() -> Self {
        Self {
            config_path: Default::default(),
            theme: "cosmos".into(),
            title: "Kava Documentation".into(),
            theme_config: ThemeConfig {
                logo: LogoConfig {
                    src: "/logo.svg".into(),
                },
                custom: true,
                sidebar: SidebarConfig {
                    auto: false,
                    nav: builtin_nav(),
                },
                footer: builtin_footer(),
            },
        }
    }
}

fn builtin_nav() -> Vec<NavNode> {
    vec![
        NavNode::group(
            "Getting Started - Developers",
            vec![
                NavNode::leaf("Get Started", "/Education/getting_started.html"),
                NavNode::leaf("Building Modules", "/Education/hello_kava.html"),
                NavNode::leaf("Javascript SDK", "/building/javascript-sdk.html"),
                NavNode::leaf("Run Validator Node", "/validator_guide"),
                NavNode::group(
                    "Run Bots",
                    vec![
                        NavNode::leaf("Sentinel Bot", "/tools/sentinel.html"),
                        NavNode::leaf("Auction Bot", "/tools/auction.html"),
                    ],
                ),
                NavNode::directory("Migration Guide", "/kava-8"),
            ],
        ),
        NavNode::group(
            "Resources",
            vec![
                NavNode::leaf("Community Tools", "/tools/community.html"),
                NavNode::directory("Module Specs", "/Modules"),
                NavNode::directory("CLI Docs", "/Education/user_actions/"),
                NavNode::leaf("REST API Spec", "https://swagger.kava.io/"),
                NavNode::leaf(
                    "Protocol Reference",
                    "https://pkg.go.dev/github.com/kava-labs/kava?tab=subdirectories",
                ),
                NavNode::directory("FAQ", "/Education/FAQ/"),
            ],
        ),
    ]
}

fn builtin_footer() -> FooterConfig {
    FooterConfig {
        logo: "/logo.svg".into(),
        text_link: TextLink {
            text: "kava.io".into(),
            url: "https://www.kava.io".into(),
        },
        services: vec![
            ServiceLink::new("twitter", "https://twitter.com/kava_platform"),
            ServiceLink::new("medium", "https://medium.com/kava-labs"),
            ServiceLink::new("telegram", "https://t.me/kavalabs"),
            ServiceLink::new("discord", "https://discord.gg/JJYnuCx"),
            ServiceLink::new("github", "https://github.com/kava-labs"),
        ],
        smallprint: "© 2021 Kava Labs.".into(),
        links: vec![
            LinkGroup::new(
                "Community",
                vec![
                    FooterLink::new("Blog", "https://medium.com/kava-labs"),
                    FooterLink::new("Chat", "https://t.me/kavalabs"),
                ],
            ),
            LinkGroup::new(
                "Contributing",
                vec![
                    FooterLink::new(
                        "Contributing to the docs",
                        "https://github.com/Kava-Labs/kava/tree/master/docs",
                    ),
                    FooterLink::new("Source code on GitHub", "https://github.com/Kava-Labs/kava"),
                ],
            ),
            LinkGroup::new(
                "Related Docs",
                vec![
                    FooterLink::new("Cosmos SDK", "https://cosmos.network/docs"),
                    FooterLink::new("Binance Chain", "https://docs.binance.org"),
                ],
            ),
        ],
    }
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::section::NavNode;

    #[test]
    fn test_builtin_is_deterministic() {
        assert_eq!(SiteConfig::builtin(), SiteConfig::builtin());
    }

    #[test]
    fn test_builtin_validates_clean() {
        let config = SiteConfig::builtin();
        let diag = config.diagnostics();
        assert!(!diag.has_errors(), "builtin config failed validation: {diag}");
        assert!(diag.warnings().is_empty());
    }

    #[test]
    fn test_builtin_branding() {
        let config = SiteConfig::builtin();
        assert_eq!(config.theme, "cosmos");
        assert_eq!(config.title, "Kava Documentation");
        assert_eq!(config.theme_config.logo.src, "/logo.svg");
        assert!(config.theme_config.custom);
        assert!(!config.theme_config.sidebar.auto);
    }

    #[test]
    fn test_run_bots_children_are_leaves() {
        let config = SiteConfig::builtin();
        let nav = &config.theme_config.sidebar.nav;

        let NavNode::Group(developers) = &nav[0] else {
            panic!("expected a group");
        };
        let NavNode::Group(run_bots) = &developers.children[4] else {
            panic!("expected Run Bots to be a group");
        };
        assert_eq!(run_bots.title, "Run Bots");
        assert_eq!(
            run_bots.children,
            vec![
                NavNode::leaf("Sentinel Bot", "/tools/sentinel.html"),
                NavNode::leaf("Auction Bot", "/tools/auction.html"),
            ]
        );
    }

    #[test]
    fn test_footer_services_order_and_urls() {
        let config = SiteConfig::builtin();
        let services = &config.theme_config.footer.services;

        let order: Vec<_> = services.iter().map(|s| s.service.as_str()).collect();
        assert_eq!(order, ["twitter", "medium", "telegram", "discord", "github"]);

        assert_eq!(services[0].url, "https://twitter.com/kava_platform");
        assert_eq!(services[1].url, "https://medium.com/kava-labs");
        assert_eq!(services[2].url, "https://t.me/kavalabs");
        assert_eq!(services[3].url, "https://discord.gg/JJYnuCx");
        assert_eq!(services[4].url, "https://github.com/kava-labs");
    }

    #[test]
    fn test_footer_link_groups() {
        let config = SiteConfig::builtin();
        let links = &config.theme_config.footer.links;
        let titles: Vec<_> = links.iter().map(|g| g.title.as_str()).collect();
        assert_eq!(titles, ["Community", "Contributing", "Related Docs"]);
        assert!(links.iter().all(|g| !g.children.is_empty()));
    }
}
