//! `themeConfig.footer` configuration: branding, social links, link groups.

use crate::config::types::{ConfigDiagnostics, FieldPath};
use crate::config::util::{LinkTarget, validate_logo_path};
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

/// Service icons bundled with the cosmos theme. Anything else renders
/// without an icon.
const KNOWN_SERVICES: &[&str] = &[
    "discord",
    "facebook",
    "github",
    "instagram",
    "linkedin",
    "medium",
    "reddit",
    "telegram",
    "twitter",
    "youtube",
];

// ============================================================================
// footer
// ============================================================================

/// `themeConfig.footer` — the structured footer block.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FooterConfig {
    /// Site-absolute path of the footer logo asset.
    pub logo: String,

    /// The single external home link shown next to the logo.
    #[serde(rename = "textLink")]
    pub text_link: TextLink,

    /// Social/service icon links, rendered in order.
    pub services: Vec<ServiceLink>,

    /// Copyright line.
    pub smallprint: String,

    /// Link groups (footer columns), rendered in order.
    pub links: Vec<LinkGroup>,
}

/// Home link: display text plus target URL.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextLink {
    pub text: String,
    pub url: String,
}

/// A social/service icon link.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceLink {
    pub service: String,
    pub url: String,
}

/// A titled footer column of links.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LinkGroup {
    pub title: String,
    pub children: Vec<FooterLink>,
}

/// A single footer link.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FooterLink {
    pub title: String,
    pub url: String,
}

impl ServiceLink {
    pub fn new(service: &str, url: &str) -> Self {
        Self {
            service: service.into(),
            url: url.into(),
        }
    }
}

impl LinkGroup {
    pub fn new(title: &str, children: Vec<FooterLink>) -> Self {
        Self {
            title: title.into(),
            children,
        }
    }
}

impl FooterLink {
    pub fn new(title: &str, url: &str) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
        }
    }
}

// ============================================================================
// validation
// ============================================================================

impl FooterConfig {
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        let footer = FieldPath::new("themeConfig.footer");

        validate_logo_path(&self.logo, &footer.field("logo"), diag);
        self.validate_text_link(&footer, diag);
        self.validate_services(&footer, diag);
        self.validate_links(&footer, diag);

        if self.smallprint.is_empty() {
            diag.warn(footer.field("smallprint"), "copyright line is empty");
        }
    }

    fn validate_text_link(&self, footer: &FieldPath, diag: &mut ConfigDiagnostics) {
        let text_link = footer.field("textLink");
        if self.text_link.text.is_empty() {
            diag.error(text_link.field("text"), "home link text is empty");
        }
        match LinkTarget::classify(&self.text_link.url) {
            Ok(LinkTarget::External(_)) => {}
            Ok(LinkTarget::SitePath(_)) => diag.error_with_hint(
                text_link.field("url"),
                "home link must be an external URL",
                "use the full address, e.g. \"https://www.kava.io\"",
            ),
            Err(reason) => diag.error(text_link.field("url"), reason),
        }
    }

    fn validate_services(&self, footer: &FieldPath, diag: &mut ConfigDiagnostics) {
        let mut seen = FxHashSet::default();
        for (i, entry) in self.services.iter().enumerate() {
            let at = footer.field("services").index(i);
            if entry.service.is_empty() {
                diag.error(at.field("service"), "service name is empty");
            } else {
                if !KNOWN_SERVICES.contains(&entry.service.as_str()) {
                    diag.warn(
                        at.field("service"),
                        format!("\"{}\" has no icon in the theme", entry.service),
                    );
                }
                if !seen.insert(entry.service.as_str()) {
                    diag.warn(
                        at.field("service"),
                        format!("duplicate \"{}\" entry", entry.service),
                    );
                }
            }
            match LinkTarget::classify(&entry.url) {
                Ok(LinkTarget::External(_)) => {}
                Ok(LinkTarget::SitePath(_)) => {
                    diag.error(at.field("url"), "service link must be an external URL");
                }
                Err(reason) => diag.error(at.field("url"), reason),
            }
        }
    }

    fn validate_links(&self, footer: &FieldPath, diag: &mut ConfigDiagnostics) {
        for (i, group) in self.links.iter().enumerate() {
            let at = footer.field("links").index(i);
            if group.title.is_empty() {
                diag.error(at.field("title"), "title is empty");
            }
            if group.children.is_empty() {
                diag.error(at.field("children"), "link group has no entries");
            }
            let children = at.field("children");
            for (j, link) in group.children.iter().enumerate() {
                let at = children.index(j);
                if link.title.is_empty() {
                    diag.error(at.field("title"), "title is empty");
                }
                if let Err(reason) = LinkTarget::classify(&link.url) {
                    diag.error(at.field("url"), reason);
                }
            }
        }
    }
}

// ============================================================================
// tests
// ============================================================================
