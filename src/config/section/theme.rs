//! `themeConfig` section: branding flags, sidebar, and footer.

use crate::config::section::{FooterConfig, SidebarConfig};
use crate::config::types::{ConfigDiagnostics, FieldPath};
use crate::config::util::validate_logo_path;
use serde::{Deserialize, Serialize};

/// `themeConfig` — everything the theme renderer reads beyond `theme` and
/// `title`. Field order matches the renderer schema.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Branding logo shown in the sidebar header.
    pub logo: LogoConfig,

    /// Site uses the theme's custom layout.
    pub custom: bool,

    /// Sidebar navigation settings.
    pub sidebar: SidebarConfig,

    /// Footer block.
    pub footer: FooterConfig,
}

/// Logo asset reference.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogoConfig {
    /// Site-absolute path of the logo asset.
    pub src: String,
}

impl ThemeConfig {
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        validate_logo_path(&self.logo.src, &FieldPath::new("themeConfig.logo.src"), diag);
        self.sidebar.validate(diag);
        self.footer.validate(diag);
    }
}
