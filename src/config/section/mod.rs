//! Configuration section definitions.
//!
//! Sections mirror the renderer schema one-to-one.
//!
//! # Example
//!
//! ```toml
//! theme = "cosmos"
//! title = "Kava Documentation"
//!
//! [themeConfig.logo]
//! src = "/logo.svg"
//!
//! [themeConfig.sidebar]
//! auto = false
//!
//! [[themeConfig.sidebar.nav]]
//! title = "Resources"
//!
//! [[themeConfig.sidebar.nav.children]]
//! title = "Community Tools"
//! path = "/tools/community.html"
//!
//! [themeConfig.footer]
//! logo = "/logo.svg"
//! smallprint = "© 2021 Kava Labs."
//! ```

mod footer;
mod sidebar;
mod theme;

pub use footer::{FooterConfig, FooterLink, LinkGroup, ServiceLink, TextLink};
pub use sidebar::{NavGroup, NavLeaf, NavNode, SidebarConfig};
pub use theme::{LogoConfig, ThemeConfig};
