//! Site configuration management for `sitecfg.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── builtin    # Built-in site configuration value
//! ├── section/   # Renderer schema sections
//! │   ├── theme      # themeConfig (logo, custom)
//! │   ├── sidebar    # themeConfig.sidebar (nav tree)
//! │   └── footer     # themeConfig.footer
//! ├── types/     # Utility types
//! │   ├── error      # ConfigError, ConfigDiagnostics
//! │   └── field      # FieldPath
//! └── mod.rs     # SiteConfig (this file)
//! ```
//!
//! The configuration is loaded once at startup, validated as a whole, and
//! never mutated afterwards.

mod builtin;
pub mod section;
pub mod types;
mod util;

// Re-export from section/
pub use section::{
    FooterConfig, FooterLink, LinkGroup, LogoConfig, NavGroup, NavLeaf, NavNode, ServiceLink,
    SidebarConfig, TextLink, ThemeConfig,
};

// Re-export from types/
pub use types::{ConfigDiagnostic, ConfigDiagnostics, ConfigError, FieldPath};

pub use util::LinkTarget;

use crate::cli::Cli;
use crate::{debug, log};
use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure: the object the theme renderer consumes.
/// Field order matches the renderer schema.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Absolute path to the config file (internal use only)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Theme package identifier.
    pub theme: String,

    /// Site title.
    pub title: String,

    /// Theme-specific options (logo, sidebar, footer).
    #[serde(rename = "themeConfig")]
    pub theme_config: ThemeConfig,
}

impl SiteConfig {
    /// Load configuration from CLI arguments.
    ///
    /// Searches upward from cwd to find the config file. `init` starts from
    /// the built-in value instead; `validate` owns its own error reporting,
    /// every other command fails here on an invalid config.
    pub fn load(cli: &Cli) -> Result<Self> {
        if cli.is_init() {
            return Ok(Self::builtin());
        }

        let Some(config_path) = util::find_config_file(&cli.config) else {
            log!(
                "error";
                "config file '{}' not found. Run 'sitecfg init' to create one.",
                cli.config.display()
            );
            std::process::exit(1);
        };

        let mut config = Self::from_path(&config_path)?;
        config.config_path = config_path;

        debug!(
            "config";
            "loaded {} ({} top-level nav entries)",
            config.config_path.display(),
            config.theme_config.sidebar.nav.len()
        );

        if !cli.is_validate() {
            config.validate()?;
        }

        Ok(config)
    }

    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    ///
    /// The authoring format is TOML; a `.json` file is accepted with the
    /// same key names.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Self::parse_json_with_ignored(&content)?,
            _ => Self::parse_with_ignored(&content)?,
        };

        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
            if !Self::prompt_continue()? {
                bail!("Aborted due to unknown config fields");
            }
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>)> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    /// Parse JSON content, collecting any unknown fields.
    fn parse_json_with_ignored(content: &str) -> Result<(Self, Vec<String>)> {
        let mut ignored = Vec::new();
        let mut deserializer = serde_json::Deserializer::from_str(content);
        let config = serde_ignored::deserialize(&mut deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        deserializer.end()?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        eprintln!();
        log!("warning"; "unknown fields in {}:", display_path);
        log!("warning"; "the renderer will not see:");
        for field in fields {
            eprintln!("- {}", field);
        }
        eprintln!();
    }

    /// Prompt user to continue. Returns true only if user explicitly confirms.
    fn prompt_continue() -> Result<bool> {
        use std::io::{self, Write};

        eprint!("Continue? [y/N] ");
        io::stderr().flush()?;

        let mut input = String::new();
        io::stdin().read_line(&mut input)?;

        let input = input.trim().to_lowercase();
        // Default no (empty input), explicit "y" or "yes" to continue
        Ok(input == "y" || input == "yes")
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Run all section validations, collecting every defect with its
    /// position in the tree.
    pub fn diagnostics(&self) -> ConfigDiagnostics {
        let mut diag = ConfigDiagnostics::new();

        if self.theme.is_empty() {
            diag.error_with_hint(
                FieldPath::new("theme"),
                "theme identifier is empty",
                "the renderer loads its theme package by this name, e.g. \"cosmos\"",
            );
        }
        if self.title.is_empty() {
            diag.error(FieldPath::new("title"), "site title is empty");
        }
        self.theme_config.validate(&mut diag);

        diag
    }

    /// Validate the configuration.
    ///
    /// Prints collected warnings and returns all errors at once.
    pub fn validate(&self) -> Result<()> {
        let diag = self.diagnostics();
        diag.print_warnings();
        diag.into_result()
            .map_err(|e| ConfigError::Diagnostics(e).into())
    }

    // ========================================================================
    // emission
    // ========================================================================

    /// Serialize to the renderer's JSON schema.
    pub fn to_renderer_json(&self, pretty: bool) -> Result<String> {
        let json = if pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        };
        Ok(json)
    }

    /// Serialize to a `module.exports` JS module, the shape the renderer's
    /// `config.js` expects.
    pub fn to_module_exports(&self) -> Result<String> {
        Ok(format!(
            "module.exports = {};\n",
            serde_json::to_string_pretty(self)?
        ))
    }
}

// ============================================================================
// Test Helpers
// ============================================================================

/// Parse config from TOML, panicking on unknown fields (to catch config
/// typos in tests).
#[cfg(test)]
pub fn test_parse_config(content: &str) -> SiteConfig {
    let (parsed, ignored) = SiteConfig::parse_with_ignored(content).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================
