//! Config scaffolding for new sites.

use anyhow::{Context, Result, bail};
use std::{fs, path::Path};

use crate::cli::Cli;
use crate::config::SiteConfig;
use crate::log;

/// Generate the config file content: a short header plus the full
/// configuration in the authoring format.
pub fn generate_config_template(config: &SiteConfig) -> Result<String> {
    let mut out = String::new();

    out.push_str(&format!(
        "# sitecfg configuration file (v{})\n",
        env!("CARGO_PKG_VERSION")
    ));
    out.push_str("# Emit the renderer config with `sitecfg emit --format js`.\n\n");
    out.push_str(&toml::to_string_pretty(config)?);

    Ok(out)
}

/// Write the built-in configuration as a new config file.
///
/// With a `name`, the file is created inside that directory (created if
/// missing); otherwise in the current directory. Never overwrites.
pub fn new_config(config: &SiteConfig, cli: &Cli, name: Option<&Path>) -> Result<()> {
    let cwd = std::env::current_dir().context("Failed to get current working directory")?;
    let dir = match name {
        Some(name) => cwd.join(name),
        None => cwd,
    };
    let path = dir.join(&cli.config);

    if path.exists() {
        bail!("'{}' already exists", path.display());
    }

    fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create directory '{}'", dir.display()))?;

    let content = generate_config_template(config)?;
    fs::write(&path, content)
        .with_context(|| format!("Failed to write config file '{}'", path.display()))?;

    log!("init"; "created {}", path.display());
    Ok(())
}
