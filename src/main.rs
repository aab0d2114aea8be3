//! sitecfg - typed site configuration for cosmos-themed documentation sites.

#![allow(dead_code)]

mod cli;
mod config;
mod logger;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::SiteConfig;

fn main() -> Result<()> {
    let cli: &'static Cli = Box::leak(Box::new(Cli::parse()));

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    logger::set_verbose(cli.verbose);

    let config = SiteConfig::load(cli)?;

    match &cli.command {
        Commands::Init { name } => cli::init::new_config(&config, cli, name.as_deref()),
        Commands::Validate { args } => cli::validate::validate_config(&config, args),
        Commands::Emit { args } => cli::emit::emit_config(&config, args),
        Commands::Query { args } => cli::query::run_query(&config, args),
    }
}
