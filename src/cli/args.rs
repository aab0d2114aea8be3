//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// sitecfg - typed site configuration for cosmos-themed documentation sites
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: sitecfg.toml, searched upward from cwd)
    #[arg(short = 'C', long, default_value = "sitecfg.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Enable verbose output for debugging
    #[arg(long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Initialize a config file from the built-in site configuration
    #[command(visible_alias = "i")]
    Init {
        /// Site directory name/path (relative to current directory)
        #[arg(value_hint = clap::ValueHint::DirPath)]
        name: Option<PathBuf>,
    },

    /// Validate the config and report every defect with its position
    #[command(visible_alias = "v")]
    Validate {
        #[command(flatten)]
        args: ValidateArgs,
    },

    /// Emit the config in the renderer's schema (JSON or a JS module)
    #[command(visible_alias = "e")]
    Emit {
        #[command(flatten)]
        args: EmitArgs,
    },

    /// List the navigation routes as JSON
    #[command(visible_alias = "q")]
    Query {
        #[command(flatten)]
        args: QueryArgs,
    },
}

/// Validate command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct ValidateArgs {
    /// Report validation errors without failing
    #[arg(long, short = 'w')]
    pub warn_only: bool,
}

/// Emit command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct EmitArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    pub format: EmitFormat,

    /// Pretty-print JSON output (the js format is always pretty)
    #[arg(short, long)]
    pub pretty: bool,

    /// Write output to file instead of stdout
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,
}

/// Renderer output format.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmitFormat {
    /// Plain JSON
    Json,
    /// `module.exports = ...` JS module
    Js,
}

/// Query command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct QueryArgs {
    /// Only list routes inside the site (skip external URLs)
    #[arg(short, long)]
    pub internal: bool,

    /// Pretty-print JSON output
    #[arg(short, long)]
    pub pretty: bool,

    /// Write output to file instead of stdout
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,
}

#[allow(unused)]
impl Cli {
    pub const fn is_init(&self) -> bool {
        matches!(self.command, Commands::Init { .. })
    }
    pub const fn is_validate(&self) -> bool {
        matches!(self.command, Commands::Validate { .. })
    }
    pub const fn is_emit(&self) -> bool {
        matches!(self.command, Commands::Emit { .. })
    }
    pub const fn is_query(&self) -> bool {
        matches!(self.command, Commands::Query { .. })
    }
}
