//! Renderer config emission.

use anyhow::{Context, Result};
use std::fs;

use crate::cli::{EmitArgs, EmitFormat};
use crate::config::SiteConfig;
use crate::log;

/// Emit the config in the renderer's schema, to stdout or a file.
pub fn emit_config(config: &SiteConfig, args: &EmitArgs) -> Result<()> {
    let out = match args.format {
        EmitFormat::Json => config.to_renderer_json(args.pretty)?,
        EmitFormat::Js => config.to_module_exports()?,
    };

    match &args.output {
        Some(path) => {
            fs::write(path, &out)
                .with_context(|| format!("Failed to write '{}'", path.display()))?;
            log!("emit"; "wrote {} config to {}", format_label(args.format), path.display());
        }
        None => {
            if out.ends_with('\n') {
                print!("{out}");
            } else {
                println!("{out}");
            }
        }
    }

    Ok(())
}

const fn format_label(format: EmitFormat) -> &'static str {
    match format {
        EmitFormat::Json => "JSON",
        EmitFormat::Js => "JS",
    }
}
