use std::fs;

use anyhow::{Context, Result};
use colored::Colorize;
use ovpn_config_core::{export, SettingsModel};

use crate::cli::ExportArgs;

pub fn run_export(args: ExportArgs) -> Result<()> {
    let json = fs::read_to_string(&args.profile)
        .with_context(|| format!("failed to read {}", args.profile.display()))?;
    let model: SettingsModel = serde_json::from_str(&json)
        .with_context(|| format!("failed to parse profile {}", args.profile.display()))?;

    let rendered = export(&args.output, &model)
        .with_context(|| format!("failed to export {}", args.output.display()))?;

    for warning in &rendered.warnings {
        eprintln!("{} {warning}", "warning:".yellow().bold());
    }

    println!("wrote {}", args.output.display());
    if let Some((auth_path, _)) = &rendered.auth_file {
        println!("wrote {}", auth_path.display());
    }

    Ok(())
}
