use std::fs;

use anyhow::{Context, Result};
use colored::Colorize;
use ovpn_config_core::{import_with_options, ImportOptions};

use crate::cli::{ImportArgs, OutputFormat};

pub fn run_import(args: ImportArgs) -> Result<()> {
    let contents = fs::read(&args.file)
        .with_context(|| format!("failed to read {}", args.file.display()))?;
    let options = ImportOptions {
        cert_dir: args.cert_dir.clone(),
    };
    let result = import_with_options(&args.file, &contents, &options)
        .with_context(|| format!("failed to import {}", args.file.display()))?;

    if !args.quiet {
        for diagnostic in &result.diagnostics {
            eprintln!("{} {diagnostic}", "warning:".yellow().bold());
        }
    }

    if let Some(out_path) = &args.output {
        let json = serde_json::to_string_pretty(&result.model)?;
        fs::write(out_path, json)
            .with_context(|| format!("failed to write profile {}", out_path.display()))?;
    }

    match args.format {
        OutputFormat::Text => {
            let ctype = result
                .model
                .connection_type()
                .map(|t| t.to_string())
                .unwrap_or_else(|| "unknown".to_string());
            println!(
                "name={} type={ctype} warnings={}",
                result.name,
                result.diagnostics.len()
            );
            for (key, value) in result.model.iter() {
                println!("{key} = {value}");
            }
            for route in result.model.routes() {
                let metric = route
                    .metric
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| "auto".to_string());
                println!(
                    "route {}/{} via {} metric {metric}",
                    route.dest, route.prefix, route.next_hop
                );
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&result)?),
    }

    Ok(())
}
