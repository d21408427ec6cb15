use anyhow::Result;
use clap::Parser;

mod cli;
mod export_cmd;
mod import_cmd;

use cli::{Cli, Command};

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Import(args) => import_cmd::run_import(args),
        Command::Export(args) => export_cmd::run_export(args),
    }
}
