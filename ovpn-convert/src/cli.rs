use std::path::PathBuf;

use clap::{Parser, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "ovpn-convert")]
#[command(about = "Translate OpenVPN client configurations to and from connection profiles")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(clap::Subcommand, Debug)]
pub enum Command {
    /// Import a .ovpn file into a connection profile.
    Import(ImportArgs),
    /// Export a connection profile back to a .ovpn file.
    Export(ExportArgs),
}

#[derive(Parser, Debug)]
pub struct ImportArgs {
    pub file: PathBuf,
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
    /// Write the profile as JSON to this path (readable by `export`).
    #[arg(short, long)]
    pub output: Option<PathBuf>,
    /// Directory inline certificate blocks are extracted into.
    /// Defaults to ~/.cert.
    #[arg(long)]
    pub cert_dir: Option<PathBuf>,
    /// Suppress warnings about skipped directives.
    #[arg(short, long)]
    pub quiet: bool,
}

#[derive(Parser, Debug)]
pub struct ExportArgs {
    /// Profile JSON produced by `import --output`.
    pub profile: PathBuf,
    /// Destination .ovpn file.
    #[arg(short, long)]
    pub output: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
