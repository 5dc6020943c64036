use crate::config::DEFAULT_CONFIG_FILE;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "score-gate",
    version,
    about = "Six-face readiness score and release gate for a change"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score a metrics snapshot against a config
    Score(ScoreCommand),
    /// Load and validate a config without scoring
    Validate(ValidateCommand),
    /// Write a starter config
    Init(InitCommand),
}

#[derive(Args)]
pub struct ScoreCommand {
    pub config: PathBuf,
    pub metrics: PathBuf,
    /// Config file merged over the base, in order
    #[arg(long = "overlay", value_name = "FILE")]
    pub overlays: Vec<PathBuf>,
    /// Override the config's profile
    #[arg(long)]
    pub profile: Option<String>,
    #[arg(short, long, value_enum, default_value = "json")]
    pub format: ReportFormat,
    /// Exit with code 2 when the gate rejects the change
    #[arg(long)]
    pub enforce_gate: bool,
}

#[derive(Args)]
pub struct ValidateCommand {
    pub config: PathBuf,
    #[arg(long = "overlay", value_name = "FILE")]
    pub overlays: Vec<PathBuf>,
}

#[derive(Args)]
pub struct InitCommand {
    #[arg(default_value = DEFAULT_CONFIG_FILE)]
    pub path: PathBuf,
    #[arg(long, value_enum, default_value = "toml")]
    pub format: ConfigFileFormat,
    #[arg(long)]
    pub force: bool,
}

#[derive(Clone, ValueEnum)]
pub enum ReportFormat {
    Json,
    Md,
}

#[derive(Clone, ValueEnum)]
pub enum ConfigFileFormat {
    Toml,
    Json,
}
