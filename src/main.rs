mod cli;
mod config;
mod engine;
mod error;
mod faces;
mod gate;
mod report;
mod snapshot;
#[cfg(test)]
mod test_support;
mod types;

use crate::error::ScoreError;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const GATE_FAILED: i32 = 2;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn init_tracing(verbose: u8, quiet: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(match (quiet, verbose) {
            (true, _) => "error",
            (false, 0) => "warn",
            (false, 1) => "info",
            (false, _) => "debug",
        })
    });

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: cli::Cli) -> Result<i32, ScoreError> {
    match cli.command {
        cli::Commands::Score(cmd) => {
            let loaded = config::load_config(&cmd.config, &cmd.overlays, cmd.profile.as_deref())?;
            let cfg = loaded.config;
            let (metrics, metrics_bytes) = snapshot::load_metrics(&cmd.metrics)?;
            let result = engine::evaluate(&cfg, &metrics);
            let gate_ok = result.gate_ok;

            let output_format = match cmd.format {
                cli::ReportFormat::Json => report::OutputFormat::Json,
                cli::ReportFormat::Md => report::OutputFormat::Md,
            };
            let mut inputs = loaded
                .sources
                .iter()
                .enumerate()
                .map(|(index, source)| {
                    let role = if index == 0 { "config" } else { "overlay" };
                    report::describe_input(role, &source.path, &source.bytes)
                })
                .collect::<Vec<_>>();
            inputs.push(report::describe_input("metrics", &cmd.metrics, &metrics_bytes));

            let score_report = report::build_report(result, cfg.gate, inputs);
            let rendered = report::render(&score_report, output_format)?;
            println!("{rendered}");

            if cmd.enforce_gate && !gate_ok {
                info!("gate enforced; exiting with code {}", exit_code::GATE_FAILED);
                Ok(exit_code::GATE_FAILED)
            } else {
                Ok(exit_code::SUCCESS)
            }
        }
        cli::Commands::Validate(cmd) => {
            let cfg = config::load_config(&cmd.config, &cmd.overlays, None)?.config;
            println!("config ok: {}", cmd.config.display());
            let resolution = if cfg.profile_weights().is_some() {
                "defined"
            } else {
                "not in external_weights; faces weighted 1.0"
            };
            println!("profile: {} ({resolution})", cfg.profile);
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Init(cmd) => {
            if cmd.path.exists() && !cmd.force {
                return Err(ScoreError::FileExists(cmd.path.display().to_string()));
            }
            let format = match cmd.format {
                cli::ConfigFileFormat::Toml => config::ConfigFormat::Toml,
                cli::ConfigFileFormat::Json => config::ConfigFormat::Json,
            };
            let rendered = config::render_config(&types::config::ScoreConfig::starter(), format)?;
            if let Some(parent) = cmd.path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&cmd.path, rendered)?;
            println!("wrote starter config: {}", cmd.path.display());
            Ok(exit_code::SUCCESS)
        }
    }
}

fn main() {
    let cli = cli::Cli::parse();
    init_tracing(cli.verbose, cli.quiet);
    match run(cli) {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            let message = e.to_string().replace('\n', " ");
            eprintln!("error: {}", message);
            std::process::exit(exit_code::RUNTIME_FAILURE);
        }
    }
}
