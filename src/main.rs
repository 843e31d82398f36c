use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{ Context, Result };
use clap::Parser;
use log::info;

use kantine_buildcheck::HarnessConfig;

mod cli;
use cli::{ BuildCheckCli, Commands };

fn main() -> Result<ExitCode> {
    // Parse the command line arguments
    let cli = BuildCheckCli::parse();

    // Setup logging
    setup_logging(&cli.log_level);

    let dist_dir = match &cli.command {
        Some(Commands::Verify { dist_dir }) | Some(Commands::Rules { dist_dir }) => dist_dir.clone(),
        None => None,
    };
    let config = load_config(cli.config.as_ref(), dist_dir)?;

    match &cli.command {
        Some(Commands::Rules { .. }) => {
            cli::commands::rules::execute(config, cli.output_format)?;
            Ok(ExitCode::SUCCESS)
        }
        Some(Commands::Verify { .. }) | None => {
            let passed = cli::commands::verify::execute(config, cli.output_format)?;
            Ok(if passed { ExitCode::SUCCESS } else { ExitCode::FAILURE })
        }
    }
}

fn load_config(path: Option<&PathBuf>, dist_dir: Option<PathBuf>) -> Result<HarnessConfig> {
    let mut config = match path {
        Some(path) =>
            HarnessConfig::from_file(path).with_context(||
                format!("Loading config from {}", path.display())
            )?,
        None => HarnessConfig::default(),
    };

    if let Some(dist_dir) = dist_dir {
        config.dist_dir = dist_dir;
    }

    Ok(config)
}

fn setup_logging(log_level: &str) {
    // Set up the logger based on the log level
    let level = match log_level.to_lowercase().as_str() {
        "trace" => log::LevelFilter::Trace,
        "debug" => log::LevelFilter::Debug,
        "info" => log::LevelFilter::Info,
        "warn" => log::LevelFilter::Warn,
        "error" => log::LevelFilter::Error,
        _ => log::LevelFilter::Warn,
    };

    env_logger::Builder::new().filter_level(level).init();

    info!("Logger initialized with level: {}", log_level);
}
