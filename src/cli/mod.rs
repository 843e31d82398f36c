use clap::{ Parser, Subcommand, ValueEnum };
use std::path::PathBuf;

pub mod commands;
pub mod ui;

#[derive(Parser)]
#[command(
    name = "kantine-buildcheck",
    about = "Verifies the Kantine Wrapper build output before release",
    version,
    author,
    long_about = None
)]
pub struct BuildCheckCli {
    /// Sets the log level (error, warn, info, debug, trace)
    #[arg(short, long, global = true, default_value = "warn")]
    pub log_level: String,

    /// Path to a YAML configuration file overriding the default rules
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    pub output_format: OutputFormat,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Verify the build output (default)
    Verify {
        /// Build-output directory; defaults to dist/ next to the harness
        #[arg(short, long)]
        dist_dir: Option<PathBuf>,
    },

    /// List the checks scheduled for each artifact
    Rules {
        /// Build-output directory; defaults to dist/ next to the harness
        #[arg(short, long)]
        dist_dir: Option<PathBuf>,
    },
}
