use super::app_config::LogLevel;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "homedeck",
    version,
    about = "A lightweight terminal browser for published real-estate listings",
    long_about = None
)]
pub struct CliArgs {
    /// Configuration file path.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log file path.
    #[arg(long, value_name = "PATH")]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevel>,

    /// URL of the published CSV dataset.
    #[arg(long, value_name = "URL", env = "HOMEDECK_DATASET_URL")]
    pub dataset_url: Option<String>,

    /// Read listings from a local CSV file instead of the network.
    #[arg(short = 'f', long, value_name = "PATH")]
    pub data_file: Option<PathBuf>,

    /// File backing the favorites store.
    #[arg(long, value_name = "PATH")]
    pub storage_path: Option<PathBuf>,
}
