//! Application configuration.

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::application::services::contact::DEFAULT_AGENCY_EMAIL;
use crate::domain::query::SortMode;

use super::args::CliArgs;

const APP_NAME: &str = "homedeck";
const APP_QUALIFIER: &str = "com";
const APP_ORGANIZATION: &str = "alphaprime";

/// Published listing sheet.
pub const DEFAULT_DATASET_URL: &str = "https://docs.google.com/spreadsheets/d/e/2PACX-1vTWkbGh93kfeN-Sj2LNMg9nTus2h3pwrFOXjQ7IESLwN_NpmUuHr-aZdoyum5wyFPWWcWb4iiPFvPmH/pub?gid=0&single=true&output=csv";

/// Log level configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Trace level.
    Trace,
    /// Debug level.
    Debug,
    /// Info level.
    #[default]
    Info,
    /// Warning level.
    Warn,
    /// Error level.
    Error,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Trace => write!(f, "trace"),
            Self::Debug => write!(f, "debug"),
            Self::Info => write!(f, "info"),
            Self::Warn => write!(f, "warn"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Application configuration, read from `config.toml` and overridden by CLI.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Configuration file path.
    #[serde(skip)]
    pub config: Option<PathBuf>,

    /// Log file path.
    #[serde(skip)]
    pub log_path: Option<PathBuf>,

    /// Local CSV file used instead of the remote dataset.
    #[serde(skip)]
    pub data_file: Option<PathBuf>,

    /// Log verbosity level.
    #[serde(default)]
    pub log_level: LogLevel,

    /// Published CSV document with the listings.
    #[serde(default = "default_dataset_url")]
    pub dataset_url: String,

    /// Timeout for the dataset request, in seconds.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// File backing the key-value store (favorites).
    #[serde(default)]
    pub storage_path: Option<PathBuf>,

    /// Mailbox receiving contact form messages.
    #[serde(default = "default_contact_email")]
    pub contact_email: String,

    /// UI configuration.
    #[serde(default)]
    pub ui: UiConfig,
}

/// UI configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UiConfig {
    /// Sort mode applied at startup and after a filter reset.
    #[serde(default)]
    pub default_sort: SortMode,
}

fn default_dataset_url() -> String {
    DEFAULT_DATASET_URL.to_string()
}

const fn default_request_timeout_secs() -> u64 {
    30
}

fn default_contact_email() -> String {
    DEFAULT_AGENCY_EMAIL.to_string()
}

impl AppConfig {
    /// Merges CLI arguments into the configuration.
    pub fn merge_with_args(&mut self, args: CliArgs) {
        if let Some(config_path) = args.config {
            self.config = Some(config_path);
        }
        if let Some(log_path) = args.log_path {
            self.log_path = Some(log_path);
        }
        if let Some(log_level) = args.log_level {
            self.log_level = log_level;
        }
        if let Some(dataset_url) = args.dataset_url {
            self.dataset_url = dataset_url;
        }
        if let Some(data_file) = args.data_file {
            self.data_file = Some(data_file);
        }
        if let Some(storage_path) = args.storage_path {
            self.storage_path = Some(storage_path);
        }
    }

    fn project_dirs() -> Option<ProjectDirs> {
        ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME)
    }

    /// Returns default config directory.
    #[must_use]
    pub fn default_config_dir() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Returns default log file path.
    #[must_use]
    pub fn default_log_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.data_dir().join("homedeck.log"))
    }

    /// Returns default key-value storage path.
    #[must_use]
    pub fn default_storage_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.data_dir().join("storage.json"))
    }

    /// Returns effective log path.
    #[must_use]
    pub fn effective_log_path(&self) -> Option<PathBuf> {
        self.log_path.clone().or_else(Self::default_log_path)
    }

    /// Returns effective key-value storage path.
    #[must_use]
    pub fn effective_storage_path(&self) -> Option<PathBuf> {
        self.storage_path.clone().or_else(Self::default_storage_path)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            config: None,
            log_path: None,
            data_file: None,
            log_level: LogLevel::Info,
            dataset_url: default_dataset_url(),
            request_timeout_secs: default_request_timeout_secs(),
            storage_path: None,
            contact_email: default_contact_email(),
            ui: UiConfig::default(),
        }
    }
}
