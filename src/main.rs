use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use color_eyre::eyre::{Result, WrapErr, eyre};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use homedeck::application::{FavoritesRepository, ListingStore, LoadListingsUseCase};
use homedeck::domain::ports::DatasetSource;
use homedeck::infrastructure::{
    AppConfig, CliArgs, FileDatasetSource, FileKeyValueStore, HttpDatasetSource, StorageManager,
};
use homedeck::presentation::App;

fn init_logging(config: &AppConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.to_string()));

    if let Some(log_path) = config.effective_log_path() {
        if let Some(parent) = log_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)
            .wrap_err_with(|| format!("failed to open log file {}", log_path.display()))?;

        let file_layer = fmt::layer()
            .with_writer(file)
            .with_ansi(false)
            .with_target(true)
            .with_thread_ids(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(file_layer)
            .init();

        info!(path = %log_path.display(), "Logging initialized");
    } else {
        tracing_subscriber::registry().with(filter).init();
    }

    Ok(())
}

fn load_config() -> Result<AppConfig> {
    let args = CliArgs::parse();
    let storage = StorageManager::new().wrap_err("failed to locate configuration directory")?;
    let mut config = storage
        .load_config(args.config.as_deref())
        .wrap_err("failed to load configuration")?;
    config.merge_with_args(args);
    Ok(config)
}

fn dataset_source(config: &AppConfig) -> Result<Arc<dyn DatasetSource>> {
    if let Some(path) = &config.data_file {
        return Ok(Arc::new(FileDatasetSource::new(path)));
    }

    let source = HttpDatasetSource::new(
        config.dataset_url.clone(),
        Duration::from_secs(config.request_timeout_secs),
    )?;
    Ok(Arc::new(source))
}

fn create_app(config: &AppConfig) -> Result<App> {
    let storage_path = config
        .effective_storage_path()
        .ok_or_else(|| eyre!("no storage path configured and no data directory available"))?;
    info!(path = %storage_path.display(), "Using favorites storage");

    let key_value = Arc::new(FileKeyValueStore::new(storage_path));
    let store = ListingStore::new(FavoritesRepository::new(key_value));
    let load_use_case = LoadListingsUseCase::new(dataset_source(config)?);

    Ok(App::new(
        store,
        load_use_case,
        config.ui.default_sort,
        config.contact_email.clone(),
    ))
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let config = load_config()?;
    init_logging(&config)?;

    info!(version = homedeck::VERSION, "Starting homedeck");

    let app = create_app(&config)?;

    let mut terminal = ratatui::init();

    let result = app.run(&mut terminal).await;

    ratatui::restore();

    result
}
