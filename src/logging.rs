use std::fs::OpenOptions;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

use crate::config::LoggingConfig;

/// Sends tracing output to the configured file; the terminal belongs to the UI.
pub fn init(config: &LoggingConfig) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(parent) = config.file.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let log_out = OpenOptions::new()
        .write(true)
        .truncate(true)
        .create(true)
        .open(&config.file)?;

    let filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(&config.filter))?;

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(log_out)))
        .try_init()?;
    Ok(())
}
