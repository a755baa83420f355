use crate::config::LoggingConfig;
use crate::constants::{LOG_LEVEL_ENV, LOG_TIMESTAMP_FORMAT};
use anyhow::{Context, Result};
use chrono::Utc;
use log::LevelFilter;

/// Install a global `fern` logger described by `config`.
///
/// Does nothing when logging is disabled. The `DATEKIT_LOG` environment
/// variable overrides the configured level. A process can only install one
/// global logger, so a second call returns an error.
pub fn init(config: &LoggingConfig) -> Result<()> {
    if !config.enabled {
        return Ok(());
    }

    let level = match level_from_env() {
        Some(level) => level,
        None => config.level_filter()?,
    };

    let dispatch = fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {} {}] {}",
                Utc::now().format(LOG_TIMESTAMP_FORMAT),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(level);

    let dispatch = match &config.file {
        Some(path) => dispatch.chain(
            fern::log_file(path).with_context(|| format!("Failed to open log file: {}", path.display()))?,
        ),
        None => dispatch.chain(std::io::stderr()),
    };

    dispatch.apply().context("Failed to install logger")?;
    Ok(())
}

fn level_from_env() -> Option<LevelFilter> {
    level_override(std::env::var(LOG_LEVEL_ENV).ok().as_deref())
}

/// An unparseable override is ignored so the configured level applies.
fn level_override(value: Option<&str>) -> Option<LevelFilter> {
    let level = value?.trim().parse().ok();
    if level.is_none() {
        log::warn!("Ignoring invalid {} value {:?}", LOG_LEVEL_ENV, value);
    }
    level
}
