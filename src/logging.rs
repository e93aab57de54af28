//! File logging setup.
//!
//! The game owns the terminal, so log output only ever goes to a file.

use std::time::Instant;

use anyhow::{Context, Result};

use crate::config::AppConfig;

/// Install the global logger if a log path is configured.
///
/// Returns `false` when logging stays disabled.
pub fn init(config: &AppConfig) -> Result<bool> {
    let Some(path) = &config.log_path else {
        return Ok(false);
    };

    let file = fern::log_file(path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;
    let started = Instant::now();

    fern::Dispatch::new()
        .format(move |out, message, record| {
            let elapsed = started.elapsed();
            out.finish(format_args!(
                "[{:>6}.{:03}s {:<5} {}] {}",
                elapsed.as_secs(),
                elapsed.subsec_millis(),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(config.log_level)
        .chain(file)
        .apply()
        .context("logger already installed")?;

    Ok(true)
}
