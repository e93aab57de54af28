//! Runtime configuration read from `BLOCKS_*` environment variables.
//!
//! Values that fail to parse keep their defaults; the problems are collected
//! so they can be logged once logging is up.

use std::env;
use std::path::PathBuf;

use log::LevelFilter;

use crate::core::DropCadence;
use crate::types::TICK_MS;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Fixed seed for the piece generator; entropy when `None`.
    pub seed: Option<u64>,
    pub cadence: DropCadence,
    /// Input poll and frame period.
    pub tick_ms: u32,
    pub muted: bool,
    /// Log file; logging is off when `None`.
    pub log_path: Option<PathBuf>,
    pub log_level: LevelFilter,
    warnings: Vec<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            seed: None,
            cadence: DropCadence::default(),
            tick_ms: TICK_MS,
            muted: false,
            log_path: None,
            log_level: LevelFilter::Info,
            warnings: Vec::new(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from any key lookup, e.g. a map in tests.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        if let Some(raw) = get("BLOCKS_SEED") {
            match raw.parse() {
                Ok(seed) => config.seed = Some(seed),
                Err(_) => config.warn("BLOCKS_SEED", &raw),
            }
        }

        if let Some(raw) = get("BLOCKS_BASE_DROP_MS") {
            match raw.parse::<u32>() {
                Ok(ms) if ms > 0 => config.cadence.base_ms = ms,
                _ => config.warn("BLOCKS_BASE_DROP_MS", &raw),
            }
        }

        if let Some(raw) = get("BLOCKS_DROP_DECAY") {
            match raw.parse::<f64>() {
                Ok(d) if d > 0.0 && d <= 1.0 => config.cadence.decay = d,
                _ => config.warn("BLOCKS_DROP_DECAY", &raw),
            }
        }

        if let Some(raw) = get("BLOCKS_TICK_MS") {
            match raw.parse::<u32>() {
                Ok(ms) if ms > 0 => config.tick_ms = ms,
                _ => config.warn("BLOCKS_TICK_MS", &raw),
            }
        }

        if let Some(raw) = get("BLOCKS_MUTED") {
            match parse_flag(&raw) {
                Some(muted) => config.muted = muted,
                None => config.warn("BLOCKS_MUTED", &raw),
            }
        }

        config.log_path = get("BLOCKS_LOG_PATH").map(PathBuf::from);

        if let Some(raw) = get("BLOCKS_LOG_LEVEL") {
            match raw.parse() {
                Ok(level) => config.log_level = level,
                Err(_) => config.warn("BLOCKS_LOG_LEVEL", &raw),
            }
        }

        config
    }

    /// Variables that were set but rejected.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    fn warn(&mut self, key: &str, raw: &str) {
        self.warnings
            .push(format!("ignoring {key}={raw:?}, using default"));
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
