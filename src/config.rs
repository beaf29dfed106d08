// src/config.rs
use std::env;
use log::LevelFilter;

use crate::generators;
use crate::strength::ScorerMode;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    // Strength analysis
    pub scorer: ScorerMode,

    // Password Generation
    pub default_password_length: usize,
}

pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Warn;

impl Default for Config {
    fn default() -> Self {
        Self {
            scorer: ScorerMode::Auto,
            default_password_length: generators::DEFAULT_LENGTH,
        }
    }
}

impl Config {
    // Load configuration from environment variables
    pub fn load() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        if let Some(val) = lookup("PASSGAUGE_SCORER") {
            match val.parse() {
                Ok(mode) => config.scorer = mode,
                Err(e) => log::warn!("{}, using {}", e, config.scorer),
            }
        }

        if let Some(val) = lookup("DEFAULT_PASSWORD_LENGTH") {
            match val.trim().parse::<usize>() {
                Ok(length) => config.default_password_length = length.max(generators::MIN_LENGTH),
                Err(_) => log::warn!("Invalid DEFAULT_PASSWORD_LENGTH '{}', using {}", val, config.default_password_length),
            }
        }

        config
    }
}

// Read before the logger exists, so bad values fall back silently
pub fn log_level_from_env() -> LevelFilter {
    env::var("LOG_LEVEL")
        .ok()
        .and_then(|level| parse_level(&level))
        .unwrap_or(DEFAULT_LOG_LEVEL)
}

pub fn parse_level(level: &str) -> Option<LevelFilter> {
    match level.trim().to_lowercase().as_str() {
        "off" => Some(LevelFilter::Off),
        "error" => Some(LevelFilter::Error),
        "warn" | "warning" => Some(LevelFilter::Warn),
        "info" => Some(LevelFilter::Info),
        "debug" => Some(LevelFilter::Debug),
        "trace" => Some(LevelFilter::Trace),
        _ => None,
    }
}
