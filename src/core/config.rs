// src/core/config.rs
use std::env;
use std::path::PathBuf;
use log::LevelFilter;

use crate::generators::DEFAULT_MAX_ATTEMPTS;
use crate::models::{PartsOptions, PasswordGenerationOptions};

// Configuration for the password generator
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    // Password Generation
    pub default_password_length: usize,
    pub default_password_parts: usize,
    pub default_password_delimiter: String,
    pub default_password_extended: bool,
    pub max_generation_attempts: usize,

    // Logging
    pub log_level: LevelFilter,
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        let parts = PartsOptions::default();
        Self {
            // Password Generation
            default_password_length: parts.length,
            default_password_parts: parts.amount,
            default_password_delimiter: parts.delimiter,
            default_password_extended: false,
            max_generation_attempts: DEFAULT_MAX_ATTEMPTS,

            // Logging
            log_level: LevelFilter::Warn,
            log_file: None,
        }
    }
}

// Shared by the MAX_GENERATION_ATTEMPTS variable and the --max-attempts flag
pub fn parse_max_attempts(value: &str) -> Result<usize, String> {
    match value.trim().parse::<usize>() {
        Ok(attempts) if attempts > 0 => Ok(attempts),
        Ok(_) => Err("must be at least 1".to_string()),
        Err(e) => Err(e.to_string()),
    }
}

impl Config {
    // Load configuration from environment variables. Problems are returned
    // rather than logged, the logger is configured from the result.
    pub fn load() -> (Self, Vec<String>) {
        Self::from_lookup(|key| env::var(key).ok())
    }

    // Build configuration from any key lookup, invalid values keep the default
    pub fn from_lookup<F>(lookup: F) -> (Self, Vec<String>)
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();
        let mut warnings = Vec::new();

        // Password Generation
        if let Some(val) = lookup("DEFAULT_PASSWORD_LENGTH") {
            match val.parse() {
                Ok(length) => config.default_password_length = length,
                Err(_) => warnings.push(format!("Invalid DEFAULT_PASSWORD_LENGTH '{}', using default", val)),
            }
        }

        if let Some(val) = lookup("DEFAULT_PASSWORD_PARTS") {
            match val.parse::<usize>() {
                Ok(parts) if parts > 0 => config.default_password_parts = parts,
                _ => warnings.push(format!("Invalid DEFAULT_PASSWORD_PARTS '{}', using default", val)),
            }
        }

        if let Some(delimiter) = lookup("DEFAULT_PASSWORD_DELIMITER") {
            config.default_password_delimiter = delimiter;
        }

        if let Some(val) = lookup("DEFAULT_PASSWORD_EXTENDED") {
            match val.parse() {
                Ok(extended) => config.default_password_extended = extended,
                Err(_) => warnings.push(format!("Invalid DEFAULT_PASSWORD_EXTENDED '{}', using default", val)),
            }
        }

        if let Some(val) = lookup("MAX_GENERATION_ATTEMPTS") {
            match parse_max_attempts(&val) {
                Ok(attempts) => config.max_generation_attempts = attempts,
                Err(e) => warnings.push(format!("Invalid MAX_GENERATION_ATTEMPTS '{}' ({}), using default", val, e)),
            }
        }

        // Logging
        if let Some(level) = lookup("LOG_LEVEL") {
            match level.to_lowercase().as_str() {
                "off" => config.log_level = LevelFilter::Off,
                "error" => config.log_level = LevelFilter::Error,
                "warn" => config.log_level = LevelFilter::Warn,
                "info" => config.log_level = LevelFilter::Info,
                "debug" => config.log_level = LevelFilter::Debug,
                "trace" => config.log_level = LevelFilter::Trace,
                _ => warnings.push(format!("Unknown log level '{}', using {}", level, config.log_level)),
            }
        }

        if let Some(file) = lookup("LOG_FILE") {
            if !file.trim().is_empty() {
                config.log_file = Some(PathBuf::from(file));
            }
        }

        (config, warnings)
    }

    // Generation options seeded from the configured defaults
    pub fn default_options(&self) -> PasswordGenerationOptions {
        PasswordGenerationOptions {
            extended: self.default_password_extended,
            parts: PartsOptions {
                amount: self.default_password_parts,
                length: self.default_password_length,
                delimiter: self.default_password_delimiter.clone(),
            },
            ..Default::default()
        }
    }
}
