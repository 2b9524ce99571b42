use crate::app_config::{AppConfig, Environment};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value cannot be parsed or the bounds are inconsistent.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a value cannot be parsed or the bounds are inconsistent.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the process environment so tests can feed a `HashMap`.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::path::PathBuf;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u8 = |var: &str, default: &str| -> Result<u8, ConfigError> {
        let raw = or_default(var, default);
        raw.trim()
            .parse::<u8>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        let raw = or_default(var, default);
        raw.trim()
            .parse::<u32>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let parse_usize = |var: &str, default: &str| -> Result<usize, ConfigError> {
        let raw = or_default(var, default);
        raw.trim()
            .parse::<usize>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let env = parse_environment(&or_default("LEADSCOPE_ENV", "development"));
    let log_level = or_default("LEADSCOPE_LOG_LEVEL", "info");
    let searches_path = PathBuf::from(or_default(
        "LEADSCOPE_SEARCHES_PATH",
        "./data/searches.yaml",
    ));
    let export_dir = PathBuf::from(or_default("LEADSCOPE_EXPORT_DIR", "./exports"));

    let tier_excellent_min = parse_u8("LEADSCOPE_TIER_EXCELLENT_MIN", "80")?;
    let tier_okay_min = parse_u8("LEADSCOPE_TIER_OKAY_MIN", "50")?;
    let preview_min = parse_usize("LEADSCOPE_PREVIEW_MIN", "5")?;
    let preview_max = parse_usize("LEADSCOPE_PREVIEW_MAX", "15")?;
    let price_units_per_block = parse_u32("LEADSCOPE_PRICE_UNITS_PER_BLOCK", "10")?;

    let config = AppConfig {
        env,
        log_level,
        searches_path,
        export_dir,
        tier_excellent_min,
        tier_okay_min,
        preview_min,
        preview_max,
        price_units_per_block,
    };
    validate_app_config(&config)?;

    Ok(config)
}

fn validate_app_config(config: &AppConfig) -> Result<(), ConfigError> {
    validate_tier_thresholds(config.tier_excellent_min, config.tier_okay_min)?;

    if config.preview_min > config.preview_max {
        return Err(ConfigError::Validation(format!(
            "preview minimum {} is above preview maximum {}",
            config.preview_min, config.preview_max
        )));
    }

    Ok(())
}

/// Check that tier minimums are ordered and within the 0-100 score range.
///
/// # Errors
///
/// Returns [`ConfigError::Validation`] when `excellent_min > 100` or
/// `okay_min > excellent_min`.
pub fn validate_tier_thresholds(excellent_min: u8, okay_min: u8) -> Result<(), ConfigError> {
    if excellent_min > 100 {
        return Err(ConfigError::Validation(format!(
            "excellent tier minimum {excellent_min} exceeds 100"
        )));
    }

    if okay_min > excellent_min {
        return Err(ConfigError::Validation(format!(
            "okay tier minimum {okay_min} is above excellent tier minimum {excellent_min}"
        )));
    }

    Ok(())
}

/// Parse a string into an `Environment` variant.
///
/// Unrecognized values default to `Environment::Development`.
fn parse_environment(s: &str) -> Environment {
    match s {
        "production" => Environment::Production,
        "test" => Environment::Test,
        _ => Environment::Development,
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
