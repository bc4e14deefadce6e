use crate::app_config::AppConfig;
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
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
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the real environment so it can be tested with a plain
/// `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let require = |var: &str| -> Result<String, ConfigError> {
        lookup(var)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| ConfigError::MissingEnvVar(var.to_string()))
    };

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u32>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_usize = |var: &str, default: &str| -> Result<usize, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<usize>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let database_url = lookup("DATABASE_URL")
        .ok()
        .filter(|v| !v.trim().is_empty());
    let google_api_key = require("GOOGLE_API_KEY")?;

    let log_level = or_default("GMX_LOG_LEVEL", "info");

    let db_max_connections = parse_u32("GMX_DB_MAX_CONNECTIONS", "5")?;
    let db_min_connections = parse_u32("GMX_DB_MIN_CONNECTIONS", "1")?;
    let db_acquire_timeout_secs = parse_u64("GMX_DB_ACQUIRE_TIMEOUT_SECS", "10")?;

    let places_request_timeout_secs = parse_u64("GMX_PLACES_REQUEST_TIMEOUT_SECS", "30")?;
    let places_user_agent = or_default("GMX_PLACES_USER_AGENT", "gmx/0.1 (business-listings)");
    let details_concurrency = parse_usize("GMX_DETAILS_CONCURRENCY", "1")?;
    if details_concurrency == 0 {
        return Err(ConfigError::InvalidEnvVar {
            var: "GMX_DETAILS_CONCURRENCY".to_string(),
            reason: "must be at least 1".to_string(),
        });
    }

    Ok(AppConfig {
        database_url,
        google_api_key,
        log_level,
        db_max_connections,
        db_min_connections,
        db_acquire_timeout_secs,
        places_request_timeout_secs,
        places_user_agent,
        details_concurrency,
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
