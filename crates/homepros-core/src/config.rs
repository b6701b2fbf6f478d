use crate::app_config::{AppConfig, Environment, DEFAULT_SHEET_CSV_URL};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a config value fails to parse.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the
/// process, without touching `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a config value fails to parse.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// The parsing/validation logic is decoupled from the actual environment so
/// it can be tested with a pure `HashMap` lookup — no `set_var`/`remove_var`
/// needed. Every variable has a default; nothing is required.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::net::SocketAddr;
    use std::path::PathBuf;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_addr = |var: &str, default: &str| -> Result<SocketAddr, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar {
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

    let parse_bool = |var: &str, default: &str| -> Result<bool, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<bool>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let env = parse_environment(&or_default("HOMEPROS_ENV", "development"));
    let bind_addr = parse_addr("HOMEPROS_BIND_ADDR", "0.0.0.0:3000")?;
    let log_level = or_default("HOMEPROS_LOG_LEVEL", "info");
    let sheet_csv_url = or_default("HOMEPROS_SHEET_CSV_URL", DEFAULT_SHEET_CSV_URL);
    let fetch_timeout_secs = parse_u64("HOMEPROS_FETCH_TIMEOUT_SECS", "30")?;
    let user_agent = or_default("HOMEPROS_USER_AGENT", "homepros/0.1 (directory-sync)");
    let settings_path = PathBuf::from(or_default("HOMEPROS_SETTINGS_PATH", "./data/settings.json"));
    let sync_schedule = or_default("HOMEPROS_SYNC_SCHEDULE", "0 0 */6 * * *");
    let sync_on_start = parse_bool("HOMEPROS_SYNC_ON_START", "true")?;

    Ok(AppConfig {
        env,
        bind_addr,
        log_level,
        sheet_csv_url,
        fetch_timeout_secs,
        user_agent,
        settings_path,
        sync_schedule,
        sync_on_start,
    })
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
