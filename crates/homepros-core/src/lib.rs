mod app_config;
mod config;
mod service;

pub use app_config::{AppConfig, Environment, DEFAULT_SHEET_CSV_URL};
pub use config::{load_app_config, load_app_config_from_env};
pub use service::{derive_city, duplicate_flag, normalize_phone, source_flag, Service};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for environment variable {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
