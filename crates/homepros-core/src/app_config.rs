use std::net::SocketAddr;
use std::path::PathBuf;

/// Published CSV export of the directory spreadsheet.
pub const DEFAULT_SHEET_CSV_URL: &str =
    "https://docs.google.com/spreadsheets/d/1qgXoHfMBMxYdQlLmbiSG8kJSO0vrf8KHeEfiMdQwzQ4/export?format=csv&gid=0";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub bind_addr: SocketAddr,
    pub log_level: String,
    pub sheet_csv_url: String,
    pub fetch_timeout_secs: u64,
    pub user_agent: String,
    pub settings_path: PathBuf,
    /// Six-field cron expression for the background sync job.
    pub sync_schedule: String,
    /// Whether the server runs one sync at startup before serving.
    pub sync_on_start: bool,
}
