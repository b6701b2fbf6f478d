use thiserror::Error;

#[derive(Debug, Error)]
pub enum SheetsError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    #[error("empty CSV export from {url}")]
    EmptyBody { url: String },
}
