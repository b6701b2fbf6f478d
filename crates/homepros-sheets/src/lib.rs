pub mod client;
pub mod csv;
pub mod error;
pub mod record;
pub mod sample;

pub use client::SheetsClient;
pub use error::SheetsError;
pub use sample::sample_services;

use homepros_core::Service;

/// Loads the current directory contents from the published sheet export.
///
/// Any failure — network error, non-2xx status, empty export, or an export
/// that parses to zero usable rows — is logged and degrades to the fixed
/// sample set, so the returned collection is never empty and this function
/// never fails. Single attempt per call; no retries.
pub async fn load_services(client: &SheetsClient, url: &str) -> Vec<Service> {
    match client.fetch_csv(url).await {
        Ok(body) => {
            let records = record::records_from_table(&csv::parse_table(&body));
            if records.is_empty() {
                tracing::warn!(url, "sheet export parsed to zero usable rows, using sample data");
                return sample_services();
            }
            tracing::info!(count = records.len(), "loaded services from sheet export");
            records
        }
        Err(e) => {
            tracing::warn!(error = %e, url, "sheet fetch failed, using sample data");
            sample_services()
        }
    }
}
