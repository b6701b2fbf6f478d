//! Shared sync pipeline: fetch the sheet export, swap the store generation.
//!
//! Used by the sync endpoint, the startup sync, and the scheduled job.

use crate::api::AppState;

/// Loads the current sheet contents (or the sample fallback) and replaces
/// the store in one swap. Returns the size of the new generation.
pub async fn run_sync(state: &AppState) -> usize {
    let services =
        homepros_sheets::load_services(&state.sheets, &state.config.sheet_csv_url).await;
    let count = services.len();
    state.store.replace_all(services);
    tracing::info!(count, "service store replaced with new generation");
    count
}
