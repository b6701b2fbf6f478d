//! Background job scheduler.
//!
//! Initialises a [`JobScheduler`] at server startup and registers the
//! recurring directory sync.

use tokio_cron_scheduler::{Job, JobScheduler, JobSchedulerError};

use crate::api::AppState;

/// Builds and starts the background job scheduler.
///
/// Returns the running [`JobScheduler`] handle, which must be kept alive
/// for the lifetime of the process — dropping it shuts down all jobs.
///
/// # Errors
///
/// Returns [`JobSchedulerError`] if the scheduler cannot be initialised,
/// the sync job cannot be registered (e.g., an invalid cron expression in
/// `HOMEPROS_SYNC_SCHEDULE`), or the scheduler fails to start.
pub async fn build_scheduler(state: AppState) -> Result<JobScheduler, JobSchedulerError> {
    let scheduler = JobScheduler::new().await?;

    register_sync_job(&scheduler, state).await?;

    scheduler.start().await?;
    Ok(scheduler)
}

/// Register the recurring sheet sync on the configured cron schedule
/// (default every six hours). A failed fetch inside the job degrades to
/// sample data like any other sync; the job itself never errors.
async fn register_sync_job(
    scheduler: &JobScheduler,
    state: AppState,
) -> Result<(), JobSchedulerError> {
    let schedule = state.config.sync_schedule.clone();

    let job = Job::new_async(schedule.as_str(), move |_uuid, _lock| {
        let state = state.clone();

        Box::pin(async move {
            tracing::info!("scheduler: starting directory sync");
            let count = crate::sync::run_sync(&state).await;
            tracing::info!(count, "scheduler: directory sync complete");
        })
    })?;

    scheduler.add(job).await?;
    Ok(())
}
