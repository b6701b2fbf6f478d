mod api;
mod middleware;
mod scheduler;
mod sync;

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use crate::api::{build_app, default_rate_limit_state, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = Arc::new(homepros_core::load_app_config()?);
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let sheets = Arc::new(homepros_sheets::SheetsClient::new(
        config.fetch_timeout_secs,
        &config.user_agent,
    )?);
    let state = AppState {
        store: Arc::new(homepros_store::ServiceStore::new()),
        settings: Arc::new(homepros_store::SettingsStore::open(
            config.settings_path.clone(),
        )),
        sheets,
        config: Arc::clone(&config),
    };

    if config.sync_on_start {
        let count = sync::run_sync(&state).await;
        tracing::info!(count, "initial directory sync complete");
    }

    let _scheduler = scheduler::build_scheduler(state.clone()).await?;

    let app = build_app(state, default_rate_limit_state());

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!(addr = %config.bind_addr, env = %config.env, "homepros server listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to listen for ctrl-c");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("received shutdown signal, starting graceful shutdown");
}
