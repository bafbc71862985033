use std::{future::Future, net::SocketAddr};

use axum::Router;
use configs::AppConfig;
use service::{expenses::ExpenseService, storage::json_array_store::JsonArrayStore};
use tracing::info;

use crate::cors::build_cors;
use crate::routes::{self, AppState};

/// Initialize the data file and assemble the router from `config`.
pub async fn build_app(config: &AppConfig) -> anyhow::Result<Router> {
    let store = JsonArrayStore::new(&config.storage.data_file).await?;
    info!(data_file = %store.path().display(), "data file ready");

    let state = AppState::new(ExpenseService::new(store));
    Ok(routes::build_router(state, build_cors(&config.cors)))
}

/// Serve until `shutdown` resolves, then drain in-flight requests.
pub async fn run_with_shutdown<F>(config: AppConfig, shutdown: F) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let app = build_app(&config).await?;

    let addr: SocketAddr = config.bind_addr().parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "listening");
    axum::serve(listener, app).with_graceful_shutdown(shutdown).await?;
    Ok(())
}
