use std::sync::Arc;

use arena_catalog::auth::LocalAuth;
use arena_catalog::catalog::Catalog;
use arena_catalog::config::Config;
use arena_catalog::handler::{AppState, handler};
use arena_catalog::store::FileStore;
use arena_catalog::theme::ThemeController;
use lambda_runtime::{Error, service_fn};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Error> {
    // Initialize structured logging with tracing
    let _ = tracing_subscriber::fmt()
        .json()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_current_span(false)
        .with_target(false)
        .with_ansi(false)
        .without_time()
        .try_init();

    let config = Config::from_env();
    let catalog = Catalog::fixture()?;

    let store = Arc::new(FileStore::new(config.theme_store_path.clone()));
    let (theme, load) = ThemeController::start(config.platform_scheme, store);
    // First invocation should already see the saved preference.
    load.wait().await;
    info!(mode = %theme.mode(), store = %config.theme_store_path.display(), "Starting arena catalog");

    let state = AppState {
        catalog: Arc::new(catalog),
        theme,
        auth: Arc::new(LocalAuth::new()),
        config,
    };

    lambda_runtime::run(service_fn(move |event| {
        let state = state.clone();
        async move { handler(&state, event).await }
    }))
    .await
}
