// Framework bootstrap for the check-in server runtime.

use crate::domain::ports::TokenStore;
use crate::frameworks::config;
use crate::interface_adapters::clients::HttpTokenStore;
use crate::interface_adapters::routes::app;
use crate::interface_adapters::state::{AppState, InMemoryTokenStore};
use std::io::Result;
use std::net::SocketAddr;
use std::sync::Arc;

fn init_runtime() {
    // Load .env locally; safe to ignore when not present.
    let _ = dotenvy::dotenv();

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let json = matches!(std::env::var("LOG_FORMAT").as_deref(), Ok("json"));
    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .json()
            .with_current_span(true)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .init();
    }

    std::panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::capture();
        tracing::error!(%info, ?backtrace, "panic");
    }));
}

pub async fn run(listener: tokio::net::TcpListener, state: AppState) -> Result<()> {
    let address = listener.local_addr()?;
    let app = app(state);

    tracing::info!(%address, "listening");

    // Serve app and report errors rather than panicking.
    axum::serve(listener, app).await.inspect_err(|e| {
        tracing::error!(error = %e, "server error");
    })
}

pub async fn run_with_config() -> Result<()> {
    init_runtime();

    let state = build_state()?;
    let address = SocketAddr::new(config::bind_addr(), config::http_port());

    // Bind TCP listener with error handling.
    let listener = tokio::net::TcpListener::bind(address)
        .await
        .inspect_err(|e| {
            tracing::error!(%address, error = %e, "failed to bind");
        })?;

    run(listener, state).await
}

pub fn build_state() -> Result<AppState> {
    let threshold_m = config::checkin_radius_meters();

    let store: Arc<dyn TokenStore> = match config::token_store_url() {
        Some(url) => {
            let table = config::token_store_table();
            let timeout = config::token_store_timeout();
            let client =
                HttpTokenStore::new(url.clone(), table.clone(), config::token_store_api_key(), timeout)
                    .map_err(|e| {
                        std::io::Error::other(format!("failed to initialize token store client: {e}"))
                    })?;
            tracing::debug!(
                token_store_url = %url,
                token_store_table = %table,
                token_store_timeout_ms = timeout.as_millis(),
                "remote token store configured"
            );
            Arc::new(client)
        }
        None => {
            tracing::warn!("TOKEN_STORE_URL not set; issued tokens are kept in memory");
            Arc::new(InMemoryTokenStore::default())
        }
    };

    tracing::info!(threshold_m, "check-in radius configured");

    Ok(AppState { store, threshold_m })
}
