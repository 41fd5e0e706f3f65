mod api;
mod middleware;
mod store;

use std::sync::Arc;
use std::time::Duration;

use mirrorme_chat::PeerResponder;
use mirrorme_match::PeerDirectory;
use tokio::sync::Mutex;
use tracing_subscriber::EnvFilter;

use crate::api::{build_app, default_rate_limit_state, AppState};
use crate::store::{JournalStore, SessionStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = mirrorme_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let directory = match &config.peers_path {
        Some(path) => PeerDirectory::from_yaml(path)?,
        None => PeerDirectory::builtin(),
    };
    tracing::info!(peers = directory.peer_count(), "peer roster loaded");

    let responder = config
        .reply_seed
        .map_or_else(PeerResponder::default, PeerResponder::from_seed);

    let state = AppState {
        directory: Arc::new(directory),
        journal: JournalStore::default(),
        sessions: SessionStore::default(),
        responder: Arc::new(Mutex::new(responder)),
        analysis_delay: Duration::from_millis(config.analysis_delay_ms),
        matching_delay: Duration::from_millis(config.matching_delay_ms),
        max_entry_chars: config.max_entry_chars,
    };
    let app = build_app(state, default_rate_limit_state());

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!(addr = %config.bind_addr, env = %config.env, "listening");
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
