//! Runs the admin endpoints over the in-memory user store until Ctrl+C or SIGTERM.

use std::time::Duration;

use anyhow::Context;
use axum::Router;
use tokio::net::TcpListener;
use tokio::signal;

use crate::api::routes::create_router;
use crate::auth::{InMemoryUserStore, SUPERUSER};
use crate::config::settings::Settings;
use crate::state::AppState;

/// HTTP server manager
pub struct Server {
    settings: Settings,
}

impl Server {
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    /// Builds the router over a store seeded with the superuser.
    pub async fn build_router(&self) -> anyhow::Result<Router> {
        let store = InMemoryUserStore::with_superuser(&self.settings.auth.initial_password)
            .await
            .context("Failed to seed superuser")?;
        tracing::info!(superuser = SUPERUSER, "User store initialized");

        let state = AppState::from_memory_store(store);
        let timeout = Duration::from_secs(self.settings.server.request_timeout);

        Ok(create_router(state, timeout))
    }

    /// Seeds the store, binds `server.host:server.port` and serves until shutdown.
    pub async fn run(self) -> anyhow::Result<()> {
        tracing::info!(
            app_name = %self.settings.application.name,
            app_version = %self.settings.application.version,
            request_timeout_secs = self.settings.server.request_timeout,
            log_level = %self.settings.logger.level,
            "Application starting"
        );

        let router = self.build_router().await?;

        let address = self.settings.server.address();
        let listener = TcpListener::bind(&address)
            .await
            .with_context(|| format!("Failed to bind to {address}"))?;

        tracing::info!(address = %address, "Admin endpoints listening");

        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server shutdown complete");

        Ok(())
    }
}

/// Resolves on Ctrl+C or SIGTERM.
///
/// If a handler cannot be installed the failure is logged and that signal
/// is never awaited.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}
