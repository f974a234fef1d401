//! Wiring from [`Settings`] to a running server.

use std::sync::Arc;

use anyhow::Context;
use shelf_authz::{StaticCredentialStore, TokenService};
use shelf_kernel::{settings::Settings, InitCtx, ModuleRegistry};

use crate::modules::{self, books::store::BookStore};

/// Seeded login accounts.
pub fn credentials() -> StaticCredentialStore {
    StaticCredentialStore::seeded()
}

/// Token service keyed by the configured secret.
pub fn token_service(settings: &Settings) -> TokenService {
    TokenService::new(
        settings.auth.jwt_secret.as_bytes(),
        settings.auth.token_ttl_secs,
    )
}

/// Registry with every module wired to fresh seeded stores.
pub fn build_registry(settings: &Settings) -> ModuleRegistry {
    let mut registry = ModuleRegistry::new();
    modules::register_all(
        &mut registry,
        Arc::new(credentials()),
        Arc::new(token_service(settings)),
        Arc::new(BookStore::seeded()),
    );
    registry
}

/// Initialize modules, serve until Ctrl-C, then stop modules.
pub async fn run(settings: Settings) -> anyhow::Result<()> {
    let registry = build_registry(&settings);
    let ctx = InitCtx {
        settings: &settings,
    };

    registry
        .init_all(&ctx)
        .await
        .context("module initialization failed")?;
    registry
        .start_all(&ctx)
        .await
        .context("module start failed")?;

    let served = shelf_http::start_server(&registry, &settings, shutdown_signal()).await;

    registry.stop_all().await?;
    served
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("shutdown signal received"),
        Err(err) => {
            tracing::error!(error = %err, "unable to listen for shutdown signal");
            std::future::pending::<()>().await;
        }
    }
}
