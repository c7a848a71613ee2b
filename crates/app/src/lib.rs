//! Mediahub application composition root
//!
//! Composes all domain routers into a single application.

pub mod seed;

use axum::{routing::get, Router};
use mediahub_accounts::AccountsState;
use mediahub_auth::{AuthConfig, TokenService};
use mediahub_catalog::{CatalogState, ContentVisibility};
use mediahub_common::Config;
use mediahub_db::SqlitePool;

/// Create the main application router with all routes
pub fn create_app(config: &Config, pool: SqlitePool) -> Router {
    let tokens = TokenService::new(&AuthConfig::from(config));

    let accounts_state = AccountsState::new(pool.clone(), tokens.clone());
    let catalog_state = CatalogState::new(pool, tokens.clone());

    let visibility = ContentVisibility::from_public_flag(config.public_content_listing);
    if visibility == ContentVisibility::Public {
        tracing::info!("Content listing is public");
    }

    // Compose domain routers with shared infrastructure routes
    Router::new()
        .route("/health", get(health_check))
        .merge(mediahub_accounts::routes(&tokens).with_state(accounts_state))
        .merge(mediahub_catalog::routes(&tokens, visibility).with_state(catalog_state))
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
