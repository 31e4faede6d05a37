//! Storefront Router

use crate::application::config::StorefrontConfig;
use crate::domain::repository::CatalogRepository;
use crate::infra::json_file::JsonCatalogStore;
use crate::presentation::handlers::{self, StorefrontAppState};
use axum::{Router, routing::get};
use std::sync::Arc;
use tower_http::services::ServeDir;

/// Create the storefront router backed by the catalog JSON file
pub fn storefront_router(config: StorefrontConfig) -> Router {
    let store = JsonCatalogStore::new(config.catalog_path.clone());
    storefront_router_generic(store, config)
}

/// Create a generic storefront router for any catalog implementation
pub fn storefront_router_generic<R>(repo: R, config: StorefrontConfig) -> Router
where
    R: CatalogRepository + Clone + Send + Sync + 'static,
{
    let assets = ServeDir::new(&config.assets_dir);
    let state = StorefrontAppState {
        repo: Arc::new(repo),
        config: Arc::new(config),
    };

    Router::new()
        .route("/", get(handlers::index::<R>))
        .route("/items/{*path}", get(handlers::items::<R>))
        .route("/stripe_mock.html", get(handlers::checkout_mock::<R>))
        .route("/actions_mock.html", get(handlers::actions_mock::<R>))
        .nest_service("/assets", assets)
        .with_state(state)
}
