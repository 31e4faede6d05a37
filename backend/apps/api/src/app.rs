//! Router assembly

use crate::config::Settings;
use axum::Router;
use kernel::error::app_error::AppError;
use leads::leads_router;
use storefront::storefront_router;
use tower_http::trace::TraceLayer;

/// Full application router
pub fn build_router(settings: Settings) -> anyhow::Result<Router> {
    let app = Router::new()
        .merge(storefront_router(settings.storefront))
        .nest("/api", leads_router(settings.leads)?)
        .fallback(not_found)
        .layer(TraceLayer::new_for_http());

    Ok(app)
}

async fn not_found() -> AppError {
    AppError::not_found("Not Found")
}
