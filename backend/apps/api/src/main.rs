//! API Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors, but request-level
//! errors go through `kernel::error::AppError`.

mod app;
mod config;

use config::Settings;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "api=info,storefront=info,leads=info,tower_http=info".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let settings = Settings::from_env()?;

    tracing::info!(
        catalog = %settings.storefront.catalog_path.display(),
        hidden_car = settings.storefront.hidden_car_enabled,
        leads_log = %settings.leads.log_path.display(),
        webhook = settings.leads.webhook_url.is_some(),
        "Configuration loaded"
    );

    if !settings.storefront.catalog_path.exists() {
        // Pages will answer 500 until the file appears
        tracing::warn!(
            path = %settings.storefront.catalog_path.display(),
            "Catalog file not found"
        );
    }

    let addr = settings.bind_addr;
    let app = app::build_router(settings)?;

    // Start server
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
