//! Leads Router

use crate::application::config::LeadConfig;
use crate::domain::repository::{LeadLog, LeadNotifier};
use crate::error::LeadResult;
use crate::infra::csv_log::CsvLeadLog;
use crate::infra::webhook::HttpLeadNotifier;
use crate::presentation::handlers::{self, LeadsAppState};
use axum::{Router, routing::post};
use std::sync::Arc;

/// Create the leads router with the CSV log and, if configured, the webhook
pub fn leads_router(config: LeadConfig) -> LeadResult<Router> {
    let lead_log = CsvLeadLog::new(config.log_path.clone());
    let notifier = config
        .webhook_url
        .as_deref()
        .map(|url| HttpLeadNotifier::new(url, config.webhook_timeout))
        .transpose()?;

    Ok(leads_router_generic(lead_log, notifier, config))
}

/// Create a generic leads router for any sink implementations
pub fn leads_router_generic<L, N>(lead_log: L, notifier: Option<N>, config: LeadConfig) -> Router
where
    L: LeadLog + Clone + Send + Sync + 'static,
    N: LeadNotifier + Clone + Send + Sync + 'static,
{
    let state = LeadsAppState {
        lead_log: Arc::new(lead_log),
        notifier: notifier.map(Arc::new),
        config: Arc::new(config),
    };

    Router::new()
        .route("/reserve", post(handlers::reserve::<L, N>))
        .with_state(state)
}
