//! HTTP Handlers

use crate::application::config::LeadConfig;
use crate::application::submit_reservation::SubmitReservationUseCase;
use crate::domain::repository::{LeadLog, LeadNotifier};
use crate::presentation::dto::ReserveForm;
use axum::Form;
use axum::extract::State;
use axum::extract::rejection::FormRejection;
use axum::response::Redirect;
use chrono::Utc;
use std::sync::Arc;

/// Shared state for lead handlers
#[derive(Clone)]
pub struct LeadsAppState<L, N>
where
    L: LeadLog + Clone + Send + Sync + 'static,
    N: LeadNotifier + Clone + Send + Sync + 'static,
{
    pub lead_log: Arc<L>,
    pub notifier: Option<Arc<N>>,
    pub config: Arc<LeadConfig>,
}

/// POST /api/reserve
///
/// Always answers `303 See Other`, whatever happened to the lead.
pub async fn reserve<L, N>(
    State(state): State<LeadsAppState<L, N>>,
    form: Result<Form<ReserveForm>, FormRejection>,
) -> Redirect
where
    L: LeadLog + Clone + Send + Sync + 'static,
    N: LeadNotifier + Clone + Send + Sync + 'static,
{
    let form = match form {
        Ok(Form(form)) => form,
        Err(rejection) => {
            tracing::debug!(error = %rejection, "Unreadable reservation form");
            ReserveForm::default()
        }
    };

    let use_case = SubmitReservationUseCase::new(
        state.lead_log.clone(),
        state.notifier.clone(),
        state.config.clone(),
    );

    let outcome = use_case.execute(form.into(), Utc::now()).await;

    Redirect::to(&outcome.redirect_to)
}
