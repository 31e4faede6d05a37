//! Submit Reservation Use Case
//!
//! Records a lead locally, then forwards it to the marketing webhook, and
//! picks the page to send the visitor back to. The local row is written
//! before the webhook fires. Neither side effect can change the redirect.

use crate::application::config::LeadConfig;
use crate::domain::entities::{LeadRecord, SideEffect};
use crate::domain::repository::{LeadLog, LeadNotifier};
use chrono::{DateTime, Utc};
use kernel::VehicleId;
use std::sync::Arc;

/// Input DTO for submit reservation
#[derive(Debug, Clone, Default)]
pub struct ReservationInput {
    pub email: String,
    /// Raw form value
    pub item_id: Option<String>,
}

/// Output DTO for submit reservation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReservationOutcome {
    pub redirect_to: String,
    pub logged: SideEffect,
    pub notified: SideEffect,
}

/// Submit Reservation Use Case
pub struct SubmitReservationUseCase<L, N>
where
    L: LeadLog,
    N: LeadNotifier,
{
    lead_log: Arc<L>,
    notifier: Option<Arc<N>>,
    config: Arc<LeadConfig>,
}

impl<L, N> SubmitReservationUseCase<L, N>
where
    L: LeadLog,
    N: LeadNotifier,
{
    pub fn new(lead_log: Arc<L>, notifier: Option<Arc<N>>, config: Arc<LeadConfig>) -> Self {
        Self {
            lead_log,
            notifier,
            config,
        }
    }

    pub async fn execute(&self, input: ReservationInput, now: DateTime<Utc>) -> ReservationOutcome {
        let item_id = parse_item_id(input.item_id.as_deref());
        let email = input.email.trim();

        let redirect_to = redirect_target(item_id, email, self.config.redirect_includes_email);

        let (logged, notified) = if email.is_empty() {
            tracing::debug!("Reservation without email, nothing recorded");
            (SideEffect::Skipped, SideEffect::Skipped)
        } else {
            let lead = LeadRecord::new(email, item_id, now);
            let logged = self.record(&lead).await;
            let notified = self.notify(&lead).await;
            (logged, notified)
        };

        tracing::info!(
            item_id = ?item_id.map(|id| id.as_i64()),
            logged = %logged,
            notified = %notified,
            redirect_to = %redirect_to,
            "Reservation submitted"
        );

        ReservationOutcome {
            redirect_to,
            logged,
            notified,
        }
    }

    async fn record(&self, lead: &LeadRecord) -> SideEffect {
        match self.lead_log.append(lead).await {
            Ok(()) => SideEffect::Done,
            Err(e) => {
                e.log("lead_log");
                SideEffect::Failed(e.to_string())
            }
        }
    }

    async fn notify(&self, lead: &LeadRecord) -> SideEffect {
        let Some(notifier) = &self.notifier else {
            tracing::debug!("No lead webhook configured");
            return SideEffect::Skipped;
        };

        match notifier.notify(lead).await {
            Ok(()) => SideEffect::Done,
            Err(e) => {
                e.log("lead_webhook");
                SideEffect::Failed(e.to_string())
            }
        }
    }
}

fn parse_item_id(raw: Option<&str>) -> Option<VehicleId> {
    let raw = raw?.trim();
    if raw.is_empty() {
        return None;
    }
    match raw.parse() {
        Ok(id) => Some(id),
        Err(_) => {
            tracing::debug!(item_id = raw, "Ignoring non-numeric item_id");
            None
        }
    }
}

/// Confirmation page for a reservation
fn redirect_target(item_id: Option<VehicleId>, email: &str, include_email: bool) -> String {
    let mut target = match item_id {
        Some(id) => format!("/items/item_{}.html?reserved=true", id),
        None => "/?reserved=true".to_string(),
    };

    if include_email && !email.is_empty() {
        target.push_str("&email=");
        target.extend(url::form_urlencoded::byte_serialize(email.as_bytes()));
    }

    target
}
