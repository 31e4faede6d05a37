//! Leads Module - "reserve this vehicle" lead capture
//!
//! Clean Architecture structure:
//! - `domain/` - Lead record, side-effect outcomes, sink traits
//! - `application/` - Submit reservation use case
//! - `infra/` - CSV lead log, HTTP webhook notifier
//! - `presentation/` - Form handler, router
//!
//! ## Behaviour
//! - Both side effects are best-effort and never surface to the visitor
//! - The webhook call is bounded by a timeout and never retried
//! - The visitor is always redirected with `303 See Other`

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::LeadConfig;
pub use error::{LeadError, LeadResult};
pub use infra::csv_log::CsvLeadLog;
pub use infra::webhook::HttpLeadNotifier;
pub use presentation::router::{leads_router, leads_router_generic};

pub mod models {
    pub use crate::domain::entities::*;
}

#[cfg(test)]
mod tests;
