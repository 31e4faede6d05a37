//! Repository Traits
//!
//! Sinks a lead is delivered to. Implementations are in infrastructure layer.

use crate::domain::entities::LeadRecord;
use crate::error::LeadResult;

/// Append-only local lead log
#[trait_variant::make(LeadLog: Send)]
pub trait LocalLeadLog {
    async fn append(&self, lead: &LeadRecord) -> LeadResult<()>;
}

/// Outbound marketing notification
#[trait_variant::make(LeadNotifier: Send)]
pub trait LocalLeadNotifier {
    async fn notify(&self, lead: &LeadRecord) -> LeadResult<()>;
}
