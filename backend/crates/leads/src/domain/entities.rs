//! Domain Entities

use chrono::{DateTime, SecondsFormat, Utc};
use kernel::VehicleId;
use std::fmt;

/// One submitted reservation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeadRecord {
    pub email: String,
    /// `None` when the form carried no usable vehicle id
    pub item_id: Option<VehicleId>,
    pub submitted_at: DateTime<Utc>,
}

impl LeadRecord {
    pub fn new(
        email: impl Into<String>,
        item_id: Option<VehicleId>,
        submitted_at: DateTime<Utc>,
    ) -> Self {
        Self {
            email: email.into(),
            item_id,
            submitted_at,
        }
    }

    /// RFC 3339 timestamp, second precision
    pub fn submitted_at_rfc3339(&self) -> String {
        self.submitted_at.to_rfc3339_opts(SecondsFormat::Secs, true)
    }

    pub fn item_id_text(&self) -> String {
        self.item_id.map(|id| id.to_string()).unwrap_or_default()
    }
}

/// Outcome of one best-effort side effect
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SideEffect {
    Done,
    /// Not attempted (not configured, or nothing to send)
    Skipped,
    Failed(String),
}

impl SideEffect {
    pub fn is_failed(&self) -> bool {
        matches!(self, SideEffect::Failed(_))
    }
}

impl fmt::Display for SideEffect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SideEffect::Done => f.write_str("done"),
            SideEffect::Skipped => f.write_str("skipped"),
            SideEffect::Failed(_) => f.write_str("failed"),
        }
    }
}
