//! Query DTOs

use kernel::VehicleId;
use serde::Deserialize;

/// Query of `/` and `/items/item_{id}.html`
#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    #[serde(default)]
    pub reserved: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

impl PageQuery {
    /// `?reserved=true` asks for the reservation confirmation
    pub fn is_reserved(&self) -> bool {
        self.reserved.as_deref() == Some("true")
    }

    pub fn email(&self) -> Option<&str> {
        self.email.as_deref().map(str::trim).filter(|e| !e.is_empty())
    }
}

/// Query of the mock checkout pages
#[derive(Debug, Default, Deserialize)]
pub struct MockQuery {
    #[serde(default)]
    pub item: Option<String>,
}

impl MockQuery {
    pub fn vehicle_id(&self) -> Option<VehicleId> {
        self.item.as_deref()?.parse().ok()
    }
}
