//! Domain Entities
//!
//! Vehicles come from a hand-edited JSON file. Only `id` carries meaning;
//! everything else is display data passed through to the templates.

use kernel::VehicleId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Vehicle listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    pub id: VehicleId,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub price: Price,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub description: String,
    /// Keys the pages do not know about, kept as-is
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Vehicle {
    /// First image, used as the listing thumbnail
    pub fn cover_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }

    pub fn detail_path(&self) -> String {
        detail_path(self.id)
    }
}

/// Path of the detail page for a vehicle
pub fn detail_path(id: VehicleId) -> String {
    format!("/items/item_{}.html", id)
}

/// Price as written in the catalog: a number, or a ready-made label
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Price {
    Amount(f64),
    Label(String),
}

impl Default for Price {
    fn default() -> Self {
        Price::Label(String::new())
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Price::Label(label) => f.write_str(label),
            Price::Amount(amount) if amount.fract() == 0.0 => {
                write!(f, "${}", group_thousands(amount.abs() as u64, *amount < 0.0))
            }
            Price::Amount(amount) => {
                let cents = (amount.abs() * 100.0).round() as u64;
                write!(
                    f,
                    "${}.{:02}",
                    group_thousands(cents / 100, *amount < 0.0),
                    cents % 100
                )
            }
        }
    }
}

fn group_thousands(value: u64, negative: bool) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if negative {
        grouped.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
