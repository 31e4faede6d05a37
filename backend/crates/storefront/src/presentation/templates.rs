//! Page Templates
//!
//! Askama templates live in the crate's `templates/` directory.

use crate::domain::entities::Vehicle;
use askama::Template;
use std::fmt;

/// Catalog listing
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexPage<'a> {
    pub vehicles: &'a [Vehicle],
    pub reserved: bool,
}

/// Vehicle detail page
#[derive(Template)]
#[template(path = "item_details.html")]
pub struct ItemDetailsPage<'a> {
    pub vehicle: &'a Vehicle,
    pub specs: Vec<(String, String)>,
    pub reserved: bool,
    pub email: Option<&'a str>,
    pub is_winner: bool,
}

/// Mock checkout / actions page
#[derive(Template)]
#[template(path = "mock_page.html")]
pub struct MockPage<'a> {
    pub vehicle: &'a Vehicle,
    pub kind: MockKind,
    pub is_winner: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MockKind {
    Checkout,
    Actions,
}

impl MockKind {
    pub fn is_checkout(&self) -> bool {
        matches!(self, MockKind::Checkout)
    }
}

impl fmt::Display for MockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MockKind::Checkout => f.write_str("Checkout"),
            MockKind::Actions => f.write_str("Vehicle Actions"),
        }
    }
}

/// Scalar extra catalog fields, shown as a details table
pub fn specs(vehicle: &Vehicle) -> Vec<(String, String)> {
    vehicle
        .extra
        .iter()
        .filter_map(|(key, value)| {
            let text = match value {
                serde_json::Value::String(s) => s.clone(),
                serde_json::Value::Number(n) => n.to_string(),
                serde_json::Value::Bool(b) => b.to_string(),
                _ => return None,
            };
            Some((key.replace('_', " "), text))
        })
        .collect()
}
