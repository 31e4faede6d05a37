//! Application Layer - Use Cases
//!
//! This layer orchestrates domain logic and infrastructure.

pub mod browse_catalog;
pub mod config;
pub mod view_vehicle;
