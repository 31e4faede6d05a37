//! Shared Kernel - Domain-crossing minimal core
//!
//! This crate contains the "smallest core" of domain vocabulary:
//! - The error type every page failure is rendered from
//! - The vehicle identifier shared by the catalog and lead capture
//!
//! **Design Principle**: Only include things that are "hard to change"
//! and have consistent meaning across all domains.

pub mod error {
    pub mod app_error;
    pub mod kind;
}
pub mod id;

pub use id::VehicleId;
