//! Presentation Layer
//!
//! Reservation form handler.

pub mod dto;
pub mod handlers;
pub mod router;
