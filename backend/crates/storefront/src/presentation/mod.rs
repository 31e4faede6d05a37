//! Presentation Layer
//!
//! HTTP handlers, query DTOs and page templates.

pub mod dto;
pub mod handlers;
pub mod router;
pub mod templates;
