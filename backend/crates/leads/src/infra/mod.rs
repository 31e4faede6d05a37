//! Infrastructure Layer
//!
//! Local CSV lead log and the outbound marketing webhook.

pub mod csv_log;
pub mod webhook;
