//! Application Layer - Use Cases

pub mod config;
pub mod submit_reservation;
