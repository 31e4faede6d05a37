//! Domain Layer - Business logic and entities
//!
//! This layer contains:
//! - Domain entities (Vehicle, Price)
//! - The hidden-car game state machine
//! - Repository traits (interfaces)

pub mod entities;
pub mod game;
pub mod repository;
