//! Storefront Module - vehicle catalog pages and the hidden-car game
//!
//! Clean Architecture structure:
//! - `domain/` - Vehicle entity, hidden-car state machine, repository traits
//! - `application/` - Use cases (browse catalog, view vehicle)
//! - `infra/` - JSON catalog file, signed session cookie
//! - `presentation/` - HTTP handlers, templates, router
//!
//! ## Behaviour
//! - The catalog file is re-read on every request, never cached
//! - The golden vehicle lives in an HMAC-signed browser-session cookie
//! - Repeated homepage visits inside the debounce window keep the same pick
//! - `/items/` and `/assets/` serve files beneath fixed roots only

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::StorefrontConfig;
pub use error::{StorefrontError, StorefrontResult};
pub use infra::json_file::JsonCatalogStore;
pub use presentation::router::{storefront_router, storefront_router_generic};

pub mod models {
    pub use crate::domain::entities::*;
    pub use crate::domain::game::*;
}
