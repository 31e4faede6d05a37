//! Application Configuration
//!
//! Configuration for the storefront pages and the hidden-car game.

use crate::domain::game::DEBOUNCE_WINDOW_MS;
use platform::cookie::CookieConfig;
use std::path::PathBuf;
use std::time::Duration;

/// Re-export SameSite from platform
pub use platform::cookie::SameSite;

/// Storefront configuration
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// Vehicle catalog JSON file
    pub catalog_path: PathBuf,
    /// Root served under `/assets/`
    pub assets_dir: PathBuf,
    /// Root served under `/items/`
    pub items_dir: PathBuf,
    /// Hidden-car game on/off
    pub hidden_car_enabled: bool,
    /// Minimum time between two draws for one session
    pub debounce_window: Duration,
    /// Cookie name for session
    pub session_cookie_name: String,
    /// Session secret key for HMAC signing (32 bytes)
    pub session_secret: [u8; 32],
    /// Whether to require Secure cookie
    pub cookie_secure: bool,
    /// SameSite policy
    pub cookie_same_site: SameSite,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            catalog_path: PathBuf::from("static/vehicles.json"),
            assets_dir: PathBuf::from("static/assets"),
            items_dir: PathBuf::from("static/items"),
            hidden_car_enabled: true,
            debounce_window: Duration::from_millis(DEBOUNCE_WINDOW_MS as u64),
            session_cookie_name: "showroom_session".to_string(),
            session_secret: [0u8; 32],
            cookie_secure: true,
            cookie_same_site: SameSite::Lax,
        }
    }
}

impl StorefrontConfig {
    /// Create config with a random session secret
    pub fn with_random_secret() -> Self {
        Self {
            session_secret: platform::crypto::random_secret(),
            ..Default::default()
        }
    }

    /// Create config for development (insecure cookie)
    pub fn development() -> Self {
        Self {
            cookie_secure: false,
            ..Self::with_random_secret()
        }
    }

    pub fn debounce_window_ms(&self) -> i64 {
        self.debounce_window.as_millis() as i64
    }

    /// Browser-session cookie carrying the game state
    pub fn session_cookie(&self) -> CookieConfig {
        CookieConfig {
            secure: self.cookie_secure,
            same_site: self.cookie_same_site,
            ..CookieConfig::session(self.session_cookie_name.clone())
        }
    }
}
