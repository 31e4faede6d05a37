//! Environment Configuration
//!
//! Builds the feature configs from environment variables once at startup.

use anyhow::{Context, bail};
use leads::LeadConfig;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;
use storefront::StorefrontConfig;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";

/// Everything `main` needs to start serving
#[derive(Debug, Clone)]
pub struct Settings {
    pub bind_addr: SocketAddr,
    pub storefront: StorefrontConfig,
    pub leads: LeadConfig,
}

impl Settings {
    /// Read settings from the process environment
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok(), !cfg!(debug_assertions))
    }

    /// `require_secret` makes `SESSION_SECRET` mandatory (release builds)
    pub fn from_lookup<F>(get: F, require_secret: bool) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bind_addr = get("BIND_ADDR")
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
            .parse::<SocketAddr>()
            .context("BIND_ADDR must be host:port")?;

        let mut storefront = match get("SESSION_SECRET") {
            Some(secret_b64) => StorefrontConfig {
                session_secret: decode_secret(&secret_b64)?,
                ..StorefrontConfig::default()
            },
            None if require_secret => bail!("SESSION_SECRET must be set in production"),
            None => StorefrontConfig::development(),
        };

        if let Some(path) = get("CATALOG_PATH") {
            storefront.catalog_path = PathBuf::from(path);
        }
        if let Some(dir) = get("ASSETS_DIR") {
            storefront.assets_dir = PathBuf::from(dir);
        }
        if let Some(dir) = get("ITEMS_DIR") {
            storefront.items_dir = PathBuf::from(dir);
        }
        if let Some(flag) = get("HIDDEN_CAR_ENABLED") {
            storefront.hidden_car_enabled = parse_flag("HIDDEN_CAR_ENABLED", &flag)?;
        }
        if let Some(flag) = get("COOKIE_SECURE") {
            storefront.cookie_secure = parse_flag("COOKIE_SECURE", &flag)?;
        }

        let mut leads = LeadConfig::default();
        if let Some(path) = get("LEADS_LOG_PATH") {
            leads.log_path = PathBuf::from(path);
        }
        leads.webhook_url = get("LEAD_WEBHOOK_URL").filter(|url| !url.trim().is_empty());
        if let Some(ms) = get("LEAD_WEBHOOK_TIMEOUT_MS") {
            let ms = ms
                .trim()
                .parse::<u64>()
                .context("LEAD_WEBHOOK_TIMEOUT_MS must be a number of milliseconds")?;
            leads.webhook_timeout = Duration::from_millis(ms);
        }
        if let Some(flag) = get("RESERVE_REDIRECT_INCLUDES_EMAIL") {
            leads.redirect_includes_email = parse_flag("RESERVE_REDIRECT_INCLUDES_EMAIL", &flag)?;
        }

        Ok(Self {
            bind_addr,
            storefront,
            leads,
        })
    }
}

fn decode_secret(secret_b64: &str) -> anyhow::Result<[u8; 32]> {
    let bytes = platform::crypto::from_base64(secret_b64.trim())
        .context("SESSION_SECRET must be base64")?;
    bytes.try_into().map_err(|bytes: Vec<u8>| {
        anyhow::anyhow!("SESSION_SECRET must decode to 32 bytes, got {}", bytes.len())
    })
}

fn parse_flag(name: &str, value: &str) -> anyhow::Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => bail!("{name} must be true or false, got {other:?}"),
    }
}
