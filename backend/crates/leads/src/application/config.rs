//! Application Configuration

use std::path::PathBuf;
use std::time::Duration;

/// Lead capture configuration
#[derive(Debug, Clone)]
pub struct LeadConfig {
    /// CSV file leads are appended to
    pub log_path: PathBuf,
    /// Marketing endpoint; notification is skipped when unset
    pub webhook_url: Option<String>,
    /// Upper bound for one webhook call
    pub webhook_timeout: Duration,
    /// Append `&email=` to the confirmation redirect
    pub redirect_includes_email: bool,
}

impl Default for LeadConfig {
    fn default() -> Self {
        Self {
            log_path: PathBuf::from("leads.csv"),
            webhook_url: None,
            webhook_timeout: Duration::from_secs(2),
            redirect_includes_email: false,
        }
    }
}
