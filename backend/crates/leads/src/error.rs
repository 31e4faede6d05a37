//! Lead Error Types
//!
//! Lead capture never fails the request; these errors only ever end up in
//! the log and in `SideEffect::Failed`.

use kernel::error::kind::ErrorKind;
use thiserror::Error;

/// Lead-specific result type alias
pub type LeadResult<T> = Result<T, LeadError>;

#[derive(Debug, Error)]
pub enum LeadError {
    /// Lead log could not be opened or written
    #[error("Lead log write failed: {0}")]
    LogWrite(#[from] std::io::Error),

    /// Row could not be encoded
    #[error("Lead row encoding failed: {0}")]
    Encode(#[from] csv::Error),

    /// Webhook unreachable, timed out or answered non-2xx
    #[error("Lead notification failed: {0}")]
    Notify(#[from] reqwest::Error),
}

impl LeadError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            LeadError::LogWrite(_) | LeadError::Encode(_) => ErrorKind::InternalServerError,
            LeadError::Notify(e) if e.is_timeout() => ErrorKind::ServiceUnavailable,
            LeadError::Notify(_) => ErrorKind::BadGateway,
        }
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, LeadError::Notify(e) if e.is_timeout())
    }

    /// Log the error with appropriate level
    pub fn log(&self, side_effect: &'static str) {
        tracing::warn!(
            side_effect,
            kind = %self.kind(),
            timeout = self.is_timeout(),
            error = %self,
            "Lead side effect failed"
        );
    }
}
