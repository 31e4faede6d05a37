//! Storefront Error Types
//!
//! Storefront-specific error variants that integrate with the unified
//! `kernel::error::AppError` system. Only a missing vehicle and an
//! unreadable catalog are ever visible to the browser.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::VehicleId;
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Storefront-specific result type alias
pub type StorefrontResult<T> = Result<T, StorefrontError>;

/// Why the catalog file could not be turned into vehicles
#[derive(Debug, Error)]
pub enum CatalogReadError {
    #[error("read failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("parse failed: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum StorefrontError {
    /// Unknown vehicle id
    #[error("Vehicle {0} not found")]
    VehicleNotFound(VehicleId),

    /// A page that needs a vehicle was requested without one
    #[error("No vehicle requested")]
    VehicleNotRequested,

    /// Catalog file missing or corrupt
    #[error("Vehicle data unavailable ({path}): {source}")]
    DataUnavailable {
        path: String,
        #[source]
        source: CatalogReadError,
    },

    /// Template rendering failed
    #[error("Render error: {0}")]
    Render(#[from] askama::Error),
}

impl StorefrontError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            StorefrontError::VehicleNotFound(_) | StorefrontError::VehicleNotRequested => {
                StatusCode::NOT_FOUND
            }
            StorefrontError::DataUnavailable { .. } | StorefrontError::Render(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            StorefrontError::VehicleNotFound(_) | StorefrontError::VehicleNotRequested => {
                ErrorKind::NotFound
            }
            StorefrontError::DataUnavailable { .. } | StorefrontError::Render(_) => {
                ErrorKind::InternalServerError
            }
        }
    }

    /// Text shown to the browser
    pub fn public_message(&self) -> &'static str {
        match self {
            StorefrontError::VehicleNotFound(_) | StorefrontError::VehicleNotRequested => {
                "Vehicle Not Found"
            }
            StorefrontError::DataUnavailable { .. } => "Vehicle data unavailable",
            StorefrontError::Render(_) => "Internal Server Error",
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            StorefrontError::DataUnavailable { path, source } => {
                tracing::error!(path = %path, error = %source, "Catalog unavailable");
            }
            StorefrontError::Render(e) => {
                tracing::error!(error = %e, "Template render failed");
            }
            StorefrontError::VehicleNotFound(id) => {
                tracing::debug!(vehicle_id = %id, "Unknown vehicle requested");
            }
            StorefrontError::VehicleNotRequested => {
                tracing::debug!("Page requested without an item");
            }
        }
    }
}

impl From<StorefrontError> for AppError {
    fn from(err: StorefrontError) -> Self {
        AppError::new(err.kind(), err.public_message()).with_source(err)
    }
}

impl IntoResponse for StorefrontError {
    fn into_response(self) -> Response {
        self.log();
        AppError::from(self).into_response()
    }
}
