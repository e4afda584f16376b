//! Error type definitions.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// A failed host position fix, carrying the host-supplied message.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct GeolocationError {
    /// Reason the host declined or failed to produce a fix.
    pub message: String,
}

impl GeolocationError {
    /// Creates a geolocation error from a host-supplied message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Error types for location lookup failures.
///
/// The remote path produces `ServiceStatus`, `Transport` or
/// `MalformedResponse`; the host fallback produces `CapabilityUnavailable`
/// or `Geolocation`.
#[derive(Error, Debug)]
pub enum LookupError {
    /// The geolocation service answered with a non-success status.
    #[error("geolocation service returned status {0}")]
    ServiceStatus(reqwest::StatusCode),

    /// The request never completed (DNS, connect, timeout, ...).
    #[error("geolocation request failed: {0}")]
    Transport(#[from] ReqwestError),

    /// The service answered 2xx but the body did not parse.
    #[error("geolocation response was malformed: {0}")]
    MalformedResponse(#[from] serde_json::Error),

    /// The host offers no geolocation capability at all.
    #[error("geolocation is not supported on this host")]
    CapabilityUnavailable,

    /// The host declined or failed to produce a position fix.
    #[error("host geolocation failed: {0}")]
    Geolocation(#[from] GeolocationError),
}
