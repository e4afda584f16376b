//! Error handling.
//!
//! This module defines the error types used throughout the application:
//! - **Lookup errors**: failures while resolving the visitor's location
//! - **Initialization errors**: logger or HTTP client setup failures
//!
//! Propagation policy: the primary lookup's failure is caught inside the
//! resolver and triggers the host-geolocation fallback rather than surfacing
//! to the caller; only the terminal failure reaches the user, as an inline
//! message. Nothing here aborts the application.

mod types;

// Re-export public API
pub use types::{GeolocationError, InitializationError, LookupError};
