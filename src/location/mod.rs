//! Location resolution.
//!
//! This module obtains an approximate location for the visitor:
//! - Primary path: a remote IP-geolocation service (`IpApiSource`)
//! - Fallback path: the host's geolocation capability (`HostGeoSource`)
//!
//! Both paths are strategies behind the [`LocationSource`] trait;
//! [`resolve_location`] tries the primary and falls back on any failure.

mod resolver;
mod sources;
mod types;

// Re-export public API
pub use resolver::{resolve_location, ResolveOutcome, ViewState};
pub use sources::{HostGeoSource, IpApiSource, LocationSource, ManualFix, PositionProvider};
pub use types::{Coordinates, LocationRecord};
