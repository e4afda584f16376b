//! Location source strategies.
//!
//! Two independent strategies behind one capability interface: the remote
//! IP-geolocation service and the host's own geolocation capability. No
//! inheritance, just two types conforming to one signature.

use log::debug;

use crate::error_handling::{GeolocationError, LookupError};
use crate::location::types::{Coordinates, LocationRecord};

/// A strategy for obtaining an approximate location.
pub trait LocationSource {
    /// Attempts to produce a location record.
    fn resolve(
        &self,
    ) -> impl std::future::Future<Output = Result<LocationRecord, LookupError>> + Send;
}

/// Remote IP-geolocation lookup.
///
/// Issues a GET to the configured endpoint and parses the JSON body using
/// the remote field names directly.
pub struct IpApiSource {
    client: reqwest::Client,
    endpoint: String,
}

impl IpApiSource {
    /// Creates a source querying `endpoint` with the given client.
    pub fn new(client: reqwest::Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }
}

impl LocationSource for IpApiSource {
    async fn resolve(&self) -> Result<LocationRecord, LookupError> {
        debug!("querying geolocation service at {}", self.endpoint);
        let response = self.client.get(&self.endpoint).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(LookupError::ServiceStatus(status));
        }
        let body = response.text().await?;
        let record: LocationRecord = serde_json::from_str(&body)?;
        debug!("geolocation service resolved {}", record.ip);
        Ok(record)
    }
}

/// A host capability producing a single position fix.
///
/// The terminal counterpart of `navigator.geolocation`: the shipped CLI
/// offers [`ManualFix`]; tests inject their own providers.
pub trait PositionProvider {
    /// Requests a single position fix from the host.
    fn position(
        &self,
    ) -> impl std::future::Future<Output = Result<Coordinates, GeolocationError>> + Send;
}

/// A position provider backed by user-supplied coordinates.
pub struct ManualFix {
    coords: Coordinates,
}

impl ManualFix {
    /// Creates a provider that always yields `coords`.
    pub fn new(coords: Coordinates) -> Self {
        Self { coords }
    }
}

impl PositionProvider for ManualFix {
    async fn position(&self) -> Result<Coordinates, GeolocationError> {
        Ok(self.coords)
    }
}

/// Host geolocation strategy.
///
/// Polymorphic over capability availability: a host without a provider fails
/// with [`LookupError::CapabilityUnavailable`], mirroring a browser without
/// `navigator.geolocation`. A provider error surfaces as
/// [`LookupError::Geolocation`] with the host-supplied message.
pub struct HostGeoSource<P> {
    provider: Option<P>,
}

impl<P> HostGeoSource<P> {
    /// Creates the source; `None` models a host without the capability.
    pub fn new(provider: Option<P>) -> Self {
        Self { provider }
    }
}

impl<P: PositionProvider + Sync> LocationSource for HostGeoSource<P> {
    async fn resolve(&self) -> Result<LocationRecord, LookupError> {
        let provider = self
            .provider
            .as_ref()
            .ok_or(LookupError::CapabilityUnavailable)?;
        let fix = provider.position().await?;
        debug!("host geolocation produced fix {fix}");
        Ok(LocationRecord::from_fix(fix))
    }
}
