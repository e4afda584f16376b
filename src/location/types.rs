//! Location data structures.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::config::UNAVAILABLE;

/// A latitude/longitude pair, as produced by a host position fix.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Coordinates {
    /// Latitude in decimal degrees.
    pub latitude: f64,
    /// Longitude in decimal degrees.
    pub longitude: f64,
}

impl FromStr for Coordinates {
    type Err = String;

    /// Parses `"LAT,LON"` (used by the `--coords` CLI flag).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (lat, lon) = s
            .split_once(',')
            .ok_or_else(|| format!("expected LAT,LON, got '{s}'"))?;
        let latitude: f64 = lat
            .trim()
            .parse()
            .map_err(|_| format!("invalid latitude '{lat}'"))?;
        let longitude: f64 = lon
            .trim()
            .parse()
            .map_err(|_| format!("invalid longitude '{lon}'"))?;
        Ok(Self {
            latitude,
            longitude,
        })
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{},{}", self.latitude, self.longitude)
    }
}

/// An approximate visitor location.
///
/// Field names map 1:1 onto the remote service's JSON body. The service
/// emits `null` for address fields it cannot determine, so the four
/// non-geometric fields degrade to the [`UNAVAILABLE`] sentinel whether the
/// key is missing or explicitly null. The fallback construction path
/// ([`LocationRecord::from_fix`]) has no address data and fills them with
/// the sentinel as well.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LocationRecord {
    /// Public network address, or the sentinel when unavailable.
    #[serde(default = "sentinel", deserialize_with = "string_or_sentinel")]
    pub ip: String,
    /// City name, or the sentinel when unavailable.
    #[serde(default = "sentinel", deserialize_with = "string_or_sentinel")]
    pub city: String,
    /// Region/state name, or the sentinel when unavailable.
    #[serde(default = "sentinel", deserialize_with = "string_or_sentinel")]
    pub region: String,
    /// Country name, or the sentinel when unavailable.
    #[serde(default = "sentinel", deserialize_with = "string_or_sentinel")]
    pub country_name: String,
    /// Latitude in decimal degrees.
    pub latitude: f64,
    /// Longitude in decimal degrees.
    pub longitude: f64,
}

fn sentinel() -> String {
    UNAVAILABLE.to_string()
}

fn string_or_sentinel<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.unwrap_or_else(sentinel))
}

impl LocationRecord {
    /// Builds a record from a bare position fix.
    ///
    /// Host geolocation yields coordinates only; every other field is set to
    /// the [`UNAVAILABLE`] sentinel.
    pub fn from_fix(fix: Coordinates) -> Self {
        Self {
            ip: sentinel(),
            city: sentinel(),
            region: sentinel(),
            country_name: sentinel(),
            latitude: fix.latitude,
            longitude: fix.longitude,
        }
    }

    /// The record's coordinates.
    pub fn coordinates(&self) -> Coordinates {
        Coordinates {
            latitude: self.latitude,
            longitude: self.longitude,
        }
    }
}

impl fmt::Display for LocationRecord {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Loc: {}, {}, {}", self.city, self.region, self.country_name)?;
        write!(f, "Fix: {} ({})", self.coordinates(), self.ip)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_deserializes_remote_body() {
        let body = r#"{
            "ip": "1.2.3.4",
            "city": "Lagos",
            "region": "LA",
            "country_name": "Nigeria",
            "latitude": 6.5,
            "longitude": 3.4
        }"#;
        let record: LocationRecord = serde_json::from_str(body).expect("valid body");
        assert_eq!(record.ip, "1.2.3.4");
        assert_eq!(record.city, "Lagos");
        assert_eq!(record.region, "LA");
        assert_eq!(record.country_name, "Nigeria");
        assert_eq!(record.latitude, 6.5);
        assert_eq!(record.longitude, 3.4);
    }

    #[test]
    fn test_record_missing_address_fields_default_to_sentinel() {
        let body = r#"{"latitude": 6.5, "longitude": 3.4}"#;
        let record: LocationRecord = serde_json::from_str(body).expect("valid body");
        assert_eq!(record.ip, UNAVAILABLE);
        assert_eq!(record.city, UNAVAILABLE);
        assert_eq!(record.region, UNAVAILABLE);
        assert_eq!(record.country_name, UNAVAILABLE);
    }

    #[test]
    fn test_record_null_address_fields_degrade_to_sentinel() {
        let body = r#"{
            "ip": "1.2.3.4",
            "city": null,
            "region": null,
            "country_name": null,
            "latitude": 6.5,
            "longitude": 3.4
        }"#;
        let record: LocationRecord = serde_json::from_str(body).expect("null fields are valid");
        assert_eq!(record.ip, "1.2.3.4");
        assert_eq!(record.city, UNAVAILABLE);
        assert_eq!(record.region, UNAVAILABLE);
        assert_eq!(record.country_name, UNAVAILABLE);
        assert_eq!(record.latitude, 6.5);
    }

    #[test]
    fn test_record_missing_coordinates_is_malformed() {
        let body = r#"{"ip": "1.2.3.4"}"#;
        assert!(serde_json::from_str::<LocationRecord>(body).is_err());
    }

    #[test]
    fn test_from_fix_fills_sentinels() {
        let record = LocationRecord::from_fix(Coordinates {
            latitude: -23.55,
            longitude: -46.63,
        });
        assert_eq!(record.ip, UNAVAILABLE);
        assert_eq!(record.city, UNAVAILABLE);
        assert_eq!(record.latitude, -23.55);
        assert_eq!(record.longitude, -46.63);
    }

    #[test]
    fn test_coordinates_from_str() {
        let coords: Coordinates = "6.5,3.4".parse().expect("valid pair");
        assert_eq!(coords.latitude, 6.5);
        assert_eq!(coords.longitude, 3.4);

        let coords: Coordinates = " -23.55 , -46.63 ".parse().expect("whitespace tolerated");
        assert_eq!(coords.latitude, -23.55);

        assert!("6.5".parse::<Coordinates>().is_err());
        assert!("a,b".parse::<Coordinates>().is_err());
    }
}
