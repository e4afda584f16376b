//! Configuration constants.
//!
//! This module defines all configuration constants used throughout the
//! application: the lookup endpoint, animation timing, and display glyphs.

use std::time::Duration;

/// Default IP-geolocation endpoint.
///
/// Returns a JSON body describing the caller's public address: `ip`, `city`,
/// `region`, `country_name`, `latitude`, `longitude`. Overridable via the
/// `--endpoint` CLI flag (also how the integration tests point the lookup at
/// a mock server).
pub const DEFAULT_ENDPOINT: &str = "https://ipapi.co/json/";

/// Per-request timeout in seconds for the geolocation lookup.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Default User-Agent string for HTTP requests.
///
/// ipapi.co rejects requests with library default user agents, so we always
/// send an explicit one. Overridable via `--user-agent`.
pub const DEFAULT_USER_AGENT: &str = concat!("geoconsole/", env!("CARGO_PKG_VERSION"));

/// Sentinel shown for record fields the fallback path cannot populate.
///
/// Host geolocation yields only a coordinate fix; address, city, region and
/// country are reported as this string.
pub const UNAVAILABLE: &str = "unavailable";

/// Blinking-cursor glyph appended to the line currently being revealed.
pub const CURSOR_GLYPH: char = '▋';

/// Pause after a line finishes revealing, before the next line starts.
pub const DEFAULT_LINE_PAUSE: Duration = Duration::from_millis(500);

/// Per-character delay for console status lines ("Access granted!" etc.).
pub const STATUS_LINE_DELAY: Duration = Duration::from_millis(30);

/// Per-character delay for console data lines (IP, city, coordinates).
pub const DATA_LINE_DELAY: Duration = Duration::from_millis(20);

/// Per-character delay for the profile-name banner typed above the card.
pub const NAME_TYPE_DELAY: Duration = Duration::from_millis(100);

/// Map-viewing URL prefix; latitude and longitude are appended as the query.
pub const MAP_URL_BASE: &str = "https://www.google.com/maps?q=";
