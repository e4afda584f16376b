//! Console script construction.

use crate::config::{DATA_LINE_DELAY, NAME_TYPE_DELAY, STATUS_LINE_DELAY};
use crate::location::LocationRecord;
use crate::reveal::types::RevealLine;

/// Builds the hacker-console script for a resolved location.
///
/// Status lines type at 30 ms/char, data lines at 20 ms/char. The line set
/// and order are fixed: three lead-in status lines, the six record fields,
/// and two closing status lines, eleven in total.
pub fn console_script(record: &LocationRecord) -> Vec<RevealLine> {
    vec![
        RevealLine::new("> Initiating location trace...", STATUS_LINE_DELAY),
        RevealLine::new("> Connecting to satellites...", STATUS_LINE_DELAY),
        RevealLine::new("> Access granted!", STATUS_LINE_DELAY),
        RevealLine::new(format!("> IP: {}", record.ip), DATA_LINE_DELAY),
        RevealLine::new(format!("> City: {}", record.city), DATA_LINE_DELAY),
        RevealLine::new(format!("> Region: {}", record.region), DATA_LINE_DELAY),
        RevealLine::new(format!("> Country: {}", record.country_name), DATA_LINE_DELAY),
        RevealLine::new(format!("> Latitude: {}", record.latitude), DATA_LINE_DELAY),
        RevealLine::new(format!("> Longitude: {}", record.longitude), DATA_LINE_DELAY),
        RevealLine::new("> Location acquired.", STATUS_LINE_DELAY),
        RevealLine::new("> Opening map...", STATUS_LINE_DELAY),
    ]
}

/// Builds the one-line profile-name banner typed above the card.
pub fn name_banner(name: &str) -> Vec<RevealLine> {
    vec![RevealLine::new(name, NAME_TYPE_DELAY)]
}
