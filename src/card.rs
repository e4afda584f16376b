//! The profile card surface.
//!
//! Static content: display name, tagline, and the fixed outbound link set.
//! Also derives the map-viewing URL for a resolved location.

use std::fmt;

use crate::config::MAP_URL_BASE;
use crate::location::Coordinates;

/// One outbound link on the card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Link {
    /// Label shown next to the URL.
    pub label: &'static str,
    /// Target URL.
    pub url: &'static str,
}

/// The link-in-bio profile card.
#[derive(Debug, Clone)]
pub struct ProfileCard {
    /// Display name typed above the card.
    pub name: &'static str,
    /// Short tagline under the name.
    pub tagline: &'static str,
    /// Fixed outbound link set.
    pub links: &'static [Link],
}

/// The shipped card content.
pub const DEFAULT_CARD: ProfileCard = ProfileCard {
    name: "dara",
    tagline: "</> link-in-bio",
    links: &[
        Link {
            label: "discord",
            url: "https://discord.com",
        },
        Link {
            label: "paypal",
            url: "https://www.paypal.com/br/",
        },
        Link {
            label: "instagram",
            url: "https://www.instagram.com",
        },
        Link {
            label: "github",
            url: "https://github.com",
        },
    ],
};

impl fmt::Display for ProfileCard {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "  {}", self.tagline)?;
        writeln!(f)?;
        for link in self.links {
            writeln!(f, "  {:<10} {}", link.label, link.url)?;
        }
        Ok(())
    }
}

/// Derives the map-viewing URL for a coordinate pair.
///
/// Opened (printed) after a successful lookup, mirroring the card's
/// "view on map" anchor.
pub fn map_url(coords: Coordinates) -> String {
    format!("{}{},{}", MAP_URL_BASE, coords.latitude, coords.longitude)
}
