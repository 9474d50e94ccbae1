//! Continent listings and country detail helpers.

use std::cmp::Ordering;

use super::{Coordinates, CountryRecord};

/// Records belonging to `label`, sorted alphabetically by name.
///
/// `label` matches either a listed continent ("South America") or the
/// region ("Americas"). Records without a name are left out.
pub fn countries_in<'a>(records: &'a [CountryRecord], label: &str) -> Vec<&'a CountryRecord> {
    let mut members: Vec<&CountryRecord> = records
        .iter()
        .filter(|r| r.name().is_some() && r.is_listed_under(label))
        .collect();
    members.sort_by(|a, b| compare_names(a, b));
    members
}

/// Case-insensitive name order with the exact name as tie-break.
fn compare_names(a: &CountryRecord, b: &CountryRecord) -> Ordering {
    let a = a.name().unwrap_or_default();
    let b = b.name().unwrap_or_default();
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// Half-width of the map box around a country's coordinates, in degrees.
const MAP_BOX_HALF_DEGREES: f64 = 2.0;

/// OpenStreetMap embed URL centred on the given coordinates.
pub fn osm_embed_url(coordinates: Coordinates) -> String {
    let Coordinates { lat, lon } = coordinates;
    format!(
        "https://www.openstreetmap.org/export/embed.html?bbox={}%2C{}%2C{}%2C{}&layer=mapnik&marker={}%2C{}",
        lon - MAP_BOX_HALF_DEGREES,
        lat - MAP_BOX_HALF_DEGREES,
        lon + MAP_BOX_HALF_DEGREES,
        lat + MAP_BOX_HALF_DEGREES,
        lat,
        lon
    )
}
