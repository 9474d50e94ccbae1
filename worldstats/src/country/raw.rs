//! Decoding of REST Countries v3.1 JSON into [`CountryRecord`]s.
//!
//! Decoding is lenient per record: a record whose shape does not match is
//! skipped with a warning instead of failing the whole batch, and unusable
//! numeric values (negative, non-finite) are treated as absent.

use std::collections::BTreeMap;

use serde::Deserialize;
use serde_json::Value;

use super::{Coordinates, CountryRecord, Currency, FlagRef};

#[derive(Debug, Default, Deserialize)]
struct RawName {
    common: Option<String>,
    official: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct RawFlags {
    svg: Option<String>,
    png: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct RawCurrency {
    name: Option<String>,
    symbol: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawMaps {
    google_maps: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawCountry {
    name: Option<RawName>,
    cca3: Option<String>,
    continents: Vec<String>,
    region: Option<String>,
    subregion: Option<String>,
    area: Option<f64>,
    population: Option<f64>,
    flags: Option<RawFlags>,
    borders: Vec<String>,
    capital: Vec<String>,
    languages: BTreeMap<String, String>,
    currencies: BTreeMap<String, RawCurrency>,
    timezones: Vec<String>,
    latlng: Vec<f64>,
    maps: Option<RawMaps>,
}

fn non_negative(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite() && *v >= 0.0)
}

impl From<RawCountry> for CountryRecord {
    fn from(raw: RawCountry) -> Self {
        let (common_name, official_name) = match raw.name {
            Some(name) => (name.common, name.official),
            None => (None, None),
        };

        let coordinates = match raw.latlng.as_slice() {
            [lat, lon] => Some(Coordinates {
                lat: *lat,
                lon: *lon,
            }),
            _ => None,
        };

        let flag = raw
            .flags
            .map(|f| FlagRef {
                svg: f.svg,
                png: f.png,
            })
            .unwrap_or_default();

        CountryRecord {
            common_name,
            official_name,
            code: raw.cca3,
            continents: raw.continents,
            region: raw.region,
            subregion: raw.subregion,
            area: non_negative(raw.area),
            population: non_negative(raw.population).map(|p| p.round() as u64),
            flag,
            borders: raw.borders,
            capital: raw.capital,
            languages: raw.languages.into_values().collect(),
            currencies: raw
                .currencies
                .into_iter()
                .map(|(code, c)| Currency {
                    code,
                    name: c.name,
                    symbol: c.symbol,
                })
                .collect(),
            timezones: raw.timezones,
            coordinates,
            google_maps: raw.maps.and_then(|m| m.google_maps),
        }
    }
}

/// Decode a single JSON value into a record, or `None` if its shape is wrong.
pub fn decode_record(value: Value) -> Option<CountryRecord> {
    match serde_json::from_value::<RawCountry>(value) {
        Ok(raw) => Some(raw.into()),
        Err(e) => {
            tracing::warn!(error = %e, "Skipping malformed country record");
            None
        }
    }
}

/// Decode a list of JSON values, skipping malformed entries.
pub fn decode_records(values: Vec<Value>) -> Vec<CountryRecord> {
    let total = values.len();
    let records: Vec<CountryRecord> = values.into_iter().filter_map(decode_record).collect();

    if records.len() < total {
        tracing::warn!(
            skipped = total - records.len(),
            total,
            "Some country records could not be decoded"
        );
    }
    records
}
