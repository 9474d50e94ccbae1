//! Country records as supplied by the data provider.

use std::ops::Deref;
use std::sync::Arc;

use serde::Serialize;

/// A currency used by a country.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Currency {
    /// ISO 4217 code (e.g., "EUR").
    pub code: String,
    pub name: Option<String>,
    pub symbol: Option<String>,
}

/// Latitude/longitude in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

/// References to the flag image assets.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FlagRef {
    pub svg: Option<String>,
    pub png: Option<String>,
}

/// One country or territory.
///
/// Records are immutable once fetched. Numeric fields are `None` when the
/// provider omitted them or supplied an unusable value; zero is a real value
/// and is kept distinct from absence.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CountryRecord {
    pub common_name: Option<String>,
    pub official_name: Option<String>,
    /// ISO 3166-1 alpha-3 code.
    pub code: Option<String>,
    /// Continent memberships; may name more than one continent.
    pub continents: Vec<String>,
    /// Coarser region, used as membership when `continents` is empty.
    pub region: Option<String>,
    pub subregion: Option<String>,
    /// Area in km².
    pub area: Option<f64>,
    pub population: Option<u64>,
    pub flag: FlagRef,
    /// Alpha-3 codes of bordering countries.
    pub borders: Vec<String>,
    pub capital: Vec<String>,
    pub languages: Vec<String>,
    pub currencies: Vec<Currency>,
    pub timezones: Vec<String>,
    pub coordinates: Option<Coordinates>,
    pub google_maps: Option<String>,
}

impl CountryRecord {
    /// Start building a record with the given common name.
    pub fn builder(common_name: impl Into<String>) -> CountryRecordBuilder {
        CountryRecordBuilder {
            record: CountryRecord {
                common_name: Some(common_name.into()),
                ..Default::default()
            },
        }
    }

    /// The display name, if present and not blank.
    pub fn name(&self) -> Option<&str> {
        self.common_name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
    }

    /// Effective membership labels: the continent list, or the region when
    /// the list holds no usable label.
    pub fn memberships(&self) -> impl Iterator<Item = &str> + '_ {
        let has_continents = self.continents.iter().any(|c| !c.trim().is_empty());
        let fallback = if has_continents {
            None
        } else {
            self.region.as_deref()
        };

        self.continents
            .iter()
            .map(String::as_str)
            .chain(fallback)
            .filter(|label| !label.trim().is_empty())
    }

    pub fn has_membership(&self) -> bool {
        self.memberships().next().is_some()
    }

    /// True if `label` names the region or any listed continent (exact
    /// match). Unlike [`memberships`](Self::memberships) the region always
    /// counts, so a region label such as "Americas" lists every country it
    /// covers.
    pub fn is_listed_under(&self, label: &str) -> bool {
        self.region.as_deref() == Some(label) || self.continents.iter().any(|c| c == label)
    }

    /// First membership label, used to link a country back to its continent.
    pub fn primary_continent(&self) -> Option<&str> {
        self.memberships().next()
    }

    /// People per km², defined only for a present population and a positive
    /// area.
    pub fn density(&self) -> Option<f64> {
        let population = self.population?;
        let area = self.area.filter(|a| *a > 0.0)?;
        Some(population as f64 / area)
    }

    /// Preferred flag asset: SVG first, PNG otherwise.
    pub fn flag_ref(&self) -> Option<&str> {
        self.flag.svg.as_deref().or(self.flag.png.as_deref())
    }
}

/// Builder for [`CountryRecord`].
#[derive(Debug, Clone)]
pub struct CountryRecordBuilder {
    record: CountryRecord,
}

impl CountryRecordBuilder {
    pub fn code(mut self, code: impl Into<String>) -> Self {
        self.record.code = Some(code.into());
        self
    }

    pub fn continents<I, S>(mut self, continents: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.record.continents = continents.into_iter().map(Into::into).collect();
        self
    }

    pub fn region<S: Into<String>>(mut self, region: Option<S>) -> Self {
        self.record.region = region.map(Into::into);
        self
    }

    pub fn area(mut self, area: f64) -> Self {
        self.record.area = Some(area);
        self
    }

    pub fn population(mut self, population: u64) -> Self {
        self.record.population = Some(population);
        self
    }

    pub fn borders<I, S>(mut self, borders: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.record.borders = borders.into_iter().map(Into::into).collect();
        self
    }

    pub fn coordinates(mut self, lat: f64, lon: f64) -> Self {
        self.record.coordinates = Some(Coordinates { lat, lon });
        self
    }

    pub fn build(self) -> CountryRecord {
        self.record
    }
}

/// An immutable, cheaply clonable batch of records from one fetch.
///
/// Clones share the same allocation, so several report computations can
/// read one collection without copying it.
#[derive(Debug, Clone, Default)]
pub struct CountryCollection {
    records: Arc<[CountryRecord]>,
}

impl CountryCollection {
    pub fn new(records: Vec<CountryRecord>) -> Self {
        Self {
            records: records.into(),
        }
    }

    pub fn as_slice(&self) -> &[CountryRecord] {
        &self.records
    }

    /// Look up a record by alpha-3 code (case-insensitive).
    pub fn find_by_code(&self, code: &str) -> Option<&CountryRecord> {
        self.records.iter().find(|r| {
            r.code
                .as_deref()
                .is_some_and(|c| c.eq_ignore_ascii_case(code))
        })
    }
}

impl Deref for CountryCollection {
    type Target = [CountryRecord];

    fn deref(&self) -> &Self::Target {
        &self.records
    }
}

impl From<Vec<CountryRecord>> for CountryCollection {
    fn from(records: Vec<CountryRecord>) -> Self {
        Self::new(records)
    }
}

impl FromIterator<CountryRecord> for CountryCollection {
    fn from_iter<T: IntoIterator<Item = CountryRecord>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
