//! In-memory provider for command tests.

use worldstats::country::{CountryCollection, CountryRecord};
use worldstats::provider::{CountryProvider, ProviderError};

/// Serves a fixed set of records, or a fixed error.
pub struct StubProvider {
    pub countries: CountryCollection,
    pub error: Option<ProviderError>,
}

impl StubProvider {
    pub fn new(records: Vec<CountryRecord>) -> Self {
        Self {
            countries: CountryCollection::new(records),
            error: None,
        }
    }

    pub fn failing(error: ProviderError) -> Self {
        Self {
            countries: CountryCollection::default(),
            error: Some(error),
        }
    }

    fn check(&self) -> Result<(), ProviderError> {
        match &self.error {
            Some(e) => Err(e.clone()),
            None => Ok(()),
        }
    }
}

impl CountryProvider for StubProvider {
    fn fetch_all(&self) -> Result<CountryCollection, ProviderError> {
        self.check()?;
        Ok(self.countries.clone())
    }

    fn fetch_by_code(&self, code: &str) -> Result<CountryRecord, ProviderError> {
        self.check()?;
        self.countries
            .find_by_code(code)
            .cloned()
            .ok_or_else(|| ProviderError::NotFound(code.to_string()))
    }

    fn fetch_by_codes(&self, codes: &[String]) -> Result<CountryCollection, ProviderError> {
        self.check()?;
        Ok(codes
            .iter()
            .filter_map(|code| self.countries.find_by_code(code).cloned())
            .collect())
    }

    fn name(&self) -> &str {
        "stub"
    }
}

/// A small world: Europe, Asia, the Americas region and a territory without
/// area.
pub fn sample_world() -> Vec<CountryRecord> {
    let mut germany = CountryRecord::builder("Germany")
        .code("DEU")
        .continents(["Europe"])
        .region(Some("Europe"))
        .area(357114.0)
        .population(83240525)
        .borders(["AUT", "FRA"])
        .coordinates(51.0, 9.0)
        .build();
    germany.official_name = Some("Federal Republic of Germany".to_string());
    germany.capital = vec!["Berlin".to_string()];
    germany.subregion = Some("Western Europe".to_string());
    germany.languages = vec!["German".to_string()];
    germany.timezones = vec!["UTC+01:00".to_string()];
    germany.google_maps = Some("https://goo.gl/maps/mD9FBMq1nvXzZ8o68".to_string());

    vec![
        germany,
        CountryRecord::builder("austria")
            .code("AUT")
            .continents(["Europe"])
            .area(83871.0)
            .population(8917205)
            .build(),
        CountryRecord::builder("France")
            .code("FRA")
            .continents(["Europe"])
            .area(551695.0)
            .population(67391582)
            .build(),
        CountryRecord::builder("Japan")
            .code("JPN")
            .continents(["Asia"])
            .area(377930.0)
            .population(125836021)
            .build(),
        CountryRecord::builder("Chile")
            .code("CHL")
            .region(Some("Americas"))
            .area(756102.0)
            .population(19116209)
            .build(),
        CountryRecord::builder("Gibraltar")
            .code("GIB")
            .continents(["Europe"])
            .population(33691)
            .build(),
    ]
}
