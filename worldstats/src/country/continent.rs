//! Canonical continent set and the membership filter shared by reports and
//! continent listings.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use super::CountryRecord;

/// A label that does not name one of the canonical continents.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown continent '{0}'")]
pub struct UnknownContinent(pub String);

/// The fixed continent set used for filtering and region-bucketed reports.
///
/// Declaration order is the canonical display order; `Ord` follows it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Continent {
    Africa,
    Asia,
    Europe,
    NorthAmerica,
    SouthAmerica,
    Oceania,
    Antarctica,
}

impl Continent {
    /// All continents in canonical order.
    pub const ALL: [Continent; 7] = [
        Continent::Africa,
        Continent::Asia,
        Continent::Europe,
        Continent::NorthAmerica,
        Continent::SouthAmerica,
        Continent::Oceania,
        Continent::Antarctica,
    ];

    /// The label the provider uses for this continent.
    pub fn label(&self) -> &'static str {
        match self {
            Continent::Africa => "Africa",
            Continent::Asia => "Asia",
            Continent::Europe => "Europe",
            Continent::NorthAmerica => "North America",
            Continent::SouthAmerica => "South America",
            Continent::Oceania => "Oceania",
            Continent::Antarctica => "Antarctica",
        }
    }

    /// Exact match of a provider membership label.
    ///
    /// Membership labels come from upstream data and are matched verbatim;
    /// use [`FromStr`] for lenient user input.
    pub fn from_label(label: &str) -> Option<Continent> {
        Continent::ALL.into_iter().find(|c| c.label() == label)
    }
}

impl fmt::Display for Continent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Continent {
    type Err = UnknownContinent;

    /// Case-insensitive; accepts spaces, dashes or underscores between words.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .collect::<String>()
            .to_lowercase();

        Continent::ALL
            .into_iter()
            .find(|c| c.label().replace(' ', "").to_lowercase() == wanted)
            .ok_or_else(|| UnknownContinent(s.to_string()))
    }
}

/// Set of continents a record must intersect to be admitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContinentFilter {
    allowed: BTreeSet<Continent>,
}

impl ContinentFilter {
    /// Admits every canonical continent.
    pub fn all() -> Self {
        Self {
            allowed: Continent::ALL.into_iter().collect(),
        }
    }

    /// Admits nothing.
    pub fn none() -> Self {
        Self {
            allowed: BTreeSet::new(),
        }
    }

    /// Admits only the given continents.
    pub fn only(continents: impl IntoIterator<Item = Continent>) -> Self {
        Self {
            allowed: continents.into_iter().collect(),
        }
    }

    /// Parse a comma-separated list of continent names.
    ///
    /// An empty or blank string means every continent.
    pub fn parse_list(list: &str) -> Result<Self, UnknownContinent> {
        let parts: Vec<&str> = list
            .split(',')
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .collect();

        if parts.is_empty() {
            return Ok(Self::all());
        }

        let continents = parts
            .into_iter()
            .map(Continent::from_str)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::only(continents))
    }

    pub fn insert(&mut self, continent: Continent) {
        self.allowed.insert(continent);
    }

    pub fn remove(&mut self, continent: Continent) {
        self.allowed.remove(&continent);
    }

    pub fn contains(&self, continent: Continent) -> bool {
        self.allowed.contains(&continent)
    }

    pub fn is_all(&self) -> bool {
        self.allowed.len() == Continent::ALL.len()
    }

    pub fn is_empty(&self) -> bool {
        self.allowed.is_empty()
    }

    /// Allowed continents in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = Continent> + '_ {
        self.allowed.iter().copied()
    }

    /// True if any of the record's memberships is an allowed continent.
    pub fn admits(&self, record: &CountryRecord) -> bool {
        record
            .memberships()
            .filter_map(Continent::from_label)
            .any(|c| self.allowed.contains(&c))
    }

    /// Comma-separated labels, empty when every continent is allowed.
    pub fn to_list_string(&self) -> String {
        if self.is_all() {
            return String::new();
        }
        self.iter()
            .map(|c| c.label())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl Default for ContinentFilter {
    fn default() -> Self {
        Self::all()
    }
}
