//! Report metrics.

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use super::unit::Unit;
use super::ReportError;

/// Numeric field a ranked report orders by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RankField {
    Area,
    Population,
    /// Population divided by area, derived per record.
    Density,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// Quantity accumulated per continent in a bucketed report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BucketMeasure {
    Population,
    CountryCount,
}

/// What a report computes.
///
/// Ranked metrics order individual countries by one field; bucketed metrics
/// aggregate over the fixed continent set and take no filter or limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Metric {
    Ranked {
        field: RankField,
        direction: SortDirection,
    },
    Bucketed(BucketMeasure),
}

impl Metric {
    pub const AREA_ASCENDING: Metric = Metric::ranked(RankField::Area, SortDirection::Ascending);
    pub const AREA_DESCENDING: Metric = Metric::ranked(RankField::Area, SortDirection::Descending);
    pub const POPULATION_ASCENDING: Metric =
        Metric::ranked(RankField::Population, SortDirection::Ascending);
    pub const POPULATION_DESCENDING: Metric =
        Metric::ranked(RankField::Population, SortDirection::Descending);
    pub const DENSITY_ASCENDING: Metric =
        Metric::ranked(RankField::Density, SortDirection::Ascending);
    pub const DENSITY_DESCENDING: Metric =
        Metric::ranked(RankField::Density, SortDirection::Descending);
    pub const POPULATION_BY_REGION: Metric = Metric::Bucketed(BucketMeasure::Population);
    pub const COUNT_BY_REGION: Metric = Metric::Bucketed(BucketMeasure::CountryCount);

    /// Every metric, in menu order.
    pub const ALL: [Metric; 8] = [
        Metric::AREA_DESCENDING,
        Metric::AREA_ASCENDING,
        Metric::POPULATION_DESCENDING,
        Metric::POPULATION_ASCENDING,
        Metric::DENSITY_DESCENDING,
        Metric::DENSITY_ASCENDING,
        Metric::POPULATION_BY_REGION,
        Metric::COUNT_BY_REGION,
    ];

    pub const fn ranked(field: RankField, direction: SortDirection) -> Metric {
        Metric::Ranked { field, direction }
    }

    /// Stable identifier used on the command line and in config files.
    pub fn name(&self) -> &'static str {
        use RankField::*;
        use SortDirection::*;

        match self {
            Metric::Ranked { field: Area, direction: Ascending } => "area-ascending",
            Metric::Ranked { field: Area, direction: Descending } => "area-descending",
            Metric::Ranked { field: Population, direction: Ascending } => "population-ascending",
            Metric::Ranked { field: Population, direction: Descending } => "population-descending",
            Metric::Ranked { field: Density, direction: Ascending } => "density-ascending",
            Metric::Ranked { field: Density, direction: Descending } => "density-descending",
            Metric::Bucketed(BucketMeasure::Population) => "population-by-region",
            Metric::Bucketed(BucketMeasure::CountryCount) => "count-by-region",
        }
    }

    /// Human-readable report title.
    pub fn title(&self) -> &'static str {
        use RankField::*;
        use SortDirection::*;

        match self {
            Metric::Ranked { field: Area, direction: Descending } => "Largest Countries by Area",
            Metric::Ranked { field: Area, direction: Ascending } => "Smallest Countries by Area",
            Metric::Ranked { field: Population, direction: Descending } => "Most Populous Countries",
            Metric::Ranked { field: Population, direction: Ascending } => "Least Populous Countries",
            Metric::Ranked { field: Density, direction: Descending } => "Most Densely Populated Countries",
            Metric::Ranked { field: Density, direction: Ascending } => "Least Densely Populated Countries",
            Metric::Bucketed(BucketMeasure::Population) => "Population by Continent",
            Metric::Bucketed(BucketMeasure::CountryCount) => "Countries per Continent",
        }
    }

    /// Label of the plotted series, used for chart legends and tooltips.
    pub fn series_label(&self) -> &'static str {
        match self {
            Metric::Ranked { field: RankField::Area, .. } => "Area (km²)",
            Metric::Ranked { field: RankField::Population, .. } => "Population",
            Metric::Ranked { field: RankField::Density, .. } => "Density (people/km²)",
            Metric::Bucketed(BucketMeasure::Population) => "Population",
            Metric::Bucketed(BucketMeasure::CountryCount) => "Countries",
        }
    }

    pub fn unit(&self) -> Unit {
        match self {
            Metric::Ranked { field: RankField::Area, .. } => Unit::SquareKilometres,
            Metric::Ranked { field: RankField::Population, .. } => Unit::People,
            Metric::Ranked { field: RankField::Density, .. } => Unit::PeoplePerSquareKilometre,
            Metric::Bucketed(BucketMeasure::Population) => Unit::People,
            Metric::Bucketed(BucketMeasure::CountryCount) => Unit::Count,
        }
    }

    pub fn is_bucketed(&self) -> bool {
        matches!(self, Metric::Bucketed(_))
    }
}

impl Default for Metric {
    fn default() -> Self {
        Metric::AREA_DESCENDING
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Metric {
    type Err = ReportError;

    /// Parses metric names, plus the report ids of the original web client
    /// (`largest-area`, `smallest-area`, `most-pop`, `least-pop`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase().replace('_', "-");

        let alias = match wanted.as_str() {
            "largest-area" => Some(Metric::AREA_DESCENDING),
            "smallest-area" => Some(Metric::AREA_ASCENDING),
            "most-pop" => Some(Metric::POPULATION_DESCENDING),
            "least-pop" => Some(Metric::POPULATION_ASCENDING),
            _ => None,
        };

        alias
            .or_else(|| Metric::ALL.into_iter().find(|m| m.name() == wanted))
            .ok_or_else(|| ReportError::UnknownMetric(s.to_string()))
    }
}

impl Serialize for Metric {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_names_are_unique_and_parse_back() {
        let names: HashSet<_> = Metric::ALL.iter().map(|m| m.name()).collect();
        assert_eq!(names.len(), Metric::ALL.len());

        for metric in Metric::ALL {
            assert_eq!(metric.name().parse::<Metric>(), Ok(metric));
        }
    }

    #[test]
    fn test_legacy_aliases() {
        assert_eq!("largest-area".parse::<Metric>(), Ok(Metric::AREA_DESCENDING));
        assert_eq!("smallest-area".parse::<Metric>(), Ok(Metric::AREA_ASCENDING));
        assert_eq!("most-pop".parse::<Metric>(), Ok(Metric::POPULATION_DESCENDING));
        assert_eq!("least-pop".parse::<Metric>(), Ok(Metric::POPULATION_ASCENDING));
    }

    #[test]
    fn test_parse_is_case_and_separator_tolerant() {
        assert_eq!(
            "Density_Descending".parse::<Metric>(),
            Ok(Metric::DENSITY_DESCENDING)
        );
        assert_eq!(
            "tallest".parse::<Metric>(),
            Err(ReportError::UnknownMetric("tallest".to_string()))
        );
    }

    #[test]
    fn test_units() {
        assert_eq!(Metric::AREA_ASCENDING.unit(), Unit::SquareKilometres);
        assert_eq!(Metric::POPULATION_DESCENDING.unit(), Unit::People);
        assert_eq!(Metric::DENSITY_ASCENDING.unit(), Unit::PeoplePerSquareKilometre);
        assert_eq!(Metric::POPULATION_BY_REGION.unit(), Unit::People);
        assert_eq!(Metric::COUNT_BY_REGION.unit(), Unit::Count);
    }

    #[test]
    fn test_titles() {
        assert_eq!(Metric::AREA_DESCENDING.title(), "Largest Countries by Area");
        assert_eq!(Metric::POPULATION_ASCENDING.title(), "Least Populous Countries");
        assert_eq!(Metric::COUNT_BY_REGION.series_label(), "Countries");
    }

    #[test]
    fn test_only_region_metrics_are_bucketed() {
        let bucketed: Vec<_> = Metric::ALL.iter().filter(|m| m.is_bucketed()).collect();
        assert_eq!(
            bucketed,
            vec![&Metric::POPULATION_BY_REGION, &Metric::COUNT_BY_REGION]
        );
    }

    #[test]
    fn test_serializes_as_name() {
        let json = serde_json::to_string(&Metric::DENSITY_ASCENDING).unwrap();
        assert_eq!(json, "\"density-ascending\"");
    }
}
