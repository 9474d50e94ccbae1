//! Ranked single-field reports.

use crate::country::{ContinentFilter, CountryRecord};

use super::{DataPoint, RankField, ResultLimit, SortDirection};

/// Value of `field` for a record, `None` when the record cannot be ranked on
/// it.
fn field_value(record: &CountryRecord, field: RankField) -> Option<f64> {
    match field {
        RankField::Area => record.area,
        RankField::Population => record.population.map(|p| p as f64),
        RankField::Density => record.density(),
    }
}

/// Filter, stable-sort and truncate records on one field.
///
/// Returns the ranked points and the number of candidates before truncation.
pub(super) fn rank(
    records: &[CountryRecord],
    field: RankField,
    direction: SortDirection,
    filter: &ContinentFilter,
    limit: ResultLimit,
) -> (Vec<DataPoint>, usize) {
    let mut candidates: Vec<(&str, f64)> = records
        .iter()
        .filter(|record| filter.admits(record))
        .filter_map(|record| Some((record.name()?, field_value(record, field)?)))
        .collect();
    let candidate_count = candidates.len();

    // sort_by is stable: equal values keep input order
    match direction {
        SortDirection::Ascending => candidates.sort_by(|a, b| a.1.total_cmp(&b.1)),
        SortDirection::Descending => candidates.sort_by(|a, b| b.1.total_cmp(&a.1)),
    }
    candidates.truncate(limit.as_usize());

    let points = candidates
        .into_iter()
        .map(|(name, value)| DataPoint::new(name, value))
        .collect();
    (points, candidate_count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::country::Continent;

    fn country(name: &str, continent: &str, area: Option<f64>, population: Option<u64>) -> CountryRecord {
        let mut record = CountryRecord::builder(name).continents([continent]).build();
        record.area = area;
        record.population = population;
        record
    }

    fn labels(points: &[DataPoint]) -> Vec<&str> {
        points.iter().map(|p| p.label.as_str()).collect()
    }

    #[test]
    fn test_missing_field_excludes_record() {
        let records = vec![
            country("HasArea", "Asia", Some(5.0), None),
            country("NoArea", "Asia", None, Some(100)),
        ];
        let (by_area, _) = rank(
            &records,
            RankField::Area,
            SortDirection::Descending,
            &ContinentFilter::all(),
            ResultLimit::default(),
        );
        assert_eq!(labels(&by_area), vec!["HasArea"]);

        let (by_population, _) = rank(
            &records,
            RankField::Population,
            SortDirection::Descending,
            &ContinentFilter::all(),
            ResultLimit::default(),
        );
        assert_eq!(labels(&by_population), vec!["NoArea"]);
    }

    #[test]
    fn test_ties_keep_input_order() {
        let records = vec![
            country("First", "Europe", Some(10.0), None),
            country("Second", "Europe", Some(10.0), None),
            country("Third", "Europe", Some(10.0), None),
        ];
        for direction in [SortDirection::Ascending, SortDirection::Descending] {
            let (points, _) = rank(
                &records,
                RankField::Area,
                direction,
                &ContinentFilter::all(),
                ResultLimit::default(),
            );
            assert_eq!(labels(&points), vec!["First", "Second", "Third"]);
        }
    }

    #[test]
    fn test_limit_truncates_but_counts_candidates() {
        let records: Vec<_> = (0..5)
            .map(|i| country(&format!("C{}", i), "Africa", Some(i as f64), None))
            .collect();
        let (points, candidates) = rank(
            &records,
            RankField::Area,
            SortDirection::Ascending,
            &ContinentFilter::all(),
            ResultLimit::new(3).unwrap(),
        );
        assert_eq!(labels(&points), vec!["C0", "C1", "C2"]);
        assert_eq!(candidates, 5);
    }

    #[test]
    fn test_filter_applies_before_ranking() {
        let records = vec![
            country("Big", "Asia", Some(1000.0), None),
            country("Small", "Europe", Some(1.0), None),
        ];
        let (points, _) = rank(
            &records,
            RankField::Area,
            SortDirection::Descending,
            &ContinentFilter::only([Continent::Europe]),
            ResultLimit::default(),
        );
        assert_eq!(labels(&points), vec!["Small"]);
    }

    #[test]
    fn test_density_skips_zero_area() {
        let records = vec![
            country("Zero", "Asia", Some(0.0), Some(10)),
            country("Dense", "Asia", Some(2.0), Some(10)),
        ];
        let (points, _) = rank(
            &records,
            RankField::Density,
            SortDirection::Descending,
            &ContinentFilter::all(),
            ResultLimit::default(),
        );
        assert_eq!(points, vec![DataPoint::new("Dense", 5.0)]);
    }
}
