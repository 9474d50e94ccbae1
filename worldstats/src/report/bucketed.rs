//! Continent-bucketed aggregate reports.

use crate::country::{Continent, CountryRecord};

use super::{BucketMeasure, DataPoint};

/// Totals per canonical continent.
///
/// Returns one point per continent in canonical order, plus the number of
/// distinct records that landed in at least one bucket. A record belonging to
/// several continents is added to each of them; a continent listed twice by
/// the same record counts once. Totals saturate at `u64::MAX`.
pub(super) fn bucket(records: &[CountryRecord], measure: BucketMeasure) -> (Vec<DataPoint>, usize) {
    let mut totals = [0u64; Continent::ALL.len()];
    let mut distinct = 0;

    for record in records.iter().filter(|r| r.name().is_some()) {
        let mut seen = [false; Continent::ALL.len()];

        for continent in record.memberships().filter_map(Continent::from_label) {
            let index = continent as usize;
            if seen[index] {
                continue;
            }
            seen[index] = true;

            let amount = match measure {
                BucketMeasure::Population => record.population.unwrap_or(0),
                BucketMeasure::CountryCount => 1,
            };
            totals[index] = totals[index].saturating_add(amount);
        }

        if seen.contains(&true) {
            distinct += 1;
        }
    }

    let points = Continent::ALL
        .into_iter()
        .zip(totals)
        .map(|(continent, total)| DataPoint::new(continent.label(), total as f64))
        .collect();
    (points, distinct)
}
