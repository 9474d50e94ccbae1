//! Country statistics reports
//!
//! Turns a country collection and a [`ReportSpec`] into a [`DerivedDataset`]
//! ready for charting.
//!
//! # Metric families
//!
//! ```text
//! Ranked   (area, population, density × asc/desc)
//!   records ─► continent filter ─► has field ─► stable sort ─► limit
//!
//! Bucketed (population / country count per continent)
//!   records ─► every canonical continent, in canonical order, zeros kept
//! ```
//!
//! Computation is a pure function of its inputs: no I/O, no hidden state,
//! and ties keep input order. Records missing the active field are dropped
//! from that report only, and an empty result is a valid outcome.
//!
//! # Example
//!
//! ```
//! use worldstats::country::CountryRecord;
//! use worldstats::report::{compute_report, Metric, ReportSpec, ResultLimit};
//!
//! let records = vec![
//!     CountryRecord::builder("A").continents(["Asia"]).area(10.0).population(100).build(),
//!     CountryRecord::builder("B").continents(["Asia"]).area(50.0).population(10).build(),
//! ];
//! let spec = ReportSpec::new(Metric::AREA_DESCENDING).with_limit(ResultLimit::new(2).unwrap());
//! let dataset = compute_report(&records, &spec);
//!
//! assert_eq!(dataset.labels().collect::<Vec<_>>(), vec!["B", "A"]);
//! ```

mod bucketed;
mod dataset;
mod error;
mod metric;
mod ranked;
mod spec;
mod unit;

pub use dataset::{DataPoint, DerivedDataset};
pub use error::ReportError;
pub use metric::{BucketMeasure, Metric, RankField, SortDirection};
pub use spec::{
    ReportSpec, ResultLimit, DEFAULT_RESULT_LIMIT, MAX_RESULT_LIMIT, MIN_RESULT_LIMIT,
};
pub use unit::Unit;

use crate::country::CountryRecord;

/// Compute the dataset for `spec` over `records`.
///
/// Never fails: records missing a required field or continent membership are
/// excluded individually, and an input with no matches produces an empty
/// ranked dataset or an all-zero bucketed one.
pub fn compute_report(records: &[CountryRecord], spec: &ReportSpec) -> DerivedDataset {
    let metric = spec.metric();

    match metric {
        Metric::Ranked { field, direction } => {
            let (points, candidates) =
                ranked::rank(records, field, direction, spec.filter(), spec.limit());
            tracing::debug!(
                metric = %metric,
                records = records.len(),
                candidates,
                returned = points.len(),
                limit = spec.limit().get(),
                "Computed ranked report"
            );
            DerivedDataset::new(metric, points)
        }
        Metric::Bucketed(measure) => {
            let (points, distinct) = bucketed::bucket(records, measure);
            tracing::debug!(
                metric = %metric,
                records = records.len(),
                distinct,
                "Computed bucketed report"
            );
            let mut dataset = DerivedDataset::new(metric, points);
            if measure == BucketMeasure::CountryCount {
                dataset.distinct_records = Some(distinct);
            }
            dataset
        }
    }
}
