//! Derived datasets handed to the charting layer.

use serde::Serialize;

use super::{Metric, Unit};

/// One labelled value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DataPoint {
    pub label: String,
    pub value: f64,
}

impl DataPoint {
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

/// Ordered output of a report computation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DerivedDataset {
    pub metric: Metric,
    pub unit: Unit,
    /// Chart series label ("Area (km²)", "Population", ...).
    pub series: &'static str,
    /// Display order is significant.
    pub points: Vec<DataPoint>,
    /// Number of distinct records counted, for count-by-region only. The sum
    /// of bucket values can exceed it when records span several continents.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distinct_records: Option<usize>,
}

impl DerivedDataset {
    pub(crate) fn new(metric: Metric, points: Vec<DataPoint>) -> Self {
        Self {
            metric,
            unit: metric.unit(),
            series: metric.series_label(),
            points,
            distinct_records: None,
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> + '_ {
        self.points.iter().map(|p| p.label.as_str())
    }

    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|p| p.value)
    }

    /// Value for a label, if present.
    pub fn value_of(&self, label: &str) -> Option<f64> {
        self.points
            .iter()
            .find(|p| p.label == label)
            .map(|p| p.value)
    }

    /// Largest value, or `None` for an empty dataset.
    pub fn max_value(&self) -> Option<f64> {
        self.values().reduce(f64::max)
    }

    /// Sum of all values.
    pub fn total(&self) -> f64 {
        self.values().sum()
    }

    /// Tooltip text for a point: `"{series}: {formatted value}"`.
    pub fn tooltip(&self, point: &DataPoint) -> String {
        format!("{}: {}", self.series, self.unit.format_value(point.value))
    }
}
