//! Report specification: metric, continent filter and result limit.

use crate::country::ContinentFilter;

use super::{Metric, ReportError};

/// Smallest accepted result limit.
pub const MIN_RESULT_LIMIT: u32 = 2;

/// Largest accepted result limit.
pub const MAX_RESULT_LIMIT: u32 = 20;

/// Default number of countries in a ranked report.
pub const DEFAULT_RESULT_LIMIT: u32 = 10;

/// Maximum number of entries in a ranked report, within
/// [`MIN_RESULT_LIMIT`]..=[`MAX_RESULT_LIMIT`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ResultLimit(u32);

impl ResultLimit {
    /// Validate a limit, rejecting values outside the accepted range.
    pub fn new(limit: u32) -> Result<Self, ReportError> {
        if (MIN_RESULT_LIMIT..=MAX_RESULT_LIMIT).contains(&limit) {
            Ok(Self(limit))
        } else {
            Err(ReportError::LimitOutOfRange(limit))
        }
    }

    /// Clamp any value into the accepted range.
    pub fn clamped(limit: u32) -> Self {
        Self(limit.clamp(MIN_RESULT_LIMIT, MAX_RESULT_LIMIT))
    }

    pub fn get(&self) -> u32 {
        self.0
    }

    pub fn as_usize(&self) -> usize {
        self.0 as usize
    }
}

impl Default for ResultLimit {
    fn default() -> Self {
        Self(DEFAULT_RESULT_LIMIT)
    }
}

impl TryFrom<u32> for ResultLimit {
    type Error = ReportError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// A single report request, rebuilt whenever the selection changes.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ReportSpec {
    metric: Metric,
    filter: ContinentFilter,
    limit: ResultLimit,
}

impl ReportSpec {
    /// A spec for `metric` over every continent with the default limit.
    pub fn new(metric: Metric) -> Self {
        Self {
            metric,
            filter: ContinentFilter::all(),
            limit: ResultLimit::default(),
        }
    }

    pub fn with_filter(mut self, filter: ContinentFilter) -> Self {
        self.filter = filter;
        self
    }

    pub fn with_limit(mut self, limit: ResultLimit) -> Self {
        self.limit = limit;
        self
    }

    pub fn metric(&self) -> Metric {
        self.metric
    }

    /// The filter as requested, which bucketed metrics ignore.
    pub fn filter(&self) -> &ContinentFilter {
        &self.filter
    }

    pub fn limit(&self) -> ResultLimit {
        self.limit
    }

    /// The filter actually applied: every continent for bucketed metrics.
    pub fn effective_filter(&self) -> ContinentFilter {
        if self.metric.is_bucketed() {
            ContinentFilter::all()
        } else {
            self.filter.clone()
        }
    }
}
