//! Report specification errors.

use thiserror::Error;

use super::spec::{MAX_RESULT_LIMIT, MIN_RESULT_LIMIT};

/// Errors raised while building a report specification.
///
/// Computing a report never fails; these only come from parsing user input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReportError {
    #[error("result limit {0} is outside {min}..={max}", min = MIN_RESULT_LIMIT, max = MAX_RESULT_LIMIT)]
    LimitOutOfRange(u32),

    #[error("unknown report metric '{0}'")]
    UnknownMetric(String),
}
