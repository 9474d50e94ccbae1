//! Common argument resolution shared across CLI commands.

use std::str::FromStr;

use worldstats::config::ReportSettings;
use worldstats::country::{Continent, ContinentFilter};
use worldstats::report::{Metric, ReportSpec, ResultLimit};

use crate::error::CliError;

/// Build a report spec from CLI arguments, falling back to `[report]`
/// settings for anything not given.
///
/// Out-of-range limits are clamped into the accepted range rather than
/// rejected.
pub fn resolve_report_spec(
    metric: Option<&str>,
    limit: Option<u32>,
    continents: &[String],
    settings: &ReportSettings,
) -> Result<ReportSpec, CliError> {
    let metric = match metric {
        Some(name) => Metric::from_str(name)?,
        None => settings.metric,
    };

    let limit = match limit {
        Some(requested) => {
            let clamped = ResultLimit::clamped(requested);
            if clamped.get() != requested {
                tracing::warn!(requested, used = clamped.get(), "Result limit clamped");
            }
            clamped
        }
        None => settings.limit,
    };

    let filter = if continents.is_empty() {
        settings.continents.clone()
    } else {
        continents
            .iter()
            .map(|c| Continent::from_str(c))
            .collect::<Result<Vec<_>, _>>()
            .map(ContinentFilter::only)?
    };

    Ok(ReportSpec::new(metric).with_filter(filter).with_limit(limit))
}

/// Canonical label for a user-supplied continent name, or the input as
/// given when it is not a canonical continent (region labels such as
/// "Americas").
pub fn resolve_membership_label(name: &str) -> String {
    match Continent::from_str(name) {
        Ok(continent) => continent.label().to_string(),
        Err(_) => name.trim().to_string(),
    }
}
