//! Report commands - rank and aggregate countries.

use worldstats::config::ReportSettings;
use worldstats::provider::CountryProvider;
use worldstats::report::{compute_report, Metric};

use super::common::resolve_report_spec;
use crate::error::CliError;
use crate::output::{print_bar_chart, ConsoleOutput, Output};
use crate::runner::CliRunner;

/// Arguments for the report command.
#[derive(Debug, Clone, Default)]
pub struct ReportArgs {
    pub metric: Option<String>,
    pub limit: Option<u32>,
    pub continents: Vec<String>,
    pub json: bool,
}

/// Run the report command.
pub fn run(args: ReportArgs, verbose: bool) -> Result<(), CliError> {
    let runner = CliRunner::new(verbose)?;
    runner.log_startup("report");
    let provider = runner.provider()?;

    execute(&args, &provider, &runner.config().report, &ConsoleOutput::new())
}

/// Fetch, compute and print one report.
pub fn execute(
    args: &ReportArgs,
    provider: &dyn CountryProvider,
    settings: &ReportSettings,
    out: &dyn Output,
) -> Result<(), CliError> {
    // Resolve arguments before fetching so bad input fails fast
    let spec = resolve_report_spec(
        args.metric.as_deref(),
        args.limit,
        &args.continents,
        settings,
    )?;

    let countries = provider.fetch_all()?;
    let dataset = compute_report(&countries, &spec);

    if args.json {
        out.println(&serde_json::to_string_pretty(&dataset)?);
        return Ok(());
    }

    print_bar_chart(out, &dataset);
    let filter = spec.effective_filter();
    if !filter.is_all() {
        out.println(&format!("Continents: {}", filter.to_list_string()));
    }
    Ok(())
}

/// List the available report metrics.
pub fn run_list(out: &dyn Output) {
    out.header("Available Reports");
    out.newline();

    let width = Metric::ALL.iter().map(|m| m.name().len()).max().unwrap_or(0);
    for metric in Metric::ALL {
        out.indented(&format!(
            "{:<width$}  {}",
            metric.name(),
            metric.title(),
            width = width
        ));
    }

    out.newline();
    out.println("Aliases: largest-area, smallest-area, most-pop, least-pop");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::fixtures::{sample_world, StubProvider};
    use crate::output::tests::BufferOutput;
    use worldstats::provider::ProviderError;

    fn run_report(args: ReportArgs) -> Result<String, CliError> {
        let provider = StubProvider::new(sample_world());
        let out = BufferOutput::new();
        execute(&args, &provider, &ReportSettings::default(), &out)?;
        Ok(out.contents())
    }

    #[test]
    fn test_default_report_is_largest_area() {
        let text = run_report(ReportArgs::default()).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "Largest Countries by Area");
        assert!(lines[1].starts_with("France"));
        // Gibraltar has no area; Chile only has the non-canonical "Americas" region
        assert!(!text.contains("Gibraltar"));
        assert!(!text.contains("Chile"));
    }

    #[test]
    fn test_filtered_report_names_continents() {
        let text = run_report(ReportArgs {
            metric: Some("most-pop".to_string()),
            continents: vec!["Europe".to_string()],
            ..Default::default()
        })
        .unwrap();

        assert!(text.contains("Most Populous Countries"));
        assert!(text.contains("Gibraltar"));
        assert!(!text.contains("Japan"));
        assert!(text.contains("Continents: Europe"));
    }

    #[test]
    fn test_bucketed_report_omits_ignored_filter() {
        let text = run_report(ReportArgs {
            metric: Some("count-by-region".to_string()),
            continents: vec!["Europe".to_string()],
            ..Default::default()
        })
        .unwrap();

        assert!(text.contains("Asia"));
        assert!(!text.contains("Continents:"));
    }

    #[test]
    fn test_json_output() {
        let text = run_report(ReportArgs {
            metric: Some("count-by-region".to_string()),
            json: true,
            ..Default::default()
        })
        .unwrap();

        let json: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(json["metric"], "count-by-region");
        assert_eq!(json["points"].as_array().unwrap().len(), 7);
        // Chile only has the non-canonical "Americas" region
        assert_eq!(json["distinct_records"], 5);
    }

    #[test]
    fn test_bad_metric_fails_before_fetch() {
        let provider = StubProvider::failing(ProviderError::Http("should not be called".into()));
        let out = BufferOutput::new();
        let args = ReportArgs {
            metric: Some("tallest".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            execute(&args, &provider, &ReportSettings::default(), &out),
            Err(CliError::Report(_))
        ));
    }

    #[test]
    fn test_fetch_failure_is_reported() {
        let provider = StubProvider::failing(ProviderError::Http("timed out".into()));
        let out = BufferOutput::new();
        let err = execute(&ReportArgs::default(), &provider, &ReportSettings::default(), &out)
            .unwrap_err();
        assert!(err.to_string().contains("timed out"));
    }

    #[test]
    fn test_list_reports() {
        let out = BufferOutput::new();
        run_list(&out);
        let text = out.contents();
        for metric in Metric::ALL {
            assert!(text.contains(metric.name()));
        }
    }
}
