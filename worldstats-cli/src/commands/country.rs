//! Country command - show details for one country and its neighbours.

use worldstats::country::{osm_embed_url, CountryRecord, Currency};
use worldstats::provider::CountryProvider;
use worldstats::report::Unit;

use crate::error::CliError;
use crate::output::{ConsoleOutput, Output};
use crate::runner::CliRunner;

/// Run the country command.
pub fn run(code: &str, verbose: bool) -> Result<(), CliError> {
    let runner = CliRunner::new(verbose)?;
    runner.log_startup("country");
    let provider = runner.provider()?;

    execute(code, &provider, &ConsoleOutput::new())
}

/// Fetch and print one country.
///
/// A failed neighbour lookup is reported inline and does not fail the
/// command.
pub fn execute(code: &str, provider: &dyn CountryProvider, out: &dyn Output) -> Result<(), CliError> {
    let record = provider.fetch_by_code(code)?;
    print_details(out, &record);

    out.newline();
    out.subheader("Neighbours");
    if record.borders.is_empty() {
        out.indented("None");
        return Ok(());
    }

    match provider.fetch_by_codes(&record.borders) {
        Ok(neighbours) => {
            for neighbour in neighbours.iter() {
                out.indented(&format!(
                    "{} ({})",
                    neighbour.name().unwrap_or("?"),
                    neighbour.code.as_deref().unwrap_or("?")
                ));
            }
        }
        Err(e) => {
            tracing::warn!(error = %e, code = code, "Failed to load neighbours");
            out.indented(&format!("Could not load neighbours: {}", e));
        }
    }
    Ok(())
}

fn print_details(out: &dyn Output, record: &CountryRecord) {
    out.header(record.name().unwrap_or("Unnamed country"));

    let field = |label: &str, value: String| {
        if !value.is_empty() {
            out.println(&format!("{:<14} {}", format!("{}:", label), value));
        }
    };

    field("Official name", record.official_name.clone().unwrap_or_default());
    field("Code", record.code.clone().unwrap_or_default());
    field("Capital", record.capital.join(", "));
    field(
        "Continent",
        record.primary_continent().unwrap_or_default().to_string(),
    );
    field(
        "Region",
        match (&record.region, &record.subregion) {
            (Some(region), Some(subregion)) => format!("{} / {}", region, subregion),
            (Some(region), None) => region.clone(),
            (None, Some(subregion)) => subregion.clone(),
            (None, None) => String::new(),
        },
    );
    field(
        "Population",
        record
            .population
            .map(|p| Unit::People.format_value(p as f64))
            .unwrap_or_default(),
    );
    field(
        "Area",
        record
            .area
            .map(|a| Unit::SquareKilometres.format_value(a))
            .unwrap_or_default(),
    );
    field("Languages", record.languages.join(", "));
    field(
        "Currencies",
        record
            .currencies
            .iter()
            .map(format_currency)
            .collect::<Vec<_>>()
            .join(", "),
    );
    field("Timezones", record.timezones.join(", "));
    field("Flag", record.flag_ref().unwrap_or_default().to_string());
    field(
        "Map",
        record.coordinates.map(osm_embed_url).unwrap_or_default(),
    );
    field("Google Maps", record.google_maps.clone().unwrap_or_default());
}

fn format_currency(currency: &Currency) -> String {
    match (&currency.name, &currency.symbol) {
        (Some(name), Some(symbol)) => format!("{} ({}, {})", name, currency.code, symbol),
        (Some(name), None) => format!("{} ({})", name, currency.code),
        _ => currency.code.clone(),
    }
}
