//! Continent command - list the countries of one continent or region.

use worldstats::country::countries_in;
use worldstats::provider::CountryProvider;

use super::common::resolve_membership_label;
use crate::error::CliError;
use crate::output::{ConsoleOutput, Output};
use crate::runner::CliRunner;

/// Run the continent command.
pub fn run(name: &str, verbose: bool) -> Result<(), CliError> {
    let runner = CliRunner::new(verbose)?;
    runner.log_startup("continent");
    let provider = runner.provider()?;

    execute(name, &provider, &ConsoleOutput::new())
}

/// Print the countries whose memberships include `name`, alphabetically.
pub fn execute(name: &str, provider: &dyn CountryProvider, out: &dyn Output) -> Result<(), CliError> {
    let label = resolve_membership_label(name);
    let countries = provider.fetch_all()?;
    let members = countries_in(&countries, &label);

    out.header(&label);
    if members.is_empty() {
        out.println(&format!("No countries found for '{}'.", label));
        return Ok(());
    }

    for record in &members {
        let name = record.name().unwrap_or_default();
        match record.code.as_deref() {
            Some(code) => out.indented(&format!("{} ({})", name, code)),
            None => out.indented(name),
        }
    }
    out.newline();
    out.println(&format!("{} countries", members.len()));
    Ok(())
}
