//! Terminal output for command handlers.
//!
//! Handlers write through the [`Output`] trait so they can be tested against
//! an in-memory buffer.

use console::style;
use worldstats::report::DerivedDataset;

/// Width of the longest bar in a chart, in characters.
pub const BAR_WIDTH: usize = 40;

/// Output sink for command handlers.
pub trait Output {
    /// Print a line.
    fn println(&self, msg: &str);

    /// Print without a trailing newline.
    fn print(&self, msg: &str);

    /// Print a blank line.
    fn newline(&self);

    /// Print a line indented by two spaces.
    fn indented(&self, msg: &str) {
        self.println(&format!("  {}", msg));
    }

    /// Print a top-level title with an underline.
    fn header(&self, title: &str);

    /// Print a section title.
    fn subheader(&self, title: &str);
}

/// Styled output to stdout.
#[derive(Debug, Default)]
pub struct ConsoleOutput;

impl ConsoleOutput {
    pub fn new() -> Self {
        Self
    }
}

impl Output for ConsoleOutput {
    fn println(&self, msg: &str) {
        println!("{}", msg);
    }

    fn print(&self, msg: &str) {
        print!("{}", msg);
    }

    fn newline(&self) {
        println!();
    }

    fn header(&self, title: &str) {
        println!("{}", style(title).bold());
        println!("{}", "=".repeat(title.chars().count()));
    }

    fn subheader(&self, title: &str) {
        println!("{}", style(title).bold().cyan());
    }
}

/// Render a dataset as a horizontal text bar chart.
///
/// Bars are scaled to the largest value; a non-zero value always gets at
/// least one block.
pub fn print_bar_chart(out: &dyn Output, dataset: &DerivedDataset) {
    out.header(dataset.metric.title());

    if dataset.is_empty() {
        out.println("No countries match the selected filters.");
        return;
    }

    let label_width = dataset.labels().map(|l| l.chars().count()).max().unwrap_or(0);
    let max = dataset.max_value().unwrap_or(0.0);

    for point in &dataset.points {
        let bar = "█".repeat(bar_length(point.value, max));
        let padding = label_width - point.label.chars().count();
        out.println(&format!(
            "{}{}  {:<width$}  {}",
            point.label,
            " ".repeat(padding),
            bar,
            dataset.unit.format_value(point.value),
            width = BAR_WIDTH
        ));
    }

    out.newline();
    out.println(&format!("Series: {}", dataset.series));
    if let Some(distinct) = dataset.distinct_records {
        out.println(&format!(
            "{} distinct countries (countries spanning several continents are counted in each)",
            distinct
        ));
    }
}

fn bar_length(value: f64, max: f64) -> usize {
    if max <= 0.0 || value <= 0.0 {
        return 0;
    }
    let scaled = (value / max * BAR_WIDTH as f64).round() as usize;
    scaled.clamp(1, BAR_WIDTH)
}
