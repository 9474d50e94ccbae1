//! Value units and their display formatting.

use serde::Serialize;

/// Unit of the values in a derived dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Unit {
    Count,
    SquareKilometres,
    People,
    PeoplePerSquareKilometre,
}

impl Unit {
    /// Suffix appended to formatted values, empty for plain counts.
    pub fn suffix(&self) -> &'static str {
        match self {
            Unit::Count | Unit::People => "",
            Unit::SquareKilometres => " km²",
            Unit::PeoplePerSquareKilometre => " /km²",
        }
    }

    /// Format a value for axis ticks and tooltips.
    ///
    /// Counts and people are whole numbers; areas keep up to two decimals
    /// (small territories are well under 1 km²); densities always show two.
    pub fn format_value(&self, value: f64) -> String {
        let number = match self {
            Unit::Count | Unit::People => group_thousands(value.round(), 0),
            Unit::SquareKilometres => {
                let formatted = group_thousands(value, 2);
                trim_fraction(&formatted).to_string()
            }
            Unit::PeoplePerSquareKilometre => group_thousands(value, 2),
        };
        format!("{}{}", number, self.suffix())
    }
}

/// Render `value` with `decimals` fraction digits and comma-grouped integer
/// digits.
fn group_thousands(value: f64, decimals: usize) -> String {
    let rendered = format!("{:.*}", decimals, value.abs());
    let (integer, fraction) = match rendered.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (rendered.as_str(), None),
    };

    let mut grouped = String::with_capacity(integer.len() + integer.len() / 3 + 4);
    if value < 0.0 && rendered.chars().any(|c| c != '0' && c != '.') {
        grouped.push('-');
    }
    for (i, digit) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    if let Some(fraction) = fraction {
        grouped.push('.');
        grouped.push_str(fraction);
    }
    grouped
}

fn trim_fraction(formatted: &str) -> &str {
    if formatted.contains('.') {
        formatted.trim_end_matches('0').trim_end_matches('.')
    } else {
        formatted
    }
}
