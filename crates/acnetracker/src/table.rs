//! Plain-text rendering of recorded entries.

use std::sync::OnceLock;

use regex::Regex;

use crate::record::Record;
use crate::schema::Field;

/// Longest a cell is allowed to get before it is cut with an ellipsis.
const MAX_CELL_WIDTH: usize = 24;

fn capital_letter() -> &'static Regex {
    static CAPITAL: OnceLock<Regex> = OnceLock::new();
    CAPITAL.get_or_init(|| Regex::new("([A-Z])").expect("static pattern is valid"))
}

/// Turn a camelCase key into a Title Case column heading.
///
/// `dayOfWeek` becomes `Day Of Week`; digits stay attached to the word
/// before them, so `meal1Time` becomes `Meal1 Time`.
#[must_use]
pub fn title_case(key: &str) -> String {
    let spaced = capital_letter().replace_all(key, " $1");
    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn fit(value: &str) -> String {
    let flat = value.replace('\n', " ");
    if flat.chars().count() <= MAX_CELL_WIDTH {
        flat
    } else {
        let cut: String = flat.chars().take(MAX_CELL_WIDTH - 1).collect();
        format!("{cut}…")
    }
}

/// Render entries as an aligned table, one column per schema field.
///
/// Returns an empty string when there are no entries.
#[must_use]
pub fn render(records: &[Record]) -> String {
    if records.is_empty() {
        return String::new();
    }

    let headers: Vec<String> = Field::ALL.iter().map(|f| title_case(f.key())).collect();
    let rows: Vec<Vec<String>> = records
        .iter()
        .map(|record| record.values().map(fit).collect())
        .collect();

    let widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(col, header)| {
            rows.iter()
                .map(|row| row[col].chars().count())
                .chain(std::iter::once(header.chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let line = |cells: &[String]| -> String {
        cells
            .iter()
            .zip(&widths)
            .map(|(cell, &width)| format!("{cell:<width$}"))
            .collect::<Vec<_>>()
            .join(" | ")
            .trim_end()
            .to_string()
    };

    let mut out = Vec::with_capacity(rows.len() + 2);
    out.push(line(&headers));
    out.push(
        widths
            .iter()
            .map(|w| "-".repeat(*w))
            .collect::<Vec<_>>()
            .join("-+-"),
    );
    out.extend(rows.iter().map(|row| line(row)));
    out.join("\n")
}
