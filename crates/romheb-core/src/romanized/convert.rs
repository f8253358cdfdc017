use tracing::debug_span;

use super::finality::infer_finals;
use super::substitute::substitute;
use super::table::HebrewTable;
use crate::format::{render, OutputFormat};

/// Convert romanized Hebrew to Hebrew script using the global table.
///
/// Never fails: spellings the table does not know pass through unchanged.
///
/// ```
/// use romheb_core::{convert, OutputFormat};
///
/// assert_eq!(convert("ABG", OutputFormat::Unicode), "\u{05D0}\u{05D1}\u{05D2}");
/// assert_eq!(convert("ABG", OutputFormat::Html), "&#x5d0;&#x5d1;&#x5d2;");
/// ```
pub fn convert(input: &str, format: OutputFormat) -> String {
    convert_with_table(HebrewTable::global(), input, format)
}

/// Same as [`convert`], against an explicit table.
pub fn convert_with_table(table: &HebrewTable, input: &str, format: OutputFormat) -> String {
    let _span = debug_span!("convert", len = input.len(), %format).entered();
    let finals = infer_finals(input);
    let hebrew = substitute(&finals, table);
    render(hebrew, format)
}
