//! `untestable.yml`: reasons a language cannot be tested.
//!
//! ```yaml
//! - name: mathematica
//!   reason: "Mathematica requires a commercial license"
//! ```

use std::path::Path;

use serde::Deserialize;

use crate::error::{GlotterError, Result};

/// One exclusion reason.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UntestableEntry {
    /// Language identifier the reason applies to
    pub name: String,
    /// Why the language cannot be tested
    pub reason: String,
}

/// Parse the contents of an `untestable.yml`. An empty document has no
/// entries.
///
/// # Errors
///
/// Returns [`GlotterError::DataFormat`] if the document is not a sequence of
/// `name`/`reason` entries.
pub fn parse_untestable(text: &str) -> Result<Vec<UntestableEntry>> {
    let entries: Option<Vec<UntestableEntry>> = serde_yaml::from_str(text)
        .map_err(|e| GlotterError::data_format(format!("invalid untestable.yml: {}", e)))?;
    Ok(entries.unwrap_or_default())
}

/// Read an `untestable.yml` from disk.
///
/// # Errors
///
/// IO errors, and everything [`parse_untestable`] rejects (with the path
/// attached).
pub fn read_untestable(path: &Path) -> Result<Vec<UntestableEntry>> {
    let text = std::fs::read_to_string(path)?;
    parse_untestable(&text).map_err(|e| e.at_path(path.to_path_buf()))
}

/// Reasons listed for `language`, in file order.
pub fn reasons_for<'a>(
    entries: &'a [UntestableEntry],
    language: &'a str,
) -> impl Iterator<Item = &'a str> + 'a {
    entries
        .iter()
        .filter(move |entry| entry.name == language)
        .map(|entry| entry.reason.as_str())
}
