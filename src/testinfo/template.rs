//! Rendering of `testinfo.yml` templates.
//!
//! A testinfo document may reference the source it is being rendered for
//! with `{{ source.<attr> }}` placeholders, e.g.
//! `cmd: "python {{ source.name }}{{ source.extension }}"`. `source` is the
//! only variable in scope. Backslashes are literal text, so
//! `.\{{ source.name }}` renders as `.\hello_world`.

use std::borrow::Cow;
use std::path::Path;

use handlebars::{Context, Handlebars, Helper, HelperResult, Output, RenderContext};
use serde::Serialize;
use tracing::debug;

use crate::error::{GlotterError, Result};
use crate::source::split_filename;

/// The attributes of a source that a template can reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateSource {
    /// File name up to the first dot
    pub name: String,
    /// Everything from the first dot onward
    pub extension: String,
    /// File name including extension
    pub filename: String,
    /// Language identifier (the directory name)
    pub language: String,
    /// Directory containing the source
    pub path: String,
    /// `path` joined with `filename`
    pub full_path: String,
}

impl TemplateSource {
    /// Build the template view of a source file.
    pub fn new(filename: &str, language: &str, path: &Path) -> Self {
        let (name, extension) = split_filename(filename);
        Self {
            name: name.to_string(),
            extension: extension.to_string(),
            filename: filename.to_string(),
            language: language.to_string(),
            path: path.display().to_string(),
            full_path: path.join(filename).display().to_string(),
        }
    }
}

#[derive(Serialize)]
struct TemplateScope<'a> {
    source: &'a TemplateSource,
}

/// Helper standing in for a literal `\` in the template text.
const BACKSLASH_HELPER: &str = "literal_backslash";

fn literal_backslash(
    _: &Helper,
    _: &Handlebars,
    _: &Context,
    _: &mut RenderContext,
    out: &mut dyn Output,
) -> HelperResult {
    out.write("\\")?;
    Ok(())
}

/// Handlebars reads `\{{` as an escaped mustache; route every backslash
/// through [`literal_backslash`] so it is copied through unchanged.
fn protect_backslashes(raw: &str) -> Cow<'_, str> {
    if raw.contains('\\') {
        Cow::Owned(raw.replace('\\', &format!("{{{{{}}}}}", BACKSLASH_HELPER)))
    } else {
        Cow::Borrowed(raw)
    }
}

/// Substitute every `{{ source.<attr> }}` in `raw` with the attribute of
/// `source`.
///
/// # Errors
///
/// Returns [`GlotterError::DataFormat`] if the template is malformed or
/// references something other than a source attribute.
pub fn render(raw: &str, source: &TemplateSource) -> Result<String> {
    let mut registry = Handlebars::new();
    registry.set_strict_mode(true);
    registry.register_escape_fn(handlebars::no_escape);
    registry.register_helper(BACKSLASH_HELPER, Box::new(literal_backslash));

    debug!(
        "Rendering testinfo template for {} ({})",
        source.filename, source.language
    );

    registry
        .render_template(&protect_backslashes(raw), &TemplateScope { source })
        .map_err(|e| {
            GlotterError::data_format(format!(
                "invalid testinfo template for language '{}': {}",
                source.language, e
            ))
        })
}
