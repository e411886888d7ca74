//! Per-directory test metadata (`testinfo.yml`).
//!
//! Every language directory carries a `testinfo.yml` describing how its
//! sources are named and how they are run:
//!
//! ```yaml
//! folder:
//!   extension: ".py"
//!   naming: "underscore"
//!
//! container:
//!   image: "python"
//!   tag: "3.7-alpine"
//!   cmd: "python {{ source.name }}{{ source.extension }}"
//!
//! language_display_name: "Python"   # optional
//! notes:                            # optional
//!   - "Some remark about the language"
//! ```
//!
//! The document is a template: it is rendered against a concrete source (see
//! [`template`]) before it is parsed.
//!
//! # Submodules
//!
//! - [`container`] - Container recipe and the testability rule
//! - [`folder`] - File-naming conventions for a directory
//! - [`template`] - `{{ source.* }}` substitution

pub mod container;
pub mod folder;
pub mod template;

use serde::Deserialize;

use crate::error::{GlotterError, Result};
use crate::project::title_case;

pub use container::ContainerInfo;
pub use folder::FolderInfo;
pub use template::TemplateSource;

use folder::RawFolderInfo;

/// Tokens of a language identifier that stand for a symbol.
const LANGUAGE_TEXT_TO_SYMBOL: &[(&str, &str)] = &[("plus", "+"), ("sharp", "#"), ("star", "*")];

/// Test metadata of one language directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestInfo {
    container_info: ContainerInfo,
    folder_info: FolderInfo,
    language_display_name: String,
    notes: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct RawTestInfo {
    folder: Option<RawFolderInfo>,
    container: Option<ContainerInfo>,
    language_display_name: Option<String>,
    notes: Option<Vec<String>>,
}

impl TestInfo {
    /// Create test info from its parts.
    pub fn new(
        container_info: ContainerInfo,
        folder_info: FolderInfo,
        language_display_name: impl Into<String>,
        notes: Vec<String>,
    ) -> Self {
        Self {
            container_info,
            folder_info,
            language_display_name: language_display_name.into(),
            notes,
        }
    }

    /// Build test info from a parsed `testinfo.yml` document.
    ///
    /// `language` is the language identifier (directory name). It is used to
    /// derive the display name when the document does not override it.
    ///
    /// # Errors
    ///
    /// - [`GlotterError::DataFormat`] if the document is not a mapping, has
    ///   the wrong shape, or lacks `folder`
    /// - [`GlotterError::UnknownNamingScheme`] if `folder.naming` is unknown
    pub fn from_value(value: serde_yaml::Value, language: &str) -> Result<Self> {
        if !value.is_mapping() {
            return Err(GlotterError::data_format(format!(
                "testinfo for language '{}' does not contain a mapping",
                language
            )));
        }

        let raw: RawTestInfo = serde_yaml::from_value(value).map_err(|e| {
            GlotterError::data_format(format!(
                "invalid testinfo for language '{}': {}",
                language, e
            ))
        })?;

        let folder = raw.folder.ok_or_else(|| {
            GlotterError::data_format(format!(
                "testinfo for language '{}' is missing required key 'folder'",
                language
            ))
        })?;

        Ok(Self {
            container_info: raw.container.unwrap_or_default(),
            folder_info: FolderInfo::from_raw(folder)?,
            language_display_name: raw
                .language_display_name
                .unwrap_or_else(|| language_display_name(language)),
            notes: raw.notes.unwrap_or_default(),
        })
    }

    /// Parse a `testinfo.yml` document without rendering it.
    ///
    /// # Errors
    ///
    /// Same as [`TestInfo::from_value`], plus [`GlotterError::DataFormat`]
    /// if `text` is not valid YAML.
    pub fn from_yaml(text: &str, language: &str) -> Result<Self> {
        let value: serde_yaml::Value = serde_yaml::from_str(text).map_err(|e| {
            GlotterError::data_format(format!(
                "unparsable testinfo for language '{}': {}",
                language, e
            ))
        })?;
        Self::from_value(value, language)
    }

    /// Render `raw` against `source`, then parse the result.
    ///
    /// # Errors
    ///
    /// Template errors and everything [`TestInfo::from_yaml`] rejects.
    pub fn from_template(raw: &str, source: &TemplateSource) -> Result<Self> {
        let rendered = template::render(raw, source)?;
        Self::from_yaml(&rendered, &source.language)
    }

    /// Container recipe (empty when the language cannot be tested).
    pub fn container_info(&self) -> &ContainerInfo {
        &self.container_info
    }

    /// File-naming conventions.
    pub fn folder_info(&self) -> &FolderInfo {
        &self.folder_info
    }

    /// Human-readable language name.
    pub fn language_display_name(&self) -> &str {
        &self.language_display_name
    }

    /// Free-text notes about the language.
    pub fn notes(&self) -> &[String] {
        &self.notes
    }

    /// Whether sources in this directory can be tested.
    #[must_use]
    pub fn is_testable(&self) -> bool {
        self.container_info.is_testable()
    }

    /// Copy of this test info with `extra` appended to its notes.
    #[must_use]
    pub fn with_extra_notes<I>(mut self, extra: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        self.notes.extend(extra);
        self
    }
}

/// Derive a display name from a language identifier.
///
/// Tokens are split on `-`; `plus`, `sharp`, and `star` become symbols. If
/// any symbol appears the tokens are joined without spaces
/// (`c-plus-plus` -> `C++`), otherwise with single spaces
/// (`objective-c` -> `Objective C`).
pub fn language_display_name(language: &str) -> String {
    let tokens: Vec<&str> = language
        .split('-')
        .map(|token| {
            LANGUAGE_TEXT_TO_SYMBOL
                .iter()
                .find(|(text, _)| *text == token)
                .map_or(token, |(_, symbol)| *symbol)
        })
        .collect();

    let has_symbol = tokens
        .iter()
        .any(|token| LANGUAGE_TEXT_TO_SYMBOL.iter().any(|(_, s)| s == token));
    let separator = if has_symbol { "" } else { " " };

    title_case(&tokens.join(separator))
}
