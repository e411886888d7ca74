//! File-naming conventions for a language directory.

use indexmap::IndexMap;
use serde::Deserialize;

use crate::error::Result;
use crate::project::{Nameable, NamingScheme};

/// Extension and naming scheme that sources in one directory follow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FolderInfo {
    extension: String,
    naming: NamingScheme,
}

/// `folder` section of a `testinfo.yml`, before validation.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct RawFolderInfo {
    #[serde(default)]
    extension: String,
    naming: String,
}

impl FolderInfo {
    /// Create folder info from an extension (including the leading dot, may
    /// be empty) and a naming scheme name.
    ///
    /// # Errors
    ///
    /// Returns [`GlotterError::UnknownNamingScheme`](crate::GlotterError::UnknownNamingScheme)
    /// if `naming` is not a known scheme.
    pub fn new(extension: impl Into<String>, naming: &str) -> Result<Self> {
        Ok(Self::with_scheme(extension, naming.parse()?))
    }

    /// Create folder info from an already-resolved naming scheme.
    pub fn with_scheme(extension: impl Into<String>, naming: NamingScheme) -> Self {
        Self {
            extension: extension.into(),
            naming,
        }
    }

    pub(crate) fn from_raw(raw: RawFolderInfo) -> Result<Self> {
        Self::new(raw.extension, &raw.naming)
    }

    /// Source file extension, including the leading dot.
    pub fn extension(&self) -> &str {
        &self.extension
    }

    /// Naming scheme of source files.
    pub fn naming(&self) -> NamingScheme {
        self.naming
    }

    /// Expected file name of one project in this directory.
    pub fn expected_filename<P: Nameable>(&self, project: &P, include_extension: bool) -> String {
        let mut name = project.name_by_scheme(self.naming);
        if include_extension {
            name.push_str(&self.extension);
        }
        name
    }

    /// Map every project identity to the file name its source is expected
    /// to have in this directory. Order follows `projects`.
    pub fn expected_filenames<P: Nameable>(
        &self,
        projects: &IndexMap<String, P>,
        include_extension: bool,
    ) -> IndexMap<String, String> {
        projects
            .iter()
            .map(|(identity, project)| {
                (
                    identity.clone(),
                    self.expected_filename(project, include_extension),
                )
            })
            .collect()
    }
}
