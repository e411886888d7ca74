//! Source files and their categorization.
//!
//! # Submodules
//!
//! - [`categorize`] - Walk a source tree and bucket its sources
//! - [`untestable`] - `untestable.yml` exclusion reasons

pub mod categorize;
pub mod untestable;

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::testinfo::{TemplateSource, TestInfo};

pub use categorize::{categorize_sources, categorize_sources_with, SourceCategories};

/// One source file on disk and the rendered test info of its directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Source {
    filename: String,
    language: String,
    path: PathBuf,
    test_info: TestInfo,
}

impl Source {
    /// Create a source, rendering `test_info_template` (the raw contents of
    /// the directory's `testinfo.yml`) against this source.
    ///
    /// # Errors
    ///
    /// Returns an error if the template or the rendered document is invalid.
    pub fn new(
        filename: impl Into<String>,
        language: impl Into<String>,
        path: impl Into<PathBuf>,
        test_info_template: &str,
    ) -> Result<Self> {
        let filename = filename.into();
        let language = language.into();
        let path = path.into();
        let test_info = TestInfo::from_template(
            test_info_template,
            &TemplateSource::new(&filename, &language, &path),
        )?;

        Ok(Self {
            filename,
            language,
            path,
            test_info,
        })
    }

    /// File name including extension.
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Language identifier (name of the language directory).
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Directory containing the source.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Test info rendered for this source.
    pub fn test_info(&self) -> &TestInfo {
        &self.test_info
    }

    /// File name up to the first dot.
    pub fn name(&self) -> &str {
        split_filename(&self.filename).0
    }

    /// Everything from the first dot onward (may be multi-part, e.g.
    /// `.tar.gz`, or empty).
    pub fn extension(&self) -> &str {
        split_filename(&self.filename).1
    }

    /// Directory joined with file name.
    pub fn full_path(&self) -> PathBuf {
        self.path.join(&self.filename)
    }
}

impl AsRef<Source> for Source {
    fn as_ref(&self) -> &Source {
        self
    }
}

/// Split a file name at its first dot into name and extension.
pub(crate) fn split_filename(filename: &str) -> (&str, &str) {
    match filename.find('.') {
        Some(pos) => filename.split_at(pos),
        None => (filename, ""),
    }
}
