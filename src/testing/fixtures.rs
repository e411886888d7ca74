//! Test fixtures for building synthetic source trees.

use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Testable Python directory (`hello_world.py`, underscore naming).
pub const PYTHON_TESTINFO: &str = r#"folder:
  extension: ".py"
  naming: "underscore"

container:
  image: "python"
  tag: "3.7-alpine"
  cmd: "python {{ source.name }}{{ source.extension }}"
"#;

/// Testable Go directory with a build step (`hello-world.go`).
pub const GO_TESTINFO: &str = r#"folder:
  extension: ".go"
  naming: "hyphen"

container:
  image: "golang"
  tag: "1.12-alpine"
  build: "go build -o {{ source.name }} {{ source.name }}{{ source.extension }}"
  cmd: "./{{ source.name }}"
"#;

/// Directory with naming info but no container recipe.
pub const UNTESTABLE_TESTINFO: &str = r#"folder:
  extension: ".nb"
  naming: "hyphen"

notes:
  - "Requires a commercial license"
"#;

/// A temporary source tree.
///
/// Automatically cleans up when dropped.
///
/// # Example
///
/// ```rust,ignore
/// let fixture = SourceTreeFixture::new()
///     .with_language("python", PYTHON_TESTINFO)
///     .with_file("python/hello_world.py", "print('Hello, World!')");
/// let categories = categorize_sources(fixture.path(), &projects)?;
/// ```
pub struct SourceTreeFixture {
    temp_dir: TempDir,
}

impl SourceTreeFixture {
    /// Create an empty tree.
    ///
    /// # Panics
    ///
    /// Panics if temporary directory creation fails.
    #[must_use]
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Add a language directory with the given `testinfo.yml` contents.
    ///
    /// # Panics
    ///
    /// Panics if the file cannot be written.
    #[must_use]
    pub fn with_language(self, dir: &str, testinfo: &str) -> Self {
        self.write_file(&format!("{}/testinfo.yml", dir), testinfo)
            .expect("Failed to write testinfo.yml");
        self
    }

    /// Add an arbitrary file.
    ///
    /// # Panics
    ///
    /// Panics if the file cannot be written.
    #[must_use]
    pub fn with_file(self, relative_path: &str, content: &str) -> Self {
        self.write_file(relative_path, content)
            .expect("Failed to write fixture file");
        self
    }

    /// Add a `.glotter.yml` in `dir` (empty for the root).
    ///
    /// # Panics
    ///
    /// Panics if the file cannot be written.
    #[must_use]
    pub fn with_glotter_yml(self, dir: &str, content: &str) -> Self {
        let relative = if dir.is_empty() {
            ".glotter.yml".to_string()
        } else {
            format!("{}/.glotter.yml", dir)
        };
        self.write_file(&relative, content)
            .expect("Failed to write .glotter.yml");
        self
    }

    /// Get the root of the tree.
    #[must_use]
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Get the root as a PathBuf (owned).
    #[must_use]
    pub fn path_buf(&self) -> PathBuf {
        self.temp_dir.path().to_path_buf()
    }

    /// Write a file, creating parent directories.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn write_file(&self, relative_path: &str, content: &str) -> std::io::Result<()> {
        let path = self.temp_dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)
    }
}

impl Default for SourceTreeFixture {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_language_writes_testinfo() {
        let fixture = SourceTreeFixture::new().with_language("a/go", GO_TESTINFO);
        let written = std::fs::read_to_string(fixture.path().join("a/go/testinfo.yml")).unwrap();
        assert_eq!(written, GO_TESTINFO);
    }

    #[test]
    fn test_with_glotter_yml_root_and_nested() {
        let fixture = SourceTreeFixture::new()
            .with_glotter_yml("", "projects: {}\n")
            .with_glotter_yml("deep/er", "settings: {}\n");
        assert!(fixture.path().join(".glotter.yml").exists());
        assert!(fixture.path().join("deep/er/.glotter.yml").exists());
    }

    #[test]
    fn test_path_methods() {
        let fixture = SourceTreeFixture::default();
        assert!(fixture.path().exists());
        assert_eq!(fixture.path(), fixture.path_buf().as_path());
    }
}
