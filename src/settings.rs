//! Project settings (`.glotter.yml`).
//!
//! ```yaml
//! settings:
//!   acronym_scheme: "two_letter_limit"   # lower | upper | two_letter_limit
//!   source_root: "archive"               # relative to this file
//!
//! projects:
//!   helloworld:
//!     words: ["hello", "world"]
//!   fileinputoutput:
//!     words: ["file", "input", "output"]
//!     acronyms: ["io"]
//!     acronym_scheme: "upper"
//! ```
//!
//! The file is searched for under the project root; the shallowest match
//! wins. A missing file is not an error: settings fall back to defaults and
//! a warning is logged.

use std::fs;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::Deserialize;
use serde_yaml::{Mapping, Value};
use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::error::{GlotterError, Result};
use crate::project::{AcronymScheme, Project};
use crate::walk::readable_entries;

/// Name of the settings file.
pub const SETTINGS_FILENAME: &str = ".glotter.yml";

/// Locates and parses `.glotter.yml`.
#[derive(Debug, Clone)]
pub struct SettingsParser {
    project_root: PathBuf,
    yml_path: PathBuf,
    found: bool,
    yml: Mapping,
}

impl SettingsParser {
    /// Search `project_root` for `.glotter.yml` and parse it.
    ///
    /// When no file exists a warning is logged, `yml_path` is the project
    /// root, and the parsed document is empty.
    ///
    /// # Errors
    ///
    /// - [`GlotterError::Config`] if the file is not valid YAML or does not
    ///   contain a mapping
    /// - IO errors while reading the file; unreadable directories are
    ///   skipped during the search
    pub fn new(project_root: impl AsRef<Path>) -> Result<Self> {
        let project_root = project_root.as_ref().to_path_buf();

        let Some(yml_path) = locate_settings(&project_root) else {
            warn!(
                "{} not found in directory \"{}\"",
                SETTINGS_FILENAME,
                project_root.display()
            );
            return Ok(Self {
                yml_path: project_root.clone(),
                project_root,
                found: false,
                yml: Mapping::new(),
            });
        };

        debug!("Loading settings from {}", yml_path.display());
        let content = fs::read_to_string(&yml_path)?;
        let value: Value = serde_yaml::from_str(&content).map_err(|e| {
            GlotterError::config_with_path(
                format!("failed to parse {}: {}", SETTINGS_FILENAME, e),
                yml_path.clone(),
            )
        })?;

        let yml = match value {
            Value::Null => Mapping::new(),
            Value::Mapping(mapping) => mapping,
            _ => {
                return Err(GlotterError::config_with_path(
                    format!("{} does not contain a mapping", SETTINGS_FILENAME),
                    yml_path,
                ))
            }
        };

        Ok(Self {
            project_root,
            yml_path,
            found: true,
            yml,
        })
    }

    /// Root the search started from.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Path of the settings file, or the project root if none was found.
    pub fn yml_path(&self) -> &Path {
        &self.yml_path
    }

    /// Whether a settings file was found.
    pub fn found(&self) -> bool {
        self.found
    }

    /// Parsed document.
    pub fn yml(&self) -> &Mapping {
        &self.yml
    }

    /// Directory relative paths in the settings resolve against.
    pub fn base_dir(&self) -> &Path {
        if self.found {
            self.yml_path.parent().unwrap_or(&self.project_root)
        } else {
            &self.project_root
        }
    }

    /// A top-level section, which must be a mapping when present.
    fn section(&self, name: &str) -> Result<Option<&Mapping>> {
        match self.yml.get(name) {
            None => Ok(None),
            Some(Value::Mapping(mapping)) => Ok(Some(mapping)),
            Some(_) => Err(GlotterError::config_with_path(
                format!("{} does not contain a mapping", name),
                self.yml_path.clone(),
            )),
        }
    }
}

/// Find the shallowest `.glotter.yml` under `root`.
fn locate_settings(root: &Path) -> Option<PathBuf> {
    let mut best: Option<(usize, PathBuf)> = None;
    for entry in readable_entries(WalkDir::new(root).sort_by_file_name()) {
        if !entry.file_type().is_file() || entry.file_name() != SETTINGS_FILENAME {
            continue;
        }
        if best.as_ref().map_or(true, |(depth, _)| entry.depth() < *depth) {
            best = Some((entry.depth(), entry.into_path()));
        }
    }
    best.map(|(_, path)| path)
}

#[derive(Debug, Default, Deserialize)]
struct RawGlobalSettings {
    acronym_scheme: Option<String>,
    source_root: Option<PathBuf>,
}

#[derive(Debug, Deserialize)]
struct RawProject {
    words: Vec<String>,
    #[serde(default)]
    acronyms: Vec<String>,
    acronym_scheme: Option<String>,
}

/// Global settings and the projects they define.
#[derive(Debug, Clone)]
pub struct Settings {
    project_root: PathBuf,
    acronym_scheme: AcronymScheme,
    source_root: PathBuf,
    projects: IndexMap<String, Project>,
}

impl Settings {
    /// Locate, parse, and validate the settings under `project_root`.
    ///
    /// # Errors
    ///
    /// See [`SettingsParser::new`] and [`Settings::from_parser`].
    pub fn load(project_root: impl AsRef<Path>) -> Result<Self> {
        Self::from_parser(&SettingsParser::new(project_root)?)
    }

    /// Validate an already-parsed settings document.
    ///
    /// # Errors
    ///
    /// - [`GlotterError::Config`] if `settings` or `projects` is not a mapping
    /// - [`GlotterError::UnknownAcronymScheme`] for an unknown scheme name
    /// - [`GlotterError::InvalidConfig`] for a malformed project
    pub fn from_parser(parser: &SettingsParser) -> Result<Self> {
        let raw = match parser.section("settings")? {
            Some(section) => serde_yaml::from_value::<RawGlobalSettings>(Value::Mapping(
                section.clone(),
            ))
            .map_err(|e| GlotterError::invalid_config("settings", e.to_string()))?,
            None => RawGlobalSettings::default(),
        };

        let acronym_scheme: AcronymScheme = raw
            .acronym_scheme
            .as_deref()
            .map(str::parse::<AcronymScheme>)
            .transpose()?
            .unwrap_or_default();

        let base_dir = parser.base_dir();
        let source_root = match raw.source_root {
            Some(root) if !root.as_os_str().is_empty() => base_dir.join(root),
            _ => base_dir.to_path_buf(),
        };
        let source_root = source_root.canonicalize().unwrap_or(source_root);

        let mut projects = IndexMap::new();
        if let Some(section) = parser.section("projects")? {
            for (key, value) in section {
                let identity = key.as_str().ok_or_else(|| {
                    GlotterError::invalid_config("projects", "project names must be strings")
                })?;
                let project = parse_project(identity, value, acronym_scheme)?;
                projects.insert(identity.to_string(), project);
            }
        }

        debug!(
            "Loaded {} projects, source root {}",
            projects.len(),
            source_root.display()
        );

        Ok(Self {
            project_root: parser.project_root().to_path_buf(),
            acronym_scheme,
            source_root,
            projects,
        })
    }

    /// Root the settings search started from.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Default acronym scheme for projects that do not set one.
    pub fn acronym_scheme(&self) -> AcronymScheme {
        self.acronym_scheme
    }

    /// Root directory of the source tree.
    pub fn source_root(&self) -> &Path {
        &self.source_root
    }

    /// Projects, keyed by identity, in file order.
    pub fn projects(&self) -> &IndexMap<String, Project> {
        &self.projects
    }

    /// One project by identity.
    pub fn project(&self, identity: &str) -> Option<&Project> {
        self.projects.get(identity)
    }
}

fn parse_project(identity: &str, value: &Value, default_scheme: AcronymScheme) -> Result<Project> {
    let field = format!("projects.{}", identity);
    let raw: RawProject = serde_yaml::from_value(value.clone())
        .map_err(|e| GlotterError::invalid_config(field.clone(), e.to_string()))?;

    let acronym_scheme = match raw.acronym_scheme.as_deref() {
        Some(name) => name.parse()?,
        None => default_scheme,
    };

    let project = Project::new(raw.words).map_err(|e| match e {
        GlotterError::InvalidConfig {
            field: inner,
            reason,
        } => GlotterError::invalid_config(format!("{}.{}", field, inner), reason),
        other => other,
    })?;

    Ok(project
        .with_acronyms(raw.acronyms)
        .with_acronym_scheme(acronym_scheme))
}
