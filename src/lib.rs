//! Glotter - project naming and source categorization for polyglot
//! sample-program repositories.
//!
//! A sample-program repository holds the same set of projects (hello world,
//! rot13, ...) implemented in many languages, one directory per language.
//! This crate works out what each project's file should be called in each
//! language directory and sorts the files it finds into per-language,
//! per-project, and invalid buckets.
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//!
//! - [`project`] - Naming and acronym schemes, projects and how they render
//! - [`testinfo`] - Per-directory `testinfo.yml` metadata and templating
//! - [`source`] - Source files and source-tree categorization
//! - [`settings`] - `.glotter.yml` discovery and validation
//! - [`error`] - Custom error types and handling
//!
//! # Example
//!
//! ```rust,ignore
//! use glotter::{categorize_sources, Settings};
//!
//! let settings = Settings::load(".")?;
//! let categories = categorize_sources(settings.source_root(), settings.projects())?;
//!
//! for (project, sources) in &categories.testable_by_project {
//!     println!("{}: {} testable sources", project, sources.len());
//! }
//! ```

pub mod error;
pub mod project;
pub mod settings;
pub mod source;
pub mod testinfo;

mod walk;

#[cfg(test)]
pub mod testing;

// Re-export commonly used types
pub use error::{GlotterError, Result};

// Re-export naming types
pub use project::{AcronymScheme, Nameable, NamingScheme, Project};

// Re-export testinfo types
pub use testinfo::{language_display_name, ContainerInfo, FolderInfo, TemplateSource, TestInfo};

// Re-export source types
pub use source::categorize::{README_FILENAME, TESTINFO_FILENAME, UNTESTABLE_FILENAME};
pub use source::untestable::UntestableEntry;
pub use source::{categorize_sources, categorize_sources_with, Source, SourceCategories};

// Re-export settings types
pub use settings::{Settings, SettingsParser, SETTINGS_FILENAME};
