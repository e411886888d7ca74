//! Source discovery and categorization.
//!
//! Every directory under the source root that contains a `testinfo.yml` is a
//! language directory; its name is the language identifier. For each
//! language directory the expected file name of every project is computed
//! from the directory's [`FolderInfo`](crate::FolderInfo), files that match
//! become [`Source`]s, and files that match nothing (and are not metadata or
//! a README) are reported as bad sources.
//!
//! # Example
//!
//! ```rust,ignore
//! use glotter::{categorize_sources, Settings};
//!
//! let settings = Settings::load(".")?;
//! let categories = categorize_sources(settings.source_root(), settings.projects())?;
//!
//! for path in &categories.bad_sources {
//!     eprintln!("unexpected file: {}", path.display());
//! }
//! ```

use std::collections::{BTreeSet, HashSet};
use std::ffi::{OsStr, OsString};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use indexmap::IndexMap;
use tracing::{debug, info, warn};
use walkdir::WalkDir;

use super::untestable::{read_untestable, reasons_for};
use super::Source;
use crate::error::Result;
use crate::project::Nameable;
use crate::testinfo::TestInfo;
use crate::walk::readable_entries;

/// Name of the metadata file that marks a language directory.
pub const TESTINFO_FILENAME: &str = "testinfo.yml";

/// Name of the optional file listing why a language is untestable.
pub const UNTESTABLE_FILENAME: &str = "untestable.yml";

/// Name of a language directory's documentation file.
pub const README_FILENAME: &str = "README.md";

/// Files in a language directory that are never sources.
const IGNORED_FILENAMES: &[&str] = &[UNTESTABLE_FILENAME, TESTINFO_FILENAME, README_FILENAME];

/// Sources of a tree, grouped three ways.
///
/// The same source may appear in both `by_language` and
/// `testable_by_project`; the buckets share it through an [`Arc`].
#[derive(Debug)]
pub struct SourceCategories<S = Source> {
    /// Language identifier -> sources found in that language's directory
    pub by_language: IndexMap<String, Vec<Arc<S>>>,
    /// Project identity -> testable sources of that project. Every project
    /// has an entry, possibly empty.
    pub testable_by_project: IndexMap<String, Vec<Arc<S>>>,
    /// Language identifier -> the directory's test info, parsed without
    /// rendering, with any `untestable.yml` reasons added to its notes
    pub test_info: IndexMap<String, TestInfo>,
    /// Files that belong to no project, relative to the source root
    pub bad_sources: Vec<PathBuf>,
}

impl<S> Default for SourceCategories<S> {
    fn default() -> Self {
        Self {
            by_language: IndexMap::new(),
            testable_by_project: IndexMap::new(),
            test_info: IndexMap::new(),
            bad_sources: Vec::new(),
        }
    }
}

impl<S> SourceCategories<S> {
    /// Language identifiers, in discovery order.
    pub fn languages(&self) -> impl Iterator<Item = &str> {
        self.by_language.keys().map(String::as_str)
    }

    /// Sources of one language (empty if the language is unknown).
    pub fn sources_for_language(&self, language: &str) -> &[Arc<S>] {
        self.by_language
            .get(language)
            .map_or(&[][..], Vec::as_slice)
    }

    /// Testable sources of one project (empty if the project is unknown).
    pub fn testable_sources(&self, project: &str) -> &[Arc<S>] {
        self.testable_by_project
            .get(project)
            .map_or(&[][..], Vec::as_slice)
    }

    /// Languages whose directory has a usable container recipe.
    pub fn testable_languages(&self) -> impl Iterator<Item = &str> {
        self.test_info
            .iter()
            .filter(|(_, info)| info.is_testable())
            .map(|(language, _)| language.as_str())
    }

    /// Whether any file belongs to no project.
    pub fn has_bad_sources(&self) -> bool {
        !self.bad_sources.is_empty()
    }
}

/// Categorize the sources under `root` using [`Source::new`].
///
/// # Errors
///
/// Fails if `root` does not exist or on the first unreadable or malformed
/// `testinfo.yml` / `untestable.yml`; no partial result is returned.
/// Directories that cannot be listed are skipped with a warning.
pub fn categorize_sources<P: Nameable>(
    root: impl AsRef<Path>,
    projects: &IndexMap<String, P>,
) -> Result<SourceCategories> {
    categorize_sources_with(root, projects, |filename, language, path, test_info| {
        Source::new(filename, language, path, test_info)
    })
}

/// Categorize the sources under `root`, building each source with
/// `make_source(filename, language, directory, raw_testinfo)`.
///
/// # Errors
///
/// Same as [`categorize_sources`], plus any error `make_source` returns.
pub fn categorize_sources_with<P, F, S>(
    root: impl AsRef<Path>,
    projects: &IndexMap<String, P>,
    mut make_source: F,
) -> Result<SourceCategories<S>>
where
    P: Nameable,
    F: FnMut(&str, &str, &Path, &str) -> Result<S>,
    S: AsRef<Source>,
{
    let root = root.as_ref().canonicalize()?;
    let mut categories = SourceCategories::default();
    for identity in projects.keys() {
        categories
            .testable_by_project
            .insert(identity.clone(), Vec::new());
    }

    for entry in readable_entries(WalkDir::new(&root).sort_by_file_name()) {
        if !entry.file_type().is_dir() {
            continue;
        }

        let files = match list_files(entry.path()) {
            Ok(files) => files,
            Err(err) => {
                warn!(
                    "Skipping unreadable directory {}: {}",
                    entry.path().display(),
                    err
                );
                continue;
            }
        };
        if files.contains(OsStr::new(TESTINFO_FILENAME)) {
            scan_language_dir(
                &root,
                entry.path(),
                &files,
                projects,
                &mut make_source,
                &mut categories,
            )?;
        }
    }

    info!(
        "Categorized {} sources in {} languages ({} bad)",
        categories.by_language.values().map(Vec::len).sum::<usize>(),
        categories.by_language.len(),
        categories.bad_sources.len()
    );

    Ok(categories)
}

fn scan_language_dir<P, F, S>(
    root: &Path,
    dir: &Path,
    files: &BTreeSet<OsString>,
    projects: &IndexMap<String, P>,
    make_source: &mut F,
    categories: &mut SourceCategories<S>,
) -> Result<()>
where
    P: Nameable,
    F: FnMut(&str, &str, &Path, &str) -> Result<S>,
    S: AsRef<Source>,
{
    let testinfo_path = dir.join(TESTINFO_FILENAME);
    let raw = fs::read_to_string(&testinfo_path)?;
    let language = dir
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    debug!("Scanning language directory {} ({})", dir.display(), language);

    let mut test_info =
        TestInfo::from_yaml(&raw, &language).map_err(|e| e.at_path(testinfo_path.clone()))?;
    let expected = test_info.folder_info().expected_filenames(projects, true);

    let mut sources = Vec::new();
    let mut matched = HashSet::new();
    for (identity, filename) in &expected {
        if !files.contains(OsStr::new(filename)) {
            continue;
        }
        matched.insert(filename.as_str());

        let source = Arc::new(
            make_source(filename, &language, dir, &raw)
                .map_err(|e| e.at_path(testinfo_path.clone()))?,
        );
        if is_testable(&*source) {
            if let Some(bucket) = categories.testable_by_project.get_mut(identity) {
                bucket.push(Arc::clone(&source));
            }
        }
        sources.push(source);
    }
    debug!("Found {} sources for {}", sources.len(), language);
    categories
        .by_language
        .entry(language.clone())
        .or_default()
        .extend(sources);

    if !test_info.is_testable() && files.contains(OsStr::new(UNTESTABLE_FILENAME)) {
        let entries = read_untestable(&dir.join(UNTESTABLE_FILENAME))?;
        let reasons: Vec<String> = reasons_for(&entries, &language)
            .map(str::to_string)
            .collect();
        test_info = test_info.with_extra_notes(reasons);
    }
    categories.test_info.insert(language, test_info);

    let relative_dir = dir.strip_prefix(root).unwrap_or(dir);
    categories.bad_sources.extend(
        files
            .iter()
            .filter(|f| {
                f.to_str().map_or(true, |name| {
                    !matched.contains(name) && !IGNORED_FILENAMES.contains(&name)
                })
            })
            .map(|f| relative_dir.join(f)),
    );

    Ok(())
}

fn is_testable<S: AsRef<Source>>(source: &S) -> bool {
    source.as_ref().test_info().is_testable()
}

/// Names of the regular files directly inside `dir`, sorted. Names are
/// kept as the OS spells them; a name that is not UTF-8 can never match a
/// project.
fn list_files(dir: &Path) -> Result<BTreeSet<OsString>> {
    let mut files = BTreeSet::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if entry.path().is_file() {
            files.insert(entry.file_name());
        }
    }
    Ok(files)
}
