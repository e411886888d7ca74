//! Project identities and how they render to file names.
//!
//! A project is an ordered list of words plus an optional set of acronyms.
//! The [`Nameable`] trait turns those words into a file-name-shaped
//! identifier under any [`NamingScheme`], and into a human-readable display
//! name.
//!
//! # Example
//!
//! ```rust
//! use glotter::{AcronymScheme, Nameable, NamingScheme, Project};
//!
//! let project = Project::new(["file", "io"])?
//!     .with_acronyms(["io"])
//!     .with_acronym_scheme(AcronymScheme::Upper);
//!
//! assert_eq!(project.name_by_scheme(NamingScheme::Pascal), "FileIO");
//! assert_eq!(project.name_by_scheme(NamingScheme::Hyphen), "file-IO");
//! assert_eq!(project.display_name(), "File IO");
//! # Ok::<(), glotter::GlotterError>(())
//! ```

pub mod scheme;

use std::collections::BTreeSet;

use crate::error::{GlotterError, Result};

pub use scheme::{AcronymScheme, NamingScheme};

/// Anything that can render its words under a naming scheme.
///
/// Implementors provide the words, the acronym membership test, and the
/// acronym scheme; the rendering itself is shared.
pub trait Nameable {
    /// Project words, in order.
    fn words(&self) -> &[String];

    /// Case-insensitive acronym membership test.
    fn is_acronym(&self, word: &str) -> bool;

    /// Acronym scheme applied to acronym words.
    fn acronym_scheme(&self) -> AcronymScheme;

    /// Render the words under `naming`.
    fn name_by_scheme(&self, naming: NamingScheme) -> String {
        let words = self.words();
        match naming {
            NamingScheme::Hyphen | NamingScheme::Underscore => words
                .iter()
                .map(|word| self.resolve_acronym(word, naming))
                .collect::<Vec<_>>()
                .join(naming.separator()),
            NamingScheme::Camel => match words.split_first() {
                Some((first, rest)) => {
                    let mut name = first.to_lowercase();
                    for word in rest {
                        name.push_str(&self.resolve_acronym(&title_case(word), naming));
                    }
                    name
                }
                None => String::new(),
            },
            NamingScheme::Pascal => words
                .iter()
                .map(|word| self.resolve_acronym(&title_case(word), naming))
                .collect(),
            NamingScheme::Lower => words.iter().map(|word| word.to_lowercase()).collect(),
        }
    }

    /// Render the words under a naming scheme given by name.
    ///
    /// Fails with [`GlotterError::UnknownNamingScheme`] before anything is
    /// rendered if `naming` is not a known scheme.
    fn name_by_scheme_str(&self, naming: &str) -> Result<String> {
        Ok(self.name_by_scheme(naming.parse()?))
    }

    /// Space-separated, title-cased, acronym-resolved words
    /// (e.g. `Hello World`).
    fn display_name(&self) -> String {
        self.words()
            .iter()
            .map(|word| self.resolve_acronym(&title_case(word), NamingScheme::Underscore))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Apply the acronym scheme to `word` if it is an acronym, otherwise
    /// return it unchanged.
    fn resolve_acronym(&self, word: &str, naming: NamingScheme) -> String {
        if self.is_acronym(word) {
            if let Some(resolved) = self.acronym_scheme().apply(word, naming) {
                return resolved;
            }
        }
        word.to_string()
    }
}

/// A project: the words that make up its name and its acronyms.
///
/// Construction validates the words; once built a project is never modified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    words: Vec<String>,
    acronyms: BTreeSet<String>,
    acronym_scheme: AcronymScheme,
}

impl Project {
    /// Create a project with no acronyms and the default acronym scheme.
    ///
    /// # Errors
    ///
    /// Returns [`GlotterError::InvalidConfig`] if `words` is empty or
    /// contains an empty word.
    pub fn new<I, S>(words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let words: Vec<String> = words.into_iter().map(Into::into).collect();
        if words.is_empty() {
            return Err(GlotterError::invalid_config(
                "words",
                "a project needs at least one word",
            ));
        }
        if let Some(pos) = words.iter().position(|w| w.is_empty()) {
            return Err(GlotterError::invalid_config(
                format!("words[{}]", pos),
                "project words must not be empty",
            ));
        }

        Ok(Self {
            words,
            acronyms: BTreeSet::new(),
            acronym_scheme: AcronymScheme::default(),
        })
    }

    /// Set the acronyms. Stored uppercase, so membership is case-insensitive.
    #[must_use]
    pub fn with_acronyms<I, S>(mut self, acronyms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.acronyms = acronyms
            .into_iter()
            .map(|a| a.as_ref().to_uppercase())
            .collect();
        self
    }

    /// Set the acronym scheme.
    #[must_use]
    pub fn with_acronym_scheme(mut self, acronym_scheme: AcronymScheme) -> Self {
        self.acronym_scheme = acronym_scheme;
        self
    }

    /// Acronyms, uppercase.
    pub fn acronyms(&self) -> impl Iterator<Item = &str> {
        self.acronyms.iter().map(String::as_str)
    }
}

impl Nameable for Project {
    fn words(&self) -> &[String] {
        &self.words
    }

    fn is_acronym(&self, word: &str) -> bool {
        self.acronyms.contains(&word.to_uppercase())
    }

    fn acronym_scheme(&self) -> AcronymScheme {
        self.acronym_scheme
    }
}

/// Title-case a word: a letter following a non-letter is uppercased, every
/// other letter is lowercased (`c++` -> `C++`, `abc2def` -> `Abc2Def`).
pub(crate) fn title_case(word: &str) -> String {
    let mut out = String::with_capacity(word.len());
    let mut prev_is_letter = false;
    for c in word.chars() {
        if c.is_alphabetic() {
            if prev_is_letter {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_is_letter = true;
        } else {
            out.push(c);
            prev_is_letter = false;
        }
    }
    out
}
