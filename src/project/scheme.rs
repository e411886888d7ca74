//! Naming and acronym schemes.
//!
//! A [`NamingScheme`] decides how a project's words are joined into a file
//! name; an [`AcronymScheme`] overrides the casing of words that are known
//! acronyms.
//!
//! # Example
//!
//! ```rust
//! use glotter::{AcronymScheme, NamingScheme};
//!
//! let naming: NamingScheme = "pascal".parse().unwrap();
//! assert_eq!(naming, NamingScheme::Pascal);
//! assert_eq!(naming.to_string(), "pascal");
//!
//! assert_eq!(AcronymScheme::default(), AcronymScheme::TwoLetterLimit);
//! ```

use std::fmt;
use std::str::FromStr;

use crate::error::GlotterError;

/// How project words are joined into a file name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NamingScheme {
    /// Words separated by a hyphen (`hello-world`)
    Hyphen,
    /// Words separated by an underscore (`hello_world`)
    Underscore,
    /// First word lowercase, the rest title case, no separator (`helloWorld`)
    Camel,
    /// Every word title case, no separator (`HelloWorld`)
    Pascal,
    /// Every word lowercase, no separator (`helloworld`)
    Lower,
}

static ALL_NAMING_SCHEMES: &[NamingScheme] = &[
    NamingScheme::Hyphen,
    NamingScheme::Underscore,
    NamingScheme::Camel,
    NamingScheme::Pascal,
    NamingScheme::Lower,
];

impl NamingScheme {
    /// Returns every naming scheme.
    pub fn all() -> &'static [NamingScheme] {
        ALL_NAMING_SCHEMES
    }

    /// Name used for this scheme in `testinfo.yml`.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            NamingScheme::Hyphen => "hyphen",
            NamingScheme::Underscore => "underscore",
            NamingScheme::Camel => "camel",
            NamingScheme::Pascal => "pascal",
            NamingScheme::Lower => "lower",
        }
    }

    /// Separator placed between words.
    #[must_use]
    pub fn separator(&self) -> &'static str {
        match self {
            NamingScheme::Hyphen => "-",
            NamingScheme::Underscore => "_",
            NamingScheme::Camel | NamingScheme::Pascal | NamingScheme::Lower => "",
        }
    }

    /// Whether short acronyms are forced to uppercase under
    /// [`AcronymScheme::TwoLetterLimit`].
    #[must_use]
    pub fn uppercases_short_acronyms(&self) -> bool {
        matches!(self, NamingScheme::Camel | NamingScheme::Pascal)
    }
}

impl fmt::Display for NamingScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NamingScheme {
    type Err = GlotterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "hyphen" => Ok(NamingScheme::Hyphen),
            "underscore" => Ok(NamingScheme::Underscore),
            "camel" => Ok(NamingScheme::Camel),
            "pascal" => Ok(NamingScheme::Pascal),
            "lower" => Ok(NamingScheme::Lower),
            _ => Err(GlotterError::UnknownNamingScheme {
                value: s.to_string(),
            }),
        }
    }
}

/// How a word found in a project's acronym list is cased.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AcronymScheme {
    /// Acronym is always lowercase
    Lower,
    /// Acronym is always uppercase
    Upper,
    /// Acronym is uppercase only when it has at most two letters and the
    /// naming scheme is camel or pascal
    #[default]
    TwoLetterLimit,
}

impl AcronymScheme {
    /// Longest acronym that [`AcronymScheme::TwoLetterLimit`] uppercases.
    pub const TWO_LETTER_LIMIT: usize = 2;

    /// Returns every acronym scheme.
    pub fn all() -> &'static [AcronymScheme] {
        &[
            AcronymScheme::Lower,
            AcronymScheme::Upper,
            AcronymScheme::TwoLetterLimit,
        ]
    }

    /// Name used for this scheme in `.glotter.yml`.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            AcronymScheme::Lower => "lower",
            AcronymScheme::Upper => "upper",
            AcronymScheme::TwoLetterLimit => "two_letter_limit",
        }
    }

    /// Apply this scheme to a word already known to be an acronym.
    ///
    /// Returns `None` when the scheme does not override the word, in which
    /// case the naming scheme's own casing stands.
    #[must_use]
    pub fn apply(&self, word: &str, naming: NamingScheme) -> Option<String> {
        match self {
            AcronymScheme::Upper => Some(word.to_uppercase()),
            AcronymScheme::Lower => Some(word.to_lowercase()),
            AcronymScheme::TwoLetterLimit => (word.chars().count() <= Self::TWO_LETTER_LIMIT
                && naming.uppercases_short_acronyms())
            .then(|| word.to_uppercase()),
        }
    }
}

impl fmt::Display for AcronymScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AcronymScheme {
    type Err = GlotterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "lower" => Ok(AcronymScheme::Lower),
            "upper" => Ok(AcronymScheme::Upper),
            "two_letter_limit" => Ok(AcronymScheme::TwoLetterLimit),
            _ => Err(GlotterError::UnknownAcronymScheme {
                value: s.to_string(),
            }),
        }
    }
}
