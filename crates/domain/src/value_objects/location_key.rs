//! Location key value object
//!
//! A location key is the title-cased form of whatever the user typed into the
//! search box. The same string is shown to the user and used to deduplicate
//! the search history, so two inputs that differ only in casing end up as the
//! same key.
//!
//! # Examples
//!
//! ```
//! use domain::LocationKey;
//!
//! let key = LocationKey::parse("  united KINGDOM ").unwrap();
//! assert_eq!(key.as_str(), "United Kingdom");
//!
//! // Blank input never produces a key
//! assert!(LocationKey::parse("   ").is_none());
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// Title-case free-form text.
///
/// Lower-cases the whole input, splits on single spaces, upper-cases the
/// first character of every piece and joins the pieces back with single
/// spaces. Runs of spaces survive as empty pieces, and nothing is trimmed.
///
/// A letter that upper-cases to several characters keeps only the first one
/// upper-case (`ß` becomes `Ss`), so applying `normalize` twice changes nothing.
///
/// # Examples
///
/// ```
/// use domain::value_objects::normalize;
///
/// assert_eq!(normalize("new york"), "New York");
/// assert_eq!(normalize("FRANCE"), "France");
/// assert_eq!(normalize("a  b"), "A  B");
/// assert_eq!(normalize(""), "");
/// assert_eq!(normalize("ßoo"), "Ssoo");
/// ```
#[must_use]
pub fn normalize(raw: &str) -> String {
    raw.to_lowercase()
        .split(' ')
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    chars.next().map_or_else(String::new, |first| {
        let mut upper = first.to_uppercase();
        let mut out: String = upper.next().into_iter().collect();
        out.extend(upper.flat_map(char::to_lowercase));
        out.extend(chars);
        out
    })
}

/// Normalized location text, unique within a search history
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LocationKey(String);

impl LocationKey {
    /// Build a key from raw user input.
    ///
    /// Surrounding whitespace is trimmed before normalization. Returns `None`
    /// when nothing is left.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let normalized = normalize(raw.trim());
        if normalized.is_empty() {
            None
        } else {
            Some(Self(normalized))
        }
    }

    /// Build a key from text that is expected to be normalized already.
    ///
    /// The text is trimmed and normalized again, which is a no-op for
    /// well-formed keys.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::EmptyLocation` for blank text.
    pub fn from_normalized(text: impl AsRef<str>) -> Result<Self, DomainError> {
        let normalized = normalize(text.as_ref().trim());
        if normalized.is_empty() {
            return Err(DomainError::EmptyLocation);
        }
        Ok(Self(normalized))
    }

    /// The key as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LocationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for LocationKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for LocationKey {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_normalized(value)
    }
}

impl From<LocationKey> for String {
    fn from(key: LocationKey) -> Self {
        key.0
    }
}
