//! The [Word] struct.
//!
//! # Examples
//!
//! ```
//! use es_inclusive::word::{Casing, Word};
//!
//! let word = Word::new("AMIGAS");
//! assert_eq!(word.casing(), Casing::Upper);
//! assert_eq!(word.inclusive(), "AMIGUES");
//! assert!(!word.is_neutral());
//!
//! assert!(Word::new("docente").is_neutral());
//! ```
use crate::{inflector, util};
use std::borrow::Cow;

/// How the letters of a word are capitalized. Characters without case, like
/// digits and punctuation, are ignored.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Casing {
    /// No uppercase letters, "alumna". A word with no letters at all is
    /// also classed as lowercase.
    Lower,
    /// No lowercase letters, "ALUMNA".
    Upper,
    /// An uppercase first letter followed only by lowercase ones, "Alumna".
    Title,
    /// Anything else, "aLuMnA".
    Mixed,
}

/// A `Word` is a single Spanish word. Note that nothing checks that it
/// actually is one, so `Word::new("dog")` works too, for some value of
/// "works". Splitting text into words is up to the caller.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Word<'a>(&'a str);

impl<'a> Word<'a> {
    pub fn new(word: &'a str) -> Self {
        Self(word)
    }

    pub fn as_str(&self) -> &'a str {
        self.0
    }

    pub fn casing(&self) -> Casing {
        if util::is_lowercase(self.0) {
            return Casing::Lower;
        }
        if util::is_uppercase(self.0) {
            return Casing::Upper;
        }

        let mut letters = self.0.chars().filter(|c| c.is_uppercase() || c.is_lowercase());
        match letters.next() {
            Some(first) if first.is_uppercase() && letters.all(|c| !c.is_uppercase()) => {
                Casing::Title
            }
            _ => Casing::Mixed,
        }
    }

    /// Returns the gender-neutral form of the word. Whenever possible this
    /// method avoids allocating a new [String](std::string::String).
    pub fn inclusive(&self) -> Cow<'a, str> {
        inflector::inclusivize(self.0)
    }

    /// Returns true if no literal exception or suffix rule changes the word.
    pub fn is_neutral(&self) -> bool {
        matches!(self.inclusive(), Cow::Borrowed(w) if w == self.0)
    }
}
