//! Neutral-marker conventions.
//!
//! Inclusive Spanish is written in several ways: "amigues", "amigxs", and
//! "amig@s" all show up in the wild. This crate only produces the first one.
//! The other two are recognized by name so that callers get a clear error
//! instead of a silent fallback.
//!
//! # Examples
//!
//! ```
//! use es_inclusive::style::{self, Error, Style};
//!
//! let style: Style = "e".parse().unwrap();
//! assert_eq!(style::inclusivize_with("amigos", style), "amigues");
//!
//! assert!(matches!("@".parse::<Style>(), Err(Error::UnsupportedStyle(_))));
//! ```
use crate::inflector;
use std::{borrow::Cow, fmt, str::FromStr};
use thiserror::Error;

/// The convention used to mark a word as neutral.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Style {
    /// Replace the gendered vowel with "e", so "amigos" becomes "amigues".
    E,
}

impl Default for Style {
    fn default() -> Self {
        Style::E
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Style::E => f.write_str("e"),
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum Error {
    #[error("the {0:?} style is not supported yet, only \"e\" is")]
    UnsupportedStyle(String),
    #[error("{0:?} is not a known style")]
    UnknownStyle(String),
}

const UNSUPPORTED: &[&str] = &["x", "@"];

impl FromStr for Style {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lc = s.trim().to_lowercase();
        if lc == "e" {
            return Ok(Style::E);
        }
        if UNSUPPORTED.contains(&lc.as_str()) {
            return Err(Error::UnsupportedStyle(s.to_string()));
        }
        Err(Error::UnknownStyle(s.to_string()))
    }
}

/// Returns the neutral form of `word` in the given style.
pub fn inclusivize_with(word: &str, style: Style) -> Cow<'_, str> {
    match style {
        Style::E => inflector::inclusivize(word),
    }
}
