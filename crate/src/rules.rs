//! The tables that drive inflection.
//!
//! There are two of them. [`LITERAL_PAIRS`] holds whole-word exceptions which
//! are matched exactly, case included. [`SUFFIX_RULES`] holds the suffix rewrites
//! in the order they are tried, most specific tier first. Both tables are
//! read-only for the life of the process.
//!
//! # Examples
//!
//! ```
//! use es_inclusive::rules::{self, Tier};
//!
//! assert_eq!(rules::literal("el"), Some(("el", "le")));
//! assert_eq!(rules::literal("El"), None);
//!
//! let first = &rules::SUFFIX_RULES[0];
//! assert_eq!((first.suffix, first.replacement), ("or", "er"));
//! assert_eq!(first.tier, Tier::Adjective);
//! ```
use once_cell::sync::Lazy;
use std::{collections::HashMap, fmt};

/// The literal exceptions, as `(word, replacement)` pairs. Uppercase
/// spellings are separate entries rather than case-folded matches.
pub const LITERAL_PAIRS: &[(&str, &str)] = &[
    // articles
    ("el", "le"),
    ("EL", "LE"),
    // pronouns
    ("un", "une"),
];

static LITERALS: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| LITERAL_PAIRS.iter().copied().collect());

/// Returns the literal exception entry for `word` as a `(word,
/// replacement)` pair, if it has one. The lookup is an exact, case-sensitive
/// string match.
pub fn literal(word: &str) -> Option<(&'static str, &'static str)> {
    LITERALS.get_key_value(word).map(|(from, to)| (*from, *to))
}

/// The priority groups that suffix rules belong to. Rules in an earlier
/// tier are always tried before rules in a later one.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Tier {
    /// Adjectives ending in "-or" and "-ora", like "comprador".
    Adjective,
    /// Words with a "c" stem, like "chico", which need a "qu" before "e".
    CStem,
    /// Words with a "g" stem, like "amigo", which need a "gu" before "e".
    GStem,
    /// Everything else ending in "-o", "-a", "-os", or "-as".
    Generic,
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Tier::Adjective => "adjective",
            Tier::CStem => "c-stem",
            Tier::GStem => "g-stem",
            Tier::Generic => "generic",
        };
        f.write_str(name)
    }
}

/// A single suffix rewrite. Both `suffix` and `replacement` are lowercase.
#[derive(Debug, PartialEq)]
pub struct SuffixRule {
    pub suffix: &'static str,
    pub replacement: &'static str,
    pub tier: Tier,
}

impl fmt::Display for SuffixRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -{} => -{}", self.tier, self.suffix, self.replacement)
    }
}

const fn rule(suffix: &'static str, replacement: &'static str, tier: Tier) -> SuffixRule {
    SuffixRule {
        suffix,
        replacement,
        tier,
    }
}

/// Every suffix rule, in the order they are tried. The first rule whose
/// suffix matches wins and no later rule is consulted.
pub static SUFFIX_RULES: &[SuffixRule] = &[
    rule("or", "er", Tier::Adjective),
    rule("ora", "er", Tier::Adjective),
    rule("co", "que", Tier::CStem),
    rule("ca", "que", Tier::CStem),
    rule("cos", "ques", Tier::CStem),
    rule("cas", "ques", Tier::CStem),
    rule("go", "gue", Tier::GStem),
    rule("ga", "gue", Tier::GStem),
    rule("gos", "gues", Tier::GStem),
    rule("gas", "gues", Tier::GStem),
    rule("o", "e", Tier::Generic),
    rule("a", "e", Tier::Generic),
    rule("os", "es", Tier::Generic),
    rule("as", "es", Tier::Generic),
];
