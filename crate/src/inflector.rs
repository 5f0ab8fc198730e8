//! The inflection engine.
//!
//! [`inclusivize`] looks a word up in the literal exception table, then tries
//! each suffix rule in priority order, and finally gives the word back
//! untouched if nothing applied. It never fails.
//!
//! # Examples
//!
//! ```
//! use es_inclusive::inflector::{explain, inclusivize, Inflection};
//! use es_inclusive::rules::Tier;
//!
//! assert_eq!(inclusivize("chicas"), "chiques");
//! assert_eq!(inclusivize("MAESTROS"), "MAESTRES");
//! assert_eq!(inclusivize("docente"), "docente");
//!
//! match explain("amiga") {
//!     Inflection::Suffix(rule) => assert_eq!(rule.tier, Tier::GStem),
//!     other => panic!("unexpected {:?}", other),
//! }
//! ```
use crate::{
    rules::{self, SuffixRule, SUFFIX_RULES},
    util,
};
use std::{borrow::Cow, fmt};
use tracing::trace;

/// Which outcome [`explain`] picked for a word.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Inflection {
    /// The word is a literal exception and is replaced as a whole.
    Literal {
        from: &'static str,
        to: &'static str,
    },
    /// The first suffix rule that matched the word.
    Suffix(&'static SuffixRule),
    /// Nothing applies, so the word stays as it is.
    Identity,
}

impl Inflection {
    /// Rewrites `word` according to this outcome. The word should be the
    /// one this outcome was computed for.
    pub fn apply<'a>(&self, word: &'a str) -> Cow<'a, str> {
        match self {
            Inflection::Literal { to, .. } => Cow::Borrowed(*to),
            Inflection::Suffix(rule) => inflect(word, rule.suffix, rule.replacement),
            Inflection::Identity => Cow::Borrowed(word),
        }
    }
}

impl fmt::Display for Inflection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Inflection::Literal { from, to } => write!(f, "literal {} => {}", from, to),
            Inflection::Suffix(rule) => write!(f, "{}", rule),
            Inflection::Identity => f.write_str("identity"),
        }
    }
}

/// Returns true if `word` ends with `suffix`, ignoring the case of the
/// word. The suffix must be given in lowercase. An empty suffix always
/// matches.
pub fn inflectable(word: &str, suffix: &str) -> bool {
    util::split_suffix(word, suffix).is_some()
}

/// Replaces the trailing `suffix` of `word` with `replacement`, keeping the
/// stem exactly as it was written.
///
/// The replacement takes the case of the suffix it replaces, so "alumno"
/// becomes "alumne" and "ALUMNO" becomes "ALUMNE". Only the matched suffix
/// decides this, not the rest of the word. If the suffix is written in mixed
/// case (like the "Os" in "maestrOs") or the word does not end with it at
/// all, the word is returned unchanged.
pub fn inflect<'a>(word: &'a str, suffix: &str, replacement: &'static str) -> Cow<'a, str> {
    let (stem, tail) = match util::split_suffix(word, suffix) {
        Some(split) => split,
        None => return Cow::Borrowed(word),
    };
    match util::suffix_case(tail, suffix) {
        Some(case) => {
            let mut inflected = String::with_capacity(stem.len() + replacement.len());
            inflected.push_str(stem);
            inflected.push_str(&case.apply(replacement));
            Cow::Owned(inflected)
        }
        None => Cow::Borrowed(word),
    }
}

/// Works out which literal exception or suffix rule applies to `word`
/// without rewriting it.
pub fn explain(word: &str) -> Inflection {
    if let Some((from, to)) = rules::literal(word) {
        trace!(word, to, "literal exception");
        return Inflection::Literal { from, to };
    }

    match SUFFIX_RULES.iter().find(|r| inflectable(word, r.suffix)) {
        Some(rule) => {
            trace!(word, tier = %rule.tier, suffix = rule.suffix, "suffix rule");
            Inflection::Suffix(rule)
        }
        None => {
            trace!(word, "no rule applies");
            Inflection::Identity
        }
    }
}

/// Returns the gender-neutral form of `word`, or `word` itself when no rule
/// applies. When nothing changes the result borrows from `word`.
pub fn inclusivize(word: &str) -> Cow<'_, str> {
    explain(word).apply(word)
}

#[cfg(test)]
mod tests {
    use super::{inclusivize, Inflection};
    use crate::rules::{Tier, SUFFIX_RULES};
    use std::borrow::Cow;

    fn expect_inclusive(tests: &[(&str, &str)]) {
        for test in tests {
            assert_eq!(
                inclusivize(test.0),
                test.1,
                "inclusivize({:?}) = {:?}",
                test.0,
                test.1,
            );
        }
    }

    #[test]
    fn nouns() {
        expect_inclusive(&[
            // neutral
            ("docente", "docente"),
            // masculine
            ("alumno", "alumne"),
            ("enfermero", "enfermere"),
            // feminine
            ("enfermera", "enfermere"),
            ("maestra", "maestre"),
            ("ALUMNO", "ALUMNE"),
            ("ALUMNA", "ALUMNE"),
            // plurals
            ("maestros", "maestres"),
            ("maestras", "maestres"),
            ("MAESTROS", "MAESTRES"),
            ("MAESTRAS", "MAESTRES"),
        ]);
    }

    #[test]
    fn c_and_g_stems() {
        expect_inclusive(&[
            ("chico", "chique"),
            ("chica", "chique"),
            ("chicas", "chiques"),
            ("chicos", "chiques"),
            ("CHICOS", "CHIQUES"),
            ("amigo", "amigue"),
            ("amiga", "amigue"),
            ("amigas", "amigues"),
            ("amigos", "amigues"),
            ("AMIGA", "AMIGUE"),
        ]);
    }

    #[test]
    fn articles() {
        expect_inclusive(&[
            ("el", "le"),
            ("la", "le"),
            ("los", "les"),
            ("las", "les"),
            ("LAS", "LES"),
            ("LOS", "LES"),
            ("EL", "LE"),
            ("LA", "LE"),
        ]);
    }

    #[test]
    fn adjectives() {
        expect_inclusive(&[
            ("comprador", "comprader"),
            ("pensador", "pensader"),
            ("vendedor", "vendeder"),
            ("compradora", "comprader"),
            ("pensadora", "pensader"),
            ("COMPRADORA", "COMPRADER"),
        ]);
    }

    #[test]
    fn pronouns() {
        expect_inclusive(&[
            ("un", "une"),
            ("uno", "une"),
            ("una", "une"),
            ("muchos", "muches"),
            ("todas", "todes"),
        ]);
    }

    #[test]
    fn so_and_sa_adjectives_use_the_generic_rule() {
        // There is no "-ce" rule for these yet.
        expect_inclusive(&[("tieso", "tiese"), ("amistosa", "amistose")]);
    }

    #[test]
    fn passes_through_unmatched_words() {
        expect_inclusive(&[
            ("", ""),
            ("docentes", "docentes"),
            ("con", "con"),
            ("123", "123"),
            ("¿?", "¿?"),
            // Only "el" and "EL" are literal exceptions.
            ("El", "El"),
            ("UN", "UN"),
        ]);
        assert!(matches!(inclusivize("docente"), Cow::Borrowed(_)));
    }

    #[test]
    fn case_comes_from_the_suffix() {
        expect_inclusive(&[
            ("Alumno", "Alumne"),
            ("alumNO", "alumNE"),
            ("ChicaS", "ChicaS"),
            ("maestrOs", "maestrOs"),
        ]);
    }

    #[test]
    fn later_rules_are_not_tried() {
        assert_eq!(super::explain("compradora"), Inflection::Suffix(&SUFFIX_RULES[1]));
        assert_eq!(super::explain("comprador"), Inflection::Suffix(&SUFFIX_RULES[0]));
        // A mixed case suffix still claims the word even though it is left
        // unchanged.
        match super::explain("maestrOs") {
            Inflection::Suffix(rule) => assert_eq!(rule.suffix, "os"),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn explain() {
        let tests = [
            ("el", "literal el => le"),
            ("EL", "literal EL => LE"),
            ("chicos", "c-stem -cos => -ques"),
            ("amiga", "g-stem -ga => -gue"),
            ("vendedor", "adjective -or => -er"),
            ("todas", "generic -as => -es"),
            ("docente", "identity"),
        ];
        for test in tests {
            assert_eq!(super::explain(test.0).to_string(), test.1, "explain({:?})", test.0);
        }
        match super::explain("chica") {
            Inflection::Suffix(rule) => assert_eq!(rule.tier, Tier::CStem),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn inflectable() {
        let tests = [
            ("alumno", "o", true),
            ("ALUMNO", "o", true),
            ("alumno", "a", false),
            ("docente", "", true),
            ("", "", true),
            ("", "o", false),
            ("os", "cos", false),
        ];
        for test in tests {
            assert_eq!(
                super::inflectable(test.0, test.1),
                test.2,
                "inflectable({:?}, {:?})",
                test.0,
                test.1,
            );
        }
    }

    #[test]
    fn inflect() {
        let tests = [
            ("alumno", "o", "e", "alumne"),
            ("ALUMNO", "o", "e", "ALUMNE"),
            ("chicos", "cos", "ques", "chiques"),
            ("docente", "", "s", "docentes"),
            ("docente", "o", "e", "docente"),
            ("maestrOs", "os", "es", "maestrOs"),
        ];
        for test in tests {
            assert_eq!(
                super::inflect(test.0, test.1, test.2),
                test.3,
                "inflect({:?}, {:?}, {:?})",
                test.0,
                test.1,
                test.2,
            );
        }
    }

    #[test]
    fn idempotent_on_results() {
        for word in [
            "alumno", "ALUMNAS", "chicos", "amigas", "comprador", "el", "EL", "un", "todas",
        ] {
            let once = inclusivize(word).into_owned();
            assert_eq!(inclusivize(&once), once, "inclusivize is idempotent on {:?}", word);
        }
    }
}
