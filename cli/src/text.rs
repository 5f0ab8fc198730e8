use es_inclusive::{inflector, style::Style};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use std::borrow::Cow;

// A run of letters, including accented ones and "ñ". Anything else, like
// spaces, digits, and punctuation, separates words and is kept as is.
static WORD_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\p{L}+").expect("Could not parse word regex"));

pub(crate) fn words(line: &str) -> impl Iterator<Item = &str> {
    WORD_REGEX.find_iter(line).map(|m| m.as_str())
}

pub(crate) fn rewrite_line(line: &str, style: Style) -> Cow<'_, str> {
    WORD_REGEX.replace_all(line, |caps: &Captures| {
        es_inclusive::style::inclusivize_with(&caps[0], style).into_owned()
    })
}

pub(crate) fn explain_word(word: &str) -> String {
    let inflection = inflector::explain(word);
    format!("{} -> {} ({})", word, inflection.apply(word), inflection)
}
