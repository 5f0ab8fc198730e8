use std::borrow::Cow;

/// The case a matched suffix was written in.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum SuffixCase {
    Lower,
    Upper,
}

impl SuffixCase {
    pub(crate) fn apply(self, replacement: &'static str) -> Cow<'static, str> {
        match self {
            SuffixCase::Lower => Cow::Borrowed(replacement),
            SuffixCase::Upper => Cow::Owned(replacement.to_uppercase()),
        }
    }
}

/// Splits `word` into the stem and the trailing region that matches the
/// lowercase `suffix` case-insensitively. The region is measured in chars,
/// so the split always lands on a char boundary. Returns `None` when the
/// word does not end with the suffix.
pub(crate) fn split_suffix<'a>(word: &'a str, suffix: &str) -> Option<(&'a str, &'a str)> {
    let len = suffix.chars().count();
    let at = match len {
        0 => word.len(),
        n => word.char_indices().rev().nth(n - 1)?.0,
    };
    let (stem, tail) = word.split_at(at);
    if tail.chars().flat_map(char::to_lowercase).eq(suffix.chars()) {
        return Some((stem, tail));
    }
    None
}

/// Works out whether `tail`, as literally written, is the lowercase or the
/// uppercase spelling of `suffix`. Anything else, like "Os" for "os", has
/// no case we can carry over.
pub(crate) fn suffix_case(tail: &str, suffix: &str) -> Option<SuffixCase> {
    if tail == suffix {
        return Some(SuffixCase::Lower);
    }
    if tail.chars().eq(suffix.chars().flat_map(char::to_uppercase)) {
        return Some(SuffixCase::Upper);
    }
    None
}

pub(crate) fn is_lowercase(word: &str) -> bool {
    word.chars().all(|c| !c.is_uppercase())
}

pub(crate) fn is_uppercase(word: &str) -> bool {
    word.chars().all(|c| !c.is_lowercase())
}
