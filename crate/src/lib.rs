// #![deny(missing_docs)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::broken_intra_doc_links)]

//! Rewrite gendered Spanish words into a gender-neutral inclusive form.
//!
//! Spanish marks grammatical gender on the endings of nouns, articles,
//! pronouns, and adjectives: "el alumno", "la alumna", "los amigos", "las
//! amigas". This crate rewrites one such word at a time into the neutral
//! "-e" form used in inclusive writing: "le alumne", "les amigues".
//!
//! ```
//! use es_inclusive::inclusivize;
//!
//! assert_eq!(inclusivize("alumno"), "alumne");
//! assert_eq!(inclusivize("chicas"), "chiques");
//! assert_eq!(inclusivize("COMPRADORA"), "COMPRADER");
//! assert_eq!(inclusivize("docente"), "docente");
//! ```
//!
//! The rules are entirely table-driven. A small table of whole-word
//! exceptions ("el" to "le", "un" to "une") is consulted first. After that
//! come the suffix rules, tried in a fixed order from most to least
//! specific: "-or"/"-ora" adjectives, then words with a "c" or "g" stem
//! (which need "qu" and "gu" in front of an "e"), then the generic "-o",
//! "-a", "-os", and "-as" endings. The first rule that matches is applied
//! and no other. A word that matches nothing is returned as is, which is why
//! [inclusivize] returns a [Cow](std::borrow::Cow). See the [rules] module
//! for the tables themselves.
//!
//! The replacement follows the case of the ending it replaces, so
//! "MAESTROS" becomes "MAESTRES" while "Maestros" becomes "Maestres".
//!
//! # Limitations
//!
//! This crate does not parse sentences or make articles agree with nouns;
//! splitting text into words is up to the caller. Adjectives in "-so" and
//! "-sa" ("tieso", "amistosa") are handled by the generic rule rather than
//! turned into "-ce". Only the "-e" convention is produced; see the [style]
//! module.

mod util;

pub mod inflector;
pub mod rules;
pub mod style;
pub mod word;

pub use inflector::inclusivize;
