//! Word-shingle sets for measuring how much text two documents share.
//!
//! A document is reduced to the set of distinct phrases of `window`
//! consecutive tokens it contains; the overlap between two documents is
//! the size of the intersection of their phrase sets.

use std::collections::HashSet;

/// Split `text` on whitespace and normalize each word to a token: every
/// character that is not an ASCII letter is dropped and the remainder is
/// uppercased. A word with no letters at all becomes the empty token and
/// keeps its position in the sequence.
pub fn tokenize(text: &str) -> Vec<String> {
    text.split_whitespace()
        .map(|word| {
            word.chars()
                .filter(char::is_ascii_alphabetic)
                .map(|c| c.to_ascii_uppercase())
                .collect()
        })
        .collect()
}

/// The distinct phrases of one document.
#[derive(Clone, Debug)]
pub struct ShingleSet {
    window: usize,
    shingles: HashSet<String>,
}

impl ShingleSet {
    pub fn from_text(text: &str, window: usize) -> Self {
        Self::from_tokens(&tokenize(text), window)
    }

    /// Build the set of distinct `window`-token phrases. Each token is
    /// followed by a single space, including the last one. A sequence
    /// shorter than `window` produces an empty set.
    ///
    /// # Panics
    ///
    /// Panics if `window` is zero.
    pub fn from_tokens(tokens: &[String], window: usize) -> Self {
        assert!(window >= 1, "shingle window must be at least 1");

        let shingles = tokens.windows(window).map(phrase).collect();
        Self { window, shingles }
    }

    pub fn window(&self) -> usize {
        self.window
    }

    pub fn len(&self) -> usize {
        self.shingles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shingles.is_empty()
    }

    pub fn contains(&self, phrase: &str) -> bool {
        self.shingles.contains(phrase)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.shingles.iter().map(String::as_str)
    }

    /// The number of phrases this set shares with `other`. Both sets are
    /// borrowed unchanged, so a cached set stays valid across any number
    /// of comparisons.
    pub fn match_count(&self, other: &ShingleSet) -> usize {
        debug_assert_eq!(self.window, other.window);

        let (small, large) = if self.len() <= other.len() {
            (self, other)
        } else {
            (other, self)
        };

        small
            .shingles
            .iter()
            .filter(|phrase| large.shingles.contains(phrase.as_str()))
            .count()
    }
}

fn phrase(tokens: &[String]) -> String {
    let mut phrase = String::new();
    for token in tokens {
        phrase.push_str(token);
        phrase.push(' ');
    }

    phrase
}
