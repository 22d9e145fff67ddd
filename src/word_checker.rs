//! Spelling suggestions layered on top of any [`Set`] of words.

use std::collections::HashSet;

use crate::Set;

/// The letters tried by substitution and insertion unless another alphabet is given.
pub const DEFAULT_ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Checks words against a borrowed vocabulary and proposes corrections.
///
/// The checker never owns the vocabulary, so it cannot outlive the set it borrows.
///
/// ```
/// use spellset::{AvlSet, WordChecker};
///
/// let words: AvlSet<String> = ["CAT", "CATS", "DOG"].iter().map(|w| w.to_string()).collect();
/// let checker = WordChecker::new(&words);
/// assert!(checker.word_exists("DOG"));
/// assert_eq!(checker.find_suggestions("CAST"), ["CATS", "CAT"]);
/// ```
pub struct WordChecker<'a, S: Set<String> + ?Sized> {
    words: &'a S,
    alphabet: Vec<char>,
}

impl<'a, S: Set<String> + ?Sized> WordChecker<'a, S> {
    /// Creates a checker over `words` that tries the letters of [`DEFAULT_ALPHABET`].
    pub fn new(words: &'a S) -> Self {
        Self::with_alphabet(words, DEFAULT_ALPHABET)
    }

    /// Creates a checker over `words` that tries every character of `alphabet`
    /// for substitutions and insertions.
    pub fn with_alphabet(words: &'a S, alphabet: &str) -> Self {
        let mut letters: Vec<char> = Vec::new();
        for letter in alphabet.chars() {
            if !letters.contains(&letter) {
                letters.push(letter);
            }
        }
        Self {
            words,
            alphabet: letters,
        }
    }

    /// Returns true if the word is in the vocabulary.
    pub fn word_exists(&self, word: &str) -> bool {
        self.words.contains(&word.to_owned())
    }

    /// Returns vocabulary entries that are one edit away from `word`.
    ///
    /// Candidates are produced in this order, each kind exhaustively:
    /// 1. splits into two words, joined by a space, where both halves exist;
    /// 2. swaps of adjacent characters;
    /// 3. substitutions of one character by an alphabet letter;
    /// 4. deletions of one character;
    /// 5. insertions of one alphabet letter at any position, including the end.
    ///
    /// Substitutions and insertions go through the alphabet in order, trying each
    /// letter at every position before moving on to the next letter.
    ///
    /// A suggestion is reported once, at its first occurrence, and `word` itself
    /// is never suggested.
    pub fn find_suggestions(&self, word: &str) -> Vec<String> {
        let chars: Vec<char> = word.chars().collect();
        let mut suggestions = Suggestions {
            original: word,
            seen: HashSet::new(),
            found: Vec::new(),
        };

        // Split points leave at least one character on each side.
        for split in 1..chars.len() {
            let prefix: String = chars[..split].iter().collect();
            let suffix: String = chars[split..].iter().collect();
            if self.word_exists(&prefix) && self.word_exists(&suffix) {
                suggestions.push(format!("{prefix} {suffix}"));
            }
        }

        for i in 1..chars.len() {
            let mut candidate = chars.clone();
            candidate.swap(i - 1, i);
            self.check(&candidate, &mut suggestions);
        }

        for &letter in &self.alphabet {
            for i in 0..chars.len() {
                if letter == chars[i] {
                    continue;
                }
                let mut candidate = chars.clone();
                candidate[i] = letter;
                self.check(&candidate, &mut suggestions);
            }
        }

        for i in 0..chars.len() {
            let mut candidate = chars.clone();
            candidate.remove(i);
            self.check(&candidate, &mut suggestions);
        }

        // Each letter is tried at every position, the end included, before the next letter.
        for &letter in &self.alphabet {
            for i in 0..=chars.len() {
                let mut candidate = chars.clone();
                candidate.insert(i, letter);
                self.check(&candidate, &mut suggestions);
            }
        }

        suggestions.found
    }

    fn check(&self, candidate: &[char], suggestions: &mut Suggestions<'_>) {
        let candidate: String = candidate.iter().collect();
        if self.words.contains(&candidate) {
            suggestions.push(candidate);
        }
    }
}

/// Accumulates suggestions in first-seen order, skipping repeats and the original word.
struct Suggestions<'w> {
    original: &'w str,
    seen: HashSet<String>,
    found: Vec<String>,
}

impl Suggestions<'_> {
    fn push(&mut self, candidate: String) {
        if candidate != self.original && self.seen.insert(candidate.clone()) {
            self.found.push(candidate);
        }
    }
}
