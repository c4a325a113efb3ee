//! Turns a raw word list into the candidate corpus.

use itertools::Itertools;
use tracing::debug;

use crate::letters::{Alphabet, LetterSet};

/// Deduplicated words of one fixed length, each with its letter set.
///
/// Every word has exactly `word_len` distinct letters and no two words share a
/// letter set. Order is first-seen order from the input.
#[derive(Clone, Debug, Default)]
pub struct Corpus {
    word_len: usize,
    words: Vec<String>,
    letter_sets: Vec<LetterSet>,
}

impl Corpus {
    pub fn word_len(&self) -> usize {
        self.word_len
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn letter_sets(&self) -> &[LetterSet] {
        &self.letter_sets
    }

    pub fn word(&self, idx: usize) -> &str {
        &self.words[idx]
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, LetterSet)> {
        self.words
            .iter()
            .map(String::as_str)
            .zip(self.letter_sets.iter().copied())
    }
}

/// Build the corpus of words with `word_len` distinct letters from `alphabet`.
///
/// Nothing here fails: entries of the wrong length, with a repeated letter,
/// with a character outside the alphabet, or whose letter set was already seen
/// (anagrams) are dropped.
pub fn candidate_corpus<I, S>(lines: I, word_len: usize, alphabet: &Alphabet) -> Corpus
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen = 0usize;
    let (words, letter_sets): (Vec<String>, Vec<LetterSet>) = lines
        .into_iter()
        .inspect(|_| seen += 1)
        .map(|line| line.as_ref().trim().to_lowercase())
        // Only words of the requested length.
        .filter(|w| word_len > 0 && w.chars().count() == word_len)
        .filter_map(|w| {
            let (set, duplicate_letter) = LetterSet::of_word(&w, alphabet)?;
            (!duplicate_letter).then_some((w, set))
        })
        // First word wins for each set of letters.
        .unique_by(|(_, set)| *set)
        .unzip();

    debug!(
        lines = seen,
        kept = words.len(),
        word_len,
        "filtered candidate corpus"
    );

    Corpus {
        word_len,
        words,
        letter_sets,
    }
}
