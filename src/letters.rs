//! Letter sets as bitmasks over a configurable alphabet.

use std::fmt;

use itertools::Itertools;

use crate::error::{Error, Result};

/// Widest alphabet a [`LetterSet`] can index.
pub const MAX_ALPHABET: usize = u128::BITS as usize;

/// Ordered set of characters words may be built from.
///
/// Bit `i` of a [`LetterSet`] stands for the `i`th character of the alphabet.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Alphabet {
    letters: Vec<char>,
}

impl Alphabet {
    /// Lowercase ASCII, `a` through `z`.
    pub fn english() -> Self {
        Alphabet {
            letters: ('a'..='z').collect(),
        }
    }

    pub fn new(letters: &str) -> Result<Self> {
        let letters = letters.chars().collect_vec();
        if letters.is_empty() {
            return Err(Error::Alphabet("alphabet is empty".into()));
        }
        if letters.len() > MAX_ALPHABET {
            return Err(Error::Alphabet(format!(
                "{} letters given, at most {MAX_ALPHABET} supported",
                letters.len()
            )));
        }
        // Words are lowercased before lookup, so other letters could never match.
        if let Some(upper) = letters.iter().find(|&&c| !c.to_lowercase().eq([c])) {
            return Err(Error::Alphabet(format!("letter {upper:?} is not lowercase")));
        }
        if let Some(dup) = letters.iter().duplicates().next() {
            return Err(Error::Alphabet(format!("letter {dup:?} listed twice")));
        }
        Ok(Alphabet { letters })
    }

    pub fn len(&self) -> usize {
        self.letters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Bit position of `c`, if it belongs to the alphabet.
    pub fn index_of(&self, c: char) -> Option<usize> {
        // Fast path for the common a..z layout.
        if c.is_ascii_lowercase() {
            let guess = (c as u8 - b'a') as usize;
            if self.letters.get(guess) == Some(&c) {
                return Some(guess);
            }
        }
        self.letters.iter().position(|&l| l == c)
    }

    pub fn letter(&self, idx: usize) -> Option<char> {
        self.letters.get(idx).copied()
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Alphabet::english()
    }
}

/// One bit per letter.
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LetterSet(u128);

impl LetterSet {
    pub const EMPTY: LetterSet = LetterSet(0);

    /// Letter set of `word` together with whether any letter repeats.
    ///
    /// Returns `None` when the word uses a character outside `alphabet`.
    pub fn of_word(word: &str, alphabet: &Alphabet) -> Option<(LetterSet, bool)> {
        let mut mask = 0u128;
        let mut duplicate_letter = false;
        for c in word.chars() {
            let bit = 1u128 << alphabet.index_of(c)?;
            duplicate_letter |= mask & bit != 0;
            mask |= bit;
        }
        Some((LetterSet(mask), duplicate_letter))
    }

    pub fn bits(self) -> u128 {
        self.0
    }

    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn is_disjoint(self, other: LetterSet) -> bool {
        self.0 & other.0 == 0
    }

    pub fn union(self, other: LetterSet) -> LetterSet {
        LetterSet(self.0 | other.0)
    }

    /// Alphabet positions of the set bits, ascending.
    pub fn positions(self) -> impl Iterator<Item = usize> {
        let mut rest = self.0;
        std::iter::from_fn(move || {
            if rest == 0 {
                return None;
            }
            let idx = rest.trailing_zeros() as usize;
            rest &= rest - 1;
            Some(idx)
        })
    }
}

impl fmt::Debug for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LetterSet({:#b})", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn english_alphabet_positions() {
        let abc = Alphabet::english();
        assert_eq!(abc.len(), 26);
        assert_eq!(abc.index_of('a'), Some(0));
        assert_eq!(abc.index_of('z'), Some(25));
        assert_eq!(abc.index_of('A'), None);
        assert_eq!(abc.index_of('é'), None);
    }

    #[test]
    fn custom_alphabet_is_not_limited_to_ascii() {
        let abc = Alphabet::new("zyxåäö").unwrap();
        assert_eq!(abc.index_of('z'), Some(0));
        assert_eq!(abc.index_of('ö'), Some(5));
        assert_eq!(abc.letter(3), Some('å'));
        assert_eq!(abc.index_of('a'), None);
    }

    #[test]
    fn bad_alphabets_are_rejected() {
        assert!(Alphabet::new("").is_err());
        assert!(Alphabet::new("abca").is_err());
        let too_wide: String = (0..200u32).filter_map(|i| char::from_u32(0x100 + i)).collect();
        assert!(Alphabet::new(&too_wide).is_err());
    }

    #[test]
    fn uppercase_alphabets_are_rejected() {
        assert!(matches!(Alphabet::new("ABCDEFGHIJ"), Err(Error::Alphabet(_))));
        assert!(matches!(Alphabet::new("abcÅ"), Err(Error::Alphabet(_))));
        // Caseless letters and digits are fine.
        assert!(Alphabet::new("abc123日本").is_ok());
    }

    #[test]
    fn letter_set_of_word() {
        let abc = Alphabet::english();
        let (set, dup) = LetterSet::of_word("fjord", &abc).unwrap();
        assert!(!dup);
        assert_eq!(set.len(), 5);
        assert_eq!(
            set.positions().map(|i| abc.letter(i).unwrap()).collect::<String>(),
            "dfjor"
        );

        let (set, dup) = LetterSet::of_word("hello", &abc).unwrap();
        assert!(dup);
        assert_eq!(set.len(), 4);

        assert_eq!(LetterSet::of_word("héllo", &abc), None);
    }

    #[test]
    fn anagrams_share_a_letter_set() {
        let abc = Alphabet::english();
        let (a, _) = LetterSet::of_word("hello", &abc).unwrap();
        let (b, _) = LetterSet::of_word("olleh", &abc).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn disjointness() {
        let abc = Alphabet::english();
        let (a, _) = LetterSet::of_word("abcde", &abc).unwrap();
        let (b, _) = LetterSet::of_word("fghij", &abc).unwrap();
        let (c, _) = LetterSet::of_word("abfgh", &abc).unwrap();
        assert!(a.is_disjoint(b));
        assert!(!a.is_disjoint(c));
        assert!(!b.is_disjoint(c));
        assert_eq!(a.union(b).len(), 10);
        assert!(LetterSet::EMPTY.is_disjoint(a));
    }
}
