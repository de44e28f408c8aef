//! Letters and letter sets.
//!
//! ## Letter
//!
//! Type-safe uppercase ASCII letter `A`-`Z`, the only thing a session
//! accepts as a guess. Construction is fallible; once a `Letter` exists
//! it is valid, so the session layer never re-validates.
//!
//! ## LetterSet
//!
//! A set of letters backed by a 26-bit mask. Copy, O(1) operations,
//! ordered `A`-`Z` iteration. Serializes as a letter sequence so
//! presentation consumers see `["A", "B"]` rather than a raw mask.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::error::GameError;

/// A single uppercase letter `A`-`Z`.
///
/// The engine accepts canonical uppercase only; callers that take raw
/// keystrokes normalize with `char::to_ascii_uppercase` before converting.
///
/// ```
/// use gallows::Letter;
///
/// let a = Letter::new('A').unwrap();
/// assert_eq!(a.as_char(), 'A');
/// assert!(Letter::new('a').is_err());
/// assert!(Letter::new('1').is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "char", into = "char")]
pub struct Letter(u8);

impl Letter {
    /// Number of distinct letters.
    pub const COUNT: usize = 26;

    /// Create a letter from an uppercase ASCII character.
    ///
    /// # Errors
    ///
    /// Returns `GameError::InvalidLetter` for anything outside `A`-`Z`.
    pub fn new(c: char) -> Result<Self, GameError> {
        if c.is_ascii_uppercase() {
            Ok(Self(c as u8))
        } else {
            Err(GameError::InvalidLetter(c))
        }
    }

    /// Get the letter as a `char`.
    #[must_use]
    pub const fn as_char(self) -> char {
        self.0 as char
    }

    /// Get the 0-based alphabet index (`A` = 0, `Z` = 25).
    #[must_use]
    pub const fn index(self) -> usize {
        (self.0 - b'A') as usize
    }

    /// Iterate over the whole alphabet in order.
    ///
    /// This is what an input collaborator uses to lay out a keyboard:
    ///
    /// ```
    /// use gallows::Letter;
    ///
    /// let keys: Vec<_> = Letter::all().collect();
    /// assert_eq!(keys.len(), Letter::COUNT);
    /// assert_eq!(keys[0].as_char(), 'A');
    /// assert_eq!(keys[25].as_char(), 'Z');
    /// ```
    pub fn all() -> impl Iterator<Item = Letter> {
        (b'A'..=b'Z').map(Letter)
    }
}

impl TryFrom<char> for Letter {
    type Error = GameError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        Self::new(c)
    }
}

impl From<Letter> for char {
    fn from(letter: Letter) -> Self {
        letter.as_char()
    }
}

impl FromStr for Letter {
    type Err = GameError;

    /// Parse a single-letter string; `""` and `"AB"` are rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::new(c),
            _ => Err(GameError::InvalidLetterInput(s.to_string())),
        }
    }
}

impl std::fmt::Display for Letter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// A set of letters `A`-`Z` backed by a 26-bit mask.
///
/// Insertion order is not kept; iteration is always `A`-`Z`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Vec<Letter>", into = "Vec<Letter>")]
pub struct LetterSet(u32);

impl LetterSet {
    /// Create an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self(0)
    }

    /// Insert a letter.
    ///
    /// Returns true if the letter was not already present.
    pub fn insert(&mut self, letter: Letter) -> bool {
        let bit = 1u32 << letter.index();
        let newly = self.0 & bit == 0;
        self.0 |= bit;
        newly
    }

    /// Check membership.
    #[must_use]
    pub const fn contains(self, letter: Letter) -> bool {
        self.0 & (1 << letter.index()) != 0
    }

    /// Number of letters in the set.
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Check if the set has no letters.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Check if every letter of `self` is in `other`.
    #[must_use]
    pub const fn is_subset(self, other: LetterSet) -> bool {
        self.0 & other.0 == self.0
    }

    /// Iterate the members in `A`-`Z` order.
    pub fn iter(self) -> impl Iterator<Item = Letter> {
        Letter::all().filter(move |letter| self.contains(*letter))
    }
}

impl FromIterator<Letter> for LetterSet {
    fn from_iter<I: IntoIterator<Item = Letter>>(iter: I) -> Self {
        let mut set = Self::new();
        for letter in iter {
            set.insert(letter);
        }
        set
    }
}

impl From<Vec<Letter>> for LetterSet {
    fn from(letters: Vec<Letter>) -> Self {
        letters.into_iter().collect()
    }
}

impl From<LetterSet> for Vec<Letter> {
    fn from(set: LetterSet) -> Self {
        set.iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn letter(c: char) -> Letter {
        Letter::new(c).unwrap()
    }

    #[test]
    fn test_letter_accepts_uppercase() {
        for c in 'A'..='Z' {
            let l = Letter::new(c).unwrap();
            assert_eq!(l.as_char(), c);
        }
    }

    #[test]
    fn test_letter_rejects_everything_else() {
        for c in ['a', 'z', '1', ' ', '_', 'É', '@'] {
            assert_eq!(Letter::new(c), Err(GameError::InvalidLetter(c)));
        }
    }

    #[test]
    fn test_letter_index() {
        assert_eq!(letter('A').index(), 0);
        assert_eq!(letter('Z').index(), 25);
    }

    #[test]
    fn test_letter_from_str() {
        assert_eq!("Q".parse::<Letter>(), Ok(letter('Q')));
        assert_eq!(
            "1".parse::<Letter>(),
            Err(GameError::InvalidLetter('1'))
        );
        assert_eq!(
            "AB".parse::<Letter>(),
            Err(GameError::InvalidLetterInput("AB".to_string()))
        );
        assert_eq!(
            "".parse::<Letter>(),
            Err(GameError::InvalidLetterInput(String::new()))
        );
    }

    #[test]
    fn test_letter_all_covers_alphabet() {
        let all: Vec<_> = Letter::all().collect();
        assert_eq!(all.len(), Letter::COUNT);
        assert_eq!(all.first().copied(), Some(letter('A')));
        assert_eq!(all.last().copied(), Some(letter('Z')));
        // Strictly increasing, so no duplicates
        assert!(all.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_letter_display() {
        assert_eq!(format!("{}", letter('K')), "K");
    }

    #[test]
    fn test_letter_serde_as_char() {
        let json = serde_json::to_string(&letter('G')).unwrap();
        assert_eq!(json, "\"G\"");

        let back: Letter = serde_json::from_str("\"G\"").unwrap();
        assert_eq!(back, letter('G'));

        // Invalid chars are rejected on the way in too
        assert!(serde_json::from_str::<Letter>("\"g\"").is_err());
    }

    #[test]
    fn test_set_insert_and_contains() {
        let mut set = LetterSet::new();
        assert!(set.is_empty());

        assert!(set.insert(letter('C')));
        assert!(set.insert(letter('A')));
        assert!(!set.insert(letter('C'))); // repeat

        assert_eq!(set.len(), 2);
        assert!(set.contains(letter('A')));
        assert!(set.contains(letter('C')));
        assert!(!set.contains(letter('B')));
    }

    #[test]
    fn test_set_iterates_in_alphabet_order() {
        let set: LetterSet = [letter('Z'), letter('A'), letter('M')]
            .into_iter()
            .collect();
        let members: Vec<_> = set.iter().map(Letter::as_char).collect();
        assert_eq!(members, vec!['A', 'M', 'Z']);
    }

    #[test]
    fn test_set_subset() {
        let small: LetterSet = [letter('A'), letter('B')].into_iter().collect();
        let big: LetterSet = [letter('A'), letter('B'), letter('C')]
            .into_iter()
            .collect();

        assert!(small.is_subset(big));
        assert!(!big.is_subset(small));
        assert!(LetterSet::new().is_subset(small));
        assert!(small.is_subset(small));
    }

    #[test]
    fn test_set_serde_as_letter_list() {
        let set: LetterSet = [letter('B'), letter('A')].into_iter().collect();
        let json = serde_json::to_string(&set).unwrap();
        assert_eq!(json, "[\"A\",\"B\"]");

        let back: LetterSet = serde_json::from_str("[\"A\",\"B\"]").unwrap();
        assert_eq!(back, set);
    }
}
