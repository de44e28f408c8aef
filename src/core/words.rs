//! Words and the configured word list.
//!
//! A `Word` is validated at construction: non-empty, letters only, held as
//! uppercase `Letter`s. A `WordList` is the pool a session draws its secret
//! from; it is fixed at configuration time. The list may be empty, because
//! the emptiness check belongs to `start_new_game`, which is where a missing
//! configuration surfaces as `GameError::EmptyWordList`.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::error::GameError;
use super::letter::{Letter, LetterSet};
use super::rng::GameRng;

/// Words available when the embedder configures no list of its own.
const BUILT_IN_WORDS: [&str; 5] = [
    "JAVASCRIPT",
    "PROGRAMMING",
    "DEVELOPER",
    "COMPUTER",
    "ALGORITHM",
];

/// A secret word: non-empty, letters `A`-`Z` only.
///
/// ASCII lowercase is normalized to uppercase at construction (word lists
/// are configuration data); any other character is rejected.
///
/// ```
/// use gallows::Word;
///
/// let word = Word::new("javascript").unwrap();
/// assert_eq!(word.to_string(), "JAVASCRIPT");
/// assert!(Word::new("C4T").is_err());
/// assert!(Word::new("").is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Word {
    letters: Vec<Letter>,
}

impl Word {
    /// Create a validated word.
    ///
    /// # Errors
    ///
    /// - `GameError::EmptyWord` if `word` has no characters.
    /// - `GameError::InvalidWord` if any character is not an ASCII letter.
    pub fn new(word: &str) -> Result<Self, GameError> {
        if word.is_empty() {
            return Err(GameError::EmptyWord);
        }

        let mut letters = Vec::with_capacity(word.len());
        for c in word.chars() {
            if !c.is_ascii_alphabetic() {
                return Err(GameError::InvalidWord {
                    word: word.to_string(),
                    ch: c,
                });
            }
            letters.push(Letter::new(c.to_ascii_uppercase())?);
        }

        Ok(Self { letters })
    }

    /// Number of positions in the word.
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    /// Always false: constructed words have at least one letter.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Iterate the letters in position order (repeats included).
    pub fn letters(&self) -> impl Iterator<Item = Letter> + '_ {
        self.letters.iter().copied()
    }

    /// Check whether the word contains a letter at any position.
    #[must_use]
    pub fn contains(&self, letter: Letter) -> bool {
        self.letters.contains(&letter)
    }

    /// The set of distinct letters; guessing all of them wins a session.
    #[must_use]
    pub fn distinct_letters(&self) -> LetterSet {
        self.letters().collect()
    }
}

impl TryFrom<String> for Word {
    type Error = GameError;

    fn try_from(word: String) -> Result<Self, Self::Error> {
        Self::new(&word)
    }
}

impl FromStr for Word {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl From<Word> for String {
    fn from(word: Word) -> Self {
        word.letters.iter().map(|l| l.as_char()).collect()
    }
}

impl std::fmt::Display for Word {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for letter in &self.letters {
            write!(f, "{}", letter)?;
        }
        Ok(())
    }
}

/// The ordered pool of words a session may draw its secret from.
///
/// Duplicates are allowed and simply weight the uniform draw. The default
/// list is a small programming-themed pool for out-of-the-box play.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordList {
    words: Vec<Word>,
}

impl WordList {
    /// Build a list from anything string-like, validating every entry.
    ///
    /// ```
    /// use gallows::WordList;
    ///
    /// let list = WordList::new(["CAT", "dog"]).unwrap();
    /// assert_eq!(list.len(), 2);
    /// assert!(WordList::new(["C4T"]).is_err());
    /// ```
    ///
    /// # Errors
    ///
    /// Propagates the first `Word::new` failure.
    pub fn new<I, S>(words: I) -> Result<Self, GameError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| Word::new(w.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { words })
    }

    /// Number of words (duplicates counted).
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check if the list has no words.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// View the configured words in order.
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Choose a uniformly random word.
    ///
    /// Returns `None` if the list is empty.
    #[must_use]
    pub fn choose<'a>(&'a self, rng: &mut GameRng) -> Option<&'a Word> {
        rng.choose(&self.words)
    }
}

impl From<Vec<Word>> for WordList {
    fn from(words: Vec<Word>) -> Self {
        Self { words }
    }
}

impl Default for WordList {
    fn default() -> Self {
        Self::new(BUILT_IN_WORDS).expect("built-in words are valid")
    }
}
