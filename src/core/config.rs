//! Engine configuration.
//!
//! The word list and the wrong-guess allowance are the only tunables.
//! Both are supplied at engine construction and fixed from then on; a
//! running session never re-reads the configuration.

use serde::{Deserialize, Serialize};

use super::words::WordList;

/// Wrong guesses a session allows before it is lost, unless configured.
pub const DEFAULT_MAX_WRONG: u8 = 6;

/// Complete engine configuration.
///
/// ```
/// use gallows::{GameConfig, WordList, DEFAULT_MAX_WRONG};
///
/// let config = GameConfig::new(WordList::new(["CAT", "DOG"]).unwrap());
/// assert_eq!(config.max_wrong, DEFAULT_MAX_WRONG);
///
/// let strict = GameConfig::default().with_max_wrong(3);
/// assert_eq!(strict.max_wrong, 3);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Words a session may draw its secret from.
    pub word_list: WordList,

    /// Wrong guesses allowed before a session is lost. At least 1.
    pub max_wrong: u8,
}

impl GameConfig {
    /// Create a configuration with the default wrong-guess allowance.
    #[must_use]
    pub fn new(word_list: WordList) -> Self {
        Self {
            word_list,
            max_wrong: DEFAULT_MAX_WRONG,
        }
    }

    /// Set the wrong-guess allowance.
    #[must_use]
    pub fn with_max_wrong(mut self, max_wrong: u8) -> Self {
        assert!(max_wrong >= 1, "Must allow at least 1 wrong guess");
        self.max_wrong = max_wrong;
        self
    }
}

impl Default for GameConfig {
    /// The built-in word list with the default allowance.
    fn default() -> Self {
        Self::new(WordList::default())
    }
}
