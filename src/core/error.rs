//! Error types for configuration and guess validation.
//!
//! Two error families exist:
//!
//! - **Configuration**: `EmptyWordList`, `EmptyWord`, `InvalidWord`. Raised
//!   while building a word list or starting a session over a bad one. Fatal
//!   to the failing call; the caller fixes the configuration and retries.
//! - **Input**: `InvalidLetter`, `InvalidLetterInput`, `SessionNotStarted`.
//!   Recoverable guards on the guessing surface. Validation runs before any
//!   mutation, so a rejected call leaves the session untouched.
//!
//! Repeated or post-terminal guesses are NOT errors; they are silent no-ops
//! (see `Session::guess`).

use thiserror::Error;

/// Everything that can go wrong inside the engine.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GameError {
    /// `start_new_game` was called with nothing to draw a secret from.
    #[error("word list is empty")]
    EmptyWordList,

    /// A word with no letters was offered at configuration time.
    #[error("words must contain at least one letter")]
    EmptyWord,

    /// A configured word contains something other than a letter.
    #[error("word {word:?} contains {ch:?}; words use letters A-Z only")]
    InvalidWord {
        /// The offending word as supplied.
        word: String,
        /// The first character that failed validation.
        ch: char,
    },

    /// A guess that is not an uppercase ASCII letter.
    #[error("invalid guess {0:?}; guesses are uppercase letters A-Z")]
    InvalidLetter(char),

    /// A guess string that is not exactly one letter (empty or multi-character).
    #[error("invalid guess {0:?}; guesses are a single letter A-Z")]
    InvalidLetterInput(String),

    /// A guess arrived before the first `start_new_game` call.
    #[error("no session has been started")]
    SessionNotStarted,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(GameError::EmptyWordList.to_string(), "word list is empty");
        assert_eq!(
            GameError::InvalidLetter('1').to_string(),
            "invalid guess '1'; guesses are uppercase letters A-Z"
        );
        assert_eq!(
            GameError::InvalidLetterInput("AB".to_string()).to_string(),
            "invalid guess \"AB\"; guesses are a single letter A-Z"
        );
    }

    #[test]
    fn test_invalid_word_reports_offender() {
        let err = GameError::InvalidWord {
            word: "C4T".to_string(),
            ch: '4',
        };
        assert_eq!(
            err.to_string(),
            "word \"C4T\" contains '4'; words use letters A-Z only"
        );
    }

    #[test]
    fn test_errors_are_comparable() {
        assert_eq!(GameError::EmptyWordList, GameError::EmptyWordList);
        assert_ne!(
            GameError::InvalidLetter('a'),
            GameError::InvalidLetter('b')
        );
    }
}
