//! Read-only views of a session: what a caller may render.
//!
//! ## Snapshot
//!
//! A point-in-time copy of the observable round state: the masked pattern,
//! the wrong guesses, the remaining tries, and the outcome. The secret word
//! itself appears only once the round has ended.
//!
//! ## GuessResult
//!
//! What a single guess did: whether the letter is in the word, the
//! transition it caused, and a snapshot taken right after it was applied.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Letter, LetterSet, Word};
use crate::session::Outcome;

/// The secret word with unguessed letters hidden.
///
/// One slot per letter of the secret; `None` slots have not been revealed.
/// `Display` renders the usual pattern, e.g. `C A _` for `CAT` after
/// guessing `C` and `A`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaskedWord(Vec<Option<Letter>>);

impl MaskedWord {
    /// Mask `secret` down to the letters in `guessed`.
    #[must_use]
    pub fn reveal(secret: &Word, guessed: LetterSet) -> Self {
        Self(
            secret
                .letters()
                .map(|letter| guessed.contains(letter).then_some(letter))
                .collect(),
        )
    }

    /// Get the slots, one per letter of the secret.
    #[must_use]
    pub fn slots(&self) -> &[Option<Letter>] {
        &self.0
    }

    /// Get the length of the secret.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check whether the pattern is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Check whether every letter has been revealed.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.0.iter().all(Option::is_some)
    }
}

impl std::fmt::Display for MaskedWord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, slot) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            match slot {
                Some(letter) => write!(f, "{}", letter)?,
                None => write!(f, "_")?,
            }
        }
        Ok(())
    }
}

/// What a guess changed about the round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Transition {
    /// Nothing changed: the letter was a repeat or the round had ended.
    NoOp,
    /// The guess was recorded and the round goes on.
    Continued,
    /// The guess completed the word.
    Won,
    /// The guess used up the last wrong try.
    Lost,
}

impl Transition {
    /// Check whether this transition ended the round.
    #[must_use]
    pub fn ended(self) -> bool {
        matches!(self, Transition::Won | Transition::Lost)
    }
}

/// The report returned for every accepted guess.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuessResult {
    /// Whether the guessed letter is in the secret word.
    pub correct: bool,

    /// What the guess changed.
    pub transition: Transition,

    /// The round as it stands after the guess.
    pub snapshot: Snapshot,
}

/// Observable round state at a point in time.
///
/// Snapshots are plain data, detached from the session that produced them;
/// serializing one is how round state crosses a process boundary.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// The secret with unguessed letters hidden.
    pub masked: MaskedWord,

    /// Wrong guesses in the order they were made.
    pub wrong: SmallVec<[Letter; 8]>,

    /// Every letter guessed so far, right or wrong.
    pub guessed: LetterSet,

    /// Wrong guesses left before the round is lost.
    pub remaining: u8,

    /// Current outcome.
    pub outcome: Outcome,

    /// The secret word, present only once the round has ended.
    pub secret: Option<Word>,
}

impl Snapshot {
    /// Get how many wrong guesses have been made.
    #[must_use]
    pub fn wrong_count(&self) -> u8 {
        self.wrong.len() as u8
    }
}
