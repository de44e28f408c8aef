//! Session state: a single round from secret selection to outcome.
//!
//! ## Session
//!
//! Tracks the secret word, the set of letters guessed so far, the wrong
//! guesses in the order they were made, and the wrong-guess allowance. All
//! mutation goes through [`Session::guess`]; everything else is read-only,
//! so the invariants (wrong letters are a subset of guessed letters, the
//! outcome matches the counts) hold by construction.
//!
//! ## Guess Policy
//!
//! - Repeated letters are no-ops: no state change, no penalty.
//! - Guesses after the round has ended are no-ops.
//! - The win check runs before the loss check, so completing the word on the
//!   last remaining try still wins.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::debug;

use crate::core::{Letter, LetterSet, Word};
use crate::snapshot::{GuessResult, MaskedWord, Snapshot, Transition};

/// How a session stands: still being played, solved, or failed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// The round is still accepting guesses.
    #[default]
    InProgress,
    /// Every letter of the secret has been guessed.
    Won,
    /// The wrong-guess allowance is exhausted.
    Lost,
}

impl Outcome {
    /// Check whether the round has ended.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, Outcome::Won | Outcome::Lost)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Outcome::InProgress => "in progress",
            Outcome::Won => "won",
            Outcome::Lost => "lost",
        };
        write!(f, "{}", s)
    }
}

/// One hangman round.
///
/// Fields are private: the only way to change a session is [`Session::guess`],
/// which keeps the guessed set, the wrong list, and the outcome consistent
/// with each other.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// The word being guessed.
    secret: Word,

    /// Every letter guessed so far, right or wrong.
    guessed: LetterSet,

    /// Wrong guesses in the order they were made.
    wrong: SmallVec<[Letter; 8]>,

    /// Wrong guesses allowed before the round is lost.
    max_wrong: u8,

    /// Current outcome.
    outcome: Outcome,
}

impl Session {
    /// Start a round over `secret` with the given wrong-guess allowance.
    #[must_use]
    pub fn new(secret: Word, max_wrong: u8) -> Self {
        assert!(max_wrong >= 1, "Must allow at least 1 wrong guess");

        Self {
            secret,
            guessed: LetterSet::new(),
            wrong: SmallVec::new(),
            max_wrong,
            outcome: Outcome::InProgress,
        }
    }

    // === Guessing ===

    /// Apply a guess and report what it did.
    ///
    /// Repeated letters and guesses after the round has ended return
    /// [`Transition::NoOp`] with the state untouched. Otherwise the letter is
    /// recorded, the outcome is recomputed (win before loss), and the result
    /// carries a fresh [`Snapshot`].
    pub fn guess(&mut self, letter: Letter) -> GuessResult {
        let correct = self.secret.contains(letter);

        if self.outcome.is_terminal() || self.guessed.contains(letter) {
            return GuessResult {
                correct,
                transition: Transition::NoOp,
                snapshot: self.snapshot(),
            };
        }

        self.guessed.insert(letter);
        if !correct {
            self.wrong.push(letter);
        }

        let transition = if self.secret.distinct_letters().is_subset(self.guessed) {
            self.outcome = Outcome::Won;
            Transition::Won
        } else if self.wrong.len() >= usize::from(self.max_wrong) {
            self.outcome = Outcome::Lost;
            Transition::Lost
        } else {
            Transition::Continued
        };

        if transition.ended() {
            debug!(outcome = %self.outcome, secret = %self.secret, "session ended");
        }

        GuessResult {
            correct,
            transition,
            snapshot: self.snapshot(),
        }
    }

    // === Accessors ===

    /// Get the secret word.
    #[must_use]
    pub fn secret(&self) -> &Word {
        &self.secret
    }

    /// Get the current outcome.
    #[must_use]
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Get every letter guessed so far.
    #[must_use]
    pub fn guessed(&self) -> LetterSet {
        self.guessed
    }

    /// Get the wrong guesses in the order they were made.
    #[must_use]
    pub fn wrong(&self) -> &[Letter] {
        &self.wrong
    }

    /// Get how many wrong guesses have been made.
    #[must_use]
    pub fn wrong_count(&self) -> u8 {
        self.wrong.len() as u8
    }

    /// Get how many wrong guesses are left before the round is lost.
    #[must_use]
    pub fn remaining(&self) -> u8 {
        self.max_wrong.saturating_sub(self.wrong_count())
    }

    /// Get the wrong-guess allowance.
    #[must_use]
    pub fn max_wrong(&self) -> u8 {
        self.max_wrong
    }

    /// Build a point-in-time view of the round.
    ///
    /// The secret is included only once the round has ended.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            masked: MaskedWord::reveal(&self.secret, self.guessed),
            wrong: self.wrong.clone(),
            guessed: self.guessed,
            remaining: self.remaining(),
            outcome: self.outcome,
            secret: self.outcome.is_terminal().then(|| self.secret.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(s: &str) -> Word {
        s.parse().unwrap()
    }

    fn letter(c: char) -> Letter {
        Letter::new(c).unwrap()
    }

    #[test]
    fn test_new_session() {
        let session = Session::new(word("CAT"), 6);

        assert_eq!(session.outcome(), Outcome::InProgress);
        assert!(session.guessed().is_empty());
        assert!(session.wrong().is_empty());
        assert_eq!(session.remaining(), 6);
    }

    #[test]
    #[should_panic(expected = "Must allow at least 1 wrong guess")]
    fn test_zero_allowance_rejected() {
        let _ = Session::new(word("CAT"), 0);
    }

    #[test]
    fn test_win_on_cat() {
        let mut session = Session::new(word("CAT"), 6);

        let r = session.guess(letter('C'));
        assert!(r.correct);
        assert_eq!(r.transition, Transition::Continued);
        assert_eq!(r.snapshot.masked.to_string(), "C _ _");

        let r = session.guess(letter('A'));
        assert!(r.correct);
        assert_eq!(r.snapshot.masked.to_string(), "C A _");

        let r = session.guess(letter('T'));
        assert!(r.correct);
        assert_eq!(r.transition, Transition::Won);
        assert_eq!(r.snapshot.masked.to_string(), "C A T");
        assert_eq!(session.outcome(), Outcome::Won);
    }

    #[test]
    fn test_loss_on_dog_with_two_tries() {
        let mut session = Session::new(word("DOG"), 2);

        let r = session.guess(letter('X'));
        assert!(!r.correct);
        assert_eq!(r.transition, Transition::Continued);
        assert_eq!(r.snapshot.remaining, 1);

        let r = session.guess(letter('Y'));
        assert!(!r.correct);
        assert_eq!(r.transition, Transition::Lost);
        assert_eq!(r.snapshot.remaining, 0);
        assert_eq!(session.outcome(), Outcome::Lost);
    }

    #[test]
    fn test_completing_word_on_last_try_wins() {
        let mut session = Session::new(word("AB"), 2);
        session.guess(letter('X'));
        session.guess(letter('A'));
        assert_eq!(session.remaining(), 1);

        let r = session.guess(letter('B'));
        assert_eq!(r.transition, Transition::Won);
        assert_eq!(session.outcome(), Outcome::Won);
    }

    #[test]
    fn test_repeat_guess_is_noop() {
        let mut session = Session::new(word("CAT"), 6);
        session.guess(letter('C'));
        let before = session.clone();

        let r = session.guess(letter('C'));
        assert_eq!(r.transition, Transition::NoOp);
        assert!(r.correct);
        assert_eq!(session, before);
    }

    #[test]
    fn test_repeat_wrong_guess_costs_nothing() {
        let mut session = Session::new(word("CAT"), 6);
        session.guess(letter('Z'));
        session.guess(letter('Z'));
        session.guess(letter('Z'));

        assert_eq!(session.wrong_count(), 1);
        assert_eq!(session.remaining(), 5);
    }

    #[test]
    fn test_guess_after_end_is_noop() {
        let mut session = Session::new(word("DOG"), 1);
        session.guess(letter('X'));
        assert_eq!(session.outcome(), Outcome::Lost);
        let before = session.clone();

        let r = session.guess(letter('D'));
        assert_eq!(r.transition, Transition::NoOp);
        assert_eq!(session, before);
    }

    #[test]
    fn test_wrong_letters_keep_guess_order() {
        let mut session = Session::new(word("CAT"), 6);
        session.guess(letter('Z'));
        session.guess(letter('A'));
        session.guess(letter('Q'));

        assert_eq!(session.wrong(), &[letter('Z'), letter('Q')]);
    }

    #[test]
    fn test_wrong_guesses_are_subset_of_guessed() {
        let mut session = Session::new(word("BANANA"), 6);

        for c in ['B', 'X', 'A', 'Y', 'N', 'Z'] {
            session.guess(letter(c));
            let wrong: LetterSet = session.wrong().iter().copied().collect();
            assert!(wrong.is_subset(session.guessed()));
        }
    }

    #[test]
    fn test_repeated_letter_word_needs_each_letter_once() {
        let mut session = Session::new(word("BANANA"), 6);

        session.guess(letter('B'));
        session.guess(letter('A'));
        let r = session.guess(letter('N'));

        assert_eq!(r.transition, Transition::Won);
        assert_eq!(r.snapshot.masked.to_string(), "B A N A N A");
    }

    #[test]
    fn test_snapshot_hides_secret_in_progress() {
        let mut session = Session::new(word("CAT"), 6);
        session.guess(letter('C'));

        assert_eq!(session.snapshot().secret, None);
    }

    #[test]
    fn test_snapshot_reveals_secret_after_loss() {
        let mut session = Session::new(word("DOG"), 1);
        session.guess(letter('X'));

        assert_eq!(session.snapshot().secret, Some(word("DOG")));
    }

    #[test]
    fn test_serde_round_trip() {
        let mut session = Session::new(word("CAT"), 6);
        session.guess(letter('C'));
        session.guess(letter('Z'));

        let json = serde_json::to_string(&session).unwrap();
        let back: Session = serde_json::from_str(&json).unwrap();

        assert_eq!(back, session);
    }
}
