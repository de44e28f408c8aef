//! Engine: configuration, RNG, and the current session under one handle.
//!
//! ## GameEngine
//!
//! The surface an embedder talks to. [`GameEngine::start_new_game`] draws a
//! secret from the configured word list and replaces whatever session was
//! running; [`GameEngine::guess_letter`] validates raw input at the
//! boundary and forwards it. Callers never touch the session directly for
//! mutation, and everything they get back is a [`Snapshot`] or a
//! [`GuessResult`].
//!
//! ## Determinism
//!
//! [`GameEngine::with_seed`] makes word selection reproducible: two engines
//! built from the same configuration and seed draw the same secrets in the
//! same order.

use tracing::{debug, instrument};

use crate::core::{GameConfig, GameError, GameRng, Letter};
use crate::session::Session;
use crate::snapshot::{GuessResult, Snapshot};

/// A hangman engine: owns the word list, the RNG, and the active round.
#[derive(Clone, Debug)]
pub struct GameEngine {
    config: GameConfig,
    rng: GameRng,
    session: Option<Session>,
}

impl GameEngine {
    /// Create an engine seeded from OS entropy.
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            rng: GameRng::from_entropy(),
            session: None,
        }
    }

    /// Create an engine with a fixed seed for reproducible word selection.
    #[must_use]
    pub fn with_seed(config: GameConfig, seed: u64) -> Self {
        Self {
            config,
            rng: GameRng::new(seed),
            session: None,
        }
    }

    // === Round Control ===

    /// Start a fresh round, replacing any session in progress.
    ///
    /// Draws a secret from the configured word list and returns the opening
    /// snapshot (fully masked, full allowance).
    ///
    /// ## Errors
    ///
    /// Returns [`GameError::EmptyWordList`] if the configuration holds no
    /// words to draw from.
    #[instrument(skip(self))]
    pub fn start_new_game(&mut self) -> Result<Snapshot, GameError> {
        let secret = self
            .config
            .word_list
            .choose(&mut self.rng)
            .ok_or(GameError::EmptyWordList)?
            .clone();

        debug!(
            len = secret.len(),
            max_wrong = self.config.max_wrong,
            "starting session"
        );

        let session = Session::new(secret, self.config.max_wrong);
        let snapshot = session.snapshot();
        self.session = Some(session);
        Ok(snapshot)
    }

    // === Guessing ===

    /// Validate a raw character and apply it as a guess.
    ///
    /// ## Errors
    ///
    /// Returns [`GameError::InvalidLetter`] for anything other than an
    /// uppercase ASCII letter, and [`GameError::SessionNotStarted`] if no
    /// round has been started. Neither error changes any state.
    #[instrument(skip(self))]
    pub fn guess_letter(&mut self, input: char) -> Result<GuessResult, GameError> {
        let letter = Letter::new(input)?;
        self.guess(letter)
    }

    /// Apply an already-validated letter as a guess.
    ///
    /// ## Errors
    ///
    /// Returns [`GameError::SessionNotStarted`] if no round has been
    /// started.
    pub fn guess(&mut self, letter: Letter) -> Result<GuessResult, GameError> {
        let session = self.session.as_mut().ok_or(GameError::SessionNotStarted)?;
        Ok(session.guess(letter))
    }

    // === Accessors ===

    /// Get the configuration the engine was built with.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Get the active session, if a round has been started.
    #[must_use]
    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    /// Take a snapshot of the active session, if a round has been started.
    #[must_use]
    pub fn snapshot(&self) -> Option<Snapshot> {
        self.session.as_ref().map(Session::snapshot)
    }
}
