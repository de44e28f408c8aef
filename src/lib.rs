//! # gallows
//!
//! A hangman game-state engine decoupled from any presentation layer.
//!
//! ## Design Principles
//!
//! 1. **Engine Only**: No I/O, no rendering, no input loop. Embedders render
//!    [`Snapshot`]s however they like: terminal, GUI, or network protocol.
//!
//! 2. **Snapshots Over Shared State**: Callers never hold references into
//!    live session state. Every observation is a plain-data copy that can be
//!    cloned, stored, or serialized.
//!
//! 3. **Deterministic Under Test**: Word selection goes through a seedable
//!    RNG, so full rounds replay identically from a seed.
//!
//! ## Modules
//!
//! - `core`: Letters, words, RNG, configuration, errors
//! - `session`: One round of play and its outcome rules
//! - `snapshot`: Read-only views handed to callers
//! - `engine`: The embedding surface that ties the above together
//!
//! ## Example
//!
//! ```
//! use gallows::{GameConfig, GameEngine, Outcome, WordList};
//!
//! let words = WordList::new(["CAT"])?;
//! let mut engine = GameEngine::with_seed(GameConfig::new(words), 42);
//!
//! engine.start_new_game()?;
//! for letter in ['C', 'A', 'T'] {
//!     engine.guess_letter(letter)?;
//! }
//!
//! let snapshot = engine.snapshot().unwrap();
//! assert_eq!(snapshot.outcome, Outcome::Won);
//! assert_eq!(snapshot.masked.to_string(), "C A T");
//! # Ok::<(), gallows::GameError>(())
//! ```

pub mod core;
pub mod session;
pub mod snapshot;
pub mod engine;

// Re-export commonly used types
pub use crate::core::{
    GameConfig, GameError, GameRng, Letter, LetterSet, Word, WordList, DEFAULT_MAX_WRONG,
};

pub use crate::session::{Outcome, Session};

pub use crate::snapshot::{GuessResult, MaskedWord, Snapshot, Transition};

pub use crate::engine::GameEngine;
