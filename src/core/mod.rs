//! Core building blocks: errors, letters, words, RNG, configuration.
//!
//! These types validate at construction: once a `Letter` or `Word` exists
//! it is known-good, and the session layer above never re-checks.

pub mod config;
pub mod error;
pub mod letter;
pub mod rng;
pub mod words;

pub use config::{GameConfig, DEFAULT_MAX_WRONG};
pub use error::GameError;
pub use letter::{Letter, LetterSet};
pub use rng::GameRng;
pub use words::{Word, WordList};
