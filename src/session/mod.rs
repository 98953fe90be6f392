//! Interactive play on top of the rules and search layers.

pub mod game;

pub use game::{GameSession, PlayOutcome, SessionConfig, SessionError};
