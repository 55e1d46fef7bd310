//! Core domain types for Mastermind
//!
//! Codes, colors, scores and the code space. Everything here is pure and
//! owned by value; games and solvers build on top of it.

mod code;
mod color;
mod config;
mod score;
mod space;

pub use code::{Code, CodeError, MAX_CODE_LENGTH, MAX_COLORS};
pub use color::{Alphabet, DEFAULT_COLORS, Palette};
pub use config::{ConfigError, GameConfig, MAX_SPACE_SIZE};
pub use score::{Score, ScoreTable};
pub use space::CodeSpace;
