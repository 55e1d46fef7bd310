//! A single Mastermind game instance
//!
//! The game owns its secret, alphabet and guess history. Guesses are
//! validated at the boundary before they are scored or recorded.

mod progress;
mod secret;
mod snapshot;

pub use progress::{Progress, ProgressTable};
pub use secret::generate_secret;
pub use snapshot::GameSnapshot;

use crate::core::{Alphabet, Code, CodeError, CodeSpace, ConfigError, GameConfig, Palette, Score};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Errors raised while playing a game
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("Invalid guess: {0}")]
    InvalidGuess(#[from] CodeError),

    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("No candidate codes remain after turn {turn}; feedback is inconsistent with any secret")]
    EmptyCandidateSet { turn: usize },

    #[error("Malformed guess input: {0}")]
    MalformedInput(String),

    #[error("Game is already over ({0})")]
    GameOver(GameStatus),
}

/// State machine of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameStatus {
    Ongoing,
    Won,
    Lost,
}

impl GameStatus {
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::Ongoing)
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::Ongoing => "ongoing",
            Self::Won => "won",
            Self::Lost => "lost",
        };
        f.write_str(text)
    }
}

/// Result of scoring one guess against the secret
#[derive(Debug, Clone, PartialEq)]
pub struct Feedback {
    pub score: Score,
    pub progress: Progress,
    pub hint: String,
}

/// A Mastermind game: configuration, alphabet, secret and history
#[derive(Debug, Clone)]
pub struct Game {
    config: GameConfig,
    palette: Palette,
    alphabet: Alphabet,
    space: CodeSpace,
    secret: Code,
    progress: ProgressTable,
    history: Vec<(Code, Score)>,
    attempts: usize,
    status: GameStatus,
}

impl Game {
    /// Start a game with colors sampled from `palette`
    ///
    /// # Errors
    /// Returns `ConfigError` if the configuration is invalid or the palette
    /// has fewer colors than requested.
    pub fn new<R: Rng + ?Sized>(
        config: GameConfig,
        palette: Palette,
        rng: &mut R,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let alphabet = palette.sample(config.num_colors, rng)?;
        let secret = generate_secret(&config, rng);
        Ok(Self::assemble(config, palette, alphabet, secret))
    }

    /// Start a game over a fixed alphabet
    ///
    /// # Errors
    /// Returns `ConfigError` if the configuration is invalid or the alphabet
    /// size differs from `config.num_colors`.
    pub fn with_alphabet<R: Rng + ?Sized>(
        config: GameConfig,
        alphabet: Alphabet,
        rng: &mut R,
    ) -> Result<Self, ConfigError> {
        check_alphabet(&config, &alphabet)?;
        let secret = generate_secret(&config, rng);
        let palette = Palette::new(alphabet.names().iter().cloned())?;
        Ok(Self::assemble(config, palette, alphabet, secret))
    }

    /// Start a game with a known secret
    ///
    /// # Errors
    /// Returns `GameError::Config` for a bad setup and
    /// `GameError::InvalidGuess` if the secret is not a legal code.
    pub fn with_secret(
        config: GameConfig,
        alphabet: Alphabet,
        secret: Code,
    ) -> Result<Self, GameError> {
        check_alphabet(&config, &alphabet)?;
        validate_code(&secret, config.code_length, alphabet.len())?;
        if !config.duplicates_allowed && secret.has_duplicates() {
            return Err(CodeError::DuplicatesNotAllowed.into());
        }
        let palette = Palette::new(alphabet.names().iter().cloned())?;
        Ok(Self::assemble(config, palette, alphabet, secret))
    }

    fn assemble(config: GameConfig, palette: Palette, alphabet: Alphabet, secret: Code) -> Self {
        let space = CodeSpace::from_config(&config);
        let progress = ProgressTable::compute(&space, &secret);
        Self {
            config,
            palette,
            alphabet,
            space,
            secret,
            progress,
            history: Vec::new(),
            attempts: 0,
            status: GameStatus::Ongoing,
        }
    }

    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub const fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    #[must_use]
    pub const fn space(&self) -> &CodeSpace {
        &self.space
    }

    /// The hidden code; guessers never receive it
    #[must_use]
    pub const fn secret(&self) -> &Code {
        &self.secret
    }

    /// Scored guesses in play order
    #[must_use]
    pub fn history(&self) -> &[(Code, Score)] {
        &self.history
    }

    /// Turns used, forfeits included
    #[must_use]
    pub const fn attempts(&self) -> usize {
        self.attempts
    }

    #[must_use]
    pub const fn remaining_guesses(&self) -> usize {
        self.config.max_guesses.saturating_sub(self.attempts)
    }

    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    /// Check a guess against the game's length and alphabet
    ///
    /// # Errors
    /// Returns `CodeError::WrongLength` or `CodeError::ColorOutOfRange`.
    pub fn validate_guess(&self, guess: &Code) -> Result<(), CodeError> {
        validate_code(guess, self.config.code_length, self.alphabet.len())
    }

    /// Parse color names into a code of this game
    ///
    /// # Errors
    /// Returns `CodeError` for unknown colors or a wrong length.
    pub fn parse_code(&self, text: &str) -> Result<Code, CodeError> {
        let code = self.alphabet.parse_code(text)?;
        self.validate_guess(&code)?;
        Ok(code)
    }

    /// Score a guess without recording it
    ///
    /// # Errors
    /// Returns `CodeError` if the guess is malformed.
    pub fn evaluate(&self, guess: &Code) -> Result<Feedback, CodeError> {
        self.validate_guess(guess)?;
        let score = Score::between(guess, &self.secret);
        Ok(Feedback {
            score,
            progress: self.progress.lookup(score),
            hint: score.hint(),
        })
    }

    /// Play a guess: validate, score, record, and advance the state machine
    ///
    /// # Errors
    /// Returns `GameError::GameOver` once the game has finished and
    /// `GameError::InvalidGuess` for a malformed guess, which is not recorded.
    pub fn submit(&mut self, guess: &Code) -> Result<Feedback, GameError> {
        if self.status.is_over() {
            return Err(GameError::GameOver(self.status));
        }
        let feedback = self.evaluate(guess)?;

        self.history.push((guess.clone(), feedback.score));
        self.attempts += 1;
        self.status = if feedback.score.is_solved(self.config.code_length) {
            GameStatus::Won
        } else if self.attempts >= self.config.max_guesses {
            GameStatus::Lost
        } else {
            GameStatus::Ongoing
        };

        Ok(feedback)
    }

    /// Spend a turn without a guess
    ///
    /// # Errors
    /// Returns `GameError::GameOver` once the game has finished.
    pub fn forfeit(&mut self) -> Result<GameStatus, GameError> {
        if self.status.is_over() {
            return Err(GameError::GameOver(self.status));
        }
        self.attempts += 1;
        if self.attempts >= self.config.max_guesses {
            self.status = GameStatus::Lost;
        }
        Ok(self.status)
    }

    /// New secret, empty history; configuration and alphabet are kept
    pub fn reset<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let secret = generate_secret(&self.config, rng);
        self.restart(secret);
    }

    /// Like [`Game::reset`], but also draws a fresh alphabet from the palette
    ///
    /// # Errors
    /// Returns `ConfigError` if the palette cannot supply enough colors.
    pub fn reset_with_new_alphabet<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), ConfigError> {
        self.alphabet = self.palette.sample(self.config.num_colors, rng)?;
        self.reset(rng);
        Ok(())
    }

    /// Restart with a chosen secret
    ///
    /// # Errors
    /// Returns `GameError::InvalidGuess` if `secret` is not a legal code for
    /// this game; the game is left untouched in that case.
    pub fn reset_with_secret(&mut self, secret: Code) -> Result<(), GameError> {
        self.validate_guess(&secret)?;
        if !self.config.duplicates_allowed && secret.has_duplicates() {
            return Err(CodeError::DuplicatesNotAllowed.into());
        }
        self.restart(secret);
        Ok(())
    }

    fn restart(&mut self, secret: Code) {
        self.progress = ProgressTable::compute(&self.space, &secret);
        self.secret = secret;
        self.history.clear();
        self.attempts = 0;
        self.status = GameStatus::Ongoing;
    }

    /// Serializable view of the game, secret included
    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            code_length: self.config.code_length,
            possible_colors: self.alphabet.names().to_vec(),
            duplicates_allowed: self.config.duplicates_allowed,
            secret_code: self.alphabet.decode(&self.secret),
        }
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<Mastermind(possible_colors={}, code_length={}, color_names={}, secret_code_hidden=True)>",
            self.alphabet.len(),
            self.config.code_length,
            self.alphabet
        )
    }
}

fn validate_code(code: &Code, code_length: usize, num_colors: usize) -> Result<(), CodeError> {
    if code.len() != code_length {
        return Err(CodeError::WrongLength {
            expected: code_length,
            actual: code.len(),
        });
    }
    if let Some((position, &index)) = code
        .pegs()
        .iter()
        .enumerate()
        .find(|&(_, &peg)| usize::from(peg) >= num_colors)
    {
        return Err(CodeError::ColorOutOfRange {
            position,
            index,
            num_colors,
        });
    }
    Ok(())
}

fn check_alphabet(config: &GameConfig, alphabet: &Alphabet) -> Result<(), ConfigError> {
    config.validate()?;
    if alphabet.len() != config.num_colors {
        return Err(ConfigError::AlphabetSizeMismatch {
            expected: config.num_colors,
            actual: alphabet.len(),
        });
    }
    Ok(())
}
