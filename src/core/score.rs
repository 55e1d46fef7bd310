//! Mastermind feedback calculation and representation
//!
//! A score is the pair (exact, partial):
//! - exact = positions where guess and reference agree
//! - partial = shared colors in the wrong position, bounded by multiplicity
//!
//! [`ScoreTable`] lists every score a code of length L can receive and maps
//! each to a dense index for partition tallies.

use super::code::{Code, CodeError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Feedback for a guess against a reference code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Score {
    pub exact: u8,
    pub partial: u8,
}

impl Score {
    #[inline]
    #[must_use]
    pub const fn new(exact: u8, partial: u8) -> Self {
        Self { exact, partial }
    }

    /// The winning score for codes of length `code_length`
    #[inline]
    #[must_use]
    pub const fn solved(code_length: usize) -> Self {
        Self::new(code_length as u8, 0)
    }

    /// Check if every position matched
    #[inline]
    #[must_use]
    pub const fn is_solved(self, code_length: usize) -> bool {
        self.exact as usize == code_length
    }

    /// Total colors matched, exact or partial
    #[inline]
    #[must_use]
    pub const fn total(self) -> u8 {
        self.exact + self.partial
    }

    /// Calculate the score when `guess` is played against `reference`
    ///
    /// Scoring is symmetric in its two arguments.
    ///
    /// # Errors
    /// Returns `CodeError::WrongLength` if the codes differ in length.
    ///
    /// # Examples
    /// ```
    /// use mastermind_solver::core::{Alphabet, Score};
    ///
    /// let alphabet = Alphabet::new(["red", "blue", "green", "yellow"]).unwrap();
    /// let secret = alphabet.parse_code("red, blue, green, yellow").unwrap();
    /// let guess = alphabet.parse_code("red, yellow, green, blue").unwrap();
    ///
    /// assert_eq!(Score::calculate(&guess, &secret).unwrap(), Score::new(2, 2));
    /// ```
    pub fn calculate(guess: &Code, reference: &Code) -> Result<Self, CodeError> {
        if guess.len() != reference.len() {
            return Err(CodeError::WrongLength {
                expected: reference.len(),
                actual: guess.len(),
            });
        }
        Ok(Self::between(guess, reference))
    }

    /// Score two codes of equal length
    ///
    /// # Algorithm
    /// 1. Count exact positional matches
    /// 2. Sum min(count in guess, count in reference) over every color
    /// 3. Partial = that sum minus the exact matches
    #[must_use]
    pub(crate) fn between(guess: &Code, reference: &Code) -> Self {
        debug_assert_eq!(guess.len(), reference.len(), "codes must share a length");

        let exact = guess
            .pegs()
            .iter()
            .zip(reference.pegs())
            .filter(|(g, r)| g == r)
            .count() as u8;

        let guess_counts = guess.color_counts();
        let reference_counts = reference.color_counts();
        let shared: u8 = guess_counts
            .iter()
            .zip(&reference_counts)
            .map(|(&g, &r)| g.min(r))
            .sum();

        Self::new(exact, shared - exact)
    }

    /// Human-readable feedback line
    #[must_use]
    pub fn hint(self) -> String {
        format!(
            "Correct color and position: {}. Correct color but wrong position: {}.",
            self.exact, self.partial
        )
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.exact, self.partial)
    }
}

impl FromStr for Score {
    type Err = String;

    /// Parse `"e,p"`, `"e/p"` or `"(e, p)"`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let inner = s.trim().trim_start_matches('(').trim_end_matches(')');
        let mut parts = inner.split([',', '/']).map(str::trim);

        let (Some(exact), Some(partial), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(format!("Invalid score string: {s}"));
        };

        let exact: u8 = exact
            .parse()
            .map_err(|_| format!("Invalid exact count in score: {s}"))?;
        let partial: u8 = partial
            .parse()
            .map_err(|_| format!("Invalid partial count in score: {s}"))?;

        Ok(Self::new(exact, partial))
    }
}

/// Every score reachable by codes of a fixed length
///
/// Contains all (e, p) with e + p <= L except (L-1, 1): when L-1 pegs are
/// exact the last one cannot be a misplaced match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreTable {
    code_length: usize,
    scores: Vec<Score>,
    index: Vec<Option<usize>>,
}

impl ScoreTable {
    /// Build the table for codes of length `code_length`
    ///
    /// # Examples
    /// ```
    /// use mastermind_solver::core::{Score, ScoreTable};
    ///
    /// let table = ScoreTable::new(4);
    /// assert_eq!(table.len(), 14);
    /// assert!(!table.contains(Score::new(3, 1)));
    /// ```
    #[must_use]
    pub fn new(code_length: usize) -> Self {
        let side = code_length + 1;
        let mut scores = Vec::new();
        let mut index = vec![None; side * side];

        for exact in 0..=code_length {
            for partial in 0..=(code_length - exact) {
                if code_length > 0 && exact == code_length - 1 && partial == 1 {
                    continue;
                }
                index[exact * side + partial] = Some(scores.len());
                scores.push(Score::new(exact as u8, partial as u8));
            }
        }

        Self {
            code_length,
            scores,
            index,
        }
    }

    #[must_use]
    pub const fn code_length(&self) -> usize {
        self.code_length
    }

    /// All reachable scores, ordered by exact then partial
    #[must_use]
    pub fn scores(&self) -> &[Score] {
        &self.scores
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// Dense index of a score, `None` if unreachable
    #[inline]
    #[must_use]
    pub fn index_of(&self, score: Score) -> Option<usize> {
        let (exact, partial) = (usize::from(score.exact), usize::from(score.partial));
        if exact + partial > self.code_length {
            return None;
        }
        self.index[exact * (self.code_length + 1) + partial]
    }

    #[must_use]
    pub fn contains(&self, score: Score) -> bool {
        self.index_of(score).is_some()
    }
}
