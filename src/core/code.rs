//! Mastermind code representation
//!
//! A Code stores the color of each peg as an index into the game's alphabet.
//! Names only appear at the boundary (see [`Alphabet`](super::Alphabet)).

use std::fmt;
use thiserror::Error;

/// Upper bound on alphabet size; lets scoring count colors on the stack
pub const MAX_COLORS: usize = 16;

/// Upper bound on code length; keeps peg counts within a `u8`
pub const MAX_CODE_LENGTH: usize = 16;

/// An ordered sequence of color indices
///
/// Two codes are equal iff their pegs are equal element-wise. Ordering is
/// lexicographic, which matches the enumeration order of [`CodeSpace`](super::CodeSpace).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Code(Vec<u8>);

/// Error type for codes that break the game's rules
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodeError {
    #[error("Guess must be of length {expected}, got {actual}")]
    WrongLength { expected: usize, actual: usize },

    #[error("Color index {index} at position {position} is outside an alphabet of {num_colors} colors")]
    ColorOutOfRange {
        position: usize,
        index: u8,
        num_colors: usize,
    },

    #[error("Unknown color '{0}'")]
    UnknownColor(String),

    #[error("Duplicate colors are not allowed")]
    DuplicatesNotAllowed,

    #[error("Empty code")]
    Empty,

    #[error("Code has {actual} pegs, at most {max} allowed")]
    TooLong { actual: usize, max: usize },
}

impl Code {
    /// Create a code from raw color indices
    ///
    /// # Errors
    /// Returns `CodeError::Empty` for an empty sequence,
    /// `CodeError::TooLong` past [`MAX_CODE_LENGTH`] pegs and
    /// `CodeError::ColorOutOfRange` if any index is `>= num_colors`.
    ///
    /// # Examples
    /// ```
    /// use mastermind_solver::core::Code;
    ///
    /// let code = Code::new(vec![0, 0, 1, 1], 6).unwrap();
    /// assert_eq!(code.len(), 4);
    /// assert!(Code::new(vec![0, 7], 6).is_err());
    /// ```
    pub fn new(pegs: Vec<u8>, num_colors: usize) -> Result<Self, CodeError> {
        if pegs.is_empty() {
            return Err(CodeError::Empty);
        }
        if pegs.len() > MAX_CODE_LENGTH {
            return Err(CodeError::TooLong {
                actual: pegs.len(),
                max: MAX_CODE_LENGTH,
            });
        }

        let limit = num_colors.min(MAX_COLORS);
        if let Some((position, &index)) = pegs
            .iter()
            .enumerate()
            .find(|&(_, &peg)| usize::from(peg) >= limit)
        {
            return Err(CodeError::ColorOutOfRange {
                position,
                index,
                num_colors,
            });
        }

        Ok(Self(pegs))
    }

    /// Build a code whose indices are already known to be in range
    pub(crate) const fn from_pegs(pegs: Vec<u8>) -> Self {
        Self(pegs)
    }

    /// Color indices, one per position
    #[inline]
    #[must_use]
    pub fn pegs(&self) -> &[u8] {
        &self.0
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Check whether any color appears more than once
    #[must_use]
    pub fn has_duplicates(&self) -> bool {
        let mut seen = [false; MAX_COLORS];
        for &peg in &self.0 {
            let slot = &mut seen[usize::from(peg)];
            if *slot {
                return true;
            }
            *slot = true;
        }
        false
    }

    /// Count of each color index in the code
    #[inline]
    pub(crate) fn color_counts(&self) -> [u8; MAX_COLORS] {
        let mut counts = [0u8; MAX_COLORS];
        for &peg in &self.0 {
            counts[usize::from(peg)] += 1;
        }
        counts
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for peg in &self.0 {
            write!(f, "{}", peg + 1)?;
        }
        Ok(())
    }
}
