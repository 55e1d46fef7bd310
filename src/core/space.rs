//! The universe of codes for a game configuration
//!
//! Codes are enumerated in lexicographic order (last position varies
//! fastest). Every deterministic tie-break in the solver relies on this order.

use super::code::Code;
use super::config::GameConfig;

/// All codes of length L over N colors, optionally without repeated colors
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeSpace {
    code_length: usize,
    num_colors: usize,
    duplicates_allowed: bool,
    codes: Vec<Code>,
}

impl CodeSpace {
    /// Enumerate the space
    ///
    /// The caller is expected to have validated the parameters (see
    /// [`GameConfig::validate`]); an impossible combination yields an empty space.
    ///
    /// # Examples
    /// ```
    /// use mastermind_solver::core::CodeSpace;
    ///
    /// assert_eq!(CodeSpace::new(4, 6, true).len(), 1296);
    /// assert_eq!(CodeSpace::new(4, 6, false).len(), 360);
    /// ```
    #[must_use]
    pub fn new(code_length: usize, num_colors: usize, duplicates_allowed: bool) -> Self {
        let codes = enumerate(code_length, num_colors, duplicates_allowed);
        Self {
            code_length,
            num_colors,
            duplicates_allowed,
            codes,
        }
    }

    #[must_use]
    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(
            config.code_length,
            config.num_colors,
            config.duplicates_allowed,
        )
    }

    #[must_use]
    pub const fn code_length(&self) -> usize {
        self.code_length
    }

    #[must_use]
    pub const fn num_colors(&self) -> usize {
        self.num_colors
    }

    #[must_use]
    pub const fn duplicates_allowed(&self) -> bool {
        self.duplicates_allowed
    }

    /// All codes in enumeration order
    #[must_use]
    pub fn codes(&self) -> &[Code] {
        &self.codes
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Code> {
        self.codes.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Check membership by the space's rules rather than by search
    #[must_use]
    pub fn contains(&self, code: &Code) -> bool {
        code.len() == self.code_length
            && code
                .pegs()
                .iter()
                .all(|&peg| usize::from(peg) < self.num_colors)
            && (self.duplicates_allowed || !code.has_duplicates())
    }

    /// Opening guess: first color in the first half, second color in the rest
    ///
    /// For L = 4 this is the classic `1122`. Falls back to the first code in
    /// enumeration order when that pattern is not in the space (single color
    /// alphabet, or duplicates disallowed).
    #[must_use]
    pub fn seed_guess(&self) -> Option<Code> {
        let half = self.code_length / 2;
        let pegs: Vec<u8> = (0..self.code_length)
            .map(|i| u8::from(i >= half))
            .collect();
        let seed = Code::from_pegs(pegs);

        if self.contains(&seed) {
            Some(seed)
        } else {
            self.codes.first().cloned()
        }
    }
}

impl<'a> IntoIterator for &'a CodeSpace {
    type Item = &'a Code;
    type IntoIter = std::slice::Iter<'a, Code>;

    fn into_iter(self) -> Self::IntoIter {
        self.codes.iter()
    }
}

/// Odometer over N^L, skipping codes with repeats when required
fn enumerate(code_length: usize, num_colors: usize, duplicates_allowed: bool) -> Vec<Code> {
    if code_length == 0 || num_colors == 0 {
        return Vec::new();
    }
    if !duplicates_allowed && code_length > num_colors {
        return Vec::new();
    }

    let Ok(top) = u8::try_from(num_colors - 1) else {
        return Vec::new();
    };

    let mut codes = Vec::new();
    let mut pegs = vec![0u8; code_length];

    loop {
        let code = Code::from_pegs(pegs.clone());
        if duplicates_allowed || !code.has_duplicates() {
            codes.push(code);
        }

        // Advance the odometer; stop after the last digit rolls over
        let mut position = code_length;
        loop {
            if position == 0 {
                return codes;
            }
            position -= 1;
            if pegs[position] < top {
                pegs[position] += 1;
                break;
            }
            pegs[position] = 0;
        }
    }
}
