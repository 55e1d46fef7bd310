//! Named colors
//!
//! A [`Palette`] is the universe of color names a game may draw from. An
//! [`Alphabet`] is the ordered selection of N colors fixed for one game;
//! codes index into it.

use super::code::{Code, CodeError, MAX_COLORS};
use super::config::ConfigError;
use rand::Rng;
use rand::seq::index::sample;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Default color names, in palette order
pub const DEFAULT_COLORS: [&str; 10] = [
    "red", "blue", "green", "yellow", "orange", "purple", "pink", "brown", "black", "white",
];

/// Universe of color names available to games
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    names: Vec<String>,
}

impl Palette {
    /// Create a palette from distinct names
    ///
    /// # Errors
    /// Returns `ConfigError::EmptyPalette` or `ConfigError::DuplicateColor`.
    pub fn new<I, S>(names: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names = normalize_names(names)?;
        Ok(Self { names })
    }

    #[must_use]
    pub fn names(&self) -> &[String] {
        &self.names
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// The first `count` colors, in palette order
    ///
    /// # Errors
    /// Returns `ConfigError::InvalidColorCount` if `count` is zero or exceeds the palette.
    pub fn first(&self, count: usize) -> Result<Alphabet, ConfigError> {
        self.check_count(count)?;
        Alphabet::new(self.names[..count].iter().cloned())
    }

    /// Randomly select `count` distinct colors
    ///
    /// # Errors
    /// Returns `ConfigError::InvalidColorCount` if `count` is zero or exceeds the palette.
    pub fn sample<R: Rng + ?Sized>(&self, count: usize, rng: &mut R) -> Result<Alphabet, ConfigError> {
        self.check_count(count)?;
        let picked = sample(rng, self.names.len(), count);
        Alphabet::new(picked.iter().map(|i| self.names[i].clone()))
    }

    fn check_count(&self, count: usize) -> Result<(), ConfigError> {
        let max = self.names.len().min(MAX_COLORS);
        if count == 0 || count > max {
            return Err(ConfigError::InvalidColorCount { actual: count, max });
        }
        Ok(())
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            names: DEFAULT_COLORS.iter().map(|&s| s.to_string()).collect(),
        }
    }
}

/// Ordered color names of one game; position = color index
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Alphabet {
    colors: Vec<String>,
}

impl Alphabet {
    /// Create an alphabet from distinct names
    ///
    /// Names are trimmed and lowercased.
    ///
    /// # Errors
    /// Returns `ConfigError` on empty, duplicated or oversized input.
    pub fn new<I, S>(colors: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let colors = normalize_names(colors)?;
        if colors.len() > MAX_COLORS {
            return Err(ConfigError::InvalidColorCount {
                actual: colors.len(),
                max: MAX_COLORS,
            });
        }
        Ok(Self { colors })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    #[must_use]
    pub fn names(&self) -> &[String] {
        &self.colors
    }

    /// Name of the color at `index`, if any
    #[must_use]
    pub fn name(&self, index: u8) -> Option<&str> {
        self.colors.get(usize::from(index)).map(String::as_str)
    }

    /// Index of a color name (case-insensitive)
    #[must_use]
    pub fn index_of(&self, name: &str) -> Option<u8> {
        let name = name.trim();
        self.colors
            .iter()
            .position(|c| c.eq_ignore_ascii_case(name))
            .and_then(|i| u8::try_from(i).ok())
    }

    /// Convert color names into a code
    ///
    /// # Errors
    /// Returns `CodeError::UnknownColor` for a name outside the alphabet and
    /// `CodeError::Empty` for an empty list.
    pub fn encode<S: AsRef<str>>(&self, names: &[S]) -> Result<Code, CodeError> {
        let pegs = names
            .iter()
            .map(|name| {
                let name = name.as_ref();
                self.index_of(name)
                    .ok_or_else(|| CodeError::UnknownColor(name.trim().to_string()))
            })
            .collect::<Result<Vec<u8>, CodeError>>()?;
        Code::new(pegs, self.len())
    }

    /// Parse a comma-separated list such as `"[red, 'blue', green, yellow]"`
    ///
    /// Brackets and quotes around the list or its items are ignored.
    ///
    /// # Errors
    /// Same as [`Alphabet::encode`].
    ///
    /// # Examples
    /// ```
    /// use mastermind_solver::core::Alphabet;
    ///
    /// let alphabet = Alphabet::new(["red", "blue", "green", "yellow"]).unwrap();
    /// let code = alphabet.parse_code("[red, 'blue', green, yellow]").unwrap();
    /// assert_eq!(code.pegs(), &[0, 1, 2, 3]);
    /// ```
    pub fn parse_code(&self, text: &str) -> Result<Code, CodeError> {
        let inner = text.trim().trim_start_matches('[').trim_end_matches(']');
        let names: Vec<&str> = inner
            .split(',')
            .map(|item| item.trim().trim_matches(|c| c == '\'' || c == '"'))
            .filter(|item| !item.is_empty())
            .collect();
        self.encode(&names)
    }

    /// Color names of a code
    ///
    /// Indices outside the alphabet render as `"?"`.
    #[must_use]
    pub fn decode(&self, code: &Code) -> Vec<String> {
        code.pegs()
            .iter()
            .map(|&peg| self.name(peg).unwrap_or("?").to_string())
            .collect()
    }

    /// Comma-separated color names of a code
    #[must_use]
    pub fn render(&self, code: &Code) -> String {
        self.decode(code).join(", ")
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.colors.join(", "))
    }
}

fn normalize_names<I, S>(names: I) -> Result<Vec<String>, ConfigError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut out: Vec<String> = Vec::new();
    for name in names {
        let name = name.into().trim().to_lowercase();
        if out.contains(&name) {
            return Err(ConfigError::DuplicateColor(name));
        }
        out.push(name);
    }
    if out.is_empty() {
        return Err(ConfigError::EmptyPalette);
    }
    Ok(out)
}
