//! # Subtype Constraints
//!
//! ASN.1 modules can narrow a string type with subtype constraints
//! such as `SIZE (1..64)` or `FROM ("0".."9")`. Constraints apply to the
//! canonical text, counted in characters, and are only evaluated when a caller
//! asks for them: constructing a value never checks them.

use serde::{Deserialize, Serialize};

use crate::error::{CharacterStringError, Result};

/// A set of permitted characters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Alphabet {
    /// Inclusive character ranges.
    Ranges(Vec<(char, char)>),
    /// An explicit list of characters.
    Chars(String),
}

impl Alphabet {
    /// Alphabet made of inclusive ranges.
    pub fn ranges(ranges: &[(char, char)]) -> Self {
        Self::Ranges(ranges.to_vec())
    }

    /// Alphabet made of the characters of `chars`.
    pub fn chars(chars: &str) -> Self {
        Self::Chars(chars.to_string())
    }

    /// True if `c` belongs to the alphabet.
    pub fn contains(&self, c: char) -> bool {
        match self {
            Self::Ranges(ranges) => ranges.iter().any(|(lo, hi)| (*lo..=*hi).contains(&c)),
            Self::Chars(chars) => chars.contains(c),
        }
    }

    /// First character of `text` outside the alphabet, with its char index.
    pub fn first_outside(&self, text: &str) -> Option<(usize, char)> {
        text.chars().enumerate().find(|(_, c)| !self.contains(*c))
    }
}

/// A single subtype constraint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Constraint {
    /// `SIZE (min..max)` in characters. `None` leaves that bound open.
    ValueSize {
        /// Lower bound, inclusive.
        min: Option<usize>,
        /// Upper bound, inclusive.
        max: Option<usize>,
    },
    /// `FROM (...)`: every character must belong to the alphabet.
    PermittedAlphabet {
        /// Permitted characters.
        alphabet: Alphabet,
    },
    /// The text must equal one of the listed values.
    SingleValue {
        /// Accepted values.
        values: Vec<String>,
    },
}

impl Constraint {
    /// Check canonical text against this constraint.
    ///
    /// # Errors
    ///
    /// Returns `CharacterStringError::ConstraintViolation` describing the
    /// first failure.
    pub fn check(&self, text: &str) -> Result<()> {
        match self {
            Self::ValueSize { min, max } => {
                let len = text.chars().count();
                if let Some(min) = min {
                    if len < *min {
                        return Err(CharacterStringError::ConstraintViolation(format!(
                            "size {len} is below minimum {min}"
                        )));
                    }
                }
                if let Some(max) = max {
                    if len > *max {
                        return Err(CharacterStringError::ConstraintViolation(format!(
                            "size {len} exceeds maximum {max}"
                        )));
                    }
                }
                Ok(())
            }
            Self::PermittedAlphabet { alphabet } => match alphabet.first_outside(text) {
                Some((index, c)) => Err(CharacterStringError::ConstraintViolation(format!(
                    "character {c:?} at index {index} is not in the permitted alphabet"
                ))),
                None => Ok(()),
            },
            Self::SingleValue { values } => {
                if values.iter().any(|v| v == text) {
                    Ok(())
                } else {
                    Err(CharacterStringError::ConstraintViolation(format!(
                        "{text:?} is not one of the permitted values"
                    )))
                }
            }
        }
    }
}

/// A conjunction of constraints: text passes when every member passes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConstraintSet {
    constraints: Vec<Constraint>,
}

impl ConstraintSet {
    /// Empty set, which accepts everything.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a constraint.
    pub fn with(mut self, constraint: Constraint) -> Self {
        self.constraints.push(constraint);
        self
    }

    /// Add a `SIZE (min..max)` constraint.
    pub fn size(self, min: usize, max: usize) -> Self {
        self.with(Constraint::ValueSize {
            min: Some(min),
            max: Some(max),
        })
    }

    /// Add a `FROM (...)` constraint.
    pub fn alphabet(self, alphabet: Alphabet) -> Self {
        self.with(Constraint::PermittedAlphabet { alphabet })
    }

    /// Members of the set.
    pub fn constraints(&self) -> &[Constraint] {
        &self.constraints
    }

    /// True when the set has no members.
    pub fn is_empty(&self) -> bool {
        self.constraints.is_empty()
    }

    /// Check canonical text against every member, stopping at the first failure.
    pub fn check(&self, text: &str) -> Result<()> {
        self.constraints.iter().try_for_each(|c| c.check(text))
    }
}

impl From<Constraint> for ConstraintSet {
    fn from(constraint: Constraint) -> Self {
        Self::new().with(constraint)
    }
}
