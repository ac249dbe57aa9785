//! Dataset construction: parsing user input and the structured record type.
//!
//! The interactive driver stays thin by delegating all parsing here, which
//! also keeps every coercion path reachable from integration tests.

use std::fmt;

use thiserror::Error;

use crate::core::SortOrder;
use crate::measure::{DeepSize, SizeContext};

/// Everything that can go wrong while turning prompt answers into a dataset.
///
/// All variants are reported to the user as a printed message followed by a
/// clean early return; none of them crash the process.
#[derive(Debug, Error)]
pub enum InputError {
    /// A menu answer matched none of the offered options.
    #[error("Invalid choice: {0}")]
    InvalidChoice(String),
    /// A token could not be parsed as a floating-point number.
    #[error("'{0}' is not a valid number")]
    InvalidNumber(String),
    /// A token could not be parsed as a non-negative whole number.
    #[error("'{0}' is not a valid whole number")]
    InvalidInteger(String),
    /// Reading from the terminal failed.
    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),
}

/// Parses one token as `f64`, trimming surrounding whitespace.
pub fn parse_number(token: &str) -> Result<f64, InputError> {
    let token = token.trim();
    token
        .parse()
        .map_err(|_| InputError::InvalidNumber(token.to_string()))
}

/// Parses a comma-separated list of numbers, e.g. `"3, 1,2"` → `[3.0, 1.0, 2.0]`.
///
/// The first malformed token aborts the whole parse.
pub fn parse_numbers(line: &str) -> Result<Vec<f64>, InputError> {
    line.split(',').map(parse_number).collect()
}

/// Parses one token as a non-negative whole number (record counts, ages).
pub fn parse_integer(token: &str) -> Result<u32, InputError> {
    let token = token.trim();
    token
        .parse()
        .map_err(|_| InputError::InvalidInteger(token.to_string()))
}

/// Splits a comma-separated word list, trimming each item.
pub fn parse_words(line: &str) -> Vec<String> {
    line.split(',').map(|word| word.trim().to_string()).collect()
}

/// Maps a direction menu answer to a [`SortOrder`].
///
/// `"2"` selects descending; anything else falls back to ascending, which is
/// the documented default.
pub fn parse_order(choice: &str) -> SortOrder {
    if choice.trim() == "2" {
        SortOrder::Descending
    } else {
        SortOrder::Ascending
    }
}

/// A structured record with several sortable fields.
#[derive(Clone, PartialEq)]
pub struct Person {
    pub name: String,
    pub age: u32,
    pub grade: f64,
}

impl Person {
    pub fn new(name: impl Into<String>, age: u32, grade: f64) -> Self {
        Self {
            name: name.into(),
            age,
            grade,
        }
    }

    /// Case-insensitive projection of the name, used by name-based keys.
    pub fn name_key(&self) -> String {
        self.name.to_lowercase()
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} | Age: {} | Grade: {}", self.name, self.age, self.grade)
    }
}

// Records render the same way in debug-printed sequences as on their own.
impl fmt::Debug for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl DeepSize for Person {
    fn heap_size(&self, ctx: &mut SizeContext) -> usize {
        self.name.heap_size(ctx)
    }
}

/// The sort-key strategies offered for [`Person`] datasets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PersonKey {
    Age,
    Name,
    Grade,
    AgeThenName,
    GradeThenAge,
}

impl PersonKey {
    /// Maps a strategy menu answer (`"1"`–`"5"`) to a key strategy.
    pub fn from_choice(choice: &str) -> Result<Self, InputError> {
        match choice.trim() {
            "1" => Ok(PersonKey::Age),
            "2" => Ok(PersonKey::Name),
            "3" => Ok(PersonKey::Grade),
            "4" => Ok(PersonKey::AgeThenName),
            "5" => Ok(PersonKey::GradeThenAge),
            other => Err(InputError::InvalidChoice(other.to_string())),
        }
    }
}
