//! Record types for tabular nutrition input.
//!
//! A [`NutritionRecord`] is built from one CSV row, handed to a
//! [`DeclarationFormatter`](crate::formatter::DeclarationFormatter), and
//! discarded. Nothing here persists between rows.

use std::fmt;
use std::num::ParseFloatError;

use clap::ValueEnum;

// ============================================================================
// RecordKind
// ============================================================================

/// The kind of nutrition record a CSV file contains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RecordKind {
    /// Foods, measured per 100g.
    Food,
    /// Drinks, measured per 100ml. Carries an alcoholic flag.
    Drink,
}

impl RecordKind {
    /// Columns that must be present in the header for this kind.
    ///
    /// `is_alcoholic` is deliberately absent here: it is optional for
    /// drinks and defaults to false when the column is missing.
    pub fn required_columns(&self) -> &'static [&'static str] {
        &["name", "carbohydrates", "protein", "calories", "category"]
    }

    /// The full column set this kind understands, optional columns included.
    ///
    /// Used for remedial error messages and sample file headers.
    pub fn declared_columns(&self) -> &'static [&'static str] {
        match self {
            Self::Food => &["name", "carbohydrates", "protein", "calories", "category"],
            Self::Drink => &[
                "name",
                "carbohydrates",
                "protein",
                "calories",
                "category",
                "is_alcoholic",
            ],
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Food => write!(f, "food"),
            Self::Drink => write!(f, "drink"),
        }
    }
}

// ============================================================================
// Truthy tokens
// ============================================================================

/// The fixed set of raw values interpreted as boolean true for `is_alcoholic`.
pub const TRUTHY_TOKENS: [&str; 3] = ["true", "yes", "1"];

/// Maps a raw `is_alcoholic` field to a boolean.
///
/// Matching is case-insensitive against [`TRUTHY_TOKENS`]; any other value,
/// including the empty string, is false.
pub fn parse_flag(raw: &str) -> bool {
    let token = raw.trim().to_ascii_lowercase();
    TRUTHY_TOKENS.contains(&token.as_str())
}

// ============================================================================
// NutritionValue
// ============================================================================

/// A validated numeric field that remembers how it was written.
///
/// Declarations embed the input lexeme verbatim (`24.0` stays `24.0`, `99`
/// stays `99`), so the parsed value is carried alongside the trimmed source
/// text rather than re-rendered from `f64`.
#[derive(Debug, Clone, PartialEq)]
pub struct NutritionValue {
    raw: String,
    value: f64,
}

impl NutritionValue {
    /// Parses a raw field into a value, trimming surrounding whitespace.
    ///
    /// No lower bound is enforced; negative values pass.
    pub fn parse(raw: &str) -> Result<Self, ParseFloatError> {
        let trimmed = raw.trim();
        let value: f64 = trimmed.parse()?;
        Ok(Self {
            raw: trimmed.to_string(),
            value,
        })
    }

    /// The parsed floating-point value.
    pub fn value(&self) -> f64 {
        self.value
    }

    /// The trimmed input lexeme.
    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

impl fmt::Display for NutritionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

// ============================================================================
// NutritionRecord
// ============================================================================

/// One parsed row of nutrition input data.
///
/// Constructed per input row, immediately serialized to a declaration line,
/// then discarded.
#[derive(Debug, Clone, PartialEq)]
pub struct NutritionRecord {
    pub name: String,
    pub carbohydrates: NutritionValue,
    pub protein: NutritionValue,
    pub calories: NutritionValue,
    pub category: String,
    pub kind: RecordKind,
    /// `Some` only for [`RecordKind::Drink`].
    pub is_alcoholic: Option<bool>,
}

impl NutritionRecord {
    /// Creates a food record.
    pub fn food(
        name: impl Into<String>,
        carbohydrates: NutritionValue,
        protein: NutritionValue,
        calories: NutritionValue,
        category: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            carbohydrates,
            protein,
            calories,
            category: category.into(),
            kind: RecordKind::Food,
            is_alcoholic: None,
        }
    }

    /// Creates a drink record.
    pub fn drink(
        name: impl Into<String>,
        carbohydrates: NutritionValue,
        protein: NutritionValue,
        calories: NutritionValue,
        category: impl Into<String>,
        is_alcoholic: bool,
    ) -> Self {
        Self {
            name: name.into(),
            carbohydrates,
            protein,
            calories,
            category: category.into(),
            kind: RecordKind::Drink,
            is_alcoholic: Some(is_alcoholic),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
