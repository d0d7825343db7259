// Record Types - Transactions and Apples
// Immutable units of parsed input, created by the parsers and never mutated

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Weight above which an apple counts as heavy (strict comparison)
pub const HEAVY_WEIGHT_THRESHOLD: u32 = 150;

// ============================================================================
// COLOR
// ============================================================================

/// Color - closed set of apple labels
///
/// Parsing is exhaustive: a label outside this set is rejected at the
/// parser level, never mapped to a default variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Color {
    Green,
    Red,
}

impl Color {
    /// Capitalized name for display ("Green apple with 100 weight")
    pub fn name(&self) -> &str {
        match self {
            Color::Green => "Green",
            Color::Red => "Red",
        }
    }

    /// Lowercase label for display ("Heavy green apple")
    pub fn label(&self) -> &str {
        match self {
            Color::Green => "green",
            Color::Red => "red",
        }
    }

    /// Parse a color from input text
    ///
    /// Returns `None` for any label outside the closed set.
    pub fn from_label(text: &str) -> Option<Color> {
        match text.trim().to_lowercase().as_str() {
            "green" => Some(Color::Green),
            "red" => Some(Color::Red),
            _ => None,
        }
    }
}

// ============================================================================
// APPLE
// ============================================================================

/// Apple - color plus weight in grams
///
/// Weight is unsigned, so the non-negativity invariant holds by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Apple {
    pub color: Color,
    pub weight: u32,
}

impl Apple {
    pub fn new(color: Color, weight: u32) -> Self {
        Apple { color, weight }
    }
}

// ============================================================================
// TRANSACTION
// ============================================================================

/// Transaction - one bank statement line
///
/// Amount is a fixed-point decimal; negative amounts are debits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub date: NaiveDate,
    pub amount: Decimal,
}

impl Transaction {
    pub fn new(date: NaiveDate, amount: Decimal) -> Self {
        Transaction { date, amount }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_from_label() {
        assert_eq!(Color::from_label("green"), Some(Color::Green));
        assert_eq!(Color::from_label("RED"), Some(Color::Red));
        assert_eq!(Color::from_label("  Green "), Some(Color::Green));
    }

    #[test]
    fn test_color_rejects_unknown_label() {
        assert_eq!(Color::from_label("blue"), None);
        assert_eq!(Color::from_label(""), None);
    }

    #[test]
    fn test_color_display_accessors() {
        assert_eq!(Color::Green.name(), "Green");
        assert_eq!(Color::Red.label(), "red");
    }
}
