// Formatters - named, swappable renderers turning one record into a line
// Same strategy shape as the predicates, producing display strings

use crate::record::{Apple, HEAVY_WEIGHT_THRESHOLD};

// ============================================================================
// FORMATTER TRAIT
// ============================================================================

/// Formatter - pure rendering of one record to a display string
pub trait Formatter<T> {
    fn render(&self, record: &T) -> String;
}

impl<T, F> Formatter<T> for F
where
    F: Fn(&T) -> String,
{
    fn render(&self, record: &T) -> String {
        self(record)
    }
}

// ============================================================================
// NAMED STRATEGIES
// ============================================================================

/// Renders just the weight with a fixed label prefix
pub struct WeightOnly;

impl Formatter<Apple> for WeightOnly {
    fn render(&self, apple: &Apple) -> String {
        format!("Weight: {}", apple.weight)
    }
}

/// Renders color and weight in a fixed sentence template
pub struct ColorAndWeight;

impl Formatter<Apple> for ColorAndWeight {
    fn render(&self, apple: &Apple) -> String {
        format!("{} apple with {} weight", apple.color.name(), apple.weight)
    }
}

/// Two-axis classification: weight class against the fixed threshold
/// plus the color label ("Heavy green apple")
///
/// Strict `>`: a weight exactly at the threshold renders as "Light".
pub struct WeightClass;

impl Formatter<Apple> for WeightClass {
    fn render(&self, apple: &Apple) -> String {
        let class = if apple.weight > HEAVY_WEIGHT_THRESHOLD {
            "Heavy"
        } else {
            "Light"
        };

        format!("{} {} apple", class, apple.color.label())
    }
}

// ============================================================================
// TESTS
// ============================================================================
