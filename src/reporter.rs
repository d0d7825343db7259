// Reporter - renders a sequence of records into one multi-line string

use crate::formatter::Formatter;

/// Render every record with the formatter, one line per record in input
/// order, with a line break after each line including the last
///
/// Empty input yields an empty string.
pub fn report<T, F>(records: &[T], formatter: &F) -> String
where
    F: Formatter<T>,
{
    let mut output = String::new();

    for record in records {
        output.push_str(&formatter.render(record));
        output.push('\n');
    }

    output
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formatter::{ColorAndWeight, WeightClass};
    use crate::record::{Apple, Color};

    #[test]
    fn test_empty_report_is_empty_string() {
        let apples: Vec<Apple> = Vec::new();

        assert_eq!(report(&apples, &WeightClass), "");
    }

    #[test]
    fn test_report_appends_line_break_per_record() {
        let apples = vec![
            Apple::new(Color::Green, 0),
            Apple::new(Color::Red, 200),
        ];

        assert_eq!(
            report(&apples, &WeightClass),
            "Light green apple\nHeavy red apple\n"
        );
    }

    #[test]
    fn test_report_preserves_input_order() {
        let apples = vec![
            Apple::new(Color::Red, 45),
            Apple::new(Color::Green, 100),
        ];

        assert_eq!(
            report(&apples, &ColorAndWeight),
            "Red apple with 45 weight\nGreen apple with 100 weight\n"
        );
    }
}
