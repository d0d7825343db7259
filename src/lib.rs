// Statement Analyzer - Core Library
// Record parsing, filtering, aggregation and reporting over delimited text

pub mod record;
pub mod parser;
pub mod predicate;
pub mod formatter;
pub mod selector;
pub mod aggregator;
pub mod reporter;

// Re-export commonly used types
pub use record::{Apple, Color, Transaction, HEAVY_WEIGHT_THRESHOLD};
pub use parser::{
    AppleLineParser, LineParser, ParseError, TransactionLineParser,
    parse_lines, DATE_FORMAT, DELIMITER,
};
pub use predicate::{And, ColorIs, HeavierThan, Not, Or, Predicate};
pub use formatter::{ColorAndWeight, Formatter, WeightClass, WeightOnly};
pub use selector::filter;
pub use aggregator::{summarize_by_month, total, total_for_month};
pub use reporter::report;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
