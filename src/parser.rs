// Line Parsers - one delimited line of text in, one typed record out
// Strategy trait plus one concrete parser per record kind

use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::record::{Apple, Color, Transaction};

/// Field delimiter shared by both input formats
pub const DELIMITER: char = ',';

/// Date pattern for statement lines (`dd-mm-yyyy`)
pub const DATE_FORMAT: &str = "%d-%m-%Y";

// ============================================================================
// PARSE ERRORS
// ============================================================================

/// ParseError - a line did not produce a valid record
///
/// Raised per line and never recovered internally; the caller decides
/// whether to abort the batch or collect-and-skip. A malformed line must
/// never yield a default record, since that would corrupt aggregation
/// results undetectably.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseError {
    /// Wrong field count, bad date, or bad number
    MalformedRecord {
        /// The offending input line, verbatim
        line: String,
        /// 1-indexed line number within the batch
        line_number: usize,
        /// 0-indexed field the failure was detected at
        field: usize,
        message: String,
    },

    /// Discriminator value outside the closed enumeration
    UnsupportedLabel {
        label: String,
        line_number: usize,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::MalformedRecord {
                line,
                line_number,
                field,
                message,
            } => {
                write!(
                    f,
                    "line {}, field {}: {} (input: {:?})",
                    line_number, field, message, line
                )
            }
            ParseError::UnsupportedLabel { label, line_number } => {
                write!(f, "line {}: unsupported label {:?}", line_number, label)
            }
        }
    }
}

impl std::error::Error for ParseError {}

fn malformed(line: &str, line_number: usize, field: usize, message: String) -> ParseError {
    ParseError::MalformedRecord {
        line: line.to_string(),
        line_number,
        field,
        message,
    }
}

// ============================================================================
// LINE PARSER TRAIT
// ============================================================================

/// LineParser - core parsing strategy
///
/// Pure: no side effects beyond producing the record or the error.
/// File handling and batch policy live with the caller.
pub trait LineParser {
    type Record;

    /// Parse one delimited line into a typed record
    ///
    /// `line_number` is 1-indexed provenance for error reporting only.
    fn parse_line(&self, line: &str, line_number: usize) -> Result<Self::Record, ParseError>;
}

/// Split a line on the delimiter and enforce the schema's field count
fn split_fields<'a>(
    line: &'a str,
    line_number: usize,
    expected: usize,
) -> Result<Vec<&'a str>, ParseError> {
    let fields: Vec<&str> = line.split(DELIMITER).collect();
    if fields.len() != expected {
        return Err(malformed(
            line,
            line_number,
            fields.len().min(expected),
            format!("expected {} fields, found {}", expected, fields.len()),
        ));
    }
    Ok(fields)
}

// ============================================================================
// TRANSACTION LINE PARSER
// ============================================================================

/// Parses statement lines of the form `dd-mm-yyyy,amount`
pub struct TransactionLineParser;

impl TransactionLineParser {
    pub fn new() -> Self {
        TransactionLineParser
    }
}

impl Default for TransactionLineParser {
    fn default() -> Self {
        Self::new()
    }
}

impl LineParser for TransactionLineParser {
    type Record = Transaction;

    fn parse_line(&self, line: &str, line_number: usize) -> Result<Transaction, ParseError> {
        let fields = split_fields(line, line_number, 2)?;

        let date = NaiveDate::parse_from_str(fields[0].trim(), DATE_FORMAT).map_err(|e| {
            malformed(
                line,
                line_number,
                0,
                format!("invalid date (expected dd-mm-yyyy): {}", e),
            )
        })?;

        let amount = Decimal::from_str(fields[1].trim())
            .map_err(|e| malformed(line, line_number, 1, format!("invalid amount: {}", e)))?;

        Ok(Transaction::new(date, amount))
    }
}

// ============================================================================
// APPLE LINE PARSER
// ============================================================================

/// Parses apple lines of the form `color,weight`
pub struct AppleLineParser;

impl AppleLineParser {
    pub fn new() -> Self {
        AppleLineParser
    }
}

impl Default for AppleLineParser {
    fn default() -> Self {
        Self::new()
    }
}

impl LineParser for AppleLineParser {
    type Record = Apple;

    fn parse_line(&self, line: &str, line_number: usize) -> Result<Apple, ParseError> {
        let fields = split_fields(line, line_number, 2)?;

        let color = Color::from_label(fields[0]).ok_or_else(|| ParseError::UnsupportedLabel {
            label: fields[0].trim().to_string(),
            line_number,
        })?;

        let weight: u32 = fields[1]
            .trim()
            .parse()
            .map_err(|e| malformed(line, line_number, 1, format!("invalid weight: {}", e)))?;

        Ok(Apple::new(color, weight))
    }
}

// ============================================================================
// BATCH HELPER
// ============================================================================

/// Parse a batch of lines, one result per line
///
/// Errors stay record-level so the caller can pick its policy: abort the
/// whole batch on the first `Err`, or collect the `Ok`s and skip.
pub fn parse_lines<'a, P, I>(parser: &P, lines: I) -> Vec<Result<P::Record, ParseError>>
where
    P: LineParser,
    I: IntoIterator<Item = &'a str>,
{
    lines
        .into_iter()
        .enumerate()
        .map(|(index, line)| parser.parse_line(line, index + 1))
        .collect()
}

// ============================================================================
// TESTS
// ============================================================================
