// Demo harness - file I/O and console output live here, not in the core
// `summarize <statement.csv> [--json]` sums a bank statement;
// no arguments runs the apple filtering demo

use std::env;
use std::fs::File;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::Month;
use csv::ReaderBuilder;
use rust_decimal::Decimal;
use serde::Serialize;

use statement_analyzer::{
    filter, report, summarize_by_month, total, total_for_month, And, Apple, Color, ColorAndWeight,
    ColorIs, HeavierThan, LineParser, Transaction, TransactionLineParser, WeightClass, WeightOnly,
};

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    if args.len() > 1 && args[1] == "summarize" {
        let path = args
            .get(2)
            .context("usage: statement-analyzer summarize <statement.csv> [--json]")?;
        let as_json = args.iter().any(|arg| arg == "--json");

        run_summarize(Path::new(path), as_json)?;
    } else {
        run_apple_demo();
    }

    Ok(())
}

// ============================================================================
// STATEMENT SUMMARY MODE
// ============================================================================

#[derive(Debug, Serialize)]
struct StatementSummary {
    transaction_count: usize,
    total: Decimal,
    months: Vec<MonthTotal>,
}

#[derive(Debug, Serialize)]
struct MonthTotal {
    month: String,
    total: Decimal,
}

fn run_summarize(path: &Path, as_json: bool) -> Result<()> {
    let transactions = load_statement(path)?;

    let summary = StatementSummary {
        transaction_count: transactions.len(),
        total: total(&transactions),
        months: summarize_by_month(&transactions)
            .into_iter()
            .map(|(month, subtotal)| MonthTotal {
                month: month.name().to_string(),
                total: subtotal,
            })
            .collect(),
    };

    if as_json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    println!("Loaded {} transactions from {}", summary.transaction_count, path.display());
    println!("The total for all transactions is {}", summary.total);

    if !summary.months.is_empty() {
        println!();
        println!("By month:");
        for month in &summary.months {
            println!("  {:<10} {}", month.month, month.total);
        }
    }

    // The January figure the original one-off summation hard-coded
    let january = total_for_month(&transactions, Month::January);
    println!();
    println!("January total: {}", january);

    Ok(())
}

/// Load a headerless `dd-mm-yyyy,amount` statement file
///
/// Batch policy for the CLI: abort on the first malformed line. Library
/// callers wanting collect-and-skip use `parse_lines` directly.
fn load_statement(path: &Path) -> Result<Vec<Transaction>> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open statement: {}", path.display()))?;

    let mut reader = ReaderBuilder::new().has_headers(false).from_reader(file);
    let parser = TransactionLineParser::new();
    let mut transactions = Vec::new();

    for (index, result) in reader.records().enumerate() {
        let line_number = index + 1;
        let record = result
            .with_context(|| format!("Failed to read CSV line {}", line_number))?;

        let line = record.iter().collect::<Vec<_>>().join(",");
        let tx = parser
            .parse_line(&line, line_number)
            .with_context(|| format!("Malformed statement line {}", line_number))?;

        transactions.push(tx);
    }

    Ok(transactions)
}

// ============================================================================
// APPLE DEMO MODE
// ============================================================================

fn run_apple_demo() {
    // Even index: green, weight i*25; odd: red, weight i*15
    let mut orchard = Vec::new();
    for i in 0..20u32 {
        if i % 2 == 0 {
            orchard.push(Apple::new(Color::Green, i * 25));
        } else {
            orchard.push(Apple::new(Color::Red, i * 15));
        }
    }

    let green = filter(&orchard, &ColorIs(Color::Green));
    println!("Green apples ({}):", green.len());
    print!("{}", report(&green, &ColorAndWeight));

    let heavy = filter(&orchard, &HeavierThan(150));
    println!("\nHeavy apples ({}):", heavy.len());
    print!("{}", report(&heavy, &WeightOnly));

    let red_and_heavy = filter(&orchard, &And(ColorIs(Color::Red), HeavierThan(150)));
    println!("\nRed and heavy apples ({}):", red_and_heavy.len());
    print!("{}", report(&red_and_heavy, &WeightClass));

    // Ad-hoc predicates compose without a named strategy
    let light = filter(&orchard, &|apple: &Apple| apple.weight < 150);
    println!("\nLight apples ({}):", light.len());
    print!("{}", report(&light, &WeightClass));
}
