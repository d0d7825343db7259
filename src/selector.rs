// Selector - order-preserving filtering over any record type

use crate::predicate::Predicate;

/// Select the records matching a predicate
///
/// Single pass, order-preserving, input untouched. Generic over the record
/// type, so the same filter serves apples, transactions, or anything else
/// a predicate exists for.
pub fn filter<T, P>(records: &[T], predicate: &P) -> Vec<T>
where
    T: Clone,
    P: Predicate<T>,
{
    let mut matches = Vec::new();

    for record in records {
        if predicate.test(record) {
            matches.push(record.clone());
        }
    }

    matches
}

// ============================================================================
// TESTS
// ============================================================================
