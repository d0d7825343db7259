// Predicates - named, swappable boolean tests over a single record
// Strategy pattern: one unit struct per strategy, plus combinators

use crate::record::{Apple, Color};

// ============================================================================
// PREDICATE TRAIT
// ============================================================================

/// Predicate - pure boolean test over one record
///
/// Total over any well-formed record of the expected kind; never fails,
/// holds no cross-record state.
pub trait Predicate<T> {
    fn test(&self, record: &T) -> bool;
}

// Closures are predicates too, so callers can pass ad-hoc tests inline
// instead of declaring a strategy struct for every one-off filter.
impl<T, F> Predicate<T> for F
where
    F: Fn(&T) -> bool,
{
    fn test(&self, record: &T) -> bool {
        self(record)
    }
}

// ============================================================================
// NAMED STRATEGIES
// ============================================================================

/// Matches apples of one color
pub struct ColorIs(pub Color);

impl Predicate<Apple> for ColorIs {
    fn test(&self, apple: &Apple) -> bool {
        apple.color == self.0
    }
}

/// Matches apples strictly heavier than the threshold
///
/// Strict `>`: an apple exactly at the threshold does not match.
pub struct HeavierThan(pub u32);

impl Predicate<Apple> for HeavierThan {
    fn test(&self, apple: &Apple) -> bool {
        apple.weight > self.0
    }
}

// ============================================================================
// COMBINATORS
// ============================================================================

/// True iff both predicates are true ("red and heavy")
pub struct And<P, Q>(pub P, pub Q);

impl<T, P, Q> Predicate<T> for And<P, Q>
where
    P: Predicate<T>,
    Q: Predicate<T>,
{
    fn test(&self, record: &T) -> bool {
        self.0.test(record) && self.1.test(record)
    }
}

/// True iff either predicate is true
pub struct Or<P, Q>(pub P, pub Q);

impl<T, P, Q> Predicate<T> for Or<P, Q>
where
    P: Predicate<T>,
    Q: Predicate<T>,
{
    fn test(&self, record: &T) -> bool {
        self.0.test(record) || self.1.test(record)
    }
}

/// Inverts a predicate
pub struct Not<P>(pub P);

impl<T, P> Predicate<T> for Not<P>
where
    P: Predicate<T>,
{
    fn test(&self, record: &T) -> bool {
        !self.0.test(record)
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::HEAVY_WEIGHT_THRESHOLD;

    #[test]
    fn test_color_predicate() {
        let green = ColorIs(Color::Green);

        assert!(green.test(&Apple::new(Color::Green, 80)));
        assert!(!green.test(&Apple::new(Color::Red, 80)));
    }

    #[test]
    fn test_heavier_than_boundary_is_strict() {
        let heavy = HeavierThan(HEAVY_WEIGHT_THRESHOLD);

        // Exactly at the threshold is not heavy
        assert!(!heavy.test(&Apple::new(Color::Red, 150)));
        assert!(heavy.test(&Apple::new(Color::Red, 151)));
        assert!(!heavy.test(&Apple::new(Color::Red, 0)));
    }

    #[test]
    fn test_red_and_heavy() {
        let red_and_heavy = And(ColorIs(Color::Red), HeavierThan(150));

        assert!(red_and_heavy.test(&Apple::new(Color::Red, 200)));
        assert!(!red_and_heavy.test(&Apple::new(Color::Green, 200)));
        assert!(!red_and_heavy.test(&Apple::new(Color::Red, 150)));
    }

    #[test]
    fn test_or_and_not() {
        let green_or_heavy = Or(ColorIs(Color::Green), HeavierThan(150));
        assert!(green_or_heavy.test(&Apple::new(Color::Green, 10)));
        assert!(green_or_heavy.test(&Apple::new(Color::Red, 200)));
        assert!(!green_or_heavy.test(&Apple::new(Color::Red, 100)));

        let not_green = Not(ColorIs(Color::Green));
        assert!(not_green.test(&Apple::new(Color::Red, 10)));
        assert!(!not_green.test(&Apple::new(Color::Green, 10)));
    }

    #[test]
    fn test_closure_predicate() {
        let light = |apple: &Apple| apple.weight < 150;

        assert!(light.test(&Apple::new(Color::Green, 100)));
        assert!(!light.test(&Apple::new(Color::Green, 150)));
    }
}
