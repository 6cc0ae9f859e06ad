use std::cmp::Ordering;

/// Minimal comparison surface: a type that only knows `<` and `==`.
///
/// Types written before three-way comparison often define just these two
/// operations. [`weak_order_fallback`] builds a full [`Ordering`] out of them.
pub trait LtEq {
    /// Strictly-less test.
    fn lt(&self, other: &Self) -> bool;

    /// Equivalence test. May hold for values that are not identical.
    fn eq(&self, other: &Self) -> bool;
}

/// Synthesize an [`Ordering`] from `<` and `==` alone.
///
/// Assumes the two operations describe a total order: values that are neither
/// equal nor less are taken to be greater. Only `lt` and `eq` are ever called.
///
/// # Examples
/// ```rust
/// use std::cmp::Ordering;
/// use threeway::{weak_order_fallback, LtEq};
///
/// struct Celsius(f32);
///
/// impl LtEq for Celsius {
///     fn lt(&self, other: &Self) -> bool {
///         self.0 < other.0
///     }
///     fn eq(&self, other: &Self) -> bool {
///         self.0 == other.0
///     }
/// }
///
/// let freezing = Celsius(0.0);
/// let boiling = Celsius(100.0);
/// assert_eq!(weak_order_fallback(&freezing, &boiling), Ordering::Less);
/// ```
pub fn weak_order_fallback<T: LtEq>(lhs: &T, rhs: &T) -> Ordering {
    if lhs.eq(rhs) {
        Ordering::Equal
    } else if lhs.lt(rhs) {
        Ordering::Less
    } else {
        Ordering::Greater
    }
}

/// The six relational outcomes derived from one comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Relations {
    pub eq: bool,
    pub ne: bool,
    pub lt: bool,
    pub gt: bool,
    pub le: bool,
    pub ge: bool,
}

/// Derive all six relational outcomes for a type that only defines `<` and
/// `==`, the way defaulted relational operators would.
///
/// # Examples
/// ```rust
/// use threeway::{relations, Rational};
///
/// let rel = relations(&Rational::new(1, 2), &Rational::new(3, 4));
/// assert!(rel.lt && rel.le && rel.ne);
/// assert!(!rel.eq && !rel.gt && !rel.ge);
/// ```
pub fn relations<T: LtEq>(lhs: &T, rhs: &T) -> Relations {
    let ord = weak_order_fallback(lhs, rhs);
    Relations {
        eq: ord.is_eq(),
        ne: ord.is_ne(),
        lt: ord.is_lt(),
        gt: ord.is_gt(),
        le: ord.is_le(),
        ge: ord.is_ge(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    // only < and ==, no PartialOrd
    struct Probe<'a> {
        value: i32,
        lt_calls: &'a Cell<usize>,
        eq_calls: &'a Cell<usize>,
    }

    impl LtEq for Probe<'_> {
        fn lt(&self, other: &Self) -> bool {
            self.lt_calls.set(self.lt_calls.get() + 1);
            self.value < other.value
        }

        fn eq(&self, other: &Self) -> bool {
            self.eq_calls.set(self.eq_calls.get() + 1);
            self.value == other.value
        }
    }

    fn probe<'a>(value: i32, lt: &'a Cell<usize>, eq: &'a Cell<usize>) -> Probe<'a> {
        Probe {
            value,
            lt_calls: lt,
            eq_calls: eq,
        }
    }

    #[test]
    fn test_fallback_orders_correctly() {
        let lt = Cell::new(0);
        let eq = Cell::new(0);

        let a = probe(1, &lt, &eq);
        let b = probe(2, &lt, &eq);
        let c = probe(2, &lt, &eq);

        assert_eq!(weak_order_fallback(&a, &b), Ordering::Less);
        assert_eq!(weak_order_fallback(&b, &a), Ordering::Greater);
        assert_eq!(weak_order_fallback(&b, &c), Ordering::Equal);
    }

    #[test]
    fn test_fallback_uses_only_lt_and_eq() {
        let lt = Cell::new(0);
        let eq = Cell::new(0);

        let a = probe(1, &lt, &eq);
        let b = probe(2, &lt, &eq);
        weak_order_fallback(&a, &b);

        // equal check first, then at most one < per comparison
        assert_eq!(eq.get(), 1);
        assert_eq!(lt.get(), 1);
    }

    #[test]
    fn test_relations_for_less() {
        let lt = Cell::new(0);
        let eq = Cell::new(0);

        let rel = relations(&probe(1, &lt, &eq), &probe(2, &lt, &eq));
        assert_eq!(
            rel,
            Relations {
                eq: false,
                ne: true,
                lt: true,
                gt: false,
                le: true,
                ge: false,
            }
        );
    }

    #[test]
    fn test_relations_for_equal() {
        let lt = Cell::new(0);
        let eq = Cell::new(0);

        let rel = relations(&probe(7, &lt, &eq), &probe(7, &lt, &eq));
        assert!(rel.eq && rel.le && rel.ge);
        assert!(!rel.ne && !rel.lt && !rel.gt);
    }
}
