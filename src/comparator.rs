//! Runtime comparator objects and lexicographic combinators.
//!
//! A [`Comparator`] is a value that knows how to order `T`, so the ordering
//! can be picked at run time or composed field by field in a priority that
//! differs from declaration order.

use std::cmp::Ordering;

/// A value that compares two `T`s.
pub trait Comparator<T> {
    fn compare(&self, lhs: &T, rhs: &T) -> Ordering;

    /// Chain a tie-break comparator: `other` is consulted only when `self`
    /// reports equal.
    ///
    /// # Examples
    /// ```rust
    /// use std::cmp::Ordering;
    /// use threeway::comparator::{by_key, Comparator};
    ///
    /// let cmp = by_key(|s: &(&str, i32)| s.0.to_string())
    ///     .then(by_key(|s: &(&str, i32)| s.1));
    ///
    /// assert_eq!(cmp.compare(&("a", 2), &("a", 1)), Ordering::Greater);
    /// assert_eq!(cmp.compare(&("a", 2), &("b", 1)), Ordering::Less);
    /// ```
    fn then<C>(self, other: C) -> Then<Self, C>
    where
        Self: Sized,
        C: Comparator<T>,
    {
        Then {
            first: self,
            second: other,
        }
    }

    /// Reverse the order.
    fn reversed(self) -> Reversed<Self>
    where
        Self: Sized,
    {
        Reversed(self)
    }
}

/// Delegates to the type's own [`Ord`].
#[derive(Debug, Default, Clone, Copy)]
pub struct Natural;

impl<T: Ord> Comparator<T> for Natural {
    fn compare(&self, lhs: &T, rhs: &T) -> Ordering {
        lhs.cmp(rhs)
    }
}

/// See [`Comparator::reversed`].
#[derive(Debug, Default, Clone, Copy)]
pub struct Reversed<C>(C);

impl<T, C: Comparator<T>> Comparator<T> for Reversed<C> {
    fn compare(&self, lhs: &T, rhs: &T) -> Ordering {
        self.0.compare(lhs, rhs).reverse()
    }
}

/// See [`Comparator::then`]. First non-equal result wins.
#[derive(Debug, Default, Clone, Copy)]
pub struct Then<A, B> {
    first: A,
    second: B,
}

impl<T, A, B> Comparator<T> for Then<A, B>
where
    A: Comparator<T>,
    B: Comparator<T>,
{
    fn compare(&self, lhs: &T, rhs: &T) -> Ordering {
        match self.first.compare(lhs, rhs) {
            Ordering::Equal => self.second.compare(lhs, rhs),
            ord => ord,
        }
    }
}

/// Compare by a projected key.
///
/// # Examples
/// ```rust
/// use std::cmp::Ordering;
/// use threeway::comparator::{by_key, Comparator};
///
/// let by_len = by_key(|s: &&str| s.len());
/// assert_eq!(by_len.compare(&"hi", &"hello"), Ordering::Less);
/// ```
pub fn by_key<T, K, F>(key: F) -> ByKey<F>
where
    K: Ord,
    F: Fn(&T) -> K,
{
    ByKey(key)
}

/// See [`by_key`].
#[derive(Debug, Clone, Copy)]
pub struct ByKey<F>(F);

impl<T, K, F> Comparator<T> for ByKey<F>
where
    K: Ord,
    F: Fn(&T) -> K,
{
    fn compare(&self, lhs: &T, rhs: &T) -> Ordering {
        (self.0)(lhs).cmp(&(self.0)(rhs))
    }
}

/// Sort a vec with a comparator and hand it back.
///
/// # Examples
/// ```rust
/// use threeway::comparator::{sorted_by, Natural, Comparator};
///
/// let v = sorted_by(vec![3, 1, 2], &<Natural as Comparator<i32>>::reversed(Natural));
/// assert_eq!(v, vec![3, 2, 1]);
/// ```
pub fn sorted_by<T, C: Comparator<T>>(mut items: Vec<T>, comparator: &C) -> Vec<T> {
    items.sort_by(|a, b| comparator.compare(a, b));
    items
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_natural_matches_ord() {
        assert_eq!(Natural.compare(&1, &2), Ordering::Less);
        assert_eq!(Natural.compare(&2, &2), Ordering::Equal);
        assert_eq!(Natural.compare(&3, &2), Ordering::Greater);
    }

    #[test]
    fn test_reversed() {
        let cmp = <Natural as Comparator<i32>>::reversed(Natural);
        assert_eq!(cmp.compare(&1, &2), Ordering::Greater);
        assert_eq!(cmp.compare(&2, &2), Ordering::Equal);
    }

    #[test]
    fn test_double_reverse_is_identity() {
        let cmp = <Reversed<Natural> as Comparator<i32>>::reversed(
            <Natural as Comparator<i32>>::reversed(Natural),
        );
        for (a, b) in [(1, 2), (2, 2), (3, 2)] {
            assert_eq!(cmp.compare(&a, &b), Natural.compare(&a, &b));
        }
    }

    #[test]
    fn test_then_breaks_ties_only() {
        // first field descending, second ascending
        let cmp = by_key(|p: &(i32, i32)| p.0)
            .reversed()
            .then(by_key(|p: &(i32, i32)| p.1));

        assert_eq!(cmp.compare(&(2, 9), &(1, 0)), Ordering::Less);
        assert_eq!(cmp.compare(&(1, 1), &(1, 2)), Ordering::Less);
        assert_eq!(cmp.compare(&(1, 2), &(1, 2)), Ordering::Equal);
    }

    #[test]
    fn test_higher_priority_field_decides() {
        // second element outranks first
        let cmp = by_key(|p: &(i32, i32)| p.1).then(by_key(|p: &(i32, i32)| p.0));

        // lower second element wins even though first implies the opposite
        assert_eq!(cmp.compare(&(9, 1), &(0, 2)), Ordering::Less);
    }

    #[test]
    fn test_sorted_by() {
        let v = sorted_by(vec![(1, 'b'), (2, 'a'), (1, 'a')], &by_key(|p: &(i32, char)| *p));
        assert_eq!(v, vec![(1, 'a'), (1, 'b'), (2, 'a')]);
    }
}
