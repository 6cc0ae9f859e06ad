use std::cmp::Ordering;
use std::fmt;

/// Result of a comparison that may leave two values unordered.
///
/// Same as [`Ordering`] plus a fourth `Unordered` state for pairs a partial
/// order cannot relate, e.g. a float against NaN.
///
/// # Examples
/// ```rust
/// use threeway::PartialOrdering;
///
/// let ord = PartialOrdering::from_partial(1.0f64.partial_cmp(&f64::NAN));
/// assert_eq!(ord, PartialOrdering::Unordered);
/// assert!(ord.is_ne());
/// assert!(!ord.is_le());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PartialOrdering {
    Less,
    Equal,
    Greater,
    Unordered,
}

impl PartialOrdering {
    /// Lift an `Option<Ordering>` as returned by [`PartialOrd::partial_cmp`],
    /// mapping `None` to `Unordered`.
    ///
    /// # Examples
    /// ```rust
    /// use std::cmp::Ordering;
    /// use threeway::PartialOrdering;
    ///
    /// assert_eq!(
    ///     PartialOrdering::from_partial(Some(Ordering::Less)),
    ///     PartialOrdering::Less
    /// );
    /// assert_eq!(
    ///     PartialOrdering::from_partial(None),
    ///     PartialOrdering::Unordered
    /// );
    /// ```
    pub fn from_partial(ord: Option<Ordering>) -> Self {
        match ord {
            Some(Ordering::Less) => Self::Less,
            Some(Ordering::Equal) => Self::Equal,
            Some(Ordering::Greater) => Self::Greater,
            None => Self::Unordered,
        }
    }

    /// Returns the underlying [`Ordering`], or `None` for `Unordered`.
    pub fn ordering(self) -> Option<Ordering> {
        match self {
            Self::Less => Some(Ordering::Less),
            Self::Equal => Some(Ordering::Equal),
            Self::Greater => Some(Ordering::Greater),
            Self::Unordered => None,
        }
    }

    /// Returns true if the values compared equal.
    pub fn is_eq(self) -> bool {
        matches!(self, Self::Equal)
    }

    /// Returns true if the values compared unequal.
    ///
    /// Unordered values are not equal, so this holds for `Unordered` too.
    pub fn is_ne(self) -> bool {
        !matches!(self, Self::Equal)
    }

    /// Returns true if the left value compared strictly less.
    pub fn is_lt(self) -> bool {
        matches!(self, Self::Less)
    }

    /// Returns true if the left value compared strictly greater.
    pub fn is_gt(self) -> bool {
        matches!(self, Self::Greater)
    }

    /// Returns true if the left value compared less or equal.
    pub fn is_le(self) -> bool {
        matches!(self, Self::Less | Self::Equal)
    }

    /// Returns true if the left value compared greater or equal.
    pub fn is_ge(self) -> bool {
        matches!(self, Self::Greater | Self::Equal)
    }

    /// Reverses the ordering, leaving `Unordered` untouched.
    pub fn reverse(self) -> Self {
        match self {
            Self::Less => Self::Greater,
            Self::Greater => Self::Less,
            other => other,
        }
    }
}

impl From<Ordering> for PartialOrdering {
    fn from(ord: Ordering) -> Self {
        match ord {
            Ordering::Less => Self::Less,
            Ordering::Equal => Self::Equal,
            Ordering::Greater => Self::Greater,
        }
    }
}

impl fmt::Display for PartialOrdering {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Less => "less",
            Self::Equal => "equal",
            Self::Greater => "greater",
            Self::Unordered => "unordered",
        };
        f.write_str(name)
    }
}

/// Compare two values of a partially ordered type.
///
/// # Examples
/// ```rust
/// use threeway::{partial_compare, PartialOrdering};
///
/// assert_eq!(partial_compare(&1, &2), PartialOrdering::Less);
/// assert_eq!(partial_compare(&f64::NAN, &0.0), PartialOrdering::Unordered);
/// ```
pub fn partial_compare<T: PartialOrd>(lhs: &T, rhs: &T) -> PartialOrdering {
    PartialOrdering::from_partial(lhs.partial_cmp(rhs))
}

/// Strength of the order a type's comparison produces.
///
/// - `Strong`: equal values are substitutable (integers, strings)
/// - `Weak`: distinct values may compare equal (unreduced rationals)
/// - `Partial`: some pairs are unordered (floats and NaN)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Strong,
    Weak,
    Partial,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Strong => "strong ordering",
            Self::Weak => "weak ordering",
            Self::Partial => "partial ordering",
        };
        f.write_str(name)
    }
}

/// Type level classification of comparison strength.
///
/// # Examples
/// ```rust
/// use threeway::{Category, ComparisonCategory};
///
/// assert_eq!(<i32 as ComparisonCategory>::CATEGORY, Category::Strong);
/// assert_eq!(<f64 as ComparisonCategory>::CATEGORY, Category::Partial);
/// ```
pub trait ComparisonCategory {
    const CATEGORY: Category;
}

macro_rules! impl_category {
    ($category:expr => $($t:ty),* $(,)?) => {
        $(
            impl ComparisonCategory for $t {
                const CATEGORY: Category = $category;
            }
        )*
    };
}

impl_category!(Category::Strong =>
    u8, u16, u32, u64, u128, usize,
    i8, i16, i32, i64, i128, isize,
    bool, char, &str, String,
);

impl_category!(Category::Partial => f32, f64);
