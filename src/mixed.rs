//! Sign aware comparison of signed and unsigned integers.
//!
//! Casting a negative signed value to an unsigned type wraps it to a huge
//! number (`-1i32 as u32 == u32::MAX`), so comparing through a cast orders
//! `-1` above `1`. The functions here compare by mathematical value instead:
//! every negative signed value is below every unsigned value.

use std::cmp::Ordering;

/// Compare a signed and an unsigned integer by value.
///
/// # Examples
/// ```rust
/// use std::cmp::Ordering;
/// use threeway::mixed;
///
/// // the cast comparison gets this wrong
/// assert!((-1i32 as u32) > 1u32);
/// // the value comparison does not
/// assert_eq!(mixed::cmp(-1, 1), Ordering::Less);
/// ```
pub fn cmp(signed: i64, unsigned: u64) -> Ordering {
    if signed < 0 {
        Ordering::Less
    } else {
        (signed as u64).cmp(&unsigned)
    }
}

pub fn lt(signed: i64, unsigned: u64) -> bool {
    cmp(signed, unsigned).is_lt()
}

pub fn le(signed: i64, unsigned: u64) -> bool {
    cmp(signed, unsigned).is_le()
}

pub fn gt(signed: i64, unsigned: u64) -> bool {
    cmp(signed, unsigned).is_gt()
}

pub fn ge(signed: i64, unsigned: u64) -> bool {
    cmp(signed, unsigned).is_ge()
}

/// Returns true if `value` is representable in `T`.
///
/// # Examples
/// ```rust
/// use threeway::mixed::in_range;
///
/// assert!(!in_range::<usize>(-1));
/// assert!(in_range::<usize>(42));
/// assert!(!in_range::<u8>(300));
/// ```
pub fn in_range<T: TryFrom<i64>>(value: i64) -> bool {
    T::try_from(value).is_ok()
}
