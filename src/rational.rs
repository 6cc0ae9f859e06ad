use std::cmp::Ordering;
use std::error::Error;
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use crate::{Category, ComparisonCategory, LtEq};

/// A rational number `num/den` with a positive denominator.
///
/// Comparison uses cross multiplication: `a/b` against `c/d` compares the
/// integer products `a*d` and `c*b`, so no precision is lost to division.
/// The products are widened to `i128` and cannot overflow for any `i64`
/// inputs.
///
/// The resulting order is weak: values that are equivalent without being
/// identical compare equal, e.g. `1/2 == 4/8`. For that reason the type
/// deliberately does not implement `Hash`, a field-wise hash would disagree
/// with `Eq`.
///
/// # Examples
/// ```rust
/// use threeway::Rational;
///
/// let half = Rational::new(1, 2);
/// let four_eighths = Rational::new(4, 8);
///
/// assert_eq!(half, four_eighths);
/// assert!(Rational::new(1, 3) < half);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Rational {
    num: i64,
    den: i64,
}

impl Rational {
    /// Create a rational. A zero denominator is silently coerced to 1.
    ///
    /// The denominator is expected to be positive; callers passing a negative
    /// one break the ordering contract (checked in debug builds).
    ///
    /// # Examples
    /// ```rust
    /// use threeway::Rational;
    ///
    /// let r = Rational::new(3, 0);
    /// assert_eq!(r.denominator(), 1);
    /// ```
    pub fn new(num: i64, den: i64) -> Self {
        let den = if den == 0 { 1 } else { den };
        debug_assert!(den > 0, "denominator must be positive");
        Self { num, den }
    }

    pub fn numerator(&self) -> i64 {
        self.num
    }

    pub fn denominator(&self) -> i64 {
        self.den
    }

    /// Returns the same value with numerator and denominator divided by
    /// their greatest common divisor.
    ///
    /// # Examples
    /// ```rust
    /// use threeway::Rational;
    ///
    /// let r = Rational::new(15, 24).reduced();
    /// assert_eq!((r.numerator(), r.denominator()), (5, 8));
    /// ```
    pub fn reduced(self) -> Self {
        let g = gcd(self.num.unsigned_abs(), self.den.unsigned_abs());
        if g <= 1 {
            return self;
        }
        Self {
            num: self.num / g as i64,
            den: self.den / g as i64,
        }
    }

    /// Approximate value as a float. Only for display, never for ordering.
    pub fn as_f64(&self) -> f64 {
        self.num as f64 / self.den as f64
    }

    /// Display adapter showing raw and reduced forms plus gcd, lcm and the
    /// float approximation.
    ///
    /// # Examples
    /// ```rust
    /// use threeway::Rational;
    ///
    /// let line = Rational::new(4, 8).verbose().to_string();
    /// assert!(line.contains("1/2"));
    /// assert!(line.contains("gcd=4"));
    /// ```
    pub fn verbose(&self) -> Verbose {
        Verbose(*self)
    }

    fn cross(&self, other: &Self) -> (i128, i128) {
        (
            self.num as i128 * other.den as i128,
            other.num as i128 * self.den as i128,
        )
    }
}

impl PartialEq for Rational {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other).is_eq()
    }
}

impl Eq for Rational {}

impl PartialOrd for Rational {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Rational {
    fn cmp(&self, other: &Self) -> Ordering {
        let (lhs, rhs) = self.cross(other);
        lhs.cmp(&rhs)
    }
}

impl LtEq for Rational {
    fn lt(&self, other: &Self) -> bool {
        self.cmp(other).is_lt()
    }

    fn eq(&self, other: &Self) -> bool {
        self.cmp(other).is_eq()
    }
}

impl ComparisonCategory for Rational {
    const CATEGORY: Category = Category::Weak;
}

impl fmt::Display for Rational {
    /// Prints the reduced form, `4/8` displays as `1/2`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let r = self.reduced();
        write!(f, "{}/{}", r.num, r.den)
    }
}

/// See [`Rational::verbose`].
pub struct Verbose(Rational);

impl fmt::Display for Verbose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let raw = self.0;
        let r = raw.reduced();
        let g = gcd(raw.num.unsigned_abs(), raw.den.unsigned_abs());
        let l = lcm(raw.num.unsigned_abs(), raw.den.unsigned_abs());
        write!(
            f,
            "{:>5}/{:<5} - {:>5}/{:<5} [gcd={}, lcm={}, real={:.6}]",
            raw.num,
            raw.den,
            r.num,
            r.den,
            g,
            l,
            raw.as_f64()
        )
    }
}

/// Greatest common divisor, Euclid's algorithm. `gcd(0, n) == n`.
///
/// # Examples
/// ```rust
/// use threeway::gcd;
///
/// assert_eq!(gcd(15, 24), 3);
/// assert_eq!(gcd(0, 7), 7);
/// ```
pub fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// Least common multiple. Widened to `u128` since `lcm` of two `u64` values
/// can exceed `u64`. `lcm(0, n) == 0`.
pub fn lcm(a: u64, b: u64) -> u128 {
    if a == 0 || b == 0 {
        return 0;
    }
    (a / gcd(a, b)) as u128 * b as u128
}

/// Error parsing a [`Rational`] from a string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseRationalError {
    kind: ParseRationalErrorKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum ParseRationalErrorKind {
    Int(ParseIntError),
    NonPositiveDenominator,
}

impl fmt::Display for ParseRationalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ParseRationalErrorKind::Int(err) => write!(f, "invalid rational: {err}"),
            ParseRationalErrorKind::NonPositiveDenominator => {
                f.write_str("invalid rational: denominator must be positive")
            }
        }
    }
}

impl Error for ParseRationalError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match &self.kind {
            ParseRationalErrorKind::Int(err) => Some(err),
            ParseRationalErrorKind::NonPositiveDenominator => None,
        }
    }
}

impl From<ParseIntError> for ParseRationalError {
    fn from(err: ParseIntError) -> Self {
        Self {
            kind: ParseRationalErrorKind::Int(err),
        }
    }
}

impl FromStr for Rational {
    type Err = ParseRationalError;

    /// Parses `"n/d"`, or a bare `"n"` meaning `n/1`.
    ///
    /// # Examples
    /// ```rust
    /// use threeway::Rational;
    ///
    /// let r: Rational = "6/5".parse().unwrap();
    /// assert_eq!((r.numerator(), r.denominator()), (6, 5));
    ///
    /// let whole: Rational = "-3".parse().unwrap();
    /// assert_eq!((whole.numerator(), whole.denominator()), (-3, 1));
    ///
    /// assert!("1/0".parse::<Rational>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once('/') {
            Some((num, den)) => {
                let num = num.trim().parse::<i64>()?;
                let den = den.trim().parse::<i64>()?;
                if den <= 0 {
                    return Err(ParseRationalError {
                        kind: ParseRationalErrorKind::NonPositiveDenominator,
                    });
                }
                Ok(Self { num, den })
            }
            None => {
                let num = s.trim().parse::<i64>()?;
                Ok(Self { num, den: 1 })
            }
        }
    }
}
