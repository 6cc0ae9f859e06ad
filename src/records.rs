use std::cmp::Ordering;

/// A 2d point with derived, declaration order comparison.
///
/// The derive compares `x` first, then `y`, component wise lexicographic
/// order.
///
/// # Examples
/// ```rust
/// use threeway::Point;
///
/// assert!(Point { x: 1, y: 1 } < Point { x: 1, y: 2 });
/// assert!(Point { x: 3, y: 5 } != Point { x: 2, y: 5 });
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Point {
    pub x: i64,
    pub y: i64,
}

/// A record whose comparison overrides declaration order.
///
/// `zip` is the base key and is consulted first. The remaining fields are
/// compared by last name, then first name, then tax id, even though they are
/// declared in the opposite order. Each field breaks ties for the one before
/// it, so a record with a smaller last name sorts first no matter what the
/// lower priority fields say.
///
/// # Examples
/// ```rust
/// use threeway::TaxRecord;
///
/// let a = TaxRecord::new("90210", "zzz", "Zed", "Adams");
/// let b = TaxRecord::new("90210", "aaa", "Ann", "Brown");
///
/// // last name decides, despite tax id and first name implying the opposite
/// assert!(a < b);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaxRecord {
    pub zip: String,
    pub tax_id: String,
    pub first_name: String,
    pub last_name: String,
}

impl TaxRecord {
    pub fn new(
        zip: impl Into<String>,
        tax_id: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Self {
        Self {
            zip: zip.into(),
            tax_id: tax_id.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }
}

impl Ord for TaxRecord {
    fn cmp(&self, other: &Self) -> Ordering {
        self.zip
            .cmp(&other.zip)
            .then_with(|| self.last_name.cmp(&other.last_name))
            .then_with(|| self.first_name.cmp(&other.first_name))
            .then_with(|| self.tax_id.cmp(&other.tax_id))
    }
}

impl PartialOrd for TaxRecord {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
