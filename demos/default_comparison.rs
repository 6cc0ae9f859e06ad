//! Derived declaration-order comparison, custom field priority, and the
//! signed/unsigned comparison trap.
use std::cmp::Ordering;
use std::collections::BTreeSet;

use threeway::comparator::{by_key, sorted_by, Comparator};
use threeway::{mixed, Point, TaxRecord};

fn main() {
    let dots = ".".repeat(80);

    println!("{dots}");
    {
        let p1 = Point { x: 1, y: 1 };
        let p2 = Point { x: 1, y: 2 };

        // derived Ord makes the point usable in an ordered set
        let mut set = BTreeSet::new();
        set.insert(p1);

        println!(
            "{} {} {} {} {} {}",
            p1 == p2,
            p1 != p2,
            p1 < p2,
            p1 <= p2,
            p1 > p2,
            p1 >= p2
        );
        assert!(p1 < p2);
    }

    println!("{dots}");
    {
        let p1 = Point { x: 3, y: 5 };
        let p2 = Point { x: 2, y: 5 };
        println!("{}", p1 != p2);
        println!("{}", p1 == p1);
        assert!(p1 != p2);
    }

    println!("{dots}");
    {
        // a negative value cast to unsigned wraps to the top of the range
        assert_eq!(-1i32 as u32, u32::MAX);
        println!("-1i32 as u32 == u32::MAX      : {}", -1i32 as u32 == u32::MAX);
        println!("-1i32 as u32 == 0xFFFF_FFFF   : {}", -1i32 as u32 == 0xFFFF_FFFF);

        // so the cast comparison says -1 > 1
        println!("(-1i32 as u32) > 1u32         : {}", (-1i32 as u32) > 1u32);
        assert!((-1i32 as u32) > 1u32);

        // value comparison disagrees
        assert_eq!(mixed::cmp(-1, 1), Ordering::Less);
        assert!(mixed::lt(-1, 1));
        assert!(mixed::le(-1, 1));
        assert!(!mixed::gt(-1, 1));
        assert!(!mixed::ge(-1, 1));
        println!("mixed::lt(-1, 1)              : {}", mixed::lt(-1, 1));
    }

    println!("{dots}");
    {
        println!("in_range::<usize>(-1) : {}", mixed::in_range::<usize>(-1));
        println!("in_range::<usize>(42) : {}", mixed::in_range::<usize>(42));
        assert!(!mixed::in_range::<usize>(-1));
        assert!(mixed::in_range::<usize>(42));
    }

    println!("{dots}");
    {
        let to1 = TaxRecord::new("a", "b", "c", "d");
        let to2 = TaxRecord::new("a", "b", "d", "c");

        let mut set = BTreeSet::new();
        set.insert(to1.clone());

        // zip ties, so the last name decides
        assert!(to2 <= to1);
        println!("success!");

        for rhs in [&to2, &TaxRecord::new("c", "b", "c", "d")] {
            println!(
                "lhs: {} {} {} {}",
                to1.zip, to1.tax_id, to1.last_name, to1.first_name
            );
            println!(
                "rhs: {} {} {} {}",
                rhs.zip, rhs.tax_id, rhs.last_name, rhs.first_name
            );
            println!("lhs == rhs: {}", to1 == *rhs);
            println!("lhs != rhs: {}", to1 != *rhs);
            println!("lhs <  rhs: {}", to1 < *rhs);
            println!("lhs <= rhs: {}", to1 <= *rhs);
            println!("lhs >  rhs: {}", to1 > *rhs);
            println!("lhs >= rhs: {}", to1 >= *rhs);
        }
    }

    println!("{dots}");
    {
        // the same priority order written as a runtime comparator
        let by_priority = by_key(|r: &TaxRecord| r.zip.clone())
            .then(by_key(|r: &TaxRecord| r.last_name.clone()))
            .then(by_key(|r: &TaxRecord| r.first_name.clone()))
            .then(by_key(|r: &TaxRecord| r.tax_id.clone()));

        let records = vec![
            TaxRecord::new("a", "b", "d", "c"),
            TaxRecord::new("c", "b", "c", "d"),
            TaxRecord::new("a", "b", "c", "d"),
        ];

        for r in sorted_by(records, &by_priority) {
            println!("{} {} {} {}", r.zip, r.last_name, r.first_name, r.tax_id);
            assert_eq!(
                by_priority.compare(&r, &r),
                Ordering::Equal
            );
        }
    }
}
