//! All six relational predicates over adjacent pairs of rationals.
use std::cmp::Ordering;

use threeway::Rational;

fn main() {
    println!("{}", "-".repeat(80));

    let values = vec![
        Rational::new(1, 2),
        Rational::new(3, 4),
        Rational::new(5, 8),
        Rational::new(4, 3),
        Rational::new(8, 5),
        Rational::new(4, 8),
        Rational::new(8, 4),
        Rational::new(12, 6),
        Rational::new(6, 12),
        Rational::new(9, 12),
        Rational::new(15, 24),
        Rational::new(15, 24),
        Rational::new(125, 1000),
        Rational::new(5, 10),
        Rational::new(33, 100),
    ];

    for r in &values {
        println!("{}", r.verbose());
    }
    println!();

    let dots = ".".repeat(80);
    for pair in values.windows(2) {
        let (prev, next) = (pair[0], pair[1]);
        println!("{dots}");
        println!("{}", prev.verbose());
        println!("{}", next.verbose());

        let ord = prev.cmp(&next);
        println!("eq   : {}", ord.is_eq());
        println!("ne   : {}", ord.is_ne());
        println!("lt   : {}", ord.is_lt());
        println!("gt   : {}", ord.is_gt());
        println!("le   : {}", ord.is_le());
        println!("ge   : {}", ord.is_ge());

        match ord {
            Ordering::Equal => println!("{prev} eq {next}"),
            Ordering::Less => println!("{prev} lt {next}"),
            Ordering::Greater => println!("{prev} gt {next}"),
        }
        println!();
    }

    // 12/6 equals 8/4, and 15/24 appears twice in a row
    assert_eq!(values[6].cmp(&values[7]), Ordering::Equal);
    assert!(values.windows(2).any(|w| w[0] == w[1]));
}
