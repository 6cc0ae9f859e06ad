//! One three-way comparison of two rationals via cross multiplication.
use std::cmp::Ordering;

use threeway::Rational;

fn verdict(ord: Ordering) -> &'static str {
    match ord {
        Ordering::Less => "less",
        Ordering::Equal => "equal",
        Ordering::Greater => "greater",
    }
}

fn main() {
    println!("{}", "-".repeat(80));

    let c = Rational::new(6, 5);
    let d = Rational::new(8, 7);

    println!(
        "{}/{} <=> {}/{} ? {}",
        c.numerator(),
        c.denominator(),
        d.numerator(),
        d.denominator(),
        verdict(c.cmp(&d))
    );

    // 6/5 = 42/35, 8/7 = 40/35
    assert_eq!(c.cmp(&d), Ordering::Greater);

    let half = Rational::new(1, 2);
    let four_eighths = Rational::new(4, 8);
    println!("1/2 <=> 4/8 ? {}", verdict(half.cmp(&four_eighths)));
    assert_eq!(half.cmp(&four_eighths), Ordering::Equal);
}
