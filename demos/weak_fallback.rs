//! Falling back to `<` and `==` when a type has no three-way comparison.
use std::cmp::Ordering;

use threeway::{relations, weak_order_fallback, LtEq, Rational};

/// Only defines `<` and `==`, like a type predating three-way comparison.
#[derive(Debug, Clone, Copy)]
struct Ratio {
    num: i64,
    den: i64, // > 0
}

impl LtEq for Ratio {
    fn lt(&self, other: &Self) -> bool {
        self.num * other.den < other.num * self.den
    }

    fn eq(&self, other: &Self) -> bool {
        self.num * other.den == other.num * self.den
    }
}

fn verdict(ord: Ordering) -> &'static str {
    match ord {
        Ordering::Less => "less",
        Ordering::Equal => "equal",
        Ordering::Greater => "greater",
    }
}

fn main() {
    println!("{}", "-".repeat(80));

    let a = Ratio { num: 1, den: 2 };
    let b = Ratio { num: 3, den: 4 };
    println!("a: {}/{}", a.num, a.den);
    println!("b: {}/{}", b.num, b.den);

    let rel = relations(&a, &b);
    println!(
        "  a < b ? {}, a == b ? {}, a > b ? {}",
        rel.lt, rel.eq, rel.gt
    );
    println!("fallback: {}", verdict(weak_order_fallback(&a, &b)));
    assert_eq!(weak_order_fallback(&a, &b), Ordering::Less);

    // the full Rational type compares three ways natively and agrees
    let c = Rational::new(6, 5);
    let d = Rational::new(8, 7);
    println!("c: {c}");
    println!("d: {d}");
    println!("native  : {}", verdict(c.cmp(&d)));
    println!("fallback: {}", verdict(weak_order_fallback(&c, &d)));
    assert_eq!(weak_order_fallback(&c, &d), c.cmp(&d));
}
