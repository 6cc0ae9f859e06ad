//! Report the strength of the order various types' comparisons produce.
use threeway::{Category, ComparisonCategory, Rational};

fn print_category<T: ComparisonCategory>(name: &str) {
    println!("{name:>8}: {}", T::CATEGORY);
}

fn main() {
    println!("{}", "-".repeat(80));

    print_category::<i32>("i32");
    print_category::<u64>("u64");
    print_category::<bool>("bool");
    print_category::<char>("char");
    print_category::<String>("String");
    print_category::<f32>("f32");
    print_category::<f64>("f64");
    print_category::<Rational>("Rational");

    assert_eq!(<i32 as ComparisonCategory>::CATEGORY, Category::Strong);
    assert_eq!(<f64 as ComparisonCategory>::CATEGORY, Category::Partial);
    assert_eq!(<Rational as ComparisonCategory>::CATEGORY, Category::Weak);
}
