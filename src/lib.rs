mod ordering;
pub use ordering::*;

mod fallback;
pub use fallback::*;

// core comparison types
mod rational;
pub use rational::*;

mod records;
pub use records::*;

pub mod comparator;
pub mod mixed;
