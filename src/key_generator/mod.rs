//! Reproducible key sequences for tests and benchmarks
mod random;
mod sequential;

pub use random::*;
pub use sequential::*;
