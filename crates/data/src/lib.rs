//! Table configuration loading: JSON file first, then environment overrides.

pub mod load;

pub use load::*;
