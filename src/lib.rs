pub mod applicator;
pub mod config;
pub mod error;
pub mod labels;
pub mod seasons;

#[cfg(any(test, feature = "test-support"))]
pub mod testing;
