//! Command implementations.

pub mod extract;
pub mod sample;
pub mod stats;

pub use self::extract::execute_extract;
pub use self::sample::execute_sample;
pub use self::stats::execute_stats;
