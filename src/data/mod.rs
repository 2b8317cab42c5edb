//! Labeled dataset loading
//!
//! Implementations of the [`ExampleSet`](crate::core::ExampleSet) trait for
//! text formats carrying string class labels.

pub mod csv;
pub mod labeled;

pub use self::csv::*;
pub use self::labeled::*;
