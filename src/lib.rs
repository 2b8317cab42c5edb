//! Adapter between labeled classification data and external SVM solvers
//!
//! Converts string-labeled sparse feature vectors into the index-sorted
//! instance format an SVM solver consumes, and wraps the trained model
//! behind a classifier that maps predicted numeric labels back to their
//! original class strings. The solver itself (quadratic programming, kernel
//! evaluation, probability calibration) stays behind the [`Solver`] trait.

pub mod adapter;
pub mod classifier;
pub mod core;
pub mod data;
pub mod kernel;
pub mod labels;
pub mod persistence;

// Re-export main types for convenience
pub use crate::adapter::TrainingAdapter;
pub use crate::classifier::TrainedClassifier;
pub use crate::core::error::*;
pub use crate::core::traits::*;
pub use crate::core::types::*;
pub use crate::data::{CsvDataset, LabeledDataset};
pub use crate::kernel::{Kernel, KernelSpec, LinearKernel};
pub use crate::labels::{LabelIndexer, LabelMap};
pub use crate::persistence::ClassifierManifest;

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
