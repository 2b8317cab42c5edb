//! Core type definitions for the solver bridge

use serde::{Deserialize, Serialize};

use crate::core::error::{Result, SvmBridgeError};

/// Sparse feature vector with strictly ascending, unique indices.
///
/// This canonical form is what the solver side relies on: kernel and
/// dot-product routines walk two vectors in a single merge pass, which is
/// only correct when both index sequences are sorted and duplicate-free.
/// Use [`SparseVectorBuilder`] to canonicalize arbitrary-order input.
#[derive(Clone, Debug, PartialEq)]
pub struct SparseVector {
    /// Indices of non-zero elements, strictly ascending
    pub indices: Vec<usize>,
    /// Values corresponding to indices
    pub values: Vec<f64>,
}

impl SparseVector {
    /// Create a sparse vector from already-canonical parallel arrays.
    ///
    /// # Panics
    /// Panics if the arrays differ in length. Debug builds additionally
    /// assert that indices are strictly ascending.
    pub fn new(indices: Vec<usize>, values: Vec<f64>) -> Self {
        assert_eq!(
            indices.len(),
            values.len(),
            "Indices and values must have same length"
        );
        debug_assert!(
            indices.windows(2).all(|w| w[0] < w[1]),
            "Indices must be strictly ascending"
        );
        Self { indices, values }
    }

    /// Create an empty sparse vector
    pub fn empty() -> Self {
        Self {
            indices: Vec::new(),
            values: Vec::new(),
        }
    }

    /// Get the value at a specific index (0 if not present)
    pub fn get(&self, index: usize) -> f64 {
        match self.indices.binary_search(&index) {
            Ok(pos) => self.values[pos],
            Err(_) => 0.0,
        }
    }

    /// Iterate over (index, value) entries in ascending index order
    pub fn entries(&self) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.indices.iter().copied().zip(self.values.iter().copied())
    }

    /// Number of non-zero elements
    pub fn nnz(&self) -> usize {
        self.indices.len()
    }

    /// Check if vector is empty
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}

/// Accumulates (index, value) entries in arbitrary order and produces a
/// canonical [`SparseVector`].
///
/// Duplicate indices are resolved as **last write wins**: the entry pushed
/// last for a given index replaces earlier ones.
#[derive(Clone, Debug, Default)]
pub struct SparseVectorBuilder {
    entries: Vec<(usize, f64)>,
}

impl SparseVectorBuilder {
    /// Create an empty builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder with preallocated capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }

    /// Create a builder from parallel index/value slices.
    ///
    /// Fails with [`SvmBridgeError::FeatureLengthMismatch`] when the slices
    /// differ in length.
    pub fn from_parallel(indices: &[usize], values: &[f64]) -> Result<Self> {
        if indices.len() != values.len() {
            return Err(SvmBridgeError::FeatureLengthMismatch {
                indices: indices.len(),
                values: values.len(),
            });
        }
        Ok(Self {
            entries: indices.iter().copied().zip(values.iter().copied()).collect(),
        })
    }

    /// Add a single (index, value) entry
    pub fn push(&mut self, index: usize, value: f64) -> &mut Self {
        self.entries.push((index, value));
        self
    }

    /// Number of accumulated entries (before duplicate resolution)
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if no entries have been accumulated
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sort entries by index and resolve duplicates, producing the
    /// canonical vector.
    pub fn build(mut self) -> SparseVector {
        // Stable sort keeps insertion order within an index, so the last
        // pushed entry survives the dedup below.
        self.entries.sort_by_key(|&(idx, _)| idx);

        let mut indices: Vec<usize> = Vec::with_capacity(self.entries.len());
        let mut values = Vec::with_capacity(self.entries.len());
        for (idx, value) in self.entries {
            if indices.last() == Some(&idx) {
                let last = values.len() - 1;
                values[last] = value;
            } else {
                indices.push(idx);
                values.push(value);
            }
        }

        SparseVector { indices, values }
    }
}

/// A raw training example as consumed from the caller: a class label string
/// plus features as parallel (index, value) arrays.
///
/// The arrays may be unsorted and are only validated during conversion.
#[derive(Clone, Debug, PartialEq)]
pub struct LabeledExample {
    /// Class label string
    pub label: String,
    /// Feature indices (arbitrary order)
    pub indices: Vec<usize>,
    /// Feature values, parallel to `indices`
    pub values: Vec<f64>,
}

impl LabeledExample {
    /// Create a new labeled example from sparse parallel arrays
    pub fn new(label: impl Into<String>, indices: Vec<usize>, values: Vec<f64>) -> Self {
        Self {
            label: label.into(),
            indices,
            values,
        }
    }

    /// Create a labeled example from a dense feature slice, dropping zeros
    pub fn from_dense(label: impl Into<String>, features: &[f64]) -> Self {
        let (indices, values) = features
            .iter()
            .enumerate()
            .filter(|(_, &v)| v != 0.0)
            .map(|(i, &v)| (i, v))
            .unzip();
        Self {
            label: label.into(),
            indices,
            values,
        }
    }
}

/// A solver-ready training instance: numeric label plus canonical features.
/// Immutable once constructed.
#[derive(Clone, Debug, PartialEq)]
pub struct Instance {
    /// Numeric class label assigned by the label indexer
    pub label: f64,
    /// Canonical sparse feature vector
    pub features: SparseVector,
}

impl Instance {
    /// Create a new instance
    pub fn new(label: f64, features: SparseVector) -> Self {
        Self { label, features }
    }
}

/// SVM formulation variant, carried for diagnostic reporting only.
///
/// Matches the five modes of the classic libsvm `svm_parameter` constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SolverType {
    /// C-Support Vector Classification
    CSvc,
    /// ν-Support Vector Classification
    NuSvc,
    /// One-class SVM (novelty detection)
    OneClass,
    /// ε-Support Vector Regression
    EpsilonSvr,
    /// ν-Support Vector Regression
    NuSvr,
}

impl std::fmt::Display for SolverType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            SolverType::CSvc => "C_SVC",
            SolverType::NuSvc => "NU_SVC",
            SolverType::OneClass => "ONE_CLASS",
            SolverType::EpsilonSvr => "EPSILON_SVR",
            SolverType::NuSvr => "NU_SVR",
        };
        write!(f, "{name}")
    }
}

/// Hyperparameters forwarded to the solver without interpretation.
///
/// Defaults follow libsvm. The adapter only reads `probability` (to tag the
/// resulting classifier); the trained model reports
/// its own resolved type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolverParams {
    /// SVM formulation to train
    pub solver_type: SolverType,
    /// Cost parameter C (C-SVC, ε-SVR, ν-SVR)
    pub c: f64,
    /// ν parameter (ν-SVC, one-class, ν-SVR)
    pub nu: f64,
    /// ε in the ε-insensitive loss (ε-SVR)
    pub p: f64,
    /// Stopping tolerance for the solver
    pub epsilon: f64,
    /// Whether the solver should use its shrinking heuristic
    pub shrinking: bool,
    /// Whether to train for probability estimates
    pub probability: bool,
    /// Solver kernel cache size in MB
    pub cache_size_mb: f64,
}

impl Default for SolverParams {
    fn default() -> Self {
        Self {
            solver_type: SolverType::CSvc,
            c: 1.0,
            nu: 0.5,
            p: 0.1,
            epsilon: 0.001,
            shrinking: true,
            probability: false,
            cache_size_mb: 100.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_sorts_arbitrary_order() {
        let mut builder = SparseVectorBuilder::new();
        builder.push(2, 2.0).push(0, 1.0).push(4, 3.0);
        let sv = builder.build();

        assert_eq!(sv.indices, vec![0, 2, 4]);
        assert_eq!(sv.values, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_builder_preserves_all_pairs() {
        // Distinct indices in, same multiset of (index, value) pairs out
        let indices = vec![7, 1, 9, 3, 5];
        let values = vec![7.0, 1.0, 9.0, 3.0, 5.0];
        let sv = SparseVectorBuilder::from_parallel(&indices, &values)
            .unwrap()
            .build();

        assert_eq!(sv.nnz(), 5);
        for (idx, value) in indices.iter().zip(values.iter()) {
            assert_eq!(sv.get(*idx), *value);
        }
        assert!(sv.indices.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_builder_duplicate_last_write_wins() {
        let mut builder = SparseVectorBuilder::new();
        builder.push(3, 1.0).push(1, 5.0).push(3, 2.0);
        let sv = builder.build();

        assert_eq!(sv.indices, vec![1, 3]);
        assert_eq!(sv.values, vec![5.0, 2.0]);
    }

    #[test]
    fn test_builder_length_mismatch() {
        let result = SparseVectorBuilder::from_parallel(&[0, 1], &[1.0]);
        match result {
            Err(SvmBridgeError::FeatureLengthMismatch { indices, values }) => {
                assert_eq!(indices, 2);
                assert_eq!(values, 1);
            }
            other => panic!("Expected length mismatch, got {other:?}"),
        }
    }

    #[test]
    fn test_builder_empty() {
        let sv = SparseVectorBuilder::new().build();
        assert!(sv.is_empty());
        assert_eq!(sv.nnz(), 0);
    }

    #[test]
    fn test_sparse_vector_get() {
        let sv = SparseVector::new(vec![1, 3, 5], vec![1.0, 2.0, 3.0]);

        assert_eq!(sv.get(0), 0.0);
        assert_eq!(sv.get(1), 1.0);
        assert_eq!(sv.get(3), 2.0);
        assert_eq!(sv.get(5), 3.0);
        assert_eq!(sv.get(6), 0.0);
    }

    #[test]
    fn test_sparse_vector_entries() {
        let sv = SparseVector::new(vec![0, 2], vec![1.0, 3.0]);
        let entries: Vec<_> = sv.entries().collect();
        assert_eq!(entries, vec![(0, 1.0), (2, 3.0)]);
    }

    #[test]
    #[should_panic(expected = "Indices and values must have same length")]
    fn test_sparse_vector_length_mismatch_panics() {
        SparseVector::new(vec![0, 1], vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_labeled_example_from_dense() {
        let example = LabeledExample::from_dense("cat", &[1.0, 0.0, 3.0, 0.0]);
        assert_eq!(example.label, "cat");
        assert_eq!(example.indices, vec![0, 2]);
        assert_eq!(example.values, vec![1.0, 3.0]);
    }

    #[test]
    fn test_instance() {
        let features = SparseVector::new(vec![0, 2], vec![1.0, 3.0]);
        let instance = Instance::new(1.0, features.clone());
        assert_eq!(instance.label, 1.0);
        assert_eq!(instance.features, features);
    }

    #[test]
    fn test_solver_type_display() {
        assert_eq!(SolverType::CSvc.to_string(), "C_SVC");
        assert_eq!(SolverType::OneClass.to_string(), "ONE_CLASS");
        assert_eq!(SolverType::NuSvr.to_string(), "NU_SVR");
    }

    #[test]
    fn test_solver_params_default() {
        let params = SolverParams::default();
        assert_eq!(params.solver_type, SolverType::CSvc);
        assert_eq!(params.c, 1.0);
        assert_eq!(params.nu, 0.5);
        assert_eq!(params.epsilon, 0.001);
        assert!(params.shrinking);
        assert!(!params.probability);
    }
}
