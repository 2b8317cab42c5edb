//! Trait seams between the adapter and its collaborators

use crate::core::error::Result;
use crate::core::types::{Instance, LabeledExample, SolverParams, SolverType, SparseVector};
use crate::kernel::KernelSpec;

/// Source of labeled training examples
pub trait ExampleSet: Send + Sync {
    /// Number of examples in the set
    fn len(&self) -> usize;

    /// Number of features (dimensionality)
    fn dim(&self) -> usize;

    /// Get a single example by index
    ///
    /// # Panics
    /// Panics if index >= len()
    fn example(&self, i: usize) -> LabeledExample;

    /// Check if the set is empty
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Opaque trained model returned by an external solver.
///
/// Prediction yields the numeric label the solver was trained with; the
/// classifier wrapper translates it back to a class string. The solver type
/// and class count are exposed for diagnostic reporting only.
pub trait SolverModel: Send + Sync {
    /// Predict the numeric label of a canonical feature vector
    fn predict(&self, features: &SparseVector) -> f64;

    /// The SVM formulation this model was trained with
    fn solver_type(&self) -> SolverType;

    /// Number of classes the model distinguishes
    fn n_classes(&self) -> usize;
}

/// External SVM training routine, treated as a black box.
///
/// The kernel configuration is an explicit argument so independent training
/// calls never share hidden global state. Implementations surface their own
/// failures (non-convergence, invalid parameter combinations) through the
/// returned `Result`; the adapter propagates them verbatim.
pub trait Solver {
    /// Model type this solver produces
    type Model: SolverModel;

    /// Train on the given instances with the given kernel and parameters
    fn solve(
        &self,
        instances: &[Instance],
        kernel: &KernelSpec,
        params: &SolverParams,
    ) -> Result<Self::Model>;
}
