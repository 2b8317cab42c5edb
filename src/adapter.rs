//! Training orchestration
//!
//! [`TrainingAdapter`] is the bridge between labeled examples and an
//! external SVM solver: it numbers class labels, canonicalizes feature
//! vectors, hands the converted instances to the solver, and wraps the
//! result behind a [`TrainedClassifier`] that can recover class strings at
//! prediction time.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use svmbridge::{KernelSpec, LabeledExample, TrainingAdapter};
//!
//! let mut adapter = TrainingAdapter::new(my_solver)
//!     .with_kernel(KernelSpec::Linear)
//!     .with_cost(1.0);
//!
//! let examples = vec![
//!     LabeledExample::new("spam", vec![0, 2], vec![1.0, 3.0]),
//!     LabeledExample::new("ham", vec![1], vec![5.0]),
//! ];
//! let classifier = adapter.train(&examples)?;
//! ```

use std::sync::Arc;

use log::{debug, info};

use crate::classifier::TrainedClassifier;
use crate::core::{
    ExampleSet, Instance, LabeledExample, Result, Solver, SolverModel, SolverParams,
    SparseVectorBuilder, SvmBridgeError,
};
use crate::kernel::KernelSpec;
use crate::labels::LabelIndexer;

/// Converts labeled examples into solver instances and drives one external
/// solver.
///
/// Holds per-run mutable state (the label indexer), which is reset at the
/// start of every [`train`](TrainingAdapter::train) call, so training on the
/// same adapter twice never leaks labels between runs. `train` takes
/// `&mut self` and runs to completion on the caller's thread; concurrent
/// training jobs need separate adapter instances.
pub struct TrainingAdapter<S: Solver> {
    solver: S,
    kernel: KernelSpec,
    params: SolverParams,
    labels: LabelIndexer,
}

impl<S: Solver> TrainingAdapter<S> {
    /// Create an adapter with a linear kernel and default parameters
    pub fn new(solver: S) -> Self {
        Self {
            solver,
            kernel: KernelSpec::default(),
            params: SolverParams::default(),
            labels: LabelIndexer::new(),
        }
    }

    /// Set the kernel configuration
    pub fn with_kernel(mut self, kernel: KernelSpec) -> Self {
        self.kernel = kernel;
        self
    }

    /// Set the full solver parameter block
    pub fn with_params(mut self, params: SolverParams) -> Self {
        self.params = params;
        self
    }

    /// Set cost parameter C
    pub fn with_cost(mut self, c: f64) -> Self {
        self.params.c = c;
        self
    }

    /// Request probability estimates from the solver
    pub fn with_probability(mut self, probability: bool) -> Self {
        self.params.probability = probability;
        self
    }

    /// Current kernel configuration
    pub fn kernel(&self) -> &KernelSpec {
        &self.kernel
    }

    /// Replace the kernel configuration
    pub fn set_kernel(&mut self, kernel: KernelSpec) {
        self.kernel = kernel;
    }

    /// Current solver parameters
    pub fn params(&self) -> &SolverParams {
        &self.params
    }

    /// Replace the solver parameters
    pub fn set_params(&mut self, params: SolverParams) {
        self.params = params;
    }

    /// Train a classifier on a slice of labeled examples.
    ///
    /// Examples are converted in input order: each gets a canonical sparse
    /// vector and a numeric label (first-seen-order, 1-based). The solver is
    /// invoked once with the full instance list; its failures propagate
    /// verbatim, with no retry and no partial model. An empty slice is
    /// rejected with [`SvmBridgeError::EmptyTrainingSet`].
    pub fn train(&mut self, examples: &[LabeledExample]) -> Result<TrainedClassifier<S::Model>> {
        if examples.is_empty() {
            return Err(SvmBridgeError::EmptyTrainingSet);
        }
        self.labels.reset();

        let mut instances = Vec::with_capacity(examples.len());
        for (position, example) in examples.iter().enumerate() {
            let features = SparseVectorBuilder::from_parallel(&example.indices, &example.values)
                .map_err(|e| SvmBridgeError::InvalidExample {
                    position,
                    reason: e.to_string(),
                })?
                .build();
            let label = self.labels.index_of(&example.label);
            instances.push(Instance::new(label, features));
        }
        debug!(
            "converted {} examples across {} classes",
            instances.len(),
            self.labels.len()
        );

        let model = self.solver.solve(&instances, &self.kernel, &self.params)?;

        let labels = Arc::new(self.labels.snapshot());
        info!("label map for trained classifier: {labels}");
        info!(
            "solver type {} with {} classes",
            model.solver_type(),
            model.n_classes()
        );

        Ok(TrainedClassifier::new(
            model,
            self.kernel.clone(),
            labels,
            self.params.probability,
        ))
    }

    /// Train a classifier from any [`ExampleSet`] implementation
    pub fn train_set<E: ExampleSet>(&mut self, set: &E) -> Result<TrainedClassifier<S::Model>> {
        let examples: Vec<LabeledExample> = (0..set.len()).map(|i| set.example(i)).collect();
        self.train(&examples)
    }
}
