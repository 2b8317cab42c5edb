//! Trained classifier wrapper

use std::sync::Arc;

use crate::core::{Result, SolverModel, SparseVector, SparseVectorBuilder, SvmBridgeError};
use crate::kernel::KernelSpec;
use crate::labels::LabelMap;

/// Classification front-end over an opaque solver model.
///
/// Owns the trained model, the kernel configuration it was trained with,
/// the label map for recovering class strings, and the probability flag.
/// Immutable after construction and safe to share across threads for
/// prediction.
pub struct TrainedClassifier<M: SolverModel> {
    model: M,
    kernel: KernelSpec,
    labels: Arc<LabelMap>,
    probability: bool,
}

impl<M: SolverModel> TrainedClassifier<M> {
    pub(crate) fn new(model: M, kernel: KernelSpec, labels: Arc<LabelMap>, probability: bool) -> Self {
        Self {
            model,
            kernel,
            labels,
            probability,
        }
    }

    /// Predict the class string of a canonical feature vector.
    ///
    /// Fails with [`SvmBridgeError::UnknownLabelId`] if the model returns an
    /// identifier the label map does not contain: a conforming solver only
    /// returns identifiers it was trained with, so that is a contract
    /// violation rather than a prediction.
    pub fn predict(&self, features: &SparseVector) -> Result<&str> {
        let id = self.model.predict(features);
        self.labels
            .label_of(id)
            .ok_or(SvmBridgeError::UnknownLabelId(id))
    }

    /// Predict from raw parallel (index, value) arrays, canonicalizing
    /// them first
    pub fn predict_raw(&self, indices: &[usize], values: &[f64]) -> Result<&str> {
        let features = SparseVectorBuilder::from_parallel(indices, values)?.build();
        self.predict(&features)
    }

    /// The underlying solver model
    pub fn model(&self) -> &M {
        &self.model
    }

    /// Kernel configuration the model was trained with
    pub fn kernel(&self) -> &KernelSpec {
        &self.kernel
    }

    /// Label map shared from the training run
    pub fn labels(&self) -> &LabelMap {
        &self.labels
    }

    /// Whether probability estimates were requested at training time
    pub fn probability_estimates(&self) -> bool {
        self.probability
    }

    /// Number of classes the model distinguishes
    pub fn n_classes(&self) -> usize {
        self.model.n_classes()
    }
}
