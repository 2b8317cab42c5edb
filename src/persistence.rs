//! Classifier manifest persistence
//!
//! The solver model itself is opaque and belongs to the external solver;
//! what this crate can persist is everything needed to interpret and
//! reproduce a training run: the label map, the kernel and solver
//! configuration, and provenance metadata.

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::classifier::TrainedClassifier;
use crate::core::{Result, SolverModel, SolverParams, SolverType, SvmBridgeError};
use crate::labels::LabelMap;

/// Serializable description of a trained classifier
#[derive(Debug, Serialize, Deserialize)]
pub struct ClassifierManifest {
    /// Library version used to create the classifier
    pub library_version: String,
    /// Creation timestamp (RFC 3339)
    pub created_at: String,
    /// SVM formulation the model reported after training
    pub solver_type: SolverType,
    /// Kernel name the classifier was trained with
    pub kernel: String,
    /// Number of classes the model distinguishes
    pub n_classes: usize,
    /// Class labels in insertion order; position k holds the label with
    /// numeric identifier k+1
    pub labels: Vec<String>,
    /// Solver parameters used for training
    pub params: SolverParams,
}

impl ClassifierManifest {
    /// Describe a trained classifier together with the parameters that
    /// produced it
    pub fn describe<M: SolverModel>(
        classifier: &TrainedClassifier<M>,
        params: &SolverParams,
    ) -> Self {
        Self {
            library_version: crate::VERSION.to_string(),
            created_at: chrono::Utc::now().to_rfc3339(),
            solver_type: classifier.model().solver_type(),
            kernel: classifier.kernel().name().to_string(),
            n_classes: classifier.n_classes(),
            labels: classifier.labels().labels().to_vec(),
            params: params.clone(),
        }
    }

    /// Save the manifest to a JSON file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let file = File::create(path).map_err(SvmBridgeError::Io)?;
        let writer = BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)
            .map_err(|e| SvmBridgeError::Serialization(e.to_string()))?;
        Ok(())
    }

    /// Load a manifest from a JSON file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path).map_err(SvmBridgeError::Io)?;
        let reader = BufReader::new(file);
        let manifest = serde_json::from_reader(reader)
            .map_err(|e| SvmBridgeError::Serialization(e.to_string()))?;
        Ok(manifest)
    }

    /// Reconstruct the label map recorded in this manifest
    pub fn label_map(&self) -> LabelMap {
        LabelMap::from_labels(self.labels.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::TrainingAdapter;
    use crate::core::{Instance, LabeledExample, Solver, SparseVector};
    use crate::kernel::KernelSpec;
    use tempfile::NamedTempFile;

    struct StubSolver;

    struct StubModel {
        solver_type: SolverType,
        n_classes: usize,
    }

    impl SolverModel for StubModel {
        fn predict(&self, _features: &SparseVector) -> f64 {
            1.0
        }
        fn solver_type(&self) -> SolverType {
            self.solver_type
        }
        fn n_classes(&self) -> usize {
            self.n_classes
        }
    }

    impl Solver for StubSolver {
        type Model = StubModel;

        fn solve(
            &self,
            instances: &[Instance],
            _kernel: &KernelSpec,
            params: &SolverParams,
        ) -> Result<StubModel> {
            let mut ids: Vec<u64> = instances.iter().map(|i| i.label as u64).collect();
            ids.sort_unstable();
            ids.dedup();
            Ok(StubModel {
                solver_type: params.solver_type,
                n_classes: ids.len(),
            })
        }
    }

    fn trained() -> (TrainedClassifier<StubModel>, SolverParams) {
        let mut adapter = TrainingAdapter::new(StubSolver)
            .with_kernel(KernelSpec::Rbf { gamma: 0.25 })
            .with_cost(2.0);
        let examples = vec![
            LabeledExample::new("cat", vec![0], vec![1.0]),
            LabeledExample::new("dog", vec![1], vec![2.0]),
        ];
        let params = adapter.params().clone();
        (adapter.train(&examples).unwrap(), params)
    }

    #[test]
    fn test_describe_captures_training_run() {
        let (classifier, params) = trained();
        let manifest = ClassifierManifest::describe(&classifier, &params);

        assert_eq!(manifest.library_version, crate::VERSION);
        assert_eq!(manifest.solver_type, SolverType::CSvc);
        assert_eq!(manifest.kernel, "rbf");
        assert_eq!(manifest.n_classes, 2);
        assert_eq!(manifest.labels, vec!["cat", "dog"]);
        assert_eq!(manifest.params.c, 2.0);
    }

    #[test]
    fn test_manifest_round_trip() -> Result<()> {
        let (classifier, params) = trained();
        let manifest = ClassifierManifest::describe(&classifier, &params);

        let temp_file = NamedTempFile::new().expect("Failed to create temp file");
        manifest.save_to_file(temp_file.path())?;

        let loaded = ClassifierManifest::load_from_file(temp_file.path())?;
        assert_eq!(loaded.labels, manifest.labels);
        assert_eq!(loaded.kernel, manifest.kernel);
        assert_eq!(loaded.solver_type, manifest.solver_type);
        assert_eq!(loaded.params, manifest.params);
        assert_eq!(loaded.created_at, manifest.created_at);

        Ok(())
    }

    #[test]
    fn test_label_map_reconstruction() {
        let (classifier, params) = trained();
        let manifest = ClassifierManifest::describe(&classifier, &params);

        let map = manifest.label_map();
        assert_eq!(map.id_of("cat"), Some(1.0));
        assert_eq!(map.id_of("dog"), Some(2.0));
        assert_eq!(map.label_of(2.0), Some("dog"));
        assert_eq!(map, *classifier.labels());
    }

    #[test]
    fn test_load_malformed_file() {
        use std::io::Write;

        let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
        writeln!(temp_file, "not json").expect("Failed to write");
        temp_file.flush().expect("Failed to flush");

        let result = ClassifierManifest::load_from_file(temp_file.path());
        assert!(matches!(result, Err(SvmBridgeError::Serialization(_))));
    }
}
