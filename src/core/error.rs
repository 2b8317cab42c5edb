//! Error types for the training adapter

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SvmBridgeError {
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Feature arrays disagree in length: {indices} indices vs {values} values")]
    FeatureLengthMismatch { indices: usize, values: usize },

    #[error("Invalid example at position {position}: {reason}")]
    InvalidExample { position: usize, reason: String },

    #[error("Empty training set")]
    EmptyTrainingSet,

    #[error("Solver failed: {0}")]
    Solver(String),

    #[error("Solver model returned label id {0} with no mapped class")]
    UnknownLabelId(f64),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

pub type Result<T> = std::result::Result<T, SvmBridgeError>;
