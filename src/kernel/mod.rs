//! Kernel configuration and the custom-kernel seam

pub mod linear;
pub mod traits;

pub use self::linear::*;
pub use self::traits::*;

use std::fmt;
use std::sync::Arc;

/// Kernel configuration handed explicitly to every solve call.
///
/// The built-in variants carry the usual libsvm parameterizations and are
/// interpreted by the solver; `Custom` carries a shared [`Kernel`] handle
/// for solvers that accept user-supplied similarity functions. Cloning is
/// cheap; the custom handle is reference-counted.
#[derive(Clone, Default)]
pub enum KernelSpec {
    /// K(x, y) = x·y
    #[default]
    Linear,
    /// K(x, y) = (γ·x·y + coef0)^degree
    Polynomial { degree: u32, gamma: f64, coef0: f64 },
    /// K(x, y) = exp(-γ·‖x-y‖²)
    Rbf { gamma: f64 },
    /// K(x, y) = tanh(γ·x·y + coef0)
    Sigmoid { gamma: f64, coef0: f64 },
    /// User-supplied kernel implementation
    Custom(Arc<dyn Kernel>),
}

impl KernelSpec {
    /// Wrap a custom kernel implementation
    pub fn custom<K: Kernel + 'static>(kernel: K) -> Self {
        Self::Custom(Arc::new(kernel))
    }

    /// Short kernel name used in diagnostics and manifests
    pub fn name(&self) -> &str {
        match self {
            KernelSpec::Linear => "linear",
            KernelSpec::Polynomial { .. } => "poly",
            KernelSpec::Rbf { .. } => "rbf",
            KernelSpec::Sigmoid { .. } => "sigmoid",
            KernelSpec::Custom(kernel) => kernel.name(),
        }
    }
}

impl fmt::Debug for KernelSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KernelSpec::Linear => write!(f, "Linear"),
            KernelSpec::Polynomial {
                degree,
                gamma,
                coef0,
            } => f
                .debug_struct("Polynomial")
                .field("degree", degree)
                .field("gamma", gamma)
                .field("coef0", coef0)
                .finish(),
            KernelSpec::Rbf { gamma } => {
                f.debug_struct("Rbf").field("gamma", gamma).finish()
            }
            KernelSpec::Sigmoid { gamma, coef0 } => f
                .debug_struct("Sigmoid")
                .field("gamma", gamma)
                .field("coef0", coef0)
                .finish(),
            KernelSpec::Custom(kernel) => write!(f, "Custom({:?})", kernel.name()),
        }
    }
}

impl fmt::Display for KernelSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
