use crate::core::tiling::KernelSizeError;
use crate::core::view::iteration_budget::IterationBudgetError;
use std::{error::Error, fmt};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SchedulerConfigError {
    KernelSize(KernelSizeError),
    IterationBudget(IterationBudgetError),
    ZeroFinalScale,
    /// One lane group of the widest kernel would span more than `i32::MAX` pixels.
    FinalScaleTooLarge { final_scale: u32 },
    ZeroFrameRate,
    InvalidZoom { zoom: f64 },
}

impl fmt::Display for SchedulerConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::KernelSize(err) => write!(f, "invalid kernel size: {}", err),
            Self::IterationBudget(err) => write!(f, "invalid iteration budget: {}", err),
            Self::ZeroFinalScale => write!(f, "final scale must be greater than zero"),
            Self::FinalScaleTooLarge { final_scale } => {
                write!(f, "final scale {} is too large for the kernel size", final_scale)
            }
            Self::ZeroFrameRate => write!(f, "frame rate must be greater than zero"),
            Self::InvalidZoom { zoom } => {
                write!(f, "initial zoom must be positive and finite, got {}", zoom)
            }
        }
    }
}

impl Error for SchedulerConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::KernelSize(err) => Some(err),
            Self::IterationBudget(err) => Some(err),
            _ => None,
        }
    }
}

impl From<KernelSizeError> for SchedulerConfigError {
    fn from(err: KernelSizeError) -> Self {
        Self::KernelSize(err)
    }
}

impl From<IterationBudgetError> for SchedulerConfigError {
    fn from(err: IterationBudgetError) -> Self {
        Self::IterationBudget(err)
    }
}
