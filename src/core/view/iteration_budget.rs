use std::{error::Error, fmt};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum IterationBudgetError {
    ZeroBaseIterations,
    NonPositiveExpansionFactor { expansion_factor: f64 },
}

impl fmt::Display for IterationBudgetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroBaseIterations => write!(f, "base iterations must be greater than zero"),
            Self::NonPositiveExpansionFactor { expansion_factor } => {
                write!(f, "expansion factor must be positive, got {}", expansion_factor)
            }
        }
    }
}

impl Error for IterationBudgetError {}

/// Zoom-dependent iteration limit: `round(base * (1/zoom)^(1/expansion_factor))`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IterationBudget {
    base_iterations: u32,
    expansion_factor: f64,
}

pub const DEFAULT_BASE_ITERATIONS: u32 = 128;
pub const DEFAULT_EXPANSION_FACTOR: f64 = 3.5;

impl Default for IterationBudget {
    fn default() -> Self {
        Self {
            base_iterations: DEFAULT_BASE_ITERATIONS,
            expansion_factor: DEFAULT_EXPANSION_FACTOR,
        }
    }
}

impl IterationBudget {
    pub fn new(base_iterations: u32, expansion_factor: f64) -> Result<Self, IterationBudgetError> {
        if base_iterations == 0 {
            return Err(IterationBudgetError::ZeroBaseIterations);
        }
        if !expansion_factor.is_finite() || expansion_factor <= 0.0 {
            return Err(IterationBudgetError::NonPositiveExpansionFactor { expansion_factor });
        }

        Ok(Self {
            base_iterations,
            expansion_factor,
        })
    }

    #[must_use]
    pub fn base_iterations(&self) -> u32 {
        self.base_iterations
    }

    #[must_use]
    pub fn expansion_factor(&self) -> f64 {
        self.expansion_factor
    }

    #[must_use]
    pub fn for_zoom(&self, zoom: f64) -> u32 {
        iteration_budget(zoom, self.base_iterations, self.expansion_factor)
    }
}

/// Never below one so every pass evaluates at least one step.
#[must_use]
pub fn iteration_budget(zoom: f64, base_iterations: u32, expansion_factor: f64) -> u32 {
    let scaled = f64::from(base_iterations) * (1.0 / zoom).powf(1.0 / expansion_factor);

    if scaled.is_nan() {
        return base_iterations.max(1);
    }

    // `as` saturates at u32::MAX for very deep zooms.
    (scaled.round() as u32).max(1)
}
