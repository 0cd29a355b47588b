//! Mapping between screen pixels and the complex plane.

pub mod iteration_budget;
pub mod viewport;

pub use iteration_budget::{IterationBudget, iteration_budget};
pub use viewport::{Viewport, ZOOM_STEP};
