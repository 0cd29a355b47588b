use crate::core::colour_maps::kinds::ColourMapKind;
use crate::core::data::colour::Colour;

/// Deterministic mapping from an escape count to a colour.
pub trait ColourMap: Send + Sync {
    fn map(&self, iterations: u32, max_iterations: u32) -> Colour;

    fn kind(&self) -> ColourMapKind;
}
