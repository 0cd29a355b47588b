//! Escape count to colour mappings.

pub mod factory;
pub mod hsv;
pub mod kinds;
pub mod maps;

pub use factory::colour_map_factory;
pub use kinds::ColourMapKind;
