use crate::core::actions::ports::colour_map::ColourMap;
use crate::core::colour_maps::kinds::ColourMapKind;
use crate::core::data::colour::Colour;

/// Polynomial blue-to-white ramp normalised by the iteration budget. Points
/// that reach the budget are black.
#[derive(Debug, Default, Clone, Copy)]
pub struct BlueWhiteGradient;

impl ColourMap for BlueWhiteGradient {
    fn map(&self, iterations: u32, max_iterations: u32) -> Colour {
        if iterations >= max_iterations {
            return Colour::BLACK;
        }

        let t = f64::from(iterations) / f64::from(max_iterations);

        let r = (9.0 * (1.0 - t) * t * t * t * 255.0) as u8;
        let g = (15.0 * (1.0 - t) * (1.0 - t) * t * t * 255.0) as u8;
        let b = (8.5 * (1.0 - t) * (1.0 - t) * (1.0 - t) * t * 255.0) as u8;

        Colour { r, g, b }
    }

    fn kind(&self) -> ColourMapKind {
        ColourMapKind::BlueWhiteGradient
    }
}
