use crate::core::actions::ports::colour_map::ColourMap;
use crate::core::colour_maps::hsv::hsv_to_rgb;
use crate::core::colour_maps::kinds::ColourMapKind;
use crate::core::data::colour::Colour;
use std::f32::consts::TAU;

/// Counts per unit of the square-root control curve.
const COUNT_SCALE: f64 = 1024.0;

/// Slowly cycling hue with a pulsing saturation. Independent of the budget so
/// colours stay put while the budget changes with zoom.
#[derive(Debug, Default, Clone, Copy)]
pub struct HsvCycle;

impl HsvCycle {
    #[must_use]
    pub fn control(iterations: u32) -> f32 {
        ((f64::from(iterations) / COUNT_SCALE + 1.0).sqrt() - 1.0) as f32
    }
}

impl ColourMap for HsvCycle {
    fn map(&self, iterations: u32, _max_iterations: u32) -> Colour {
        let control = Self::control(iterations);

        let hue = control / 6.0;
        let saturation = (control * TAU * 2.0).sin() / 4.0 + 0.75;
        let value = (control * 16.0).min(1.0);

        let [r, g, b] = hsv_to_rgb(hue, saturation, value);

        Colour {
            r: (r * 255.0) as u8,
            g: (g * 255.0) as u8,
            b: (b * 255.0) as u8,
        }
    }

    fn kind(&self) -> ColourMapKind {
        ColourMapKind::HsvCycle
    }
}
