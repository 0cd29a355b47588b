use crate::core::actions::ports::colour_map::ColourMap;
use crate::core::colour_maps::kinds::ColourMapKind;
use crate::core::colour_maps::maps::{blue_white_gradient::BlueWhiteGradient, hsv_cycle::HsvCycle};

#[must_use]
pub fn colour_map_factory(kind: ColourMapKind) -> Box<dyn ColourMap> {
    match kind {
        ColourMapKind::HsvCycle => Box::new(HsvCycle),
        ColourMapKind::BlueWhiteGradient => Box::new(BlueWhiteGradient),
    }
}
