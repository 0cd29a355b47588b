pub mod blue_white_gradient;
pub mod hsv_cycle;
