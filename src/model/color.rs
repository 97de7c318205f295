use std::f32::consts::TAU;
use std::ops::Mul;

use serde::{Deserialize, Serialize};

/// Linear RGBA color handed to the readout renderer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BgColor {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl BgColor {
    pub const CLEAR: BgColor = BgColor::rgba(0.0, 0.0, 0.0, 0.0);
    pub const RED: BgColor = BgColor::rgba(1.0, 0.0, 0.0, 1.0);

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque grey of the given brightness.
    pub const fn grey(v: f32) -> Self {
        Self::rgba(v, v, v, 1.0)
    }
}

/// Component-wise product, the way tints are applied.
impl Mul for BgColor {
    type Output = BgColor;

    fn mul(self, rhs: BgColor) -> BgColor {
        BgColor::rgba(
            self.r * rhs.r,
            self.g * rhs.g,
            self.b * rhs.b,
            self.a * rhs.a,
        )
    }
}

/// Brightness in `[1 - amplitude, 1]` oscillating at `frequency` Hz.
///
/// Starts at the dim end (`t = 0`) and peaks at full brightness every
/// `1 / frequency` seconds.
pub fn pulse_brightness(frequency: f32, amplitude: f32, time: f32) -> f32 {
    let wave = (1.0 - (time * TAU * frequency).cos()) * 0.5;
    1.0 - amplitude + wave * amplitude
}
