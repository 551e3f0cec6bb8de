//! Shade chain derivation: base color -> first shade -> second shade.
//!
//! Each step rotates the hue toward blue and lowers saturation and value by
//! fixed amounts. The chain is two applications of the same step.

pub mod params;

pub use params::ShadeParameters;

use serde::Serialize;
use tracing::debug;

use crate::color::{clamp01, Color, Hsv};

pub const YELLOW_HUE_DEG: i32 = 60;
pub const BLUE_HUE_DEG: i32 = 240;

/// Base color plus the two derived shades, in band order.
///
/// Serializes each color as `#RRGGBB`, so exported shades are rounded to
/// 8 bits per channel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ShadeResult {
    pub base: Color,
    pub first_shade: Color,
    pub second_shade: Color,
}

impl ShadeResult {
    pub fn colors(&self) -> [Color; 3] {
        [self.base, self.first_shade, self.second_shade]
    }
}

/// Rotate a normalized hue by `hue_shift_degrees`.
///
/// Hues from yellow through blue move up toward blue; hues past blue move back
/// down toward it; reds and oranges below yellow move down and wrap through 0.
/// The branch is picked on the hue rounded to whole degrees.
pub fn shift_hue(hue: f32, hue_shift_degrees: u16) -> f32 {
    let deg = hue * 360.0;
    let h = deg.round() as i32;
    let shift = hue_shift_degrees as f32;

    let shifted = if (YELLOW_HUE_DEG..=BLUE_HUE_DEG).contains(&h) {
        deg + shift
    } else if h > BLUE_HUE_DEG {
        deg - shift
    } else if h - (hue_shift_degrees as i32) < 0 {
        360.0 - (shift - deg)
    } else {
        deg - shift
    };

    clamp01(shifted.rem_euclid(360.0) / 360.0)
}

/// One shading step.
pub fn derive_shade(color: Color, params: &ShadeParameters) -> Color {
    let hsv = color.to_hsv();
    Hsv {
        h: shift_hue(hsv.h, params.hue_shift_degrees),
        s: clamp01(hsv.s - params.normalized_saturation_delta()),
        v: clamp01(hsv.v - params.normalized_value_delta()),
    }
    .to_rgb()
}

pub fn derive_shade_result(base: Color, params: &ShadeParameters) -> ShadeResult {
    let first_shade = derive_shade(base, params);
    let second_shade = derive_shade(first_shade, params);
    debug!(
        base = %base,
        first = %first_shade,
        second = %second_shade,
        hue_shift = params.hue_shift_degrees,
        "derived shade chain"
    );
    ShadeResult { base, first_shade, second_shade }
}

impl ShadeParameters {
    pub fn derive(&self, base: Color) -> ShadeResult {
        derive_shade_result(base, self)
    }
}
