use serde::{Deserialize, Serialize};

use crate::error::ShadeError;

pub const MAX_HUE_SHIFT_DEGREES: u16 = 360;
pub const MAX_DELTA_PERCENT: u8 = 100;

/// Tunables for one shading step. Applied twice to build the shade chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShadeParameters {
    /// Hue rotation per step, 0..=360 degrees.
    pub hue_shift_degrees: u16,
    /// Saturation decrease per step, 0..=100 percentage points.
    pub saturation_delta: u8,
    /// Value (brightness) decrease per step, 0..=100 percentage points.
    pub value_delta: u8,
}

impl Default for ShadeParameters {
    fn default() -> Self {
        Self { hue_shift_degrees: 5, saturation_delta: 20, value_delta: 20 }
    }
}

impl ShadeParameters {
    pub fn new(hue_shift_degrees: u16, saturation_delta: u8, value_delta: u8) -> Result<Self, ShadeError> {
        let params = Self { hue_shift_degrees, saturation_delta, value_delta };
        params.validate()?;
        Ok(params)
    }

    pub fn validate(&self) -> Result<(), ShadeError> {
        check("hue_shift_degrees", self.hue_shift_degrees as u32, MAX_HUE_SHIFT_DEGREES as u32)?;
        check("saturation_delta", self.saturation_delta as u32, MAX_DELTA_PERCENT as u32)?;
        check("value_delta", self.value_delta as u32, MAX_DELTA_PERCENT as u32)
    }

    // Normalized forms stay in [0, 1] even for fields set past their range.
    pub fn normalized_hue_shift(&self) -> f32 {
        (self.hue_shift_degrees as f32 / 360.0).min(1.0)
    }

    pub fn normalized_saturation_delta(&self) -> f32 {
        (self.saturation_delta as f32 / 100.0).min(1.0)
    }

    pub fn normalized_value_delta(&self) -> f32 {
        (self.value_delta as f32 / 100.0).min(1.0)
    }
}

fn check(name: &'static str, value: u32, max: u32) -> Result<(), ShadeError> {
    if value > max {
        return Err(ShadeError::ParameterOutOfRange { name, value, max });
    }
    Ok(())
}
