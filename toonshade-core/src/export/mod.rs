//! Export utilities (palette metadata as JSON).

use serde::Serialize;

use crate::binding::{MaterialColors, SlotNames};
use crate::shade::{ShadeParameters, ShadeResult};

/// Colors are written as `#RRGGBB`, i.e. rounded to 8 bits per channel.
#[derive(Debug, Clone, Serialize)]
pub struct PaletteMeta<'a> {
    pub params: ShadeParameters,
    pub colors: &'a ShadeResult,
    pub slots: &'a SlotNames,
}

impl<'a> PaletteMeta<'a> {
    pub fn new(params: ShadeParameters, colors: &'a ShadeResult, slots: &'a SlotNames) -> Self {
        Self { params, colors, slots }
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

pub fn material_json(mat: &MaterialColors) -> serde_json::Result<String> {
    serde_json::to_string_pretty(mat)
}
