use serde::{Deserialize, Serialize};

use crate::binding::{ShadeSettings, SlotNames};
use crate::color::Color;
use crate::shade::ShadeParameters;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShadeProfile {
    pub id: String,
    pub base_color: Color,
    #[serde(default)]
    pub preview: bool,
    #[serde(default)]
    pub shading: ShadeParameters,
    #[serde(default)]
    pub slots: SlotPreset,
}

/// Either a named preset (`default`, `unity`) or explicit slot names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SlotPreset {
    Named(SlotPresetName),
    Custom(SlotNames),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlotPresetName {
    #[default]
    Default,
    Unity,
}

impl Default for SlotPreset {
    fn default() -> Self {
        SlotPreset::Named(SlotPresetName::Default)
    }
}

impl SlotPreset {
    pub fn resolve(&self) -> SlotNames {
        match self {
            SlotPreset::Named(SlotPresetName::Default) => SlotNames::default(),
            SlotPreset::Named(SlotPresetName::Unity) => SlotNames::unity_toon_shader(),
            SlotPreset::Custom(names) => names.clone(),
        }
    }
}

impl ShadeProfile {
    pub fn settings(&self) -> ShadeSettings {
        ShadeSettings { base_color: self.base_color, params: self.shading, slots: self.slots.resolve() }
    }
}
