//! Binding between the shade chain and a material-like surface.
//!
//! The deriver never touches a material. `ShadeBinding` owns the surface handle
//! and its settings, runs the derivation and writes the three colors into the
//! surface's named slots.

pub mod uniforms;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use crate::color::Color;
use crate::error::ShadeError;
use crate::shade::{derive_shade_result, ShadeParameters, ShadeResult};

pub use uniforms::ShadeUniforms;

/// Anything that accepts named color properties, e.g. a toon material.
pub trait ShadeSurface {
    fn set_color(&mut self, slot: &str, color: Color);
}

impl<S: ShadeSurface + ?Sized> ShadeSurface for &mut S {
    fn set_color(&mut self, slot: &str, color: Color) {
        (**self).set_color(slot, color)
    }
}

/// Uniform names the toon shader reads the palette from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotNames {
    pub base: String,
    pub first_shade: String,
    pub second_shade: String,
}

impl Default for SlotNames {
    fn default() -> Self {
        Self {
            base: "BaseColor".into(),
            first_shade: "FirstShadeColor".into(),
            second_shade: "SecondShadeColor".into(),
        }
    }
}

impl SlotNames {
    /// Property names used by Unity Toon Shader materials.
    pub fn unity_toon_shader() -> Self {
        Self {
            base: "_BaseColor".into(),
            first_shade: "_1st_ShadeColor".into(),
            second_shade: "_2nd_ShadeColor".into(),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        [self.base.as_str(), self.first_shade.as_str(), self.second_shade.as_str()].into_iter()
    }
}

/// Write base, first and second shade into their slots.
pub fn write_result<S: ShadeSurface + ?Sized>(surface: &mut S, slots: &SlotNames, result: &ShadeResult) {
    for (slot, color) in slots.iter().zip(result.colors()) {
        debug!(slot, color = %color, "set shade color");
        surface.set_color(slot, color);
    }
}

/// In-memory surface: slot name -> opaque RGBA.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MaterialColors {
    pub slots: BTreeMap<String, [f32; 4]>,
}

impl MaterialColors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, slot: &str) -> Option<Color> {
        self.slots.get(slot).map(|[r, g, b, _]| Color::rgb(*r, *g, *b))
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

impl ShadeSurface for MaterialColors {
    fn set_color(&mut self, slot: &str, color: Color) {
        self.slots.insert(slot.to_string(), color.to_vec4().to_array());
    }
}

/// Caller-owned configuration for one binding.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShadeSettings {
    pub base_color: Color,
    #[serde(default)]
    pub params: ShadeParameters,
    #[serde(default)]
    pub slots: SlotNames,
}

/// Owns an optional surface plus the settings used to paint it.
///
/// `attach` acquires or replaces the surface (e.g. after the renderer was
/// refreshed), `detach` releases it. `apply` is the "set colors" action.
#[derive(Debug)]
pub struct ShadeBinding<S> {
    surface: Option<S>,
    settings: ShadeSettings,
}

impl<S: ShadeSurface> ShadeBinding<S> {
    pub fn new(settings: ShadeSettings) -> Self {
        Self { surface: None, settings }
    }

    pub fn with_surface(settings: ShadeSettings, surface: S) -> Self {
        Self { surface: Some(surface), settings }
    }

    /// Attach a surface, returning the previously attached one.
    pub fn attach(&mut self, surface: S) -> Option<S> {
        self.surface.replace(surface)
    }

    pub fn detach(&mut self) -> Option<S> {
        self.surface.take()
    }

    pub fn surface(&self) -> Option<&S> {
        self.surface.as_ref()
    }

    pub fn settings(&self) -> &ShadeSettings {
        &self.settings
    }

    pub fn settings_mut(&mut self) -> &mut ShadeSettings {
        &mut self.settings
    }

    pub fn apply(&mut self) -> Result<ShadeResult, ShadeError> {
        let Some(surface) = self.surface.as_mut() else {
            error!("no shade surface attached; colors not written");
            return Err(ShadeError::MissingSurface);
        };
        self.settings.params.validate()?;
        let result = derive_shade_result(self.settings.base_color, &self.settings.params);
        write_result(surface, &self.settings.slots, &result);
        Ok(result)
    }
}
