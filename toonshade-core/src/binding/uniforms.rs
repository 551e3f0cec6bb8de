//! GPU-side layout of the shade palette.

use bytemuck::{Pod, Zeroable};

use crate::shade::ShadeResult;

/// Three opaque RGBA colors, std140-compatible (each row is a vec4).
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct ShadeUniforms {
    pub base: [f32; 4],
    pub first_shade: [f32; 4],
    pub second_shade: [f32; 4],
}

impl ShadeUniforms {
    pub const SIZE: usize = std::mem::size_of::<Self>();

    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }
}

impl From<&ShadeResult> for ShadeUniforms {
    fn from(r: &ShadeResult) -> Self {
        Self {
            base: r.base.to_vec4().to_array(),
            first_shade: r.first_shade.to_vec4().to_array(),
            second_shade: r.second_shade.to_vec4().to_array(),
        }
    }
}
