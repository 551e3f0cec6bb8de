pub mod binding;
pub mod color;
pub mod error;
pub mod export;
pub mod preview;
pub mod profile;
pub mod shade;

pub use binding::{MaterialColors, ShadeBinding, ShadeSettings, ShadeSurface, SlotNames};
pub use color::{Color, Hsv};
pub use error::ShadeError;
pub use shade::{derive_shade, derive_shade_result, shift_hue, ShadeParameters, ShadeResult};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
