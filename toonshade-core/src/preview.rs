//! Live preview: keep re-applying a binding while the user has it toggled on.
//!
//! Idle --toggle--> Previewing { selection } --toggle or selection change--> Idle

use tracing::info;

use crate::binding::{ShadeBinding, ShadeSurface};
use crate::error::ShadeError;
use crate::shade::ShadeResult;

/// Editor selection handle, opaque to this crate.
pub type SelectionId = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PreviewState {
    #[default]
    Idle,
    Previewing { selection: SelectionId },
}

#[derive(Debug, Default)]
pub struct PreviewController {
    state: PreviewState,
}

impl PreviewController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> PreviewState {
        self.state
    }

    pub fn is_previewing(&self) -> bool {
        matches!(self.state, PreviewState::Previewing { .. })
    }

    pub fn toggle(&mut self, selection: SelectionId) -> PreviewState {
        self.state = match self.state {
            PreviewState::Idle => {
                info!(selection, "preview on");
                PreviewState::Previewing { selection }
            }
            PreviewState::Previewing { .. } => {
                info!("preview off");
                PreviewState::Idle
            }
        };
        self.state
    }

    /// Leave preview when the editor selection moves to another object.
    pub fn selection_changed(&mut self, selection: Option<SelectionId>) -> PreviewState {
        if let PreviewState::Previewing { selection: current } = self.state {
            if selection != Some(current) {
                info!(from = current, to = ?selection, "selection changed, preview off");
                self.state = PreviewState::Idle;
            }
        }
        self.state
    }

    /// Per-frame hook. Applies the binding only while previewing.
    pub fn tick<S: ShadeSurface>(&self, binding: &mut ShadeBinding<S>) -> Result<Option<ShadeResult>, ShadeError> {
        match self.state {
            PreviewState::Idle => Ok(None),
            PreviewState::Previewing { .. } => binding.apply().map(Some),
        }
    }
}
