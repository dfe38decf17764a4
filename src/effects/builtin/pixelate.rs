//! Pixelate effect

use serde::{Deserialize, Serialize};

use crate::effects::traits::{FxDescriptor, FxPipeline};
use crate::effects::types::{FxController, FxKind, RenderableId};

/// Pixelate descriptor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pixelate {
    pub controller: FxController,
    /// Pixel block size
    pub amount: f32,
}

impl Pixelate {
    pub fn new(owner: RenderableId) -> Self {
        Self {
            controller: FxController::new(FxKind::Pixelate, owner),
            amount: 1.0,
        }
    }
}

impl FxDescriptor for Pixelate {
    fn controller(&self) -> &FxController {
        &self.controller
    }

    fn controller_mut(&mut self) -> &mut FxController {
        &mut self.controller
    }

    fn on_pre_render(&mut self, pipeline: &mut dyn FxPipeline) {
        pipeline.set_float1("amount", self.amount);
    }
}
