//! Barrel distortion effect

use serde::{Deserialize, Serialize};

use crate::effects::traits::{FxDescriptor, FxPipeline};
use crate::effects::types::{FxController, FxKind, RenderableId};

/// Barrel descriptor
///
/// `amount` above 1 bulges the image outwards, below 1 pinches it in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Barrel {
    pub controller: FxController,
    pub amount: f32,
}

impl Barrel {
    pub fn new(owner: RenderableId) -> Self {
        Self {
            controller: FxController::new(FxKind::Barrel, owner),
            amount: 1.0,
        }
    }
}

impl FxDescriptor for Barrel {
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
