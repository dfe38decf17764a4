//! Shine effect

use serde::{Deserialize, Serialize};

use crate::effects::traits::{FxDescriptor, FxPipeline};
use crate::effects::types::{FxController, FxKind, RenderableId};

/// Shine descriptor: a light band sweeping across the renderable
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shine {
    pub controller: FxController,
    pub speed: f32,
    pub line_width: f32,
    pub gradient: f32,
    /// Reveal the renderable as the band passes instead of overlaying it
    pub reveal: bool,
}

impl Shine {
    pub fn new(owner: RenderableId) -> Self {
        Self {
            controller: FxController::new(FxKind::Shine, owner),
            speed: 0.5,
            line_width: 0.5,
            gradient: 3.0,
            reveal: false,
        }
    }
}

impl FxDescriptor for Shine {
    fn controller(&self) -> &FxController {
        &self.controller
    }

    fn controller_mut(&mut self) -> &mut FxController {
        &mut self.controller
    }

    fn on_pre_render(&mut self, pipeline: &mut dyn FxPipeline) {
        pipeline.set_float1("speed", self.speed);
        pipeline.set_float1("lineWidth", self.line_width);
        pipeline.set_float1("gradient", self.gradient);
        pipeline.set_bool("reveal", self.reveal);
    }
}
