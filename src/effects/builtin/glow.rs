//! Glow effect

use serde::{Deserialize, Serialize};

use crate::color::GlColor;
use crate::effects::traits::{FxDescriptor, FxPipeline};
use crate::effects::types::{FxController, FxKind, RenderableId};

/// Glow descriptor: an outline glow sampled around the alpha edge
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Glow {
    pub controller: FxController,
    pub outer_strength: f32,
    pub inner_strength: f32,
    /// Draw only the glow, hiding the source
    pub knockout: bool,
    pub glcolor: GlColor,
}

impl Glow {
    pub fn new(owner: RenderableId) -> Self {
        Self {
            controller: FxController::new(FxKind::Glow, owner),
            outer_strength: 4.0,
            inner_strength: 0.0,
            knockout: false,
            glcolor: GlColor::WHITE,
        }
    }

    pub fn color(&self) -> u32 {
        self.glcolor.packed()
    }

    pub fn set_color(&mut self, value: u32) {
        self.glcolor.set_packed(value);
    }
}

impl FxDescriptor for Glow {
    fn controller(&self) -> &FxController {
        &self.controller
    }

    fn controller_mut(&mut self) -> &mut FxController {
        &mut self.controller
    }

    fn on_pre_render(&mut self, pipeline: &mut dyn FxPipeline) {
        let [r, g, b] = self.glcolor.as_array();
        pipeline.set_float1("outerStrength", self.outer_strength);
        pipeline.set_float1("innerStrength", self.inner_strength);
        pipeline.set_float4("glowColor", r, g, b, 1.0);
        pipeline.set_bool("knockout", self.knockout);
    }
}
