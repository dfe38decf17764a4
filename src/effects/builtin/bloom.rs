//! Bloom effect

use serde::{Deserialize, Serialize};

use crate::color::GlColor;
use crate::effects::traits::{FxDescriptor, FxPipeline};
use crate::effects::types::{FxController, FxKind, RenderableId};

/// Bloom descriptor: a blurred, brightened copy added back over the source
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bloom {
    pub controller: FxController,
    pub offset_x: f32,
    pub offset_y: f32,
    /// Strength of the blur passes
    pub blur_strength: f32,
    /// Strength of the blend back over the source
    pub strength: f32,
    pub steps: u32,
    pub glcolor: GlColor,
}

impl Bloom {
    pub fn new(owner: RenderableId) -> Self {
        Self {
            controller: FxController::new(FxKind::Bloom, owner),
            offset_x: 1.0,
            offset_y: 1.0,
            blur_strength: 1.0,
            strength: 1.0,
            steps: 4,
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

impl FxDescriptor for Bloom {
    fn controller(&self) -> &FxController {
        &self.controller
    }

    fn controller_mut(&mut self) -> &mut FxController {
        &mut self.controller
    }

    fn on_pre_render(&mut self, pipeline: &mut dyn FxPipeline) {
        let [r, g, b] = self.glcolor.as_array();
        pipeline.set_float2("offset", self.offset_x, self.offset_y);
        pipeline.set_float1("blurStrength", self.blur_strength);
        pipeline.set_float1("strength", self.strength);
        pipeline.set_float3("color", r, g, b);
        pipeline.set_int1("steps", self.steps as i32);
    }
}
