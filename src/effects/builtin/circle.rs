//! Circle effect

use serde::{Deserialize, Serialize};

use crate::color::GlColor;
use crate::effects::traits::{FxDescriptor, FxPipeline};
use crate::effects::types::{FxController, FxKind, RenderableId};

/// Circle descriptor: masks the renderable to a circle with a ring around it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub controller: FxController,
    /// Ring thickness in pixels
    pub thickness: f32,
    pub scale: f32,
    pub feather: f32,
    pub background_alpha: f32,
    pub glcolor: GlColor,
    pub glcolor2: GlColor,
}

impl Circle {
    pub fn new(owner: RenderableId) -> Self {
        Self {
            controller: FxController::new(FxKind::Circle, owner),
            thickness: 8.0,
            scale: 1.0,
            feather: 0.005,
            background_alpha: 0.4,
            glcolor: GlColor::from_packed(0xfeedb6),
            glcolor2: GlColor::from_packed(0xff0000),
        }
    }

    /// Ring color as `0xRRGGBB`
    pub fn color(&self) -> u32 {
        self.glcolor.packed()
    }

    pub fn set_color(&mut self, value: u32) {
        self.glcolor.set_packed(value);
    }

    /// Background color as `0xRRGGBB`
    pub fn background_color(&self) -> u32 {
        self.glcolor2.packed()
    }

    pub fn set_background_color(&mut self, value: u32) {
        self.glcolor2.set_packed(value);
    }
}

impl FxDescriptor for Circle {
    fn controller(&self) -> &FxController {
        &self.controller
    }

    fn controller_mut(&mut self) -> &mut FxController {
        &mut self.controller
    }

    fn on_pre_render(&mut self, pipeline: &mut dyn FxPipeline) {
        let [r, g, b] = self.glcolor.as_array();
        let [br, bg, bb] = self.glcolor2.as_array();
        pipeline.set_float3("color", r, g, b);
        pipeline.set_float4("backgroundColor", br, bg, bb, self.background_alpha);
        pipeline.set_float1("thickness", self.thickness);
        pipeline.set_float1("scale", self.scale);
        pipeline.set_float1("feather", self.feather);
    }
}
