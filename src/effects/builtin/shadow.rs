//! Shadow effect

use serde::{Deserialize, Serialize};

use crate::color::GlColor;
use crate::effects::traits::{FxDescriptor, FxPipeline};
use crate::effects::types::{FxController, FxKind, RenderableId};

/// Shadow descriptor
///
/// `x`/`y` give the light direction; `samples` controls how many taps the
/// shader takes along it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shadow {
    pub controller: FxController,
    pub x: f32,
    pub y: f32,
    pub decay: f32,
    pub power: f32,
    pub samples: u32,
    pub intensity: f32,
    pub glcolor: GlColor,
}

impl Shadow {
    pub fn new(owner: RenderableId) -> Self {
        Self {
            controller: FxController::new(FxKind::Shadow, owner),
            x: 0.0,
            y: 0.0,
            decay: 0.1,
            power: 1.0,
            samples: 6,
            intensity: 1.0,
            glcolor: GlColor::BLACK,
        }
    }

    pub fn color(&self) -> u32 {
        self.glcolor.packed()
    }

    pub fn set_color(&mut self, value: u32) {
        self.glcolor.set_packed(value);
    }
}

impl FxDescriptor for Shadow {
    fn controller(&self) -> &FxController {
        &self.controller
    }

    fn controller_mut(&mut self) -> &mut FxController {
        &mut self.controller
    }

    fn on_pre_render(&mut self, pipeline: &mut dyn FxPipeline) {
        let [r, g, b] = self.glcolor.as_array();
        pipeline.set_float2("lightPosition", self.x, self.y);
        pipeline.set_float1("decay", self.decay);
        pipeline.set_float1("power", self.power / self.samples.max(1) as f32);
        pipeline.set_float1("intensity", self.intensity);
        pipeline.set_float3("color", r, g, b);
        pipeline.set_int1("samples", self.samples as i32);
    }
}
