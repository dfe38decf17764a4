//! Gradient effect

use serde::{Deserialize, Serialize};

use crate::color::GlColor;
use crate::effects::traits::{FxDescriptor, FxPipeline};
use crate::effects::types::{FxController, FxKind, RenderableId};

/// Gradient descriptor: a two-color linear gradient blended over the source
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Gradient {
    pub controller: FxController,
    pub alpha: f32,
    /// Start point, in normalized texture coordinates
    pub from_x: f32,
    pub from_y: f32,
    /// End point, in normalized texture coordinates
    pub to_x: f32,
    pub to_y: f32,
    /// Band count (0 = smooth)
    pub size: u32,
    pub glcolor1: GlColor,
    pub glcolor2: GlColor,
}

impl Gradient {
    pub fn new(owner: RenderableId) -> Self {
        Self {
            controller: FxController::new(FxKind::Gradient, owner),
            alpha: 0.2,
            from_x: 0.0,
            from_y: 0.0,
            to_x: 0.0,
            to_y: 1.0,
            size: 0,
            glcolor1: GlColor::from_packed(0xff0000),
            glcolor2: GlColor::from_packed(0x00ff00),
        }
    }

    pub fn color1(&self) -> u32 {
        self.glcolor1.packed()
    }

    pub fn set_color1(&mut self, value: u32) {
        self.glcolor1.set_packed(value);
    }

    pub fn color2(&self) -> u32 {
        self.glcolor2.packed()
    }

    pub fn set_color2(&mut self, value: u32) {
        self.glcolor2.set_packed(value);
    }
}

impl FxDescriptor for Gradient {
    fn controller(&self) -> &FxController {
        &self.controller
    }

    fn controller_mut(&mut self) -> &mut FxController {
        &mut self.controller
    }

    fn on_pre_render(&mut self, pipeline: &mut dyn FxPipeline) {
        let [r1, g1, b1] = self.glcolor1.as_array();
        let [r2, g2, b2] = self.glcolor2.as_array();
        pipeline.set_float1("alpha", self.alpha);
        pipeline.set_int1("size", self.size as i32);
        pipeline.set_float3("color1", r1, g1, b1);
        pipeline.set_float3("color2", r2, g2, b2);
        pipeline.set_float4("positions", self.from_x, self.from_y, self.to_x, self.to_y);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gradient_defaults() {
        let mut gradient = Gradient::new(RenderableId(1));
        assert_eq!(gradient.kind(), FxKind::Gradient);
        assert_eq!(gradient.color1(), 0xff0000);
        assert_eq!(gradient.color2(), 0x00ff00);
        assert_eq!(gradient.alpha, 0.2);
        assert_eq!((gradient.from_x, gradient.from_y), (0.0, 0.0));
        assert_eq!((gradient.to_x, gradient.to_y), (0.0, 1.0));
        assert_eq!(gradient.size, 0);

        gradient.set_color2(0x0000ff);
        assert_eq!(gradient.glcolor2.as_array(), [0.0, 0.0, 1.0]);
    }
}
