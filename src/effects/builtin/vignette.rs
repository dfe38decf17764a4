//! Vignette effect

use serde::{Deserialize, Serialize};

use crate::effects::traits::{FxDescriptor, FxPipeline};
use crate::effects::types::{FxController, FxKind, RenderableId};

/// Vignette descriptor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vignette {
    pub controller: FxController,
    /// Center, in normalized texture coordinates
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    pub strength: f32,
}

impl Vignette {
    pub fn new(owner: RenderableId) -> Self {
        Self {
            controller: FxController::new(FxKind::Vignette, owner),
            x: 0.5,
            y: 0.5,
            radius: 0.5,
            strength: 0.5,
        }
    }
}

impl FxDescriptor for Vignette {
    fn controller(&self) -> &FxController {
        &self.controller
    }

    fn controller_mut(&mut self) -> &mut FxController {
        &mut self.controller
    }

    fn on_pre_render(&mut self, pipeline: &mut dyn FxPipeline) {
        pipeline.set_float1("radius", self.radius);
        pipeline.set_float1("strength", self.strength);
        pipeline.set_float2("position", self.x, self.y);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vignette_defaults() {
        let vignette = Vignette::new(RenderableId(1));
        assert_eq!(vignette.kind(), FxKind::Vignette);
        assert_eq!((vignette.x, vignette.y), (0.5, 0.5));
        assert_eq!(vignette.radius, 0.5);
        assert_eq!(vignette.strength, 0.5);
    }
}
