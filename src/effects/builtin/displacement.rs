//! Displacement effect
//!
//! Offsets each pixel by the red/green channels of a displacement texture.
//! The texture is resolved by key through the `FxContext`; an unknown key
//! leaves it unset and the pipeline decides what to do with that.

use serde::{Deserialize, Serialize};

use crate::effects::context::{FxContext, TextureFrame};
use crate::effects::traits::{FxDescriptor, FxPipeline};
use crate::effects::types::{FxController, FxKind, RenderableId};

/// Displacement descriptor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Displacement {
    pub controller: FxController,
    /// Texture key the displacement map was requested by
    pub texture_key: String,
    /// Resolved frame (runtime only)
    #[serde(skip)]
    pub texture: Option<TextureFrame>,
    pub x: f32,
    pub y: f32,
}

impl Displacement {
    /// Create a displacement using the context's default texture
    pub fn new(owner: RenderableId, ctx: &dyn FxContext) -> Self {
        Self::with_texture(owner, ctx, ctx.default_displacement_texture())
    }

    /// Create a displacement using the texture stored under `key`
    pub fn with_texture(owner: RenderableId, ctx: &dyn FxContext, key: &str) -> Self {
        let mut displacement = Self {
            controller: FxController::new(FxKind::Displacement, owner),
            texture_key: String::new(),
            texture: None,
            x: 0.005,
            y: 0.005,
        };
        displacement.set_texture(ctx, key);
        displacement
    }

    /// Switch to the texture stored under `key`.
    ///
    /// Returns false (leaving the texture unset) if the key is unknown.
    pub fn set_texture(&mut self, ctx: &dyn FxContext, key: &str) -> bool {
        self.texture_key = key.to_string();
        self.texture = ctx.texture_frame(key);
        if self.texture.is_none() {
            tracing::debug!(texture = key, "Displacement texture not found");
        }
        self.texture.is_some()
    }

    /// Re-resolve the stored key (e.g. after deserializing)
    pub fn resolve(&mut self, ctx: &dyn FxContext) -> bool {
        let key = std::mem::take(&mut self.texture_key);
        self.set_texture(ctx, &key)
    }
}

impl FxDescriptor for Displacement {
    fn controller(&self) -> &FxController {
        &self.controller
    }

    fn controller_mut(&mut self) -> &mut FxController {
        &mut self.controller
    }

    fn on_pre_render(&mut self, pipeline: &mut dyn FxPipeline) {
        pipeline.set_float2("amount", self.x, self.y);
        if let Some(frame) = &self.texture {
            pipeline.set_texture("displacementSampler", frame);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::effects::context::{RenderSystem, WHITE_TEXTURE};
    use crate::effects::uniforms::UniformSet;

    #[test]
    fn test_displacement_defaults() {
        let system = RenderSystem::headless();
        let displacement = Displacement::new(RenderableId(1), &system);
        assert_eq!(displacement.kind(), FxKind::Displacement);
        assert_eq!(displacement.texture_key, WHITE_TEXTURE);
        assert!(displacement.texture.is_some());
        assert_eq!((displacement.x, displacement.y), (0.005, 0.005));
    }

    #[test]
    fn test_missing_texture_left_unset() {
        let mut system = RenderSystem::headless();
        let mut displacement = Displacement::with_texture(RenderableId(1), &system, "ripples");
        assert!(displacement.texture.is_none());
        assert_eq!(displacement.texture_key, "ripples");

        // No sampler is bound while the texture is unset
        let mut uniforms = UniformSet::new("FxPipeline");
        displacement.on_pre_render(&mut uniforms);
        assert!(uniforms.get("displacementSampler").is_none());

        system.textures.add("ripples", 128, 128);
        assert!(displacement.resolve(&system));
        assert_eq!(displacement.texture_key, "ripples");
        assert_eq!(displacement.texture.as_ref().map(|f| f.width), Some(128));
    }
}
