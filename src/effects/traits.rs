//! FX traits
//!
//! This module defines the seams between descriptors and the pipeline:
//! - `FxPipeline` - Uniform sink implemented by the external render pipeline
//! - `FxDescriptor` - Shared behaviour of every effect descriptor
//! - `FxVariant` - Conversion between a concrete descriptor and `Fx`

use super::context::TextureFrame;
use super::types::{FxController, FxId, FxKind, RenderableId};
use super::Fx;

/// Uniform sink for an FX-capable render pipeline
///
/// The pipeline hands itself to each descriptor's lifecycle callbacks so the
/// descriptor can push its parameters as shader inputs.
pub trait FxPipeline {
    /// Pipeline name (for logging)
    fn name(&self) -> &str;

    fn set_float1(&mut self, name: &str, x: f32);

    fn set_float2(&mut self, name: &str, x: f32, y: f32);

    fn set_float3(&mut self, name: &str, x: f32, y: f32, z: f32);

    fn set_float4(&mut self, name: &str, x: f32, y: f32, z: f32, w: f32);

    fn set_int1(&mut self, name: &str, x: i32);

    /// Set a float array uniform (e.g. a color matrix)
    fn set_float_array(&mut self, name: &str, values: &[f32]);

    /// Bind a texture frame to a sampler uniform
    fn set_texture(&mut self, name: &str, frame: &TextureFrame);

    /// Booleans are uploaded as 0/1 integers
    fn set_bool(&mut self, name: &str, value: bool) {
        self.set_int1(name, i32::from(value));
    }
}

/// Shared behaviour of every effect descriptor
pub trait FxDescriptor {
    fn controller(&self) -> &FxController;

    fn controller_mut(&mut self) -> &mut FxController;

    fn kind(&self) -> FxKind {
        self.controller().kind
    }

    fn id(&self) -> FxId {
        self.controller().id
    }

    fn owner(&self) -> Option<RenderableId> {
        self.controller().owner
    }

    fn is_active(&self) -> bool {
        self.controller().active
    }

    fn set_active(&mut self, active: bool) {
        self.controller_mut().active = active;
    }

    /// Detach from the owning renderable and deactivate
    fn destroy(&mut self) {
        self.controller_mut().destroy();
    }

    /// Called before the renderable's texture is copied into the
    /// offscreen buffer.
    ///
    /// Default implementation is a no-op.
    fn on_pre_render(&mut self, _pipeline: &mut dyn FxPipeline) {}

    /// Called before the pipeline issues the draw call.
    ///
    /// Default implementation is a no-op.
    fn on_draw(&mut self, _pipeline: &mut dyn FxPipeline) {}
}

/// A concrete descriptor that can be stored in and recovered from `Fx`
pub trait FxVariant: FxDescriptor + Into<Fx> + Sized {
    fn from_fx(fx: &Fx) -> Option<&Self>;

    fn from_fx_mut(fx: &mut Fx) -> Option<&mut Self>;
}
