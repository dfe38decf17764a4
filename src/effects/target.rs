//! FX operations for renderables
//!
//! Any renderable that owns an `FxRegistry` and a pipeline slot gets the
//! full set of FX operations by implementing the five required methods of
//! `FxTarget`. All operations are bookkeeping; none of them touch the GPU.
//!
//! Failures are silent: enabling FX without an FX pipeline, or
//! adding an effect in that state, does nothing and reports it through the
//! return value.

use super::builtin::{
    Barrel, Bloom, Blur, Bokeh, Circle, ColorMatrix, Displacement, Glow, Gradient, Pixelate, Shadow,
    Shine, Vignette, Wipe,
};
use super::context::{FxContext, PipelineHandle};
use super::registry::FxRegistry;
use super::traits::{FxDescriptor, FxVariant};
use super::types::{FxId, RenderableId};
use super::Fx;
use crate::settings::FxSettings;

/// A renderable that can carry FX
pub trait FxTarget {
    fn renderable_id(&self) -> RenderableId;

    fn fx_registry(&self) -> &FxRegistry;

    fn fx_registry_mut(&mut self) -> &mut FxRegistry;

    /// Switch the renderable to the given pipeline
    fn set_pipeline(&mut self, pipeline: PipelineHandle);

    /// Return the renderable to its default (non-FX) pipeline
    fn reset_pipeline(&mut self);

    /// Set the offscreen padding (no validation)
    fn set_fx_padding(&mut self, padding: f32) {
        self.fx_registry_mut().set_padding(padding);
    }

    /// Select the FX pipeline and allocate the effect list.
    ///
    /// Returns false, changing nothing, if `ctx` has no FX pipeline.
    fn enable_fx(&mut self, ctx: &dyn FxContext, padding: Option<f32>) -> bool {
        let Some(pipeline) = ctx.fx_pipeline() else {
            tracing::debug!(
                target_id = %self.renderable_id(),
                "No FX pipeline available, FX not enabled"
            );
            return false;
        };

        tracing::debug!(target_id = %self.renderable_id(), pipeline = %pipeline, "FX enabled");
        self.set_pipeline(pipeline);

        let registry = self.fx_registry_mut();
        registry.enable();
        if let Some(padding) = padding {
            registry.set_padding(padding);
        }
        true
    }

    /// Reset to the default pipeline, optionally clearing all effects.
    ///
    /// Kept effects stay listed but are not drawn until FX is enabled again.
    fn disable_fx(&mut self, clear: bool) {
        self.reset_pipeline();
        self.fx_registry_mut().deactivate();
        if clear {
            self.clear_fx();
        }
        tracing::debug!(target_id = %self.renderable_id(), clear, "FX disabled");
    }

    /// Remove every effect. The pipeline selection is left as is.
    ///
    /// Returns how many effects were removed.
    fn clear_fx(&mut self) -> usize {
        let removed = self.fx_registry_mut().clear();
        if removed > 0 {
            tracing::debug!(target_id = %self.renderable_id(), removed, "FX cleared");
        }
        removed
    }

    /// Remove one effect by identity, returning it detached
    fn remove_fx(&mut self, id: FxId) -> Option<Fx> {
        self.fx_registry_mut().remove(id)
    }

    /// Append an already-built descriptor, enabling FX first if it is off.
    ///
    /// The descriptor is re-owned by this renderable.
    fn add_fx<T: FxVariant>(&mut self, ctx: &dyn FxContext, mut fx: T) -> Option<&mut T>
    where
        Self: Sized,
    {
        if !self.fx_registry().is_active() && !self.enable_fx(ctx, None) {
            return None;
        }
        fx.controller_mut().owner = Some(self.renderable_id());
        let added = self.fx_registry_mut().push(fx)?;
        tracing::trace!(fx = ?added.id(), kind = %added.kind(), "FX added");
        Some(added)
    }

    fn add_barrel_fx(&mut self, ctx: &dyn FxContext) -> Option<&mut Barrel>
    where
        Self: Sized,
    {
        let fx = Barrel::new(self.renderable_id());
        self.add_fx(ctx, fx)
    }

    fn add_bloom_fx(&mut self, ctx: &dyn FxContext) -> Option<&mut Bloom>
    where
        Self: Sized,
    {
        let fx = Bloom::new(self.renderable_id());
        self.add_fx(ctx, fx)
    }

    fn add_blur_fx(&mut self, ctx: &dyn FxContext) -> Option<&mut Blur>
    where
        Self: Sized,
    {
        let fx = Blur::new(self.renderable_id());
        self.add_fx(ctx, fx)
    }

    fn add_bokeh_fx(&mut self, ctx: &dyn FxContext) -> Option<&mut Bokeh>
    where
        Self: Sized,
    {
        let fx = Bokeh::new(self.renderable_id());
        self.add_fx(ctx, fx)
    }

    fn add_tilt_shift_fx(&mut self, ctx: &dyn FxContext) -> Option<&mut Bokeh>
    where
        Self: Sized,
    {
        let fx = Bokeh::tilt_shift(self.renderable_id());
        self.add_fx(ctx, fx)
    }

    fn add_circle_fx(&mut self, ctx: &dyn FxContext) -> Option<&mut Circle>
    where
        Self: Sized,
    {
        let fx = Circle::new(self.renderable_id());
        self.add_fx(ctx, fx)
    }

    fn add_color_matrix_fx(&mut self, ctx: &dyn FxContext) -> Option<&mut ColorMatrix>
    where
        Self: Sized,
    {
        let fx = ColorMatrix::new(self.renderable_id());
        self.add_fx(ctx, fx)
    }

    /// Add a displacement using the texture stored under `texture`
    fn add_displacement_fx(
        &mut self,
        ctx: &dyn FxContext,
        texture: &str,
    ) -> Option<&mut Displacement>
    where
        Self: Sized,
    {
        let fx = Displacement::with_texture(self.renderable_id(), ctx, texture);
        self.add_fx(ctx, fx)
    }

    fn add_glow_fx(&mut self, ctx: &dyn FxContext) -> Option<&mut Glow>
    where
        Self: Sized,
    {
        let fx = Glow::new(self.renderable_id());
        self.add_fx(ctx, fx)
    }

    fn add_gradient_fx(&mut self, ctx: &dyn FxContext) -> Option<&mut Gradient>
    where
        Self: Sized,
    {
        let fx = Gradient::new(self.renderable_id());
        self.add_fx(ctx, fx)
    }

    fn add_pixelate_fx(&mut self, ctx: &dyn FxContext) -> Option<&mut Pixelate>
    where
        Self: Sized,
    {
        let fx = Pixelate::new(self.renderable_id());
        self.add_fx(ctx, fx)
    }

    fn add_shadow_fx(&mut self, ctx: &dyn FxContext) -> Option<&mut Shadow>
    where
        Self: Sized,
    {
        let fx = Shadow::new(self.renderable_id());
        self.add_fx(ctx, fx)
    }

    fn add_shine_fx(&mut self, ctx: &dyn FxContext) -> Option<&mut Shine>
    where
        Self: Sized,
    {
        let fx = Shine::new(self.renderable_id());
        self.add_fx(ctx, fx)
    }

    fn add_vignette_fx(&mut self, ctx: &dyn FxContext) -> Option<&mut Vignette>
    where
        Self: Sized,
    {
        let fx = Vignette::new(self.renderable_id());
        self.add_fx(ctx, fx)
    }

    fn add_wipe_fx(&mut self, ctx: &dyn FxContext) -> Option<&mut Wipe>
    where
        Self: Sized,
    {
        let fx = Wipe::new(self.renderable_id());
        self.add_fx(ctx, fx)
    }
}

/// A plain renderable with an FX registry and a pipeline slot
#[derive(Debug, Clone)]
pub struct RenderObject {
    /// Unique identifier for this object
    pub id: RenderableId,
    /// Human-readable name
    pub name: String,
    /// Pipeline currently used to draw the object
    pipeline: Option<PipelineHandle>,
    /// Pipeline restored by `reset_pipeline`
    default_pipeline: Option<PipelineHandle>,
    fx: FxRegistry,
}

impl RenderObject {
    /// Create an object with no pipeline assigned
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id: RenderableId(id),
            name: name.into(),
            pipeline: None,
            default_pipeline: None,
            fx: FxRegistry::new(),
        }
    }

    /// Create an object on the default pipeline named in `settings`
    pub fn with_settings(id: u32, name: impl Into<String>, settings: &FxSettings) -> Self {
        let default_pipeline = PipelineHandle::new(settings.default_pipeline.clone());
        let mut object = Self::new(id, name);
        object.pipeline = Some(default_pipeline.clone());
        object.default_pipeline = Some(default_pipeline);
        object.fx.set_padding(settings.default_padding);
        object
    }

    pub fn pipeline(&self) -> Option<&PipelineHandle> {
        self.pipeline.as_ref()
    }

    pub fn default_pipeline(&self) -> Option<&PipelineHandle> {
        self.default_pipeline.as_ref()
    }

    /// Tear the object down; its effects are destroyed with it
    pub fn destroy(&mut self) {
        self.fx.reset();
        self.pipeline = None;
    }
}

impl FxTarget for RenderObject {
    fn renderable_id(&self) -> RenderableId {
        self.id
    }

    fn fx_registry(&self) -> &FxRegistry {
        &self.fx
    }

    fn fx_registry_mut(&mut self) -> &mut FxRegistry {
        &mut self.fx
    }

    fn set_pipeline(&mut self, pipeline: PipelineHandle) {
        self.pipeline = Some(pipeline);
    }

    fn reset_pipeline(&mut self) {
        self.pipeline = self.default_pipeline.clone();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::effects::context::RenderSystem;
    use crate::effects::types::FxKind;

    fn setup() -> (RenderSystem, RenderObject) {
        let settings = FxSettings::default();
        (RenderSystem::new(&settings), RenderObject::with_settings(1, "sprite", &settings))
    }

    #[test]
    fn test_enable_without_pipeline_is_noop() {
        let system = RenderSystem::headless();
        let mut object = RenderObject::new(1, "sprite");

        assert!(!object.enable_fx(&system, Some(4.0)));
        assert!(!object.fx_registry().is_enabled());
        assert!(object.pipeline().is_none());
        assert_eq!(object.fx_registry().padding(), 0.0);
        assert!(object.add_blur_fx(&system).is_none());
        assert!(object.fx_registry().is_empty());
    }

    #[test]
    fn test_enable_selects_fx_pipeline() {
        let (system, mut object) = setup();
        assert_eq!(object.pipeline().map(|p| p.name()), Some("MultiPipeline"));

        assert!(object.enable_fx(&system, Some(16.0)));
        assert!(object.fx_registry().is_enabled());
        assert_eq!(object.pipeline().map(|p| p.name()), Some("FxPipeline"));
        assert_eq!(object.fx_registry().padding(), 16.0);

        // Enabling again keeps the padding when none is given
        assert!(object.enable_fx(&system, None));
        assert_eq!(object.fx_registry().padding(), 16.0);
    }

    #[test]
    fn test_add_enables_lazily() {
        let (system, mut object) = setup();
        let glow = object.add_glow_fx(&system).unwrap();
        glow.set_color(0x00ff00);

        assert!(object.fx_registry().is_enabled());
        assert_eq!(object.pipeline().map(|p| p.name()), Some("FxPipeline"));
        let stored = object.fx_registry().effects()[0].downcast_ref::<Glow>().unwrap();
        assert_eq!(stored.color(), 0x00ff00);
        assert_eq!(stored.owner(), Some(RenderableId(1)));
    }

    #[test]
    fn test_add_fx_reowns_descriptor() {
        let (system, mut object) = setup();
        let pixelate = object.add_fx(&system, Pixelate::new(RenderableId(42))).unwrap();
        assert_eq!(pixelate.owner(), Some(RenderableId(1)));
    }

    #[test]
    fn test_add_displacement_missing_texture() {
        let (system, mut object) = setup();
        let displacement = object.add_displacement_fx(&system, "not-loaded").unwrap();
        assert!(displacement.texture.is_none());
        assert_eq!(object.fx_registry().len(), 1);
    }

    #[test]
    fn test_disable_with_clear() {
        let (system, mut object) = setup();
        object.add_blur_fx(&system);
        object.add_shadow_fx(&system);

        object.disable_fx(true);
        assert_eq!(object.pipeline().map(|p| p.name()), Some("MultiPipeline"));
        assert!(object.fx_registry().is_empty());
    }

    #[test]
    fn test_disable_without_clear() {
        let (system, mut object) = setup();
        object.add_blur_fx(&system);
        object.add_shadow_fx(&system);

        object.disable_fx(false);
        assert_eq!(object.pipeline().map(|p| p.name()), Some("MultiPipeline"));
        assert_eq!(object.fx_registry().len(), 2);
    }

    #[test]
    fn test_add_after_disable_reenables() {
        let (system, mut object) = setup();
        object.add_blur_fx(&system);

        object.disable_fx(true);
        assert!(!object.fx_registry().is_active());
        object.add_glow_fx(&system);
        assert!(object.fx_registry().is_active());
        assert_eq!(object.pipeline().map(|p| p.name()), Some("FxPipeline"));
        assert_eq!(object.fx_registry().len(), 1);

        object.disable_fx(false);
        let shine = object.add_shine_fx(&system);
        assert!(shine.is_some());
        assert_eq!(object.pipeline().map(|p| p.name()), Some("FxPipeline"));
        assert_eq!(object.fx_registry().len(), 2);
    }

    #[test]
    fn test_clear_fx_keeps_pipeline() {
        let (system, mut object) = setup();
        object.add_wipe_fx(&system);
        assert_eq!(object.clear_fx(), 1);
        assert_eq!(object.pipeline().map(|p| p.name()), Some("FxPipeline"));
    }

    #[test]
    fn test_remove_fx() {
        let (system, mut object) = setup();
        let id = object.add_vignette_fx(&system).unwrap().id();
        object.add_barrel_fx(&system);

        let removed = object.remove_fx(id).unwrap();
        assert_eq!(removed.kind(), FxKind::Vignette);
        assert_eq!(object.fx_registry().len(), 1);
        assert!(object.remove_fx(id).is_none());
    }

    #[test]
    fn test_destroy_drops_effects() {
        let (system, mut object) = setup();
        object.add_bloom_fx(&system);
        object.destroy();
        assert!(!object.fx_registry().is_enabled());
        assert!(object.pipeline().is_none());
    }

    #[test]
    fn test_settings_padding_applied() {
        let settings = FxSettings {
            default_padding: 2.0,
            ..Default::default()
        };
        let object = RenderObject::with_settings(7, "padded", &settings);
        assert_eq!(object.fx_registry().padding(), 2.0);
    }
}
