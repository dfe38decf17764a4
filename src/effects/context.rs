//! Render system context
//!
//! Registry operations never reach the renderer through the renderable.
//! Instead the caller passes an `FxContext` that answers the two questions
//! the FX layer has: which pipeline handles FX, and which texture frame
//! a key names.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::settings::FxSettings;

/// Key of the built-in blank texture
pub const DEFAULT_TEXTURE: &str = "__DEFAULT";
/// Key of the built-in placeholder shown for missing textures
pub const MISSING_TEXTURE: &str = "__MISSING";
/// Key of the built-in solid white texture
pub const WHITE_TEXTURE: &str = "__WHITE";

/// Names a render pipeline
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PipelineHandle(pub String);

impl PipelineHandle {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PipelineHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A named region of a loaded texture
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextureFrame {
    /// Texture key the frame belongs to
    pub texture: String,
    /// Frame name within the texture
    pub frame: String,
    pub width: u32,
    pub height: u32,
}

impl TextureFrame {
    pub fn new(
        texture: impl Into<String>,
        frame: impl Into<String>,
        width: u32,
        height: u32,
    ) -> Self {
        Self {
            texture: texture.into(),
            frame: frame.into(),
            width,
            height,
        }
    }
}

/// Capability handed to FX operations
pub trait FxContext {
    /// The FX-capable pipeline, or None when no renderer is available
    fn fx_pipeline(&self) -> Option<PipelineHandle>;

    /// Resolve a texture key to its base frame
    fn texture_frame(&self, key: &str) -> Option<TextureFrame>;

    /// Texture key displacement effects use when none is given
    fn default_displacement_texture(&self) -> &str {
        WHITE_TEXTURE
    }
}

/// Pipelines known to the renderer
#[derive(Debug, Clone, Default)]
pub struct PipelineCatalog {
    pipelines: HashMap<String, PipelineHandle>,
    fx_pipeline: Option<String>,
}

impl PipelineCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a pipeline by name
    pub fn register(&mut self, name: impl Into<String>) -> PipelineHandle {
        let name = name.into();
        let handle = PipelineHandle::new(name.clone());
        self.pipelines.insert(name, handle.clone());
        handle
    }

    /// Mark a registered pipeline as the one FX-enabled objects render with.
    ///
    /// Returns false if no pipeline of that name is registered.
    pub fn set_fx_pipeline(&mut self, name: &str) -> bool {
        if self.pipelines.contains_key(name) {
            self.fx_pipeline = Some(name.to_string());
            true
        } else {
            false
        }
    }

    pub fn get(&self, name: &str) -> Option<&PipelineHandle> {
        self.pipelines.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.pipelines.contains_key(name)
    }

    pub fn fx_pipeline(&self) -> Option<&PipelineHandle> {
        self.fx_pipeline.as_deref().and_then(|name| self.pipelines.get(name))
    }

    pub fn len(&self) -> usize {
        self.pipelines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pipelines.is_empty()
    }
}

/// Loaded texture frames by key
#[derive(Debug, Clone, Default)]
pub struct TextureCache {
    frames: HashMap<String, TextureFrame>,
}

impl TextureCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cache with the built-in `__DEFAULT`, `__MISSING` and `__WHITE` textures
    pub fn with_builtins() -> Self {
        let mut cache = Self::new();
        cache.add(DEFAULT_TEXTURE, 32, 32);
        cache.add(MISSING_TEXTURE, 32, 32);
        cache.add(WHITE_TEXTURE, 4, 4);
        cache
    }

    /// Add (or replace) a texture; its base frame is named after the key
    pub fn add(&mut self, key: impl Into<String>, width: u32, height: u32) {
        let key = key.into();
        let frame = TextureFrame::new(key.clone(), "__BASE", width, height);
        self.frames.insert(key, frame);
    }

    pub fn remove(&mut self, key: &str) -> bool {
        self.frames.remove(key).is_some()
    }

    pub fn get(&self, key: &str) -> Option<&TextureFrame> {
        self.frames.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.frames.contains_key(key)
    }
}

/// The renderer-side state the FX layer consults
#[derive(Debug, Clone)]
pub struct RenderSystem {
    pub pipelines: PipelineCatalog,
    pub textures: TextureCache,
    default_pipeline: Option<PipelineHandle>,
    displacement_texture: String,
}

impl RenderSystem {
    /// Create a render system with the pipelines named in `settings`
    pub fn new(settings: &FxSettings) -> Self {
        let mut pipelines = PipelineCatalog::new();
        let default_pipeline = pipelines.register(settings.default_pipeline.clone());
        pipelines.register(settings.fx_pipeline.clone());
        pipelines.set_fx_pipeline(&settings.fx_pipeline);

        tracing::debug!(
            fx_pipeline = %settings.fx_pipeline,
            default_pipeline = %settings.default_pipeline,
            "Render system created"
        );

        Self {
            pipelines,
            textures: TextureCache::with_builtins(),
            default_pipeline: Some(default_pipeline),
            displacement_texture: settings.displacement_texture.clone(),
        }
    }

    /// A render system without any pipelines (FX unavailable)
    pub fn headless() -> Self {
        Self {
            pipelines: PipelineCatalog::new(),
            textures: TextureCache::with_builtins(),
            default_pipeline: None,
            displacement_texture: WHITE_TEXTURE.to_string(),
        }
    }

    /// Pipeline renderables fall back to when FX is disabled
    pub fn default_pipeline(&self) -> Option<&PipelineHandle> {
        self.default_pipeline.as_ref()
    }
}

impl Default for RenderSystem {
    fn default() -> Self {
        Self::headless()
    }
}

impl FxContext for RenderSystem {
    fn fx_pipeline(&self) -> Option<PipelineHandle> {
        self.pipelines.fx_pipeline().cloned()
    }

    fn texture_frame(&self, key: &str) -> Option<TextureFrame> {
        self.textures.get(key).cloned()
    }

    fn default_displacement_texture(&self) -> &str {
        &self.displacement_texture
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_system_from_settings() {
        let settings = FxSettings::default();
        let system = RenderSystem::new(&settings);

        assert_eq!(system.pipelines.len(), 2);
        assert_eq!(
            system.fx_pipeline().map(|p| p.0),
            Some(settings.fx_pipeline.clone())
        );
        assert_eq!(
            system.default_pipeline().map(|p| p.name().to_string()),
            Some(settings.default_pipeline)
        );
        assert!(system.texture_frame(WHITE_TEXTURE).is_some());
        assert!(system.texture_frame("nope").is_none());
        assert_eq!(system.default_displacement_texture(), WHITE_TEXTURE);
    }

    #[test]
    fn test_headless_has_no_fx_pipeline() {
        let system = RenderSystem::headless();
        assert!(system.pipelines.is_empty());
        assert!(system.fx_pipeline().is_none());
        assert!(system.default_pipeline().is_none());
    }

    #[test]
    fn test_fx_pipeline_must_be_registered() {
        let mut catalog = PipelineCatalog::new();
        assert!(!catalog.set_fx_pipeline("FxPipeline"));
        catalog.register("FxPipeline");
        assert!(catalog.set_fx_pipeline("FxPipeline"));
        assert_eq!(catalog.fx_pipeline().map(|p| p.name()), Some("FxPipeline"));
    }

    #[test]
    fn test_texture_cache() {
        let mut cache = TextureCache::new();
        cache.add("noise", 256, 256);
        let frame = cache.get("noise").unwrap();
        assert_eq!(frame.texture, "noise");
        assert_eq!((frame.width, frame.height), (256, 256));
        assert!(cache.remove("noise"));
        assert!(!cache.contains("noise"));
    }
}
