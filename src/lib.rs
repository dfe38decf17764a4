//! Sprite FX
//!
//! Post-processing effect descriptors for 2D renderables: a packed-color
//! codec, one descriptor type per effect kind, and per-renderable effect
//! registries that an external shader pipeline reads every frame.

pub mod color;
pub mod effects;
pub mod settings;
pub mod telemetry;

pub use color::{pack_rgb, unpack_rgb, GlColor};
pub use effects::{
    Fx, FxContext, FxDescriptor, FxKind, FxPipeline, FxRegistry, FxTarget, RenderObject,
    RenderSystem,
};
pub use settings::{FxSettings, SettingsError};
