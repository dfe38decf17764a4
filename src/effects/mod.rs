//! Effects layer
//!
//! Post-processing FX descriptors and the per-renderable lists that hold
//! them. An external render pipeline consumes these lists each frame; this
//! module only keeps the parameters and the bookkeeping.
//!
//! # Architecture
//!
//! - **Types** (`types.rs`): Kind tags, handles and the shared controller state
//! - **Traits** (`traits.rs`): `FxPipeline` uniform sink, `FxDescriptor` callbacks
//! - **Builtin** (`builtin/`): One descriptor per kind, and the `Fx` union
//! - **Registry** (`registry.rs`): Ordered descriptor list for one renderable
//! - **Target** (`target.rs`): `FxTarget` operations and `RenderObject`
//! - **Context** (`context.rs`): Pipelines and textures the FX layer consults
//! - **Uniforms** (`uniforms.rs`): Recording `FxPipeline` implementation
//!
//! # Usage
//!
//! ```
//! use sprite_fx::effects::{FxTarget, RenderObject, RenderSystem, UniformSet};
//! use sprite_fx::FxSettings;
//!
//! let settings = FxSettings::default();
//! let system = RenderSystem::new(&settings);
//! let mut sprite = RenderObject::with_settings(1, "player", &settings);
//!
//! if let Some(blur) = sprite.add_blur_fx(&system) {
//!     blur.strength = 2.0;
//!     blur.set_color(0xff8800);
//! }
//!
//! let mut uniforms = UniformSet::new("FxPipeline");
//! let ran = sprite.fx_registry_mut().dispatch(&mut uniforms);
//! assert_eq!(ran, 1);
//! ```

mod types;
mod traits;
mod registry;
mod target;
mod context;
mod uniforms;
pub mod builtin;

pub use types::*;
pub use traits::*;
pub use registry::*;
pub use target::*;
pub use context::*;
pub use uniforms::*;
pub use builtin::Fx;
