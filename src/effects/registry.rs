//! Per-renderable FX registry
//!
//! Holds the ordered descriptor list for one renderable. Insertion order is
//! draw order. The list is unallocated until FX is first enabled on the
//! renderable, which lets callers tell "never enabled" from "enabled but
//! empty".

use serde::{Deserialize, Serialize};

use super::traits::{FxDescriptor, FxPipeline, FxVariant};
use super::types::{FxId, FxKind};
use super::Fx;

/// Ordered effect list plus offscreen padding for one renderable
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FxRegistry {
    /// Descriptors in draw order (None until enabled)
    #[serde(default)]
    effects: Option<Vec<Fx>>,
    /// Extra margin, in pixels, reserved around the offscreen buffer
    #[serde(default)]
    padding: f32,
    /// Next descriptor id
    #[serde(default)]
    next_id: u32,
    /// Whether the owner is currently drawn with the FX pipeline
    #[serde(default)]
    active: bool,
}

impl FxRegistry {
    /// Create a registry with no list allocated
    pub fn new() -> Self {
        Self {
            effects: None,
            padding: 0.0,
            next_id: 1,
            active: false,
        }
    }

    /// Whether the descriptor list has been allocated
    pub fn is_enabled(&self) -> bool {
        self.effects.is_some()
    }

    /// Whether FX is switched on: the list exists and the owner uses the FX pipeline
    pub fn is_active(&self) -> bool {
        self.active && self.effects.is_some()
    }

    /// Allocate the descriptor list if absent and mark FX as switched on
    pub fn enable(&mut self) {
        if self.effects.is_none() {
            self.effects = Some(Vec::new());
        }
        self.active = true;
    }

    /// Mark FX as switched off, keeping the list and its descriptors
    pub fn deactivate(&mut self) {
        self.active = false;
    }

    /// Drop the list and return to the never-enabled state
    pub fn reset(&mut self) {
        if let Some(effects) = self.effects.as_mut() {
            for fx in effects.iter_mut() {
                fx.destroy();
            }
        }
        self.effects = None;
        self.active = false;
    }

    pub fn padding(&self) -> f32 {
        self.padding
    }

    /// Store the padding as given (no validation)
    pub fn set_padding(&mut self, padding: f32) {
        self.padding = padding;
    }

    /// Descriptors in draw order (empty when not enabled)
    pub fn effects(&self) -> &[Fx] {
        self.effects.as_deref().unwrap_or(&[])
    }

    pub fn effects_mut(&mut self) -> &mut [Fx] {
        self.effects.as_deref_mut().unwrap_or(&mut [])
    }

    pub fn len(&self) -> usize {
        self.effects().len()
    }

    pub fn is_empty(&self) -> bool {
        self.effects().is_empty()
    }

    /// Append a descriptor, assigning it an id.
    ///
    /// Returns None (dropping the descriptor) if the list is not allocated.
    pub fn push<T: FxVariant>(&mut self, fx: T) -> Option<&mut T> {
        if self.next_id == 0 {
            self.next_id = 1;
        }
        let id = FxId(self.next_id);
        let effects = self.effects.as_mut()?;
        self.next_id += 1;

        let mut fx: Fx = fx.into();
        fx.controller_mut().id = id;
        effects.push(fx);
        effects.last_mut().and_then(T::from_fx_mut)
    }

    /// Get a descriptor by id
    pub fn get(&self, id: FxId) -> Option<&Fx> {
        self.effects().iter().find(|fx| fx.id() == id)
    }

    /// Get a mutable descriptor by id
    pub fn get_mut(&mut self, id: FxId) -> Option<&mut Fx> {
        self.effects_mut().iter_mut().find(|fx| fx.id() == id)
    }

    /// Remove a descriptor by id; the returned descriptor is detached
    pub fn remove(&mut self, id: FxId) -> Option<Fx> {
        let effects = self.effects.as_mut()?;
        let pos = effects.iter().position(|fx| fx.id() == id)?;
        let mut fx = effects.remove(pos);
        fx.destroy();
        tracing::debug!(fx = ?id, kind = %fx.kind(), "FX removed");
        Some(fx)
    }

    /// Remove every descriptor of a kind, returning them detached in draw order
    pub fn remove_kind(&mut self, kind: FxKind) -> Vec<Fx> {
        let Some(effects) = self.effects.as_mut() else {
            return Vec::new();
        };
        let (mut removed, kept): (Vec<Fx>, Vec<Fx>) =
            std::mem::take(effects).into_iter().partition(|fx| fx.kind() == kind);
        *effects = kept;

        for fx in removed.iter_mut() {
            let id = fx.id();
            fx.destroy();
            tracing::debug!(fx = ?id, %kind, "FX removed");
        }
        removed
    }

    /// Empty the list (it stays allocated), returning how many were removed
    pub fn clear(&mut self) -> usize {
        let Some(effects) = self.effects.as_mut() else {
            return 0;
        };
        let removed = effects.len();
        for fx in effects.iter_mut() {
            fx.destroy();
        }
        effects.clear();
        removed
    }

    /// Move a descriptor to a new draw position
    pub fn move_to(&mut self, id: FxId, new_index: usize) -> bool {
        let Some(effects) = self.effects.as_mut() else {
            return false;
        };
        if let Some(current_pos) = effects.iter().position(|fx| fx.id() == id) {
            let fx = effects.remove(current_pos);
            let insert_pos = new_index.min(effects.len());
            effects.insert(insert_pos, fx);
            true
        } else {
            false
        }
    }

    /// Active descriptors in draw order
    pub fn active_effects(&self) -> impl Iterator<Item = &Fx> {
        self.effects().iter().filter(|fx| fx.is_active())
    }

    /// Run both lifecycle callbacks on each active descriptor in draw order,
    /// the way a pipeline does once per frame. Returns the number run.
    pub fn dispatch(&mut self, pipeline: &mut dyn FxPipeline) -> usize {
        let mut count = 0;
        for fx in self.effects_mut().iter_mut().filter(|fx| fx.is_active()) {
            fx.on_pre_render(pipeline);
            fx.on_draw(pipeline);
            count += 1;
        }
        count
    }
}
