//! Wipe effect
//!
//! Wipes (or reveals) the renderable along one axis as `progress` goes
//! from 0 to 1. `axis` 0 is horizontal, 1 vertical; `direction` 0 runs
//! from the low edge to the high edge, 1 the other way.

use serde::{Deserialize, Serialize};

use crate::effects::traits::{FxDescriptor, FxPipeline};
use crate::effects::types::{FxController, FxKind, RenderableId};

/// Wipe descriptor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Wipe {
    pub controller: FxController,
    pub wipe_width: f32,
    pub direction: u32,
    pub axis: u32,
    pub progress: f32,
    pub reveal: bool,
}

impl Wipe {
    pub fn new(owner: RenderableId) -> Self {
        Self {
            controller: FxController::new(FxKind::Wipe, owner),
            wipe_width: 0.1,
            direction: 0,
            axis: 0,
            progress: 0.0,
            reveal: false,
        }
    }

    pub fn set_left_to_right(&mut self) -> &mut Self {
        self.direction = 0;
        self.axis = 0;
        self
    }

    pub fn set_right_to_left(&mut self) -> &mut Self {
        self.direction = 1;
        self.axis = 0;
        self
    }

    pub fn set_top_to_bottom(&mut self) -> &mut Self {
        self.direction = 1;
        self.axis = 1;
        self
    }

    pub fn set_bottom_to_top(&mut self) -> &mut Self {
        self.direction = 0;
        self.axis = 1;
        self
    }

    /// Hide the renderable as progress advances
    pub fn set_wipe_effect(&mut self) -> &mut Self {
        self.reveal = false;
        self
    }

    /// Show the renderable as progress advances
    pub fn set_reveal_effect(&mut self) -> &mut Self {
        self.reveal = true;
        self
    }
}

impl FxDescriptor for Wipe {
    fn controller(&self) -> &FxController {
        &self.controller
    }

    fn controller_mut(&mut self) -> &mut FxController {
        &mut self.controller
    }

    fn on_pre_render(&mut self, pipeline: &mut dyn FxPipeline) {
        pipeline.set_float4(
            "config",
            self.progress,
            self.wipe_width,
            self.direction as f32,
            self.axis as f32,
        );
        pipeline.set_bool("reveal", self.reveal);
    }
}
