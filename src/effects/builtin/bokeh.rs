//! Bokeh and tilt-shift effects
//!
//! Tilt-shift is a bokeh with `is_tilt_shift` set: the blur is applied in
//! bands above and below the focus line instead of around a focal disc.

use serde::{Deserialize, Serialize};

use crate::effects::traits::{FxDescriptor, FxPipeline};
use crate::effects::types::{FxController, FxKind, RenderableId};

/// Bokeh descriptor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bokeh {
    pub controller: FxController,
    pub radius: f32,
    pub amount: f32,
    pub contrast: f32,
    pub is_tilt_shift: bool,
    /// Tilt-shift blur amount on each axis
    pub blur_x: f32,
    pub blur_y: f32,
    /// Tilt-shift strength
    pub strength: f32,
}

impl Bokeh {
    pub fn new(owner: RenderableId) -> Self {
        Self {
            controller: FxController::new(FxKind::Bokeh, owner),
            radius: 0.5,
            amount: 1.0,
            contrast: 0.2,
            is_tilt_shift: false,
            blur_x: 1.0,
            blur_y: 1.0,
            strength: 1.0,
        }
    }

    /// Create a tilt-shift variant with default settings
    pub fn tilt_shift(owner: RenderableId) -> Self {
        Self {
            is_tilt_shift: true,
            ..Self::new(owner)
        }
    }
}

impl FxDescriptor for Bokeh {
    fn controller(&self) -> &FxController {
        &self.controller
    }

    fn controller_mut(&mut self) -> &mut FxController {
        &mut self.controller
    }

    fn on_pre_render(&mut self, pipeline: &mut dyn FxPipeline) {
        pipeline.set_float1("radius", self.radius);
        pipeline.set_float1("amount", self.amount);
        pipeline.set_float1("contrast", self.contrast);
        pipeline.set_float1("strength", self.strength);
        pipeline.set_float2("blur", self.blur_x, self.blur_y);
        pipeline.set_bool("isTiltShift", self.is_tilt_shift);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bokeh_defaults() {
        let bokeh = Bokeh::new(RenderableId(1));
        assert_eq!(bokeh.kind(), FxKind::Bokeh);
        assert_eq!(bokeh.radius, 0.5);
        assert_eq!(bokeh.amount, 1.0);
        assert_eq!(bokeh.contrast, 0.2);
        assert!(!bokeh.is_tilt_shift);
        assert_eq!((bokeh.blur_x, bokeh.blur_y), (1.0, 1.0));
        assert_eq!(bokeh.strength, 1.0);
    }

    #[test]
    fn test_tilt_shift_is_bokeh() {
        let tilt = Bokeh::tilt_shift(RenderableId(1));
        assert_eq!(tilt.kind(), FxKind::Bokeh);
        assert!(tilt.is_tilt_shift);
        assert_eq!(tilt.radius, 0.5);
    }
}
