//! Blur effect
//!
//! Gaussian-style blur run as `steps` alternating passes. The quality tier
//! selects the shader variant (more taps at higher tiers).

use serde::{Deserialize, Serialize};

use crate::color::GlColor;
use crate::effects::traits::{FxDescriptor, FxPipeline};
use crate::effects::types::{FxController, FxKind, RenderableId};

/// Blur shader tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum BlurQuality {
    #[default]
    Low,
    Medium,
    High,
}

impl BlurQuality {
    /// Map a quality index to a tier; only 0, 1 and 2 are valid
    pub fn from_index(index: u32) -> Option<BlurQuality> {
        match index {
            0 => Some(BlurQuality::Low),
            1 => Some(BlurQuality::Medium),
            2 => Some(BlurQuality::High),
            _ => None,
        }
    }

    pub fn index(self) -> u32 {
        self as u32
    }

    /// Get display name
    pub fn name(&self) -> &'static str {
        match self {
            BlurQuality::Low => "Low",
            BlurQuality::Medium => "Medium",
            BlurQuality::High => "High",
        }
    }
}

/// Blur descriptor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Blur {
    pub controller: FxController,
    /// Quality tier index (0 = low, 1 = medium, 2 = high)
    pub quality: u32,
    /// Horizontal offset applied per pass
    pub x: f32,
    /// Vertical offset applied per pass
    pub y: f32,
    pub strength: f32,
    /// Number of blur passes
    pub steps: u32,
    pub glcolor: GlColor,
}

impl Blur {
    /// Create a blur with default settings
    pub fn new(owner: RenderableId) -> Self {
        Self {
            controller: FxController::new(FxKind::Blur, owner),
            quality: 0,
            x: 2.0,
            y: 2.0,
            strength: 1.0,
            steps: 4,
            glcolor: GlColor::WHITE,
        }
    }

    /// Tint color as `0xRRGGBB`
    pub fn color(&self) -> u32 {
        self.glcolor.packed()
    }

    pub fn set_color(&mut self, value: u32) {
        self.glcolor.set_packed(value);
    }

    /// The quality tier, or None if `quality` is outside 0..=2
    pub fn quality_tier(&self) -> Option<BlurQuality> {
        BlurQuality::from_index(self.quality)
    }
}

impl FxDescriptor for Blur {
    fn controller(&self) -> &FxController {
        &self.controller
    }

    fn controller_mut(&mut self) -> &mut FxController {
        &mut self.controller
    }

    fn on_pre_render(&mut self, pipeline: &mut dyn FxPipeline) {
        let [r, g, b] = self.glcolor.as_array();
        pipeline.set_int1("quality", self.quality as i32);
        pipeline.set_float2("offset", self.x, self.y);
        pipeline.set_float1("strength", self.strength);
        pipeline.set_float3("color", r, g, b);
        pipeline.set_int1("steps", self.steps as i32);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::effects::uniforms::{UniformSet, UniformValue};

    #[test]
    fn test_blur_defaults() {
        let blur = Blur::new(RenderableId(1));
        assert_eq!(blur.kind(), FxKind::Blur);
        assert_eq!(blur.quality, 0);
        assert_eq!(blur.x, 2.0);
        assert_eq!(blur.y, 2.0);
        assert_eq!(blur.strength, 1.0);
        assert_eq!(blur.steps, 4);
        assert_eq!(blur.color(), 0xFFFFFF);
        assert_eq!(blur.glcolor.as_array(), [1.0, 1.0, 1.0]);
        assert!(blur.is_active());
        assert_eq!(blur.owner(), Some(RenderableId(1)));
    }

    #[test]
    fn test_blur_quality_tiers() {
        let mut blur = Blur::new(RenderableId(1));
        assert_eq!(blur.quality_tier(), Some(BlurQuality::Low));
        blur.quality = 2;
        assert_eq!(blur.quality_tier(), Some(BlurQuality::High));
        // Out-of-range values are stored untouched
        blur.quality = 7;
        assert_eq!(blur.quality, 7);
        assert_eq!(blur.quality_tier(), None);
    }

    #[test]
    fn test_blur_uniforms() {
        let mut blur = Blur::new(RenderableId(1));
        blur.set_color(0xFF0000);
        blur.steps = 8;

        let mut uniforms = UniformSet::new("FxPipeline");
        blur.on_pre_render(&mut uniforms);

        assert_eq!(uniforms.get("offset"), Some(&UniformValue::Vec2([2.0, 2.0])));
        assert_eq!(uniforms.get("color"), Some(&UniformValue::Vec3([1.0, 0.0, 0.0])));
        assert_eq!(uniforms.get_i32("steps"), Some(8));
    }
}
