//! Core FX data types
//!
//! Kind tags, handles and the controller state shared by every descriptor.
//! These are plain data; nothing here touches the GPU.

use serde::{Deserialize, Serialize};

/// Effect kind tag
///
/// The numeric values are stable and match the tags pipelines switch on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum FxKind {
    Glow = 4,
    Shadow = 5,
    Pixelate = 6,
    Vignette = 7,
    Shine = 8,
    Blur = 9,
    Gradient = 12,
    Bloom = 13,
    ColorMatrix = 14,
    Circle = 15,
    Barrel = 16,
    Displacement = 17,
    Wipe = 18,
    Bokeh = 19,
}

impl FxKind {
    /// Get all kinds in tag order
    pub fn all() -> &'static [FxKind] {
        &[
            FxKind::Glow,
            FxKind::Shadow,
            FxKind::Pixelate,
            FxKind::Vignette,
            FxKind::Shine,
            FxKind::Blur,
            FxKind::Gradient,
            FxKind::Bloom,
            FxKind::ColorMatrix,
            FxKind::Circle,
            FxKind::Barrel,
            FxKind::Displacement,
            FxKind::Wipe,
            FxKind::Bokeh,
        ]
    }

    /// Numeric tag
    pub fn tag(self) -> u8 {
        self as u8
    }

    /// Look up a kind by its numeric tag
    pub fn from_tag(tag: u8) -> Option<FxKind> {
        Self::all().iter().copied().find(|k| k.tag() == tag)
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            FxKind::Glow => "Glow",
            FxKind::Shadow => "Shadow",
            FxKind::Pixelate => "Pixelate",
            FxKind::Vignette => "Vignette",
            FxKind::Shine => "Shine",
            FxKind::Blur => "Blur",
            FxKind::Gradient => "Gradient",
            FxKind::Bloom => "Bloom",
            FxKind::ColorMatrix => "Color Matrix",
            FxKind::Circle => "Circle",
            FxKind::Barrel => "Barrel",
            FxKind::Displacement => "Displacement",
            FxKind::Wipe => "Wipe",
            FxKind::Bokeh => "Bokeh",
        }
    }
}

impl std::fmt::Display for FxKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Handle to the renderable that owns a descriptor.
///
/// This is a non-owning back-reference; the descriptor never reaches
/// the renderable through it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RenderableId(pub u32);

impl std::fmt::Display for RenderableId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Renderable {}", self.0)
    }
}

/// Identity of a descriptor within its registry.
///
/// Zero means "not yet inserted"; registries hand out ids from 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct FxId(pub u32);

impl FxId {
    pub const UNASSIGNED: FxId = FxId(0);

    pub fn is_assigned(&self) -> bool {
        self.0 != 0
    }
}

/// State shared by every descriptor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FxController {
    /// Effect kind tag
    pub kind: FxKind,
    /// Identity within the owning registry
    #[serde(default)]
    pub id: FxId,
    /// Owning renderable (None once destroyed)
    #[serde(default)]
    pub owner: Option<RenderableId>,
    /// Inactive descriptors stay in the list but are skipped by the pipeline
    #[serde(default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}

impl FxController {
    /// Create an active controller owned by `owner`
    pub fn new(kind: FxKind, owner: RenderableId) -> Self {
        Self {
            kind,
            id: FxId::UNASSIGNED,
            owner: Some(owner),
            active: true,
        }
    }

    /// Detach from the owner and deactivate
    pub fn destroy(&mut self) {
        self.owner = None;
        self.active = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_tags() {
        assert_eq!(FxKind::Glow.tag(), 4);
        assert_eq!(FxKind::Blur.tag(), 9);
        assert_eq!(FxKind::Bokeh.tag(), 19);
        assert_eq!(FxKind::from_tag(17), Some(FxKind::Displacement));
        assert_eq!(FxKind::from_tag(10), None);
        assert_eq!(FxKind::all().len(), 14);
    }

    #[test]
    fn test_controller_destroy() {
        let mut controller = FxController::new(FxKind::Blur, RenderableId(3));
        assert!(controller.active);
        assert_eq!(controller.owner, Some(RenderableId(3)));
        assert!(!controller.id.is_assigned());

        controller.destroy();
        assert!(!controller.active);
        assert!(controller.owner.is_none());
    }
}
