//! Built-in effects
//!
//! One descriptor per `FxKind`, plus `Fx`, the tagged union the registry
//! stores them in.

mod barrel;
mod bloom;
mod blur;
mod bokeh;
mod circle;
mod color_matrix;
mod displacement;
mod glow;
mod gradient;
mod pixelate;
mod shadow;
mod shine;
mod vignette;
mod wipe;

pub use barrel::Barrel;
pub use bloom::Bloom;
pub use blur::{Blur, BlurQuality};
pub use bokeh::Bokeh;
pub use circle::Circle;
pub use color_matrix::{ColorMatrix, Matrix as ColorMatrixValues, IDENTITY as COLOR_MATRIX_IDENTITY};
pub use displacement::Displacement;
pub use glow::Glow;
pub use gradient::Gradient;
pub use pixelate::Pixelate;
pub use shadow::Shadow;
pub use shine::Shine;
pub use vignette::Vignette;
pub use wipe::Wipe;

use serde::{Deserialize, Serialize};

use super::traits::{FxDescriptor, FxPipeline, FxVariant};
use super::types::FxController;

/// Any effect descriptor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum Fx {
    Barrel(Barrel),
    Bloom(Bloom),
    Blur(Blur),
    Bokeh(Bokeh),
    Circle(Circle),
    ColorMatrix(ColorMatrix),
    Displacement(Displacement),
    Glow(Glow),
    Gradient(Gradient),
    Pixelate(Pixelate),
    Shadow(Shadow),
    Shine(Shine),
    Vignette(Vignette),
    Wipe(Wipe),
}

impl Fx {
    fn descriptor(&self) -> &dyn FxDescriptor {
        match self {
            Fx::Barrel(fx) => fx,
            Fx::Bloom(fx) => fx,
            Fx::Blur(fx) => fx,
            Fx::Bokeh(fx) => fx,
            Fx::Circle(fx) => fx,
            Fx::ColorMatrix(fx) => fx,
            Fx::Displacement(fx) => fx,
            Fx::Glow(fx) => fx,
            Fx::Gradient(fx) => fx,
            Fx::Pixelate(fx) => fx,
            Fx::Shadow(fx) => fx,
            Fx::Shine(fx) => fx,
            Fx::Vignette(fx) => fx,
            Fx::Wipe(fx) => fx,
        }
    }

    fn descriptor_mut(&mut self) -> &mut dyn FxDescriptor {
        match self {
            Fx::Barrel(fx) => fx,
            Fx::Bloom(fx) => fx,
            Fx::Blur(fx) => fx,
            Fx::Bokeh(fx) => fx,
            Fx::Circle(fx) => fx,
            Fx::ColorMatrix(fx) => fx,
            Fx::Displacement(fx) => fx,
            Fx::Glow(fx) => fx,
            Fx::Gradient(fx) => fx,
            Fx::Pixelate(fx) => fx,
            Fx::Shadow(fx) => fx,
            Fx::Shine(fx) => fx,
            Fx::Vignette(fx) => fx,
            Fx::Wipe(fx) => fx,
        }
    }

    /// Downcast to a concrete descriptor
    pub fn downcast_ref<T: FxVariant>(&self) -> Option<&T> {
        T::from_fx(self)
    }

    /// Downcast to a concrete descriptor (mutable)
    pub fn downcast_mut<T: FxVariant>(&mut self) -> Option<&mut T> {
        T::from_fx_mut(self)
    }
}

impl FxDescriptor for Fx {
    fn controller(&self) -> &FxController {
        self.descriptor().controller()
    }

    fn controller_mut(&mut self) -> &mut FxController {
        self.descriptor_mut().controller_mut()
    }

    fn on_pre_render(&mut self, pipeline: &mut dyn FxPipeline) {
        self.descriptor_mut().on_pre_render(pipeline);
    }

    fn on_draw(&mut self, pipeline: &mut dyn FxPipeline) {
        self.descriptor_mut().on_draw(pipeline);
    }
}

/// Wire a descriptor type into `Fx`
macro_rules! fx_variant {
    ($($variant:ident),* $(,)?) => {
        $(
            impl From<$variant> for Fx {
                fn from(fx: $variant) -> Self {
                    Fx::$variant(fx)
                }
            }

            impl FxVariant for $variant {
                fn from_fx(fx: &Fx) -> Option<&Self> {
                    match fx {
                        Fx::$variant(inner) => Some(inner),
                        _ => None,
                    }
                }

                fn from_fx_mut(fx: &mut Fx) -> Option<&mut Self> {
                    match fx {
                        Fx::$variant(inner) => Some(inner),
                        _ => None,
                    }
                }
            }
        )*
    };
}

fx_variant!(
    Barrel,
    Bloom,
    Blur,
    Bokeh,
    Circle,
    ColorMatrix,
    Displacement,
    Glow,
    Gradient,
    Pixelate,
    Shadow,
    Shine,
    Vignette,
    Wipe,
);
