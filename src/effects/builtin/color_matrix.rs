//! Color matrix effect
//!
//! A 4x5 matrix (row-major, 20 floats) applied to each RGBA pixel; the
//! fifth column is an additive offset in normalized units. Presets either
//! replace the current matrix or, with `multiply`, compose onto it.

use serde::{Deserialize, Serialize};

use crate::effects::traits::{FxDescriptor, FxPipeline};
use crate::effects::types::{FxController, FxKind, RenderableId};

pub type Matrix = [f32; 20];

pub const IDENTITY: Matrix = [
    1.0, 0.0, 0.0, 0.0, 0.0, //
    0.0, 1.0, 0.0, 0.0, 0.0, //
    0.0, 0.0, 1.0, 0.0, 0.0, //
    0.0, 0.0, 0.0, 1.0, 0.0,
];

const SEPIA: Matrix = [
    0.393, 0.769, 0.189, 0.0, 0.0, //
    0.349, 0.686, 0.168, 0.0, 0.0, //
    0.272, 0.534, 0.131, 0.0, 0.0, //
    0.0, 0.0, 0.0, 1.0, 0.0,
];

const NEGATIVE: Matrix = [
    -1.0, 0.0, 0.0, 0.0, 1.0, //
    0.0, -1.0, 0.0, 0.0, 1.0, //
    0.0, 0.0, -1.0, 0.0, 1.0, //
    0.0, 0.0, 0.0, 1.0, 0.0,
];

const BLACK_WHITE: Matrix = [
    0.3, 0.6, 0.1, 0.0, 0.0, //
    0.3, 0.6, 0.1, 0.0, 0.0, //
    0.3, 0.6, 0.1, 0.0, 0.0, //
    0.0, 0.0, 0.0, 1.0, 0.0,
];

/// Compose `a` after `m`, treating both as 5x5 with an implicit `[0 0 0 0 1]` row
fn multiply(m: &Matrix, a: &Matrix) -> Matrix {
    let mut out = [0.0; 20];
    for row in 0..4 {
        for col in 0..5 {
            let mut sum: f32 = (0..4).map(|k| m[row * 5 + k] * a[k * 5 + col]).sum();
            if col == 4 {
                sum += m[row * 5 + 4];
            }
            out[row * 5 + col] = sum;
        }
    }
    out
}

/// Color matrix descriptor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorMatrix {
    pub controller: FxController,
    pub matrix: Matrix,
    /// Mix between the source (0) and the transformed color (1)
    pub alpha: f32,
}

impl ColorMatrix {
    pub fn new(owner: RenderableId) -> Self {
        Self {
            controller: FxController::new(FxKind::ColorMatrix, owner),
            matrix: IDENTITY,
            alpha: 1.0,
        }
    }

    /// Replace the matrix, or compose onto it when `multiply` is set
    pub fn set(&mut self, matrix: Matrix, multiply_current: bool) -> &mut Self {
        self.matrix = if multiply_current {
            multiply(&self.matrix, &matrix)
        } else {
            matrix
        };
        self
    }

    pub fn reset(&mut self) -> &mut Self {
        self.matrix = IDENTITY;
        self
    }

    /// Scale RGB by `value`
    pub fn brightness(&mut self, value: f32, multiply_current: bool) -> &mut Self {
        let v = value;
        self.set(
            [
                v, 0.0, 0.0, 0.0, 0.0, //
                0.0, v, 0.0, 0.0, 0.0, //
                0.0, 0.0, v, 0.0, 0.0, //
                0.0, 0.0, 0.0, 1.0, 0.0,
            ],
            multiply_current,
        )
    }

    /// Increase (positive) or reduce (negative) contrast around mid-gray
    pub fn contrast(&mut self, value: f32, multiply_current: bool) -> &mut Self {
        let v = value + 1.0;
        let o = -0.5 * (v - 1.0);
        self.set(
            [
                v, 0.0, 0.0, 0.0, o, //
                0.0, v, 0.0, 0.0, o, //
                0.0, 0.0, v, 0.0, o, //
                0.0, 0.0, 0.0, 1.0, 0.0,
            ],
            multiply_current,
        )
    }

    /// Increase (positive) or reduce (negative) saturation; -1 is fully gray
    pub fn saturate(&mut self, value: f32, multiply_current: bool) -> &mut Self {
        let x = value * 2.0 / 3.0 + 1.0;
        let y = (x - 1.0) * -0.5;
        self.set(
            [
                x, y, y, 0.0, 0.0, //
                y, x, y, 0.0, 0.0, //
                y, y, x, 0.0, 0.0, //
                0.0, 0.0, 0.0, 1.0, 0.0,
            ],
            multiply_current,
        )
    }

    pub fn grayscale(&mut self, value: f32, multiply_current: bool) -> &mut Self {
        self.saturate(-value, multiply_current)
    }

    pub fn negative(&mut self, multiply_current: bool) -> &mut Self {
        self.set(NEGATIVE, multiply_current)
    }

    pub fn sepia(&mut self, multiply_current: bool) -> &mut Self {
        self.set(SEPIA, multiply_current)
    }

    pub fn black_white(&mut self, multiply_current: bool) -> &mut Self {
        self.set(BLACK_WHITE, multiply_current)
    }
}

impl FxDescriptor for ColorMatrix {
    fn controller(&self) -> &FxController {
        &self.controller
    }

    fn controller_mut(&mut self) -> &mut FxController {
        &mut self.controller
    }

    fn on_pre_render(&mut self, pipeline: &mut dyn FxPipeline) {
        pipeline.set_float_array("colorMatrix", &self.matrix);
        pipeline.set_float1("alpha", self.alpha);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: &Matrix, b: &Matrix) -> bool {
        a.iter().zip(b.iter()).all(|(x, y)| (x - y).abs() < 1e-6)
    }

    #[test]
    fn test_color_matrix_defaults() {
        let cm = ColorMatrix::new(RenderableId(1));
        assert_eq!(cm.kind(), FxKind::ColorMatrix);
        assert_eq!(cm.matrix, IDENTITY);
        assert_eq!(cm.alpha, 1.0);
    }

    #[test]
    fn test_grayscale_averages_channels() {
        let mut cm = ColorMatrix::new(RenderableId(1));
        cm.grayscale(1.0, false);
        for row in 0..3 {
            for col in 0..3 {
                assert!((cm.matrix[row * 5 + col] - 1.0 / 3.0).abs() < 1e-6);
            }
        }
    }

    #[test]
    fn test_negative_twice_is_identity() {
        let mut cm = ColorMatrix::new(RenderableId(1));
        cm.negative(false).negative(true);
        assert!(approx_eq(&cm.matrix, &IDENTITY));
    }

    #[test]
    fn test_brightness_composes() {
        let mut cm = ColorMatrix::new(RenderableId(1));
        cm.brightness(0.5, false).brightness(0.5, true);
        assert!((cm.matrix[0] - 0.25).abs() < 1e-6);
        assert!((cm.matrix[6] - 0.25).abs() < 1e-6);
        assert_eq!(cm.matrix[18], 1.0);

        cm.reset();
        assert_eq!(cm.matrix, IDENTITY);
    }

    #[test]
    fn test_contrast_offsets() {
        let mut cm = ColorMatrix::new(RenderableId(1));
        cm.contrast(1.0, false);
        assert_eq!(cm.matrix[0], 2.0);
        assert_eq!(cm.matrix[4], -0.5);
    }
}
