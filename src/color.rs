//! Packed color codec
//!
//! Effects expose their colors as packed `0xRRGGBB` integers but store them
//! as three normalized floats ready to upload as a `vec3` uniform.
//!
//! Packing truncates each channel (`channel * 255`, fractional part dropped)
//! rather than rounding. Channels outside `[0, 1]` are clamped first, so a
//! packed value never exceeds `0xFFFFFF`. Unpacking ignores bits above bit 23.

use serde::{Deserialize, Serialize};

/// Largest value a packed 24-bit color can hold
pub const MAX_PACKED: u32 = 0x00FF_FFFF;

/// Float noise tolerated below a whole byte step when truncating.
///
/// `k as f32 / 255.0 * 255.0` can land a few ULPs under `k`; without this
/// the truncation would drop it to `k - 1`.
const BYTE_EPSILON: f32 = 1e-3;

fn channel_to_byte(channel: f32) -> u32 {
    let scaled = channel.clamp(0.0, 1.0) * 255.0 + BYTE_EPSILON;
    // `as` saturates and maps NaN to 0
    (scaled as u32).min(0xFF)
}

fn byte_to_channel(value: u32, shift: u32) -> f32 {
    ((value >> shift) & 0xFF) as f32 / 255.0
}

/// Pack three normalized channels into a `0xRRGGBB` integer
pub fn pack_rgb(r: f32, g: f32, b: f32) -> u32 {
    (channel_to_byte(r) << 16) | (channel_to_byte(g) << 8) | channel_to_byte(b)
}

/// Unpack a `0xRRGGBB` integer into three normalized channels
pub fn unpack_rgb(value: u32) -> [f32; 3] {
    [
        byte_to_channel(value, 16),
        byte_to_channel(value, 8),
        byte_to_channel(value, 0),
    ]
}

/// An RGB color stored as normalized floats (the form shaders consume)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GlColor(pub [f32; 3]);

impl Default for GlColor {
    fn default() -> Self {
        Self::WHITE
    }
}

impl GlColor {
    pub const WHITE: GlColor = GlColor([1.0, 1.0, 1.0]);
    pub const BLACK: GlColor = GlColor([0.0, 0.0, 0.0]);

    /// Create from a packed `0xRRGGBB` value
    pub fn from_packed(value: u32) -> Self {
        Self(unpack_rgb(value))
    }

    /// Get the packed `0xRRGGBB` value
    pub fn packed(&self) -> u32 {
        pack_rgb(self.0[0], self.0[1], self.0[2])
    }

    /// Replace all three channels from a packed value
    pub fn set_packed(&mut self, value: u32) {
        self.0 = unpack_rgb(value);
    }

    pub fn r(&self) -> f32 {
        self.0[0]
    }

    pub fn g(&self) -> f32 {
        self.0[1]
    }

    pub fn b(&self) -> f32 {
        self.0[2]
    }

    /// Get the channels as an array (for `vec3` uniforms)
    pub fn as_array(&self) -> [f32; 3] {
        self.0
    }
}

impl From<u32> for GlColor {
    fn from(value: u32) -> Self {
        Self::from_packed(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pack_extremes() {
        assert_eq!(pack_rgb(1.0, 1.0, 1.0), 0xFFFFFF);
        assert_eq!(pack_rgb(0.0, 0.0, 0.0), 0x000000);
        assert_eq!(unpack_rgb(0xFF0000), [1.0, 0.0, 0.0]);
    }

    #[test]
    fn test_pack_truncates() {
        // 0.5 * 255 = 127.5 truncates to 127
        assert_eq!(pack_rgb(0.0, 0.0, 0.5), 0x00007F);
        assert_eq!(pack_rgb(0.999, 0.0, 0.0), 0xFE0000);
    }

    #[test]
    fn test_pack_clamps_out_of_range() {
        assert_eq!(pack_rgb(2.0, -1.0, 1.5), 0xFF00FF);
        assert_eq!(pack_rgb(f32::NAN, 0.0, 0.0), 0x000000);
    }

    #[test]
    fn test_unpack_ignores_high_bits() {
        assert_eq!(unpack_rgb(0xAB00FF00), unpack_rgb(0x0000FF00));
    }

    #[test]
    fn test_exact_byte_round_trip() {
        for r in 0..=255u32 {
            for g in 0..=255u32 {
                for b in 0..=255u32 {
                    let packed = (r << 16) | (g << 8) | b;
                    let [cr, cg, cb] = unpack_rgb(packed);
                    assert_eq!(pack_rgb(cr, cg, cb), packed);
                }
            }
        }
    }

    #[test]
    fn test_float_channels_round_trip() {
        for k in 0..=255u32 {
            let c = k as f32 / 255.0;
            let [r, g, b] = unpack_rgb(pack_rgb(c, c, c));
            assert_eq!(r, c);
            assert_eq!(g, c);
            assert_eq!(b, c);
        }
    }

    #[test]
    fn test_gl_color() {
        let mut color = GlColor::default();
        assert_eq!(color.packed(), 0xFFFFFF);
        assert_eq!(color.as_array(), [1.0, 1.0, 1.0]);

        color.set_packed(0x00FF00);
        assert_eq!(color.r(), 0.0);
        assert_eq!(color.g(), 1.0);
        assert_eq!(color.b(), 0.0);
        assert_eq!(GlColor::from(0xfeedb6).packed(), 0xfeedb6);
    }
}
