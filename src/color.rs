use rand::Rng;
use serde::{Deserialize, Serialize};

/// RGB tint of an obstacle or a lit ray
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

pub const BLACK: Color = Color { r: 0, g: 0, b: 0 };
pub const WHITE: Color = Color { r: 255, g: 255, b: 255 };

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Color { r, g, b }
    }

    /// Build from packed 0xRRGGBB
    pub fn from_hex(hex: u32) -> Self {
        Color {
            r: ((hex >> 16) & 0xff) as u8,
            g: ((hex >> 8) & 0xff) as u8,
            b: (hex & 0xff) as u8,
        }
    }

    /// Pack into 0xRRGGBB
    pub fn to_hex(&self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }

    /// Scale every channel by `1 - percent/100`
    ///
    /// Negative percentages brighten. Channels are rounded and clamped to [0, 255].
    pub fn darken(&self, percent: i32) -> Color {
        let factor = 1.0 - percent as f32 / 100.0;
        let scale = |c: u8| (c as f32 * factor).round().clamp(0.0, 255.0) as u8;
        Color {
            r: scale(self.r),
            g: scale(self.g),
            b: scale(self.b),
        }
    }

    /// Random color with every channel in [min_brightness, 255]
    pub fn random<R: Rng + ?Sized>(rng: &mut R, min_brightness: u8) -> Color {
        Color {
            r: rng.gen_range(min_brightness..=255),
            g: rng.gen_range(min_brightness..=255),
            b: rng.gen_range(min_brightness..=255),
        }
    }
}
