//! Floating point RGBA colours and their packed pixel representation.
//!
//! Pixels are stored as `0xAARRGGBB` words, the layout a 32-bit BGRA
//! framebuffer has in memory on little-endian machines.

use rand::Rng;

/// An RGBA colour with each channel nominally in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    /// Red channel.
    pub r: f32,
    /// Green channel.
    pub g: f32,
    /// Blue channel.
    pub b: f32,
    /// Alpha channel.
    pub a: f32,
}

impl Color {
    /// Opaque colour from three channels.
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Colour from four channels.
    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Draw an opaque colour with independent, uniformly distributed channels.
    ///
    /// Channels are quantised to the 256 levels a pixel can hold, so every
    /// value is exactly representable after packing.
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        let mut channel = || f32::from(rng.random::<u8>()) / 255.0;
        Self::rgb(channel(), channel(), channel())
    }

    /// Pack into a `0xAARRGGBB` pixel, rounding each channel to the nearest
    /// level.
    pub fn pack(self) -> u32 {
        u32::from(quantize(self.b))
            | (u32::from(quantize(self.g)) << 8)
            | (u32::from(quantize(self.r)) << 16)
            | (u32::from(quantize(self.a)) << 24)
    }

    /// Split a packed pixel into its `[r, g, b]` bytes.
    pub const fn unpack_rgb(pixel: u32) -> [u8; 3] {
        [(pixel >> 16) as u8, (pixel >> 8) as u8, pixel as u8]
    }
}

/// Map a channel onto `0..=255`. Out-of-range values saturate and NaN maps to 0.
fn quantize(channel: f32) -> u8 {
    (channel.clamp(0.0, 1.0) * 255.0 + 0.5) as u8
}
