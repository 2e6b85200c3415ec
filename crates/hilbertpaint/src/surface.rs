//! A fixed-size pixel buffer shared between curve runs and the presenter.
//!
//! Pixels are packed `0xAARRGGBB` words held in atomics. Writers never lock:
//! two runs that paint the same pixel race, and the last store wins. Readers
//! copying the buffer may observe a frame that is partially updated. Neither
//! case is undefined behaviour, and the picture converges once writers stop.

use std::{
    fmt,
    sync::atomic::{AtomicU32, Ordering},
};

use crate::{
    color::Color,
    error::{Error, Result},
};

/// Bytes occupied by one packed pixel.
pub const BYTES_PER_PIXEL: usize = 4;

/// An axis-aligned rectangle in pixel coordinates, half-open on the max side.
///
/// Bounds are not required to be ordered or inside any surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rect {
    /// Inclusive left edge.
    pub min_x: i32,
    /// Inclusive top edge.
    pub min_y: i32,
    /// Exclusive right edge.
    pub max_x: i32,
    /// Exclusive bottom edge.
    pub max_y: i32,
}

impl Rect {
    /// Build a rectangle from its four bounds.
    pub const fn new(min_x: i32, min_y: i32, max_x: i32, max_y: i32) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// Horizontal span; negative when the bounds are reversed.
    pub const fn width(&self) -> i64 {
        self.max_x as i64 - self.min_x as i64
    }

    /// Vertical span; negative when the bounds are reversed.
    pub const fn height(&self) -> i64 {
        self.max_y as i64 - self.min_y as i64
    }

    /// Whether the half-open rectangle covers no pixels.
    pub const fn is_empty(&self) -> bool {
        self.width() <= 0 || self.height() <= 0
    }

    /// Clamp every bound independently into `[0, width] × [0, height]`.
    ///
    /// Bounds are not reordered, so a reversed rectangle stays empty.
    pub fn clamped(self, width: i32, height: i32) -> Self {
        Self {
            min_x: self.min_x.clamp(0, width),
            min_y: self.min_y.clamp(0, height),
            max_x: self.max_x.clamp(0, width),
            max_y: self.max_y.clamp(0, height),
        }
    }
}

/// A `width × height` buffer of packed pixels with a top-left origin.
///
/// The surface never changes size after construction. It is `Sync`, so share
/// it behind an `Arc` to let curve threads paint while another thread reads.
pub struct PixelSurface {
    /// Width in pixels.
    width: u32,
    /// Height in pixels.
    height: u32,
    /// Row-major packed pixels.
    pixels: Box<[AtomicU32]>,
}

impl fmt::Debug for PixelSurface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PixelSurface")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish_non_exhaustive()
    }
}

impl PixelSurface {
    /// Allocate a zeroed surface.
    ///
    /// Zero or unaddressable dimensions are an error. Failing to allocate the
    /// buffer itself is fatal: nothing can be drawn without it.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::Size(format!("{width}x{height} has no pixels")));
        }
        if i32::try_from(width).is_err() || i32::try_from(height).is_err() {
            return Err(Error::Size(format!(
                "{width}x{height} exceeds the largest addressable side {}",
                i32::MAX
            )));
        }
        let len = (width as usize)
            .checked_mul(height as usize)
            .filter(|n| n.checked_mul(BYTES_PER_PIXEL).is_some())
            .ok_or_else(|| Error::Size(format!("{width}x{height} overflows the address space")))?;

        let mut pixels = Vec::new();
        assert!(
            pixels.try_reserve_exact(len).is_ok(),
            "failed to allocate a {width}x{height} pixel surface"
        );
        pixels.resize_with(len, || AtomicU32::new(0));

        Ok(Self {
            width,
            height,
            pixels: pixels.into_boxed_slice(),
        })
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Always [`BYTES_PER_PIXEL`].
    pub fn bytes_per_pixel(&self) -> usize {
        BYTES_PER_PIXEL
    }

    /// The full extent of the surface as a rectangle.
    pub fn bounds(&self) -> Rect {
        Rect::new(0, 0, self.width as i32, self.height as i32)
    }

    /// Fill the whole surface with one colour.
    pub fn clear(&self, color: Color) {
        self.fill(self.bounds(), color);
    }

    /// Fill every pixel of `rect` after clamping it to the surface.
    pub fn fill(&self, rect: Rect, color: Color) {
        self.draw_rect(rect, color, 0);
    }

    /// Paint only a border band `frame_width` pixels thick inside `rect`.
    ///
    /// See [`PixelSurface::draw_rect`] for the contract on `frame_width`.
    pub fn frame(&self, rect: Rect, color: Color, frame_width: u32) {
        self.draw_rect(rect, color, frame_width);
    }

    /// Fill `rect` with `color`, either entirely (`frame_width == 0`) or only
    /// within `frame_width` pixels of its four edges.
    ///
    /// Each bound is clamped to the surface first; pixels outside the clamped
    /// half-open rectangle are never touched.
    ///
    /// # Panics
    ///
    /// In frame mode, panics when twice `frame_width` exceeds either span of
    /// the clamped rectangle. That is a caller bug, not a runtime condition.
    pub fn draw_rect(&self, rect: Rect, color: Color, frame_width: u32) {
        let clamped = rect.clamped(self.width as i32, self.height as i32);
        let band = i64::from(frame_width);
        if frame_width != 0 {
            assert!(
                2 * band <= clamped.width(),
                "frame width {frame_width} does not fit {clamped:?}"
            );
            assert!(
                2 * band <= clamped.height(),
                "frame width {frame_width} does not fit {clamped:?}"
            );
        }
        if clamped.is_empty() {
            return;
        }

        let packed = color.pack();
        let cols = frame_width as usize;
        for y in clamped.min_y..clamped.max_y {
            let row = &self.pixels
                [self.offset(clamped.min_x, y)..self.offset(clamped.max_x, y)];
            let edge_row = frame_width == 0
                || i64::from(y) < i64::from(clamped.min_y) + band
                || i64::from(y) >= i64::from(clamped.max_y) - band;
            if edge_row {
                store_all(row, packed);
            } else {
                store_all(&row[..cols], packed);
                store_all(&row[row.len() - cols..], packed);
            }
        }
    }

    /// The packed pixel at `(x, y)`, or `None` outside the surface.
    pub fn pixel(&self, x: u32, y: u32) -> Option<u32> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.pixels[self.offset(x as i32, y as i32)].load(Ordering::Relaxed))
    }

    /// Copy every packed pixel, row by row.
    pub fn snapshot(&self) -> Vec<u32> {
        self.pixels
            .iter()
            .map(|p| p.load(Ordering::Relaxed))
            .collect()
    }

    /// Replace the contents of `out` with opaque RGBA bytes, row by row.
    ///
    /// The stored alpha byte is ignored, the same way a 32-bit RGB blit
    /// ignores it.
    pub fn copy_rgba_into(&self, out: &mut Vec<u8>) {
        out.clear();
        out.reserve(self.pixels.len() * BYTES_PER_PIXEL);
        for pixel in self.pixels.iter() {
            let [r, g, b] = Color::unpack_rgb(pixel.load(Ordering::Relaxed));
            out.extend_from_slice(&[r, g, b, 0xff]);
        }
    }

    /// Index of `(x, y)` in the pixel slice. Callers pass clamped coordinates.
    fn offset(&self, x: i32, y: i32) -> usize {
        y as usize * self.width as usize + x as usize
    }
}

/// Store `value` into every pixel of `pixels`.
fn store_all(pixels: &[AtomicU32], value: u32) {
    for pixel in pixels {
        pixel.store(value, Ordering::Relaxed);
    }
}
