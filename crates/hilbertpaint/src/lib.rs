//! Core library for painting animated Hilbert curves into a pixel buffer.
//!
//! A [`PixelSurface`] is a shared, lock-free framebuffer. Curve runs walk the
//! classic recursive Hilbert construction and fill one rectangle per step,
//! pausing between steps so the drawing is visible. The GUI and CLI crates in
//! this workspace present the surface; nothing here knows about windows.
//!
//! ```
//! use hilbertpaint::{CurveConfig, curve};
//!
//! let config = CurveConfig::new(2, (0, 0), (10, 2))?;
//! let mut count = 0;
//! curve::walk(&config, &mut rand::rng(), |_| count += 1);
//! assert_eq!(count, config.step_count());
//! # Ok::<(), hilbertpaint::error::Error>(())
//! ```

/// Concurrent curve runs over a shared surface.
pub mod animation;
/// RGBA colours and packed pixel values.
pub mod color;
/// The recursive Hilbert walk and its painting driver.
pub mod curve;
/// Error types used across the crate.
pub mod error;
/// The fixed demo arrangement and its tunables.
pub mod layout;
/// The shared pixel buffer and rectangle fills.
pub mod surface;

pub use crate::{
    animation::{Animation, AnimationOptions},
    color::Color,
    curve::{CurveConfig, CurveCursor, Direction, Rotation, Step},
    layout::Layout,
    surface::{PixelSurface, Rect},
};
