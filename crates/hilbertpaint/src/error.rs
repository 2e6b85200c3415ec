use std::io;

use thiserror::Error;

/// Errors raised while building surfaces, curve configurations or runs.
#[derive(Debug, Error)]
pub enum Error {
    /// Surface dimensions are zero or too large to address.
    #[error("invalid surface size: {0}")]
    Size(String),
    /// A curve segment has a non-positive width or height.
    #[error("invalid segment: {0}")]
    Segment(String),
    /// The requested order is deeper than the recursion guard allows.
    #[error("order {order} exceeds the maximum order {max}")]
    Order {
        /// Requested order.
        order: u32,
        /// Largest accepted order.
        max: u32,
    },
    /// The OS refused to start a curve thread.
    #[error("failed to spawn curve thread: {0}")]
    Spawn(#[source] io::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
