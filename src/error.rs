use std::io;

use thiserror::Error;

/// Errors surfaced by the terminal runtime.
///
/// Core gameplay is infallible by design (pathfinding misses and blocked
/// moves are signals, not errors), so this only covers the terminal boundary.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("terminal i/o failed: {0}")]
    Terminal(#[from] io::Error),

    #[error("grid too small: {width}x{height} (minimum 8x8)")]
    GridTooSmall { width: u16, height: u16 },
}
