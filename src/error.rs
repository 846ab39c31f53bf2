// Error handling for the garden engine
//
// Every failure the core can produce lives in this one enum.
// Canvas and GardenComposer never recover from these; they are handed
// back to the caller unchanged and the binary turns them into an exit code.
use thiserror::Error;

/// Errors raised while building or composing a garden.
#[derive(Debug, Error)]
pub enum GardenError {
    /// A canvas was requested with a zero side, or larger than the configured ceiling.
    #[error("invalid canvas dimension {width}x{height}: {reason}")]
    InvalidDimension {
        width: usize,
        height: usize,
        reason: String,
    },

    /// A non-clipping write would place characters outside the grid.
    #[error(
        "block of {block_width}x{block_height} at ({x}, {y}) does not fit \
         on a {canvas_width}x{canvas_height} canvas"
    )]
    OutOfBounds {
        x: i64,
        y: i64,
        block_width: usize,
        block_height: usize,
        canvas_width: usize,
        canvas_height: usize,
    },

    /// No provider is registered for the requested plant kind.
    #[error("unknown plant kind \"{kind}\"")]
    UnknownPlantKind { kind: String },

    /// An explicit layout supplied a different number of origins than plants.
    #[error("explicit layout has {origins} origins for {plants} plants")]
    PlacementMismatch { plants: usize, origins: usize },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Shorthand used throughout the crate.
pub type Result<T> = std::result::Result<T, GardenError>;
