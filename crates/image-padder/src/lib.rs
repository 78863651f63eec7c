//! Pad an image onto a transparent canvas of a target aspect ratio.
//!
//! The source image is never scaled or cropped. The canvas grows along one
//! axis until its width/height ratio matches the target, and the source is
//! pasted at the center.

pub mod canvas;
pub mod io;
pub mod layout;
pub mod pad;
pub mod ratio;

use std::path::PathBuf;

// Re-exports for convenience
pub use canvas::{pad_image, pad_to_canvas};
pub use io::{load_image, save_rgba};
pub use layout::{Dimensions, PadAxis, PadLayout, compute_layout};
pub use pad::{PadOptions, PadProgress, PadReport, pad, pad_with_progress};
pub use ratio::TargetRatio;

/// Default canvas width/height ratio.
pub const DEFAULT_TARGET_RATIO: f64 = 2.5;

/// Errors that can occur while padding an image.
#[derive(Debug, thiserror::Error)]
pub enum PadError {
    #[error("Failed to read {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to decode {}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Invalid image dimensions {width}x{height}: both sides must be non-zero")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("Invalid target ratio: {0}")]
    InvalidRatio(String),

    #[error(
        "Canvas too large: padding {width}x{height} to ratio {ratio} needs more than {} bytes",
        layout::MAX_CANVAS_BYTES
    )]
    CanvasTooLarge { width: u32, height: u32, ratio: f64 },

    #[error("Cannot infer an output format from {}", .path.display())]
    UnsupportedFormat { path: PathBuf },

    #[error("Output format {format:?} cannot store an alpha channel")]
    NoAlphaChannel { format: image::ImageFormat },

    #[error("Failed to encode {format:?}")]
    Encode {
        format: image::ImageFormat,
        #[source]
        source: image::ImageError,
    },

    #[error("Failed to write {}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type alias for padding operations.
pub type Result<T> = std::result::Result<T, PadError>;
