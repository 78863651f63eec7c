//! Canvas layout computation.
//!
//! Derives the padded canvas size from the source dimensions and a target
//! ratio, and the offset that centers the source on it. Pure arithmetic; no
//! pixels are touched here.

use tracing::debug;

use crate::{PadError, Result, TargetRatio};

/// Largest canvas, in RGBA8 bytes, that will be allocated. Matches the
/// default allocation limit of the `image` decoders.
pub const MAX_CANVAS_BYTES: u64 = 512 * 1024 * 1024;

/// Width and height in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl std::fmt::Display for Dimensions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Which axis of the canvas was extended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PadAxis {
    /// Width grew; the source sits between left and right bands.
    Horizontal,
    /// Height grew; the source sits between top and bottom bands.
    Vertical,
    /// The source already has the target ratio.
    None,
}

/// Where the source lands on the padded canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PadLayout {
    pub source: Dimensions,
    pub canvas: Dimensions,
    pub offset_x: u32,
    pub offset_y: u32,
    pub axis: PadAxis,
}

impl PadLayout {
    pub fn needs_padding(&self) -> bool {
        self.axis != PadAxis::None
    }
}

/// Compute the canvas for a `width` x `height` source at `ratio`.
///
/// A source wider than the target keeps its width and gets
/// `floor(width / ratio)` rows. Anything else, an exact match included, keeps
/// its height and gets `floor(height * ratio)` columns. The canvas never ends
/// up smaller than the source on either axis, and never exceeds
/// [`MAX_CANVAS_BYTES`].
pub fn compute_layout(width: u32, height: u32, ratio: TargetRatio) -> Result<PadLayout> {
    if width == 0 || height == 0 {
        return Err(PadError::InvalidDimensions { width, height });
    }

    let target = ratio.get();
    let current = f64::from(width) / f64::from(height);

    let (canvas_w, canvas_h) = if current > target {
        let scaled = (f64::from(width) / target).floor();
        (width, to_pixels(scaled, width, height, target)?.max(height))
    } else {
        let scaled = (f64::from(height) * target).floor();
        (to_pixels(scaled, width, height, target)?.max(width), height)
    };

    if u64::from(canvas_w) * u64::from(canvas_h) * 4 > MAX_CANVAS_BYTES {
        return Err(PadError::CanvasTooLarge {
            width,
            height,
            ratio: target,
        });
    }

    let axis = if canvas_w > width {
        PadAxis::Horizontal
    } else if canvas_h > height {
        PadAxis::Vertical
    } else {
        PadAxis::None
    };

    let layout = PadLayout {
        source: Dimensions::new(width, height),
        canvas: Dimensions::new(canvas_w, canvas_h),
        offset_x: (canvas_w - width) / 2,
        offset_y: (canvas_h - height) / 2,
        axis,
    };

    debug!(
        width,
        height,
        current_ratio = current,
        target_ratio = target,
        canvas_w,
        canvas_h,
        offset_x = layout.offset_x,
        offset_y = layout.offset_y,
        "Computed pad layout"
    );

    Ok(layout)
}

fn to_pixels(scaled: f64, width: u32, height: u32, ratio: f64) -> Result<u32> {
    if scaled > f64::from(u32::MAX) {
        return Err(PadError::CanvasTooLarge {
            width,
            height,
            ratio,
        });
    }
    Ok(scaled as u32)
}
