//! Canvas allocation and compositing.

use image::{DynamicImage, RgbaImage, imageops};
use tracing::debug;

use crate::{PadLayout, Result, TargetRatio, compute_layout};

/// Paste `img` onto a fully transparent canvas described by `layout`.
///
/// The paste is a straight overwrite: source pixels, alpha included, replace
/// the canvas pixels. Semi-transparent source pixels are not blended.
pub fn pad_to_canvas(img: &DynamicImage, layout: &PadLayout) -> RgbaImage {
    let mut canvas = RgbaImage::new(layout.canvas.width, layout.canvas.height);
    let source = img.to_rgba8();

    debug!(
        canvas_w = canvas.width(),
        canvas_h = canvas.height(),
        x = layout.offset_x,
        y = layout.offset_y,
        "Pasting source onto transparent canvas"
    );

    imageops::replace(
        &mut canvas,
        &source,
        i64::from(layout.offset_x),
        i64::from(layout.offset_y),
    );
    canvas
}

/// Compute the layout for `img` at `ratio` and build the padded canvas.
pub fn pad_image(img: &DynamicImage, ratio: TargetRatio) -> Result<(RgbaImage, PadLayout)> {
    let layout = compute_layout(img.width(), img.height(), ratio)?;
    Ok((pad_to_canvas(img, &layout), layout))
}
