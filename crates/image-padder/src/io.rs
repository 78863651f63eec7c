//! Decoding the source image and encoding the padded canvas.

use std::io::Cursor;
use std::path::Path;

use image::{DynamicImage, ImageFormat, ImageReader, RgbaImage};
use tracing::debug;

use crate::{PadError, Result};

/// Decode the image at `path`. The format is sniffed from the file contents.
pub fn load_image(path: &Path) -> Result<DynamicImage> {
    let read_err = |source| PadError::Read {
        path: path.to_path_buf(),
        source,
    };

    let reader = ImageReader::open(path)
        .map_err(read_err)?
        .with_guessed_format()
        .map_err(read_err)?;
    let format = reader.format();

    let img = reader.decode().map_err(|source| PadError::Decode {
        path: path.to_path_buf(),
        source,
    })?;

    debug!(
        path = %path.display(),
        ?format,
        width = img.width(),
        height = img.height(),
        "Decoded source image"
    );
    Ok(img)
}

/// Resolve the output format from the extension of `path`.
///
/// Only formats whose encoders keep an RGBA8 alpha channel are accepted.
pub fn output_format(path: &Path) -> Result<ImageFormat> {
    let format = ImageFormat::from_path(path).map_err(|_| PadError::UnsupportedFormat {
        path: path.to_path_buf(),
    })?;

    if supports_alpha(format) {
        Ok(format)
    } else {
        Err(PadError::NoAlphaChannel { format })
    }
}

fn supports_alpha(format: ImageFormat) -> bool {
    matches!(
        format,
        ImageFormat::Png
            | ImageFormat::WebP
            | ImageFormat::Tiff
            | ImageFormat::Tga
            | ImageFormat::Bmp
            | ImageFormat::Ico
            | ImageFormat::Qoi
    )
}

/// Encode `canvas` and write it to `path`.
///
/// The whole file is encoded in memory first so an encoder failure never
/// leaves a truncated file on disk.
pub fn save_rgba(canvas: &RgbaImage, path: &Path) -> Result<()> {
    let format = output_format(path)?;

    let mut buf = Vec::new();
    canvas
        .write_to(&mut Cursor::new(&mut buf), format)
        .map_err(|source| PadError::Encode { format, source })?;

    std::fs::write(path, &buf).map_err(|source| PadError::Write {
        path: path.to_path_buf(),
        source,
    })?;

    debug!(path = %path.display(), ?format, bytes = buf.len(), "Wrote padded image");
    Ok(())
}
