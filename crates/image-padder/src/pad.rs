//! The one-shot pad operation: read, pad, write.

use std::path::{Path, PathBuf};

use tracing::info;

use crate::io::output_format;
use crate::{Dimensions, PadLayout, Result, TargetRatio, load_image, pad_image, save_rgba};

/// Default source image path.
pub const DEFAULT_INPUT_PATH: &str = "assets/images/konbu.tokyo2-touka.png";

/// Default destination path.
pub const DEFAULT_OUTPUT_PATH: &str = "assets/images/konbu_branding_padded.png";

/// Inputs of a single pad run.
#[derive(Debug, Clone, PartialEq)]
pub struct PadOptions {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    pub target_ratio: TargetRatio,
}

impl Default for PadOptions {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT_PATH),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            target_ratio: TargetRatio::default(),
        }
    }
}

/// What a successful run produced.
#[derive(Debug, Clone, PartialEq)]
pub struct PadReport {
    pub layout: PadLayout,
    pub output_path: PathBuf,
}

impl PadReport {
    pub fn original_size(&self) -> Dimensions {
        self.layout.source
    }

    pub fn canvas_size(&self) -> Dimensions {
        self.layout.canvas
    }
}

/// Observer for the steps of a [`pad`] run. Every method defaults to a no-op.
pub trait PadProgress {
    /// The source was decoded.
    fn decoded(&mut self, _size: Dimensions) {}

    /// The canvas layout was computed and the source pasted.
    fn padded(&mut self, _layout: &PadLayout) {}

    /// The canvas was written to `path`.
    fn saved(&mut self, _path: &Path) {}
}

impl PadProgress for () {}

/// Pad the image at `options.input_path` and write it to `options.output_path`.
pub fn pad(options: &PadOptions) -> Result<PadReport> {
    pad_with_progress(options, &mut ())
}

/// Like [`pad`], reporting each finished step to `progress`.
///
/// The output format is checked before the input is decoded, so an output
/// path that cannot hold alpha fails before any step is reported.
pub fn pad_with_progress(
    options: &PadOptions,
    progress: &mut impl PadProgress,
) -> Result<PadReport> {
    output_format(&options.output_path)?;

    let img = load_image(&options.input_path)?;
    progress.decoded(Dimensions::new(img.width(), img.height()));

    let (canvas, layout) = pad_image(&img, options.target_ratio)?;
    progress.padded(&layout);

    save_rgba(&canvas, &options.output_path)?;
    progress.saved(&options.output_path);

    info!(
        input = %options.input_path.display(),
        output = %options.output_path.display(),
        original = %layout.source,
        canvas = %layout.canvas,
        "Padded image"
    );

    Ok(PadReport {
        layout,
        output_path: options.output_path.clone(),
    })
}
