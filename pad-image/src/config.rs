//! Run configuration: command-line flags with environment and `.env` fallbacks.

use std::path::PathBuf;

use clap::Parser;
use image_padder::pad::{DEFAULT_INPUT_PATH, DEFAULT_OUTPUT_PATH};
use image_padder::{PadOptions, TargetRatio};

/// Pad an image onto a transparent canvas of a target aspect ratio.
#[derive(Debug, Parser)]
#[command(name = "pad-image", version)]
pub struct Cli {
    /// Source image
    #[arg(env = "PAD_INPUT_PATH", default_value = DEFAULT_INPUT_PATH)]
    pub input: PathBuf,

    /// Destination image; the extension selects the format and must allow alpha
    #[arg(env = "PAD_OUTPUT_PATH", default_value = DEFAULT_OUTPUT_PATH)]
    pub output: PathBuf,

    /// Target width/height ratio, as a decimal (2.5) or W:H (5:2)
    #[arg(short, long, env = "PAD_TARGET_RATIO", default_value = "2.5")]
    pub ratio: TargetRatio,
}

impl Cli {
    pub fn into_options(self) -> PadOptions {
        PadOptions {
            input_path: self.input,
            output_path: self.output,
            target_ratio: self.ratio,
        }
    }
}

/// Load the first `.env` found walking up from the working directory.
pub fn load_dotenv() {
    let candidates = [".env", "../.env", "../../.env"];
    for path in &candidates {
        if dotenvy::from_filename(path).is_ok() {
            tracing::info!("Loaded .env from: {path}");
            return;
        }
    }
    tracing::debug!("No .env file found, using system environment variables");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_library_defaults() {
        let cli = Cli::try_parse_from(["pad-image"]).unwrap();
        assert_eq!(cli.into_options(), PadOptions::default());
    }

    #[test]
    fn positional_paths_and_ratio_flag() {
        let cli = Cli::try_parse_from(["pad-image", "in.png", "out.webp", "--ratio", "16:9"])
            .unwrap();
        let opts = cli.into_options();
        assert_eq!(opts.input_path, PathBuf::from("in.png"));
        assert_eq!(opts.output_path, PathBuf::from("out.webp"));
        assert!((opts.target_ratio.get() - 16.0 / 9.0).abs() < 1e-12);
    }

    #[test]
    fn short_ratio_flag() {
        let cli = Cli::try_parse_from(["pad-image", "-r", "1.5"]).unwrap();
        assert_eq!(cli.ratio.get(), 1.5);
    }

    #[test]
    fn invalid_ratio_is_rejected() {
        assert!(Cli::try_parse_from(["pad-image", "--ratio", "0"]).is_err());
        assert!(Cli::try_parse_from(["pad-image", "--ratio", "-2"]).is_err());
        assert!(Cli::try_parse_from(["pad-image", "--ratio", "wide"]).is_err());
    }
}
