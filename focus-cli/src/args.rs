use clap::Parser;
use image_focus::DEFAULT_THRESHOLD;
use std::path::PathBuf;

/// Classify an image as Sharp or Blurry from its Laplacian variance.
#[derive(Parser, Debug, Clone)]
#[command(name = "check_sharpness", version, about)]
pub struct CheckSharpnessArgs {
    /// Image to inspect.
    pub image_path: PathBuf,

    /// Scores below this value are reported as Blurry.
    #[arg(
        default_value_t = DEFAULT_THRESHOLD,
        value_parser = parse_threshold,
        allow_negative_numbers = true
    )]
    pub threshold: f64,
}

/// Sharpen an image in place with a fixed 3x3 kernel.
#[derive(Parser, Debug, Clone)]
#[command(name = "sharpen_image", version, about)]
pub struct SharpenImageArgs {
    /// Image to overwrite with its sharpened version.
    pub image_path: PathBuf,
}

/// Check that the image and numeric primitives work in this environment.
#[derive(Parser, Debug, Clone)]
#[command(name = "deps_selftest", version, about)]
pub struct SelfTestArgs {}

fn parse_threshold(value: &str) -> Result<f64, String> {
    let threshold = value
        .parse::<f64>()
        .map_err(|e| format!("`{value}` is not a number: {e}"))?;

    if threshold.is_finite() {
        Ok(threshold)
    } else {
        Err(format!("`{value}` is not a finite number"))
    }
}
