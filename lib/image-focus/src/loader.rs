//! Image loading and the environment diagnostics logged before each operation.

use crate::{ImageFocusError, ImageFocusResult};
use image::{DynamicImage, ImageReader};
use std::{env, path::Path};

/// Decodes the image at `path`, sniffing the format from its content.
pub fn load(path: impl AsRef<Path>) -> ImageFocusResult<DynamicImage> {
    let path = path.as_ref();
    if !path.is_file() {
        return Err(ImageFocusError::NotFound(path.to_path_buf()));
    }

    let image = ImageReader::open(path)?.with_guessed_format()?.decode()?;
    log::debug!(
        "Loaded {} ({}x{}, {:?})",
        path.display(),
        image.width(),
        image.height(),
        image.color()
    );

    Ok(image)
}

pub fn log_environment(path: &Path) {
    match env::current_dir() {
        Ok(dir) => log::info!("Current working directory: {}", dir.display()),
        Err(e) => log::warn!("Current working directory unavailable: {e}"),
    }

    log::info!("Image path: {}", path.display());
    log::info!("Image exists: {}", path.exists());
}
