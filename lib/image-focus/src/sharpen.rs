use crate::{
    Effect, ImageFocusError, ImageFocusResult, atomic::AtomicReplace, convolve, loader,
};
use derivative::Derivative;
use derive_setters::Setters;
use image::{DynamicImage, ImageBuffer, ImageFormat, Pixel};
use std::{
    io::{BufWriter, Write},
    path::Path,
};

/// Centre 5, orthogonal neighbours -1, corners 0
pub const SHARPEN_KERNEL: [i32; 9] = [0, -1, 0, -1, 5, -1, 0, -1, 0];

pub const TEMP_SUFFIX: &str = "_sharpened";

/// Sharpen effect configuration
#[derive(Debug, Clone, Derivative, Setters)]
#[derivative(Default)]
#[setters(prefix = "with_", into)]
#[non_exhaustive]
pub struct SharpenConfig {
    /// Appended to the file name of the staging file written next to the target
    #[derivative(Default(value = "TEMP_SUFFIX.to_string()"))]
    temp_suffix: String,
}

impl SharpenConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load, sharpen, stage next to `path`, then atomically replace `path`.
    ///
    /// The encoder is picked from the extension of `path`. Nothing is written
    /// if loading or encoding fails.
    pub fn sharpen_in_place(&self, path: impl AsRef<Path>) -> ImageFocusResult<()> {
        let path = path.as_ref();
        let mut image = loader::load(path)?;

        let format = ImageFormat::from_path(path)
            .map_err(|_| ImageFocusError::UnsupportedFormat(path.to_path_buf()))?;

        self.apply(&mut image)?;

        let mut pending = AtomicReplace::new(path, &self.temp_suffix)?;
        {
            let mut writer = BufWriter::new(pending.file_mut());
            image.write_to(&mut writer, format)?;
            writer.flush()?;
        }
        pending.commit()?;

        Ok(())
    }

    /// Returns `false` after logging the failure; the file is untouched then.
    pub fn sharpen_image(&self, path: impl AsRef<Path>) -> bool {
        let path = path.as_ref();
        loader::log_environment(path);

        match self.sharpen_in_place(path) {
            Ok(_) => {
                log::info!("Replaced {} with its sharpened version", path.display());
                true
            }
            Err(e) => {
                log::error!("Error sharpening image {}: {e:?}", path.display());
                false
            }
        }
    }
}

impl Effect for SharpenConfig {
    fn apply(&self, image: &mut DynamicImage) -> ImageFocusResult<()> {
        *image = sharpen(image);
        Ok(())
    }
}

pub fn sharpen_image(path: impl AsRef<Path>) -> bool {
    SharpenConfig::new().sharpen_image(path)
}

/// Applies [`SHARPEN_KERNEL`] to every colour channel, saturating to `0..=255`.
///
/// Alpha is carried through. Inputs deeper than 8 bits are converted to the
/// 8-bit layout with the same channel count first.
pub fn sharpen(image: &DynamicImage) -> DynamicImage {
    match image {
        DynamicImage::ImageLuma8(buf) => DynamicImage::ImageLuma8(sharpen_buffer(buf, 1)),
        DynamicImage::ImageLumaA8(buf) => DynamicImage::ImageLumaA8(sharpen_buffer(buf, 1)),
        DynamicImage::ImageRgb8(buf) => DynamicImage::ImageRgb8(sharpen_buffer(buf, 3)),
        DynamicImage::ImageRgba8(buf) => DynamicImage::ImageRgba8(sharpen_buffer(buf, 3)),
        other => match other.color().channel_count() {
            1 => DynamicImage::ImageLuma8(sharpen_buffer(&other.to_luma8(), 1)),
            2 => DynamicImage::ImageLumaA8(sharpen_buffer(&other.to_luma_alpha8(), 1)),
            3 => DynamicImage::ImageRgb8(sharpen_buffer(&other.to_rgb8(), 3)),
            _ => DynamicImage::ImageRgba8(sharpen_buffer(&other.to_rgba8(), 3)),
        },
    }
}

fn sharpen_buffer<P>(
    image: &ImageBuffer<P, Vec<u8>>,
    color_channels: usize,
) -> ImageBuffer<P, Vec<u8>>
where
    P: Pixel<Subpixel = u8>,
{
    let (width, height) = image.dimensions();
    let mut result = image.clone();

    for y in 0..height {
        for x in 0..width {
            let pixel = result.get_pixel_mut(x, y);

            for c in 0..color_channels {
                let sum = convolve::apply_at(width, height, x, y, &SHARPEN_KERNEL, |px, py| {
                    image.get_pixel(px, py).channels()[c] as i32
                });
                pixel.channels_mut()[c] = sum.clamp(0, 255) as u8;
            }
        }
    }

    result
}
