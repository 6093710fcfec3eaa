//! BT.601 luma (`0.299 R + 0.587 G + 0.114 B`) in 14-bit fixed point, rounded
//! to nearest.

use image::{DynamicImage, GrayImage, Luma, RgbImage};

const SHIFT: u32 = 14;
const R_WEIGHT: u32 = 4899;
const G_WEIGHT: u32 = 9617;
const B_WEIGHT: u32 = 1868;

pub fn rgb_to_gray(image: &RgbImage) -> GrayImage {
    GrayImage::from_fn(image.width(), image.height(), |x, y| {
        let [r, g, b] = image.get_pixel(x, y).0;
        let luma = r as u32 * R_WEIGHT + g as u32 * G_WEIGHT + b as u32 * B_WEIGHT;
        Luma([((luma + (1 << (SHIFT - 1))) >> SHIFT) as u8])
    })
}

/// Single 8-bit channel view of any decoded image. Alpha is ignored.
pub fn grayscale(image: &DynamicImage) -> GrayImage {
    match image {
        DynamicImage::ImageLuma8(buf) => buf.clone(),
        other => rgb_to_gray(&other.to_rgb8()),
    }
}
