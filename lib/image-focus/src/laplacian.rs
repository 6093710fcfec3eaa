use crate::{convolve, stats};
use image::GrayImage;

/// Aperture-1 Laplacian kernel
pub const LAPLACIAN_KERNEL: [i32; 9] = [0, 1, 0, 1, -4, 1, 0, 1, 0];

/// Laplacian response of every pixel, row-major, unclamped.
pub fn laplacian(image: &GrayImage) -> Vec<f64> {
    let (width, height) = image.dimensions();
    let mut response = Vec::with_capacity(width as usize * height as usize);

    for y in 0..height {
        for x in 0..width {
            let sum = convolve::apply_at(width, height, x, y, &LAPLACIAN_KERNEL, |px, py| {
                image.get_pixel(px, py)[0] as i32
            });
            response.push(sum as f64);
        }
    }

    response
}

/// Population variance of the Laplacian response. Higher means sharper.
pub fn laplacian_variance(image: &GrayImage) -> f64 {
    stats::variance(&laplacian(image)).unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Luma;

    #[test]
    fn test_flat_image_has_zero_variance() {
        let image = GrayImage::from_pixel(32, 24, Luma([137]));
        assert!(laplacian(&image).iter().all(|v| *v == 0.0));
        assert_eq!(laplacian_variance(&image), 0.0);
    }

    #[test]
    fn test_empty_image() {
        let image = GrayImage::new(0, 0);
        assert!(laplacian(&image).is_empty());
        assert_eq!(laplacian_variance(&image), 0.0);
    }

    #[test]
    fn test_single_bright_pixel() {
        let mut image = GrayImage::new(5, 5);
        image.put_pixel(2, 2, Luma([255]));

        let response = laplacian(&image);
        assert_eq!(response.len(), 25);
        assert_eq!(response[2 * 5 + 2], -4.0 * 255.0);
        assert_eq!(response[5 + 2], 255.0);
        assert_eq!(response[2 * 5 + 1], 255.0);
        assert_eq!(response[0], 0.0);

        // mean is zero, 16 + 4 squared units of 255 over 25 samples
        assert_eq!(laplacian_variance(&image), 20.0 * 255.0 * 255.0 / 25.0);
    }

    #[test]
    fn test_response_keeps_sign() {
        let mut image = GrayImage::from_pixel(3, 3, Luma([200]));
        image.put_pixel(1, 1, Luma([0]));
        let response = laplacian(&image);
        assert_eq!(response[4], 800.0);
        // top edge reflects onto the dark centre twice
        assert_eq!(response[1], -400.0);
    }

    #[test]
    fn test_single_row_image() {
        let image = GrayImage::from_fn(6, 1, |x, _| Luma([if x % 2 == 0 { 0 } else { 100 }]));
        let response = laplacian(&image);
        assert_eq!(response.len(), 6);
        assert!(laplacian_variance(&image) > 0.0);
    }

    #[test]
    fn test_sharp_beats_blurred() {
        let checker = GrayImage::from_fn(64, 64, |x, y| {
            Luma([if (x / 8 + y / 8) % 2 == 0 { 0 } else { 255 }])
        });
        let blurred = imageproc::filter::gaussian_blur_f32(&checker, 3.0);

        assert!(laplacian_variance(&checker) > laplacian_variance(&blurred));
    }
}
