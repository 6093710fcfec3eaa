//! Blur detection and sharpening for still images.
//!
//! - [`sharpness`] scores focus with the variance of the Laplacian and turns the
//!   score into a [`Verdict`].
//! - [`sharpen`] applies a fixed 3x3 sharpening kernel and rewrites the source
//!   file through [`atomic::AtomicReplace`].
//! - [`selftest`] runs the same primitives on synthetic data to confirm the
//!   runtime works.

pub mod atomic;
pub mod grayscale;
pub mod laplacian;
pub mod loader;
pub mod selftest;
pub mod sharpen;
pub mod sharpness;
pub mod stats;

mod convolve;

use image::DynamicImage;
use std::path::PathBuf;

pub use grayscale::grayscale;
pub use laplacian::{laplacian, laplacian_variance};
pub use sharpen::{SharpenConfig, sharpen, sharpen_image};
pub use sharpness::{DEFAULT_THRESHOLD, SharpnessConfig, SharpnessReport, Verdict, is_blurry};

pub type ImageFocusResult<T> = Result<T, ImageFocusError>;

#[derive(thiserror::Error, Debug)]
pub enum ImageFocusError {
    #[error("Image not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("Invalid path: {}", .0.display())]
    InvalidPath(PathBuf),
    #[error("Unsupported image format: {}", .0.display())]
    UnsupportedFormat(PathBuf),
    #[error("Replace error: {0}")]
    Persist(#[from] tempfile::PersistError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
}

/// An in-memory transformation of a decoded image.
pub trait Effect {
    fn apply(&self, image: &mut DynamicImage) -> ImageFocusResult<()>;
}
