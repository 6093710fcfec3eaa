//! Runtime self-check: exercises grayscale conversion, the Laplacian and the
//! statistics helpers on synthetic data, no files involved.

use crate::{grayscale::rgb_to_gray, laplacian::laplacian_variance, stats};
use image::{Rgb, RgbImage};
use imageproc::{drawing::draw_filled_rect_mut, rect::Rect};

pub const SYNTHETIC_SIZE: u32 = 100;

const NUMERIC_SAMPLE: [f64; 5] = [1.0, 2.0, 3.0, 4.0, 5.0];

#[derive(Debug, Clone, PartialEq)]
pub struct CheckOutcome {
    pub name: &'static str,
    pub passed: bool,
    pub detail: String,
}

impl CheckOutcome {
    fn pass(name: &'static str, detail: String) -> Self {
        Self {
            name,
            passed: true,
            detail,
        }
    }

    fn fail(name: &'static str, detail: String) -> Self {
        Self {
            name,
            passed: false,
            detail,
        }
    }
}

#[derive(Debug, Clone)]
pub struct SelfTestReport {
    pub checks: Vec<CheckOutcome>,
}

impl SelfTestReport {
    pub fn passed(&self) -> bool {
        self.checks.iter().all(|c| c.passed)
    }
}

/// 100x100 black image with a white 50x50 square in the middle.
pub fn synthetic_square() -> RgbImage {
    let mut image = RgbImage::new(SYNTHETIC_SIZE, SYNTHETIC_SIZE);
    let quarter = SYNTHETIC_SIZE / 4;

    draw_filled_rect_mut(
        &mut image,
        Rect::at(quarter as i32, quarter as i32).of_size(SYNTHETIC_SIZE / 2, SYNTHETIC_SIZE / 2),
        Rgb([255, 255, 255]),
    );

    image
}

pub fn check_vision() -> CheckOutcome {
    let gray = rgb_to_gray(&synthetic_square());
    let variance = laplacian_variance(&gray);

    if variance.is_finite() && variance > 0.0 {
        CheckOutcome::pass("vision", format!("Laplacian variance: {variance}"))
    } else {
        CheckOutcome::fail("vision", format!("unexpected Laplacian variance: {variance}"))
    }
}

pub fn check_numeric() -> CheckOutcome {
    match (stats::mean(&NUMERIC_SAMPLE), stats::std_dev(&NUMERIC_SAMPLE)) {
        (Some(mean), Some(std)) => {
            CheckOutcome::pass("numeric", format!("Mean: {mean}, Std: {std}"))
        }
        _ => CheckOutcome::fail("numeric", "no statistics for a non-empty sample".to_string()),
    }
}

pub fn run_all() -> SelfTestReport {
    let checks = vec![check_vision(), check_numeric()];

    for check in &checks {
        if check.passed {
            log::debug!("{} check passed: {}", check.name, check.detail);
        } else {
            log::warn!("{} check failed: {}", check.name, check.detail);
        }
    }

    SelfTestReport { checks }
}
