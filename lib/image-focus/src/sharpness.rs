use crate::{ImageFocusResult, grayscale::grayscale, laplacian::laplacian_variance, loader};
use derivative::Derivative;
use derive_setters::Setters;
use std::{fmt, path::Path};

/// Laplacian variance below this is reported as blurry
pub const DEFAULT_THRESHOLD: f64 = 400.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Sharp,
    Blurry,
}

impl Verdict {
    pub fn name(&self) -> &'static str {
        match self {
            Verdict::Sharp => "Sharp",
            Verdict::Blurry => "Blurry",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SharpnessReport {
    pub score: f64,
    pub verdict: Verdict,
}

/// Blur classifier configuration
#[derive(Debug, Clone, Derivative, Setters)]
#[derivative(Default)]
#[setters(prefix = "with_")]
#[non_exhaustive]
pub struct SharpnessConfig {
    #[derivative(Default(value = "DEFAULT_THRESHOLD"))]
    threshold: f64,
}

impl SharpnessConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// `Blurry` strictly below the threshold, `Sharp` at or above it.
    pub fn verdict(&self, score: f64) -> Verdict {
        if score < self.threshold {
            Verdict::Blurry
        } else {
            Verdict::Sharp
        }
    }

    /// Loads `path` as grayscale and scores it.
    pub fn measure(&self, path: impl AsRef<Path>) -> ImageFocusResult<SharpnessReport> {
        let gray = grayscale(&loader::load(path)?);
        let score = laplacian_variance(&gray);

        Ok(SharpnessReport {
            score,
            verdict: self.verdict(score),
        })
    }

    /// Never fails: anything that prevents scoring the image yields `Blurry`.
    pub fn classify(&self, path: impl AsRef<Path>) -> Verdict {
        let path = path.as_ref();
        loader::log_environment(path);

        match self.measure(path) {
            Ok(report) => {
                log::info!("Laplacian variance: {}", report.score);
                log::info!("{}", report.verdict);
                report.verdict
            }
            Err(e) => {
                log::error!("Error processing image {}: {e:?}", path.display());
                Verdict::Blurry
            }
        }
    }
}

pub fn is_blurry(path: impl AsRef<Path>, threshold: f64) -> Verdict {
    SharpnessConfig::new().with_threshold(threshold).classify(path)
}
