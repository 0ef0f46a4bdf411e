use std::fs;
use std::path::Path;

use image::DynamicImage;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, warn};

use super::kmeans::kmeans;
use super::options::DetectOptions;
use super::result::{ColorDetail, DetectionResult};
use super::sampling::{decode_image, prepare_pixels, sample_pixels};
use crate::color::{Rgb, DEFAULT_RGB};
use crate::error::{DetectError, DetectResult};

/// Detects the dominant garment colors of an image.
///
/// Centroid seeding draws from `R`, so a seeded generator makes runs
/// reproducible. Each call works on its own pixel buffer; the extractor only
/// carries the random source between calls.
pub struct ColorExtractor<R = StdRng> {
    rng: R,
}

impl ColorExtractor<StdRng> {
    /// Extractor seeded from OS entropy
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Extractor with a fixed seed, for reproducible clustering
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl Default for ColorExtractor<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> ColorExtractor<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Detect colors from encoded image bytes. Never fails: any error
    /// degrades to [`DetectionResult::fallback`].
    pub fn detect_colors(&mut self, bytes: &[u8], options: &DetectOptions) -> DetectionResult {
        let result = self.try_detect_colors(bytes, options);
        settle(result)
    }

    /// Same as [`Self::detect_colors`] for an already decoded image
    pub fn detect_colors_in_image(
        &mut self,
        img: &DynamicImage,
        options: &DetectOptions,
    ) -> DetectionResult {
        let result = self.try_detect_colors_in_image(img, options);
        settle(result)
    }

    /// Same as [`Self::detect_colors`] for an image file on disk
    pub fn detect_colors_from_path(
        &mut self,
        path: impl AsRef<Path>,
        options: &DetectOptions,
    ) -> DetectionResult {
        let path = path.as_ref();
        info!("Detecting colors in {:?}", path);
        let result = fs::read(path)
            .map_err(DetectError::from)
            .and_then(|bytes| self.try_detect_colors(&bytes, options));
        settle(result)
    }

    /// Detection with the failure exposed instead of replaced by the fallback
    pub fn try_detect_colors(
        &mut self,
        bytes: &[u8],
        options: &DetectOptions,
    ) -> DetectResult<DetectionResult> {
        let img = decode_image(bytes)?;
        self.try_detect_colors_in_image(&img, options)
    }

    pub fn try_detect_colors_in_image(
        &mut self,
        img: &DynamicImage,
        options: &DetectOptions,
    ) -> DetectResult<DetectionResult> {
        if options.max_colors == 0 {
            return Err(DetectError::InvalidOptions(
                "max_colors must be at least 1".to_string(),
            ));
        }

        let pixels = prepare_pixels(img);
        let samples = sample_pixels(&pixels, options.stride());
        let ranked = self.dominant_colors(&samples, options.max_colors);
        let working = suppress_white_black(ranked, options.exclude_white_black);
        let result = DetectionResult::from_ranked(working);

        debug!(
            "Detected primary {} (secondary {:?}, confidence {})",
            result.primary, result.secondary, result.confidence
        );
        Ok(result)
    }

    /// Cluster the samples and rank the non-empty clusters by share, highest first
    fn dominant_colors(&mut self, samples: &[Rgb], max_colors: usize) -> Vec<ColorDetail> {
        if samples.is_empty() {
            debug!("No usable pixels after filtering, reporting neutral gray");
            return vec![ColorDetail::from_rgb(DEFAULT_RGB, 100.0)];
        }

        let total = samples.len();
        let mut details: Vec<ColorDetail> = kmeans(samples, max_colors, &mut self.rng)
            .into_iter()
            .filter(|cluster| cluster.pixel_count > 0)
            .map(|cluster| ColorDetail::from_rgb(cluster.centroid, cluster.percentage(total)))
            .collect();

        details.sort_by(|a, b| b.percentage.total_cmp(&a.percentage));
        details
    }
}

fn settle(result: DetectResult<DetectionResult>) -> DetectionResult {
    result.unwrap_or_else(|e| {
        warn!("Color detection failed: {}. Using fallback.", e);
        DetectionResult::fallback()
    })
}

/// Drop white and black from a ranked list, unless nothing else would remain
pub fn suppress_white_black(details: Vec<ColorDetail>, exclude: bool) -> Vec<ColorDetail> {
    if !exclude {
        return details;
    }

    let colored: Vec<ColorDetail> = details
        .iter()
        .filter(|detail| !detail.is_white_or_black())
        .cloned()
        .collect();

    if colored.is_empty() {
        details
    } else {
        colored
    }
}

/// Detect colors from encoded image bytes using an entropy-seeded extractor
pub fn detect_colors(bytes: &[u8], options: &DetectOptions) -> DetectionResult {
    ColorExtractor::new().detect_colors(bytes, options)
}
