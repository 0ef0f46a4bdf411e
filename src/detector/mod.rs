//! Dominant color detection for clothing photos
//!
//! The pipeline decodes and downscales the image, samples usable pixels,
//! clusters them with k-means, snaps each centroid to the standard palette and
//! scores how dominant the top color is.

mod extractor;
mod kmeans;
mod options;
mod result;
mod sampling;

pub use extractor::{detect_colors, suppress_white_black, ColorExtractor};
pub use kmeans::{kmeans, ColorCluster, CONVERGENCE_DISTANCE, MAX_ITERATIONS};
pub use options::DetectOptions;
pub use result::{
    calculate_confidence, ColorDetail, DetectionResult, FALLBACK_COLOR, FALLBACK_CONFIDENCE,
    MAX_SECONDARY,
};
pub use sampling::{
    decode_image, is_usable_pixel, prepare_pixels, sample_pixels, MAX_BRIGHTNESS, MAX_DIMENSION,
    MIN_ALPHA, MIN_BRIGHTNESS,
};
