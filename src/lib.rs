//! StyleSnap color detection
//!
//! Tags clothing photos with standardized color names: the dominant color,
//! up to three secondary colors and a confidence score.
//!
//! ```no_run
//! use stylesnap_colors::{detect_colors, DetectOptions};
//!
//! let bytes = std::fs::read("shirt.jpg").unwrap();
//! let result = detect_colors(&bytes, &DetectOptions::default());
//! println!("{} {:?}", result.primary, result.secondary);
//! ```

pub mod color;
pub mod config;
pub mod detector;
pub mod error;
pub mod logging;

pub use color::{
    analogous_colors, complementary_color, hex_for, is_valid_color, map_to_standard_color,
    StandardColor, STANDARD_PALETTE,
};
pub use detector::{detect_colors, ColorDetail, ColorExtractor, DetectOptions, DetectionResult};
pub use error::{DetectError, DetectResult};
