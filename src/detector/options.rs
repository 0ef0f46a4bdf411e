use serde::{Deserialize, Serialize};

/// Tuning knobs for a single detection run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DetectOptions {
    /// Upper bound on the number of clusters requested
    pub max_colors: usize,

    /// Pixel sampling stride: 1 samples every pixel, 10 every tenth pixel
    pub quality: usize,

    /// Keep white and black out of the primary slot when anything else was found
    pub exclude_white_black: bool,
}

impl Default for DetectOptions {
    fn default() -> Self {
        Self {
            max_colors: 5,
            quality: 10,
            exclude_white_black: true,
        }
    }
}

impl DetectOptions {
    /// Sampling stride with a zero quality treated as "every pixel"
    pub fn stride(&self) -> usize {
        self.quality.max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options_default() {
        let options = DetectOptions::default();
        assert_eq!(options.max_colors, 5);
        assert_eq!(options.quality, 10);
        assert!(options.exclude_white_black);
    }

    #[test]
    fn test_partial_options_use_defaults() {
        let options: DetectOptions = serde_json::from_str(r#"{"maxColors": 3}"#).unwrap();
        assert_eq!(options.max_colors, 3);
        assert_eq!(options.quality, 10);
        assert!(options.exclude_white_black);
    }

    #[test]
    fn test_zero_quality_stride() {
        let options = DetectOptions {
            quality: 0,
            ..Default::default()
        };
        assert_eq!(options.stride(), 1);
    }
}
