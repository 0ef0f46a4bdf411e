use serde::{Deserialize, Serialize};

use crate::color::{map_to_standard_color, Rgb, DEFAULT_RGB};

/// Palette name used whenever detection cannot produce a real answer
pub const FALLBACK_COLOR: &str = "gray";

/// Confidence reported with the fallback result
pub const FALLBACK_CONFIDENCE: f64 = 0.5;

/// Most secondary colors reported alongside the primary
pub const MAX_SECONDARY: usize = 3;

/// One retained cluster, snapped to the palette
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorDetail {
    pub name: String,
    pub rgb: Rgb,
    pub percentage: f64,
}

impl ColorDetail {
    /// Build a detail whose name is the palette entry nearest `rgb`
    pub fn from_rgb(rgb: Rgb, percentage: f64) -> Self {
        Self {
            name: map_to_standard_color(rgb).to_string(),
            rgb,
            percentage,
        }
    }

    pub fn is_white_or_black(&self) -> bool {
        self.name == "white" || self.name == "black"
    }
}

/// Outcome of a detection run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectionResult {
    pub primary: String,
    pub secondary: Vec<String>,
    pub confidence: f64,
    pub details: Vec<ColorDetail>,
}

impl DetectionResult {
    /// Neutral answer returned when detection fails
    pub fn fallback() -> Self {
        Self {
            primary: FALLBACK_COLOR.to_string(),
            secondary: Vec::new(),
            confidence: FALLBACK_CONFIDENCE,
            details: vec![ColorDetail {
                name: FALLBACK_COLOR.to_string(),
                rgb: DEFAULT_RGB,
                percentage: 100.0,
            }],
        }
    }

    /// Build a result from a working list already sorted by percentage,
    /// highest first.
    ///
    /// Secondary names skip anything already reported, so a shade that snaps
    /// to the primary's name is not listed twice.
    pub fn from_ranked(details: Vec<ColorDetail>) -> Self {
        let Some(first) = details.first() else {
            return Self::fallback();
        };

        let primary = first.name.clone();
        let mut secondary: Vec<String> = Vec::with_capacity(MAX_SECONDARY);
        for detail in details.iter().skip(1) {
            if secondary.len() == MAX_SECONDARY {
                break;
            }
            if detail.name != primary && !secondary.contains(&detail.name) {
                secondary.push(detail.name.clone());
            }
        }

        Self {
            primary,
            secondary,
            confidence: calculate_confidence(&details),
            details,
        }
    }

    /// Whether this is the fallback signal the UI should ask the user to confirm
    pub fn is_inconclusive(&self) -> bool {
        self.primary == FALLBACK_COLOR && self.confidence == FALLBACK_CONFIDENCE
    }
}

/// Score how dominant the top color of a ranked list is
pub fn calculate_confidence(details: &[ColorDetail]) -> f64 {
    let Some(top) = details.first() else {
        return 0.0;
    };

    match top.percentage {
        p if p > 60.0 => 0.95,
        p if p > 40.0 => 0.85,
        p if p > 25.0 => 0.75,
        _ => 0.6,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detail(name: &str, percentage: f64) -> ColorDetail {
        ColorDetail {
            name: name.to_string(),
            rgb: DEFAULT_RGB,
            percentage,
        }
    }

    #[test]
    fn test_confidence_thresholds() {
        let confidence = |p: f64| calculate_confidence(&[detail("blue", p)]);
        assert_eq!(confidence(90.0), 0.95);
        assert_eq!(confidence(61.0), 0.95);
        assert_eq!(confidence(60.0), 0.85);
        assert_eq!(confidence(41.0), 0.85);
        assert_eq!(confidence(40.0), 0.75);
        assert_eq!(confidence(26.0), 0.75);
        assert_eq!(confidence(25.0), 0.6);
        assert_eq!(confidence(24.0), 0.6);
        assert_eq!(calculate_confidence(&[]), 0.0);
    }

    #[test]
    fn test_dominant_beats_balanced() {
        let dominant = [detail("blue", 90.0), detail("white", 10.0)];
        let balanced = [detail("green", 34.0), detail("blue", 33.0), detail("red", 33.0)];
        assert!(calculate_confidence(&dominant) > calculate_confidence(&balanced));
    }

    #[test]
    fn test_from_ranked_picks_primary_and_secondary() {
        let result = DetectionResult::from_ranked(vec![
            detail("navy", 40.0),
            detail("red", 20.0),
            detail("gold", 15.0),
            detail("teal", 15.0),
            detail("pink", 10.0),
        ]);

        assert_eq!(result.primary, "navy");
        assert_eq!(result.secondary, vec!["red", "gold", "teal"]);
        assert_eq!(result.confidence, 0.75);
        assert_eq!(result.details.len(), 5);
    }

    #[test]
    fn test_secondary_never_repeats_names() {
        let result = DetectionResult::from_ranked(vec![
            detail("blue", 50.0),
            detail("blue", 30.0),
            detail("red", 10.0),
            detail("red", 10.0),
        ]);

        assert_eq!(result.primary, "blue");
        assert_eq!(result.secondary, vec!["red"]);
    }

    #[test]
    fn test_fallback() {
        let result = DetectionResult::fallback();
        assert_eq!(result.primary, "gray");
        assert!(result.secondary.is_empty());
        assert_eq!(result.confidence, 0.5);
        assert_eq!(result.details, vec![detail("gray", 100.0)]);
        assert_eq!(result.details[0].rgb, [128, 128, 128]);
        assert!(result.is_inconclusive());

        assert_eq!(DetectionResult::from_ranked(Vec::new()), result);
    }

    #[test]
    fn test_from_rgb_names_detail() {
        let detail = ColorDetail::from_rgb([21, 96, 189], 90.0);
        assert_eq!(detail.name, "denim");
        assert!(!detail.is_white_or_black());
        assert!(ColorDetail::from_rgb([2, 2, 2], 1.0).is_white_or_black());
    }

    #[test]
    fn test_result_json_shape() {
        let json = serde_json::to_value(DetectionResult::fallback()).unwrap();
        assert_eq!(json["primary"], "gray");
        assert_eq!(json["confidence"], 0.5);
        assert_eq!(json["details"][0]["rgb"], serde_json::json!([128, 128, 128]));
        assert_eq!(json["details"][0]["percentage"], 100.0);
    }
}
