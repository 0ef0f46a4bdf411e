use serde::{Deserialize, Serialize};

/// An 8-bit RGB triple
pub type Rgb = [u8; 3];

/// Hex value reported for names outside the palette
pub const DEFAULT_HEX: &str = "#808080";

/// RGB value reported for names outside the palette
pub const DEFAULT_RGB: Rgb = [128, 128, 128];

/// Palette groupings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorCategory {
    Neutral,
    Primary,
    Secondary,
    Extended,
}

/// A named reference color that detected colors are snapped to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StandardColor {
    pub name: &'static str,
    pub hex: &'static str,
    pub rgb: Rgb,
    pub category: ColorCategory,
}

const fn entry(
    name: &'static str,
    hex: &'static str,
    rgb: Rgb,
    category: ColorCategory,
) -> StandardColor {
    StandardColor {
        name,
        hex,
        rgb,
        category,
    }
}

use ColorCategory::{Extended, Neutral, Primary, Secondary};

/// The wardrobe palette, in lookup order.
///
/// Order matters: nearest-color ties go to the earlier entry, which is why
/// `green` wins over `lime` for pure `[0, 255, 0]`.
pub static STANDARD_PALETTE: [StandardColor; 44] = [
    entry("black", "#000000", [0, 0, 0], Neutral),
    entry("white", "#FFFFFF", [255, 255, 255], Neutral),
    entry("gray", "#808080", [128, 128, 128], Neutral),
    entry("beige", "#F5F5DC", [245, 245, 220], Neutral),
    entry("brown", "#8B4513", [139, 69, 19], Neutral),
    entry("charcoal", "#36454F", [54, 69, 79], Neutral),
    entry("cream", "#FFFDD0", [255, 253, 208], Neutral),
    entry("red", "#FF0000", [255, 0, 0], Primary),
    entry("blue", "#0000FF", [0, 0, 255], Primary),
    entry("yellow", "#FFFF00", [255, 255, 0], Primary),
    entry("green", "#00FF00", [0, 255, 0], Secondary),
    entry("orange", "#FFA500", [255, 165, 0], Secondary),
    entry("purple", "#800080", [128, 0, 128], Secondary),
    entry("pink", "#FFC0CB", [255, 192, 203], Secondary),
    entry("navy", "#000080", [0, 0, 128], Extended),
    entry("teal", "#008080", [0, 128, 128], Extended),
    entry("maroon", "#800000", [128, 0, 0], Extended),
    entry("olive", "#808000", [128, 128, 0], Extended),
    entry("gold", "#FFD700", [255, 215, 0], Extended),
    entry("silver", "#C0C0C0", [192, 192, 192], Extended),
    entry("khaki", "#C3B091", [195, 176, 145], Extended),
    entry("tan", "#D2B48C", [210, 180, 140], Extended),
    entry("burgundy", "#800020", [128, 0, 32], Extended),
    entry("indigo", "#4B0082", [75, 0, 130], Extended),
    entry("turquoise", "#40E0D0", [64, 224, 208], Extended),
    entry("coral", "#FF7F50", [255, 127, 80], Extended),
    entry("mint", "#98FF98", [152, 255, 152], Extended),
    entry("lavender", "#E6E6FA", [230, 230, 250], Extended),
    entry("peach", "#FFE5B4", [255, 229, 180], Extended),
    entry("salmon", "#FA8072", [250, 128, 114], Extended),
    entry("lime", "#00FF00", [0, 255, 0], Extended),
    entry("cyan", "#00FFFF", [0, 255, 255], Extended),
    entry("magenta", "#FF00FF", [255, 0, 255], Extended),
    entry("denim", "#1560BD", [21, 96, 189], Extended),
    entry("emerald", "#50C878", [80, 200, 120], Extended),
    entry("ruby", "#E0115F", [224, 17, 95], Extended),
    entry("sapphire", "#0F52BA", [15, 82, 186], Extended),
    entry("amber", "#FFBF00", [255, 191, 0], Extended),
    entry("rose", "#FF007F", [255, 0, 127], Extended),
    entry("forest", "#228B22", [34, 139, 34], Extended),
    entry("sky", "#87CEEB", [135, 206, 235], Extended),
    entry("wine", "#722F37", [114, 47, 55], Extended),
    entry("mustard", "#FFDB58", [255, 219, 88], Extended),
    entry("plum", "#8E4585", [142, 69, 133], Extended),
];

/// Look up a palette entry by name
pub fn standard_color(name: &str) -> Option<&'static StandardColor> {
    STANDARD_PALETTE.iter().find(|color| color.name == name)
}

pub fn is_valid_color(name: &str) -> bool {
    standard_color(name).is_some()
}

/// All palette names in palette order
pub fn color_names() -> Vec<&'static str> {
    STANDARD_PALETTE.iter().map(|color| color.name).collect()
}

pub fn colors_by_category(category: ColorCategory) -> Vec<&'static str> {
    STANDARD_PALETTE
        .iter()
        .filter(|color| color.category == category)
        .map(|color| color.name)
        .collect()
}

/// Hex value for a palette name, gray for anything unknown
pub fn hex_for(name: &str) -> &'static str {
    standard_color(name).map(|c| c.hex).unwrap_or(DEFAULT_HEX)
}

/// RGB value for a palette name, gray for anything unknown
pub fn rgb_for(name: &str) -> Rgb {
    standard_color(name).map(|c| c.rgb).unwrap_or(DEFAULT_RGB)
}
