//! Standard wardrobe palette and the color-wheel helpers built on it

mod harmony;
mod matching;
mod standard_palette;

pub use harmony::{analogous_colors, complementary_color, invert, rotate_hue, ANALOGOUS_OFFSET};
pub use matching::{color_distance, map_to_standard_color, nearest_standard_color};
pub use standard_palette::{
    color_names, colors_by_category, hex_for, is_valid_color, rgb_for, standard_color,
    ColorCategory, Rgb, StandardColor, DEFAULT_HEX, DEFAULT_RGB, STANDARD_PALETTE,
};
