use palette::{FromColor, Hsl, ShiftHue, Srgb};

use super::matching::map_to_standard_color;
use super::standard_palette::{standard_color, Rgb};

/// Hue offset used for analogous colors, in degrees
pub const ANALOGOUS_OFFSET: f32 = 30.0;

/// Rotate the hue of `rgb` by `degrees` on the HSL color wheel.
///
/// Achromatic colors (black, white and grays) come back unchanged.
pub fn rotate_hue(rgb: Rgb, degrees: f32) -> Rgb {
    if rgb[0] == rgb[1] && rgb[1] == rgb[2] {
        return rgb;
    }

    let srgb: Srgb = Srgb::new(rgb[0], rgb[1], rgb[2]).into_format();
    let hsl: Hsl = Hsl::from_color(srgb);
    let rotated: Srgb = Srgb::from_color(hsl.shift_hue(degrees));

    [
        to_channel(rotated.red),
        to_channel(rotated.green),
        to_channel(rotated.blue),
    ]
}

fn to_channel(value: f32) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// Channel-wise inverse of an RGB color
pub fn invert(rgb: Rgb) -> Rgb {
    [255 - rgb[0], 255 - rgb[1], 255 - rgb[2]]
}

/// Palette name opposite `name`, or `None` if `name` is not in the palette
pub fn complementary_color(name: &str) -> Option<&'static str> {
    let color = standard_color(name)?;
    Some(map_to_standard_color(invert(color.rgb)))
}

/// The two palette names 30 degrees either side of `name` on the color wheel.
///
/// Returns an empty list for names outside the palette.
pub fn analogous_colors(name: &str) -> Vec<&'static str> {
    let Some(color) = standard_color(name) else {
        return Vec::new();
    };

    vec![
        map_to_standard_color(rotate_hue(color.rgb, ANALOGOUS_OFFSET)),
        map_to_standard_color(rotate_hue(color.rgb, -ANALOGOUS_OFFSET)),
    ]
}
