use super::standard_palette::{Rgb, StandardColor, STANDARD_PALETTE};

/// Euclidean distance between two RGB colors
pub fn color_distance(a: Rgb, b: Rgb) -> f64 {
    let dr = a[0] as f64 - b[0] as f64;
    let dg = a[1] as f64 - b[1] as f64;
    let db = a[2] as f64 - b[2] as f64;

    (dr * dr + dg * dg + db * db).sqrt()
}

/// Find the palette entry nearest to `rgb`.
///
/// Ties go to the entry that comes first in [`STANDARD_PALETTE`].
pub fn nearest_standard_color(rgb: Rgb) -> &'static StandardColor {
    let mut closest = &STANDARD_PALETTE[0];
    let mut min_distance = f64::INFINITY;

    for color in STANDARD_PALETTE.iter() {
        let distance = color_distance(rgb, color.rgb);
        if distance < min_distance {
            min_distance = distance;
            closest = color;
        }
    }

    closest
}

/// Name of the palette entry nearest to `rgb`
pub fn map_to_standard_color(rgb: Rgb) -> &'static str {
    nearest_standard_color(rgb).name
}
