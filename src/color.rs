use std::collections::BTreeMap;

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Chart color configuration
// ---------------------------------------------------------------------------

/// User-adjustable chart colors. These are configuration defaults, not
/// mutable globals: the struct lives in the app state and is passed to the
/// chart renderers, which take whatever values it currently holds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartColors {
    /// "Found" line in the landings-over-time chart ("Fell" stays red).
    pub found_line: Color32,
    /// Bars of the category-distribution chart.
    pub category_bars: Color32,
    /// Bars of the top-heaviest chart.
    pub mass_bars: Color32,
}

impl Default for ChartColors {
    fn default() -> Self {
        ChartColors {
            found_line: Color32::from_rgb(0x1F, 0x78, 0xB4),   // blue
            category_bars: Color32::from_rgb(0xFF, 0x7F, 0x00), // orange
            mass_bars: Color32::from_rgb(0x33, 0xA0, 0x2C),     // green
        }
    }
}

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.75, 0.55);
            let rgb: Srgb = hsl.into_color();
            Color32::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Color mapping: category → Color32 (map point groups)
// ---------------------------------------------------------------------------

/// Maps each meteorite category to a distinct colour for the map view.
/// Records without a category fall back to gray.
#[derive(Debug, Clone, Default)]
pub struct ColorMap {
    mapping: BTreeMap<String, Color32>,
}

impl ColorMap {
    /// Build a colour map over the given categories.
    pub fn new(categories: &[String]) -> Self {
        let palette = generate_palette(categories.len());
        let mapping: BTreeMap<String, Color32> = categories
            .iter()
            .cloned()
            .zip(palette.into_iter())
            .collect();
        ColorMap { mapping }
    }

    /// Colour for a category; unknown/unmapped categories render gray.
    pub fn color_for(&self, category: Option<&str>) -> Color32 {
        category
            .and_then(|c| self.mapping.get(c))
            .copied()
            .unwrap_or(Color32::GRAY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_has_requested_length_and_distinct_hues() {
        assert!(generate_palette(0).is_empty());
        let colors = generate_palette(8);
        assert_eq!(colors.len(), 8);
        let unique: std::collections::BTreeSet<_> =
            colors.iter().map(|c| c.to_array()).collect();
        assert_eq!(unique.len(), 8);
    }

    #[test]
    fn unknown_categories_fall_back_to_gray() {
        let cm = ColorMap::new(&["HED".to_string(), "Lunar".to_string()]);
        assert_ne!(cm.color_for(Some("HED")), Color32::GRAY);
        assert_eq!(cm.color_for(Some("Martian")), Color32::GRAY);
        assert_eq!(cm.color_for(None), Color32::GRAY);
    }
}
