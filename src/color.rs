use std::collections::BTreeMap;

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

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
// Color mapping: organism genus → Color32
// ---------------------------------------------------------------------------

/// Assigns each organism genus a stable, distinct colour for the plot and
/// its legend.
#[derive(Debug, Clone)]
pub struct ColorMap {
    mapping: BTreeMap<String, Color32>,
    default_color: Color32,
}

impl ColorMap {
    /// Build a colour map over the genera in their dataset order.
    pub fn new(organisms: Vec<String>) -> Self {
        let palette = generate_palette(organisms.len());
        let mapping: BTreeMap<String, Color32> =
            organisms.into_iter().zip(palette).collect();

        ColorMap {
            mapping,
            default_color: Color32::GRAY,
        }
    }

    /// Look up the colour for a genus; unknown genera fall back to gray.
    pub fn color_for(&self, organism: &str) -> Color32 {
        self.mapping
            .get(organism)
            .copied()
            .unwrap_or(self.default_color)
    }
}
