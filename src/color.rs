use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

use crate::data::model::RankingEntry;

// ---------------------------------------------------------------------------
// Chart palette
// ---------------------------------------------------------------------------

/// First slice/bar starts at a blue hue so a single group is not drawn red.
const BASE_HUE: f32 = 210.0;
const SATURATION: f32 = 0.65;
/// Neighbouring groups alternate between these two lightness levels.
const LIGHTNESS: [f32; 2] = [0.50, 0.62];

/// `n` chart colours, hues spread evenly around the wheel from [`BASE_HUE`].
pub fn generate_palette(n: usize) -> Vec<Color32> {
    let step = 360.0 / n.max(1) as f32;
    (0..n)
        .map(|i| {
            let hue = (BASE_HUE + step * i as f32) % 360.0;
            let rgb: Srgb = Hsl::new(hue, SATURATION, LIGHTNESS[i % 2]).into_color();
            let [r, g, b] = [rgb.red, rgb.green, rgb.blue]
                .map(|c| (c.clamp(0.0, 1.0) * 255.0).round() as u8);
            Color32::from_rgb(r, g, b)
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Color mapping: ranking key → Color32
// ---------------------------------------------------------------------------

/// Assigns each ranked group its own colour, in ranking order.
#[derive(Debug, Clone)]
pub struct ColorMap {
    entries: Vec<(String, Color32)>,
    default_color: Color32,
}

impl ColorMap {
    pub fn new(ranking: &[RankingEntry]) -> Self {
        let palette = generate_palette(ranking.len());
        let entries = ranking
            .iter()
            .zip(palette)
            .map(|(entry, c)| (entry.key.clone(), c))
            .collect();

        ColorMap {
            entries,
            default_color: Color32::GRAY,
        }
    }

    /// Look up the colour for a given key.
    pub fn color_for(&self, key: &str) -> Color32 {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, c)| *c)
            .unwrap_or(self.default_color)
    }

    /// Return the legend entries (key → colour) in ranking order.
    pub fn legend_entries(&self) -> &[(String, Color32)] {
        &self.entries
    }
}
