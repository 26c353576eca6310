use std::path::PathBuf;

use eframe::egui::{RichText, Ui};

use crate::color::ColorMap;
use crate::session::FileSelector;

// ---------------------------------------------------------------------------
// Left side panel – legend
// ---------------------------------------------------------------------------

/// Render the colour legend: one swatch and label per ranked group.
pub fn legend_panel(ui: &mut Ui, colors: &ColorMap, counts: &[usize]) {
    ui.heading("Legend");
    ui.separator();

    for ((key, color), count) in colors.legend_entries().iter().zip(counts) {
        let label = if key.is_empty() { "(blank)" } else { key.as_str() };
        ui.horizontal(|ui: &mut Ui| {
            ui.label(RichText::new("■").color(*color).size(18.0));
            ui.label(format!("{label}  ({count})"));
        });
    }
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the chart title and the number of rows behind it.
pub fn top_bar(ui: &mut Ui, title: &str, total: usize) {
    ui.horizontal(|ui: &mut Ui| {
        ui.heading(title);
        ui.separator();
        ui.label(format!("{total} records in the top groups"));
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

/// Native "open file" dialog.
#[derive(Debug, Default)]
pub struct NativeFileDialog;

impl FileSelector for NativeFileDialog {
    fn select(&mut self) -> Option<PathBuf> {
        let file = rfd::FileDialog::new()
            .set_title("Select CSV file")
            .add_filter("CSV", &["csv", "txt"])
            .pick_file();

        match &file {
            Some(path) => log::info!("Selected {}", path.display()),
            None => log::info!("File selection cancelled"),
        }
        file
    }
}

