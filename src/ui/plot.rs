use std::f32::consts::{FRAC_PI_2, TAU};

use eframe::egui::{Align2, Color32, FontId, Mesh, Pos2, Sense, Shape, Stroke, Ui, Vec2};
use egui_plot::{Bar, BarChart, Legend, Plot};

use crate::color::ColorMap;
use crate::data::model::RankingEntry;
use crate::session::ChartKind;

// ---------------------------------------------------------------------------
// Bar chart
// ---------------------------------------------------------------------------

/// Render one bar per ranking entry, x axis labelled with the entry keys.
pub fn bar_chart(ui: &mut Ui, ranking: &[RankingEntry], colors: &ColorMap, field: &str) {
    let bars: Vec<Bar> = ranking
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            Bar::new(i as f64, entry.count as f64)
                .name(display_key(&entry.key))
                .fill(colors.color_for(&entry.key))
                .width(0.6)
        })
        .collect();

    let labels: Vec<String> = ranking.iter().map(|e| display_key(&e.key)).collect();

    Plot::new("ranking_bars")
        .legend(Legend::default())
        .x_axis_label(field.to_string())
        .y_axis_label("Count")
        .x_axis_formatter(move |mark, _range| axis_label(&labels, mark.value))
        .include_y(0.0)
        .allow_drag(false)
        .allow_scroll(false)
        .allow_zoom(false)
        .allow_boxed_zoom(false)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars).name("Count"));
        });
}

/// Label for an x grid mark: the key of the bar sitting on it, if any.
fn axis_label(labels: &[String], value: f64) -> String {
    let slot = value.round();
    if (value - slot).abs() > 1e-6 || slot < 0.0 {
        return String::new();
    }
    labels.get(slot as usize).cloned().unwrap_or_default()
}

// ---------------------------------------------------------------------------
// Pie chart
// ---------------------------------------------------------------------------

/// Angular extent of one pie slice, in radians.
#[derive(Debug, Clone, PartialEq)]
pub struct Slice {
    pub start: f32,
    pub sweep: f32,
    /// Share of the total, 0.0..=1.0.
    pub share: f32,
}

/// Split the full circle proportionally to the counts, starting at twelve
/// o'clock and running clockwise.
pub fn pie_slices(ranking: &[RankingEntry]) -> Vec<Slice> {
    let total: usize = ranking.iter().map(|e| e.count).sum();
    if total == 0 {
        return Vec::new();
    }

    let mut start = -FRAC_PI_2;
    ranking
        .iter()
        .map(|entry| {
            let share = entry.count as f32 / total as f32;
            let slice = Slice {
                start,
                sweep: share * TAU,
                share,
            };
            start += slice.sweep;
            slice
        })
        .collect()
}

/// Paint the pie into the remaining space of `ui`.
pub fn pie_chart(ui: &mut Ui, ranking: &[RankingEntry], colors: &ColorMap) {
    let slices = pie_slices(ranking);
    if slices.is_empty() {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("No records matched the filters.");
        });
        return;
    }

    let (rect, _response) = ui.allocate_exact_size(ui.available_size(), Sense::hover());
    let painter = ui.painter_at(rect);
    let center = rect.center();
    let radius = 0.42 * rect.width().min(rect.height());
    let text_color = ui.visuals().strong_text_color();

    for (entry, slice) in ranking.iter().zip(&slices) {
        let color = colors.color_for(&entry.key);
        painter.add(Shape::mesh(wedge_mesh(center, radius, slice, color)));

        let mid = slice.start + slice.sweep / 2.0;
        painter.text(
            center + 0.65 * radius * Vec2::angled(mid),
            Align2::CENTER_CENTER,
            format!(
                "{}\n{} ({:.0}%)",
                display_key(&entry.key),
                entry.count,
                slice.share * 100.0
            ),
            FontId::proportional(14.0),
            text_color,
        );
    }

    painter.circle_stroke(center, radius, Stroke::new(1.0, ui.visuals().window_stroke.color));
}

/// Triangle fan covering one slice.
fn wedge_mesh(center: Pos2, radius: f32, slice: &Slice, color: Color32) -> Mesh {
    let steps = ((slice.sweep / TAU) * 180.0).ceil().max(1.0) as u32;
    let mut mesh = Mesh::default();
    mesh.colored_vertex(center, color);
    for i in 0..=steps {
        let angle = slice.start + slice.sweep * i as f32 / steps as f32;
        mesh.colored_vertex(center + radius * Vec2::angled(angle), color);
    }
    for i in 1..=steps {
        mesh.add_triangle(0, i, i + 1);
    }
    mesh
}

/// Rows without a value are grouped under the empty key; show that visibly.
fn display_key(key: &str) -> String {
    if key.is_empty() {
        "(blank)".to_string()
    } else {
        key.to_string()
    }
}

/// Draw `ranking` as the requested chart kind.
pub fn ranking_chart(
    ui: &mut Ui,
    ranking: &[RankingEntry],
    colors: &ColorMap,
    field: &str,
    kind: ChartKind,
) {
    if ranking.is_empty() {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("No records matched the filters.");
        });
        return;
    }

    match kind {
        ChartKind::Bar => bar_chart(ui, ranking, colors, field),
        ChartKind::Pie => pie_chart(ui, ranking, colors),
    }
}
