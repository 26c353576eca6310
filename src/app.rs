use anyhow::anyhow;
use eframe::egui;

use crate::color::ColorMap;
use crate::config::{QueryConfig, WindowConfig};
use crate::data::model::RankingEntry;
use crate::session::{ChartKind, Presenter};
use crate::ui::{panels, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

/// Read-only window showing one ranking.
pub struct ChartApp {
    ranking: Vec<RankingEntry>,
    kind: ChartKind,
    field: String,
    title: String,
    colors: ColorMap,
}

impl ChartApp {
    pub fn new(ranking: Vec<RankingEntry>, kind: ChartKind, field: &str, top_n: usize) -> Self {
        let colors = ColorMap::new(&ranking);
        Self {
            title: format!("Top {top_n} by {field}"),
            ranking,
            kind,
            field: field.to_string(),
            colors,
        }
    }
}

impl eframe::App for ChartApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: title ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            let total = self.ranking.iter().map(|e| e.count).sum();
            panels::top_bar(ui, &self.title, total);
        });

        // ---- Left side panel: legend ----
        egui::SidePanel::left("legend_panel")
            .default_width(180.0)
            .resizable(true)
            .show(ctx, |ui| {
                let counts: Vec<usize> = self.ranking.iter().map(|e| e.count).collect();
                panels::legend_panel(ui, &self.colors, &counts);
            });

        // ---- Central panel: chart ----
        egui::CentralPanel::default().show(ctx, |ui| {
            plot::ranking_chart(ui, &self.ranking, &self.colors, &self.field, self.kind);
        });
    }
}

// ---------------------------------------------------------------------------
// Presenter backed by a native eframe window
// ---------------------------------------------------------------------------

/// Opens a blocking chart window; returns once the user closes it.
pub struct WindowPresenter {
    window: WindowConfig,
    field: String,
    top_n: usize,
}

impl WindowPresenter {
    pub fn new(window: WindowConfig, query: &QueryConfig) -> Self {
        Self {
            window,
            field: query.group_field.clone(),
            top_n: query.top_n,
        }
    }
}

impl Presenter for WindowPresenter {
    fn render(&mut self, ranking: &[RankingEntry], kind: ChartKind) -> anyhow::Result<()> {
        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([self.window.width, self.window.height])
                .with_min_inner_size(self.window.min_size),
            centered: self.window.centered,
            ..Default::default()
        };

        log::info!("Rendering {kind:?} chart with {} groups", ranking.len());
        let app = ChartApp::new(ranking.to_vec(), kind, &self.field, self.top_n);
        eframe::run_native(
            &self.window.title,
            options,
            Box::new(move |_cc| Ok(Box::new(app))),
        )
        .map_err(|e| anyhow!("{e}"))
    }
}
