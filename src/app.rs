use eframe::egui::{self, RichText, ScrollArea, Ui};

use crate::config::DATASET_URL;
use crate::data::model::Column;
use crate::state::AppState;
use crate::ui::{panels, plot, table};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct HousingExplorerApp {
    pub state: AppState,
}

impl HousingExplorerApp {
    /// Fetches the dataset before the first frame. A failed fetch leaves the
    /// app on the error screen.
    pub fn new() -> Self {
        let mut state = AppState::default();
        state.load_url(DATASET_URL);
        Self { state }
    }
}

impl eframe::App for HousingExplorerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: filters ----
        egui::SidePanel::left("filter_panel")
            .default_width(240.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: table and charts ----
        egui::CentralPanel::default().show(ctx, |ui| {
            ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui: &mut Ui| {
                    panels::introduction(ui);
                    ui.separator();
                    dashboard(ui, &self.state);
                });
        });
    }
}

fn dashboard(ui: &mut Ui, state: &AppState) {
    if state.dataset.is_none() {
        let text = state
            .status_message
            .as_deref()
            .unwrap_or("No dataset loaded  (File → Open… or File → Reload from web)");
        let color = ui.visuals().error_fg_color;
        ui.add_space(24.0);
        ui.vertical_centered(|ui: &mut Ui| {
            ui.heading(RichText::new(text).color(color));
        });
        return;
    }

    let visible = &state.visible;
    table::raw_data(ui, visible);
    ui.add_space(12.0);

    ui.heading("I. Analysis of Housing Attributes and Median Home Values");
    plot::scatter_plot(
        ui,
        "rooms_vs_value",
        "Relationship between Number of Rooms and Median Value",
        visible,
        Column::Rm,
        Column::Medv,
    );
    ui.add_space(8.0);
    plot::scatter_plot(
        ui,
        "crime_vs_value",
        "Crime Rate vs. Median Value",
        visible,
        Column::Crim,
        Column::Medv,
    );
    ui.add_space(12.0);

    ui.heading("II. Geographical Distribution of Properties");
    plot::property_map(ui, visible);
}
