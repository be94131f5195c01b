use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::config::DATASET_URL;
use crate::data::filter::FilterParams;
use crate::data::model::{COLUMNS, Column};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – filter widgets
// ---------------------------------------------------------------------------

/// Render the left filter panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Filters");
    ui.separator();

    let dataset = match &state.dataset {
        Some(ds) => ds,
        None => {
            ui.label("No dataset loaded.");
            return;
        }
    };

    // Slider bounds and selector options come from the full table, not the
    // filtered view.
    let (rm_lo, rm_hi) = dataset.range(Column::Rm).unwrap_or((0.0, 0.0));
    let (crim_lo, crim_hi) = dataset.range(Column::Crim).unwrap_or((0.0, 0.0));
    let river_values = dataset.river_values();

    let mut params: FilterParams = state.params;

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            ui.strong("Average Number of Rooms");
            ui.add(egui::Slider::new(&mut params.min_rooms, rm_lo..=rm_hi))
                .on_hover_text("Rows shown have strictly more rooms than this");
            ui.add_space(8.0);

            ui.strong("Per Capita Crime Rate");
            ui.add(egui::Slider::new(&mut params.max_crime, crim_lo..=crim_hi))
                .on_hover_text("Rows shown have a strictly lower crime rate than this");
            ui.add_space(8.0);

            ui.strong("Charles River Dummy Variable");
            ui.label(RichText::new("1 if tract bounds river; 0 otherwise").small().weak());
            let selected_text = match params.river {
                Some(v) => v.to_string(),
                None => "Choose an option".to_string(),
            };
            egui::ComboBox::from_id_salt("river_flag")
                .selected_text(selected_text)
                .show_ui(ui, |ui: &mut Ui| {
                    ui.selectable_value(&mut params.river, None, "No selection");
                    for v in &river_values {
                        ui.selectable_value(&mut params.river, Some(*v), v.to_string());
                    }
                });
        });

    state.set_params(params);
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
            if ui.button("Reload from web").clicked() {
                state.load_url(DATASET_URL);
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(ds) = &state.dataset {
            ui.label(format!(
                "{} records loaded, {} visible",
                ds.len(),
                state.visible.len()
            ));
        }
        if let Some(source) = &state.source {
            ui.label(RichText::new(source).weak());
        }

        if let Some(msg) = &state.status_message {
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// Page header
// ---------------------------------------------------------------------------

const WELCOME: &str = "This interactive application provides a comprehensive exploration of the \
Boston Housing dataset, a collection of data about various housing attributes in the Boston \
area. The dataset includes information on aspects like crime rates, property tax rates, \
average number of rooms per dwelling, and more. It's an invaluable tool for understanding \
housing trends and characteristics in Boston.";

const HOW_TO_USE: [(&str, &str); 4] = [
    (
        "Adjust the Filters",
        "Use the sliders and selector in the side panel to filter the data based on various \
         housing attributes, such as the average number of rooms, crime rate, or whether the \
         property is close to the Charles River.",
    ),
    (
        "View the Data",
        "After adjusting the filters, observe how the data table in the main section updates \
         in real-time to reflect your selections.",
    ),
    (
        "Explore the Visualizations",
        "Interactive plots display the relationships between different housing attributes. \
         Hover over the points in the scatter plots for more detailed information.",
    ),
    (
        "Gain Insights",
        "Use this app to uncover trends, patterns, and relationships within the Boston \
         housing market.",
    ),
];

const PURPOSE: &str = "This tool is designed for realtors, data analysts, students, and anyone \
interested in the Boston real estate market. It aims to provide an intuitive and interactive \
way to explore and understand the dynamics of housing in Boston.";

const CLOSING: &str =
    "Enjoy exploring the Boston Housing dataset, and discover the insights that lie within!";

/// Title, welcome text, column glossary, usage steps and purpose.
pub fn introduction(ui: &mut Ui) {
    ui.heading(RichText::new("Boston Housing Explorer").size(28.0));
    ui.add_space(4.0);
    ui.strong("Welcome to the Boston Housing Explorer!");
    ui.label(WELCOME);

    egui::CollapsingHeader::new("Dataset overview")
        .default_open(false)
        .show(ui, |ui: &mut Ui| {
            egui::Grid::new("column_glossary")
                .num_columns(2)
                .striped(true)
                .show(ui, |ui: &mut Ui| {
                    for info in COLUMNS.iter().filter(|c| c.column.is_source()) {
                        ui.strong(info.name.to_uppercase());
                        ui.label(info.description);
                        ui.end_row();
                    }
                });
        });

    egui::CollapsingHeader::new("How to use this app")
        .default_open(false)
        .show(ui, |ui: &mut Ui| {
            for (i, (step, detail)) in HOW_TO_USE.iter().enumerate() {
                ui.horizontal_wrapped(|ui: &mut Ui| {
                    ui.strong(format!("{}. {step}:", i + 1));
                    ui.label(*detail);
                });
            }
        });

    egui::CollapsingHeader::new("Purpose")
        .default_open(false)
        .show(ui, |ui: &mut Ui| {
            ui.label(PURPOSE);
            ui.add_space(4.0);
            ui.label(CLOSING);
        });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open housing data")
        .add_filter("CSV", &["csv"])
        .pick_file();

    if let Some(path) = file {
        state.load_path(&path);
    }
}
