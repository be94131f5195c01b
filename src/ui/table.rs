use eframe::egui::{self, Align, Layout, ScrollArea, Ui};
use egui_extras::{Column as TableColumn, TableBuilder};

use crate::data::model::{COLUMNS, HousingTable};

// ---------------------------------------------------------------------------
// Raw data (collapsible)
// ---------------------------------------------------------------------------

const ROW_HEIGHT: f32 = 18.0;

/// Every row and column of `table`, verbatim, inside a collapsed section.
pub fn raw_data(ui: &mut Ui, table: &HousingTable) {
    egui::CollapsingHeader::new("RAW Data")
        .default_open(false)
        .show(ui, |ui: &mut Ui| {
            if table.is_empty() {
                ui.label("No rows match the current filters.");
            }

            ScrollArea::horizontal()
                .id_salt("raw_data_scroll")
                .show(ui, |ui: &mut Ui| {
                    TableBuilder::new(ui)
                        .striped(true)
                        .resizable(true)
                        .cell_layout(Layout::left_to_right(Align::Center))
                        .column(TableColumn::auto().at_least(40.0))
                        .columns(TableColumn::auto().at_least(60.0), COLUMNS.len())
                        .max_scroll_height(320.0)
                        .header(20.0, |mut header| {
                            header.col(|ui| {
                                ui.strong("#");
                            });
                            for info in &COLUMNS {
                                header.col(|ui| {
                                    ui.strong(info.name).on_hover_text(info.description);
                                });
                            }
                        })
                        .body(|body| {
                            body.rows(ROW_HEIGHT, table.len(), |mut row| {
                                let record = &table.records()[row.index()];
                                row.col(|ui| {
                                    ui.label(record.index.to_string());
                                });
                                for info in &COLUMNS {
                                    row.col(|ui| {
                                        ui.label(record.display(info.column));
                                    });
                                }
                            });
                        });
                });
        });
}
