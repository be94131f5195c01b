mod app;
mod config;
mod data;
mod state;
mod tiles;
mod ui;

use app::HousingExplorerApp;
use eframe::egui;

fn main() -> eframe::Result {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config::WINDOW_SIZE)
            .with_min_inner_size(config::MIN_WINDOW_SIZE),
        ..Default::default()
    };

    eframe::run_native(
        "Boston Housing Explorer",
        options,
        Box::new(|cc| {
            // Image loaders (with HTTP) fetch and decode the map tiles.
            egui_extras::install_image_loaders(&cc.egui_ctx);
            Ok(Box::new(HousingExplorerApp::new()))
        }),
    )
}
