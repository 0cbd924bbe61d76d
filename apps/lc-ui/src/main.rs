#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod views;

use app::LanchesterApp;

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 860.0])
            .with_title("Lanchester model"),
        ..Default::default()
    };

    eframe::run_native(
        "Lanchester model",
        options,
        Box::new(|cc| Ok(Box::new(LanchesterApp::new(cc)))),
    )
}
