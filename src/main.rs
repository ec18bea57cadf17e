#![warn(clippy::all, rust_2018_idioms)]
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

use eframe_drawer::{DrawerApp, DrawerConfig};

fn main() -> eframe::Result {
    env_logger::init(); // Log to stderr (if you run with `RUST_LOG=debug`).

    let config = DrawerConfig::from_env().unwrap_or_else(|err| {
        log::warn!("Using default config: {err}");
        DrawerConfig::default()
    });

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window_width, config.window_height])
            .with_title("Drawer"),
        ..Default::default()
    };
    eframe::run_native(
        "Drawer",
        native_options,
        Box::new(|cc| Ok(Box::new(DrawerApp::new(cc, config)))),
    )
}
