// GUI-subsystem binary: no console window is ever allocated by Windows.
#![windows_subsystem = "windows"]

use eframe::egui;
use roomfe::app::RoomFEApp;

fn main() -> Result<(), eframe::Error> {
    // Initialize session log (overwrites previous session log)
    roomfe::logger::init();

    // Initialize the internationalization system
    roomfe::i18n::init();

    // Define the native window options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 780.0])
            .with_title("RoomFE"),
        ..Default::default()
    };

    // Run the application
    eframe::run_native(
        "RoomFE",
        options,
        Box::new(|cc| Box::new(RoomFEApp::new(cc))),
    )
}
