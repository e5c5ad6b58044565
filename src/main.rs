use std::process::ExitCode;

use eframe::egui;

use stitchpad::app::StitchpadApp;
use stitchpad::{cli, logger};

fn main() -> ExitCode {
    // -- CLI / headless mode ---------------------------------------------
    if cli::CliArgs::is_cli_mode() {
        use clap::Parser;
        let args = cli::CliArgs::parse();
        return cli::run(args);
    }

    // -- GUI mode --------------------------------------------------------

    // Initialize session log (overwrites previous session log)
    logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1540.0, 1060.0])
            .with_title("Stitchpad"),
        ..Default::default()
    };

    match eframe::run_native(
        "Stitchpad",
        options,
        Box::new(|cc| Box::new(StitchpadApp::new(cc))),
    ) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("failed to start Stitchpad: {}", e);
            ExitCode::FAILURE
        }
    }
}
