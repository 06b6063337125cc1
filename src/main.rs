use eframe::egui;

mod app;
mod config;
mod content;
mod input;
mod router;
mod section;
mod state;
mod style;
mod transition;
mod view;

fn main() -> eframe::Result<()> {
    env_logger::init();

    // Optional launch route, e.g. `retrofolio /projects`. Unknown paths
    // fall back to home; a non-root route skips the title screen.
    let initial_route = std::env::args().nth(1).unwrap_or_else(|| "/".to_string());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1080.0, 720.0])
            .with_min_inner_size([720.0, 480.0])
            .with_title("PORTFOLIO.EXE"),
        ..Default::default()
    };

    eframe::run_native(
        "retrofolio",
        options,
        Box::new(move |_cc| Ok(Box::new(app::Retrofolio::new(&initial_route)))),
    )
}
