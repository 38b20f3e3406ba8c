mod app;
pub mod i18n;
mod ui;
mod viewport;

// Re-export library modules so that `crate::state` etc. resolve to the lib
// crate types everywhere in the binary.
pub use sightline_gui_lib::state;

use app::SightlineApp;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sightline=info".into()),
        )
        .init();

    // Parse --scene <path> argument
    let initial_scene = parse_scene_arg();

    // Multisampling is fixed at window creation, so peek at the settings here
    let antialiasing = state::AppSettings::load().viewport.antialiasing;

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Sightline — A/B Viewer")
            .with_inner_size([1280.0, 800.0])
            .with_min_inner_size([800.0, 500.0]),
        multisampling: if antialiasing { 4 } else { 0 },
        ..Default::default()
    };

    if let Err(e) = eframe::run_native(
        "sightline-gui",
        native_options,
        Box::new(move |cc| Ok(Box::new(SightlineApp::new(cc, initial_scene)))),
    ) {
        tracing::error!("Failed to start application: {e}");
    }
}

fn parse_scene_arg() -> Option<shared::SceneConfig> {
    let args: Vec<String> = std::env::args().collect();
    let mut i = 1;
    while i < args.len() {
        if args[i] == "--scene" && i + 1 < args.len() {
            let path = &args[i + 1];
            match std::fs::read_to_string(path) {
                Ok(json) => match serde_json::from_str::<shared::SceneConfig>(&json) {
                    Ok(config) => {
                        tracing::info!("Loaded scene from {path}");
                        return Some(config);
                    }
                    Err(e) => {
                        tracing::error!("Failed to parse scene JSON from {path}: {e}");
                    }
                },
                Err(e) => {
                    tracing::error!("Failed to read scene file {path}: {e}");
                }
            }
            break;
        }
        i += 1;
    }
    None
}
