pub mod model;
pub mod selection;
pub mod settings;

pub use model::ModelState;
pub use selection::SelectionState;
pub use settings::{AppSettings, AxisSettings, GridSettings, ProjectionSettings};

/// Panel visibility flags
pub struct PanelVisibility {
    pub properties: bool,
}

impl Default for PanelVisibility {
    fn default() -> Self {
        Self { properties: true }
    }
}

/// Combined application state
pub struct AppState {
    pub model: ModelState,
    pub selection: SelectionState,
    pub panels: PanelVisibility,
    pub settings: AppSettings,
    /// Show settings window
    pub show_settings_window: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            model: ModelState::default(),
            selection: SelectionState::default(),
            panels: PanelVisibility::default(),
            settings: AppSettings::load(),
            show_settings_window: false,
        }
    }
}
