//! Main application module

mod keyboard;
mod menus;
mod styles;

use eframe::egui;

use crate::state::{AppState, ModelState};
use crate::ui::{properties, status_bar};
use crate::viewport::ViewportPanel;

/// Main application
pub struct SightlineApp {
    state: AppState,
    viewport: ViewportPanel,
    /// Last applied font size (to detect changes)
    last_font_size: f32,
    /// Last saved model version (for autosave)
    last_saved_version: u64,
}

impl SightlineApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        initial_scene: Option<shared::SceneConfig>,
    ) -> Self {
        let mut state = AppState::default();

        // Load initial scene: CLI argument takes priority, then autosave
        if let Some(config) = initial_scene {
            state.model.set_config(config);
        } else if let Some(autosave) = ModelState::load_autosave() {
            state.model.set_config(autosave);
            tracing::info!("Loaded autosaved scene");
        }

        // Apply initial styles with font size from settings
        styles::configure_styles(&cc.egui_ctx, state.settings.ui.font_size);

        let mut viewport = ViewportPanel::new();

        // Initialize GL renderer if glow context is available
        if let Some(gl) = cc.gl.as_ref() {
            viewport.init_gl(gl);
        }

        let last_font_size = state.settings.ui.font_size;
        let last_saved_version = state.model.version();

        Self {
            state,
            viewport,
            last_font_size,
            last_saved_version,
        }
    }
}

impl eframe::App for SightlineApp {
    fn on_exit(&mut self, _gl: Option<&glow::Context>) {
        self.state.settings.save();
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Apply font size if changed
        if self.state.settings.ui.font_size != self.last_font_size {
            styles::apply_font_size(ctx, self.state.settings.ui.font_size);
            self.last_font_size = self.state.settings.ui.font_size;
        }

        // Autosave scene if changed
        let current_version = self.state.model.version();
        if current_version != self.last_saved_version {
            self.state.model.autosave();
            self.state.settings.save();
            self.last_saved_version = current_version;
        }

        keyboard::handle_keyboard(ctx, &mut self.state, &mut self.viewport);

        // ── Menu bar ──────────────────────────────────────────
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                menus::file_menu(ui, &mut self.state);
                menus::view_menu(ui, &mut self.state, &mut self.viewport);
                menus::settings_menu(ui, &mut self.state);
            });
        });

        // ── Settings window ──────────────────────────────────
        menus::settings_window(ctx, &mut self.state);

        // ── Status bar ───────────────────────────────────────
        egui::TopBottomPanel::bottom("status_bar")
            .exact_height(22.0)
            .frame(
                egui::Frame::side_top_panel(&ctx.style()).inner_margin(egui::Margin::symmetric(8, 2)),
            )
            .show(ctx, |ui| {
                status_bar::show(ui, &self.state);
            });

        // ── Right panel: Properties ──────────────────────────
        if self.state.panels.properties {
            egui::SidePanel::right("properties")
                .default_width(280.0)
                .width_range(220.0..=450.0)
                .resizable(true)
                .frame(
                    egui::Frame::side_top_panel(&ctx.style()).inner_margin(egui::Margin::same(6)),
                )
                .show(ctx, |ui| {
                    egui::ScrollArea::vertical()
                        .id_salt("props_scroll")
                        .show(ui, |ui| {
                            properties::show(ui, &mut self.state);
                        });
                });
        }

        // ── Central panel: 3D viewport ───────────────────────
        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                self.viewport.show(ui, &mut self.state);
            });
    }
}
