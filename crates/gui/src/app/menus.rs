//! Application menu bar and settings window

use eframe::egui;

use crate::i18n::{lang, set_lang, t, Lang};
use crate::state::{AppState, ModelState};
use crate::viewport::ViewportPanel;

/// Show the file menu
pub fn file_menu(ui: &mut egui::Ui, state: &mut AppState) {
    ui.menu_button(t("menu.file"), |ui| {
        if ui.button(t("menu.open")).clicked() {
            ui.close_menu();
            if let Some(path) = rfd::FileDialog::new()
                .set_title(t("menu.open_title"))
                .add_filter("JSON", &["json"])
                .pick_file()
            {
                match std::fs::read_to_string(&path) {
                    Ok(json) => match serde_json::from_str::<shared::SceneConfig>(&json) {
                        Ok(config) => {
                            state.model.set_config(config);
                            state.selection.clear();
                            tracing::info!("Loaded scene from {}", path.display());
                        }
                        Err(e) => tracing::error!("Failed to parse scene: {e}"),
                    },
                    Err(e) => tracing::error!("Failed to read file: {e}"),
                }
            }
        }
        if ui.button(t("menu.save")).clicked() {
            ui.close_menu();
            if let Some(path) = rfd::FileDialog::new()
                .set_title(t("menu.save_title"))
                .add_filter("JSON", &["json"])
                .set_file_name("scene.json")
                .save_file()
            {
                match serde_json::to_string_pretty(state.model.geometry.config()) {
                    Ok(json) => {
                        if let Err(e) = std::fs::write(&path, json) {
                            tracing::error!("Failed to write scene: {e}");
                        } else {
                            tracing::info!("Saved scene to {}", path.display());
                        }
                    }
                    Err(e) => tracing::error!("Failed to serialize scene: {e}"),
                }
            }
        }
        ui.separator();
        if ui.button(t("menu.reset_defaults")).clicked() {
            ModelState::clear_autosave();
            state.model.reset();
            state.selection.clear();
            ui.close_menu();
        }
        ui.separator();
        if ui.button(t("menu.quit")).clicked() {
            std::process::exit(0);
        }
    });
}

/// Show the view menu
pub fn view_menu(ui: &mut egui::Ui, state: &mut AppState, viewport: &mut ViewportPanel) {
    ui.menu_button(t("menu.view"), |ui| {
        ui.checkbox(&mut state.panels.properties, t("menu.properties"));
        ui.separator();
        if ui.button(t("menu.reset_camera")).clicked() {
            viewport.reset_camera();
            ui.close_menu();
        }
        ui.separator();
        ui.menu_button(t("menu.language"), |ui| {
            if ui.selectable_label(lang() == Lang::Ru, "Русский").clicked() {
                set_lang(Lang::Ru);
                ui.close_menu();
            }
            if ui.selectable_label(lang() == Lang::En, "English").clicked() {
                set_lang(Lang::En);
                ui.close_menu();
            }
        });
    });
}

/// Show the settings menu
pub fn settings_menu(ui: &mut egui::Ui, state: &mut AppState) {
    ui.menu_button(t("menu.settings"), |ui| {
        if ui.button(t("menu.preferences")).clicked() {
            state.show_settings_window = true;
            ui.close_menu();
        }
    });
}

/// Show the settings window (grid, axes, background, font)
pub fn settings_window(ctx: &egui::Context, state: &mut AppState) {
    if !state.show_settings_window {
        return;
    }

    let mut open = state.show_settings_window;
    egui::Window::new(t("settings.title"))
        .open(&mut open)
        .resizable(false)
        .show(ctx, |ui| {
            ui.strong(t("settings.grid"));
            egui::Grid::new("settings_grid")
                .num_columns(2)
                .spacing([8.0, 4.0])
                .show(ui, |ui| {
                    ui.label(t("settings.visible"));
                    ui.checkbox(&mut state.settings.grid.visible, "");
                    ui.end_row();

                    ui.label(t("settings.cell_size"));
                    ui.add(
                        egui::DragValue::new(&mut state.settings.grid.size)
                            .speed(0.1)
                            .range(0.1..=10.0),
                    );
                    ui.end_row();

                    ui.label(t("settings.range"));
                    ui.add(egui::DragValue::new(&mut state.settings.grid.range).range(1..=50));
                    ui.end_row();

                    ui.label(t("settings.opacity"));
                    ui.add(egui::Slider::new(&mut state.settings.grid.opacity, 0.0..=1.0));
                    ui.end_row();
                });

            ui.separator();
            ui.strong(t("settings.axes"));
            egui::Grid::new("settings_axes")
                .num_columns(2)
                .spacing([8.0, 4.0])
                .show(ui, |ui| {
                    ui.label(t("settings.visible"));
                    ui.checkbox(&mut state.settings.axes.visible, "");
                    ui.end_row();

                    ui.label(t("settings.length"));
                    ui.add(
                        egui::DragValue::new(&mut state.settings.axes.length)
                            .speed(0.1)
                            .range(0.5..=20.0),
                    );
                    ui.end_row();

                    ui.label(t("settings.thickness"));
                    ui.add(egui::Slider::new(&mut state.settings.axes.thickness, 1.0..=5.0));
                    ui.end_row();

                    ui.label(t("settings.labels"));
                    ui.checkbox(&mut state.settings.axes.show_labels, "");
                    ui.end_row();
                });

            ui.separator();
            egui::Grid::new("settings_misc")
                .num_columns(2)
                .spacing([8.0, 4.0])
                .show(ui, |ui| {
                    ui.label(t("settings.background"));
                    ui.color_edit_button_srgb(&mut state.settings.viewport.background_color);
                    ui.end_row();

                    ui.label(t("settings.antialiasing"));
                    ui.checkbox(&mut state.settings.viewport.antialiasing, "");
                    ui.end_row();

                    ui.label(t("settings.font_size"));
                    ui.add(egui::Slider::new(&mut state.settings.ui.font_size, 10.0..=20.0));
                    ui.end_row();
                });
        });
    state.show_settings_window = open;
}
