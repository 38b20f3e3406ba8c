use egui::Ui;

use crate::i18n::t;
use crate::state::AppState;

pub fn show(ui: &mut Ui, state: &AppState) {
    ui.horizontal(|ui| {
        match state.selection.selected() {
            Some(id) => {
                ui.label(format!("{}: {}", t("status.selected"), id.label()));
            }
            None => {
                ui.weak(t("status.ready"));
            }
        }

        ui.separator();

        let geo = &state.model.geometry;
        ui.weak(format!("{}: {:.1}°", t("status.angle"), geo.angle()));
        ui.weak(format!("{}: {:.1}°", t("status.azimuth"), geo.azimuth()));

        // Right-aligned version
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.weak("Sightline v0.1");
        });
    });
}
