//! Properties panel: colors, sizes, positions, line style and angle readouts
//!
//! Section layout mirrors the original debug panel folders.

use egui::Ui;
use shared::PointId;

use crate::i18n::t;
use crate::state::AppState;

pub fn show(ui: &mut Ui, state: &mut AppState) {
    ui.heading(t("prop.title"));
    ui.separator();

    show_colors(ui, state);
    ui.add_space(4.0);
    show_sizes(ui, state);
    ui.add_space(4.0);
    show_positions(ui, state);
    ui.add_space(4.0);
    show_line(ui, state);
    ui.add_space(4.0);
    show_angles(ui, state);

    ui.add_space(8.0);
    ui.separator();
    if ui.button(t("prop.reset")).clicked() {
        state.model.reset();
    }
}

fn show_colors(ui: &mut Ui, state: &mut AppState) {
    let mut changed = false;

    egui::CollapsingHeader::new(t("prop.colors"))
        .id_salt("colors")
        .default_open(true)
        .show(ui, |ui| {
            egui::Grid::new("colors_grid")
                .num_columns(2)
                .spacing([8.0, 4.0])
                .show(ui, |ui| {
                    ui.label(format!("{} A:", t("prop.point")));
                    changed |= ui
                        .color_edit_button_srgb(
                            &mut state.model.geometry.config_mut().point_a_color,
                        )
                        .changed();
                    ui.end_row();

                    ui.label(format!("{} B:", t("prop.point")));
                    changed |= ui
                        .color_edit_button_srgb(
                            &mut state.model.geometry.config_mut().point_b_color,
                        )
                        .changed();
                    ui.end_row();

                    // Projection styling lives in the app settings, not in the
                    // persisted scene record
                    ui.label(format!("{}:", t("prop.projections")));
                    ui.color_edit_button_srgb(&mut state.settings.projection.color);
                    ui.end_row();

                    ui.label(format!("{}:", t("prop.line")));
                    changed |= ui
                        .color_edit_button_srgb(&mut state.model.geometry.config_mut().line_color)
                        .changed();
                    ui.end_row();
                });
        });

    if changed {
        state.model.notify_mutated();
    }
}

fn show_sizes(ui: &mut Ui, state: &mut AppState) {
    let mut changed = false;

    egui::CollapsingHeader::new(t("prop.sizes"))
        .id_salt("sizes")
        .default_open(true)
        .show(ui, |ui| {
            egui::Grid::new("sizes_grid")
                .num_columns(2)
                .spacing([8.0, 4.0])
                .show(ui, |ui| {
                    ui.label(format!("{} A:", t("prop.radius")));
                    changed |= ui
                        .add(
                            egui::DragValue::new(
                                &mut state.model.geometry.config_mut().point_a_radius,
                            )
                            .speed(0.01)
                            .range(0.01..=1.0),
                        )
                        .changed();
                    ui.end_row();

                    ui.label(format!("{} B:", t("prop.radius")));
                    changed |= ui
                        .add(
                            egui::DragValue::new(
                                &mut state.model.geometry.config_mut().point_b_radius,
                            )
                            .speed(0.01)
                            .range(0.01..=1.0),
                        )
                        .changed();
                    ui.end_row();

                    ui.label(format!("{}:", t("prop.projections")));
                    ui.add(
                        egui::DragValue::new(&mut state.settings.projection.radius)
                            .speed(0.01)
                            .range(0.01..=1.0),
                    );
                    ui.end_row();
                });
        });

    if changed {
        state.model.notify_mutated();
    }
}

fn show_positions(ui: &mut Ui, state: &mut AppState) {
    egui::CollapsingHeader::new(t("prop.positions"))
        .id_salt("positions")
        .default_open(true)
        .show(ui, |ui| {
            for id in PointId::all() {
                position_editor(ui, state, id);
            }
        });
}

fn position_editor(ui: &mut Ui, state: &mut AppState, id: PointId) {
    ui.strong(format!("{} {}", t("prop.point"), id.label()));

    let p = state.model.geometry.point(id);
    let (mut x, mut y, mut z) = (p.x, p.y, p.z);
    let mut changed = false;

    egui::Grid::new(("position_grid", id.label()))
        .num_columns(6)
        .spacing([4.0, 4.0])
        .show(ui, |ui| {
            ui.label("x:");
            changed |= ui
                .add(egui::DragValue::new(&mut x).speed(0.05).fixed_decimals(2))
                .changed();
            ui.label("y:");
            changed |= ui
                .add(egui::DragValue::new(&mut y).speed(0.05).fixed_decimals(2))
                .changed();
            ui.label("z:");
            changed |= ui
                .add(egui::DragValue::new(&mut z).speed(0.05).fixed_decimals(2))
                .changed();
            ui.end_row();
        });

    if changed {
        state.model.set_point_position(id, x, y, z);
    }

    ui.add_space(2.0);
}

fn show_line(ui: &mut Ui, state: &mut AppState) {
    let mut changed = false;

    egui::CollapsingHeader::new(t("prop.line"))
        .id_salt("line")
        .default_open(true)
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.label(format!("{}:", t("prop.thickness")));
                changed |= ui
                    .add(egui::Slider::new(
                        &mut state.model.geometry.config_mut().line_thickness,
                        1.0..=10.0,
                    ))
                    .changed();
            });
        });

    if changed {
        state.model.notify_mutated();
    }
}

fn show_angles(ui: &mut Ui, state: &mut AppState) {
    egui::CollapsingHeader::new(t("prop.angles"))
        .id_salt("angles")
        .default_open(true)
        .show(ui, |ui| {
            let geo = &state.model.geometry;
            egui::Grid::new("angles_grid")
                .num_columns(2)
                .spacing([8.0, 4.0])
                .show(ui, |ui| {
                    ui.label(format!("{}:", t("prop.angle")));
                    ui.monospace(format!("{:.2}°", geo.angle()));
                    ui.end_row();

                    ui.label(format!("{}:", t("prop.azimuth")));
                    ui.monospace(format!("{:.2}°", geo.azimuth()));
                    ui.end_row();

                    ui.label(format!("{}:", t("prop.distance")));
                    ui.monospace(format!("{:.3}", geo.distance()));
                    ui.end_row();
                });
        });
}
