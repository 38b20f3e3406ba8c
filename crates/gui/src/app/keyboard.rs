//! Keyboard shortcut handling

use eframe::egui;

use crate::state::AppState;
use crate::viewport::ViewportPanel;
use shared::PointId;

/// Handle keyboard shortcuts for the application
pub fn handle_keyboard(ctx: &egui::Context, state: &mut AppState, viewport: &mut ViewportPanel) {
    // Don't handle shortcuts when a text field is focused
    if ctx.memory(|m| m.focused().is_some()) {
        return;
    }

    ctx.input(|i| {
        // Escape — deselect
        if i.key_pressed(egui::Key::Escape) {
            state.selection.clear();
        }
        // 1 / 2 — select point A / B
        if i.key_pressed(egui::Key::Num1) {
            state.selection.select(PointId::A);
        }
        if i.key_pressed(egui::Key::Num2) {
            state.selection.select(PointId::B);
        }
        // F — focus camera on selected point
        if i.key_pressed(egui::Key::F) && !i.modifiers.command {
            if let Some(id) = state.selection.selected() {
                let p = state.model.geometry.point(id);
                viewport.focus_on(glam::Vec3::new(p.x as f32, p.y as f32, p.z as f32));
            }
        }
    });
}
