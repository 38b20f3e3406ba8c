//! Viewport overlay drawing (axis labels, point labels, angle readout)

use egui::Painter;

use crate::i18n::t;
use crate::state::AppState;
use shared::PointId;

use super::camera::ArcBallCamera;

/// Draw axis labels just past the axis tips
pub fn draw_axis_labels(painter: &Painter, rect: egui::Rect, camera: &ArcBallCamera, length: f32) {
    let tip = length + 0.3;
    let labels = [
        ([tip, 0.0, 0.0], "X", egui::Color32::from_rgb(220, 70, 70)),
        ([0.0, tip, 0.0], "Y", egui::Color32::from_rgb(70, 200, 70)),
        ([0.0, 0.0, tip], "Z", egui::Color32::from_rgb(70, 110, 220)),
    ];

    for (pos, label, color) in &labels {
        if let Some(screen) = camera.project(*pos, rect) {
            if rect.contains(screen) {
                painter.text(
                    screen,
                    egui::Align2::LEFT_BOTTOM,
                    *label,
                    egui::FontId::monospace(12.0),
                    *color,
                );
            }
        }
    }
}

/// Draw "A" / "B" labels above the points and "A′" / "B′" at the projections
pub fn draw_point_labels(painter: &Painter, rect: egui::Rect, camera: &ArcBallCamera, state: &AppState) {
    let geo = &state.model.geometry;

    for id in PointId::all() {
        let p = geo.point(id);
        let radius = geo.point_radius(id) as f32;
        let world = [p.x as f32, p.y as f32, (p.z as f32) + radius + 0.1];
        if let Some(screen) = camera.project(world, rect) {
            if rect.contains(screen) {
                let c = geo.point_color(id);
                painter.text(
                    screen,
                    egui::Align2::CENTER_BOTTOM,
                    id.label(),
                    egui::FontId::proportional(14.0),
                    egui::Color32::from_rgb(c[0], c[1], c[2]),
                );
            }
        }

        let proj = geo.projection(id);
        let proj_radius = state.settings.projection.radius as f32;
        let world = [proj.x as f32, proj.y as f32, proj_radius + 0.08];
        if let Some(screen) = camera.project(world, rect) {
            if rect.contains(screen) {
                let c = state.settings.projection.color;
                painter.text(
                    screen,
                    egui::Align2::CENTER_BOTTOM,
                    id.projection_label(),
                    egui::FontId::proportional(11.0),
                    egui::Color32::from_rgb(c[0], c[1], c[2]),
                );
            }
        }
    }
}

/// Angle/azimuth readout box in the bottom-left corner
pub fn draw_angle_readout(painter: &Painter, rect: egui::Rect, state: &AppState) {
    let geo = &state.model.geometry;

    let overlay_rect = egui::Rect::from_min_size(
        egui::pos2(rect.left() + 8.0, rect.bottom() - 52.0),
        egui::vec2(170.0, 44.0),
    );
    painter.rect_filled(
        overlay_rect,
        4.0,
        egui::Color32::from_rgba_premultiplied(0, 0, 0, 140),
    );
    painter.text(
        overlay_rect.min + egui::vec2(6.0, 4.0),
        egui::Align2::LEFT_TOP,
        format!(
            "{}: {:.1}°\n{}: {:.1}°",
            t("overlay.angle"),
            geo.angle(),
            t("overlay.azimuth"),
            geo.azimuth(),
        ),
        egui::FontId::monospace(11.0),
        egui::Color32::from_rgb(200, 200, 210),
    );
}

/// Camera info overlay in the top-right corner
pub fn draw_camera_info(painter: &Painter, rect: egui::Rect, camera: &ArcBallCamera) {
    let overlay_rect = egui::Rect::from_min_size(
        egui::pos2(rect.right() - 140.0, rect.top() + 4.0),
        egui::vec2(136.0, 44.0),
    );
    painter.rect_filled(
        overlay_rect,
        4.0,
        egui::Color32::from_rgba_premultiplied(0, 0, 0, 140),
    );
    painter.text(
        overlay_rect.min + egui::vec2(6.0, 4.0),
        egui::Align2::LEFT_TOP,
        format!(
            "Dist: {:.1}\nYaw: {:.0}  Pitch: {:.0}",
            camera.distance,
            camera.yaw.to_degrees(),
            camera.pitch.to_degrees(),
        ),
        egui::FontId::monospace(10.0),
        egui::Color32::from_rgb(160, 160, 170),
    );
}

/// Navigation hint shown while nothing is selected
pub fn draw_nav_hint(painter: &Painter, rect: egui::Rect) {
    painter.text(
        egui::pos2(rect.center().x, rect.bottom() - 20.0),
        egui::Align2::CENTER_BOTTOM,
        t("status.nav_hint"),
        egui::FontId::proportional(11.0),
        egui::Color32::from_rgb(100, 100, 110),
    );
}
