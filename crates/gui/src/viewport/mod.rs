//! 3D viewport panel with OpenGL rendering

pub use sightline_gui_lib::viewport::{camera, gizmo, mesh, picking};
mod gl_renderer;
mod overlays;

use std::sync::{Arc, Mutex};

use egui::Ui;
use glam::Vec3;
use shared::{Color, PointId};

use crate::state::AppState;
use camera::ArcBallCamera;
use gizmo::{build_gizmo_lines, compute_drag_delta, gizmo_hit_test, GizmoState};
use gl_renderer::GlRenderer;
use mesh::{LineMeshData, MeshData};
use picking::pick_nearest;

const GIZMO_LENGTH: f32 = 1.2;
/// Tiny spheres are hard to click; picking inflates the radius to at least this.
const MIN_PICK_RADIUS: f32 = 0.12;
const SPHERE_RINGS: u32 = 24;
const SPHERE_SECTORS: u32 = 32;

/// Inputs that the CPU-side scene meshes depend on
#[derive(PartialEq, Clone, Copy)]
struct SceneKey {
    model_version: u64,
    selected: Option<PointId>,
    projection_color: Color,
    projection_radius_bits: u64,
}

impl SceneKey {
    fn of(state: &AppState) -> Self {
        Self {
            model_version: state.model.version(),
            selected: state.selection.selected(),
            projection_color: state.settings.projection.color,
            projection_radius_bits: state.settings.projection.radius.to_bits(),
        }
    }
}

/// 3D viewport panel with OpenGL rendering
pub struct ViewportPanel {
    camera: ArcBallCamera,
    gl_renderer: Option<Arc<Mutex<GlRenderer>>>,
    gizmo_state: GizmoState,
    /// CPU-side scene meshes, rebuilt when `SceneKey` changes
    scene_cache: Option<(SceneKey, Vec<MeshData>, LineMeshData)>,
    /// Bumped on every cache rebuild; drives GPU re-upload
    rebuild_count: u64,
}

impl ViewportPanel {
    pub fn new() -> Self {
        Self {
            camera: ArcBallCamera::new(),
            gl_renderer: None,
            gizmo_state: GizmoState::default(),
            scene_cache: None,
            rebuild_count: 0,
        }
    }

    /// Initialize GL renderer (must be called with a GL context)
    pub fn init_gl(&mut self, gl: &glow::Context) {
        let renderer = GlRenderer::new(gl);
        self.gl_renderer = Some(Arc::new(Mutex::new(renderer)));
    }

    pub fn reset_camera(&mut self) {
        self.camera = ArcBallCamera::new();
    }

    /// Focus camera on a specific point
    pub fn focus_on(&mut self, target: Vec3) {
        self.camera.target = target;
    }

    pub fn show(&mut self, ui: &mut Ui, state: &mut AppState) {
        let (rect, response) =
            ui.allocate_exact_size(ui.available_size(), egui::Sense::click_and_drag());

        // ── Gizmo and camera controls ───────────────────────
        self.handle_gizmo_and_camera(&response, ui, rect, state);

        // ── Scroll zoom ─────────────────────────────────────
        let scroll = ui.input(|i| i.smooth_scroll_delta.y);
        if scroll.abs() > 0.1 {
            self.camera.zoom(scroll * 0.01);
        }

        // ── Point selection via click ───────────────────────
        self.handle_selection(&response, ui, rect, state);

        if !ui.is_rect_visible(rect) {
            return;
        }

        // ── Rebuild CPU meshes when the model changed ───────
        self.rebuild_scene_if_needed(state);

        // ── Build gizmo lines ───────────────────────────────
        let gizmo_lines = self.build_gizmo_lines(state);

        // ── GL rendering ────────────────────────────────────
        self.render_gl(ui, rect, state, gizmo_lines);

        // ── Overlays ────────────────────────────────────────
        self.draw_overlays(ui, rect, state);
    }

    fn point_pos(state: &AppState, id: PointId) -> Vec3 {
        to_render_pos(state.model.geometry.point(id))
    }

    fn handle_gizmo_and_camera(
        &mut self,
        response: &egui::Response,
        ui: &Ui,
        rect: egui::Rect,
        state: &mut AppState,
    ) {
        // ── Gizmo drag handling ─────────────────────────────
        if self.gizmo_state.dragging {
            if response.dragged_by(egui::PointerButton::Primary) {
                let delta = response.drag_delta();
                if let (Some(axis), Some(id)) =
                    (self.gizmo_state.active_axis, self.gizmo_state.drag_point)
                {
                    let center = Self::point_pos(state, id);
                    let world_delta = compute_drag_delta(&self.camera, center, axis, delta, rect);
                    let p = state.model.geometry.point(id);
                    state.model.set_point_position(
                        id,
                        p.x + world_delta.x as f64,
                        p.y + world_delta.y as f64,
                        p.z + world_delta.z as f64,
                    );
                }
            }
            // End drag when button released
            if response.drag_stopped() || !response.dragged_by(egui::PointerButton::Primary) {
                self.gizmo_state.end_drag();
            }
        } else {
            // ── Camera controls (only when not dragging gizmo) ──
            if response.dragged_by(egui::PointerButton::Middle)
                || (response.dragged_by(egui::PointerButton::Primary)
                    && ui.input(|i| i.modifiers.alt))
            {
                let delta = response.drag_delta();
                self.camera.rotate(delta.x * 0.5, delta.y * 0.5);
            }

            if response.dragged_by(egui::PointerButton::Secondary) {
                let delta = response.drag_delta();
                self.camera.pan(delta.x * 0.01, delta.y * 0.01);
            }

            // ── Gizmo drag start on LMB drag ────────────────
            if response.drag_started_by(egui::PointerButton::Primary)
                && !ui.input(|i| i.modifiers.alt)
            {
                let pointer_pos = response
                    .interact_pointer_pos()
                    .or_else(|| response.hover_pos());
                if let (Some(pos), Some(id)) = (pointer_pos, state.selection.selected()) {
                    let center = Self::point_pos(state, id);
                    let ray = self.camera.screen_ray(pos, rect);
                    if let Some(axis) = gizmo_hit_test(&ray, center, GIZMO_LENGTH) {
                        self.gizmo_state.active_axis = Some(axis);
                        self.gizmo_state.dragging = true;
                        self.gizmo_state.drag_point = Some(id);
                    }
                }
            }
        }
    }

    fn handle_selection(
        &mut self,
        response: &egui::Response,
        ui: &Ui,
        rect: egui::Rect,
        state: &mut AppState,
    ) {
        if !response.clicked() || ui.input(|i| i.modifiers.alt) || self.gizmo_state.dragging {
            return;
        }

        let Some(pos) = response.interact_pointer_pos() else {
            return;
        };

        let ray = self.camera.screen_ray(pos, rect);

        // First check gizmo hit — if gizmo visible, don't pick through it
        if let Some(id) = state.selection.selected() {
            let center = Self::point_pos(state, id);
            if gizmo_hit_test(&ray, center, GIZMO_LENGTH).is_some() {
                return;
            }
        }

        let spheres: Vec<(PointId, Vec3, f32)> = PointId::all()
            .into_iter()
            .map(|id| {
                let radius = (state.model.geometry.point_radius(id) as f32).max(MIN_PICK_RADIUS);
                (id, Self::point_pos(state, id), radius)
            })
            .collect();

        match pick_nearest(&ray, &spheres) {
            Some(id) => state.selection.select(id),
            None => state.selection.clear(),
        }
    }

    fn rebuild_scene_if_needed(&mut self, state: &AppState) {
        let key = SceneKey::of(state);
        if let Some((cached_key, _, _)) = &self.scene_cache {
            if *cached_key == key {
                return;
            }
        }

        let (spheres, line) = build_scene_meshes(state);
        self.scene_cache = Some((key, spheres, line));
        self.rebuild_count += 1;
    }

    fn build_gizmo_lines(&self, state: &AppState) -> Option<LineMeshData> {
        state
            .selection
            .selected()
            .map(|id| build_gizmo_lines(Self::point_pos(state, id), GIZMO_LENGTH))
    }

    fn render_gl(
        &self,
        ui: &mut Ui,
        rect: egui::Rect,
        state: &AppState,
        gizmo_lines: Option<LineMeshData>,
    ) {
        let Some(gl_renderer) = &self.gl_renderer else {
            return;
        };
        let Some((_, spheres, line)) = &self.scene_cache else {
            return;
        };

        let renderer_clone = gl_renderer.clone();
        let camera_yaw = self.camera.yaw;
        let camera_pitch = self.camera.pitch;
        let camera_distance = self.camera.distance;
        let camera_target = self.camera.target;
        let camera_fov = self.camera.fov;

        let spheres = spheres.clone();
        let line = line.clone();
        let revision = self.rebuild_count;

        let grid_settings = state.settings.grid.clone();
        let axes_settings = state.settings.axes.clone();
        let bg_color = state.settings.viewport.background_color;
        let line_thickness = state.model.geometry.config().line_thickness as f32;

        let callback = egui::PaintCallback {
            rect,
            callback: Arc::new(eframe::egui_glow::CallbackFn::new(move |info, painter| {
                let gl = painter.gl();

                let camera = ArcBallCamera {
                    yaw: camera_yaw,
                    pitch: camera_pitch,
                    distance: camera_distance,
                    target: camera_target,
                    fov: camera_fov,
                };

                let clip = info.clip_rect_in_pixels();
                let viewport = [
                    clip.left_px as f32,
                    clip.from_bottom_px as f32,
                    clip.width_px as f32,
                    clip.height_px as f32,
                ];

                if let Ok(mut r) = renderer_clone.lock() {
                    r.update_grid(gl, &grid_settings);
                    r.update_axes(gl, &axes_settings);
                    r.sync_scene(gl, &spheres, &line, revision);
                    r.sync_gizmo(gl, gizmo_lines.as_ref());

                    let render_params = gl_renderer::RenderParams {
                        viewport,
                        grid_visible: grid_settings.visible,
                        axes_visible: axes_settings.visible,
                        axes_thickness: axes_settings.thickness,
                        line_thickness,
                        bg_color,
                    };
                    r.paint(gl, &camera, &render_params);
                }
            })),
        };

        ui.painter().add(callback);
    }

    fn draw_overlays(&self, ui: &mut Ui, rect: egui::Rect, state: &AppState) {
        let painter = ui.painter_at(rect);

        if state.settings.axes.show_labels {
            overlays::draw_axis_labels(&painter, rect, &self.camera, state.settings.axes.length);
        }

        overlays::draw_point_labels(&painter, rect, &self.camera, state);
        overlays::draw_angle_readout(&painter, rect, state);
        overlays::draw_camera_info(&painter, rect, &self.camera);

        if state.selection.selected().is_none() {
            overlays::draw_nav_hint(&painter, rect);
        }
    }
}

// ── CPU mesh building ────────────────────────────────────────

fn to_render_pos(p: shared::Vec3) -> Vec3 {
    Vec3::new(p.x as f32, p.y as f32, p.z as f32)
}

fn srgb(color: Color) -> [f32; 3] {
    [
        color[0] as f32 / 255.0,
        color[1] as f32 / 255.0,
        color[2] as f32 / 255.0,
    ]
}

/// Brighten the color of a selected point
fn display_color(color: Color, selected: bool) -> [f32; 3] {
    let c = srgb(color);
    if selected {
        [
            c[0] * 0.65 + 0.35,
            c[1] * 0.65 + 0.35,
            c[2] * 0.65 + 0.35,
        ]
    } else {
        c
    }
}

fn build_scene_meshes(state: &AppState) -> (Vec<MeshData>, LineMeshData) {
    let geo = &state.model.geometry;
    let mut spheres = Vec::with_capacity(4);

    for id in PointId::all() {
        let color = display_color(geo.point_color(id), state.selection.is_selected(id));
        spheres.push(mesh::sphere_at(
            to_render_pos(geo.point(id)),
            geo.point_radius(id) as f32,
            SPHERE_RINGS,
            SPHERE_SECTORS,
            color,
        ));
    }

    let proj = &state.settings.projection;
    let proj_color = srgb(proj.color);
    for id in PointId::all() {
        spheres.push(mesh::sphere_at(
            to_render_pos(geo.projection(id)),
            proj.radius as f32,
            SPHERE_RINGS,
            SPHERE_SECTORS,
            proj_color,
        ));
    }

    let lp = geo.line_positions();
    let lc = srgb(geo.config().line_color);
    let line = mesh::segment(
        Vec3::new(lp[0] as f32, lp[1] as f32, lp[2] as f32),
        Vec3::new(lp[3] as f32, lp[4] as f32, lp[5] as f32),
        [lc[0], lc[1], lc[2], 1.0],
    );

    (spheres, line)
}
