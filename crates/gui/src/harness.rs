//! Headless test harness for programmatic model manipulation.
//!
//! Drives the same state types as the GUI without any window or GL context.

use shared::{PointId, SceneConfig, Vec3};

use crate::state::{ModelState, SelectionState};

/// Headless harness — manages the geometry model and selection without a UI
#[derive(Default)]
pub struct TestHarness {
    pub model: ModelState,
    pub selection: SelectionState,
}

impl TestHarness {
    /// Create a harness with the default scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a harness from a prepared scene record.
    pub fn with_config(config: SceneConfig) -> Self {
        let mut harness = Self::default();
        harness.model.set_config(config);
        harness
    }

    // ── Model manipulation ────────────────────────────────────

    pub fn set_point(&mut self, id: PointId, x: f64, y: f64, z: f64) {
        self.model.set_point_position(id, x, y, z);
    }

    pub fn point(&self, id: PointId) -> Vec3 {
        self.model.geometry.point(id)
    }

    pub fn projection(&self, id: PointId) -> Vec3 {
        self.model.geometry.projection(id)
    }

    pub fn angle(&self) -> f64 {
        self.model.geometry.angle()
    }

    pub fn azimuth(&self) -> f64 {
        self.model.geometry.azimuth()
    }

    pub fn line_positions(&self) -> [f64; 6] {
        self.model.geometry.line_positions()
    }

    /// Reset the scene to the hard-coded defaults
    pub fn reset(&mut self) {
        self.model.reset();
        self.selection.clear();
    }

    pub fn version(&self) -> u64 {
        self.model.version()
    }

    // ── Selection ─────────────────────────────────────────────

    pub fn select(&mut self, id: PointId) {
        self.selection.select(id);
    }

    pub fn selected(&self) -> Option<PointId> {
        self.selection.selected()
    }

    // ── Persistence ───────────────────────────────────────────

    /// Export the current scene record as JSON
    pub fn export_config_json(&self) -> String {
        serde_json::to_string_pretty(self.model.geometry.config()).unwrap_or_default()
    }

    /// Load a scene record from a JSON string (replaces current)
    pub fn load_config_json(&mut self, json: &str) -> Result<(), String> {
        let config: SceneConfig =
            serde_json::from_str(json).map_err(|e| format!("JSON parse error: {e}"))?;
        self.model.set_config(config);
        self.selection.clear();
        Ok(())
    }
}
