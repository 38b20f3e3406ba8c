//! Geometry model state management
//!
//! Wraps the shared [`GeometryModel`] with a version counter for GPU cache
//! invalidation and with autosave/load of the scene record.

use shared::{GeometryModel, PointId, SceneConfig};

/// Geometry model with a mutation version counter
#[derive(Default)]
pub struct ModelState {
    /// Current geometry model
    pub geometry: GeometryModel,
    /// Monotonically increasing version counter for cache invalidation
    version: u64,
}

impl ModelState {
    /// Current model version (increments on every mutation)
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Bump version after a direct mutation through `geometry.config_mut()`
    pub fn notify_mutated(&mut self) {
        self.version += 1;
    }

    /// Overwrite a point position
    pub fn set_point_position(&mut self, id: PointId, x: f64, y: f64, z: f64) {
        self.geometry.set_point_position(id, x, y, z);
        self.version += 1;
    }

    /// Replace the whole scene record (file load, CLI argument)
    pub fn set_config(&mut self, config: SceneConfig) {
        self.geometry.set_config(config);
        self.version += 1;
    }

    /// Reset the scene to the hard-coded defaults
    pub fn reset(&mut self) {
        self.geometry.reset();
        self.version += 1;
    }

    // ── Autosave ─────────────────────────────────────────────

    fn autosave_path() -> Option<std::path::PathBuf> {
        directories::ProjectDirs::from("com", "sightline", "sightline")
            .map(|dirs| dirs.data_dir().join("autosave.json"))
    }

    /// Save the scene record to the autosave file
    pub fn autosave(&self) {
        if let Some(path) = Self::autosave_path() {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            if let Ok(json) = serde_json::to_string_pretty(self.geometry.config()) {
                let _ = std::fs::write(&path, json);
            }
        }
    }

    /// Load the scene record from the autosave file
    pub fn load_autosave() -> Option<SceneConfig> {
        let path = Self::autosave_path()?;
        let json = std::fs::read_to_string(&path).ok()?;
        serde_json::from_str(&json).ok()
    }

    /// Delete the autosave file (reset-to-defaults path)
    pub fn clear_autosave() {
        if let Some(path) = Self::autosave_path() {
            if path.exists() {
                if let Err(e) = std::fs::remove_file(&path) {
                    tracing::warn!("Failed to remove autosave: {e}");
                }
            }
        }
    }
}
