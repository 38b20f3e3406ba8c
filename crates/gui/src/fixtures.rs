//! Factory functions for creating test data.

use shared::{SceneConfig, Vec3};

/// Scene with both points at the same location (degenerate direction vector).
pub fn coincident_config(x: f64, y: f64, z: f64) -> SceneConfig {
    SceneConfig {
        point_a: Vec3::new(x, y, z),
        point_b: Vec3::new(x, y, z),
        ..SceneConfig::default()
    }
}

/// Scene with a purely vertical A→B direction.
pub fn vertical_config() -> SceneConfig {
    SceneConfig {
        point_a: Vec3::new(0.0, 0.0, 0.0),
        point_b: Vec3::new(0.0, 0.0, 1.0),
        ..SceneConfig::default()
    }
}

/// Scene with distinctive display attributes, for serialization tests.
pub fn styled_config() -> SceneConfig {
    SceneConfig {
        point_a: Vec3::new(2.5, -1.0, 0.75),
        point_b: Vec3::new(-0.5, 3.0, -2.25),
        point_a_color: [20, 200, 120],
        point_b_color: [200, 120, 20],
        point_a_radius: 0.3,
        point_b_radius: 0.15,
        line_color: [90, 90, 200],
        line_thickness: 5.0,
    }
}
