use serde::{Deserialize, Serialize};

pub mod geometry;

pub use geometry::{GeometryModel, PointId};

/// Цвет в формате RGB (0–255 на канал)
pub type Color = [u8; 3];

/// 3D-вектор с двойной точностью
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Длина вектора
    pub fn length(self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }
}

impl std::ops::Sub for Vec3 {
    type Output = Vec3;

    fn sub(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

/// Сохраняемая запись сцены: координаты точек A и B и атрибуты отображения.
///
/// Значения по умолчанию восстанавливаются при сбросе сцены.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneConfig {
    pub point_a: Vec3,
    pub point_b: Vec3,
    pub point_a_color: Color,
    pub point_b_color: Color,
    pub point_a_radius: f64,
    pub point_b_radius: f64,
    pub line_color: Color,
    pub line_thickness: f64,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            point_a: Vec3::new(-1.0, 0.0, 0.0),
            point_b: Vec3::new(1.0, 1.0, 1.0),
            point_a_color: [255, 0, 0],
            point_b_color: [0, 0, 255],
            point_a_radius: 0.1,
            point_b_radius: 0.1,
            line_color: [255, 255, 255],
            line_thickness: 2.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scene_config_json_round_trip() {
        let config = SceneConfig {
            point_a: Vec3::new(0.5, -2.0, 3.25),
            point_b_color: [10, 20, 30],
            line_thickness: 4.5,
            ..SceneConfig::default()
        };

        let json = serde_json::to_string(&config).unwrap();
        let restored: SceneConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, config);
    }

    #[test]
    fn defaults_match_documented_values() {
        let config = SceneConfig::default();
        assert_eq!(config.point_a, Vec3::new(-1.0, 0.0, 0.0));
        assert_eq!(config.point_b, Vec3::new(1.0, 1.0, 1.0));
        assert_eq!(config.point_a_color, [255, 0, 0]);
        assert_eq!(config.point_b_color, [0, 0, 255]);
        assert_eq!(config.point_a_radius, 0.1);
        assert_eq!(config.point_b_radius, 0.1);
        assert_eq!(config.line_color, [255, 255, 255]);
        assert_eq!(config.line_thickness, 2.0);
    }
}
