//! Геометрическая модель: точки A и B, их проекции на плоскость XY
//! и производные углы.
//!
//! Все производные величины вычисляются при чтении из текущих позиций
//! точек, поэтому они всегда согласованы с состоянием модели.

use serde::{Deserialize, Serialize};

use crate::{Color, SceneConfig, Vec3};

/// Идентификатор точки сцены
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PointId {
    A,
    B,
}

impl PointId {
    /// Подпись точки в интерфейсе
    pub fn label(self) -> &'static str {
        match self {
            PointId::A => "A",
            PointId::B => "B",
        }
    }

    /// Подпись проекции точки
    pub fn projection_label(self) -> &'static str {
        match self {
            PointId::A => "A′",
            PointId::B => "B′",
        }
    }

    pub fn all() -> [PointId; 2] {
        [PointId::A, PointId::B]
    }
}

/// Модель геометрии — владеет позициями точек и атрибутами отображения.
///
/// Позиции меняются только через [`GeometryModel::set_point_position`];
/// значения не валидируются, принимаются любые вещественные числа.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GeometryModel {
    config: SceneConfig,
}

impl GeometryModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    /// Прямой доступ к атрибутам отображения (цвета, радиусы, линия)
    pub fn config_mut(&mut self) -> &mut SceneConfig {
        &mut self.config
    }

    /// Заменить всю запись сцены (загрузка из файла)
    pub fn set_config(&mut self, config: SceneConfig) {
        self.config = config;
    }

    /// Сбросить сцену к значениям по умолчанию
    pub fn reset(&mut self) {
        self.config = SceneConfig::default();
    }

    // ── Точки ────────────────────────────────────────────────

    pub fn point(&self, id: PointId) -> Vec3 {
        match id {
            PointId::A => self.config.point_a,
            PointId::B => self.config.point_b,
        }
    }

    /// Перезаписать позицию точки
    pub fn set_point_position(&mut self, id: PointId, x: f64, y: f64, z: f64) {
        let target = match id {
            PointId::A => &mut self.config.point_a,
            PointId::B => &mut self.config.point_b,
        };
        *target = Vec3::new(x, y, z);
    }

    pub fn point_color(&self, id: PointId) -> Color {
        match id {
            PointId::A => self.config.point_a_color,
            PointId::B => self.config.point_b_color,
        }
    }

    pub fn point_radius(&self, id: PointId) -> f64 {
        match id {
            PointId::A => self.config.point_a_radius,
            PointId::B => self.config.point_b_radius,
        }
    }

    // ── Производные величины ─────────────────────────────────

    /// Проекция точки на плоскость XY (вертикальная координата обнуляется)
    pub fn projection(&self, id: PointId) -> Vec3 {
        let p = self.point(id);
        Vec3::new(p.x, p.y, 0.0)
    }

    /// Угол наклона вектора AB относительно горизонтальной плоскости,
    /// в градусах, диапазон [−90°, 90°].
    ///
    /// При совпадающих точках atan2(0, 0) = 0, поэтому угол равен нулю.
    pub fn angle(&self) -> f64 {
        let d = self.delta();
        let horizontal = d.x.hypot(d.y);
        d.z.atan2(horizontal).to_degrees()
    }

    /// Азимут горизонтальной составляющей вектора AB относительно оси X,
    /// в градусах, диапазон (−180°, 180°]; ноль при нулевой составляющей.
    pub fn azimuth(&self) -> f64 {
        let d = self.delta();
        d.y.atan2(d.x).to_degrees()
    }

    /// Длина отрезка AB
    pub fn distance(&self) -> f64 {
        self.delta().length()
    }

    /// Буфер концов линии: `[A.x, A.y, A.z, B.x, B.y, B.z]`
    pub fn line_positions(&self) -> [f64; 6] {
        let a = self.config.point_a;
        let b = self.config.point_b;
        [a.x, a.y, a.z, b.x, b.y, b.z]
    }

    fn delta(&self) -> Vec3 {
        self.config.point_b - self.config.point_a
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-12,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn projection_zeroes_vertical_and_keeps_horizontal() {
        let mut model = GeometryModel::new();
        model.set_point_position(PointId::A, 1.5, -2.5, 7.0);
        model.set_point_position(PointId::B, -3.0, 0.25, -4.0);

        for id in PointId::all() {
            let p = model.point(id);
            let proj = model.projection(id);
            assert_eq!(proj.z, 0.0);
            assert_eq!(proj.x, p.x);
            assert_eq!(proj.y, p.y);
        }
    }

    #[test]
    fn azimuth_matches_atan2_of_horizontal_delta() {
        let mut model = GeometryModel::new();
        model.set_point_position(PointId::A, 1.0, 2.0, 3.0);
        model.set_point_position(PointId::B, 4.0, 6.0, -1.0);

        let expected = (6.0_f64 - 2.0).atan2(4.0 - 1.0).to_degrees();
        assert_close(model.azimuth(), expected);
    }

    #[test]
    fn derived_reads_are_idempotent() {
        let mut model = GeometryModel::new();
        model.set_point_position(PointId::A, 0.3, 0.7, -1.2);

        assert_eq!(model.angle(), model.angle());
        assert_eq!(model.azimuth(), model.azimuth());
        assert_eq!(model.projection(PointId::A), model.projection(PointId::A));
        assert_eq!(model.line_positions(), model.line_positions());
    }

    #[test]
    fn vertical_direction_gives_ninety_degrees() {
        let mut model = GeometryModel::new();
        model.set_point_position(PointId::A, 0.0, 0.0, 0.0);
        model.set_point_position(PointId::B, 0.0, 0.0, 1.0);

        assert_close(model.azimuth(), 0.0);
        assert_close(model.angle(), 90.0);
    }

    #[test]
    fn coincident_points_give_zero_angles() {
        let mut model = GeometryModel::new();
        model.set_point_position(PointId::A, 2.0, 3.0, 4.0);
        model.set_point_position(PointId::B, 2.0, 3.0, 4.0);

        assert_eq!(model.azimuth(), 0.0);
        assert_eq!(model.angle(), 0.0);
    }

    #[test]
    fn set_position_round_trips_exactly() {
        let mut model = GeometryModel::new();
        model.set_point_position(PointId::A, 0.1, -0.2, 12345.6789);

        assert_eq!(model.point(PointId::A), Vec3::new(0.1, -0.2, 12345.6789));
    }

    #[test]
    fn reset_restores_default_literals() {
        let mut model = GeometryModel::new();
        model.set_point_position(PointId::A, 9.0, 9.0, 9.0);
        model.config_mut().line_thickness = 7.5;
        model.config_mut().point_b_color = [1, 2, 3];

        model.reset();
        assert_eq!(*model.config(), SceneConfig::default());
    }

    #[test]
    fn line_positions_follow_points() {
        let mut model = GeometryModel::new();
        model.set_point_position(PointId::A, 1.0, 2.0, 3.0);
        model.set_point_position(PointId::B, 4.0, 5.0, 6.0);

        assert_eq!(model.line_positions(), [1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    }

    #[test]
    fn distance_is_euclidean_norm_of_delta() {
        let mut model = GeometryModel::new();
        model.set_point_position(PointId::A, 0.0, 0.0, 0.0);
        model.set_point_position(PointId::B, 2.0, 3.0, 6.0);

        assert_close(model.distance(), 7.0);
    }

    #[test]
    fn downward_direction_gives_negative_angle() {
        let mut model = GeometryModel::new();
        model.set_point_position(PointId::A, 0.0, 0.0, 1.0);
        model.set_point_position(PointId::B, 1.0, 0.0, 0.0);

        assert_close(model.angle(), -45.0);
        assert_close(model.azimuth(), 0.0);
    }
}
