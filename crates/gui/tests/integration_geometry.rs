//! Integration tests for the geometry model driven through the headless harness.

use shared::{PointId, SceneConfig, Vec3};
use sightline_gui_lib::fixtures;
use sightline_gui_lib::harness::TestHarness;

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-12,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn projections_track_their_points() {
    let mut h = TestHarness::new();
    h.set_point(PointId::A, 3.5, -1.25, 8.0);
    h.set_point(PointId::B, -2.0, 4.5, -3.0);

    for id in PointId::all() {
        let p = h.point(id);
        let proj = h.projection(id);
        assert_eq!(proj, Vec3::new(p.x, p.y, 0.0));
    }

    // Moving a point moves only its own projection
    h.set_point(PointId::A, 0.0, 0.0, 5.0);
    assert_eq!(h.projection(PointId::A), Vec3::new(0.0, 0.0, 0.0));
    assert_eq!(h.projection(PointId::B), Vec3::new(-2.0, 4.5, 0.0));
}

#[test]
fn azimuth_equals_atan2_of_horizontal_components() {
    let mut h = TestHarness::new();
    h.set_point(PointId::A, 1.0, -2.0, 0.5);
    h.set_point(PointId::B, -3.0, 4.0, 2.5);

    let expected = (4.0_f64 - (-2.0)).atan2(-3.0 - 1.0).to_degrees();
    assert_close(h.azimuth(), expected);
    assert!(h.azimuth() > -180.0 && h.azimuth() <= 180.0);
}

#[test]
fn derived_values_are_stable_across_reads() {
    let mut h = TestHarness::new();
    h.set_point(PointId::B, 0.123, 4.567, -8.9);

    let first = (h.angle(), h.azimuth(), h.line_positions());
    let second = (h.angle(), h.azimuth(), h.line_positions());
    assert_eq!(first, second);
}

#[test]
fn vertical_direction_yields_ninety_degree_inclination() {
    let h = TestHarness::with_config(fixtures::vertical_config());

    assert_close(h.azimuth(), 0.0);
    assert_close(h.angle(), 90.0);
}

#[test]
fn coincident_points_yield_zero_sentinels() {
    let h = TestHarness::with_config(fixtures::coincident_config(2.0, 3.0, 4.0));

    assert_eq!(h.azimuth(), 0.0);
    assert_eq!(h.angle(), 0.0);
}

#[test]
fn set_point_round_trips_exact_coordinates() {
    let mut h = TestHarness::new();
    h.set_point(PointId::A, 0.1, 0.2, 0.3);

    assert_eq!(h.point(PointId::A), Vec3::new(0.1, 0.2, 0.3));
}

#[test]
fn reset_restores_documented_defaults() {
    let mut h = TestHarness::with_config(fixtures::styled_config());
    h.set_point(PointId::B, 100.0, 100.0, 100.0);

    h.reset();

    let config = h.model.geometry.config().clone();
    assert_eq!(config, SceneConfig::default());
    assert_eq!(h.point(PointId::A), Vec3::new(-1.0, 0.0, 0.0));
    assert_eq!(h.point(PointId::B), Vec3::new(1.0, 1.0, 1.0));
}

#[test]
fn line_buffer_is_a_then_b() {
    let mut h = TestHarness::new();
    h.set_point(PointId::A, -1.0, -2.0, -3.0);
    h.set_point(PointId::B, 7.0, 8.0, 9.0);

    assert_eq!(h.line_positions(), [-1.0, -2.0, -3.0, 7.0, 8.0, 9.0]);
}

#[test]
fn extreme_coordinates_are_accepted_unvalidated() {
    let mut h = TestHarness::new();
    h.set_point(PointId::A, 1e12, -1e12, 0.0);
    h.set_point(PointId::B, -1e12, 1e12, 0.0);

    assert_eq!(h.point(PointId::A), Vec3::new(1e12, -1e12, 0.0));
    assert_close(h.angle(), 0.0);
    let expected = (2e12_f64).atan2(-2e12).to_degrees();
    assert_close(h.azimuth(), expected);
}
