use glam::Vec3;
use shared::PointId;

/// A ray in world space
pub struct Ray {
    pub origin: Vec3,
    /// Normalized direction
    pub direction: Vec3,
}

/// Ray-sphere intersection.
/// Returns the distance along the ray to the nearest hit, or None.
pub fn ray_sphere(ray: &Ray, center: Vec3, radius: f32) -> Option<f32> {
    let oc = ray.origin - center;
    let b = oc.dot(ray.direction);
    let c = oc.dot(oc) - radius * radius;

    let disc = b * b - c;
    if disc < 0.0 {
        return None;
    }

    let sqrt_disc = disc.sqrt();
    let t_near = -b - sqrt_disc;
    if t_near >= 0.0 {
        return Some(t_near);
    }
    // Ray origin inside the sphere
    let t_far = -b + sqrt_disc;
    if t_far >= 0.0 {
        return Some(t_far);
    }
    None
}

/// Pick the nearest point whose sphere is intersected by the ray.
pub fn pick_nearest(ray: &Ray, spheres: &[(PointId, Vec3, f32)]) -> Option<PointId> {
    let mut best: Option<(PointId, f32)> = None;

    for (id, center, radius) in spheres {
        if let Some(dist) = ray_sphere(ray, *center, *radius) {
            if best.as_ref().is_none_or(|(_, d)| dist < *d) {
                best = Some((*id, dist));
            }
        }
    }

    best.map(|(id, _)| id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ray_hits_sphere_head_on() {
        let ray = Ray {
            origin: Vec3::new(0.0, 0.0, 5.0),
            direction: Vec3::new(0.0, 0.0, -1.0),
        };
        let dist = ray_sphere(&ray, Vec3::ZERO, 1.0).unwrap();
        assert!((dist - 4.0).abs() < 1e-5);
    }

    #[test]
    fn ray_misses_offset_sphere() {
        let ray = Ray {
            origin: Vec3::new(0.0, 0.0, 5.0),
            direction: Vec3::new(0.0, 0.0, -1.0),
        };
        assert!(ray_sphere(&ray, Vec3::new(3.0, 0.0, 0.0), 1.0).is_none());
    }

    #[test]
    fn pick_prefers_closer_sphere() {
        let ray = Ray {
            origin: Vec3::new(0.0, 0.0, 10.0),
            direction: Vec3::new(0.0, 0.0, -1.0),
        };
        let spheres = [
            (PointId::A, Vec3::new(0.0, 0.0, -2.0), 0.5),
            (PointId::B, Vec3::new(0.0, 0.0, 3.0), 0.5),
        ];
        assert_eq!(pick_nearest(&ray, &spheres), Some(PointId::B));
    }

    #[test]
    fn origin_inside_sphere_still_hits() {
        let ray = Ray {
            origin: Vec3::ZERO,
            direction: Vec3::new(1.0, 0.0, 0.0),
        };
        let dist = ray_sphere(&ray, Vec3::ZERO, 1.0).unwrap();
        assert!((dist - 1.0).abs() < 1e-5);
    }
}
