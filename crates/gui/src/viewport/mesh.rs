use glam::Vec3;

/// CPU-side mesh data: interleaved [pos.x, pos.y, pos.z, norm.x, norm.y, norm.z, r, g, b]
#[derive(Clone)]
pub struct MeshData {
    /// 9 floats per vertex: position(3) + normal(3) + color(3)
    pub vertices: Vec<f32>,
    pub indices: Vec<u32>,
}

impl MeshData {
    pub fn vertex_count(&self) -> usize {
        self.vertices.len() / 9
    }
}

/// Lines mesh: interleaved [pos.x, pos.y, pos.z, r, g, b, a]
#[derive(Clone)]
pub struct LineMeshData {
    /// 7 floats per vertex: position(3) + color(4)
    pub vertices: Vec<f32>,
}

// ── Primitive generation ─────────────────────────────────────

/// UV sphere centered at `center`.
pub fn sphere_at(center: Vec3, radius: f32, rings: u32, sectors: u32, color: [f32; 3]) -> MeshData {
    let mut vertices = Vec::new();
    let mut indices = Vec::new();

    for r in 0..=rings {
        let phi = std::f32::consts::PI * r as f32 / rings as f32;
        let sp = phi.sin();
        let cp = phi.cos();

        for s in 0..=sectors {
            let theta = std::f32::consts::TAU * s as f32 / sectors as f32;
            let st = theta.sin();
            let ct = theta.cos();

            let x = sp * ct;
            let y = sp * st;
            let z = cp;

            let n = Vec3::new(x, y, z);
            push_vert(
                &mut vertices,
                center.x + radius * x,
                center.y + radius * y,
                center.z + radius * z,
                n,
                color,
            );
        }
    }

    for r in 0..rings {
        for s in 0..sectors {
            let i0 = r * (sectors + 1) + s;
            let i1 = i0 + 1;
            let i2 = i0 + sectors + 1;
            let i3 = i2 + 1;
            indices.extend_from_slice(&[i0, i2, i1, i1, i2, i3]);
        }
    }

    MeshData { vertices, indices }
}

/// Line segment between two points.
pub fn segment(a: Vec3, b: Vec3, color: [f32; 4]) -> LineMeshData {
    let mut vertices = Vec::new();
    push_line_vert(&mut vertices, a.x, a.y, a.z, color);
    push_line_vert(&mut vertices, b.x, b.y, b.z, color);
    LineMeshData { vertices }
}

// ── Grid and axes ────────────────────────────────────────────

/// Ground grid in the XY plane (z = 0).
pub fn grid(range: i32, cell_size: f32, opacity: f32) -> LineMeshData {
    let mut vertices = Vec::new();
    let grid_color = [0.25_f32, 0.25, 0.25, opacity];
    let origin_color_x = [0.5_f32, 0.2, 0.2, opacity * 0.7];
    let origin_color_y = [0.2_f32, 0.5, 0.2, opacity * 0.7];

    let extent = range as f32 * cell_size;

    for i in -range..=range {
        let f = i as f32 * cell_size;
        let color = if i == 0 { origin_color_y } else { grid_color };
        // Line along Y
        push_line_vert(&mut vertices, f, -extent, 0.0, color);
        push_line_vert(&mut vertices, f, extent, 0.0, color);

        let color = if i == 0 { origin_color_x } else { grid_color };
        // Line along X
        push_line_vert(&mut vertices, -extent, f, 0.0, color);
        push_line_vert(&mut vertices, extent, f, 0.0, color);
    }

    LineMeshData { vertices }
}

pub fn axes(length: f32) -> LineMeshData {
    let mut vertices = Vec::new();
    let r = [0.9_f32, 0.2, 0.2, 1.0];
    let g = [0.2_f32, 0.8, 0.2, 1.0];
    let b = [0.2_f32, 0.3, 0.9, 1.0];

    // X axis
    push_line_vert(&mut vertices, 0.0, 0.0, 0.0, r);
    push_line_vert(&mut vertices, length, 0.0, 0.0, r);
    // Y axis
    push_line_vert(&mut vertices, 0.0, 0.0, 0.0, g);
    push_line_vert(&mut vertices, 0.0, length, 0.0, g);
    // Z axis (vertical)
    push_line_vert(&mut vertices, 0.0, 0.0, 0.0, b);
    push_line_vert(&mut vertices, 0.0, 0.0, length, b);

    LineMeshData { vertices }
}

// ── Helpers ──────────────────────────────────────────────────

fn push_vert(v: &mut Vec<f32>, px: f32, py: f32, pz: f32, n: Vec3, c: [f32; 3]) {
    v.extend_from_slice(&[px, py, pz, n.x, n.y, n.z, c[0], c[1], c[2]]);
}

pub(crate) fn push_line_vert(v: &mut Vec<f32>, px: f32, py: f32, pz: f32, c: [f32; 4]) {
    v.extend_from_slice(&[px, py, pz, c[0], c[1], c[2], c[3]]);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sphere_is_centered_and_sized() {
        let center = Vec3::new(1.0, 2.0, 3.0);
        let data = sphere_at(center, 0.5, 8, 12, [1.0, 0.0, 0.0]);
        assert!(data.vertex_count() > 0);

        for i in 0..data.vertex_count() {
            let base = i * 9;
            let p = Vec3::new(
                data.vertices[base],
                data.vertices[base + 1],
                data.vertices[base + 2],
            );
            let dist = (p - center).length();
            assert!((dist - 0.5).abs() < 1e-4, "vertex off the sphere: {dist}");
        }
    }

    #[test]
    fn grid_lies_in_ground_plane() {
        let data = grid(3, 1.0, 0.6);
        for chunk in data.vertices.chunks(7) {
            assert_eq!(chunk[2], 0.0);
        }
    }

    #[test]
    fn segment_carries_endpoints() {
        let data = segment(
            Vec3::new(-1.0, 0.0, 0.0),
            Vec3::new(1.0, 1.0, 1.0),
            [1.0, 1.0, 1.0, 1.0],
        );
        assert_eq!(data.vertices.len(), 14);
        assert_eq!(&data.vertices[0..3], &[-1.0, 0.0, 0.0]);
        assert_eq!(&data.vertices[7..10], &[1.0, 1.0, 1.0]);
    }
}
