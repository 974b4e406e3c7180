//! Wireframe UV sphere geometry for `gl.LINES`.

/// Vertices as flat xyz triples plus line-list indices.
#[derive(Debug, Clone, Default)]
pub struct WireMesh {
    pub positions: Vec<f32>,
    pub indices: Vec<u16>,
}

impl WireMesh {
    pub fn vertex_count(&self) -> usize {
        self.positions.len() / 3
    }
}

/// UV sphere with `segments` slices around and `segments` stacks top to
/// bottom. Each quad contributes its top edge, left edge and one diagonal,
/// which is every triangle edge of the filled mesh.
///
/// `segments` is clamped to `[3, 180]` so indices fit in `u16`.
pub fn wire_sphere(radius: f32, segments: u16) -> WireMesh {
    let n = segments.clamp(3, 180);
    let row = n + 1;
    let mut mesh = WireMesh::default();

    for iy in 0..=n {
        let v = iy as f32 / n as f32;
        let theta = v * std::f32::consts::PI;
        for ix in 0..=n {
            let u = ix as f32 / n as f32;
            let phi = u * std::f32::consts::TAU;
            mesh.positions.extend_from_slice(&[
                -radius * phi.cos() * theta.sin(),
                radius * theta.cos(),
                radius * phi.sin() * theta.sin(),
            ]);
        }
    }

    for iy in 0..n {
        for ix in 0..n {
            let a = iy * row + ix;
            let b = a + 1;
            let c = a + row;
            let d = c + 1;
            // top, left, diagonal
            mesh.indices.extend_from_slice(&[a, b, a, c, b, c]);
            if iy == n - 1 {
                mesh.indices.extend_from_slice(&[c, d]);
            }
            if ix == n - 1 {
                mesh.indices.extend_from_slice(&[b, d]);
            }
        }
    }
    mesh
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertices_sit_on_the_sphere() {
        let mesh = wire_sphere(0.3, 32);
        assert_eq!(mesh.vertex_count(), 33 * 33);
        for p in mesh.positions.chunks_exact(3) {
            let r = (p[0] * p[0] + p[1] * p[1] + p[2] * p[2]).sqrt();
            assert!((r - 0.3).abs() < 1e-5);
        }
    }

    #[test]
    fn indices_are_pairs_in_range() {
        let mesh = wire_sphere(1.0, 8);
        assert_eq!(mesh.indices.len() % 2, 0);
        // 3 edges per quad plus the closing bottom row and right column.
        assert_eq!(mesh.indices.len(), (8 * 8 * 3 + 8 + 8) * 2);
        let count = mesh.vertex_count() as u16;
        assert!(mesh.indices.iter().all(|&i| i < count));
    }

    #[test]
    fn segments_are_clamped() {
        assert_eq!(wire_sphere(1.0, 0).vertex_count(), 16);
        assert_eq!(wire_sphere(1.0, 1000).vertex_count(), 181 * 181);
    }
}
