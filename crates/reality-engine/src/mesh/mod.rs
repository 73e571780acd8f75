//! CPU-side 2D meshes.
//!
//! Positions are in normalized device coordinates (`[-1, 1]`, +Y up); there is
//! no camera or viewport transform between a `Mesh` and the vertex shader.

mod spin;

pub use spin::Spin;

use bytemuck::{Pod, Zeroable};
use thiserror::Error;

/// A single 2D position, laid out for direct upload as `Float32x2`.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Pod, Zeroable)]
pub struct Vertex2D {
    pub pos: [f32; 2],
}

impl Vertex2D {
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { pos: [x, y] }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MeshError {
    #[error("mesh has no vertices or no indices")]
    Empty,
    #[error("index count {len} is not a multiple of 3")]
    PartialTriangle { len: usize },
    #[error("index {index} is out of range for {vertex_count} vertices")]
    IndexOutOfRange { index: u16, vertex_count: usize },
}

/// Indexed triangle list.
///
/// Invariant: non-empty, whole triangles, every index names an existing vertex.
#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
    vertices: Vec<Vertex2D>,
    indices: Vec<u16>,
}

impl Mesh {
    pub fn new(vertices: Vec<Vertex2D>, indices: Vec<u16>) -> Result<Self, MeshError> {
        if vertices.is_empty() || indices.is_empty() {
            return Err(MeshError::Empty);
        }
        if indices.len() % 3 != 0 {
            return Err(MeshError::PartialTriangle { len: indices.len() });
        }
        if let Some(&index) = indices.iter().find(|&&i| usize::from(i) >= vertices.len()) {
            return Err(MeshError::IndexOutOfRange {
                index,
                vertex_count: vertices.len(),
            });
        }
        Ok(Self { vertices, indices })
    }

    /// Right triangle with its right angle at `(-0.5, -0.5)`: the upper-left
    /// half of [`Mesh::quad`].
    pub fn triangle() -> Self {
        Self {
            vertices: vec![
                Vertex2D::new(-0.5, 0.5),
                Vertex2D::new(-0.5, -0.5),
                Vertex2D::new(0.5, 0.5),
            ],
            indices: vec![0, 1, 2],
        }
    }

    /// Axis-aligned square of side 1 centred on the origin, two triangles.
    pub fn quad() -> Self {
        Self {
            vertices: vec![
                Vertex2D::new(-0.5, 0.5),
                Vertex2D::new(-0.5, -0.5),
                Vertex2D::new(0.5, -0.5),
                Vertex2D::new(0.5, 0.5),
            ],
            indices: vec![0, 1, 2, 2, 3, 0],
        }
    }

    #[inline]
    pub fn vertices(&self) -> &[Vertex2D] {
        &self.vertices
    }

    #[inline]
    pub fn indices(&self) -> &[u16] {
        &self.indices
    }

    /// Returns a copy rotated counter-clockwise by `radians` about `pivot`.
    pub fn rotated_about(&self, pivot: [f32; 2], radians: f32) -> Self {
        let (sin, cos) = radians.sin_cos();
        let vertices = self
            .vertices
            .iter()
            .map(|v| {
                let x = v.pos[0] - pivot[0];
                let y = v.pos[1] - pivot[1];
                Vertex2D::new(pivot[0] + x * cos - y * sin, pivot[1] + x * sin + y * cos)
            })
            .collect();

        Self {
            vertices,
            indices: self.indices.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_2, PI};

    fn close(a: Vertex2D, b: Vertex2D) -> bool {
        (a.pos[0] - b.pos[0]).abs() < 1e-5 && (a.pos[1] - b.pos[1]).abs() < 1e-5
    }

    // ── validation ────────────────────────────────────────────────────────

    #[test]
    fn builtin_meshes_are_valid() {
        for m in [Mesh::triangle(), Mesh::quad()] {
            let rebuilt = Mesh::new(m.vertices().to_vec(), m.indices().to_vec());
            assert_eq!(rebuilt.as_ref(), Ok(&m));
        }
    }

    #[test]
    fn triangle_is_upper_left_half_of_quad() {
        let quad = Mesh::quad();
        let q = quad.vertices();
        assert_eq!(Mesh::triangle().vertices(), &[q[0], q[1], q[3]]);
    }

    #[test]
    fn index_past_vertex_buffer_is_rejected() {
        let verts = Mesh::triangle().vertices().to_vec();
        let err = Mesh::new(verts, vec![0, 1, 3]).unwrap_err();
        assert_eq!(err, MeshError::IndexOutOfRange { index: 3, vertex_count: 3 });
    }

    #[test]
    fn partial_triangle_is_rejected() {
        let verts = Mesh::quad().vertices().to_vec();
        let err = Mesh::new(verts, vec![0, 1, 2, 3]).unwrap_err();
        assert_eq!(err, MeshError::PartialTriangle { len: 4 });
    }

    #[test]
    fn empty_mesh_is_rejected() {
        assert_eq!(Mesh::new(vec![], vec![]), Err(MeshError::Empty));
        assert_eq!(
            Mesh::new(vec![Vertex2D::new(0.0, 0.0)], vec![]),
            Err(MeshError::Empty)
        );
    }

    // ── rotation ──────────────────────────────────────────────────────────

    #[test]
    fn quarter_turn_about_origin() {
        let m = Mesh::triangle().rotated_about([0.0, 0.0], FRAC_PI_2);
        // (-0.5, 0.5) -> (-0.5, -0.5), (-0.5, -0.5) -> (0.5, -0.5)
        assert!(close(m.vertices()[0], Vertex2D::new(-0.5, -0.5)));
        assert!(close(m.vertices()[1], Vertex2D::new(0.5, -0.5)));
        assert_eq!(m.indices(), Mesh::triangle().indices());
    }

    #[test]
    fn pivot_vertex_is_fixed() {
        let m = Mesh::quad().rotated_about([0.5, 0.5], PI);
        assert!(close(m.vertices()[3], Vertex2D::new(0.5, 0.5)));
        assert!(close(m.vertices()[1], Vertex2D::new(1.5, 1.5)));
    }

    #[test]
    fn zero_rotation_is_identity() {
        let m = Mesh::quad();
        assert_eq!(m.rotated_about([0.0, 0.0], 0.0), m);
    }
}
