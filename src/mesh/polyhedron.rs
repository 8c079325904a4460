//! Flat-shaded solids with fixed geometry.

use glam::Vec3;

use super::{MeshData, Vertex};

/// Append one flat triangle with its own vertices and face normal.
fn push_face(mesh: &mut MeshData, corners: [Vec3; 3], uvs: [[f32; 2]; 3]) {
    let [a, b, c] = corners;
    let normal = (b - a).cross(c - a).normalize_or_zero().to_array();
    let base = mesh.vertices.len() as u32;
    for (p, uv) in corners.iter().zip(uvs) {
        mesh.vertices.push(Vertex::new(p.to_array(), normal, uv));
    }
    mesh.indices.extend_from_slice(&[base, base + 1, base + 2]);
}

const TRIANGLE_UVS: [[f32; 2]; 3] = [[0.0, 1.0], [1.0, 1.0], [0.5, 0.0]];

/// Cube spanning ±1 on every axis: 24 vertices, 12 triangles.
#[must_use]
pub fn cube() -> MeshData {
    // (normal, u, v) with u × v = normal
    let faces = [
        (Vec3::X, Vec3::NEG_Z, Vec3::Y),
        (Vec3::NEG_X, Vec3::Z, Vec3::Y),
        (Vec3::Y, Vec3::X, Vec3::NEG_Z),
        (Vec3::NEG_Y, Vec3::X, Vec3::Z),
        (Vec3::Z, Vec3::X, Vec3::Y),
        (Vec3::NEG_Z, Vec3::NEG_X, Vec3::Y),
    ];

    let mut mesh = MeshData::triangles(Vec::with_capacity(24), Vec::with_capacity(36));
    for (n, u, v) in faces {
        let base = mesh.vertices.len() as u32;
        let corners = [
            (n - u - v, [0.0, 1.0]),
            (n + u - v, [1.0, 1.0]),
            (n + u + v, [1.0, 0.0]),
            (n - u + v, [0.0, 0.0]),
        ];
        for (p, uv) in corners {
            mesh.vertices.push(Vertex::new(p.to_array(), n.to_array(), uv));
        }
        mesh.indices
            .extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }
    mesh
}

/// Regular tetrahedron on alternating corners of the ±1 cube.
#[must_use]
pub fn tetrahedron() -> MeshData {
    let v = [
        Vec3::new(1.0, 1.0, 1.0),
        Vec3::new(1.0, -1.0, -1.0),
        Vec3::new(-1.0, 1.0, -1.0),
        Vec3::new(-1.0, -1.0, 1.0),
    ];
    let faces = [[0, 1, 2], [1, 3, 2], [0, 2, 3], [0, 3, 1]];

    let mut mesh = MeshData::triangles(Vec::with_capacity(12), Vec::with_capacity(12));
    for [a, b, c] in faces {
        push_face(&mut mesh, [v[a], v[b], v[c]], TRIANGLE_UVS);
    }
    mesh
}

/// Octahedron with vertices on the unit axes.
#[must_use]
pub fn octahedron() -> MeshData {
    let mut mesh = MeshData::triangles(Vec::with_capacity(24), Vec::with_capacity(24));
    for sx in [1.0_f32, -1.0] {
        for sy in [1.0_f32, -1.0] {
            for sz in [1.0_f32, -1.0] {
                let (x, y, z) = (Vec3::X * sx, Vec3::Y * sy, Vec3::Z * sz);
                let corners = if sx * sy * sz > 0.0 {
                    [x, y, z]
                } else {
                    [x, z, y]
                };
                push_face(&mut mesh, corners, TRIANGLE_UVS);
            }
        }
    }
    mesh
}

/// Unit quad in the XY plane spanning ±1, facing +Z.
#[must_use]
pub fn quad() -> MeshData {
    let n = [0.0, 0.0, 1.0];
    MeshData::triangles(
        vec![
            Vertex::new([-1.0, -1.0, 0.0], n, [0.0, 1.0]),
            Vertex::new([1.0, -1.0, 0.0], n, [1.0, 1.0]),
            Vertex::new([1.0, 1.0, 0.0], n, [1.0, 0.0]),
            Vertex::new([-1.0, 1.0, 0.0], n, [0.0, 0.0]),
        ],
        vec![0, 1, 2, 0, 2, 3],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mesh::test_util::all_triangles_face_outward;

    #[test]
    fn counts() {
        assert_eq!(cube().triangle_count(), 12);
        assert_eq!(cube().vertices.len(), 24);
        assert_eq!(tetrahedron().triangle_count(), 4);
        assert_eq!(octahedron().triangle_count(), 8);
        assert_eq!(quad().triangle_count(), 2);
    }

    #[test]
    fn closed_solids_face_outward() {
        assert!(all_triangles_face_outward(&cube()));
        assert!(all_triangles_face_outward(&tetrahedron()));
        assert!(all_triangles_face_outward(&octahedron()));
    }

    #[test]
    fn cube_spans_unit_extent() {
        for v in cube().vertices {
            assert!(v.position.iter().all(|c| c.abs() == 1.0));
        }
    }

    #[test]
    fn flat_normals_match_winding() {
        for mesh in [cube(), tetrahedron(), octahedron(), quad()] {
            for tri in mesh.indices.chunks_exact(3) {
                let [a, b, c] = [tri[0], tri[1], tri[2]]
                    .map(|i| Vec3::from(mesh.vertices[i as usize].position));
                let face = (b - a).cross(c - a).normalize();
                let stored = Vec3::from(mesh.vertices[tri[0] as usize].normal);
                assert!(face.abs_diff_eq(stored, 1e-5));
            }
        }
    }
}
