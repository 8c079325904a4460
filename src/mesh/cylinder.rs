use std::f32::consts::TAU;

use super::{check_count, check_length, check_size, MeshData, Vertex};
use crate::error::ViewerError;

/// Open tube along Y, centered at the origin, spanning `-height/2` to
/// `+height/2`. Normals are radial with zero Y.
///
/// # Errors
///
/// [`ViewerError::InvalidParameter`] when `radius` or `height` is not
/// positive and finite, `segments < 3`, or the tessellation would not fit
/// `u32` indices.
pub fn cylinder(
    radius: f32,
    height: f32,
    segments: u32,
) -> Result<MeshData, ViewerError> {
    check_length("cylinder", "radius", radius)?;
    check_length("cylinder", "height", height)?;
    check_count("cylinder", "segments", segments, 3)?;
    let segments64 = u64::from(segments);
    let (vertex_count, index_count) =
        check_size("cylinder", Some((segments64 + 1) * 2), Some(segments64 * 6))?;

    let half = height * 0.5;
    let mut vertices = Vec::with_capacity(vertex_count);
    for j in 0..=segments {
        let u = j as f32 / segments as f32;
        let (sin, cos) = (u * TAU).sin_cos();
        let normal = [cos, 0.0, sin];
        vertices.push(Vertex::new(
            [radius * cos, -half, radius * sin],
            normal,
            [u, 1.0],
        ));
        vertices.push(Vertex::new(
            [radius * cos, half, radius * sin],
            normal,
            [u, 0.0],
        ));
    }

    let mut indices = Vec::with_capacity(index_count);
    for j in 0..segments {
        let p0 = j * 2; // bottom, θ_j
        let p1 = p0 + 2; // bottom, θ_j+1
        let p2 = p0 + 1; // top, θ_j
        let p3 = p0 + 3; // top, θ_j+1
        indices.extend_from_slice(&[p0, p2, p1, p1, p2, p3]);
    }

    Ok(MeshData::triangles(vertices, indices))
}

/// [`cylinder`] closed with flat disks at both ends (±Y normals).
///
/// # Errors
///
/// Same conditions as [`cylinder`].
pub fn cylinder_with_caps(
    radius: f32,
    height: f32,
    segments: u32,
) -> Result<MeshData, ViewerError> {
    // Side wall plus two disks of `segments + 2` vertices each.
    let segments64 = u64::from(segments);
    let _ = check_size(
        "cylinder",
        Some((segments64 + 1) * 2 + (segments64 + 2) * 2),
        Some(segments64 * 12),
    )?;
    let mut mesh = cylinder(radius, height, segments)?;
    let half = height * 0.5;
    append_disk(&mut mesh, radius, half, segments, true);
    append_disk(&mut mesh, radius, -half, segments, false);
    Ok(mesh)
}

/// Append a flat disk at height `y` facing +Y (`up`) or −Y.
pub(super) fn append_disk(
    mesh: &mut MeshData,
    radius: f32,
    y: f32,
    segments: u32,
    up: bool,
) {
    let normal = if up { [0.0, 1.0, 0.0] } else { [0.0, -1.0, 0.0] };
    let center = mesh.vertices.len() as u32;
    mesh.vertices.push(Vertex::new([0.0, y, 0.0], normal, [0.5, 0.5]));
    for j in 0..=segments {
        let (sin, cos) = (j as f32 / segments as f32 * TAU).sin_cos();
        mesh.vertices.push(Vertex::new(
            [radius * cos, y, radius * sin],
            normal,
            [0.5 + 0.5 * cos, 0.5 + 0.5 * sin],
        ));
    }
    for j in 0..segments {
        let a = center + 1 + j;
        let b = a + 1;
        if up {
            mesh.indices.extend_from_slice(&[center, b, a]);
        } else {
            mesh.indices.extend_from_slice(&[center, a, b]);
        }
    }
}
