use std::f32::consts::TAU;

use glam::Vec3;

use super::cylinder::append_disk;
use super::{check_count, check_length, check_size, MeshData, Vertex};
use crate::error::ViewerError;

/// Cone along Y with its apex at `+height/2` and a closed base at
/// `-height/2`. The slanted side has smooth normals; each side triangle gets
/// its own apex vertex so the normal there follows the face.
///
/// # Errors
///
/// [`ViewerError::InvalidParameter`] when `radius` or `height` is not
/// positive and finite, `slices < 3`, or the tessellation would not fit
/// `u32` indices.
pub fn cone(radius: f32, height: f32, slices: u32) -> Result<MeshData, ViewerError> {
    check_length("cone", "radius", radius)?;
    check_length("cone", "height", height)?;
    check_count("cone", "slices", slices, 3)?;
    // Rim, per-face apexes, then the base disk.
    let slices64 = u64::from(slices);
    let (vertex_count, index_count) = check_size(
        "cone",
        Some((slices64 + 1) + slices64 + (slices64 + 2)),
        Some(slices64 * 6),
    )?;

    let half = height * 0.5;
    let slant = |angle: f32| {
        let (sin, cos) = angle.sin_cos();
        Vec3::new(height * cos, radius, height * sin).normalize().to_array()
    };

    let mut vertices = Vec::with_capacity(vertex_count);
    for j in 0..=slices {
        let u = j as f32 / slices as f32;
        let (sin, cos) = (u * TAU).sin_cos();
        vertices.push(Vertex::new(
            [radius * cos, -half, radius * sin],
            slant(u * TAU),
            [u, 1.0],
        ));
    }
    let apex = vertices.len() as u32;
    for j in 0..slices {
        let u = (j as f32 + 0.5) / slices as f32;
        vertices.push(Vertex::new([0.0, half, 0.0], slant(u * TAU), [u, 0.0]));
    }

    let mut indices = Vec::with_capacity(index_count);
    for j in 0..slices {
        indices.extend_from_slice(&[j, apex + j, j + 1]);
    }

    let mut mesh = MeshData::triangles(vertices, indices);
    append_disk(&mut mesh, radius, -half, slices, false);
    Ok(mesh)
}
