use std::f32::consts::{PI, TAU};

use super::{check_count, check_length, check_size, MeshData, Vertex};
use crate::error::ViewerError;

/// UV sphere centered at the origin.
///
/// `slices` latitude bands run from the +Y pole (φ = 0) to the −Y pole
/// (φ = π); `segments` longitude divisions wrap once around Y. The θ = 2π
/// column repeats θ = 0 so texture coordinates never wrap mid-quad, giving
/// `(slices + 1) * (segments + 1)` vertices and exactly
/// `segments * slices * 2` triangles (the pole rows are degenerate).
///
/// # Errors
///
/// [`ViewerError::InvalidParameter`] when `radius` is not positive and
/// finite, `segments < 3`, `slices < 2`, or the tessellation would not fit
/// `u32` indices.
pub fn sphere(
    radius: f32,
    segments: u32,
    slices: u32,
) -> Result<MeshData, ViewerError> {
    check_length("sphere", "radius", radius)?;
    check_count("sphere", "segments", segments, 3)?;
    check_count("sphere", "slices", slices, 2)?;
    let (vertex_count, index_count) = check_size(
        "sphere",
        (u64::from(slices) + 1).checked_mul(u64::from(segments) + 1),
        (u64::from(slices) * 6).checked_mul(u64::from(segments)),
    )?;

    let columns = segments + 1;
    let mut vertices = Vec::with_capacity(vertex_count);
    for i in 0..=slices {
        let v = i as f32 / slices as f32;
        let (sin_phi, cos_phi) = (v * PI).sin_cos();
        for j in 0..=segments {
            let u = j as f32 / segments as f32;
            let (sin_theta, cos_theta) = (u * TAU).sin_cos();
            let normal = [sin_phi * cos_theta, cos_phi, sin_phi * sin_theta];
            vertices.push(Vertex::new(
                normal.map(|c| c * radius),
                normal,
                [u, v],
            ));
        }
    }

    let mut indices = Vec::with_capacity(index_count);
    for i in 0..slices {
        for j in 0..segments {
            let i0 = i * columns + j;
            let i1 = i0 + 1;
            let i2 = i0 + columns;
            let i3 = i2 + 1;
            indices.extend_from_slice(&[i0, i1, i2, i1, i3, i2]);
        }
    }

    Ok(MeshData::triangles(vertices, indices))
}

#[cfg(test)]
mod tests {
    use glam::Vec3;
    use proptest::prelude::*;

    use super::*;
    use crate::mesh::test_util::all_triangles_face_outward;

    #[test]
    fn triangle_count_matches_tessellation() {
        let mesh = sphere(1.0, 32, 32).unwrap();
        assert_eq!(mesh.triangle_count(), 32 * 32 * 2);
        assert_eq!(mesh.vertices.len(), 33 * 33);
        assert!(mesh.indices.iter().all(|&i| (i as usize) < mesh.vertices.len()));
    }

    #[test]
    fn vertices_lie_on_the_radius() {
        let mesh = sphere(4.0, 64, 64).unwrap();
        for v in &mesh.vertices {
            let p = Vec3::from(v.position);
            assert!((p.length() - 4.0).abs() < 1e-4);
            let n = Vec3::from(v.normal);
            assert!((n.length() - 1.0).abs() < 1e-5);
            assert!(n.dot(p) > 0.0);
        }
    }

    #[test]
    fn seam_column_repeats_first_column() {
        let mesh = sphere(2.0, 8, 4).unwrap();
        let columns = 9;
        for row in 0..=4 {
            let first = mesh.vertices[row * columns];
            let last = mesh.vertices[row * columns + 8];
            assert!(Vec3::from(first.position)
                .abs_diff_eq(Vec3::from(last.position), 1e-5));
            assert_eq!(first.tex_coords[0], 0.0);
            assert_eq!(last.tex_coords[0], 1.0);
        }
    }

    #[test]
    fn triangles_wind_counter_clockwise_from_outside() {
        let mesh = sphere(1.0, 12, 8).unwrap();
        assert!(all_triangles_face_outward(&mesh));
    }

    #[test]
    fn deterministic() {
        assert_eq!(sphere(0.8, 32, 32).unwrap(), sphere(0.8, 32, 32).unwrap());
    }

    #[test]
    fn rejects_degenerate_parameters() {
        for (r, seg, sl) in [
            (1.0, 2, 8),
            (1.0, 8, 1),
            (0.0, 8, 8),
            (-1.0, 8, 8),
            (f32::NAN, 8, 8),
            (f32::INFINITY, 8, 8),
        ] {
            assert!(matches!(
                sphere(r, seg, sl),
                Err(ViewerError::InvalidParameter { shape: "sphere", .. })
            ));
        }
    }

    #[test]
    fn rejects_tessellations_beyond_u32_indices() {
        // 65536 * 65536 vertices is one past the index space.
        assert!(matches!(
            sphere(1.0, 65_535, 65_535),
            Err(ViewerError::InvalidParameter { shape: "sphere", .. })
        ));
        assert!(sphere(1.0, u32::MAX, u32::MAX).is_err());
    }

    proptest! {
        #[test]
        fn any_valid_sphere_is_closed_and_on_radius(
            radius in 0.1f32..100.0,
            segments in 3u32..64,
            slices in 2u32..64,
        ) {
            let mesh = sphere(radius, segments, slices).unwrap();
            prop_assert_eq!(mesh.triangle_count(), (segments * slices * 2) as usize);
            prop_assert_eq!(
                mesh.vertices.len(),
                ((segments + 1) * (slices + 1)) as usize
            );
            for v in &mesh.vertices {
                let distance = Vec3::from(v.position).length();
                prop_assert!((distance - radius).abs() <= radius * 1e-5);
            }
            prop_assert_eq!(&mesh, &sphere(radius, segments, slices).unwrap());
        }
    }
}
