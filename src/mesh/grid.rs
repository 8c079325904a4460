use super::{MeshData, Topology, Vertex};

/// Largest grid [`grid`] will build; bigger requests are clamped to it.
pub const MAX_GRID_HALF_LINES: u32 = 10_000;

/// Square line grid on the y = 0 plane with unit spacing and
/// `half_lines` lines on each side of the origin, in both X and Z.
/// `half_lines` is clamped to [`MAX_GRID_HALF_LINES`].
#[must_use]
pub fn grid(half_lines: u32) -> MeshData {
    let n = half_lines.min(MAX_GRID_HALF_LINES) as i32;
    let extent = n as f32;
    let up = [0.0, 1.0, 0.0];

    let mut vertices = Vec::with_capacity(((2 * n + 1) * 4) as usize);
    for k in -n..=n {
        let k = k as f32;
        vertices.push(Vertex::new([k, 0.0, -extent], up, [0.0, 0.0]));
        vertices.push(Vertex::new([k, 0.0, extent], up, [0.0, 0.0]));
        vertices.push(Vertex::new([-extent, 0.0, k], up, [0.0, 0.0]));
        vertices.push(Vertex::new([extent, 0.0, k], up, [0.0, 0.0]));
    }
    let indices = (0..vertices.len() as u32).collect();

    MeshData {
        vertices,
        indices,
        topology: Topology::LineList,
    }
}
