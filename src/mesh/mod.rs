//! Procedural mesh generation for the primitive solids.
//!
//! Every generator is a pure function of its parameters: it validates them,
//! then emits a [`MeshData`] holding interleaved position/normal/texcoord
//! vertices, a `u32` index list, and the primitive topology the indices are
//! meant for. Nothing here touches the GPU; the renderer uploads the result
//! once at setup.

mod cone;
mod cylinder;
mod grid;
mod polyhedron;
mod sphere;

use std::collections::HashSet;

pub use cone::cone;
pub use cylinder::{cylinder, cylinder_with_caps};
pub use grid::{grid, MAX_GRID_HALF_LINES};
pub use polyhedron::{cube, octahedron, quad, tetrahedron};
pub use sphere::sphere;

use crate::error::ViewerError;

/// Vertex layout shared by every generated mesh.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    /// Object-space position.
    pub position: [f32; 3],
    /// Unit surface normal (zero for line geometry).
    pub normal: [f32; 3],
    /// Texture coordinate in `[0, 1]²`.
    pub tex_coords: [f32; 2],
}

impl Vertex {
    pub(crate) const fn new(
        position: [f32; 3],
        normal: [f32; 3],
        tex_coords: [f32; 2],
    ) -> Self {
        Self {
            position,
            normal,
            tex_coords,
        }
    }
}

/// Get the vertex buffer layout for [`Vertex`].
#[must_use]
pub fn vertex_buffer_layout() -> wgpu::VertexBufferLayout<'static> {
    wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &[
            wgpu::VertexAttribute {
                format: wgpu::VertexFormat::Float32x3,
                offset: 0,
                shader_location: 0, // position
            },
            wgpu::VertexAttribute {
                format: wgpu::VertexFormat::Float32x3,
                offset: 12,
                shader_location: 1, // normal
            },
            wgpu::VertexAttribute {
                format: wgpu::VertexFormat::Float32x2,
                offset: 24,
                shader_location: 2, // tex_coords
            },
        ],
    }
}

/// How the index list is assembled into primitives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Topology {
    /// Every three indices form a counter-clockwise triangle.
    TriangleList,
    /// Every two indices form a line segment.
    LineList,
}

impl Topology {
    /// Matching wgpu topology.
    #[must_use]
    pub fn to_wgpu(self) -> wgpu::PrimitiveTopology {
        match self {
            Self::TriangleList => wgpu::PrimitiveTopology::TriangleList,
            Self::LineList => wgpu::PrimitiveTopology::LineList,
        }
    }
}

/// CPU-side mesh ready for upload.
#[derive(Debug, Clone, PartialEq)]
pub struct MeshData {
    /// Vertex stream.
    pub vertices: Vec<Vertex>,
    /// Indices into `vertices`.
    pub indices: Vec<u32>,
    /// Assembly of `indices`.
    pub topology: Topology,
}

impl MeshData {
    pub(crate) fn triangles(vertices: Vec<Vertex>, indices: Vec<u32>) -> Self {
        Self {
            vertices,
            indices,
            topology: Topology::TriangleList,
        }
    }

    /// Number of triangles (0 for line meshes).
    #[must_use]
    pub fn triangle_count(&self) -> usize {
        match self.topology {
            Topology::TriangleList => self.indices.len() / 3,
            Topology::LineList => 0,
        }
    }

    /// Line-list index buffer tracing every unique triangle edge once, in
    /// the order the edges are first met. Line meshes return their own
    /// indices.
    #[must_use]
    pub fn wireframe_indices(&self) -> Vec<u32> {
        if self.topology == Topology::LineList {
            return self.indices.clone();
        }

        let mut seen = HashSet::new();
        let mut lines = Vec::with_capacity(self.indices.len() * 2);
        for tri in self.indices.chunks_exact(3) {
            for (a, b) in [(tri[0], tri[1]), (tri[1], tri[2]), (tri[2], tri[0])] {
                if seen.insert((a.min(b), a.max(b))) {
                    lines.push(a);
                    lines.push(b);
                }
            }
        }
        lines
    }

    /// The same vertices drawn as a line list of unique edges.
    #[must_use]
    pub fn wireframe(&self) -> Self {
        Self {
            vertices: self.vertices.clone(),
            indices: self.wireframe_indices(),
            topology: Topology::LineList,
        }
    }
}

/// Reject non-positive or non-finite lengths.
pub(crate) fn check_length(
    shape: &'static str,
    name: &str,
    value: f32,
) -> Result<(), ViewerError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ViewerError::invalid(
            shape,
            format!("{name} must be positive and finite, got {value}"),
        ))
    }
}

/// Reject tessellation counts below `min`.
pub(crate) fn check_count(
    shape: &'static str,
    name: &str,
    value: u32,
    min: u32,
) -> Result<(), ViewerError> {
    if value >= min {
        Ok(())
    } else {
        Err(ViewerError::invalid(
            shape,
            format!("{name} must be at least {min}, got {value}"),
        ))
    }
}

/// Validate the vertex and index counts of a tessellation before anything
/// is allocated, returning them as buffer capacities. Both must fit the
/// `u32` index space; `None` means the count already overflowed.
pub(crate) fn check_size(
    shape: &'static str,
    vertices: Option<u64>,
    indices: Option<u64>,
) -> Result<(usize, usize), ViewerError> {
    let limit = u64::from(u32::MAX);
    match (vertices, indices) {
        (Some(v), Some(i)) if v <= limit && i <= limit => Ok((v as usize, i as usize)),
        _ => Err(ViewerError::invalid(
            shape,
            format!("tessellation exceeds {limit} vertices or indices"),
        )),
    }
}
