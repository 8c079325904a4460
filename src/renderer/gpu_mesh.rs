use crate::gpu::dynamic_buffer::DynamicBuffer;
use crate::mesh::{MeshData, Topology};

/// Index buffer plus its element count.
pub(crate) struct IndexRange {
    pub buffer: DynamicBuffer,
    pub count: u32,
}

impl IndexRange {
    fn new(device: &wgpu::Device, label: &str, indices: &[u32]) -> Self {
        Self {
            buffer: DynamicBuffer::new_with_data(
                device,
                label,
                indices,
                wgpu::BufferUsages::INDEX,
            ),
            count: indices.len() as u32,
        }
    }
}

/// A mesh uploaded once: shared vertices, the triangle indices (if any) and
/// the unique-edge line indices used for wireframe drawing.
pub(crate) struct GpuMesh {
    pub vertices: DynamicBuffer,
    pub triangles: Option<IndexRange>,
    pub lines: IndexRange,
}

impl GpuMesh {
    pub fn upload(device: &wgpu::Device, label: &str, mesh: &MeshData) -> Self {
        let vertices = DynamicBuffer::new_with_data(
            device,
            &format!("{label} Vertices"),
            &mesh.vertices,
            wgpu::BufferUsages::VERTEX,
        );
        let triangles = (mesh.topology == Topology::TriangleList).then(|| {
            IndexRange::new(device, &format!("{label} Triangles"), &mesh.indices)
        });
        let lines = IndexRange::new(
            device,
            &format!("{label} Lines"),
            &mesh.wireframe_indices(),
        );
        Self {
            vertices,
            triangles,
            lines,
        }
    }
}
