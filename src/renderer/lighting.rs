use wgpu::util::DeviceExt;

use crate::camera::CameraUniform;
use crate::gpu::pipeline_helpers;
use crate::options::LightingOptions;

/// Directional light.
///
/// WGSL layout:
///   direction: vec4<f32>  (offset 0, xyz towards the light)
///   params:    vec4<f32>  (offset 16, x = ambient, y = diffuse)
///   Total: 32 bytes
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct LightUniform {
    /// Direction towards the light (w unused).
    pub direction: [f32; 4],
    /// x = ambient, y = diffuse.
    pub params: [f32; 4],
}

impl LightUniform {
    /// Uniform for the configured light.
    #[must_use]
    pub fn from_options(options: &LightingOptions) -> Self {
        let [x, y, z] = options.direction;
        Self {
            direction: [x, y, z, 0.0],
            params: [options.ambient, options.diffuse, 0.0, 0.0],
        }
    }
}

/// Camera and light uniforms bound together at group 0.
pub(crate) struct FrameUniforms {
    camera_buffer: wgpu::Buffer,
    light_buffer: wgpu::Buffer,
    pub layout: wgpu::BindGroupLayout,
    pub bind_group: wgpu::BindGroup,
}

impl FrameUniforms {
    pub fn new(device: &wgpu::Device, lighting: &LightingOptions) -> Self {
        let camera_buffer =
            device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("Camera Buffer"),
                contents: bytemuck::cast_slice(&[CameraUniform::new()]),
                usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            });
        let light_buffer =
            device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("Light Buffer"),
                contents: bytemuck::cast_slice(&[LightUniform::from_options(lighting)]),
                usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            });

        let layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("Frame Bind Group Layout"),
            entries: &[
                pipeline_helpers::uniform_buffer(
                    0,
                    wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
                ),
                pipeline_helpers::uniform_buffer(1, wgpu::ShaderStages::FRAGMENT),
            ],
        });
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Frame Bind Group"),
            layout: &layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: camera_buffer.as_entire_binding(),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: light_buffer.as_entire_binding(),
                },
            ],
        });

        Self {
            camera_buffer,
            light_buffer,
            layout,
            bind_group,
        }
    }

    pub fn write_camera(&self, queue: &wgpu::Queue, uniform: &CameraUniform) {
        queue.write_buffer(&self.camera_buffer, 0, bytemuck::bytes_of(uniform));
    }

    pub fn write_light(&self, queue: &wgpu::Queue, lighting: &LightingOptions) {
        let uniform = LightUniform::from_options(lighting);
        queue.write_buffer(&self.light_buffer, 0, bytemuck::bytes_of(&uniform));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_light_points_up_and_towards_the_viewer() {
        let u = LightUniform::from_options(&LightingOptions::default());
        assert_eq!(u.direction, [0.0, 100.0, 100.0, 0.0]);
        assert_eq!(std::mem::size_of::<LightUniform>(), 32);
    }

    #[test]
    fn camera_uniform_layout_matches_shader() {
        // mat4 + mat4 + vec4
        assert_eq!(std::mem::size_of::<CameraUniform>(), 144);
    }
}
