//! GPU buffer that grows when data exceeds its capacity.

use wgpu::util::DeviceExt;

/// A GPU buffer that reallocates on overflow.
///
/// Grows to twice the needed size, never shrinks.
pub struct DynamicBuffer {
    buffer: wgpu::Buffer,
    capacity: usize, // bytes
    len: usize,      // bytes
    usage: wgpu::BufferUsages,
    label: String,
}

impl DynamicBuffer {
    /// Empty buffer with at least `initial_capacity` bytes.
    pub fn new(
        device: &wgpu::Device,
        label: &str,
        initial_capacity: usize,
        usage: wgpu::BufferUsages,
    ) -> Self {
        let capacity = initial_capacity.max(64);
        let buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some(label),
            size: capacity as u64,
            usage: usage | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        Self {
            buffer,
            capacity,
            len: 0,
            usage,
            label: label.to_owned(),
        }
    }

    /// Buffer holding `data`.
    pub fn new_with_data<T: bytemuck::Pod>(
        device: &wgpu::Device,
        label: &str,
        data: &[T],
        usage: wgpu::BufferUsages,
    ) -> Self {
        let bytes: &[u8] = bytemuck::cast_slice(data);
        let buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(label),
            contents: bytes,
            usage: usage | wgpu::BufferUsages::COPY_DST,
        });
        Self {
            buffer,
            capacity: bytes.len(),
            len: bytes.len(),
            usage,
            label: label.to_owned(),
        }
    }

    /// Replace the contents with `data`, reallocating if it does not fit.
    ///
    /// Returns `true` if the buffer was reallocated.
    pub fn write<T: bytemuck::Pod>(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        data: &[T],
    ) -> bool {
        let bytes: &[u8] = bytemuck::cast_slice(data);
        let needed = bytes.len();

        let reallocated = needed > self.capacity;
        if reallocated {
            let capacity = (needed * 2).max(self.capacity + 1024);
            log::debug!("growing {} to {capacity} bytes", self.label);
            self.buffer = device.create_buffer(&wgpu::BufferDescriptor {
                label: Some(&self.label),
                size: capacity as u64,
                usage: self.usage | wgpu::BufferUsages::COPY_DST,
                mapped_at_creation: false,
            });
            self.capacity = capacity;
        }

        if needed > 0 {
            queue.write_buffer(&self.buffer, 0, bytes);
        }
        self.len = needed;
        reallocated
    }

    /// Underlying buffer.
    pub fn buffer(&self) -> &wgpu::Buffer {
        &self.buffer
    }

    /// Bytes currently written.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether nothing has been written.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}
