//! GPU resource management: device bring-up, buffers, textures and shared
//! pipeline boilerplate.

/// Growable GPU buffers.
pub mod dynamic_buffer;
/// Bind group layout entries and common pipeline state.
pub mod pipeline_helpers;
/// wgpu device, surface, and queue initialization.
pub mod render_context;
/// Depth attachment and image textures.
pub mod texture;
