//! Turns a composed draw list into per-draw instance data and an ordered
//! list of batches. Pure CPU work, so the frame layout is testable without
//! a device.

use crate::options::DisplayOptions;
use crate::scene::{DrawList, ObjectId, SceneObjects, TextureSlot};

/// Per-draw data streamed to the vertex shader as instance attributes.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct InstanceRaw {
    /// Object → world matrix, column-major.
    pub model: [[f32; 4]; 4],
    /// Base color.
    pub color: [f32; 4],
    /// x = textured, y = lit (0.0 or 1.0).
    pub flags: [f32; 4],
}

impl InstanceRaw {
    fn new(model: glam::Mat4, color: [f32; 4], textured: bool, lit: bool) -> Self {
        Self {
            model: model.to_cols_array_2d(),
            color,
            flags: [f32::from(u8::from(textured)), f32::from(u8::from(lit)), 0.0, 0.0],
        }
    }

    /// Instance-rate vertex buffer layout (locations 3..=8).
    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        const ATTRIBUTES: [wgpu::VertexAttribute; 6] = wgpu::vertex_attr_array![
            3 => Float32x4, // model column 0
            4 => Float32x4,
            5 => Float32x4,
            6 => Float32x4,
            7 => Float32x4, // color
            8 => Float32x4, // flags
        ];
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Self>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &ATTRIBUTES,
        }
    }
}

/// Geometry a batch draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Geometry {
    /// A registry object.
    Object(ObjectId),
    /// The ground grid.
    Grid,
}

/// Pipeline a batch uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawStyle {
    /// Filled triangles.
    Solid,
    /// Line list (wireframe edges or grid lines).
    Lines,
}

/// One draw call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Batch {
    /// What to draw.
    pub geometry: Geometry,
    /// How to draw it.
    pub style: DrawStyle,
    /// Texture to bind, `None` for the white fallback.
    pub texture: Option<TextureSlot>,
    /// Index into [`FramePlan::instances`].
    pub instance: u32,
}

/// Everything the renderer submits for one frame.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FramePlan {
    /// Instance data, one entry per batch.
    pub instances: Vec<InstanceRaw>,
    /// Draw calls in submission order.
    pub batches: Vec<Batch>,
}

/// Which overlays a frame shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Overlays {
    /// Draw the ground grid.
    pub grid: bool,
    /// Draw objects as wireframe.
    pub wireframe: bool,
}

impl FramePlan {
    /// Plan a frame. `texture_loaded` reports which texture slots have an
    /// image; textured objects whose image is missing draw with their flat
    /// fallback color.
    #[must_use]
    pub fn build(
        draws: &DrawList,
        objects: &SceneObjects,
        display: &DisplayOptions,
        overlays: Overlays,
        texture_loaded: impl Fn(TextureSlot) -> bool,
    ) -> Self {
        let mut plan = Self::default();

        for item in draws {
            let material = objects.get(item.object).material;
            let geometry = Geometry::Object(item.object);
            if overlays.wireframe {
                plan.push(
                    geometry,
                    DrawStyle::Lines,
                    None,
                    InstanceRaw::new(item.model, rgba(display.wireframe_color), false, false),
                );
                continue;
            }

            let texture = material.texture.filter(|&slot| texture_loaded(slot));
            let color = if texture.is_some() {
                [1.0; 4]
            } else {
                material.color
            };
            plan.push(
                geometry,
                DrawStyle::Solid,
                texture,
                InstanceRaw::new(item.model, color, texture.is_some(), material.lit),
            );
        }

        if overlays.grid {
            plan.push(
                Geometry::Grid,
                DrawStyle::Lines,
                None,
                InstanceRaw::new(glam::Mat4::IDENTITY, rgba(display.grid_color), false, false),
            );
        }

        plan
    }

    fn push(
        &mut self,
        geometry: Geometry,
        style: DrawStyle,
        texture: Option<TextureSlot>,
        instance: InstanceRaw,
    ) {
        self.batches.push(Batch {
            geometry,
            style,
            texture,
            instance: self.instances.len() as u32,
        });
        self.instances.push(instance);
    }
}

fn rgba(rgb: [f32; 3]) -> [f32; 4] {
    [rgb[0], rgb[1], rgb[2], 1.0]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::Pose;
    use crate::scene::compose;

    fn plan(overlays: Overlays, loaded: bool) -> FramePlan {
        let objects = SceneObjects::standard().unwrap();
        let draws = compose(&objects, &Pose::REST);
        FramePlan::build(&draws, &objects, &DisplayOptions::default(), overlays, |_| loaded)
    }

    const PLAIN: Overlays = Overlays {
        grid: false,
        wireframe: false,
    };

    #[test]
    fn one_instance_per_batch() {
        let p = plan(PLAIN, true);
        assert_eq!(p.batches.len(), 11);
        assert_eq!(p.instances.len(), p.batches.len());
        for (i, b) in p.batches.iter().enumerate() {
            assert_eq!(b.instance as usize, i);
        }
    }

    #[test]
    fn textured_objects_sample_when_loaded() {
        let p = plan(PLAIN, true);
        let earth = p
            .batches
            .iter()
            .position(|b| b.geometry == Geometry::Object(ObjectId::Earth))
            .unwrap();
        assert_eq!(p.batches[earth].texture, Some(TextureSlot::Earth));
        assert_eq!(p.instances[earth].flags[0], 1.0);
        assert_eq!(p.instances[earth].color, [1.0; 4]);
    }

    #[test]
    fn missing_texture_falls_back_to_flat_color() {
        let objects = SceneObjects::standard().unwrap();
        let p = plan(PLAIN, false);
        let earth = p
            .batches
            .iter()
            .position(|b| b.geometry == Geometry::Object(ObjectId::Earth))
            .unwrap();
        assert_eq!(p.batches[earth].texture, None);
        assert_eq!(p.instances[earth].flags[0], 0.0);
        assert_eq!(
            p.instances[earth].color,
            objects.get(ObjectId::Earth).material.color
        );
    }

    #[test]
    fn wireframe_draws_unlit_red_lines() {
        let p = plan(
            Overlays {
                grid: false,
                wireframe: true,
            },
            true,
        );
        assert!(p.batches.iter().all(|b| b.style == DrawStyle::Lines));
        assert!(p.batches.iter().all(|b| b.texture.is_none()));
        assert!(p
            .instances
            .iter()
            .all(|i| i.color == [1.0, 0.0, 0.0, 1.0] && i.flags == [0.0; 4]));
    }

    #[test]
    fn grid_is_appended_last_in_magenta() {
        let p = plan(
            Overlays {
                grid: true,
                wireframe: false,
            },
            true,
        );
        let last = p.batches.last().unwrap();
        assert_eq!(last.geometry, Geometry::Grid);
        assert_eq!(last.style, DrawStyle::Lines);
        assert_eq!(p.instances[last.instance as usize].color, [1.0, 0.0, 1.0, 1.0]);
    }

    #[test]
    fn instance_is_96_bytes() {
        assert_eq!(std::mem::size_of::<InstanceRaw>(), 96);
    }
}
