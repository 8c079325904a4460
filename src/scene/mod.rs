//! The viewer's scene: a fixed registry of primitive instances and the
//! hierarchical composer that places them.
//!
//! Objects are addressed by the closed [`ObjectId`] enum, so a lookup can
//! never miss. The registry is built once at startup; meshes are generated
//! there and stay immutable for the life of the viewer.

pub mod composer;
mod primitive;
mod transform_stack;

pub use composer::{compose, compose_with, DrawItem, DrawList};
pub use primitive::{Primitive, Shape};
pub use transform_stack::TransformStack;

use crate::error::ViewerError;

/// Every object the scene draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObjectId {
    /// Textured sky sphere around the whole scene.
    Universe,
    /// Textured planet.
    Earth,
    /// Textured star.
    Sun,
    /// Figure torso.
    Body,
    /// Figure head.
    Head,
    /// Shoulder joint, drawn twice.
    Shoulder,
    /// Upper limb, drawn twice.
    Arm,
    /// Lower limb, drawn twice.
    Leg,
}

impl ObjectId {
    /// All ids in registry order.
    pub const ALL: [Self; 8] = [
        Self::Universe,
        Self::Earth,
        Self::Sun,
        Self::Body,
        Self::Head,
        Self::Shoulder,
        Self::Arm,
        Self::Leg,
    ];

    /// Position in [`ALL`](Self::ALL).
    #[must_use]
    pub fn index(self) -> usize {
        self as usize
    }
}

/// Which configured image a textured object samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextureSlot {
    /// Star field.
    Sky,
    /// Earth surface.
    Earth,
    /// Sun surface.
    Sun,
}

/// Surface appearance of an object.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    /// Flat RGBA color. Textured objects fall back to it when their image
    /// could not be loaded.
    pub color: [f32; 4],
    /// Texture to sample, if any.
    pub texture: Option<TextureSlot>,
    /// Shade with the directional light; otherwise the surface is emissive.
    pub lit: bool,
}

const ORANGE: [f32; 4] = [1.0, 0.5, 0.0, 1.0];
const NIGHT: [f32; 4] = [0.02, 0.02, 0.06, 1.0];
const OCEAN: [f32; 4] = [0.15, 0.35, 0.8, 1.0];
const SUNLIGHT: [f32; 4] = [1.0, 0.85, 0.3, 1.0];

impl Material {
    /// Lit, untextured flat color.
    #[must_use]
    pub const fn flat(color: [f32; 4]) -> Self {
        Self {
            color,
            texture: None,
            lit: true,
        }
    }

    /// Lit and textured, with `fallback` used when the image is missing.
    #[must_use]
    pub const fn textured(slot: TextureSlot, fallback: [f32; 4]) -> Self {
        Self {
            color: fallback,
            texture: Some(slot),
            lit: true,
        }
    }

    /// Same material without lighting.
    #[must_use]
    pub const fn emissive(self) -> Self {
        Self { lit: false, ..self }
    }
}

/// One registry entry.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneObject {
    /// Geometry.
    pub primitive: Primitive,
    /// Appearance.
    pub material: Material,
}

/// Fixed registry holding one [`SceneObject`] per [`ObjectId`].
#[derive(Debug, Clone)]
pub struct SceneObjects {
    objects: Vec<SceneObject>,
}

impl SceneObjects {
    /// Build the standard scene: sky sphere, earth, sun, and the parts of
    /// the articulated figure.
    ///
    /// # Errors
    ///
    /// Propagates [`ViewerError::InvalidParameter`] from primitive
    /// construction.
    pub fn standard() -> Result<Self, ViewerError> {
        let objects = ObjectId::ALL
            .iter()
            .map(|&id| Self::standard_object(id))
            .collect::<Result<Vec<_>, _>>()?;
        log::debug!(
            "built {} scene objects ({} triangles)",
            objects.len(),
            objects
                .iter()
                .map(|o| o.primitive.mesh().triangle_count())
                .sum::<usize>()
        );
        Ok(Self { objects })
    }

    fn standard_object(id: ObjectId) -> Result<SceneObject, ViewerError> {
        let (primitive, material) = match id {
            ObjectId::Universe => (
                Primitive::sphere(100.0, 100, 100)?,
                Material::textured(TextureSlot::Sky, NIGHT).emissive(),
            ),
            ObjectId::Earth => (
                Primitive::sphere(4.0, 64, 64)?,
                Material::textured(TextureSlot::Earth, OCEAN),
            ),
            ObjectId::Sun => (
                Primitive::sphere(8.0, 64, 64)?,
                Material::textured(TextureSlot::Sun, SUNLIGHT).emissive(),
            ),
            ObjectId::Body => (Primitive::cylinder(0.7, 2.0, 32)?, Material::flat(ORANGE)),
            ObjectId::Head => (Primitive::sphere(0.8, 32, 32)?, Material::flat(ORANGE)),
            ObjectId::Shoulder => {
                (Primitive::sphere(0.3, 32, 32)?, Material::flat(ORANGE))
            }
            ObjectId::Arm => (Primitive::cylinder(0.25, 1.8, 32)?, Material::flat(ORANGE)),
            ObjectId::Leg => (Primitive::cylinder(0.3, 2.0, 32)?, Material::flat(ORANGE)),
        };
        Ok(SceneObject {
            primitive,
            material,
        })
    }

    /// Entry for `id`.
    #[must_use]
    pub fn get(&self, id: ObjectId) -> &SceneObject {
        &self.objects[id.index()]
    }

    /// Extent of `id` along its local Y axis.
    #[must_use]
    pub fn height(&self, id: ObjectId) -> f32 {
        self.get(id).primitive.shape().height()
    }

    /// Entries in [`ObjectId::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (ObjectId, &SceneObject)> {
        ObjectId::ALL.iter().copied().zip(self.objects.iter())
    }
}
