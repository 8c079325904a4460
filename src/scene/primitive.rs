use crate::error::ViewerError;
use crate::mesh::{self, MeshData};

/// Shape parameters of a primitive solid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    /// UV sphere.
    Sphere {
        /// Radius.
        radius: f32,
        /// Longitude divisions.
        segments: u32,
        /// Latitude bands.
        slices: u32,
    },
    /// Tube along Y, optionally capped.
    Cylinder {
        /// Radius.
        radius: f32,
        /// Length along Y.
        height: f32,
        /// Divisions around the axis.
        segments: u32,
        /// Close both ends with disks.
        caps: bool,
    },
    /// Cone along Y with its apex up.
    Cone {
        /// Base radius.
        radius: f32,
        /// Length along Y.
        height: f32,
        /// Divisions around the axis.
        slices: u32,
    },
    /// ±1 cube.
    Cube,
    /// Regular tetrahedron.
    Tetrahedron,
    /// Octahedron on the unit axes.
    Octahedron,
    /// ±1 quad in the XY plane.
    Quad,
}

impl Shape {
    /// Tessellate the shape.
    ///
    /// # Errors
    ///
    /// [`ViewerError::InvalidParameter`] for degenerate parameters.
    pub fn mesh(&self) -> Result<MeshData, ViewerError> {
        match *self {
            Self::Sphere {
                radius,
                segments,
                slices,
            } => mesh::sphere(radius, segments, slices),
            Self::Cylinder {
                radius,
                height,
                segments,
                caps: false,
            } => mesh::cylinder(radius, height, segments),
            Self::Cylinder {
                radius,
                height,
                segments,
                caps: true,
            } => mesh::cylinder_with_caps(radius, height, segments),
            Self::Cone {
                radius,
                height,
                slices,
            } => mesh::cone(radius, height, slices),
            Self::Cube => Ok(mesh::cube()),
            Self::Tetrahedron => Ok(mesh::tetrahedron()),
            Self::Octahedron => Ok(mesh::octahedron()),
            Self::Quad => Ok(mesh::quad()),
        }
    }

    /// Extent along local Y.
    #[must_use]
    pub fn height(&self) -> f32 {
        match *self {
            Self::Sphere { radius, .. } => radius * 2.0,
            Self::Cylinder { height, .. } | Self::Cone { height, .. } => height,
            Self::Cube | Self::Tetrahedron | Self::Octahedron | Self::Quad => 2.0,
        }
    }
}

/// A validated shape together with its tessellation.
///
/// Construction fails on degenerate parameters, so every `Primitive` in
/// existence has a valid mesh.
#[derive(Debug, Clone, PartialEq)]
pub struct Primitive {
    shape: Shape,
    mesh: MeshData,
}

impl Primitive {
    /// Validate and tessellate `shape`.
    ///
    /// # Errors
    ///
    /// [`ViewerError::InvalidParameter`] for degenerate parameters.
    pub fn new(shape: Shape) -> Result<Self, ViewerError> {
        let mesh = shape.mesh()?;
        Ok(Self { shape, mesh })
    }

    /// UV sphere primitive.
    ///
    /// # Errors
    ///
    /// See [`mesh::sphere`].
    pub fn sphere(radius: f32, segments: u32, slices: u32) -> Result<Self, ViewerError> {
        Self::new(Shape::Sphere {
            radius,
            segments,
            slices,
        })
    }

    /// Open cylinder primitive.
    ///
    /// # Errors
    ///
    /// See [`mesh::cylinder`].
    pub fn cylinder(radius: f32, height: f32, segments: u32) -> Result<Self, ViewerError> {
        Self::new(Shape::Cylinder {
            radius,
            height,
            segments,
            caps: false,
        })
    }

    /// Shape parameters.
    #[must_use]
    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    /// Tessellated mesh.
    #[must_use]
    pub fn mesh(&self) -> &MeshData {
        &self.mesh
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_parameters_fail_at_construction() {
        assert!(matches!(
            Primitive::sphere(1.0, 2, 8),
            Err(ViewerError::InvalidParameter { .. })
        ));
        assert!(Primitive::cylinder(0.0, 1.0, 8).is_err());
        assert!(Primitive::new(Shape::Cone {
            radius: 1.0,
            height: 1.0,
            slices: 1
        })
        .is_err());
    }

    #[test]
    fn every_shape_tessellates() {
        let shapes = [
            Shape::Sphere {
                radius: 1.0,
                segments: 8,
                slices: 4,
            },
            Shape::Cylinder {
                radius: 1.0,
                height: 2.0,
                segments: 8,
                caps: true,
            },
            Shape::Cone {
                radius: 1.0,
                height: 2.0,
                slices: 8,
            },
            Shape::Cube,
            Shape::Tetrahedron,
            Shape::Octahedron,
            Shape::Quad,
        ];
        for shape in shapes {
            let p = Primitive::new(shape).unwrap();
            assert!(p.mesh().triangle_count() > 0, "{shape:?}");
        }
    }

    #[test]
    fn cylinder_height_is_its_length() {
        let arm = Primitive::cylinder(0.25, 1.8, 32).unwrap();
        assert_eq!(arm.shape().height(), 1.8);
    }
}
