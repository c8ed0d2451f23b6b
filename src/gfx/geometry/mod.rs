//! # Parametric Geometry Generation
//!
//! This module synthesizes vertex attribute buffers and triangle index buffers
//! for analytic surfaces, so the demo scene needs no external model files.
//!
//! ## Supported Surfaces
//!
//! - **Quad**: flat grid in the XZ plane with a constant tangent frame
//! - **Sphere**: UV sphere with an analytic tangent frame
//! - **Circle ring**: flat annulus in the XY plane
//! - **Torus**: not available yet, always returns an empty mesh
//!
//! Every vertex carries a full tangent-space frame (tangent, binormal, normal)
//! for normal and parallax mapping.
//!
//! ## Usage
//!
//! ```rust
//! use parametric_shapes::gfx::geometry::{generate_quad, generate_sphere, generate_circle_ring};
//!
//! // A 10x10 wall with no interior subdivisions
//! let wall = generate_quad(10.0, 10.0, 0, 0);
//! assert_eq!(wall.vertex_count(), 4);
//!
//! let sphere = generate_sphere(1.0, 16, 8);
//! let ring = generate_circle_ring(2.0, 0.5, 31, 1);
//! assert!(sphere.validate().is_ok() && ring.validate().is_ok());
//! ```

pub mod attribute;
pub mod grid;
pub mod layout;
pub mod primitives;

pub use attribute::VertexAttribute;
pub use grid::{GridResolution, Winding};
pub use layout::{AttributeLayout, AttributeRegion, PackedMesh};
pub use primitives::*;

use crate::error::GeometryError;

/// One sample of a parametric surface: position plus its tangent-space frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceSample {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub tangent: [f32; 3],
    pub binormal: [f32; 3],
    pub texcoord: [f32; 2],
}

/// Generated geometry ready for packing and GPU upload.
///
/// All per-vertex arrays are index-aligned. Texture coordinates are stored as
/// three components with `z = 0` so that every attribute region shares the
/// same element size. Once generated the value is never modified.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeshData {
    vertices: Vec<[f32; 3]>,
    normals: Vec<[f32; 3]>,
    tangents: Vec<[f32; 3]>,
    binormals: Vec<[f32; 3]>,
    texcoords: Vec<[f32; 3]>,
    /// Triangle list (counter-clockwise around the attached normal)
    indices: Vec<[u32; 3]>,
}

impl MeshData {
    /// Creates an empty mesh with room for the given number of vertices.
    pub(crate) fn with_capacity(vertex_count: usize, triangle_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_count),
            normals: Vec::with_capacity(vertex_count),
            tangents: Vec::with_capacity(vertex_count),
            binormals: Vec::with_capacity(vertex_count),
            texcoords: Vec::with_capacity(vertex_count),
            indices: Vec::with_capacity(triangle_count),
        }
    }

    pub(crate) fn push_sample(&mut self, sample: SurfaceSample) {
        self.vertices.push(sample.position);
        self.normals.push(sample.normal);
        self.tangents.push(sample.tangent);
        self.binormals.push(sample.binormal);
        self.texcoords.push([sample.texcoord[0], sample.texcoord[1], 0.0]);
    }

    pub(crate) fn set_indices(&mut self, indices: Vec<[u32; 3]>) {
        self.indices = indices;
    }

    #[inline]
    pub fn vertices(&self) -> &[[f32; 3]] {
        &self.vertices
    }

    #[inline]
    pub fn normals(&self) -> &[[f32; 3]] {
        &self.normals
    }

    #[inline]
    pub fn tangents(&self) -> &[[f32; 3]] {
        &self.tangents
    }

    #[inline]
    pub fn binormals(&self) -> &[[f32; 3]] {
        &self.binormals
    }

    #[inline]
    pub fn texcoords(&self) -> &[[f32; 3]] {
        &self.texcoords
    }

    #[inline]
    pub fn indices(&self) -> &[[u32; 3]] {
        &self.indices
    }

    /// Get the number of vertices in this mesh
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Get the number of triangles in this mesh
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.indices.len()
    }

    /// Returns true for the empty sentinel (no vertices and no triangles).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty() && self.indices.is_empty()
    }

    /// Byte size of a single attribute array: `vertex_count * 3 * sizeof(f32)`.
    pub fn attribute_byte_size(&self) -> usize {
        self.vertex_count() * std::mem::size_of::<[f32; 3]>()
    }

    /// Byte size of the index array: `triangle_count * 3 * sizeof(u32)`.
    pub fn index_byte_size(&self) -> usize {
        self.triangle_count() * std::mem::size_of::<[u32; 3]>()
    }

    /// Flattened `[i0, i1, i2, i0, i1, i2, ...]` index list.
    pub fn flat_indices(&self) -> &[u32] {
        bytemuck::cast_slice(&self.indices)
    }

    /// Checks that every attribute is index-aligned with the positions and
    /// that every triangle references an existing vertex.
    pub fn validate(&self) -> Result<(), GeometryError> {
        let expected = self.vertices.len();
        let attributes: [(&'static str, usize); 4] = [
            ("normals", self.normals.len()),
            ("tangents", self.tangents.len()),
            ("binormals", self.binormals.len()),
            ("texcoords", self.texcoords.len()),
        ];
        for (attribute, found) in attributes {
            if found != expected {
                return Err(GeometryError::MismatchedAttributes {
                    attribute,
                    expected,
                    found,
                });
            }
        }

        for (triangle, tri) in self.indices.iter().enumerate() {
            if let Some(&index) = tri.iter().find(|&&v| v as usize >= expected) {
                return Err(GeometryError::IndexOutOfRange {
                    triangle,
                    index,
                    vertex_count: expected,
                });
            }
        }

        Ok(())
    }

    /// Computes the axis-aligned bounding box of the positions.
    ///
    /// Returns `(min, max)`; both are the origin for an empty mesh.
    pub fn bounding_box(&self) -> ([f32; 3], [f32; 3]) {
        let Some(first) = self.vertices.first() else {
            return ([0.0; 3], [0.0; 3]);
        };

        let mut min = *first;
        let mut max = *first;
        for v in &self.vertices[1..] {
            for axis in 0..3 {
                min[axis] = min[axis].min(v[axis]);
                max[axis] = max[axis].max(v[axis]);
            }
        }
        (min, max)
    }
}

/// Declarative description of a surface and its tessellation.
///
/// Scene configuration is written in terms of descriptors; `generate` turns a
/// descriptor into mesh data.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ShapeDescriptor {
    Quad {
        width: f32,
        height: f32,
        u_splits: u32,
        v_splits: u32,
    },
    Sphere {
        radius: f32,
        longitude_splits: u32,
        latitude_splits: u32,
    },
    CircleRing {
        radius: f32,
        spread_length: f32,
        circle_splits: u32,
        spread_splits: u32,
    },
    Torus {
        major_radius: f32,
        minor_radius: f32,
        major_splits: u32,
        minor_splits: u32,
    },
}

impl ShapeDescriptor {
    /// Short label used in logs and tool output.
    pub fn name(&self) -> &'static str {
        match self {
            ShapeDescriptor::Quad { .. } => "quad",
            ShapeDescriptor::Sphere { .. } => "sphere",
            ShapeDescriptor::CircleRing { .. } => "circle_ring",
            ShapeDescriptor::Torus { .. } => "torus",
        }
    }

    pub fn generate(&self) -> MeshData {
        match *self {
            ShapeDescriptor::Quad {
                width,
                height,
                u_splits,
                v_splits,
            } => generate_quad(width, height, u_splits, v_splits),
            ShapeDescriptor::Sphere {
                radius,
                longitude_splits,
                latitude_splits,
            } => generate_sphere(radius, longitude_splits, latitude_splits),
            ShapeDescriptor::CircleRing {
                radius,
                spread_length,
                circle_splits,
                spread_splits,
            } => generate_circle_ring(radius, spread_length, circle_splits, spread_splits),
            ShapeDescriptor::Torus {
                major_radius,
                minor_radius,
                major_splits,
                minor_splits,
            } => generate_torus(major_radius, minor_radius, major_splits, minor_splits),
        }
    }
}
