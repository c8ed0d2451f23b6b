//! # Prelude
//!
//! Commonly used types and functions in one import.
//!
//! ## Usage
//!
//! ```rust
//! use parametric_shapes::prelude::*;
//!
//! let wall = generate_quad(10.0, 10.0, 0, 0);
//! let ring = ShapeDescriptor::CircleRing {
//!     radius: 2.0,
//!     spread_length: 0.5,
//!     circle_splits: 31,
//!     spread_splits: 1,
//! }
//! .generate();
//!
//! assert_eq!(wall.triangle_count(), 2);
//! assert!(PackedMesh::pack(&ring).layout.total_size() > 0);
//! ```

// Re-export geometry generation
pub use crate::gfx::geometry::{
    generate_circle_ring, generate_quad, generate_sphere, generate_torus, AttributeLayout,
    MeshData, PackedMesh, ShapeDescriptor,
};

// Re-export scene assembly and upload
pub use crate::gfx::rendering::{DrawGpuMesh, GpuMesh};
pub use crate::gfx::scene::{RoomConfig, Scene, SceneNode, VertexAttribute};

pub use crate::error::GeometryError;

// Re-export common external dependencies
pub use cgmath::{Deg, Vector3};
