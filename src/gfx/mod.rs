//! # Graphics Module
//!
//! Geometry generation and the pieces around it needed to put that geometry
//! on screen.
//!
//! ## Architecture Overview
//!
//! - **Geometry** ([`geometry`]) - Parametric surfaces with tangent frames, plus attribute packing
//! - **Scene** ([`scene`]) - Nodes, transforms, attribute bindings and the room demo setup
//! - **Rendering** ([`rendering`]) - wgpu buffer upload and indexed draws
//!
//! Geometry generation is pure CPU work with no GPU state; uploading is a
//! separate, explicit step.
//!
//! ## Usage
//!
//! ```no_run
//! use parametric_shapes::gfx::{geometry::generate_sphere, rendering::GpuMesh};
//!
//! let sphere = generate_sphere(1.0, 32, 16);
//! // let gpu_mesh = GpuMesh::upload(&device, &sphere, "sphere")?;
//! ```

pub mod geometry;
pub mod rendering;
pub mod scene;

// Re-export commonly used types
pub use geometry::{MeshData, ShapeDescriptor};
pub use rendering::GpuMesh;
pub use scene::{Scene, SceneNode};
