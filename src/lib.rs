// src/lib.rs
//! Parametric Shapes
//!
//! Analytic mesh generation (quad grid, UV sphere, circle ring) with full
//! tangent-space frames for normal-mapped and parallax-mapped rendering,
//! plus the scene assembly and wgpu upload helpers used by the
//! interior-mapping room demo.

pub mod error;
pub mod gfx;
pub mod prelude;

// Re-export main types for convenience
pub use error::GeometryError;
pub use gfx::geometry::{
    generate_circle_ring, generate_quad, generate_sphere, generate_torus, MeshData,
};
