//! GPU upload and draw helpers
//!
//! Creates wgpu buffers from generated meshes and binds them for rendering.

pub mod upload;

// Re-export main types
pub use upload::{upload_scene, DrawGpuMesh, GpuMesh};
