//! # Scene Assembly
//!
//! CPU-side organization of generated geometry: named nodes with transforms,
//! the wgpu binding of each vertex attribute used by the upload step, and the
//! configuration of the room demo.
//!
//! ## Key Components
//!
//! - [`Scene`] - Ordered collection of nodes
//! - [`SceneNode`] - Generated mesh plus its model transform
//! - [`RoomConfig`] - Parameters of the interior-mapping wall
//! - [`VertexAttribute`] - Attribute streams, with their wgpu buffer layouts in [`vertex`]
//!
//! ## Usage
//!
//! ```rust
//! use parametric_shapes::gfx::scene::RoomConfig;
//!
//! let scene = RoomConfig::default().build_scene();
//! assert_eq!(scene.nodes().len(), 1);
//! ```

pub mod node;
pub mod room;
pub mod vertex;

// Re-export main types
pub use node::SceneNode;
pub use room::RoomConfig;
pub use vertex::VertexAttribute;

/// Ordered collection of scene nodes
#[derive(Debug, Clone, Default)]
pub struct Scene {
    nodes: Vec<SceneNode>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_node(&mut self, node: SceneNode) {
        self.nodes.push(node);
    }

    pub fn nodes(&self) -> &[SceneNode] {
        &self.nodes
    }

    /// First node with the given name
    pub fn node(&self, name: &str) -> Option<&SceneNode> {
        self.nodes.iter().find(|n| n.name == name)
    }

    /// Total vertices across all nodes
    pub fn vertex_count(&self) -> usize {
        self.nodes.iter().map(|n| n.mesh().vertex_count()).sum()
    }
}
