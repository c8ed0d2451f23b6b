//! # Room Scene
//!
//! Assembly of the interior-mapping demo: a single wall quad onto which the
//! parallax/interior shader and its wall, floor, ceiling and window maps are
//! attached. The fake room behind the wall is produced entirely in the
//! shader, so the only geometry needed is the wall itself.

use cgmath::Deg;

use super::{Scene, SceneNode};
use crate::gfx::geometry::ShapeDescriptor;

pub const WALL_NODE: &str = "wall";

/// Parameters for the demo wall.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoomConfig {
    pub wall_width: f32,
    pub wall_height: f32,
    pub u_splits: u32,
    pub v_splits: u32,
    /// Rotation about X that stands the generated XZ quad upright
    pub wall_tilt: Deg<f32>,
}

impl Default for RoomConfig {
    fn default() -> Self {
        Self {
            wall_width: 10.0,
            wall_height: 10.0,
            u_splits: 0,
            v_splits: 0,
            wall_tilt: Deg(-90.0),
        }
    }
}

impl RoomConfig {
    pub fn wall_shape(&self) -> ShapeDescriptor {
        ShapeDescriptor::Quad {
            width: self.wall_width,
            height: self.wall_height,
            u_splits: self.u_splits,
            v_splits: self.v_splits,
        }
    }

    /// Builds the scene containing the tilted wall node.
    pub fn build_scene(&self) -> Scene {
        let mut wall = SceneNode::new(WALL_NODE, self.wall_shape().generate());
        wall.rotate_x(self.wall_tilt);

        log::debug!(
            "Room wall {}x{} tilted {:?}",
            self.wall_width,
            self.wall_height,
            self.wall_tilt
        );

        let mut scene = Scene::new();
        scene.add_node(wall);
        scene
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cgmath::InnerSpace;

    #[test]
    fn test_default_matches_demo_wall() {
        let config = RoomConfig::default();
        assert_eq!(
            config.wall_shape(),
            ShapeDescriptor::Quad {
                width: 10.0,
                height: 10.0,
                u_splits: 0,
                v_splits: 0
            }
        );
    }

    #[test]
    fn test_wall_stands_upright() {
        let scene = RoomConfig::default().build_scene();
        let wall = scene.node(WALL_NODE).expect("wall node");
        assert_eq!(wall.mesh().vertex_count(), 4);

        let (min, max) = wall.world_bounds();
        // generated in XZ, rotated into XY
        assert!((max[0] - 5.0).abs() < 1e-5);
        assert!((max[1] - 5.0).abs() < 1e-5);
        assert!(min[2].abs() < 1e-5 && max[2].abs() < 1e-5);

        let normal = wall.world_direction(wall.mesh().normals()[0]).normalize();
        assert!((normal.z + 1.0).abs() < 1e-5);
    }
}
