use cgmath::{Deg, Matrix4, Point3, SquareMatrix, Transform, Vector3};

use crate::gfx::geometry::MeshData;

/// A named piece of generated geometry placed in the scene.
///
/// The node owns its CPU-side mesh; GPU buffers are created from it by the
/// upload step and live as long as the caller keeps them.
#[derive(Debug, Clone)]
pub struct SceneNode {
    pub name: String,
    mesh: MeshData,
    pub transform: Matrix4<f32>, // cgmath 4x4 transformation matrix
}

impl SceneNode {
    /// Create a new node with identity transformation
    pub fn new(name: impl Into<String>, mesh: MeshData) -> Self {
        Self {
            name: name.into(),
            mesh,
            transform: Matrix4::identity(),
        }
    }

    pub fn mesh(&self) -> &MeshData {
        &self.mesh
    }

    /// Apply rotation around X axis
    pub fn rotate_x(&mut self, angle: Deg<f32>) {
        self.transform = self.transform * Matrix4::from_angle_x(angle);
    }

    /// Column-major matrix data, ready to write into a uniform buffer.
    pub fn transform_data(&self) -> &[f32; 16] {
        self.transform.as_ref()
    }

    /// Axis-aligned bounds of the mesh after applying the node transform.
    pub fn world_bounds(&self) -> ([f32; 3], [f32; 3]) {
        let mut points = self
            .mesh
            .vertices()
            .iter()
            .map(|v| self.transform.transform_point(Point3::new(v[0], v[1], v[2])));

        let Some(first) = points.next() else {
            return ([0.0; 3], [0.0; 3]);
        };

        let (mut min, mut max) = (first, first);
        for p in points {
            min = Point3::new(min.x.min(p.x), min.y.min(p.y), min.z.min(p.z));
            max = Point3::new(max.x.max(p.x), max.y.max(p.y), max.z.max(p.z));
        }
        ([min.x, min.y, min.z], [max.x, max.y, max.z])
    }

    /// Transforms a local direction (normal, tangent) into world space.
    pub fn world_direction(&self, direction: [f32; 3]) -> Vector3<f32> {
        self.transform
            .transform_vector(Vector3::new(direction[0], direction[1], direction[2]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gfx::geometry::{generate_quad, generate_torus};

    #[test]
    fn test_identity_bounds_match_mesh() {
        let node = SceneNode::new("floor", generate_quad(4.0, 4.0, 1, 1));
        assert_eq!(node.world_bounds(), node.mesh().bounding_box());
    }

    #[test]
    fn test_translated_transform_moves_bounds() {
        let mut node = SceneNode::new("floor", generate_quad(3.0, 3.0, 1, 1));
        node.transform = Matrix4::from_translation(Vector3::new(1.0, 2.0, 3.0));
        let (min, max) = node.world_bounds();
        assert_eq!(min, [1.0, 2.0, 3.0]);
        assert_eq!(max, [3.0, 2.0, 5.0]);
    }

    #[test]
    fn test_empty_mesh_bounds() {
        let node = SceneNode::new("torus", generate_torus(1.0, 0.5, 4, 4));
        assert_eq!(node.world_bounds(), ([0.0; 3], [0.0; 3]));
    }

    #[test]
    fn test_rotate_x_composes() {
        let mut node = SceneNode::new("quad", generate_quad(1.0, 1.0, 0, 0));
        node.rotate_x(Deg(45.0));
        node.rotate_x(Deg(45.0));
        let up = node.world_direction([0.0, 1.0, 0.0]);
        // two 45 degree turns map +Y onto +Z
        assert!(up.y.abs() < 1e-6 && (up.z - 1.0).abs() < 1e-6);
        assert_eq!(node.transform_data()[15], 1.0);
    }
}
