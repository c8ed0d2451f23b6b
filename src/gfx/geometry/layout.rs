//! # Attribute Packing
//!
//! Packs the parallel attribute arrays of a [`MeshData`] into one contiguous
//! byte buffer, one region per attribute, so a mesh can be uploaded with a
//! single allocation. Regions follow the binding order
//! positions, normals, texture coordinates, tangents, binormals, and each
//! region starts where the previous one ends.

use super::{MeshData, VertexAttribute};

/// Byte range of one attribute inside the packed vertex buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttributeRegion {
    pub attribute: VertexAttribute,
    pub offset: u64,
    pub size: u64,
}

impl AttributeRegion {
    /// Exclusive end of the region.
    #[inline]
    pub fn end(&self) -> u64 {
        self.offset + self.size
    }
}

/// Offsets and sizes of every attribute region for a given vertex count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttributeLayout {
    regions: [AttributeRegion; VertexAttribute::COUNT],
    total_size: u64,
}

impl AttributeLayout {
    pub fn for_vertex_count(vertex_count: usize) -> Self {
        let mut offset = 0u64;
        let regions = VertexAttribute::ALL.map(|attribute| {
            let size = (vertex_count * attribute.element_size()) as u64;
            let region = AttributeRegion {
                attribute,
                offset,
                size,
            };
            offset += size;
            region
        });

        Self {
            regions,
            total_size: offset,
        }
    }

    /// Regions in binding order.
    pub fn regions(&self) -> &[AttributeRegion] {
        &self.regions
    }

    pub fn region(&self, attribute: VertexAttribute) -> AttributeRegion {
        self.regions[attribute as usize]
    }

    /// Size of the whole vertex buffer in bytes.
    pub fn total_size(&self) -> u64 {
        self.total_size
    }
}

/// CPU-side buffers ready for upload: packed vertex attributes plus indices.
#[derive(Debug, Clone, PartialEq)]
pub struct PackedMesh {
    pub layout: AttributeLayout,
    pub vertex_bytes: Vec<u8>,
    pub indices: Vec<u32>,
}

impl PackedMesh {
    pub fn pack(mesh: &MeshData) -> Self {
        let layout = AttributeLayout::for_vertex_count(mesh.vertex_count());
        let mut vertex_bytes = Vec::with_capacity(layout.total_size() as usize);

        for region in layout.regions() {
            let source = match region.attribute {
                VertexAttribute::Position => mesh.vertices(),
                VertexAttribute::Normal => mesh.normals(),
                VertexAttribute::TexCoord => mesh.texcoords(),
                VertexAttribute::Tangent => mesh.tangents(),
                VertexAttribute::Binormal => mesh.binormals(),
            };
            debug_assert_eq!(vertex_bytes.len() as u64, region.offset);
            vertex_bytes.extend_from_slice(bytemuck::cast_slice(source));
        }

        Self {
            layout,
            vertex_bytes,
            indices: mesh.flat_indices().to_vec(),
        }
    }

    /// Number of indices to draw.
    pub fn index_count(&self) -> u32 {
        self.indices.len() as u32
    }

    /// Bytes of one attribute region.
    pub fn region_bytes(&self, attribute: VertexAttribute) -> &[u8] {
        let region = self.layout.region(attribute);
        &self.vertex_bytes[region.offset as usize..region.end() as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gfx::geometry::{generate_quad, generate_sphere, generate_torus};

    #[test]
    fn test_layout_running_offsets() {
        let layout = AttributeLayout::for_vertex_count(4);
        let offsets: Vec<u64> = layout.regions().iter().map(|r| r.offset).collect();
        assert_eq!(offsets, vec![0, 48, 96, 144, 192]);
        assert!(layout.regions().iter().all(|r| r.size == 48));
        assert_eq!(layout.total_size(), 240);
        assert_eq!(layout.region(VertexAttribute::TexCoord).offset, 96);
    }

    #[test]
    fn test_pack_sizes_match_mesh() {
        let sphere = generate_sphere(1.0, 9, 5);
        let packed = PackedMesh::pack(&sphere);
        assert_eq!(packed.vertex_bytes.len(), 5 * sphere.attribute_byte_size());
        assert_eq!(packed.indices.len() * 4, sphere.index_byte_size());
        assert_eq!(packed.index_count() as usize, sphere.triangle_count() * 3);
    }

    #[test]
    fn test_pack_region_contents() {
        let quad = generate_quad(2.0, 2.0, 0, 0);
        let packed = PackedMesh::pack(&quad);

        let normal_bytes: &[u8] = bytemuck::cast_slice(quad.normals());
        assert_eq!(packed.region_bytes(VertexAttribute::Normal), normal_bytes);

        let binormal_bytes: &[u8] = bytemuck::cast_slice(quad.binormals());
        assert_eq!(packed.region_bytes(VertexAttribute::Binormal), binormal_bytes);

        assert_eq!(packed.indices, quad.flat_indices());
    }

    #[test]
    fn test_pack_empty_mesh() {
        let packed = PackedMesh::pack(&generate_torus(1.0, 0.25, 8, 8));
        assert!(packed.vertex_bytes.is_empty());
        assert!(packed.indices.is_empty());
        assert_eq!(packed.layout.total_size(), 0);
    }
}
