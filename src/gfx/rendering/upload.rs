//! GPU upload of generated meshes
//!
//! Turns a [`MeshData`] into one vertex buffer (all attribute regions packed
//! back to back) and one index buffer, and binds them for indexed draws.
//! Buffers are released when the [`GpuMesh`] is dropped.

use std::ops::Range;

use wgpu::util::DeviceExt;
use wgpu::Device;

use crate::error::GeometryError;
use crate::gfx::geometry::{AttributeLayout, MeshData, PackedMesh};
use crate::gfx::scene::{Scene, VertexAttribute};

pub struct GpuMesh {
    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    layout: AttributeLayout,
    index_count: u32,
}

impl GpuMesh {
    /// Validates, packs and uploads a mesh.
    ///
    /// Empty meshes (such as the torus placeholder) are rejected because
    /// there is nothing to draw.
    pub fn upload(device: &Device, mesh: &MeshData, label: &str) -> Result<Self, GeometryError> {
        if mesh.is_empty() {
            return Err(GeometryError::EmptyMesh);
        }
        mesh.validate()?;

        let packed = PackedMesh::pack(mesh);

        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(&format!("{} Vertex Buffer", label)),
            contents: &packed.vertex_bytes,
            usage: wgpu::BufferUsages::VERTEX,
        });

        let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(&format!("{} Index Buffer", label)),
            contents: bytemuck::cast_slice(&packed.indices),
            usage: wgpu::BufferUsages::INDEX,
        });

        log::info!(
            "Uploaded '{}': {} vertex bytes, {} indices",
            label,
            packed.layout.total_size(),
            packed.index_count()
        );

        Ok(Self {
            vertex_buffer,
            index_buffer,
            layout: packed.layout,
            index_count: packed.index_count(),
        })
    }

    pub fn layout(&self) -> &AttributeLayout {
        &self.layout
    }

    pub fn index_count(&self) -> u32 {
        self.index_count
    }
}

/// Uploads every node of a scene, skipping nodes whose mesh is empty.
pub fn upload_scene(device: &Device, scene: &Scene) -> Result<Vec<GpuMesh>, GeometryError> {
    let mut meshes = Vec::with_capacity(scene.nodes().len());
    for node in scene.nodes() {
        if node.mesh().is_empty() {
            log::warn!("Skipping upload of empty node '{}'", node.name);
            continue;
        }
        meshes.push(GpuMesh::upload(device, node.mesh(), &node.name)?);
    }
    Ok(meshes)
}

pub trait DrawGpuMesh<'a> {
    fn draw_gpu_mesh(&mut self, mesh: &'a GpuMesh);
    fn draw_gpu_mesh_instanced(&mut self, mesh: &'a GpuMesh, instances: Range<u32>);
}

impl<'a, 'b> DrawGpuMesh<'b> for wgpu::RenderPass<'a>
where
    'b: 'a,
{
    fn draw_gpu_mesh(&mut self, mesh: &'b GpuMesh) {
        self.draw_gpu_mesh_instanced(mesh, 0..1);
    }

    fn draw_gpu_mesh_instanced(&mut self, mesh: &'b GpuMesh, instances: Range<u32>) {
        // one slot per attribute region, slot == shader location
        for attribute in VertexAttribute::ALL {
            let region = mesh.layout.region(attribute);
            self.set_vertex_buffer(
                attribute.shader_location(),
                mesh.vertex_buffer.slice(region.offset..region.end()),
            );
        }
        self.set_index_buffer(mesh.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
        self.draw_indexed(0..mesh.index_count, 0, instances);
    }
}
