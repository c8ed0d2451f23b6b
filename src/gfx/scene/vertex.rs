//! # Vertex Attribute Bindings
//!
//! How each [`VertexAttribute`] stream is bound for wgpu rendering.
//!
//! Attributes are not interleaved. Each one lives in its own contiguous region
//! of the mesh's vertex buffer (see [`AttributeLayout`]) and is bound to its
//! own vertex buffer slot, with the slot number equal to the shader location.
//!
//! [`AttributeLayout`]: crate::gfx::geometry::AttributeLayout

pub use crate::gfx::geometry::VertexAttribute;

static POSITION_ATTRIBUTES: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![0 => Float32x3];
static NORMAL_ATTRIBUTES: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![1 => Float32x3];
static TEXCOORD_ATTRIBUTES: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![2 => Float32x3];
static TANGENT_ATTRIBUTES: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![3 => Float32x3];
static BINORMAL_ATTRIBUTES: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![4 => Float32x3];

/// wgpu vertex buffer layouts
///
/// # Examples
///
/// ```no_run
/// use parametric_shapes::gfx::scene::vertex::VertexAttribute;
///
/// let layouts = VertexAttribute::buffer_layouts();
/// // Use layouts in render pipeline creation
/// ```
impl VertexAttribute {
    /// Returns the vertex buffer layout for this attribute's stream.
    ///
    /// Each layout describes a single tightly packed `Float32x3` attribute at
    /// [`shader_location`](Self::shader_location).
    pub fn buffer_layout(self) -> wgpu::VertexBufferLayout<'static> {
        let attributes: &'static [wgpu::VertexAttribute] = match self {
            VertexAttribute::Position => &POSITION_ATTRIBUTES,
            VertexAttribute::Normal => &NORMAL_ATTRIBUTES,
            VertexAttribute::TexCoord => &TEXCOORD_ATTRIBUTES,
            VertexAttribute::Tangent => &TANGENT_ATTRIBUTES,
            VertexAttribute::Binormal => &BINORMAL_ATTRIBUTES,
        };

        wgpu::VertexBufferLayout {
            array_stride: self.element_size() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes,
        }
    }

    /// Layouts for all five streams, indexed by vertex buffer slot.
    pub fn buffer_layouts() -> [wgpu::VertexBufferLayout<'static>; Self::COUNT] {
        Self::ALL.map(Self::buffer_layout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffer_layouts_match_locations() {
        for (slot, layout) in VertexAttribute::buffer_layouts().iter().enumerate() {
            assert_eq!(layout.array_stride, 12);
            assert_eq!(layout.attributes.len(), 1);
            assert_eq!(layout.attributes[0].shader_location, slot as u32);
            assert_eq!(layout.attributes[0].offset, 0);
            assert_eq!(layout.attributes[0].format, wgpu::VertexFormat::Float32x3);
        }
    }

    #[test]
    fn test_buffer_layout_uses_attribute_location() {
        for attribute in VertexAttribute::ALL {
            let layout = attribute.buffer_layout();
            assert_eq!(
                layout.attributes[0].shader_location,
                attribute.shader_location()
            );
        }
    }
}
