//! Per-vertex attribute streams of a [`MeshData`](super::MeshData).

/// A per-vertex attribute stream.
///
/// The discriminant is the binding order, which is also the order of the
/// regions inside a packed vertex buffer.
#[repr(u32)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum VertexAttribute {
    Position = 0,
    Normal = 1,
    TexCoord = 2,
    Tangent = 3,
    Binormal = 4,
}

impl VertexAttribute {
    pub const COUNT: usize = 5;

    /// All attributes in binding order.
    pub const ALL: [VertexAttribute; Self::COUNT] = [
        VertexAttribute::Position,
        VertexAttribute::Normal,
        VertexAttribute::TexCoord,
        VertexAttribute::Tangent,
        VertexAttribute::Binormal,
    ];

    /// Shader location (and vertex buffer slot) of this attribute.
    #[inline]
    pub fn shader_location(self) -> u32 {
        self as u32
    }

    /// Size of one element; every attribute is three `f32`s.
    #[inline]
    pub fn element_size(self) -> usize {
        std::mem::size_of::<[f32; 3]>()
    }

    pub fn name(self) -> &'static str {
        match self {
            VertexAttribute::Position => "position",
            VertexAttribute::Normal => "normal",
            VertexAttribute::TexCoord => "texcoord",
            VertexAttribute::Tangent => "tangent",
            VertexAttribute::Binormal => "binormal",
        }
    }
}
