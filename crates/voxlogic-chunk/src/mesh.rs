#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Primitive {
    #[default]
    Triangles,
}

/// Renderer-agnostic triangle buffer: parallel flat position/normal/color arrays,
/// three floats per vertex each.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Mesh {
    pub primitive: Primitive,
    pub positions: Vec<f32>,
    pub normals: Vec<f32>,
    /// RGB in `[0, 1]`.
    pub colors: Vec<f32>,
    /// Always `None` for generated chunk and model meshes.
    pub indices: Option<Vec<u32>>,
    pub vertex_count: usize,
}

impl Mesh {
    /// Sentinel for grids with nothing to draw.
    pub const EMPTY: Mesh = Mesh {
        primitive: Primitive::Triangles,
        positions: Vec::new(),
        normals: Vec::new(),
        colors: Vec::new(),
        indices: None,
        vertex_count: 0,
    };

    /// Wraps non-indexed triangle buffers; empty input yields [`Mesh::EMPTY`].
    pub fn from_triangles(positions: Vec<f32>, normals: Vec<f32>, colors: Vec<f32>) -> Mesh {
        debug_assert_eq!(positions.len(), normals.len());
        debug_assert_eq!(positions.len(), colors.len());
        debug_assert_eq!(positions.len() % 9, 0);
        if positions.is_empty() {
            return Mesh::EMPTY;
        }
        let vertex_count = positions.len() / 3;
        Mesh {
            primitive: Primitive::Triangles,
            positions,
            normals,
            colors,
            indices: None,
            vertex_count,
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertex_count == 0
    }

    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.vertex_count / 3
    }

    /// Number of position floats, the unit used by chunk size budgets.
    #[inline]
    pub fn float_count(&self) -> usize {
        self.positions.len()
    }
}
