//! # Parametric Grid
//!
//! Resolution bookkeeping and triangle emission shared by every surface that
//! is sampled over a rectangular 2D parameter domain.
//!
//! A grid has an *outer* axis (the slower-varying loop) and an *inner* axis
//! (the faster-varying loop). Vertices are stored row-major, so the vertex at
//! grid coordinates `(i, j)` lives at `inner_vertices * i + j`.

/// Number of edges produced by `splits` interior subdivisions.
#[inline]
pub fn edges_for_splits(splits: u32) -> usize {
    splits as usize + 1
}

/// Number of vertices produced by `splits` interior subdivisions.
#[inline]
pub fn vertices_for_splits(splits: u32) -> usize {
    splits as usize + 2
}

/// Orientation of the two triangles emitted for each grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Winding {
    /// `{(i,j), (i,j+1), (i+1,j+1)}` and `{(i,j), (i+1,j+1), (i+1,j)}`
    Forward,
    /// `{(i+1,j+1), (i,j+1), (i,j)}` and `{(i+1,j), (i+1,j+1), (i,j)}`
    Reverse,
}

/// Vertex and edge counts along both axes of a parameter grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridResolution {
    pub outer_vertices: usize,
    pub inner_vertices: usize,
}

impl GridResolution {
    /// Builds the resolution from the requested split counts per axis.
    pub fn from_splits(outer_splits: u32, inner_splits: u32) -> Self {
        Self {
            outer_vertices: vertices_for_splits(outer_splits),
            inner_vertices: vertices_for_splits(inner_splits),
        }
    }

    #[inline]
    pub fn outer_edges(&self) -> usize {
        self.outer_vertices - 1
    }

    #[inline]
    pub fn inner_edges(&self) -> usize {
        self.inner_vertices - 1
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.outer_vertices * self.inner_vertices
    }

    /// Two triangles per cell.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        2 * self.outer_edges() * self.inner_edges()
    }

    /// Row-major vertex index of grid coordinates `(i, j)`.
    #[inline]
    pub fn index(&self, i: usize, j: usize) -> u32 {
        (self.inner_vertices * i + j) as u32
    }

    /// Emits the triangle list connecting every cell of the grid.
    pub fn triangulate(&self, winding: Winding) -> Vec<[u32; 3]> {
        let mut triangles = Vec::with_capacity(self.triangle_count());

        for i in 0..self.outer_edges() {
            for j in 0..self.inner_edges() {
                let v00 = self.index(i, j);
                let v01 = self.index(i, j + 1);
                let v10 = self.index(i + 1, j);
                let v11 = self.index(i + 1, j + 1);

                match winding {
                    Winding::Forward => {
                        triangles.push([v00, v01, v11]);
                        triangles.push([v00, v11, v10]);
                    }
                    Winding::Reverse => {
                        triangles.push([v11, v01, v00]);
                        triangles.push([v10, v11, v00]);
                    }
                }
            }
        }

        triangles
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_from_splits() {
        let grid = GridResolution::from_splits(0, 3);
        assert_eq!(grid.outer_vertices, 2);
        assert_eq!(grid.inner_vertices, 5);
        assert_eq!(grid.outer_edges(), 1);
        assert_eq!(grid.inner_edges(), 4);
        assert_eq!(grid.vertex_count(), 10);
        assert_eq!(grid.triangle_count(), 8);
    }

    #[test]
    fn test_row_major_index() {
        let grid = GridResolution::from_splits(2, 1);
        assert_eq!(grid.index(0, 0), 0);
        assert_eq!(grid.index(0, 2), 2);
        assert_eq!(grid.index(1, 0), 3);
        assert_eq!(grid.index(3, 2), 11);
    }

    #[test]
    fn test_single_cell_forward() {
        let grid = GridResolution::from_splits(0, 0);
        assert_eq!(grid.triangulate(Winding::Forward), vec![[0, 1, 3], [0, 3, 2]]);
    }

    #[test]
    fn test_single_cell_reverse() {
        let grid = GridResolution::from_splits(0, 0);
        assert_eq!(grid.triangulate(Winding::Reverse), vec![[3, 1, 0], [2, 3, 0]]);
    }

    #[test]
    fn test_reverse_flips_each_triangle() {
        let grid = GridResolution::from_splits(2, 3);
        let forward = grid.triangulate(Winding::Forward);
        let reverse = grid.triangulate(Winding::Reverse);
        assert_eq!(forward.len(), reverse.len());
        for (f, r) in forward.iter().zip(&reverse) {
            assert_eq!([f[2], f[1], f[0]], *r);
        }
    }

    #[test]
    fn test_all_indices_in_range() {
        let grid = GridResolution::from_splits(5, 7);
        let count = grid.vertex_count() as u32;
        for tri in grid.triangulate(Winding::Forward) {
            assert!(tri.iter().all(|&v| v < count));
        }
    }
}
