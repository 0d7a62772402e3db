//! Cell type metadata and the fixed local numbering of bricks.
//!
//! # Brick local numbering
//! Local nodes are numbered `1..=8` (stored 0-based as `0..8`): the bottom
//! face `1-2-3-4` runs counter-clockwise when seen from above, and the top
//! face `5-6-7-8` sits directly above it (`5` over `1`, `6` over `2`, ...).
//!
//! # Local faces
//! Faces are numbered `1..=6`. Corners are listed so that the right-hand
//! normal points out of the brick:
//!
//! | face | corners (1-based) | side        |
//! |------|-------------------|-------------|
//! | 1    | 1 4 3 2           | bottom      |
//! | 2    | 5 6 7 8           | top         |
//! | 3    | 1 2 6 5           | front (-y)  |
//! | 4    | 2 3 7 6           | right (+x)  |
//! | 5    | 3 4 8 7           | back (+y)   |
//! | 6    | 4 1 5 8           | left (-x)   |

use crate::mesh_error::MeshSkinError;

/// Cell types handled by mesh-skin.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum CellType {
    /// 2D tensor-product cell (quad facet).
    Quadrilateral,
    /// 3D tensor-product cell (brick).
    Hexahedron,
}

impl CellType {
    /// Returns the topological dimension of the cell.
    pub fn dimension(self) -> u8 {
        match self {
            CellType::Quadrilateral => 2,
            CellType::Hexahedron => 3,
        }
    }

    /// Number of corner nodes.
    pub fn node_count(self) -> usize {
        match self {
            CellType::Quadrilateral => 4,
            CellType::Hexahedron => 8,
        }
    }

    /// Number of (d-1)-dimensional faces.
    pub fn face_count(self) -> usize {
        match self {
            CellType::Quadrilateral => 4,
            CellType::Hexahedron => 6,
        }
    }
}

/// 0-based corner positions of each brick face, outward winding.
pub const HEX_FACES: [[usize; 4]; 6] = [
    [0, 3, 2, 1],
    [4, 5, 6, 7],
    [0, 1, 5, 4],
    [1, 2, 6, 5],
    [2, 3, 7, 6],
    [3, 0, 4, 7],
];

/// Edge neighbours of each brick corner, ordered so that the three edge
/// vectors form a right-handed frame in a valid brick.
pub const HEX_CORNER_NEIGHBOURS: [[usize; 3]; 8] = [
    [1, 3, 4],
    [2, 0, 5],
    [3, 1, 6],
    [0, 2, 7],
    [7, 5, 0],
    [4, 6, 1],
    [5, 7, 2],
    [6, 4, 3],
];

/// A brick face number in `1..=6`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LocalFace(u8);

impl LocalFace {
    /// Validates a 1-based face number.
    pub fn new(face: u8) -> Result<Self, MeshSkinError> {
        if (1..=6).contains(&face) {
            Ok(LocalFace(face))
        } else {
            Err(MeshSkinError::LocalFaceOutOfRange(face))
        }
    }

    /// The 1-based face number.
    #[inline]
    pub fn get(self) -> u8 {
        self.0
    }

    /// 0-based local corner positions of this face.
    #[inline]
    pub fn corners(self) -> [usize; 4] {
        HEX_FACES[usize::from(self.0 - 1)]
    }

    /// All six faces in local order.
    pub fn all() -> impl Iterator<Item = LocalFace> {
        (1..=6).map(LocalFace)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn brick_and_quad_metadata() {
        assert_eq!(CellType::Hexahedron.dimension(), 3);
        assert_eq!(CellType::Hexahedron.node_count(), 8);
        assert_eq!(CellType::Hexahedron.face_count(), 6);
        assert_eq!(CellType::Quadrilateral.dimension(), 2);
        assert_eq!(CellType::Quadrilateral.node_count(), 4);
    }

    #[test]
    fn local_face_range() {
        assert!(LocalFace::new(0).is_err());
        assert!(LocalFace::new(7).is_err());
        assert_eq!(LocalFace::new(6).map(LocalFace::get), Ok(6));
        assert_eq!(LocalFace::all().count(), 6);
    }

    #[test]
    fn corner_neighbours_are_brick_edges() {
        for (corner, neighbours) in HEX_CORNER_NEIGHBOURS.iter().enumerate() {
            for &n in neighbours {
                // Every edge lies on exactly two faces.
                let shared = HEX_FACES
                    .iter()
                    .filter(|f| f.contains(&corner) && f.contains(&n))
                    .count();
                assert_eq!(shared, 2, "corner {corner} -> {n} is not an edge");
            }
        }
    }

    #[test]
    fn every_corner_touches_three_faces() {
        let mut hits = [0usize; 8];
        for face in LocalFace::all() {
            for c in face.corners() {
                hits[c] += 1;
            }
        }
        assert_eq!(hits, [3; 8]);
    }
}
