#![allow(dead_code)]
use mesh_skin::prelude::*;

/// Corners of an axis-aligned cube with edge `edge`, in brick order.
pub fn cube_corners(offset: [f64; 3], edge: f64) -> Vec<[f64; 3]> {
    let mut out = Vec::with_capacity(8);
    for z in [0.0, edge] {
        for (x, y) in [(0.0, 0.0), (edge, 0.0), (edge, edge), (0.0, edge)] {
            out.push([x + offset[0], y + offset[1], z + offset[2]]);
        }
    }
    out
}

/// Mesh from raw positions and 0-based brick connectivity.
pub fn mesh_from(positions: &[[f64; 3]], bricks: &[[usize; 8]]) -> Mesh {
    let nodes = positions.iter().copied().map(Node::new).collect();
    let elements = bricks.iter().copied().map(Brick::from_indices).collect();
    Mesh::from_parts(nodes, elements).unwrap()
}

/// Single unit cube with the reference corner order.
pub fn unit_cube() -> Mesh {
    mesh_from(&cube_corners([0.0; 3], 1.0), &[[0, 1, 2, 3, 4, 5, 6, 7]])
}

pub fn assert_close(got: f64, want: f64) {
    assert!((got - want).abs() < 1e-10, "got {got}, want {want}");
}

/// Assert vec is a permutation of another vec (order-agnostic).
pub fn assert_permutation<T: Ord + Copy + std::fmt::Debug>(got: &[T], want: &[T]) {
    let mut a = got.to_vec();
    a.sort_unstable();
    let mut b = want.to_vec();
    b.sort_unstable();
    assert_eq!(a, b, "not a permutation\n got={:?}\nwant={:?}", got, want);
}
