mod util;

use mesh_skin::algs::boundary::{classify_boundary_nodes, mark_boundary_with};
use mesh_skin::prelude::*;
use util::unit_cube;

#[test]
fn marking_twice_equals_marking_once() {
    let mut mesh = brick_grid(2, 1, 1, [0.0; 3], [2.0, 1.0, 1.0]).unwrap();
    let set = build_facets(mesh.elements(), mesh.nodes()).unwrap();
    mark_flagged_facets(set.facets(), mesh.nodes_mut()).unwrap();
    let once = mesh.clone();
    mark_flagged_facets(set.facets(), mesh.nodes_mut()).unwrap();
    assert_eq!(mesh, once);
}

#[test]
fn ungated_marking_reaches_interior_nodes() {
    let mut mesh = brick_grid(2, 2, 2, [0.0; 3], [1.0; 3]).unwrap();
    let centre = NodeId::new(13);
    let set = build_facets(mesh.elements(), mesh.nodes()).unwrap();

    mark_flagged_facets(set.facets(), mesh.nodes_mut()).unwrap();
    assert!(!mesh.node(centre).unwrap().is_boundary());

    for facet in set.facets() {
        mark_boundary(facet, mesh.nodes_mut()).unwrap();
    }
    assert!(mesh.node(centre).unwrap().is_boundary());
}

#[test]
fn loaded_flags_survive_marking() {
    let mut mesh = unit_cube();
    mesh.nodes_mut()[2].flag = true;
    let set = build_facets(mesh.elements(), mesh.nodes()).unwrap();
    mark_flagged_facets(set.facets(), mesh.nodes_mut()).unwrap();
    let flags: Vec<bool> = mesh.nodes().iter().map(|n| n.flag).collect();
    assert_eq!(flags, vec![false, false, true, false, false, false, false, false]);
}

#[test]
fn clear_then_classify() {
    let mut mesh = unit_cube();
    let set = build_facets(mesh.elements(), mesh.nodes()).unwrap();
    mark_boundary_with(&set.facets()[0], mesh.nodes_mut(), BoundaryMarker::Velocity).unwrap();
    assert_eq!(classify_boundary_nodes(mesh.nodes()).boundary.len(), 4);
    assert_eq!(clear_boundary(mesh.nodes_mut()), 4);
    assert!(classify_boundary_nodes(mesh.nodes()).boundary.is_empty());
}
