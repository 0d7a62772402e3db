mod util;

use mesh_skin::prelude::*;
use std::fs;
use util::unit_cube;

fn temp_path(name: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!("mesh-skin-{}-{name}", std::process::id()))
}

#[test]
fn processed_markers_survive_a_file_round_trip() {
    let mut mesh = brick_grid(2, 2, 2, [0.0; 3], [1.0; 3]).unwrap();
    extract_surface(&mut mesh, &mut CollectingReporter::default()).unwrap();

    let path = temp_path("roundtrip.sli");
    SliWriter::new().write_path(&path, &mesh).unwrap();
    let back = SliReader.read_path(&path).unwrap();
    fs::remove_file(&path).unwrap();

    assert_eq!(back, mesh);
    assert_eq!(back.nodes().iter().filter(|n| n.is_boundary()).count(), 26);
}

#[test]
fn node_limit_drops_trailing_nodes() {
    let mut mesh = unit_cube();
    mesh.add_node(Node::new([9.0, 9.0, 9.0]));
    let mut buf = Vec::new();
    SliWriter::with_node_limit(8).write(&mut buf, &mesh).unwrap();
    let text = String::from_utf8(buf).unwrap();
    assert!(text.starts_with("NODES 8\n1 0 0 0 0 0\n"));
    assert_eq!(SliReader.read(text.as_bytes()).unwrap(), unit_cube());
}

#[test]
fn tetrahedra_are_not_accepted() {
    let text = "NODES 4\n1 0 0 0\n2 1 0 0\n3 0 1 0\n4 0 0 1\nELEMENTS 1 4\n1 1 2 3 4\nEND\n";
    let err = SliReader.read(text.as_bytes()).unwrap_err();
    assert!(matches!(err, MeshSkinError::MeshIoParse(m) if m.contains("unsupported element size 4")));
}

#[test]
fn truncated_input_is_a_parse_error() {
    let text = "NODES 3\n1 0 0 0\n2 1 0 0\n";
    assert!(matches!(
        SliReader.read(text.as_bytes()),
        Err(MeshSkinError::MeshIoParse(_))
    ));
}

#[test]
fn empty_mesh_reads_back() {
    let text = "NODES 0\nELEMENTS 0 8\n";
    let mesh = SliReader.read(text.as_bytes()).unwrap();
    assert!(mesh.is_empty());
}

#[test]
fn missing_file_is_an_io_error() {
    let err = SliReader.read_path(temp_path("does-not-exist.sli")).unwrap_err();
    assert!(matches!(err, MeshSkinError::Io(_)));
}
