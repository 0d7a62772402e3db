//! End-to-end processing of a loaded mesh.
//!
//! [`process`] runs the enabled passes in a fixed order:
//!
//! 1. element quality check,
//! 2. model volume,
//! 3. clearing of loaded boundary markers,
//! 4. coordinate scaling,
//! 5. surface extraction and gated boundary marking.
//!
//! Volume is computed before scaling, so it is reported in input units. The
//! run ends with an [`Event::FinalMesh`] carrying the node count to write.

use crate::algs::boundary::{clear_boundary, classify_boundary_nodes, mark_flagged_facets};
use crate::algs::neighbours::build_facets;
use crate::algs::transform::scale_nodes;
use crate::algs::volume::total_volume;
use crate::config::ProcessingConfig;
use crate::data::facet::{Facet, FacetKey};
use crate::data::mesh::Mesh;
use crate::data::node::Node;
use crate::debug_invariants::DebugInvariants;
use crate::geometry::metrics::quad_area;
use crate::geometry::quality::{QualityReport, check_elements};
use crate::mesh_error::MeshSkinError;
use crate::report::{Event, Reporter};
use crate::topology::point::NodeId;

/// Result of surface extraction.
#[derive(Clone, Debug, Default)]
pub struct SurfaceSummary {
    /// Exterior facets in element-traversal order.
    pub exterior_facets: Vec<Facet>,
    /// Facets converted into node markers.
    pub marked_facets: usize,
    /// Nodes carrying a boundary marker after marking, sorted.
    pub boundary_nodes: Vec<NodeId>,
    /// Facet keys owned by more than two bricks.
    pub non_manifold: Vec<FacetKey>,
    /// Total area of the exterior facets.
    pub area: f64,
}

/// What a [`process`] run did.
#[derive(Clone, Debug, Default)]
pub struct ProcessingSummary {
    /// Node count as loaded; writers print this many nodes.
    pub original_node_count: usize,
    pub quality: Option<QualityReport>,
    pub volume: Option<f64>,
    /// Number of nodes whose loaded marker was cleared.
    pub cleared_markers: Option<usize>,
    pub scaled: bool,
    pub surface: Option<SurfaceSummary>,
}

/// Runs every pass enabled in `config` over `mesh`.
///
/// Degenerate elements and empty meshes are reported, not returned as
/// errors; only index errors and invalid parameters abort.
pub fn process(
    mesh: &mut Mesh,
    config: &ProcessingConfig,
    reporter: &mut dyn Reporter,
) -> Result<ProcessingSummary, MeshSkinError> {
    config.validate()?;
    mesh.debug_assert_invariants();

    let mut summary = ProcessingSummary {
        original_node_count: mesh.num_nodes(),
        ..ProcessingSummary::default()
    };

    if mesh.is_empty() {
        reporter.report(&Event::EmptyMesh {
            nodes: mesh.num_nodes(),
            elements: mesh.num_elements(),
        });
    }

    if config.check_all_elements {
        summary.quality = Some(check_elements(mesh.elements(), mesh.nodes(), reporter)?);
    }

    if config.calculate_volume {
        let volume = total_volume(mesh.elements(), mesh.nodes())?;
        reporter.report(&Event::ModelVolume(volume));
        summary.volume = Some(volume);
    }

    if config.clear_previous_boundary {
        let cleared = clear_boundary(mesh.nodes_mut());
        reporter.report(&Event::BoundaryCleared { nodes: cleared });
        summary.cleared_markers = Some(cleared);
    }

    if config.needs_scaling() {
        scale_nodes(mesh.nodes_mut(), config.scale)?;
        reporter.report(&Event::Scaled {
            factors: config.scale,
        });
        summary.scaled = true;
    }

    if config.calculate_surface {
        summary.surface = Some(extract_surface(mesh, reporter)?);
    }

    reporter.report(&Event::FinalMesh {
        nodes: summary.original_node_count,
    });
    Ok(summary)
}

/// Finds the exterior facets and marks the nodes of flagged ones.
pub fn extract_surface(
    mesh: &mut Mesh,
    reporter: &mut dyn Reporter,
) -> Result<SurfaceSummary, MeshSkinError> {
    let (elements, nodes) = mesh.split_mut();
    let set = build_facets(elements, nodes)?;
    if !set.non_manifold().is_empty() {
        reporter.report(&Event::NonManifoldFacets {
            count: set.non_manifold().len(),
        });
    }

    let marked_facets = mark_flagged_facets(set.facets(), nodes)?;
    let nodes: &[Node] = nodes;
    let non_manifold = set.non_manifold().to_vec();
    let exterior_facets = set.into_exterior();
    let area = exterior_facets
        .iter()
        .map(|f| quad_area(f, nodes))
        .sum::<Result<f64, _>>()?;
    let boundary_nodes = classify_boundary_nodes(nodes).boundary;

    reporter.report(&Event::SurfaceFound {
        exterior_facets: exterior_facets.len(),
        boundary_nodes: boundary_nodes.len(),
    });

    Ok(SurfaceSummary {
        exterior_facets,
        marked_facets,
        boundary_nodes,
        non_manifold,
        area,
    })
}
