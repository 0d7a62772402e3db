//! Facet generation and exterior-facet detection.
//!
//! Every brick contributes its six facets in local face order. Facets are
//! grouped by [`FacetKey`] (the sorted node ids of the face), so two bricks
//! sharing a face meet in the same bucket regardless of winding, and no
//! coordinate comparison is involved. A facet whose bucket holds no facet
//! from another brick is *exterior*.
//!
//! Grouping is a single hashed pass, linear in the number of facets.
//!
//! With the `rayon` feature, facet generation runs per element in parallel
//! and the buckets live in a shared `DashMap`. Facets are still returned in
//! element-traversal order, so both builds produce identical results.

use hashbrown::HashMap;
use itertools::Itertools;

use crate::data::element::Brick;
use crate::data::facet::{Facet, FacetKey};
use crate::data::node::Node;
use crate::geometry::metrics::quad_centroid_of;
use crate::mesh_error::MeshSkinError;
use crate::topology::cell_type::LocalFace;
use crate::topology::point::ElementId;

type Owners = HashMap<FacetKey, Vec<ElementId>>;

/// The six facets of one brick, in local face order, sentinels unset.
pub fn brick_facets(
    element: ElementId,
    brick: &Brick,
    nodes: &[Node],
) -> Result<Vec<Facet>, MeshSkinError> {
    LocalFace::all()
        .map(|face| -> Result<Facet, MeshSkinError> {
            let corners = face.corners().map(|local| brick.nodes()[local]);
            let centroid = quad_centroid_of(&corners, nodes)?;
            Ok(Facet::new(element, face, corners, centroid))
        })
        .collect()
}

/// All facets of a mesh with their exterior sentinels resolved.
#[derive(Clone, Debug, Default)]
pub struct FacetSet {
    facets: Vec<Facet>,
    interior_faces: usize,
    non_manifold: Vec<FacetKey>,
}

impl FacetSet {
    /// Every facet, `6 * elements` of them, in element-traversal order.
    pub fn facets(&self) -> &[Facet] {
        &self.facets
    }

    pub fn exterior(&self) -> impl Iterator<Item = &Facet> {
        self.facets.iter().filter(|f| f.is_exterior())
    }

    pub fn into_exterior(self) -> Vec<Facet> {
        self.facets.into_iter().filter(Facet::is_exterior).collect()
    }

    pub fn len(&self) -> usize {
        self.facets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.facets.is_empty()
    }

    pub fn exterior_count(&self) -> usize {
        self.exterior().count()
    }

    /// Faces shared by exactly two bricks.
    pub fn interior_faces(&self) -> usize {
        self.interior_faces
    }

    /// Keys owned by more than two bricks, sorted. Empty for a manifold mesh.
    pub fn non_manifold(&self) -> &[FacetKey] {
        &self.non_manifold
    }
}

/// Generates every facet and flags the exterior ones.
pub fn build_facets(elements: &[Brick], nodes: &[Node]) -> Result<FacetSet, MeshSkinError> {
    let mut facets = generate_facets(elements, nodes)?;
    let owners = group_owners(&facets);

    for facet in &mut facets {
        let exterior = owners
            .get(&facet.key())
            .is_none_or(|o| o.iter().all(|&e| e == facet.element()));
        facet.set_exterior(exterior);
    }

    let mut interior_faces = 0;
    let mut non_manifold = Vec::new();
    for (key, o) in &owners {
        match o.iter().unique().count() {
            2 => interior_faces += 1,
            n if n > 2 => non_manifold.push(*key),
            _ => {}
        }
    }
    non_manifold.sort_unstable();

    let set = FacetSet {
        facets,
        interior_faces,
        non_manifold,
    };
    log::debug!(
        "built {} facets: {} exterior, {} interior faces, {} non-manifold keys",
        set.len(),
        set.exterior_count(),
        set.interior_faces,
        set.non_manifold.len()
    );
    Ok(set)
}

/// Facets that belong to exactly one brick, in element-traversal order.
pub fn extract_exterior_facets(
    elements: &[Brick],
    nodes: &[Node],
) -> Result<Vec<Facet>, MeshSkinError> {
    Ok(build_facets(elements, nodes)?.into_exterior())
}

#[cfg(not(feature = "rayon"))]
fn generate_facets(elements: &[Brick], nodes: &[Node]) -> Result<Vec<Facet>, MeshSkinError> {
    let mut facets = Vec::with_capacity(elements.len() * 6);
    for (i, brick) in elements.iter().enumerate() {
        facets.extend(brick_facets(ElementId::new(i), brick, nodes)?);
    }
    Ok(facets)
}

#[cfg(feature = "rayon")]
fn generate_facets(elements: &[Brick], nodes: &[Node]) -> Result<Vec<Facet>, MeshSkinError> {
    use rayon::prelude::*;

    let per_element: Vec<Vec<Facet>> = elements
        .par_iter()
        .enumerate()
        .map(|(i, brick)| brick_facets(ElementId::new(i), brick, nodes))
        .collect::<Result<_, _>>()?;
    Ok(per_element.into_iter().flatten().collect())
}

#[cfg(not(feature = "rayon"))]
fn group_owners(facets: &[Facet]) -> Owners {
    let mut owners = Owners::with_capacity(facets.len() / 2 + 1);
    for facet in facets {
        owners.entry(facet.key()).or_default().push(facet.element());
    }
    owners
}

#[cfg(feature = "rayon")]
fn group_owners(facets: &[Facet]) -> Owners {
    use dashmap::DashMap;
    use rayon::prelude::*;

    let shared: DashMap<FacetKey, Vec<ElementId>> = DashMap::with_capacity(facets.len() / 2 + 1);
    facets.par_iter().for_each(|facet| {
        shared.entry(facet.key()).or_default().push(facet.element());
    });
    shared.into_iter().collect()
}
