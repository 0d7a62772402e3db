//! Reporting sink for processing events.
//!
//! Core passes never print. They hand [`Event`]s to a caller-supplied
//! [`Reporter`]; [`LogReporter`] forwards them to the `log` facade and
//! [`CollectingReporter`] keeps them for inspection.

use std::fmt;

use crate::geometry::quality::{Degeneracy, DegenerateElement};

/// Something worth telling the user about while processing a mesh.
#[derive(Clone, Debug, PartialEq)]
pub enum Event {
    /// An element failed the signed-volume check.
    DegenerateElement(DegenerateElement),
    /// The quality check found no degenerate element.
    AllElementsFine { checked: usize },
    /// Sum of signed element volumes.
    ModelVolume(f64),
    /// Nothing to process: no nodes or no elements.
    EmptyMesh { nodes: usize, elements: usize },
    /// Previously loaded boundary markers were cleared.
    BoundaryCleared { nodes: usize },
    /// Node coordinates were scaled.
    Scaled { factors: [f64; 3] },
    /// Facet keys shared by more than two bricks.
    NonManifoldFacets { count: usize },
    /// Processing finished; `nodes` is the node count the writers emit.
    FinalMesh { nodes: usize },
    /// Surface extraction finished.
    SurfaceFound {
        exterior_facets: usize,
        boundary_nodes: usize,
    },
}

impl Event {
    /// Whether the event describes a problem with the input.
    pub fn is_warning(&self) -> bool {
        matches!(
            self,
            Event::DegenerateElement(_) | Event::EmptyMesh { .. } | Event::NonManifoldFacets { .. }
        )
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Event::DegenerateElement(d) => {
                let what = match d.kind {
                    Degeneracy::Inverted => "det less than zero",
                    Degeneracy::Collapsed => "zero det",
                };
                write!(
                    f,
                    "element number {} has {what} (signed volume {})",
                    d.element, d.signed_volume
                )
            }
            Event::AllElementsFine { checked } => {
                write!(f, "all elements are fine ({checked} checked)")
            }
            Event::ModelVolume(v) => write!(f, "model volume is {v}"),
            Event::EmptyMesh { nodes, elements } => {
                write!(f, "empty mesh: {nodes} nodes, {elements} elements")
            }
            Event::BoundaryCleared { nodes } => {
                write!(f, "cleared previous boundary on {nodes} nodes")
            }
            Event::Scaled { factors } => write!(
                f,
                "scaled nodes by ({}, {}, {})",
                factors[0], factors[1], factors[2]
            ),
            Event::NonManifoldFacets { count } => {
                write!(f, "{count} facets are shared by more than two elements")
            }
            Event::FinalMesh { nodes } => write!(f, "number of nodes in final mesh: {nodes}"),
            Event::SurfaceFound {
                exterior_facets,
                boundary_nodes,
            } => write!(
                f,
                "surface has {exterior_facets} exterior facets, {boundary_nodes} boundary nodes"
            ),
        }
    }
}

/// Startup line naming the tool and its version.
pub fn banner() -> String {
    format!(
        "mesh-skin {}: exterior surface extraction for brick meshes",
        env!("CARGO_PKG_VERSION")
    )
}

/// Caller-supplied sink for processing events.
pub trait Reporter {
    fn report(&mut self, event: &Event);
}

/// Forwards events to the `log` facade (warnings at `warn`, the rest at `info`).
#[derive(Clone, Copy, Debug, Default)]
pub struct LogReporter;

impl Reporter for LogReporter {
    fn report(&mut self, event: &Event) {
        if event.is_warning() {
            log::warn!("{event}");
        } else {
            log::info!("{event}");
        }
    }
}

/// Keeps every event in arrival order.
#[derive(Clone, Debug, Default)]
pub struct CollectingReporter {
    events: Vec<Event>,
}

impl CollectingReporter {
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn into_events(self) -> Vec<Event> {
        self.events
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Event> {
        self.events.iter().filter(|e| e.is_warning())
    }
}

impl Reporter for CollectingReporter {
    fn report(&mut self, event: &Event) {
        self.events.push(event.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::topology::point::ElementId;

    #[test]
    fn degenerate_element_message_uses_external_id() {
        let e = Event::DegenerateElement(DegenerateElement {
            element: ElementId::new(2),
            signed_volume: -1.0,
            kind: Degeneracy::Inverted,
        });
        assert_eq!(
            e.to_string(),
            "element number 3 has det less than zero (signed volume -1)"
        );
        assert!(e.is_warning());
    }

    #[test]
    fn banner_carries_version() {
        let b = banner();
        assert!(b.starts_with("mesh-skin "));
        assert!(b.contains(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn final_mesh_message() {
        let e = Event::FinalMesh { nodes: 12 };
        assert_eq!(e.to_string(), "number of nodes in final mesh: 12");
        assert!(!e.is_warning());
    }

    #[test]
    fn collecting_reporter_keeps_order() {
        let mut sink = CollectingReporter::default();
        sink.report(&Event::ModelVolume(2.0));
        sink.report(&Event::EmptyMesh {
            nodes: 0,
            elements: 0,
        });
        assert_eq!(sink.events().len(), 2);
        assert_eq!(sink.warnings().count(), 1);
        assert_eq!(sink.events()[0].to_string(), "model volume is 2");
    }
}
