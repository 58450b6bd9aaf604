//! Core graph data structure.
//!
//! The SiteGraph wraps petgraph and adds an id index for constant-time
//! lookups. It is only ever produced by [`GraphBuilder`](crate::GraphBuilder),
//! so every instance has already passed startup validation and is never
//! mutated afterwards.

use crate::edge::{Edge, EdgeKind, GraphEdge};
use crate::validation::ValidationReport;
use hublink_core::{Layer, PageNode};
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use petgraph::Direction;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Index of a page in the underlying graph.
pub type NodeId = NodeIndex;

/// The internal-linking graph of a site.
///
/// Holds every page and its declared relationships. Read-only, so a
/// shared reference can be handed to any number of threads.
#[derive(Debug, Clone)]
pub struct SiteGraph {
    /// The underlying petgraph graph.
    pub(crate) graph: DiGraph<PageNode, Edge>,

    /// Maps string ids to graph node indexes.
    id_index: HashMap<String, NodeId>,

    root: NodeId,

    conversion: NodeId,

    report: ValidationReport,
}

impl SiteGraph {
    /// Assembles a graph from validated parts. Only the builder calls this.
    pub(crate) fn from_parts(
        graph: DiGraph<PageNode, Edge>,
        id_index: HashMap<String, NodeId>,
        root: NodeId,
        conversion: NodeId,
        report: ValidationReport,
    ) -> Self {
        Self {
            graph,
            id_index,
            root,
            conversion,
            report,
        }
    }

    /// Gets a page by its id. Unknown ids are an expected condition.
    pub fn get(&self, id: &str) -> Option<&PageNode> {
        let index = self.id_index.get(id)?;
        self.graph.node_weight(*index)
    }

    /// Whether a page with this id exists.
    pub fn contains(&self, id: &str) -> bool {
        self.id_index.contains_key(id)
    }

    /// The single layer-0 page.
    pub fn root(&self) -> &PageNode {
        &self.graph[self.root]
    }

    /// The conversion page every other page links to.
    pub fn conversion_node(&self) -> &PageNode {
        &self.graph[self.conversion]
    }

    /// Iterates over all pages in declaration order.
    pub fn nodes(&self) -> impl Iterator<Item = &PageNode> {
        self.graph.node_weights()
    }

    /// Pages on one layer, in declaration order.
    pub fn nodes_by_layer(&self, layer: Layer) -> Vec<&PageNode> {
        self.nodes().filter(|node| node.layer == layer).collect()
    }

    /// Returns the number of pages.
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Returns the number of declared edges between known pages.
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Consistency issues recorded when the graph was built.
    pub fn report(&self) -> &ValidationReport {
        &self.report
    }

    /// Pages that declare `id` as a child, sibling or parent, i.e. pages
    /// that may render a link to it.
    pub fn linked_from(&self, id: &str) -> Vec<(&PageNode, EdgeKind)> {
        let Some(&index) = self.id_index.get(id) else {
            return Vec::new();
        };

        let mut sources: Vec<_> = self
            .graph
            .edges_directed(index, Direction::Incoming)
            .map(|edge_ref| (edge_ref.source(), edge_ref.weight().kind))
            .collect();
        sources.sort_by_key(|(source, kind)| (source.index(), *kind as u8));

        sources
            .into_iter()
            .map(|(source, kind)| (&self.graph[source], kind))
            .collect()
    }

    /// Returns all declared edges with source and target ids for export.
    pub fn export_edges(&self) -> Vec<GraphEdge> {
        let mut edges: Vec<_> = self.graph.edge_references().collect();
        edges.sort_by_key(|edge_ref| {
            let weight = edge_ref.weight();
            (edge_ref.source().index(), weight.kind as u8, weight.position)
        });

        edges
            .into_iter()
            .map(|edge_ref| GraphEdge {
                source: self.graph[edge_ref.source()].id.clone(),
                target: self.graph[edge_ref.target()].id.clone(),
                kind: edge_ref.weight().kind,
            })
            .collect()
    }
}

/// Graph statistics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphStats {
    pub node_count: usize,
    pub edge_count: usize,
    /// Page counts indexed by layer depth.
    pub layers: [usize; 4],
    pub issues: usize,
}

impl SiteGraph {
    /// Returns graph statistics.
    pub fn stats(&self) -> GraphStats {
        let layers = Layer::ALL.map(|layer| self.nodes_by_layer(layer).len());

        GraphStats {
            node_count: self.node_count(),
            edge_count: self.edge_count(),
            layers,
            issues: self.report.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::builder::GraphBuilder;
    use crate::edge::EdgeKind;
    use crate::test_support::{node, quote};
    use hublink_core::{Layer, PageType};

    fn small_graph() -> crate::SiteGraph {
        GraphBuilder::new()
            .with_conversion_node("quote")
            .add_node(
                node("home", Layer::Root, PageType::Homepage, None).with_children(["east", "west"]),
            )
            .add_node(node("east", Layer::Anchor, PageType::City, Some("home")).with_siblings(["west"]))
            .add_node(node("west", Layer::Anchor, PageType::City, Some("home")).with_siblings(["east"]))
            .add_node(quote("quote"))
            .build()
            .unwrap()
    }

    #[test]
    fn test_get_by_id() {
        let graph = small_graph();
        assert_eq!(graph.get("east").map(|n| n.name.as_str()), Some("East"));
        assert!(graph.get("north").is_none());
        assert!(graph.contains("west"));
        assert_eq!(graph.root().id, "home");
        assert_eq!(graph.conversion_node().id, "quote");
    }

    #[test]
    fn test_nodes_in_declaration_order() {
        let graph = small_graph();
        let ids: Vec<_> = graph.nodes().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, vec!["home", "east", "west", "quote"]);
    }

    #[test]
    fn test_nodes_by_layer() {
        let graph = small_graph();
        let anchors: Vec<_> = graph
            .nodes_by_layer(Layer::Anchor)
            .into_iter()
            .map(|n| n.id.as_str())
            .collect();
        assert_eq!(anchors, vec!["east", "west"]);
        assert!(graph.nodes_by_layer(Layer::Cluster).is_empty());
    }

    #[test]
    fn test_export_edges_and_stats() {
        let graph = small_graph();
        let edges = graph.export_edges();

        // home->east, home->west (child), east->home, west->home (parent),
        // east<->west (sibling)
        assert_eq!(edges.len(), 6);
        assert_eq!(edges[0].source, "home");
        assert_eq!(edges[0].target, "east");
        assert_eq!(edges[0].kind, EdgeKind::Child);

        let stats = graph.stats();
        assert_eq!(stats.node_count, 4);
        assert_eq!(stats.edge_count, 6);
        assert_eq!(stats.layers, [1, 2, 0, 1]);
        assert_eq!(stats.issues, 0);
    }

    #[test]
    fn test_linked_from() {
        let graph = small_graph();
        let sources: Vec<_> = graph
            .linked_from("west")
            .into_iter()
            .map(|(n, kind)| (n.id.as_str(), kind))
            .collect();
        assert_eq!(
            sources,
            vec![("home", EdgeKind::Child), ("east", EdgeKind::Sibling)]
        );
        assert!(graph.linked_from("nowhere").is_empty());
    }
}
