//! Graph builder for constructing the site graph from declared pages.
//!
//! Building is the only place configuration defects are detected. The
//! builder takes PageNodes, checks them, and resolves their declared
//! parent/children/siblings into graph edges.

use crate::breadcrumb::walk_parents;
use crate::config::{LinkingConfig, ValidationPolicy, DEFAULT_CONVERSION_NODE};
use crate::edge::{Edge, EdgeKind};
use crate::error::GraphError;
use crate::graph::{NodeId, SiteGraph};
use crate::validation::{check_consistency, ValidationReport};
use hublink_core::{Layer, PageNode, MAX_PRIORITY, MIN_PRIORITY};
use petgraph::graph::DiGraph;
use std::collections::HashMap;
use tracing::{info, warn};

/// Builds a SiteGraph from page declarations.
///
/// The builder handles the two-pass process:
/// 1. Collect all pages
/// 2. Validate them and resolve declarations into edges
pub struct GraphBuilder {
    nodes: Vec<PageNode>,
    conversion_node: String,
    policy: ValidationPolicy,
}

impl Default for GraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphBuilder {
    /// Creates a new builder with the default conversion node and a
    /// lenient policy.
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            conversion_node: DEFAULT_CONVERSION_NODE.to_string(),
            policy: ValidationPolicy::Lenient,
        }
    }

    /// Creates a builder that takes its conversion node and policy from
    /// a config.
    pub fn from_config(config: &LinkingConfig) -> Self {
        Self::new()
            .with_conversion_node(config.conversion_node.clone())
            .with_policy(config.validation)
    }

    pub fn with_conversion_node(mut self, id: impl Into<String>) -> Self {
        self.conversion_node = id.into();
        self
    }

    pub fn with_policy(mut self, policy: ValidationPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Adds one page.
    pub fn add_node(mut self, node: PageNode) -> Self {
        self.nodes.push(node);
        self
    }

    /// Adds a batch of pages.
    pub fn add_nodes(&mut self, nodes: Vec<PageNode>) {
        self.nodes.extend(nodes);
    }

    /// Validates the pages and builds the graph.
    ///
    /// Structural defects always fail. Consistency issues fail only under
    /// [`ValidationPolicy::Strict`]; otherwise each is logged once here and
    /// kept on the graph's report.
    pub fn build(self) -> Result<SiteGraph, GraphError> {
        if self.nodes.is_empty() {
            return Err(GraphError::Empty);
        }

        let mut by_id: HashMap<&str, &PageNode> = HashMap::with_capacity(self.nodes.len());
        for node in &self.nodes {
            if by_id.insert(node.id.as_str(), node).is_some() {
                return Err(GraphError::DuplicateId(node.id.clone()));
            }
        }

        for node in &self.nodes {
            check_node(node)?;
        }

        let roots: Vec<&PageNode> = self.nodes.iter().filter(|n| n.is_root()).collect();
        match roots.as_slice() {
            [] => return Err(GraphError::MissingRoot),
            [_] => {}
            many => {
                return Err(GraphError::MultipleRoots(
                    many.iter().map(|n| n.id.clone()).collect(),
                ))
            }
        }

        for node in &self.nodes {
            check_parent(node, &by_id)?;
            if walk_parents(node, |id| by_id.get(id).copied()).exceeded {
                return Err(GraphError::ParentChainTooDeep(node.id.clone()));
            }
        }

        match by_id.get(self.conversion_node.as_str()) {
            None => return Err(GraphError::UnknownConversionNode(self.conversion_node)),
            Some(node) if node.layer != Layer::Conversion => {
                return Err(GraphError::NotAConversionNode {
                    node: node.id.clone(),
                    layer: node.layer,
                })
            }
            Some(_) => {}
        }

        let issues = check_consistency(&self.nodes, &by_id);
        if !issues.is_empty() {
            if self.policy == ValidationPolicy::Strict {
                return Err(GraphError::Inconsistent(issues));
            }
            for issue in &issues {
                warn!(%issue, "inconsistent link declaration");
            }
        }
        drop(by_id);

        let graph = self.assemble(ValidationReport { issues });
        info!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            issues = graph.report().len(),
            "site graph built"
        );
        Ok(graph)
    }

    /// Second pass: moves the pages into petgraph and resolves edges.
    fn assemble(self, report: ValidationReport) -> SiteGraph {
        let mut graph = DiGraph::with_capacity(self.nodes.len(), self.nodes.len() * 4);
        let mut id_index: HashMap<String, NodeId> = HashMap::with_capacity(self.nodes.len());

        for node in self.nodes {
            let id = node.id.clone();
            let index = graph.add_node(node);
            id_index.insert(id, index);
        }

        // Collect the edge additions first to avoid borrowing the graph
        // while iterating it.
        let mut edges_to_add = Vec::new();
        for from in graph.node_indices() {
            let node = &graph[from];
            let declared = node
                .parent
                .iter()
                .map(|id| (EdgeKind::Parent, 0, id))
                .chain(node.children.iter().enumerate().map(|(i, id)| (EdgeKind::Child, i, id)))
                .chain(node.siblings.iter().enumerate().map(|(i, id)| (EdgeKind::Sibling, i, id)));

            for (kind, position, target) in declared {
                // Dangling ids are already on the report.
                if let Some(&to) = id_index.get(target.as_str()) {
                    edges_to_add.push((from, to, Edge::new(kind, position)));
                }
            }
        }

        for (from, to, edge) in edges_to_add {
            graph.add_edge(from, to, edge);
        }

        let mut root = None;
        let mut conversion = None;
        for index in graph.node_indices() {
            let node = &graph[index];
            if node.is_root() {
                root = Some(index);
            }
            if node.id == self.conversion_node {
                conversion = Some(index);
            }
        }

        // Both were checked in `build`.
        SiteGraph::from_parts(
            graph,
            id_index,
            root.unwrap_or_default(),
            conversion.unwrap_or_default(),
            report,
        )
    }
}

/// Checks that stand on a single page.
fn check_node(node: &PageNode) -> Result<(), GraphError> {
    if let Some(&category) = node.anchor_text_variants.empty_categories().first() {
        return Err(GraphError::EmptyAnchorCategory {
            node: node.id.clone(),
            category,
        });
    }

    let priority = node.priority();
    if !(MIN_PRIORITY..=MAX_PRIORITY).contains(&priority) {
        return Err(GraphError::InvalidPriority {
            node: node.id.clone(),
            priority,
        });
    }

    Ok(())
}

/// Checks a page's parent against the layer model.
fn check_parent(node: &PageNode, by_id: &HashMap<&str, &PageNode>) -> Result<(), GraphError> {
    match (node.layer.parent_layer(), node.parent.as_deref()) {
        (None, None) => Ok(()),
        (None, Some(parent)) => Err(GraphError::UnexpectedParent {
            node: node.id.clone(),
            layer: node.layer,
            parent: parent.to_string(),
        }),
        (Some(_), None) => Err(GraphError::MissingParent {
            node: node.id.clone(),
            layer: node.layer,
        }),
        (Some(expected), Some(parent_id)) => {
            let parent = by_id
                .get(parent_id)
                .ok_or_else(|| GraphError::UnknownParent {
                    node: node.id.clone(),
                    parent: parent_id.to_string(),
                })?;

            if parent.layer != expected {
                return Err(GraphError::ParentLayerMismatch {
                    node: node.id.clone(),
                    layer: node.layer,
                    parent: parent_id.to_string(),
                    parent_layer: parent.layer,
                    expected,
                });
            }
            Ok(())
        }
    }
}
