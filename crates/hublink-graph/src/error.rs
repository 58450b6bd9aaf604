//! Configuration defects detected while building a graph.

use crate::validation::ConsistencyIssue;
use hublink_core::{AnchorCategory, Layer};
use thiserror::Error;

/// Reasons a site graph refuses to build.
///
/// Every variant is a configuration defect. Request-time lookups never
/// produce these; unknown ids degrade instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("graph has no nodes")]
    Empty,

    #[error("duplicate node id {0:?}")]
    DuplicateId(String),

    #[error("graph has no layer-0 root node")]
    MissingRoot,

    #[error("graph has more than one layer-0 root: {0:?}")]
    MultipleRoots(Vec<String>),

    #[error("node {node:?} has an empty {category} anchor-text list")]
    EmptyAnchorCategory {
        node: String,
        category: AnchorCategory,
    },

    #[error("node {node:?} has priority {priority}, expected 1-10")]
    InvalidPriority { node: String, priority: u8 },

    #[error("node {node:?} on layer {layer} must declare a parent")]
    MissingParent { node: String, layer: Layer },

    #[error("node {node:?} on layer {layer} must not declare a parent (found {parent:?})")]
    UnexpectedParent {
        node: String,
        layer: Layer,
        parent: String,
    },

    #[error("node {node:?} names unknown parent {parent:?}")]
    UnknownParent { node: String, parent: String },

    #[error(
        "node {node:?} on layer {layer} has parent {parent:?} on layer {parent_layer}, expected layer {expected}"
    )]
    ParentLayerMismatch {
        node: String,
        layer: Layer,
        parent: String,
        parent_layer: Layer,
        expected: Layer,
    },

    #[error("parent chain of node {0:?} exceeds the maximum depth (cycle?)")]
    ParentChainTooDeep(String),

    #[error("conversion node {0:?} is not in the graph")]
    UnknownConversionNode(String),

    #[error("conversion node {node:?} is on layer {layer}, expected layer 3")]
    NotAConversionNode { node: String, layer: Layer },

    #[error("graph has {} consistency issue(s) under the strict policy", .0.len())]
    Inconsistent(Vec<ConsistencyIssue>),
}
