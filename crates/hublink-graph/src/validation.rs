//! Consistency checks that do not break the hierarchy.
//!
//! Nothing here is repaired. Each page's own `children` and `siblings`
//! lists keep governing what that page links to; the report only records
//! where declarations disagree.

use hublink_core::{Layer, PageNode};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A disagreement between two pages' declarations.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "issue", rename_all = "snake_case")]
pub enum ConsistencyIssue {
    /// `node` lists a child that does not exist.
    DanglingChild { node: String, child: String },
    /// `node` lists a sibling that does not exist.
    DanglingSibling { node: String, sibling: String },
    /// `node` lists `sibling`, but not the other way round.
    AsymmetricSibling { node: String, sibling: String },
    /// `node` lists `child`, whose parent is someone else (or nobody).
    ChildParentMismatch {
        node: String,
        child: String,
        actual_parent: Option<String>,
    },
    /// `child` names `parent`, which does not list it among its children.
    UnlistedChild { parent: String, child: String },
    /// `node` lists a sibling on another layer.
    SiblingLayerMismatch {
        node: String,
        sibling: String,
        node_layer: Layer,
        sibling_layer: Layer,
    },
}

impl std::fmt::Display for ConsistencyIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DanglingChild { node, child } => {
                write!(f, "{node} lists unknown child {child}")
            }
            Self::DanglingSibling { node, sibling } => {
                write!(f, "{node} lists unknown sibling {sibling}")
            }
            Self::AsymmetricSibling { node, sibling } => {
                write!(f, "{node} lists sibling {sibling}, which does not list it back")
            }
            Self::ChildParentMismatch {
                node,
                child,
                actual_parent,
            } => match actual_parent {
                Some(parent) => write!(f, "{node} lists child {child}, whose parent is {parent}"),
                None => write!(f, "{node} lists child {child}, which has no parent"),
            },
            Self::UnlistedChild { parent, child } => {
                write!(f, "{child} names parent {parent}, which does not list it as a child")
            }
            Self::SiblingLayerMismatch {
                node,
                sibling,
                node_layer,
                sibling_layer,
            } => write!(
                f,
                "{node} (layer {node_layer}) lists sibling {sibling} on layer {sibling_layer}"
            ),
        }
    }
}

/// Issues found when the graph was built.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub issues: Vec<ConsistencyIssue>,
}

impl ValidationReport {
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn len(&self) -> usize {
        self.issues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    /// Issues that mention `id` on either side.
    pub fn for_node(&self, id: &str) -> Vec<&ConsistencyIssue> {
        self.issues
            .iter()
            .filter(|issue| issue.involves(id))
            .collect()
    }
}

impl ConsistencyIssue {
    fn involves(&self, id: &str) -> bool {
        match self {
            Self::DanglingChild { node, child } => node == id || child == id,
            Self::DanglingSibling { node, sibling }
            | Self::AsymmetricSibling { node, sibling }
            | Self::SiblingLayerMismatch { node, sibling, .. } => node == id || sibling == id,
            Self::ChildParentMismatch { node, child, .. } => node == id || child == id,
            Self::UnlistedChild { parent, child } => parent == id || child == id,
        }
    }
}

/// Collects every consistency issue, walking nodes in declaration order.
pub(crate) fn check_consistency(
    nodes: &[PageNode],
    by_id: &HashMap<&str, &PageNode>,
) -> Vec<ConsistencyIssue> {
    let mut issues = Vec::new();

    for node in nodes {
        for child_id in &node.children {
            match by_id.get(child_id.as_str()) {
                None => issues.push(ConsistencyIssue::DanglingChild {
                    node: node.id.clone(),
                    child: child_id.clone(),
                }),
                Some(child) if child.parent.as_deref() != Some(node.id.as_str()) => {
                    issues.push(ConsistencyIssue::ChildParentMismatch {
                        node: node.id.clone(),
                        child: child_id.clone(),
                        actual_parent: child.parent.clone(),
                    })
                }
                Some(_) => {}
            }
        }

        for sibling_id in &node.siblings {
            let Some(sibling) = by_id.get(sibling_id.as_str()) else {
                issues.push(ConsistencyIssue::DanglingSibling {
                    node: node.id.clone(),
                    sibling: sibling_id.clone(),
                });
                continue;
            };

            if !sibling.siblings.iter().any(|s| s == &node.id) {
                issues.push(ConsistencyIssue::AsymmetricSibling {
                    node: node.id.clone(),
                    sibling: sibling_id.clone(),
                });
            }
            if sibling.layer != node.layer {
                issues.push(ConsistencyIssue::SiblingLayerMismatch {
                    node: node.id.clone(),
                    sibling: sibling_id.clone(),
                    node_layer: node.layer,
                    sibling_layer: sibling.layer,
                });
            }
        }

        if let Some(parent_id) = node.parent.as_deref() {
            if let Some(parent) = by_id.get(parent_id) {
                if !parent.children.iter().any(|c| c == &node.id) {
                    issues.push(ConsistencyIssue::UnlistedChild {
                        parent: parent_id.to_string(),
                        child: node.id.clone(),
                    });
                }
            }
        }
    }

    issues
}
