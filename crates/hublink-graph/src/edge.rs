//! Edge types for the site graph.
//!
//! Edges mirror what each page declares about itself. The resolver reads
//! the declarations straight off the node (to keep their order), so the
//! edges exist for export, statistics and neighbourhood queries.

use serde::{Deserialize, Serialize};

/// The declared relationship between two pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgeKind {
    /// Page A names page B as its parent.
    Parent,

    /// Page A lists page B among its children.
    Child,

    /// Page A lists page B among its siblings.
    Sibling,
}

impl std::fmt::Display for EdgeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Parent => "parent",
            Self::Child => "child",
            Self::Sibling => "sibling",
        };
        write!(f, "{}", s)
    }
}

/// An edge in the site graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    /// The kind of relationship.
    pub kind: EdgeKind,

    /// Position of the target in the source's declared list.
    pub position: usize,
}

impl Edge {
    pub fn new(kind: EdgeKind, position: usize) -> Self {
        Self { kind, position }
    }
}

/// A simplified edge for export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphEdge {
    pub source: String,
    pub target: String,
    pub kind: EdgeKind,
}
