//! Relationship resolution: which pages a page links to, per context.

use crate::graph::SiteGraph;
use hublink_core::{Layer, LinkContext};
use serde::Serialize;
use tracing::debug;

/// The four link sets a page renders. Ids keep their declared order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Relationships<'a> {
    pub upward: Vec<&'a str>,
    pub downward: Vec<&'a str>,
    pub sideways: Vec<&'a str>,
    pub conversion: Vec<&'a str>,
}

impl<'a> Relationships<'a> {
    /// The set for one context.
    pub fn get(&self, context: LinkContext) -> &[&'a str] {
        match context {
            LinkContext::Upward => &self.upward,
            LinkContext::Downward => &self.downward,
            LinkContext::Sideways => &self.sideways,
            LinkContext::Conversion => &self.conversion,
        }
    }

    pub fn is_empty(&self) -> bool {
        LinkContext::ALL.iter().all(|context| self.get(*context).is_empty())
    }

    /// Total number of link targets across all sets.
    pub fn len(&self) -> usize {
        LinkContext::ALL.iter().map(|context| self.get(*context).len()).sum()
    }
}

impl SiteGraph {
    /// Derives the link sets of a page from its declarations.
    ///
    /// - upward: the parent, if any
    /// - downward: the declared children
    /// - sideways: the declared siblings
    /// - conversion: the conversion page, unless this page is on layer 3
    ///
    /// Unknown ids get four empty sets. Declared ids are passed through
    /// even when they name no page; ranking drops those.
    pub fn relationships(&self, id: &str) -> Relationships<'_> {
        let Some(node) = self.get(id) else {
            debug!(id, "relationships requested for unknown node");
            return Relationships::default();
        };

        let conversion = if node.layer == Layer::Conversion {
            Vec::new()
        } else {
            vec![self.conversion_node().id.as_str()]
        };

        Relationships {
            upward: node.parent.as_deref().into_iter().collect(),
            downward: node.children.iter().map(String::as_str).collect(),
            sideways: node.siblings.iter().map(String::as_str).collect(),
            conversion,
        }
    }
}
