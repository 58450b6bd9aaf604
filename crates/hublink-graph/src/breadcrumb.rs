//! Breadcrumb paths: the ancestor chain of a page, root first.

use crate::graph::SiteGraph;
use hublink_core::{PageNode, MAX_DEPTH};
use tracing::debug;

/// Result of following `parent` links upward from a page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ParentWalk<'a> {
    /// Parent ids, nearest first.
    pub ancestors: Vec<&'a str>,
    /// True when the walk stopped at the depth bound rather than at a
    /// page without a parent.
    pub exceeded: bool,
}

/// Follows `parent` links from `start`, taking at most [`MAX_DEPTH`] steps.
///
/// A parent id that `lookup` cannot resolve is still recorded, and ends
/// the walk.
pub(crate) fn walk_parents<'a, F>(start: &'a PageNode, lookup: F) -> ParentWalk<'a>
where
    F: Fn(&str) -> Option<&'a PageNode>,
{
    let mut ancestors = Vec::new();
    let mut current = start;

    while let Some(parent_id) = current.parent.as_deref() {
        if ancestors.len() == MAX_DEPTH {
            return ParentWalk {
                ancestors,
                exceeded: true,
            };
        }
        ancestors.push(parent_id);
        match lookup(parent_id) {
            Some(parent) => current = parent,
            None => break,
        }
    }

    ParentWalk {
        ancestors,
        exceeded: false,
    }
}

impl SiteGraph {
    /// Builds the breadcrumb path for a page.
    ///
    /// Returns ancestor ids root first; the page itself is not included.
    /// The root always heads the path, even for pages (like the conversion
    /// page) that have no parent to walk. The root's own path and the path
    /// of an unknown id are empty.
    pub fn breadcrumb_path(&self, id: &str) -> Vec<&str> {
        let Some(node) = self.get(id) else {
            debug!(id, "breadcrumb requested for unknown node");
            return Vec::new();
        };
        if node.is_root() {
            return Vec::new();
        }

        let walk = walk_parents(node, |parent| self.get(parent));
        if walk.exceeded {
            // Unreachable for a graph that passed the builder.
            debug!(id, "breadcrumb walk hit the depth bound");
        }

        let mut path = walk.ancestors;
        path.reverse();

        let root = self.root().id.as_str();
        if path.first() != Some(&root) {
            path.insert(0, root);
        }
        path
    }

    /// Like [`breadcrumb_path`](Self::breadcrumb_path), resolved to nodes.
    /// Ids that do not resolve are skipped.
    pub fn breadcrumb_nodes(&self, id: &str) -> Vec<&PageNode> {
        self.breadcrumb_path(id)
            .into_iter()
            .filter_map(|ancestor| self.get(ancestor))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::GraphBuilder;
    use crate::test_support::{node, quote};
    use hublink_core::{Layer, PageType};
    use std::collections::HashMap;

    fn chain_graph() -> SiteGraph {
        GraphBuilder::new()
            .with_conversion_node("quote")
            .add_node(node("root", Layer::Root, PageType::Homepage, None).with_children(["a"]))
            .add_node(node("a", Layer::Anchor, PageType::City, Some("root")).with_children(["b"]))
            .add_node(node("b", Layer::Cluster, PageType::Cluster, Some("a")))
            .add_node(quote("quote"))
            .build()
            .unwrap()
    }

    #[test]
    fn test_breadcrumb_for_cluster() {
        let graph = chain_graph();
        assert_eq!(graph.breadcrumb_path("b"), vec!["root", "a"]);
        assert_eq!(graph.breadcrumb_path("a"), vec!["root"]);
    }

    #[test]
    fn test_breadcrumb_for_root_is_empty() {
        let graph = chain_graph();
        assert!(graph.breadcrumb_path("root").is_empty());
    }

    #[test]
    fn test_breadcrumb_for_conversion_is_root_only() {
        let graph = chain_graph();
        assert_eq!(graph.breadcrumb_path("quote"), vec!["root"]);
    }

    #[test]
    fn test_breadcrumb_for_unknown_is_empty() {
        let graph = chain_graph();
        assert!(graph.breadcrumb_path("no-such-id").is_empty());
    }

    #[test]
    fn test_breadcrumb_nodes() {
        let graph = chain_graph();
        let names: Vec<_> = graph
            .breadcrumb_nodes("b")
            .into_iter()
            .map(|n| n.name.as_str())
            .collect();
        assert_eq!(names, vec!["Root", "A"]);
    }

    #[test]
    fn test_walk_stops_at_depth_bound_on_cycle() {
        let x = node("x", Layer::Anchor, PageType::City, Some("y"));
        let y = node("y", Layer::Anchor, PageType::City, Some("x"));
        let by_id: HashMap<&str, &PageNode> = [("x", &x), ("y", &y)].into_iter().collect();

        let walk = walk_parents(&x, |id| by_id.get(id).copied());
        assert!(walk.exceeded);
        assert_eq!(walk.ancestors.len(), MAX_DEPTH);
    }

    #[test]
    fn test_walk_three_level_chain_root_first() {
        let root = node("root", Layer::Root, PageType::Homepage, None);
        let a = node("a", Layer::Anchor, PageType::City, Some("root"));
        let b = node("b", Layer::Cluster, PageType::Cluster, Some("a"));
        let c = node("c", Layer::Cluster, PageType::Cluster, Some("b"));
        let by_id: HashMap<&str, &PageNode> = [("root", &root), ("a", &a), ("b", &b)]
            .into_iter()
            .collect();

        let mut path = walk_parents(&c, |id| by_id.get(id).copied()).ancestors;
        path.reverse();
        assert_eq!(path, vec!["root", "a", "b"]);
    }

    #[test]
    fn test_walk_records_unknown_parent_and_stops() {
        let x = node("x", Layer::Cluster, PageType::Cluster, Some("missing"));
        let walk = walk_parents(&x, |_| None);
        assert!(!walk.exceeded);
        assert_eq!(walk.ancestors, vec!["missing"]);
    }
}
