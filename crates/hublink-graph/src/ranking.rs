//! Priority ranking of link candidates.

use crate::graph::SiteGraph;
use hublink_core::PageNode;

/// Sorts pages by priority, highest first, and keeps at most `max_count`.
///
/// The sort is stable: pages of equal priority keep their input order.
pub fn rank_nodes(mut nodes: Vec<&PageNode>, max_count: usize) -> Vec<&PageNode> {
    nodes.sort_by(|a, b| b.priority().cmp(&a.priority()));
    nodes.truncate(max_count);
    nodes
}

impl SiteGraph {
    /// Resolves candidate ids, silently drops unknown ones, then ranks
    /// and truncates with [`rank_nodes`].
    pub fn rank_and_truncate<S: AsRef<str>>(&self, ids: &[S], max_count: usize) -> Vec<&PageNode> {
        let nodes = ids.iter().filter_map(|id| self.get(id.as_ref())).collect();
        rank_nodes(nodes, max_count)
    }

    /// Pages with priority at least `min_priority`, in declaration order.
    pub fn high_priority_nodes(&self, min_priority: u8) -> Vec<&PageNode> {
        self.nodes()
            .filter(|node| node.priority() >= min_priority)
            .collect()
    }
}
