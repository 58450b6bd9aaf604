//! Hublink Graph - Internal-linking architecture
//!
//! This crate holds a site's pages as a layered graph (homepage, city
//! anchors, service clusters, conversion page) and answers the questions
//! a page template asks when it renders links:
//!
//! - which pages do I link to, and in which context?
//! - in what order, and how many?
//! - what text goes inside each link?
//! - what is my breadcrumb trail?
//! - which sections does my page type render?
//!
//! # Architecture
//!
//! The graph uses petgraph internally with an id index for constant-time
//! lookups. It is built once by [`GraphBuilder`], which refuses
//! structurally invalid configuration, and is read-only afterwards.
//! Every query is a pure function of the graph and its arguments.
//!
//! # Example
//!
//! ```
//! use hublink_graph::SiteGraph;
//! use hublink_core::LinkContext;
//!
//! let graph = SiteGraph::builtin().unwrap();
//!
//! let links = graph.relationships("phoenix");
//! for target in graph.rank_and_truncate(&links.downward, 6) {
//!     let text = graph.select_anchor_text("phoenix", &target.id, LinkContext::Downward);
//!     println!("<a href=\"{}\">{}</a>", target.url, text);
//! }
//! ```

mod anchor;
mod breadcrumb;
mod builder;
mod config;
mod edge;
mod error;
mod graph;
mod layout;
mod planner;
mod ranking;
mod relationships;
mod validation;

pub mod store;

#[cfg(test)]
pub(crate) mod test_support;

pub use anchor::{anchor_hash, anchor_key, category_for, select_variant, AnchorText, AnchorVariant};
pub use builder::GraphBuilder;
pub use config::{
    LinkingConfig, SectionLimits, ValidationPolicy, DEFAULT_CONVERSION_NODE, DEFAULT_HIGH_PRIORITY,
};
pub use edge::{Edge, EdgeKind, GraphEdge};
pub use error::GraphError;
pub use graph::{GraphStats, NodeId, SiteGraph};
pub use layout::{section_title, BackLinkTarget, Layout, SectionOrder, SectionRule, HOMEPAGE_TITLE};
pub use planner::{BackLink, Crumb, LinkPlanner, LinkSection, PagePlan, PlannedLink};
pub use ranking::rank_nodes;
pub use relationships::Relationships;
pub use store::{GraphFile, StoreError};
pub use validation::{ConsistencyIssue, ValidationReport};
