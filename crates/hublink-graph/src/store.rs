//! Reading and writing graph and config files.
//!
//! A graph file is `{ "nodes": [ ... ] }` with the page fields in
//! camelCase. Loading always goes through [`GraphBuilder`], so a file
//! that loads is a graph that validated.

use crate::builder::GraphBuilder;
use crate::config::LinkingConfig;
use crate::error::GraphError;
use crate::graph::SiteGraph;
use hublink_core::PageNode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

/// The Vulpine Homes site graph, bundled at compile time.
const BUILTIN_GRAPH: &str = include_str!("../data/vulpine-site.json");

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid graph: {0}")]
    Graph(#[from] GraphError),
}

/// On-disk shape of a site graph.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphFile {
    pub nodes: Vec<PageNode>,
}

impl GraphFile {
    /// Snapshot of a built graph, in declaration order.
    pub fn from_graph(graph: &SiteGraph) -> Self {
        Self {
            nodes: graph.nodes().cloned().collect(),
        }
    }

    /// Validates the pages into a graph.
    pub fn build(self, config: &LinkingConfig) -> Result<SiteGraph, GraphError> {
        let mut builder = GraphBuilder::from_config(config);
        builder.add_nodes(self.nodes);
        builder.build()
    }
}

/// Parses and validates a graph from JSON text.
pub fn parse_graph(json: &str, config: &LinkingConfig) -> Result<SiteGraph, StoreError> {
    let file: GraphFile = serde_json::from_str(json)?;
    Ok(file.build(config)?)
}

/// Loads and validates a graph file.
pub fn load_graph<P: AsRef<Path>>(path: P, config: &LinkingConfig) -> Result<SiteGraph, StoreError> {
    let path = path.as_ref();
    debug!(path = %path.display(), "loading site graph");
    let json = fs::read_to_string(path)?;
    parse_graph(&json, config)
}

/// Writes a graph file.
pub fn save_graph<P: AsRef<Path>>(path: P, graph: &SiteGraph) -> Result<(), StoreError> {
    let json = serde_json::to_string_pretty(&GraphFile::from_graph(graph))?;
    fs::write(path, json)?;
    Ok(())
}

/// Loads a config file. Missing fields take their defaults.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<LinkingConfig, StoreError> {
    let json = fs::read_to_string(path)?;
    Ok(LinkingConfig::from_json_str(&json)?)
}

/// Writes a config file.
pub fn save_config<P: AsRef<Path>>(path: P, config: &LinkingConfig) -> Result<(), StoreError> {
    fs::write(path, serde_json::to_string_pretty(config)?)?;
    Ok(())
}

impl SiteGraph {
    /// The bundled Vulpine Homes graph under the default config.
    pub fn builtin() -> Result<Self, StoreError> {
        Self::builtin_with(&LinkingConfig::default())
    }

    /// The bundled Vulpine Homes graph under the given config.
    pub fn builtin_with(config: &LinkingConfig) -> Result<Self, StoreError> {
        parse_graph(BUILTIN_GRAPH, config)
    }
}
