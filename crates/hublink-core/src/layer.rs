//! Layers of the hub-and-spoke hierarchy.

use crate::error::ModelError;
use serde::{Deserialize, Serialize};

/// Number of layers in the hierarchy, and therefore the longest
/// parent chain a well-formed graph can contain.
pub const MAX_DEPTH: usize = 4;

/// Depth of a page in the linking hierarchy.
///
/// Serialized as the bare integer (0-3) so graph files stay readable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Layer {
    /// The homepage. Exactly one per graph.
    Root = 0,
    /// Primary anchors (city pages).
    Anchor = 1,
    /// Service clusters hanging off an anchor.
    Cluster = 2,
    /// Conversion pages, reachable from everywhere.
    Conversion = 3,
}

impl Layer {
    pub const ALL: [Layer; 4] = [Layer::Root, Layer::Anchor, Layer::Cluster, Layer::Conversion];

    /// Returns the numeric depth.
    pub fn depth(self) -> u8 {
        self as u8
    }

    /// The layer a parent of this layer must sit on, if parents are allowed.
    pub fn parent_layer(self) -> Option<Layer> {
        match self {
            Layer::Anchor => Some(Layer::Root),
            Layer::Cluster => Some(Layer::Anchor),
            Layer::Root | Layer::Conversion => None,
        }
    }

    /// Whether pages on this layer must declare a parent.
    pub fn requires_parent(self) -> bool {
        self.parent_layer().is_some()
    }
}

impl TryFrom<u8> for Layer {
    type Error = ModelError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Layer::Root),
            1 => Ok(Layer::Anchor),
            2 => Ok(Layer::Cluster),
            3 => Ok(Layer::Conversion),
            other => Err(ModelError::InvalidLayer(other)),
        }
    }
}

impl From<Layer> for u8 {
    fn from(layer: Layer) -> Self {
        layer.depth()
    }
}

impl std::fmt::Display for Layer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.depth())
    }
}

/// What kind of page a node represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageType {
    Homepage,
    City,
    Cluster,
    Conversion,
}

impl PageType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PageType::Homepage => "homepage",
            PageType::City => "city",
            PageType::Cluster => "cluster",
            PageType::Conversion => "conversion",
        }
    }
}

impl std::str::FromStr for PageType {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "homepage" | "home" => Ok(PageType::Homepage),
            "city" => Ok(PageType::City),
            "cluster" => Ok(PageType::Cluster),
            "conversion" => Ok(PageType::Conversion),
            _ => Err(ModelError::UnknownPageType(s.to_string())),
        }
    }
}

impl std::fmt::Display for PageType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
