//! Page nodes and their anchor-text vocabulary.

use crate::context::AnchorCategory;
use crate::layer::{Layer, PageType};
use serde::{Deserialize, Serialize};

pub const MIN_PRIORITY: u8 = 1;
pub const MAX_PRIORITY: u8 = 10;

/// Pre-approved link phrasings for a page when it is the target of a link.
///
/// Every list must be non-empty once the graph is built; the graph
/// builder rejects empty categories.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnchorTextVariants {
    pub exact: Vec<String>,
    pub partial: Vec<String>,
    pub branded: Vec<String>,
}

impl AnchorTextVariants {
    pub fn new(exact: Vec<String>, partial: Vec<String>, branded: Vec<String>) -> Self {
        Self {
            exact,
            partial,
            branded,
        }
    }

    /// Returns the phrasings for one category.
    pub fn get(&self, category: AnchorCategory) -> &[String] {
        match category {
            AnchorCategory::Exact => &self.exact,
            AnchorCategory::Partial => &self.partial,
            AnchorCategory::Branded => &self.branded,
        }
    }

    /// Categories with no phrasings at all.
    pub fn empty_categories(&self) -> Vec<AnchorCategory> {
        AnchorCategory::ALL
            .into_iter()
            .filter(|category| self.get(*category).is_empty())
            .collect()
    }
}

/// Descriptive payload shown next to a link. Only `priority` feeds
/// into any algorithm.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeMetadata {
    /// 1-10, higher wins when candidate lists are truncated.
    pub priority: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zip_coverage: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cities: Option<Vec<String>>,
    #[serde(default)]
    pub description: String,
}

impl Default for NodeMetadata {
    fn default() -> Self {
        Self {
            priority: MIN_PRIORITY,
            zip_coverage: None,
            cities: None,
            description: String::new(),
        }
    }
}

/// One addressable page in the site's link graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageNode {
    /// Unique key, also used in anchor hash keys.
    pub id: String,

    /// Human-readable label.
    pub name: String,

    /// Path the link points at.
    pub url: String,

    pub layer: Layer,

    #[serde(rename = "type")]
    pub page_type: PageType,

    /// Absent on the root and on conversion pages.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,

    /// Pages this one hands authority down to, in display order.
    #[serde(default)]
    pub children: Vec<String>,

    /// Lateral peers on the same layer, in display order.
    #[serde(default)]
    pub siblings: Vec<String>,

    pub anchor_text_variants: AnchorTextVariants,

    pub metadata: NodeMetadata,
}

impl PageNode {
    /// Creates a node with no edges, empty vocabulary and lowest priority.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        url: impl Into<String>,
        layer: Layer,
        page_type: PageType,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            url: url.into(),
            layer,
            page_type,
            parent: None,
            children: Vec::new(),
            siblings: Vec::new(),
            anchor_text_variants: AnchorTextVariants::default(),
            metadata: NodeMetadata::default(),
        }
    }

    pub fn with_parent(mut self, parent: impl Into<String>) -> Self {
        self.parent = Some(parent.into());
        self
    }

    pub fn with_children<I, S>(mut self, children: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.children = children.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_siblings<I, S>(mut self, siblings: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.siblings = siblings.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_variants(mut self, variants: AnchorTextVariants) -> Self {
        self.anchor_text_variants = variants;
        self
    }

    pub fn with_priority(mut self, priority: u8) -> Self {
        self.metadata.priority = priority;
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.metadata.description = description.into();
        self
    }

    pub fn with_zip_coverage<I, S>(mut self, zips: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.metadata.zip_coverage = Some(zips.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_cities<I, S>(mut self, cities: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.metadata.cities = Some(cities.into_iter().map(Into::into).collect());
        self
    }

    /// Shorthand for `metadata.priority`.
    pub fn priority(&self) -> u8 {
        self.metadata.priority
    }

    /// Whether this is the layer-0 homepage.
    pub fn is_root(&self) -> bool {
        self.layer == Layer::Root
    }

    /// Whether this is a terminal conversion page.
    pub fn is_conversion(&self) -> bool {
        self.layer == Layer::Conversion
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mesa() -> PageNode {
        PageNode::new("mesa", "Mesa", "/cabinet-refacing-mesa", Layer::Anchor, PageType::City)
            .with_parent("homepage")
            .with_siblings(["phoenix", "gilbert"])
            .with_variants(AnchorTextVariants::new(
                vec!["Cabinet Refacing Mesa".into()],
                vec!["Mesa kitchen experts".into(), "Mesa kitchen remodel".into()],
                vec![],
            ))
            .with_priority(9)
    }

    #[test]
    fn test_builder_methods() {
        let node = mesa();
        assert_eq!(node.parent.as_deref(), Some("homepage"));
        assert_eq!(node.siblings, vec!["phoenix", "gilbert"]);
        assert_eq!(node.priority(), 9);
        assert!(!node.is_root());
        assert!(!node.is_conversion());
    }

    #[test]
    fn test_empty_categories() {
        let node = mesa();
        assert_eq!(
            node.anchor_text_variants.empty_categories(),
            vec![AnchorCategory::Branded]
        );
        assert_eq!(node.anchor_text_variants.get(AnchorCategory::Partial).len(), 2);
    }

    #[test]
    fn test_deserialize_camel_case() {
        let json = r#"{
            "id": "north-phoenix",
            "name": "North Phoenix",
            "url": "/cabinet-refacing-north-phoenix",
            "layer": 2,
            "type": "cluster",
            "parent": "phoenix",
            "siblings": ["south-phoenix"],
            "anchorTextVariants": {
                "exact": ["Cabinet Refacing North Phoenix AZ"],
                "partial": ["North Phoenix kitchen solutions"],
                "branded": ["Vulpine North Phoenix"]
            },
            "metadata": {
                "priority": 7,
                "zipCoverage": ["85051", "85053"],
                "description": "North Phoenix cluster"
            }
        }"#;

        let node: PageNode = serde_json::from_str(json).unwrap();
        assert_eq!(node.layer, Layer::Cluster);
        assert_eq!(node.page_type, PageType::Cluster);
        assert!(node.children.is_empty());
        assert_eq!(
            node.metadata.zip_coverage,
            Some(vec!["85051".to_string(), "85053".to_string()])
        );
        assert_eq!(node.metadata.cities, None);
    }

    #[test]
    fn test_serialize_skips_absent_fields() {
        let node = PageNode::new("q", "Quote", "/quote", Layer::Conversion, PageType::Conversion);
        let value = serde_json::to_value(&node).unwrap();
        assert!(value.get("parent").is_none());
        assert!(value["metadata"].get("zipCoverage").is_none());
        assert_eq!(value["type"], "conversion");
        assert_eq!(value["layer"], 3);
    }
}
