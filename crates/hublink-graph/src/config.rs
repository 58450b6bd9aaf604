//! Linking configuration.
//!
//! Every field has a default, so an empty JSON object is a valid config.

use hublink_core::LinkContext;
use serde::{Deserialize, Serialize};

/// Id of the conversion page on the Vulpine Homes site.
pub const DEFAULT_CONVERSION_NODE: &str = "kitchen-quote";

/// Default `min_priority` for high-priority queries.
pub const DEFAULT_HIGH_PRIORITY: u8 = 7;

/// How consistency issues found at build time are treated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationPolicy {
    /// Log each issue and keep the graph as declared.
    #[default]
    Lenient,
    /// Refuse to build when any issue is found.
    Strict,
}

/// Maximum links rendered per section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SectionLimits {
    pub upward: usize,
    pub downward: usize,
    pub sideways: usize,
    pub conversion: usize,
}

impl Default for SectionLimits {
    fn default() -> Self {
        Self {
            upward: 1,
            downward: 6,
            sideways: 6,
            conversion: 1,
        }
    }
}

impl SectionLimits {
    pub fn limit(&self, context: LinkContext) -> usize {
        match context {
            LinkContext::Upward => self.upward,
            LinkContext::Downward => self.downward,
            LinkContext::Sideways => self.sideways,
            LinkContext::Conversion => self.conversion,
        }
    }
}

/// Settings shared by the graph builder and the link planner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LinkingConfig {
    /// The single conversion page every other page links to.
    pub conversion_node: String,

    pub validation: ValidationPolicy,

    pub high_priority_threshold: u8,

    /// Limits for the contextual layout.
    pub sections: SectionLimits,

    /// Plan each page with its page type's layout. When off, every page
    /// gets the contextual layout.
    pub page_layouts: bool,

    /// ZIP codes / cities listed in a link's detail line before eliding.
    pub detail_preview: usize,
}

impl Default for LinkingConfig {
    fn default() -> Self {
        Self {
            conversion_node: DEFAULT_CONVERSION_NODE.to_string(),
            validation: ValidationPolicy::default(),
            high_priority_threshold: DEFAULT_HIGH_PRIORITY,
            sections: SectionLimits::default(),
            page_layouts: true,
            detail_preview: 3,
        }
    }
}

impl LinkingConfig {
    /// Parses a config from JSON. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn strict(mut self) -> Self {
        self.validation = ValidationPolicy::Strict;
        self
    }
}
