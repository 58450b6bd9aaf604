//! Link contexts and anchor-text categories.

use crate::error::ModelError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The direction a link travels relative to the page that renders it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkContext {
    /// Child to parent (breadcrumb-like).
    Upward,
    /// Hub to spoke.
    Downward,
    /// Peer to peer on the same layer.
    Sideways,
    /// Any page to the conversion page.
    Conversion,
}

impl LinkContext {
    pub const ALL: [LinkContext; 4] = [
        LinkContext::Upward,
        LinkContext::Downward,
        LinkContext::Sideways,
        LinkContext::Conversion,
    ];

    /// The lowercase name. This string is part of the anchor hash key,
    /// so it must never change.
    pub fn as_str(&self) -> &'static str {
        match self {
            LinkContext::Upward => "upward",
            LinkContext::Downward => "downward",
            LinkContext::Sideways => "sideways",
            LinkContext::Conversion => "conversion",
        }
    }
}

impl std::fmt::Display for LinkContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LinkContext {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "upward" | "up" => Ok(LinkContext::Upward),
            "downward" | "down" => Ok(LinkContext::Downward),
            "sideways" | "side" => Ok(LinkContext::Sideways),
            "conversion" => Ok(LinkContext::Conversion),
            _ => Err(ModelError::UnknownContext(s.to_string())),
        }
    }
}

/// One of the three phrasings a target page offers for its anchor text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnchorCategory {
    /// Keyword-matching text.
    Exact,
    /// Descriptive text.
    Partial,
    /// Brand-name text.
    Branded,
}

impl AnchorCategory {
    pub const ALL: [AnchorCategory; 3] = [
        AnchorCategory::Exact,
        AnchorCategory::Partial,
        AnchorCategory::Branded,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AnchorCategory::Exact => "exact",
            AnchorCategory::Partial => "partial",
            AnchorCategory::Branded => "branded",
        }
    }
}

impl std::fmt::Display for AnchorCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AnchorCategory {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "exact" => Ok(AnchorCategory::Exact),
            "partial" => Ok(AnchorCategory::Partial),
            "branded" => Ok(AnchorCategory::Branded),
            _ => Err(ModelError::UnknownCategory(s.to_string())),
        }
    }
}
