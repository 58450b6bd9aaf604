//! Page layouts: which link sections a page renders, with what titles
//! and limits.
//!
//! Each page type has its own layout. `Contextual` renders every context
//! with the configured limits and is used for conversion pages, or for
//! every page when page layouts are switched off.

use crate::config::SectionLimits;
use hublink_core::{LinkContext, PageType};
use serde::{Deserialize, Serialize};

/// Heading of the homepage's list of city anchors.
pub const HOMEPAGE_TITLE: &str = "Serving Greater Phoenix";

/// Which targets a section takes and in what order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionOrder {
    /// Best-ranked first, at most this many.
    Ranked(usize),
    /// Every declared target, in declaration order.
    Declared,
}

/// One section of a layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionRule {
    pub context: LinkContext,
    pub title: &'static str,
    pub order: SectionOrder,
}

impl SectionRule {
    const fn ranked(context: LinkContext, title: &'static str, max_links: usize) -> Self {
        Self {
            context,
            title,
            order: SectionOrder::Ranked(max_links),
        }
    }
}

/// Where a layout's "Back to ..." link points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackLinkTarget {
    Root,
    Parent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Layout {
    /// Every child of the homepage, as declared.
    Homepage,
    /// Back link to the root, then clusters and nearby cities.
    CityAnchor,
    /// Back link to the parent, nearby clusters and the parent city.
    Cluster,
    /// All four contexts with the configured limits, plus a breadcrumb.
    Contextual,
}

impl Layout {
    pub fn for_page_type(page_type: PageType) -> Self {
        match page_type {
            PageType::Homepage => Layout::Homepage,
            PageType::City => Layout::CityAnchor,
            PageType::Cluster => Layout::Cluster,
            PageType::Conversion => Layout::Contextual,
        }
    }

    /// Sections in render order. `limits` only applies to `Contextual`.
    pub fn sections(self, limits: &SectionLimits) -> Vec<SectionRule> {
        match self {
            Layout::Homepage => vec![SectionRule {
                context: LinkContext::Downward,
                title: HOMEPAGE_TITLE,
                order: SectionOrder::Declared,
            }],
            Layout::CityAnchor => vec![
                SectionRule::ranked(LinkContext::Downward, "Service Areas & Communities", 6),
                SectionRule::ranked(LinkContext::Sideways, "Nearby Cities", 6),
            ],
            Layout::Cluster => vec![
                SectionRule::ranked(LinkContext::Sideways, "Nearby Service Areas", 4),
                SectionRule::ranked(LinkContext::Upward, "City-Level Services", 1),
            ],
            Layout::Contextual => LinkContext::ALL
                .into_iter()
                .map(|context| {
                    SectionRule::ranked(context, section_title(context), limits.limit(context))
                })
                .collect(),
        }
    }

    pub fn back_link(self) -> Option<BackLinkTarget> {
        match self {
            Layout::CityAnchor => Some(BackLinkTarget::Root),
            Layout::Cluster => Some(BackLinkTarget::Parent),
            Layout::Homepage | Layout::Contextual => None,
        }
    }

    pub fn has_breadcrumb(self) -> bool {
        self == Layout::Contextual
    }
}

/// Heading of a `Contextual` section.
pub fn section_title(context: LinkContext) -> &'static str {
    match context {
        LinkContext::Upward => "Return to Parent Area",
        LinkContext::Downward => "Service Areas",
        LinkContext::Sideways => "Nearby Service Areas",
        LinkContext::Conversion => "Get Started",
    }
}
