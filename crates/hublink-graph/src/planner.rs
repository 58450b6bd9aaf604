//! Link planning: everything a page template needs to render its links.
//!
//! The planner composes relationship resolution, ranking, anchor-text
//! selection and breadcrumbs into plain data. It produces no markup.

use crate::anchor::AnchorText;
use crate::config::{LinkingConfig, SectionLimits};
use crate::graph::SiteGraph;
use crate::layout::{section_title, BackLinkTarget, Layout, SectionOrder, SectionRule};
use hublink_core::{AnchorCategory, LinkContext, PageNode};
use serde::Serialize;

/// One link, ready to render as `<a href title>text</a>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlannedLink {
    pub target_id: String,
    pub href: String,
    /// `"{name} - {description}"`.
    pub title: String,
    pub text: String,
    pub category: AnchorCategory,
    /// Extra lines such as `"ZIPs: 85051, 85053, 85083..."`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub details: Vec<String>,
}

/// A titled group of links sharing one context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkSection {
    pub context: LinkContext,
    pub title: &'static str,
    pub links: Vec<PlannedLink>,
}

/// One entry of a breadcrumb trail. The last entry is the current page
/// and has no href.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Crumb {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
}

/// A "Back to {name}" link shown above a page's sections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BackLink {
    pub label: String,
    pub link: PlannedLink,
}

/// All links for one page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PagePlan {
    pub node: String,
    pub layout: Layout,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub breadcrumb: Vec<Crumb>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub back_link: Option<BackLink>,
    pub sections: Vec<LinkSection>,
}

impl PagePlan {
    pub fn section(&self, context: LinkContext) -> Option<&LinkSection> {
        self.sections.iter().find(|s| s.context == context)
    }
}

/// Plans links against a built graph.
#[derive(Debug, Clone, Copy)]
pub struct LinkPlanner<'g> {
    graph: &'g SiteGraph,
    limits: SectionLimits,
    page_layouts: bool,
    detail_preview: usize,
}

impl<'g> LinkPlanner<'g> {
    pub fn new(graph: &'g SiteGraph, config: &LinkingConfig) -> Self {
        Self {
            graph,
            limits: config.sections,
            page_layouts: config.page_layouts,
            detail_preview: config.detail_preview,
        }
    }

    /// Plans a single link. Returns `None` when `to` is unknown.
    pub fn link(&self, from: &str, to: &str, context: LinkContext) -> Option<PlannedLink> {
        let target = self.graph.get(to)?;
        match self.graph.select_anchor_text(from, to, context) {
            AnchorText::Variant(variant) => Some(self.planned(target, variant.text, variant.category)),
            AnchorText::Fallback { .. } => None,
        }
    }

    /// Plans one section of up to `max_links` links, best-ranked first.
    pub fn section(&self, from: &str, context: LinkContext, max_links: usize) -> LinkSection {
        self.section_for(
            from,
            SectionRule {
                context,
                title: section_title(context),
                order: SectionOrder::Ranked(max_links),
            },
        )
    }

    fn section_for(&self, from: &str, rule: SectionRule) -> LinkSection {
        let relationships = self.graph.relationships(from);
        let declared = relationships.get(rule.context);
        let targets: Vec<&str> = match rule.order {
            SectionOrder::Ranked(max_links) => self
                .graph
                .rank_and_truncate(declared, max_links)
                .into_iter()
                .map(|node| node.id.as_str())
                .collect(),
            SectionOrder::Declared => declared.to_vec(),
        };

        LinkSection {
            context: rule.context,
            title: rule.title,
            links: targets
                .into_iter()
                .filter_map(|target| self.link(from, target, rule.context))
                .collect(),
        }
    }

    /// The layout `page` uses for a node.
    pub fn layout_for(&self, node: &PageNode) -> Layout {
        if self.page_layouts {
            Layout::for_page_type(node.page_type)
        } else {
            Layout::Contextual
        }
    }

    /// Breadcrumb trail for a page, ending with the page itself. Empty for
    /// the root and for unknown ids.
    pub fn breadcrumb(&self, id: &str) -> Vec<Crumb> {
        let Some(node) = self.graph.get(id) else {
            return Vec::new();
        };
        if node.is_root() {
            return Vec::new();
        }

        let mut trail: Vec<Crumb> = self
            .graph
            .breadcrumb_nodes(id)
            .into_iter()
            .map(|ancestor| Crumb {
                id: ancestor.id.clone(),
                name: ancestor.name.clone(),
                href: Some(ancestor.url.clone()),
            })
            .collect();
        trail.push(Crumb {
            id: node.id.clone(),
            name: node.name.clone(),
            href: None,
        });
        trail
    }

    /// Plans a page with the layout of its page type (see `layout_for`).
    /// Unknown ids yield `None`.
    pub fn page(&self, id: &str) -> Option<PagePlan> {
        let node = self.graph.get(id)?;
        self.page_with_layout(id, self.layout_for(node))
    }

    /// Plans a page with an explicit layout.
    ///
    /// Sections come in the layout's order and empty ones are left out.
    /// The root never gets an upward section.
    pub fn page_with_layout(&self, id: &str, layout: Layout) -> Option<PagePlan> {
        let node = self.graph.get(id)?;

        let sections = layout
            .sections(&self.limits)
            .into_iter()
            .filter(|rule| !(node.is_root() && rule.context == LinkContext::Upward))
            .map(|rule| self.section_for(id, rule))
            .filter(|section| !section.links.is_empty())
            .collect();

        let breadcrumb = if layout.has_breadcrumb() {
            self.breadcrumb(id)
        } else {
            Vec::new()
        };

        Some(PagePlan {
            node: node.id.clone(),
            layout,
            breadcrumb,
            back_link: layout.back_link().and_then(|target| self.back_link(node, target)),
            sections,
        })
    }

    fn back_link(&self, node: &PageNode, target: BackLinkTarget) -> Option<BackLink> {
        let target = match target {
            BackLinkTarget::Root => self.graph.root(),
            BackLinkTarget::Parent => self.graph.get(node.parent.as_deref()?)?,
        };
        if target.id == node.id {
            return None;
        }

        let link = self.link(&node.id, &target.id, LinkContext::Upward)?;
        Some(BackLink {
            label: format!("Back to {}", target.name),
            link,
        })
    }

    fn planned(&self, target: &PageNode, text: &str, category: AnchorCategory) -> PlannedLink {
        let mut details = Vec::new();
        if let Some(zips) = &target.metadata.zip_coverage {
            details.push(format!("ZIPs: {}", preview(zips, self.detail_preview)));
        }
        if let Some(cities) = &target.metadata.cities {
            details.push(format!("Cities: {}", preview(cities, self.detail_preview)));
        }

        PlannedLink {
            target_id: target.id.clone(),
            href: target.url.clone(),
            title: format!("{} - {}", target.name, target.metadata.description),
            text: text.to_string(),
            category,
            details,
        }
    }
}

/// Joins the first `limit` items, appending `...` when some were cut.
fn preview(items: &[String], limit: usize) -> String {
    let shown = items[..items.len().min(limit)].join(", ");
    if items.len() > limit {
        format!("{shown}...")
    } else {
        shown
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::GraphBuilder;
    use crate::layout::HOMEPAGE_TITLE;
    use crate::test_support::{node, quote};
    use hublink_core::{Layer, PageType};

    fn graph() -> SiteGraph {
        GraphBuilder::new()
            .with_conversion_node("quote")
            .add_node(
                node("home", Layer::Root, PageType::Homepage, None)
                    .with_children(["east", "west"]),
            )
            .add_node(
                node("east", Layer::Anchor, PageType::City, Some("home"))
                    .with_children(["east-hills"])
                    .with_siblings(["west", "globe"])
                    .with_priority(8)
                    .with_cities(["Mesa", "Chandler", "Tempe", "Gilbert"]),
            )
            .add_node(
                node("west", Layer::Anchor, PageType::City, Some("home"))
                    .with_siblings(["east"])
                    .with_zip_coverage(["85301", "85302"]),
            )
            .add_node(node("east-hills", Layer::Cluster, PageType::Cluster, Some("east")))
            .add_node(quote("quote"))
            .build()
            .unwrap()
    }

    #[test]
    fn test_preview() {
        let items: Vec<String> = ["a", "b", "c", "d"].iter().map(|s| s.to_string()).collect();
        assert_eq!(preview(&items, 3), "a, b, c...");
        assert_eq!(preview(&items, 4), "a, b, c, d");
        assert_eq!(preview(&items[..2], 3), "a, b");
    }

    #[test]
    fn test_link_fields() {
        let graph = graph();
        let planner = LinkPlanner::new(&graph, &LinkingConfig::default());

        let link = planner.link("home", "east", LinkContext::Downward).unwrap();
        assert_eq!(link.target_id, "east");
        assert_eq!(link.href, "/east");
        assert_eq!(link.title, "East - East page");
        assert_eq!(
            link.text,
            graph.select_anchor_text("home", "east", LinkContext::Downward).as_str()
        );
        assert_eq!(link.details, vec!["Cities: Mesa, Chandler, Tempe..."]);

        let link = planner.link("east", "west", LinkContext::Sideways).unwrap();
        assert_eq!(link.details, vec!["ZIPs: 85301, 85302"]);

        assert!(planner.link("east", "globe", LinkContext::Sideways).is_none());
    }

    #[test]
    fn test_section_ranks_and_truncates() {
        let graph = graph();
        let planner = LinkPlanner::new(&graph, &LinkingConfig::default());

        let section = planner.section("home", LinkContext::Downward, 1);
        assert_eq!(section.title, "Service Areas");
        let targets: Vec<_> = section.links.iter().map(|l| l.target_id.as_str()).collect();
        assert_eq!(targets, vec!["east"]);

        // the dangling "globe" sibling is dropped
        let section = planner.section("east", LinkContext::Sideways, 6);
        assert_eq!(section.links.len(), 1);
    }

    #[test]
    fn test_breadcrumb_trail() {
        let graph = graph();
        let planner = LinkPlanner::new(&graph, &LinkingConfig::default());

        let trail = planner.breadcrumb("east-hills");
        let names: Vec<_> = trail.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Home", "East", "East-hills"]);
        assert_eq!(trail[0].href.as_deref(), Some("/home"));
        assert_eq!(trail[2].href, None);

        assert!(planner.breadcrumb("home").is_empty());
        assert!(planner.breadcrumb("nowhere").is_empty());
    }

    #[test]
    fn test_city_layout() {
        let graph = graph();
        let planner = LinkPlanner::new(&graph, &LinkingConfig::default());

        let plan = planner.page("east").unwrap();
        assert_eq!(plan.layout, Layout::CityAnchor);
        assert!(plan.breadcrumb.is_empty());

        let back = plan.back_link.as_ref().unwrap();
        assert_eq!(back.label, "Back to Home");
        assert_eq!(back.link.target_id, "home");

        let titles: Vec<_> = plan.sections.iter().map(|s| (s.context, s.title)).collect();
        assert_eq!(
            titles,
            vec![
                (LinkContext::Downward, "Service Areas & Communities"),
                (LinkContext::Sideways, "Nearby Cities"),
            ]
        );
        assert!(plan.section(LinkContext::Conversion).is_none());
    }

    #[test]
    fn test_cluster_layout() {
        let graph = graph();
        let planner = LinkPlanner::new(&graph, &LinkingConfig::default());

        let plan = planner.page("east-hills").unwrap();
        assert_eq!(plan.layout, Layout::Cluster);
        assert_eq!(plan.back_link.as_ref().unwrap().label, "Back to East");

        // no siblings, so only the parent city section remains
        assert_eq!(plan.sections.len(), 1);
        let upward = &plan.sections[0];
        assert_eq!(upward.title, "City-Level Services");
        assert_eq!(upward.links[0].target_id, "east");
    }

    #[test]
    fn test_homepage_layout_keeps_declared_order() {
        let graph = graph();
        let mut config = LinkingConfig::default();
        config.sections.downward = 1;
        let planner = LinkPlanner::new(&graph, &config);

        let plan = planner.page("home").unwrap();
        assert_eq!(plan.layout, Layout::Homepage);
        assert!(plan.breadcrumb.is_empty());
        assert!(plan.back_link.is_none());
        assert_eq!(plan.sections.len(), 1);

        // every child is listed; the contextual downward limit does not apply
        let section = &plan.sections[0];
        assert_eq!(section.title, HOMEPAGE_TITLE);
        let targets: Vec<_> = section.links.iter().map(|l| l.target_id.as_str()).collect();
        assert_eq!(targets, vec!["east", "west"]);
    }

    #[test]
    fn test_contextual_layout() {
        let graph = graph();
        let config = LinkingConfig {
            page_layouts: false,
            ..LinkingConfig::default()
        };
        let planner = LinkPlanner::new(&graph, &config);

        let plan = planner.page("east").unwrap();
        assert_eq!(plan.layout, Layout::Contextual);
        assert!(plan.back_link.is_none());
        let contexts: Vec<_> = plan.sections.iter().map(|s| s.context).collect();
        assert_eq!(contexts, LinkContext::ALL.to_vec());
        assert_eq!(plan.breadcrumb.len(), 2);

        let conversion = plan.section(LinkContext::Conversion).unwrap();
        assert_eq!(conversion.title, "Get Started");
        assert_eq!(conversion.links[0].target_id, "quote");
        assert_eq!(conversion.links[0].category, AnchorCategory::Exact);

        let plan = planner.page("home").unwrap();
        assert!(plan.section(LinkContext::Upward).is_none());
    }

    #[test]
    fn test_conversion_page_and_unknown_ids() {
        let graph = graph();
        let planner = LinkPlanner::new(&graph, &LinkingConfig::default());

        let plan = planner.page("quote").unwrap();
        assert_eq!(plan.layout, Layout::Contextual);
        assert!(plan.sections.is_empty());
        assert_eq!(plan.breadcrumb.len(), 2);

        assert!(planner.page("nowhere").is_none());
        assert!(planner.page_with_layout("nowhere", Layout::Cluster).is_none());
    }

    #[test]
    fn test_configured_limits_apply_to_contextual_layout() {
        let graph = graph();
        let mut config = LinkingConfig::default();
        config.sections.downward = 1;
        let planner = LinkPlanner::new(&graph, &config);

        let plan = planner.page_with_layout("home", Layout::Contextual).unwrap();
        assert_eq!(plan.section(LinkContext::Downward).unwrap().links.len(), 1);
    }
}
