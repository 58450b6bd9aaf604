//! CLI command implementations.

use colored::Colorize;
use hublink_core::{Layer, LinkContext, PageNode};
use hublink_graph::store::{self, GraphFile};
use hublink_graph::{AnchorText, Layout, LinkPlanner, LinkingConfig, SiteGraph, ValidationPolicy};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

/// Config file picked up from the working directory.
const CONFIG_FILE: &str = "hublink.json";

/// Graph file written by `init --with-graph`.
const GRAPH_FILE: &str = "site-graph.json";

/// Where the graph and config come from.
pub struct Source {
    pub graph: Option<PathBuf>,
    pub config: Option<PathBuf>,
}

impl Source {
    /// Loads the config: the explicit path, else ./hublink.json, else defaults.
    fn config(&self) -> Result<LinkingConfig> {
        match &self.config {
            Some(path) => Ok(store::load_config(path)?),
            None if Path::new(CONFIG_FILE).exists() => {
                debug!("using {CONFIG_FILE} from the working directory");
                Ok(store::load_config(CONFIG_FILE)?)
            }
            None => Ok(LinkingConfig::default()),
        }
    }

    fn graph_with(&self, config: &LinkingConfig) -> Result<SiteGraph> {
        let graph = match &self.graph {
            Some(path) => store::load_graph(path, config)?,
            None => SiteGraph::builtin_with(config)?,
        };
        Ok(graph)
    }

    fn load(&self) -> Result<(SiteGraph, LinkingConfig)> {
        let config = self.config()?;
        let graph = self.graph_with(&config)?;
        Ok((graph, config))
    }
}

fn require<'g>(graph: &'g SiteGraph, id: &str) -> Result<&'g PageNode> {
    graph
        .get(id)
        .ok_or_else(|| format!("Page '{}' not found in graph", id).into())
}

fn print_node_line(node: &PageNode) {
    println!(
        "  {} {} {} {}",
        format!("[{}]", node.priority()).yellow(),
        node.id.cyan(),
        node.name,
        node.url.dimmed()
    );
}

/// Write a default config (and optionally the bundled graph).
pub fn init(path: &Path, with_graph: bool) -> Result<()> {
    fs::create_dir_all(path)?;

    let config_path = path.join(CONFIG_FILE);
    if config_path.exists() {
        println!("{} Already initialized", "✓".green());
    } else {
        store::save_config(&config_path, &LinkingConfig::default())?;
        println!("{} Wrote {}", "✓".green(), config_path.display());
    }

    if with_graph {
        let graph_path = path.join(GRAPH_FILE);
        store::save_graph(&graph_path, &SiteGraph::builtin()?)?;
        println!("{} Wrote {}", "✓".green(), graph_path.display());
        println!(
            "  Run {} to use it",
            format!("hublink --graph {} validate", graph_path.display()).cyan()
        );
    }

    Ok(())
}

/// Validate the graph and report consistency issues.
pub fn validate(source: &Source, strict: bool) -> Result<()> {
    let mut config = source.config()?;
    if strict {
        config.validation = ValidationPolicy::Strict;
    }

    let graph = match source.graph_with(&config) {
        Ok(graph) => graph,
        Err(e) => {
            println!("{} Graph rejected", "✗".red());
            return Err(e);
        }
    };

    let stats = graph.stats();
    println!(
        "{} {} pages, {} edges (layers: {} root, {} anchors, {} clusters, {} conversion)",
        "✓".green(),
        stats.node_count.to_string().cyan(),
        stats.edge_count.to_string().cyan(),
        stats.layers[0],
        stats.layers[1],
        stats.layers[2],
        stats.layers[3]
    );

    let report = graph.report();
    if report.is_clean() {
        println!("{} No consistency issues", "✓".green());
    } else {
        println!("\n{} {} consistency issues:", "⚠".yellow(), report.len());
        for issue in &report.issues {
            println!("  {}", issue);
        }
    }

    Ok(())
}

/// Show one page.
pub fn show(source: &Source, id: &str, json: bool) -> Result<()> {
    let (graph, _) = source.load()?;
    let node = require(&graph, id)?;

    if json {
        println!("{}", serde_json::to_string_pretty(node)?);
        return Ok(());
    }

    println!("{} {}", node.name.bold(), format!("({})", node.id).dimmed());
    println!("  url:      {}", node.url);
    println!("  layer:    {} ({})", node.layer, node.page_type);
    println!("  priority: {}", node.priority());
    if let Some(parent) = &node.parent {
        println!("  parent:   {}", parent);
    }
    if !node.metadata.description.is_empty() {
        println!("  {}", node.metadata.description.dimmed());
    }

    let variants = &node.anchor_text_variants;
    for (label, phrasings) in [
        ("exact", &variants.exact),
        ("partial", &variants.partial),
        ("branded", &variants.branded),
    ] {
        println!("  {:<8}  {}", label.yellow(), phrasings.join(" | "));
    }

    let issues = graph.report().for_node(id);
    if !issues.is_empty() {
        println!("\n{} {} issue(s) involve this page:", "⚠".yellow(), issues.len());
        for issue in issues {
            println!("  {}", issue);
        }
    }

    Ok(())
}

/// List a page's link targets, ranked by priority.
pub fn links(source: &Source, id: &str, only: Option<LinkContext>, limit: usize) -> Result<()> {
    let (graph, _) = source.load()?;
    require(&graph, id)?;

    let relationships = graph.relationships(id);
    let contexts = match only {
        Some(context) => vec![context],
        None => LinkContext::ALL.to_vec(),
    };

    for context in contexts {
        let declared = relationships.get(context);
        let ranked = graph.rank_and_truncate(declared, limit);

        println!(
            "{} {}",
            context.to_string().bold(),
            format!("({} declared, {} shown)", declared.len(), ranked.len()).dimmed()
        );
        for target in ranked {
            let text = graph.select_anchor_text(id, &target.id, context);
            println!(
                "  {} {} {}",
                format!("[{}]", target.priority()).yellow(),
                target.id.cyan(),
                format!("\"{}\"", text).green()
            );
        }
    }

    Ok(())
}

/// Select the anchor text for one link.
pub fn anchor(source: &Source, from: &str, to: &str, context: LinkContext, json: bool) -> Result<()> {
    let (graph, _) = source.load()?;
    let text = graph.select_anchor_text(from, to, context);

    if json {
        println!("{}", serde_json::to_string_pretty(&text)?);
        return Ok(());
    }

    match text {
        AnchorText::Variant(variant) => println!(
            "{} {}",
            variant.text.green(),
            format!("({} #{})", variant.category, variant.index).dimmed()
        ),
        AnchorText::Fallback { text } => println!(
            "{} {}",
            text.yellow(),
            "(fallback: unknown target)".dimmed()
        ),
    }

    Ok(())
}

/// Print a page's breadcrumb path.
pub fn breadcrumb(source: &Source, id: &str) -> Result<()> {
    let (graph, _) = source.load()?;
    let node = require(&graph, id)?;

    let mut trail: Vec<String> = graph
        .breadcrumb_nodes(id)
        .into_iter()
        .map(|ancestor| ancestor.name.clone())
        .collect();
    trail.push(node.name.bold().to_string());

    println!("{}", trail.join(" › "));
    Ok(())
}

/// List pages on a layer.
pub fn layer(source: &Source, layer: u8) -> Result<()> {
    let (graph, _) = source.load()?;
    let layer = Layer::try_from(layer)?;

    let nodes = graph.nodes_by_layer(layer);
    println!("Layer {} ({} pages):\n", layer, nodes.len());
    for node in nodes {
        print_node_line(node);
    }
    Ok(())
}

/// List high-priority pages.
pub fn priority(source: &Source, min: Option<u8>) -> Result<()> {
    let (graph, config) = source.load()?;
    let min = min.unwrap_or(config.high_priority_threshold);

    let nodes = graph.high_priority_nodes(min);
    println!("{} pages with priority >= {}:\n", nodes.len(), min);
    for node in nodes {
        print_node_line(node);
    }
    Ok(())
}

/// Plan every link section of a page.
pub fn plan(source: &Source, id: &str, contextual: bool, json: bool) -> Result<()> {
    let (graph, config) = source.load()?;
    let planner = LinkPlanner::new(&graph, &config);
    let plan = if contextual {
        planner.page_with_layout(id, Layout::Contextual)
    } else {
        planner.page(id)
    }
    .ok_or_else(|| format!("Page '{}' not found in graph", id))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&plan)?);
        return Ok(());
    }

    println!("{}", format!("layout: {:?}", plan.layout).dimmed());
    if !plan.breadcrumb.is_empty() {
        let names: Vec<&str> = plan.breadcrumb.iter().map(|c| c.name.as_str()).collect();
        println!("{}", names.join(" › ").dimmed());
    }
    if let Some(back) = &plan.back_link {
        println!("{} {}", format!("← {}", back.label).green(), back.link.href.cyan());
    }
    println!();

    for section in &plan.sections {
        println!("{} {}", section.title.bold(), format!("({})", section.context).dimmed());
        for link in &section.links {
            println!(
                "  {} {} {}",
                link.text.green(),
                "→".dimmed(),
                link.href.cyan()
            );
            for detail in &link.details {
                println!("      {}", detail.dimmed());
            }
        }
        println!();
    }

    Ok(())
}

/// Export the graph to JSON.
pub fn export(source: &Source, output: &Path, edges: bool) -> Result<()> {
    let (graph, _) = source.load()?;

    if edges {
        let export = serde_json::json!({
            "version": "1.0",
            "stats": graph.stats(),
            "edges": graph.export_edges(),
        });
        fs::write(output, serde_json::to_string_pretty(&export)?)?;
    } else {
        fs::write(output, serde_json::to_string_pretty(&GraphFile::from_graph(&graph))?)?;
    }

    println!("{} Exported to {}", "✓".green(), output.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_init_writes_config_and_graph() {
        let dir = tempdir().unwrap();
        init(dir.path(), true).unwrap();

        let config = store::load_config(dir.path().join(CONFIG_FILE)).unwrap();
        assert_eq!(config, LinkingConfig::default());

        let graph = store::load_graph(dir.path().join(GRAPH_FILE), &config).unwrap();
        assert_eq!(graph.node_count(), SiteGraph::builtin().unwrap().node_count());
    }

    #[test]
    fn test_source_prefers_explicit_paths() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("custom.json");
        fs::write(&config_path, r#"{"highPriorityThreshold": 9}"#).unwrap();

        let source = Source {
            graph: None,
            config: Some(config_path),
        };
        let (graph, config) = source.load().unwrap();
        assert_eq!(config.high_priority_threshold, 9);
        assert_eq!(graph.root().id, "homepage");
    }

    #[test]
    fn test_validate_strict_rejects_builtin() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("custom.json");
        fs::write(&config_path, "{}").unwrap();

        let source = Source {
            graph: None,
            config: Some(config_path),
        };
        assert!(validate(&source, false).is_ok());
        assert!(validate(&source, true).is_err());
    }

    #[test]
    fn test_plan_layouts() {
        let source = Source {
            graph: None,
            config: None,
        };
        assert!(plan(&source, "mesa", false, true).is_ok());
        assert!(plan(&source, "mesa", true, false).is_ok());
        assert!(plan(&source, "no-such-page", false, false).is_err());
    }

    #[test]
    fn test_export_edges() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("custom.json");
        fs::write(&config_path, "{}").unwrap();
        let output = dir.path().join("edges.json");

        let source = Source {
            graph: None,
            config: Some(config_path),
        };
        export(&source, &output, true).unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
        assert_eq!(value["stats"]["node_count"], 18);
        assert!(value["edges"].as_array().map_or(false, |e| !e.is_empty()));
    }
}
