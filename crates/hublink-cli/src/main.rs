//! Hublink CLI - Command-line interface for Hublink
//!
//! Inspect, validate and export a site's internal-linking graph, and
//! preview the links any page will render.

use clap::{Parser, Subcommand};
use colored::Colorize;
use hublink_core::LinkContext;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

#[derive(Parser)]
#[command(name = "hublink")]
#[command(author = "Hublink Contributors")]
#[command(version)]
#[command(about = "Internal-linking graph and anchor-text planner", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Site graph JSON file (defaults to the bundled Vulpine Homes graph)
    #[arg(short, long, global = true)]
    graph: Option<PathBuf>,

    /// Config file (defaults to ./hublink.json when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a default config (and optionally the bundled graph) to a directory
    Init {
        /// Directory to initialize (defaults to current directory)
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Also write the bundled graph as site-graph.json
        #[arg(long)]
        with_graph: bool,
    },

    /// Validate the graph and report consistency issues
    Validate {
        /// Fail on any consistency issue
        #[arg(long)]
        strict: bool,
    },

    /// Show one page
    Show {
        id: String,

        /// Output as JSON instead of formatted text
        #[arg(long)]
        json: bool,
    },

    /// List a page's link targets, ranked by priority
    Links {
        id: String,

        /// Only this context (upward, downward, sideways, conversion)
        #[arg(long)]
        context: Option<LinkContext>,

        /// Maximum links per context
        #[arg(short, long, default_value = "6")]
        limit: usize,
    },

    /// Select the anchor text for one link
    Anchor {
        from: String,
        to: String,
        context: LinkContext,

        /// Output as JSON instead of formatted text
        #[arg(long)]
        json: bool,
    },

    /// Print a page's breadcrumb path
    Breadcrumb { id: String },

    /// List pages on a layer (0-3)
    Layer {
        #[arg(value_parser = clap::value_parser!(u8).range(0..=3))]
        layer: u8,
    },

    /// List high-priority pages
    Priority {
        /// Minimum priority (defaults to the configured threshold)
        #[arg(short, long)]
        min: Option<u8>,
    },

    /// Plan every link section of a page
    Plan {
        id: String,

        /// Use the contextual layout instead of the page type's own
        #[arg(long)]
        contextual: bool,

        /// Output as JSON instead of formatted text
        #[arg(long)]
        json: bool,
    },

    /// Export the graph to JSON
    Export {
        /// Output file
        #[arg(short, long, default_value = "hublink-graph.json")]
        output: PathBuf,

        /// Write edges and stats instead of the loadable page list
        #[arg(long)]
        edges: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    // Set up logging
    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .with(tracing_subscriber::EnvFilter::new(filter))
        .init();

    let source = commands::Source {
        graph: cli.graph,
        config: cli.config,
    };

    let result = match cli.command {
        Commands::Init { path, with_graph } => commands::init(&path, with_graph),
        Commands::Validate { strict } => commands::validate(&source, strict),
        Commands::Show { id, json } => commands::show(&source, &id, json),
        Commands::Links { id, context, limit } => commands::links(&source, &id, context, limit),
        Commands::Anchor {
            from,
            to,
            context,
            json,
        } => commands::anchor(&source, &from, &to, context, json),
        Commands::Breadcrumb { id } => commands::breadcrumb(&source, &id),
        Commands::Layer { layer } => commands::layer(&source, layer),
        Commands::Priority { min } => commands::priority(&source, min),
        Commands::Plan {
            id,
            contextual,
            json,
        } => commands::plan(&source, &id, contextual, json),
        Commands::Export { output, edges } => commands::export(&source, &output, edges),
    };

    if let Err(e) = result {
        eprintln!("{} {}", "error:".red().bold(), e);
        std::process::exit(1);
    }
}
