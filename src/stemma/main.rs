use clap::Parser;
use colored::*;
use serde_json::Value;
use stemma::api::Hierarchy;
use stemma::error::Result;
use stemma::model::{NodeId, Record};
use stemma::render::{html_list, indented_listing, HtmlListOptions};
use stemma::store::FlatStore;
use tracing_subscriber::EnvFilter;

mod args;
use args::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("{} {}", "Error:".red(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let store = FlatStore::load_json_file(&cli.file)?;
    let hierarchy = match &cli.root {
        Some(root) => Hierarchy::build_with_root(store, NodeId::from(root.as_str()))?,
        None => Hierarchy::build(store)?,
    };

    match cli.command {
        Some(Commands::Tree) | None => handle_tree(&hierarchy),
        Some(Commands::Children { id }) => handle_children(&hierarchy, id),
        Some(Commands::Ancestors {
            id,
            include_current,
        }) => handle_ancestors(&hierarchy, id, include_current),
        Some(Commands::Descendants { id }) => handle_descendants(&hierarchy, id),
        Some(Commands::Family { id, no_ancestors }) => {
            handle_family(&hierarchy, id, !no_ancestors)
        }
        Some(Commands::Nearest {
            id,
            attribute,
            value,
            root_if_none,
            include_current,
        }) => handle_nearest(&hierarchy, id, attribute, value, root_if_none, include_current),
        Some(Commands::Html {
            link_base,
            class,
            highlight,
            highlight_flag,
            hide_flag,
        }) => handle_html(&hierarchy, link_base, class, highlight, highlight_flag, hide_flag),
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("stemma=debug")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn handle_tree(hierarchy: &Hierarchy) {
    for (id, line) in indented_listing(hierarchy.tree(), "    ") {
        println!("{}  {}", line, format!("({})", id).dimmed());
    }
}

fn handle_children(hierarchy: &Hierarchy, id: Option<String>) {
    let id = id.map(|raw| NodeId::from(raw.as_str()));
    match hierarchy.children_of(id.as_ref()) {
        None => println!("{}", "This hierarchy has no parent/child links.".dimmed()),
        Some(entries) if entries.is_empty() => println!("{}", "No children.".dimmed()),
        Some(entries) => {
            for entry in entries {
                println!("{}  {}", entry.id.to_string().yellow(), entry.name);
            }
        }
    }
}

fn handle_ancestors(hierarchy: &Hierarchy, id: String, include_current: bool) {
    let listing = hierarchy.ancestors(&NodeId::from(id.as_str()), include_current);
    print_listing(&listing, "No ancestors.");
}

fn handle_descendants(hierarchy: &Hierarchy, id: String) {
    let listing = hierarchy.descendants(&NodeId::from(id.as_str()));
    print_listing(&listing, "No descendants.");
}

fn handle_family(hierarchy: &Hierarchy, id: String, include_ancestors: bool) {
    let listing = hierarchy.family(&NodeId::from(id.as_str()), include_ancestors);
    print_listing(&listing, "No such node.");
}

fn handle_nearest(
    hierarchy: &Hierarchy,
    id: String,
    attribute: String,
    value: String,
    root_if_none: bool,
    include_current: bool,
) {
    // Try the value as JSON first so booleans and numbers compare as
    // themselves; fall back to a plain string.
    let value: Value =
        serde_json::from_str(&value).unwrap_or_else(|_| Value::String(value.clone()));

    let found = hierarchy.nearest_ancestor_with(
        &NodeId::from(id.as_str()),
        &attribute,
        &value,
        root_if_none,
        include_current,
    );
    match found {
        Some(node) => println!("{}", node.to_string().yellow()),
        None => println!("{}", "No matching ancestor.".dimmed()),
    }
}

fn handle_html(
    hierarchy: &Hierarchy,
    link_base: String,
    class: String,
    highlight: Option<String>,
    highlight_flag: Option<String>,
    hide_flag: Option<String>,
) {
    let options = HtmlListOptions {
        link_base,
        class,
        highlight: highlight.map(|raw| NodeId::from(raw.as_str())),
        highlight_flag,
        hide_flag,
    };
    print!("{}", html_list(hierarchy.tree(), &options));
}

fn print_listing(listing: &[(NodeId, Record)], empty_message: &str) {
    if listing.is_empty() {
        println!("{}", empty_message.dimmed());
        return;
    }
    for (id, record) in listing {
        let name = record
            .name()
            .map(str::to_owned)
            .unwrap_or_else(|| id.to_string());
        println!("{}  {}", id.to_string().yellow(), name);
    }
}
