use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "stemma")]
#[command(about = "Build and query a rooted tree from flat, parent-linked records", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// JSON file mapping ids to records (object order is child order)
    #[arg(short, long)]
    pub file: PathBuf,

    /// Force the root to a specific id instead of resolving it
    #[arg(short, long)]
    pub root: Option<String>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the whole hierarchy as an indented listing (the default)
    #[command(alias = "ls")]
    Tree,

    /// List the immediate children of a node
    #[command(alias = "c")]
    Children {
        /// Node id (defaults to the root)
        id: Option<String>,
    },

    /// List a node's ancestors, nearest first
    #[command(alias = "up")]
    Ancestors {
        id: String,

        /// Include the node itself ahead of its ancestors
        #[arg(long)]
        include_current: bool,
    },

    /// List a node's entire subtree
    #[command(alias = "down")]
    Descendants { id: String },

    /// List a node's family: itself, descendants, and ancestors
    Family {
        id: String,

        /// Leave the ancestor chain out
        #[arg(long)]
        no_ancestors: bool,
    },

    /// Find the nearest ancestor with a given attribute value
    Nearest {
        id: String,

        /// Attribute name to test
        attribute: String,

        /// Value to match (parsed as JSON, else taken as a string)
        value: String,

        /// Fall back to the root when nothing matches
        #[arg(long)]
        root_if_none: bool,

        /// Consider the node itself before its ancestors
        #[arg(long)]
        include_current: bool,
    },

    /// Render the hierarchy as nested HTML lists
    Html {
        /// Prefix for every link target
        #[arg(long, default_value = "")]
        link_base: String,

        /// CSS class on the outermost list
        #[arg(long, default_value = "hierarchicallisting")]
        class: String,

        /// Id to wrap in <strong>
        #[arg(long)]
        highlight: Option<String>,

        /// Attribute that bolds an entry when truthy
        #[arg(long)]
        highlight_flag: Option<String>,

        /// Attribute that wraps an entry in <span> when truthy
        #[arg(long)]
        hide_flag: Option<String>,
    },
}
