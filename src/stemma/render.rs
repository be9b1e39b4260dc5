//! Presentation helpers over the built tree.
//!
//! Both renderers consume only the public tree shape — id, attributes,
//! ordered children — and never touch the construction machinery, so they
//! can be replaced or ignored by callers with their own presentation layer.

use crate::model::NodeId;
use crate::tree::{Tree, TreeNode};
use serde_json::Value;
use std::fmt::Write;

/// Display name of a node: its `name` attribute, or the id as fallback.
fn display_name(node: &TreeNode) -> String {
    node.record
        .name()
        .map(str::to_owned)
        .unwrap_or_else(|| node.id.to_string())
}

/// Flatten the tree into indented lines, pre-order, suitable as values for
/// a selection widget.
pub fn indented_listing(tree: &Tree, indent: &str) -> Vec<(NodeId, String)> {
    tree.walk()
        .map(|(depth, node)| {
            let line = format!("{}{}", indent.repeat(depth), display_name(node));
            (node.id.clone(), line)
        })
        .collect()
}

/// Options for [`html_list`].
#[derive(Debug, Clone)]
pub struct HtmlListOptions {
    /// Prefix for every link target.
    pub link_base: String,
    /// CSS class on the outermost `<ul>`.
    pub class: String,
    /// Id whose entry is wrapped in `<strong>`.
    pub highlight: Option<NodeId>,
    /// Attribute that, when truthy on a record, also wraps its entry in
    /// `<strong>`.
    pub highlight_flag: Option<String>,
    /// Attribute that, when truthy on a record, wraps its entry in `<span>`
    /// so a stylesheet can de-emphasize it.
    pub hide_flag: Option<String>,
}

impl Default for HtmlListOptions {
    fn default() -> Self {
        HtmlListOptions {
            link_base: String::new(),
            class: "hierarchicallisting".to_string(),
            highlight: None,
            highlight_flag: None,
            hide_flag: None,
        }
    }
}

/// Whether `name` is present on the record with a truthy value: `true`, a
/// non-zero number, or a non-empty string, array, or object.
fn flag_set(node: &TreeNode, name: Option<&str>) -> bool {
    let Some(value) = name.and_then(|name| node.record.attr(name)) else {
        return false;
    };
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64() != Some(0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}

/// Render the tree as nested `<ul>`/`<li>` markup.
///
/// Each entry links to `link_base` + the record's `_url` attribute when
/// present, else `link_base` + `moniker`-or-id + `/`. A `_class` attribute
/// becomes the anchor's class. Names are HTML-escaped.
pub fn html_list(tree: &Tree, options: &HtmlListOptions) -> String {
    let mut out = String::new();
    write_level(tree, &[tree.root()], options, 0, &mut out);
    out
}

fn write_level(
    tree: &Tree,
    nodes: &[&TreeNode],
    options: &HtmlListOptions,
    depth: usize,
    out: &mut String,
) {
    let pad = "\t".repeat(depth);
    if depth == 0 {
        let _ = writeln!(out, "{pad}<ul class=\"{}\">", escape(&options.class));
    } else {
        let _ = writeln!(out, "{pad}<ul>");
    }

    for &node in nodes {
        let mut label = escape(&display_name(node));
        if options.highlight.as_ref() == Some(&node.id)
            || flag_set(node, options.highlight_flag.as_deref())
        {
            label = format!("<strong>{label}</strong>");
        }
        if flag_set(node, options.hide_flag.as_deref()) {
            label = format!("<span>{label}</span>");
        }

        let target = match node.record.attr_str("_url") {
            Some(url) => url.to_string(),
            None => {
                let slug = node.record.attr_str("moniker").unwrap_or(node.id.as_str());
                format!("{slug}/")
            }
        };
        let class_attr = node
            .record
            .attr_str("_class")
            .map(|class| format!(" class=\"{}\"", escape(class)))
            .unwrap_or_default();

        let _ = write!(
            out,
            "{pad}\t<li><a{class_attr} href=\"{}{}\">{label}</a>",
            escape(&options.link_base),
            escape(&target)
        );

        let children: Vec<&TreeNode> = tree.children(node).collect();
        if children.is_empty() {
            out.push_str("</li>\n");
        } else {
            out.push('\n');
            write_level(tree, &children, options, depth + 2, out);
            let _ = writeln!(out, "{pad}\t</li>");
        }
    }

    let _ = writeln!(out, "{pad}</ul>");
}

/// Minimal HTML escaping for text and attribute contexts.
pub fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}
