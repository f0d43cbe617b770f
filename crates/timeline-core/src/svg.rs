// File: crates/timeline-core/src/svg.rs
// Summary: Markup serialization of scene subtrees (svg fragments, standalone svg, html pages).

use std::fmt::Write as _;

use crate::scene::{Document, NodeId};

const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// Format a number the way a browser stringifies it: `1`, `0.5`, `-3`, `NaN`, `Infinity`.
pub fn fmt_num(v: f64) -> String {
    if v.is_nan() {
        "NaN".to_string()
    } else if v.is_infinite() {
        if v > 0.0 { "Infinity" } else { "-Infinity" }.to_string()
    } else if v == 0.0 {
        "0".to_string()
    } else {
        format!("{v}")
    }
}

pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

/// Serialize `id` and its subtree.
pub fn to_markup(doc: &Document, id: NodeId) -> String {
    let mut out = String::new();
    write_node(doc, id, &mut out, None);
    out
}

/// Serialize an `svg` node as a standalone document (adds `xmlns`).
pub fn to_svg_document(doc: &Document, svg: NodeId) -> String {
    let mut out = String::from("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    write_node(doc, svg, &mut out, Some(SVG_NS));
    out.push('\n');
    out
}

/// Wrap the children of the document root in a minimal html page.
pub fn to_html_page(doc: &Document, title: &str) -> String {
    let mut out = String::new();
    let _ = write!(out, "<!DOCTYPE html>\n<html>\n<head><meta charset=\"utf-8\"><title>{}</title></head>\n<body>\n", escape(title));
    for &child in doc.children(doc.root()) {
        write_node(doc, child, &mut out, None);
        out.push('\n');
    }
    out.push_str("</body>\n</html>\n");
    out
}

fn write_node(doc: &Document, id: NodeId, out: &mut String, xmlns: Option<&str>) {
    let node = doc.node(id);
    let _ = write!(out, "<{}", node.tag);
    if let Some(ns) = xmlns {
        let _ = write!(out, " xmlns=\"{ns}\"");
    }
    for (k, v) in &node.attrs {
        let _ = write!(out, " {}=\"{}\"", k, escape(v));
    }
    if !node.styles.is_empty() {
        let style = node.styles.iter().map(|(k, v)| format!("{k}: {v};")).collect::<Vec<_>>().join(" ");
        let _ = write!(out, " style=\"{}\"", escape(&style));
    }
    if node.children.is_empty() && node.text.is_none() {
        out.push_str("/>");
        return;
    }
    out.push('>');
    if let Some(text) = &node.text {
        out.push_str(&escape(text));
    }
    for &child in &node.children {
        write_node(doc, child, out, None);
    }
    let _ = write!(out, "</{}>", node.tag);
}
