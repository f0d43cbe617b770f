// File: crates/timeline-core/src/scene.rs
// Summary: Retained element tree (svg/html nodes with attributes, inline styles and text).
// Notes:
// - Nodes live in an arena owned by `Document` and are addressed by `NodeId`.
// - Nodes are never removed; a chart's subtree lives as long as the document.

use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(self) -> usize { self.0 }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Clone, Debug)]
pub struct Node {
    pub tag: String,
    pub attrs: Vec<(String, String)>,
    pub styles: Vec<(String, String)>,
    pub text: Option<String>,
    pub parent: Option<NodeId>,
    pub children: Vec<NodeId>,
}

impl Node {
    fn new(tag: &str, parent: Option<NodeId>) -> Self {
        Self { tag: tag.to_string(), attrs: Vec::new(), styles: Vec::new(), text: None, parent, children: Vec::new() }
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs.iter().find(|(k, _)| k == name).map(|(_, v)| v.as_str())
    }

    pub fn style(&self, name: &str) -> Option<&str> {
        self.styles.iter().find(|(k, _)| k == name).map(|(_, v)| v.as_str())
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.attr("class").is_some_and(|c| c.split_whitespace().any(|c| c == class))
    }
}

/// Element tree rooted at a `body` node.
#[derive(Clone, Debug)]
pub struct Document {
    nodes: Vec<Node>,
}

impl Default for Document {
    fn default() -> Self { Self::new() }
}

impl Document {
    pub fn new() -> Self {
        Self { nodes: vec![Node::new("body", None)] }
    }

    pub fn root(&self) -> NodeId { NodeId(0) }

    pub fn len(&self) -> usize { self.nodes.len() }

    pub fn is_empty(&self) -> bool { self.nodes.is_empty() }

    /// # Panics
    /// If `id` was not created by this document.
    pub fn node(&self, id: NodeId) -> &Node { &self.nodes[id.0] }

    fn node_mut(&mut self, id: NodeId) -> &mut Node { &mut self.nodes[id.0] }

    /// Append a new `tag` element as the last child of `parent`.
    pub fn append(&mut self, parent: NodeId, tag: &str) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node::new(tag, Some(parent)));
        self.node_mut(parent).children.push(id);
        id
    }

    /// Set (or replace) an attribute, keeping first-insertion order.
    pub fn set_attr(&mut self, id: NodeId, name: &str, value: impl Into<String>) -> &mut Self {
        set_pair(&mut self.node_mut(id).attrs, name, value.into());
        self
    }

    pub fn set_style(&mut self, id: NodeId, name: &str, value: impl Into<String>) -> &mut Self {
        set_pair(&mut self.node_mut(id).styles, name, value.into());
        self
    }

    pub fn set_text(&mut self, id: NodeId, text: impl Into<String>) -> &mut Self {
        self.node_mut(id).text = Some(text.into());
        self
    }

    pub fn attr(&self, id: NodeId, name: &str) -> Option<&str> { self.node(id).attr(name) }

    pub fn style(&self, id: NodeId, name: &str) -> Option<&str> { self.node(id).style(name) }

    pub fn text(&self, id: NodeId) -> Option<&str> { self.node(id).text.as_deref() }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> { self.node(id).parent }

    pub fn children(&self, id: NodeId) -> &[NodeId] { &self.node(id).children }

    /// All descendants of `id` in document order, excluding `id` itself.
    pub fn descendants(&self, id: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = self.children(id).iter().rev().copied().collect();
        while let Some(n) = stack.pop() {
            out.push(n);
            stack.extend(self.children(n).iter().rev().copied());
        }
        out
    }

    /// First node in the document matching `selector`.
    pub fn select(&self, selector: &str) -> Option<NodeId> {
        let sel = Selector::parse(selector)?;
        let root = self.root();
        std::iter::once(root).chain(self.descendants(root)).find(|&n| sel.matches(self.node(n)))
    }

    /// Descendants of `scope` matching `selector`, in document order.
    pub fn select_all(&self, scope: NodeId, selector: &str) -> Vec<NodeId> {
        match Selector::parse(selector) {
            Some(sel) => self.descendants(scope).into_iter().filter(|&n| sel.matches(self.node(n))).collect(),
            None => Vec::new(),
        }
    }

    /// Children of `scope` matching `selector`.
    pub fn select_children(&self, scope: NodeId, selector: &str) -> Vec<NodeId> {
        match Selector::parse(selector) {
            Some(sel) => self.children(scope).iter().copied().filter(|&n| sel.matches(self.node(n))).collect(),
            None => Vec::new(),
        }
    }
}

fn set_pair(pairs: &mut Vec<(String, String)>, name: &str, value: String) {
    match pairs.iter_mut().find(|(k, _)| k == name) {
        Some(slot) => slot.1 = value,
        None => pairs.push((name.to_string(), value)),
    }
}

/// Compound selector: optional tag, optional `#id`, any number of `.class`.
#[derive(Debug, Default, PartialEq)]
struct Selector {
    tag: Option<String>,
    id: Option<String>,
    classes: Vec<String>,
}

impl Selector {
    fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        if s.is_empty() || s.contains(char::is_whitespace) {
            return None;
        }
        let mut sel = Selector::default();
        let mut rest = s;
        let tag_end = rest.find(['#', '.']).unwrap_or(rest.len());
        if tag_end > 0 {
            sel.tag = Some(rest[..tag_end].to_string());
        }
        rest = &rest[tag_end..];
        while let Some(kind) = rest.chars().next() {
            let body = &rest[1..];
            let end = body.find(['#', '.']).unwrap_or(body.len());
            let name = &body[..end];
            if name.is_empty() {
                return None;
            }
            match kind {
                '#' => sel.id = Some(name.to_string()),
                _ => sel.classes.push(name.to_string()),
            }
            rest = &body[end..];
        }
        Some(sel)
    }

    fn matches(&self, node: &Node) -> bool {
        self.tag.as_deref().map_or(true, |t| t == node.tag)
            && self.id.as_deref().map_or(true, |id| node.attr("id") == Some(id))
            && self.classes.iter().all(|c| node.has_class(c))
    }
}
