//! Render tree
//!
//! Widgets render to a plain [`Node`] tree that a backend turns into markup or
//! draw calls. Motion lives in [`Node::motion`], separate from structure, so
//! server and client renders can be compared with animation stripped.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::animator::Transition;
use crate::theme::StyleDescriptor;

/// One element of the render tree
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Node {
    pub tag: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub attrs: BTreeMap<&'static str, String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<StyleDescriptor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub motion: Option<Transition>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Node>,
}

impl Node {
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            ..Default::default()
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.attrs.insert(name, value.into());
        self
    }

    pub fn style(mut self, style: StyleDescriptor) -> Self {
        self.style = Some(style);
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn motion(mut self, motion: Option<Transition>) -> Self {
        self.motion = motion;
        self
    }

    pub fn child(mut self, child: Node) -> Self {
        self.children.push(child);
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(children);
        self
    }

    /// Add `child` only when present
    pub fn maybe_child(mut self, child: Option<Node>) -> Self {
        if let Some(child) = child {
            self.children.push(child);
        }
        self
    }

    /// Copy of the tree with every cosmetic motion removed
    pub fn structure(&self) -> Node {
        Node {
            motion: None,
            children: self.children.iter().map(Node::structure).collect(),
            ..self.clone()
        }
    }

    /// Depth-first search by element id
    pub fn find(&self, id: &str) -> Option<&Node> {
        if self.id.as_deref() == Some(id) {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(id))
    }

    /// All descendants (and self) with the given tag, depth-first
    pub fn find_all(&self, tag: &str) -> Vec<&Node> {
        let mut found = Vec::new();
        self.collect(tag, &mut found);
        found
    }

    fn collect<'a>(&'a self, tag: &str, found: &mut Vec<&'a Node>) {
        if self.tag == tag {
            found.push(self);
        }
        for child in &self.children {
            child.collect(tag, found);
        }
    }

    pub fn attr_value(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }

    /// Concatenated text of this node and its descendants
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.push_text(&mut out);
        out
    }

    fn push_text(&self, out: &mut String) {
        if let Some(text) = &self.text {
            out.push_str(text);
        }
        for child in &self.children {
            child.push_text(out);
        }
    }
}
