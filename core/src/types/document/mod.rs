//! Arena-backed display tree.
//!
//! Nodes live in a single `Vec` and are addressed by [`NodeId`]. Elements
//! carry a tag, an optional class and a [`Display`] state; text nodes carry
//! a string and have no children. Nodes are never freed while the document
//! lives, so ids stay valid.

use crate::types::word::WordEntry;
use std::fmt;
use thiserror::Error;

pub const WORD_CLASS: &str = "word";
pub const SPEECH_TYPE_CLASS: &str = "speech-type";
pub const MEANING_CLASS: &str = "meaning";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u32);

impl NodeId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Layout participation of an element.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Display {
    /// Never touched since creation.
    #[default]
    Unset,
    /// Visible, laid out as a flex container.
    Flex,
    /// Removed from layout.
    None,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DocumentError {
    #[error("unknown node {0}")]
    UnknownNode(NodeId),

    #[error("node {0} is a text node and cannot have children")]
    NotAnElement(NodeId),

    #[error("appending {child} to {parent} would create a cycle")]
    Cycle { parent: NodeId, child: NodeId },
}

#[derive(Debug, Clone)]
enum NodeData {
    Element {
        tag: String,
        class: Option<String>,
        display: Display,
        children: Vec<NodeId>,
    },
    Text(String),
}

#[derive(Debug, Default)]
pub struct Document {
    nodes: Vec<NodeData>,
}

/// Create operations.
impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create_element(&mut self, tag: &str, class: Option<&str>) -> NodeId {
        self.push(NodeData::Element {
            tag: tag.to_string(),
            class: class.map(str::to_string),
            display: Display::Unset,
            children: Vec::new(),
        })
    }

    pub fn create_text(&mut self, text: &str) -> NodeId {
        self.push(NodeData::Text(text.to_string()))
    }

    /// Renders a word entry as `div.word` holding the word as its text, then
    /// one `span.speech-type` and one `span.meaning` per meaning.
    pub fn build_word(&mut self, entry: &WordEntry) -> NodeId {
        let word = self.create_element("div", Some(WORD_CLASS));
        let text = self.create_text(entry.word.as_str());
        self.push_child(word, text);

        for (speech_type, meaning) in &entry.meanings {
            let speech_type_element = self.create_element("span", Some(SPEECH_TYPE_CLASS));
            let text = self.create_text(speech_type);
            self.push_child(speech_type_element, text);
            self.push_child(word, speech_type_element);

            let meaning_element = self.create_element("span", Some(MEANING_CLASS));
            let text = self.create_text(meaning);
            self.push_child(meaning_element, text);
            self.push_child(word, meaning_element);
        }

        word
    }

    fn push(&mut self, node: NodeData) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    /// Caller guarantees `parent` is an element created by this document.
    fn push_child(&mut self, parent: NodeId, child: NodeId) {
        if let Some(NodeData::Element { children, .. }) = self.nodes.get_mut(parent.index()) {
            children.push(child);
        }
    }
}

/// Mutation operations.
impl Document {
    /// Appends `child` as the last child of `parent`.
    ///
    /// Rejects text parents and edges that would make the tree cyclic. A node
    /// may still be shared by several parents.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> Result<(), DocumentError> {
        self.node(child).ok_or(DocumentError::UnknownNode(child))?;
        match self.node(parent) {
            None => return Err(DocumentError::UnknownNode(parent)),
            Some(NodeData::Text(_)) => return Err(DocumentError::NotAnElement(parent)),
            Some(NodeData::Element { .. }) => {}
        }
        if parent == child || self.descendants(child).any(|node| node == parent) {
            return Err(DocumentError::Cycle { parent, child });
        }

        self.push_child(parent, child);
        Ok(())
    }

    /// Replaces the children of `node` with a single text node, or the value
    /// of a text node in place.
    pub fn set_text_content(&mut self, node: NodeId, text: &str) -> Result<(), DocumentError> {
        let is_element = match self.node(node) {
            None => return Err(DocumentError::UnknownNode(node)),
            Some(NodeData::Text(_)) => false,
            Some(NodeData::Element { .. }) => true,
        };
        let new_text = is_element.then(|| self.create_text(text));

        match (self.nodes.get_mut(node.index()), new_text) {
            (Some(NodeData::Text(value)), _) => *value = text.to_string(),
            (Some(NodeData::Element { children, .. }), Some(new_text)) => {
                children.clear();
                children.push(new_text);
            }
            _ => {}
        }
        Ok(())
    }

    /// Sets the display state of an element. Text nodes are left untouched.
    pub fn set_display(&mut self, node: NodeId, value: Display) {
        if let Some(NodeData::Element { display, .. }) = self.nodes.get_mut(node.index()) {
            *display = value;
        }
    }
}

/// Read operations.
impl Document {
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Direct children of `node`; empty for text nodes and unknown ids.
    pub fn children(&self, node: NodeId) -> &[NodeId] {
        match self.node(node) {
            Some(NodeData::Element { children, .. }) => children,
            _ => &[],
        }
    }

    /// Value of a text node; `None` for elements.
    pub fn text(&self, node: NodeId) -> Option<&str> {
        match self.node(node) {
            Some(NodeData::Text(text)) => Some(text),
            _ => None,
        }
    }

    pub fn is_element(&self, node: NodeId) -> bool {
        matches!(self.node(node), Some(NodeData::Element { .. }))
    }

    pub fn tag(&self, node: NodeId) -> Option<&str> {
        match self.node(node) {
            Some(NodeData::Element { tag, .. }) => Some(tag),
            _ => None,
        }
    }

    pub fn class(&self, node: NodeId) -> Option<&str> {
        match self.node(node) {
            Some(NodeData::Element { class, .. }) => class.as_deref(),
            _ => None,
        }
    }

    pub fn display(&self, node: NodeId) -> Option<Display> {
        match self.node(node) {
            Some(NodeData::Element { display, .. }) => Some(*display),
            _ => None,
        }
    }

    /// Concatenation of every text node under `node`, in document order.
    pub fn text_content(&self, node: NodeId) -> String {
        std::iter::once(node)
            .chain(self.descendants(node))
            .filter_map(|id| self.text(id))
            .collect()
    }

    /// Pre-order walk of everything below `node`, excluding `node` itself.
    pub fn descendants(&self, node: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        let mut stack: Vec<NodeId> = self.children(node).iter().rev().copied().collect();
        std::iter::from_fn(move || {
            let next = stack.pop()?;
            stack.extend(self.children(next).iter().rev());
            Some(next)
        })
    }

    fn node(&self, id: NodeId) -> Option<&NodeData> {
        self.nodes.get(id.index())
    }
}
