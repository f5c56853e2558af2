//! Capabilities the searcher needs from the host display tree.

use crate::engine::ElementId;
use wordsift_core::types::{Display, Document, NodeId};

/// Read access to a containment tree of element and text nodes.
pub trait TextTree {
    type Handle: Copy;

    /// Direct children of `node`, in document order.
    fn child_nodes(&self, node: Self::Handle) -> impl Iterator<Item = Self::Handle> + '_;

    /// The value of `node` if it is a pure text node, `None` if it is structural.
    fn text_value(&self, node: Self::Handle) -> Option<&str>;

    /// Value of the first direct text child of `node`, or `""`.
    fn first_text(&self, node: Self::Handle) -> &str {
        self.child_nodes(node)
            .find_map(|child| self.text_value(child))
            .unwrap_or("")
    }
}

/// Receiver of visibility directives.
pub trait Surface<H> {
    fn set_visible(&mut self, element: H, visible: bool);

    fn show(&mut self, element: H) {
        self.set_visible(element, true);
    }

    fn hide(&mut self, element: H) {
        self.set_visible(element, false);
    }

    /// Called for every element whose text contains the query as a whole word.
    fn whole_word_match(&mut self, _id: ElementId, _element: H) {}
}

impl TextTree for Document {
    type Handle = NodeId;

    fn child_nodes(&self, node: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.children(node).iter().copied()
    }

    fn text_value(&self, node: NodeId) -> Option<&str> {
        self.text(node)
    }
}

impl Surface<NodeId> for Document {
    fn set_visible(&mut self, element: NodeId, visible: bool) {
        let display = if visible { Display::Flex } else { Display::None };
        self.set_display(element, display);
    }
}
