use crate::host::TextTree;
use std::collections::HashSet;
use wordsift_core::types::FragmentPolicy;

/// Flattened text per element, addressed by element position.
///
/// Built once; entries are never invalidated.
#[derive(Debug, Default)]
pub(crate) struct TextIndex {
    texts: Vec<String>,
}

impl TextIndex {
    pub(crate) fn push(&mut self, text: String) {
        self.texts.push(text);
    }

    pub(crate) fn get(&self, position: usize) -> Option<&str> {
        self.texts.get(position).map(String::as_str)
    }

    pub(crate) fn len(&self) -> usize {
        self.texts.len()
    }
}

/// A subtree nested past the configured depth.
#[derive(Debug)]
pub(crate) struct TooDeep;

/// Joins the leaf text of every node under `root` with single spaces.
///
/// Each visited node contributes at most its first direct text child. Empty
/// fragments are dropped. Traversal is pre-order with an explicit stack, and
/// stops with [`TooDeep`] once a node sits more than `max_depth` levels below
/// `root`.
pub(crate) fn flatten<T: TextTree>(
    tree: &T,
    root: T::Handle,
    policy: FragmentPolicy,
    max_depth: usize,
) -> Result<String, TooDeep> {
    let mut fragments: Vec<&str> = Vec::new();
    let mut seen: HashSet<&str> = HashSet::new();
    let mut stack = vec![(root, 0usize)];

    while let Some((node, depth)) = stack.pop() {
        if depth > max_depth {
            return Err(TooDeep);
        }

        let text = tree.first_text(node);
        let keep = match policy {
            FragmentPolicy::Dedup => seen.insert(text),
            FragmentPolicy::KeepAll => true,
        };
        if keep && !text.is_empty() {
            fragments.push(text);
        }

        let start = stack.len();
        stack.extend(
            tree.child_nodes(node)
                .filter(|child| tree.text_value(*child).is_none())
                .map(|child| (child, depth + 1)),
        );
        stack[start..].reverse();
    }

    Ok(fragments.join(" "))
}
