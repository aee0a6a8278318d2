use std::cmp::Ordering;

use super::tree::{FileTree, Node, NodeId};

/// Directories first, then case-insensitive name.
pub fn compare_nodes(a: &Node, b: &Node) -> Ordering {
    b.is_dir()
        .cmp(&a.is_dir())
        .then_with(|| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
}

impl FileTree {
    /// Sort a node's immediate children. Stable, so case-fold ties keep
    /// their scan order.
    fn sort_children_of(&mut self, id: NodeId) {
        let Some(node) = self.get_mut(id) else {
            return;
        };
        let mut children = std::mem::take(&mut node.children);
        children.sort_by(|&a, &b| compare_nodes(&self[a], &self[b]));
        if let Some(node) = self.get_mut(id) {
            node.children = children;
        }
    }

    /// Sort every directory's children in the whole tree.
    pub fn sort_all_children(&mut self) {
        let mut stack = vec![self.root()];
        while let Some(id) = stack.pop() {
            self.sort_children_of(id);
            stack.extend(
                self.children(id)
                    .iter()
                    .copied()
                    .filter(|&child| self[child].is_dir()),
            );
        }
    }
}
