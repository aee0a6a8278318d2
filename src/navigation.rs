use crate::fs::tree::{FileTree, NodeId};

/// Cursor over the tree's visible sequence.
///
/// The cursor is an index into [`FileTree::visible`]. Every operation that
/// can change the length of that sequence re-clamps it afterwards.
#[derive(Debug, Default, Clone)]
pub struct Navigator {
    cursor: usize,
    scroll_offset: usize,
}

impl Navigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// First visible row of the rendering window.
    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    /// The node under the cursor, if any.
    pub fn current(&self, tree: &FileTree) -> Option<NodeId> {
        tree.visible().get(self.cursor).copied()
    }

    /// Move the cursor by `delta` rows, stopping at either end.
    pub fn move_by(&mut self, tree: &FileTree, delta: isize) {
        let len = tree.visible().len();
        if len == 0 {
            self.cursor = 0;
            return;
        }
        self.cursor = self.cursor.saturating_add_signed(delta);
        self.clamp(len);
    }

    /// Select a row directly, clamped into range.
    pub fn select_index(&mut self, tree: &FileTree, index: usize) {
        self.cursor = index;
        self.clamp(tree.visible().len());
    }

    pub fn jump_to_first(&mut self, tree: &FileTree) {
        self.cursor = 0;
        self.clamp(tree.visible().len());
    }

    pub fn jump_to_last(&mut self, tree: &FileTree) {
        let len = tree.visible().len();
        if len > 0 {
            self.cursor = len - 1;
        }
    }

    /// Expand the directory under the cursor.
    pub fn expand_current(&mut self, tree: &mut FileTree) {
        let Some(id) = self.current(tree) else {
            return;
        };
        if tree.expand(id) {
            tracing::debug!(path = %tree[id].path.display(), "expanded");
        }
        self.clamp(tree.visible().len());
    }

    /// Flip the directory under the cursor. Leaves are ignored.
    pub fn toggle_current(&mut self, tree: &mut FileTree) {
        let Some(id) = self.current(tree) else {
            return;
        };
        if tree.toggle(id) {
            tracing::debug!(
                path = %tree[id].path.display(),
                expanded = tree[id].expanded,
                "toggled"
            );
        }
        self.clamp(tree.visible().len());
    }

    /// Collapse the expanded directory under the cursor, or otherwise move
    /// the cursor up to its parent.
    ///
    /// A collapsed directory behaves like a leaf here: repeated presses walk
    /// up towards the root instead of re-expanding anything.
    pub fn collapse_current(&mut self, tree: &mut FileTree) {
        let Some(id) = self.current(tree) else {
            return;
        };

        let node = &tree[id];
        if node.is_dir() && node.expanded {
            tree.collapse(id);
            tracing::debug!(path = %tree[id].path.display(), "collapsed");
            self.clamp(tree.visible().len());
            return;
        }

        if let Some(parent) = tree.parent(id) {
            if let Some(index) = Self::index_of(&tree.visible(), parent) {
                self.cursor = index;
            }
        }
    }

    /// Keep the cursor inside a window of `visible_height` rows.
    pub fn update_scroll(&mut self, visible_height: usize) {
        if visible_height == 0 {
            return;
        }
        if self.cursor < self.scroll_offset {
            self.scroll_offset = self.cursor;
        } else if self.cursor >= self.scroll_offset + visible_height {
            self.scroll_offset = self.cursor - visible_height + 1;
        }
    }

    fn index_of(visible: &[NodeId], target: NodeId) -> Option<usize> {
        visible.iter().position(|&id| id == target)
    }

    fn clamp(&mut self, len: usize) {
        if len == 0 {
            self.cursor = 0;
        } else if self.cursor >= len {
            self.cursor = len - 1;
        }
    }
}
