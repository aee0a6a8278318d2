use std::fmt;
use std::ops::Index;
use std::path::{Path, PathBuf};

/// Index of a node inside a [`FileTree`] arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub usize);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Node({})", self.0)
    }
}

/// Type of filesystem node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    File,
    Directory,
}

/// A node in the filesystem tree.
#[derive(Debug, Clone)]
pub struct Node {
    pub name: String,
    pub path: PathBuf,
    pub kind: NodeKind,
    /// Only meaningful for directories; leaves always stay `false`.
    pub expanded: bool,
    pub depth: usize,
    /// `None` only for the root.
    pub parent: Option<NodeId>,
    pub children: Vec<NodeId>,
}

impl Node {
    pub fn is_dir(&self) -> bool {
        self.kind == NodeKind::Directory
    }
}

/// Arena-backed directory tree.
///
/// The tree owns every node; parent and child links are plain [`NodeId`]s.
/// After construction only the `expanded` flag of directories changes.
#[derive(Debug, Clone)]
pub struct FileTree {
    nodes: Vec<Node>,
    root: NodeId,
}

impl FileTree {
    /// Create a tree holding only an expanded root directory.
    pub fn new(root_path: &Path) -> Self {
        let name = root_path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| root_path.to_string_lossy().to_string());

        let root = Node {
            name,
            path: root_path.to_path_buf(),
            kind: NodeKind::Directory,
            expanded: true,
            depth: 0,
            parent: None,
            children: Vec::new(),
        };

        Self {
            nodes: vec![root],
            root: NodeId(0),
        }
    }

    /// Append a child under `parent`. New directories start collapsed.
    ///
    /// The child's path is `parent.path` joined with `name`.
    pub fn add_child(&mut self, parent: NodeId, name: &str, kind: NodeKind) -> NodeId {
        let path = self.nodes[parent.0].path.join(name);
        self.add_entry(parent, name.to_string(), path, kind)
    }

    /// Append a child whose on-disk path is already known.
    ///
    /// `name` is only for display and may be a lossy rendering of the last
    /// component of `path`.
    pub fn add_entry(
        &mut self,
        parent: NodeId,
        name: String,
        path: PathBuf,
        kind: NodeKind,
    ) -> NodeId {
        let id = NodeId(self.nodes.len());
        let depth = self.nodes[parent.0].depth + 1;

        self.nodes.push(Node {
            name,
            path,
            kind,
            expanded: false,
            depth,
            parent: Some(parent),
            children: Vec::new(),
        });
        self.nodes[parent.0].children.push(id);
        id
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    pub(crate) fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id.0)
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(|n| n.parent)
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.get(id).map(|n| n.children.as_slice()).unwrap_or(&[])
    }

    /// Total number of nodes, root included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Ordered sequence of currently visible nodes.
    ///
    /// Pre-order from the root, descending only into expanded directories.
    /// The root is always first. Recomputed on every call.
    pub fn visible(&self) -> Vec<NodeId> {
        let mut visible = Vec::with_capacity(256);
        let mut stack = vec![self.root];

        while let Some(id) = stack.pop() {
            visible.push(id);
            let node = &self.nodes[id.0];
            if node.is_dir() && node.expanded {
                stack.extend(node.children.iter().rev().copied());
            }
        }

        visible
    }

    /// Expand a directory. Returns whether the flag changed.
    pub fn expand(&mut self, id: NodeId) -> bool {
        self.set_expanded(id, |_| true)
    }

    /// Collapse a directory. Returns whether the flag changed.
    pub fn collapse(&mut self, id: NodeId) -> bool {
        self.set_expanded(id, |_| false)
    }

    /// Flip a directory's expand flag. Leaves are left alone.
    pub fn toggle(&mut self, id: NodeId) -> bool {
        self.set_expanded(id, |current| !current)
    }

    fn set_expanded(&mut self, id: NodeId, next: impl FnOnce(bool) -> bool) -> bool {
        match self.get_mut(id) {
            Some(node) if node.is_dir() => {
                let value = next(node.expanded);
                let changed = value != node.expanded;
                node.expanded = value;
                changed
            }
            _ => false,
        }
    }
}

impl Index<NodeId> for FileTree {
    type Output = Node;

    fn index(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }
}
