use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Instant;

use ignore::{DirEntry, WalkBuilder};

use super::tree::{FileTree, NodeId, NodeKind};
use crate::error::{AppError, Result};

/// Directory name that is never scanned.
pub const EXCLUDED_DIR_NAME: &str = ".git";

fn is_excluded(entry: &DirEntry) -> bool {
    entry.depth() > 0
        && entry.file_type().is_some_and(|t| t.is_dir())
        && entry.file_name() == EXCLUDED_DIR_NAME
}

/// Walk `root` once and build the sorted tree.
///
/// Every entry is shown: hidden and ignored files are kept, only
/// [`EXCLUDED_DIR_NAME`] directories are pruned. Symlinks are not followed.
/// Any walk error aborts the whole scan.
pub fn scan(root: &Path) -> Result<FileTree> {
    let started = Instant::now();
    let mut tree = FileTree::new(root);
    let mut dirs: HashMap<PathBuf, NodeId> = HashMap::new();
    dirs.insert(root.to_path_buf(), tree.root());

    let mut builder = WalkBuilder::new(root);
    builder
        .standard_filters(false)
        .follow_links(false)
        .sort_by_file_name(|a, b| a.cmp(b))
        .filter_entry(|entry| !is_excluded(entry));

    for result in builder.build() {
        let entry = result.map_err(|source| AppError::Scan {
            path: root.to_path_buf(),
            source,
        })?;

        if entry.depth() == 0 {
            continue;
        }

        let path = entry.path();
        let Some(parent) = path.parent().and_then(|p| dirs.get(p)).copied() else {
            tracing::trace!(path = %path.display(), "dropping entry without indexed parent");
            continue;
        };

        let kind = if entry.file_type().is_some_and(|t| t.is_dir()) {
            NodeKind::Directory
        } else {
            NodeKind::File
        };

        let name = entry.file_name().to_string_lossy().into_owned();
        let id = tree.add_entry(parent, name, path.to_path_buf(), kind);
        if kind == NodeKind::Directory {
            dirs.insert(path.to_path_buf(), id);
        }
    }

    tree.sort_all_children();

    tracing::info!(
        root = %root.display(),
        nodes = tree.len(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "scan complete"
    );

    Ok(tree)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::{self, File};
    use tempfile::TempDir;

    fn names(tree: &FileTree) -> Vec<String> {
        let mut all = Vec::new();
        let mut stack = vec![tree.root()];
        while let Some(id) = stack.pop() {
            all.push(tree[id].name.clone());
            stack.extend(tree.children(id).iter().copied());
        }
        all
    }

    #[test]
    fn builds_sorted_tree() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("X")).unwrap();
        File::create(dir.path().join("X").join("f.txt")).unwrap();
        File::create(dir.path().join("a.txt")).unwrap();

        let tree = scan(dir.path()).unwrap();
        let root = tree.root();

        let children: Vec<&str> = tree
            .children(root)
            .iter()
            .map(|&id| tree[id].name.as_str())
            .collect();
        assert_eq!(children, vec!["X", "a.txt"]);

        let x = tree.children(root)[0];
        assert!(tree[x].is_dir());
        assert!(!tree[x].expanded);
        assert_eq!(tree[x].depth, 1);
        let f = tree.children(x)[0];
        assert_eq!(tree[f].name, "f.txt");
        assert_eq!(tree[f].depth, 2);
        assert_eq!(tree[f].path, dir.path().join("X").join("f.txt"));
        assert!(tree[root].expanded);
    }

    #[test]
    fn skips_git_directory_and_contents() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join(".git")).unwrap();
        File::create(dir.path().join(".git").join("HEAD")).unwrap();
        File::create(dir.path().join("main.rs")).unwrap();

        let tree = scan(dir.path()).unwrap();

        let all = names(&tree);
        assert!(!all.iter().any(|n| n == ".git"));
        assert!(!all.iter().any(|n| n == "HEAD"));
        assert_eq!(tree.len(), 2);
    }

    #[test]
    fn git_file_is_not_excluded() {
        let dir = TempDir::new().unwrap();
        File::create(dir.path().join(".git")).unwrap();

        let tree = scan(dir.path()).unwrap();
        assert!(names(&tree).iter().any(|n| n == ".git"));
    }

    #[test]
    fn keeps_hidden_and_gitignored_entries() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(".gitignore"), "target\n").unwrap();
        fs::create_dir(dir.path().join("target")).unwrap();
        File::create(dir.path().join(".env")).unwrap();

        let tree = scan(dir.path()).unwrap();

        let all = names(&tree);
        assert!(all.iter().any(|n| n == "target"));
        assert!(all.iter().any(|n| n == ".env"));
        assert!(all.iter().any(|n| n == ".gitignore"));
    }

    #[test]
    fn empty_directory_has_only_root() {
        let dir = TempDir::new().unwrap();
        let tree = scan(dir.path()).unwrap();
        assert_eq!(tree.len(), 1);
        assert_eq!(tree.visible(), vec![tree.root()]);
    }

    #[cfg(unix)]
    #[test]
    fn non_utf8_names_keep_distinct_real_paths() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let dir = TempDir::new().unwrap();
        let first = dir.path().join(OsStr::from_bytes(b"a\xff"));
        let second = dir.path().join(OsStr::from_bytes(b"a\xfe"));
        if File::create(&first).is_err() || File::create(&second).is_err() {
            // Filesystem refuses non-UTF-8 names.
            return;
        }

        let tree = scan(dir.path()).unwrap();
        let children = tree.children(tree.root());
        assert_eq!(children.len(), 2);

        let a = &tree[children[0]];
        let b = &tree[children[1]];
        assert_eq!(a.name, b.name);
        assert_ne!(a.path, b.path);
        assert!(a.path.exists());
        assert!(b.path.exists());
    }

    #[cfg(unix)]
    #[test]
    fn symlinked_directories_are_leaves() {
        use std::os::unix::fs::symlink;

        let dir = TempDir::new().unwrap();
        let real = dir.path().join("real");
        fs::create_dir(&real).unwrap();
        File::create(real.join("inside.txt")).unwrap();
        symlink(&real, dir.path().join("link")).unwrap();
        symlink(dir.path(), real.join("loop")).unwrap();

        let tree = scan(dir.path()).unwrap();

        // root, real, real/inside.txt, real/loop, link
        assert_eq!(tree.len(), 5);
        let find = |name: &str| {
            let mut stack = vec![tree.root()];
            while let Some(id) = stack.pop() {
                if tree[id].name == name {
                    return id;
                }
                stack.extend(tree.children(id).iter().copied());
            }
            panic!("{name} not scanned");
        };
        let link = find("link");
        let looped = find("loop");
        assert_eq!(tree[link].kind, NodeKind::File);
        assert!(tree.children(link).is_empty());
        assert_eq!(tree[looped].kind, NodeKind::File);
        assert!(tree.children(looped).is_empty());
        assert!(tree[find("real")].is_dir());
    }

    #[test]
    fn missing_root_is_fatal() {
        let dir = TempDir::new().unwrap();
        let result = scan(&dir.path().join("does-not-exist"));
        assert!(matches!(result, Err(AppError::Scan { .. })));
    }
}
