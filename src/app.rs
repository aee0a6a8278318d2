use std::path::Path;

use ratatui::layout::Rect;

use crate::config::AppConfig;
use crate::error::Result;
use crate::fs::scanner;
use crate::fs::tree::{FileTree, NodeId};
use crate::navigation::Navigator;
use crate::theme::{self, ThemeColors};

/// A user-level action produced by the key/mouse handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    MoveDown,
    MoveUp,
    CollapseCurrent,
    ExpandCurrent,
    ToggleCurrent,
    JumpToFirst,
    JumpToLast,
    /// Select a row of the visible sequence (mouse click).
    Select(usize),
}

/// Terminal size reported by the host. Used for rendering bounds only.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

/// Render-time settings resolved from config.
#[derive(Debug, Clone)]
pub struct ViewSettings {
    pub use_icons: bool,
    pub indent_width: usize,
    pub theme: ThemeColors,
}

impl ViewSettings {
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            use_icons: config.use_icons(),
            indent_width: config.indent_width(),
            theme: theme::resolve_theme(&config.theme),
        }
    }
}

impl Default for ViewSettings {
    fn default() -> Self {
        Self::from_config(&AppConfig::default())
    }
}

/// Main application state: the tree, the cursor and the viewport.
pub struct App {
    pub tree: FileTree,
    pub nav: Navigator,
    pub viewport: Viewport,
    pub settings: ViewSettings,
    /// Where the tree rows were last drawn, for mapping mouse clicks.
    pub tree_area: Rect,
    pub should_quit: bool,
}

impl App {
    /// Scan `path` and create an App rooted there.
    pub fn new(path: &Path, settings: ViewSettings) -> Result<Self> {
        let tree = scanner::scan(path)?;
        Ok(Self::with_tree(tree, settings))
    }

    pub fn with_tree(tree: FileTree, settings: ViewSettings) -> Self {
        Self {
            tree,
            nav: Navigator::new(),
            viewport: Viewport::default(),
            settings,
            tree_area: Rect::default(),
            should_quit: false,
        }
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn current_node(&self) -> Option<NodeId> {
        self.nav.current(&self.tree)
    }

    /// Apply one action to the tree and cursor.
    pub fn apply(&mut self, action: Action) {
        tracing::debug!(?action, cursor = self.nav.cursor(), "apply");
        match action {
            Action::Quit => self.quit(),
            Action::MoveDown => self.nav.move_by(&self.tree, 1),
            Action::MoveUp => self.nav.move_by(&self.tree, -1),
            Action::CollapseCurrent => self.nav.collapse_current(&mut self.tree),
            Action::ExpandCurrent => self.nav.expand_current(&mut self.tree),
            Action::ToggleCurrent => self.nav.toggle_current(&mut self.tree),
            Action::JumpToFirst => self.nav.jump_to_first(&self.tree),
            Action::JumpToLast => self.nav.jump_to_last(&self.tree),
            Action::Select(index) => self.nav.select_index(&self.tree, index),
        }
    }

    /// Record new terminal dimensions. The tree is untouched.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.viewport = Viewport { width, height };
        tracing::debug!(viewport = ?self.viewport, "resize");
    }

    /// Map a screen row to an index in the visible sequence.
    pub fn row_at(&self, column: u16, row: u16) -> Option<usize> {
        let area = self.tree_area;
        let inside = column >= area.x
            && column < area.x + area.width
            && row >= area.y
            && row < area.y + area.height;
        if !inside {
            return None;
        }
        let index = self.nav.scroll_offset() + (row - area.y) as usize;
        (index < self.tree.visible().len()).then_some(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::{self, File};
    use tempfile::TempDir;

    fn setup_app() -> (TempDir, App) {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("X")).unwrap();
        File::create(dir.path().join("X").join("f.txt")).unwrap();
        File::create(dir.path().join("a.txt")).unwrap();
        let app = App::new(dir.path(), ViewSettings::default()).unwrap();
        (dir, app)
    }

    fn visible_names(app: &App) -> Vec<String> {
        app.tree
            .visible()
            .iter()
            .map(|&id| app.tree[id].name.clone())
            .collect()
    }

    fn current_name(app: &App) -> String {
        app.current_node()
            .map(|id| app.tree[id].name.clone())
            .unwrap_or_default()
    }

    #[test]
    fn starts_on_expanded_root() {
        let (dir, app) = setup_app();
        let root_name = dir.path().file_name().unwrap().to_string_lossy().to_string();
        assert_eq!(app.nav.cursor(), 0);
        assert_eq!(current_name(&app), root_name);
        assert_eq!(visible_names(&app)[1..], ["X", "a.txt"]);
    }

    #[test]
    fn expand_then_collapse_directory() {
        let (_dir, mut app) = setup_app();
        app.apply(Action::MoveDown);
        app.apply(Action::ExpandCurrent);
        assert_eq!(visible_names(&app)[1..], ["X", "f.txt", "a.txt"]);

        app.apply(Action::CollapseCurrent);
        assert_eq!(visible_names(&app)[1..], ["X", "a.txt"]);
        assert_eq!(current_name(&app), "X");
    }

    #[test]
    fn collapse_on_leaf_moves_to_parent() {
        let (_dir, mut app) = setup_app();
        app.apply(Action::JumpToLast);
        assert_eq!(current_name(&app), "a.txt");
        app.apply(Action::CollapseCurrent);
        assert_eq!(app.nav.cursor(), 0);
    }

    #[test]
    fn move_down_at_end_is_clamped() {
        let (_dir, mut app) = setup_app();
        app.apply(Action::JumpToLast);
        let last = app.nav.cursor();
        app.apply(Action::MoveDown);
        assert_eq!(app.nav.cursor(), last);
    }

    #[test]
    fn toggle_root_then_jump_last() {
        let (_dir, mut app) = setup_app();
        app.apply(Action::ToggleCurrent);
        assert_eq!(app.tree.visible().len(), 1);
        app.apply(Action::JumpToLast);
        assert_eq!(app.nav.cursor(), 0);
        app.apply(Action::ToggleCurrent);
        assert_eq!(app.tree.visible().len(), 3);
    }

    #[test]
    fn quit_sets_flag() {
        let (_dir, mut app) = setup_app();
        assert!(!app.should_quit);
        app.apply(Action::Quit);
        assert!(app.should_quit);
    }

    #[test]
    fn resize_only_touches_viewport() {
        let (_dir, mut app) = setup_app();
        let before = visible_names(&app);
        app.resize(100, 30);
        assert_eq!(app.viewport, Viewport { width: 100, height: 30 });
        assert_eq!(visible_names(&app), before);
    }

    #[test]
    fn row_at_maps_inside_tree_area() {
        let (_dir, mut app) = setup_app();
        app.tree_area = Rect::new(1, 1, 20, 10);
        assert_eq!(app.row_at(2, 1), Some(0));
        assert_eq!(app.row_at(2, 3), Some(2));
        assert_eq!(app.row_at(2, 4), None);
        assert_eq!(app.row_at(0, 1), None);
    }

    #[test]
    fn select_is_clamped() {
        let (_dir, mut app) = setup_app();
        app.apply(Action::Select(99));
        assert_eq!(current_name(&app), "a.txt");
    }
}
