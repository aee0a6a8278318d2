use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Widget},
};

use crate::app::ViewSettings;
use crate::fs::tree::{FileTree, Node, NodeId};
use crate::icons;

/// Shown instead of rows when nothing is visible.
pub const EMPTY_PLACEHOLDER: &str = "(empty)";

const CURSOR_MARKER: &str = ">";
const TWISTY_EXPANDED: &str = "▾";
const TWISTY_COLLAPSED: &str = "▸";

/// Tree widget: one row per visible node, starting at the scroll offset.
pub struct TreeWidget<'a> {
    tree: &'a FileTree,
    visible: &'a [NodeId],
    cursor: usize,
    scroll_offset: usize,
    settings: &'a ViewSettings,
    block: Option<Block<'a>>,
}

impl<'a> TreeWidget<'a> {
    pub fn new(
        tree: &'a FileTree,
        visible: &'a [NodeId],
        cursor: usize,
        settings: &'a ViewSettings,
    ) -> Self {
        Self {
            tree,
            visible,
            cursor,
            scroll_offset: 0,
            settings,
            block: None,
        }
    }

    pub fn scroll_offset(mut self, offset: usize) -> Self {
        self.scroll_offset = offset;
        self
    }

    pub fn block(mut self, block: Block<'a>) -> Self {
        self.block = Some(block);
        self
    }

    fn twisty(node: &Node) -> &'static str {
        match (node.is_dir(), node.expanded) {
            (false, _) => " ",
            (true, true) => TWISTY_EXPANDED,
            (true, false) => TWISTY_COLLAPSED,
        }
    }

    /// Icon glyph and style for a node.
    fn icon(&self, node: &Node) -> (&'static str, Style) {
        let theme = &self.settings.theme;
        if !self.settings.use_icons {
            let glyph = if node.is_dir() {
                icons::ASCII_DIR_ICON
            } else {
                icons::ASCII_FILE_ICON
            };
            return (glyph, Style::default());
        }

        if node.is_dir() {
            let glyph = if node.expanded {
                icons::DIR_OPEN_ICON
            } else {
                icons::DIR_ICON
            };
            return (glyph, Style::default().fg(theme.tree_dir_fg));
        }

        let style = icons::resolve(&node.path);
        if style.is_empty() {
            return (icons::FILE_ICON, Style::default());
        }
        let icon_style = style
            .color
            .map(|c| Style::default().fg(c))
            .unwrap_or_default();
        (style.glyph, icon_style)
    }

    /// Build the row for the node at `index` of the visible sequence.
    pub fn row(&self, index: usize, id: NodeId) -> Line<'a> {
        let theme = &self.settings.theme;
        let node = &self.tree[id];
        let is_cursor = index == self.cursor;

        let marker = if is_cursor { CURSOR_MARKER } else { " " };
        let indent = " ".repeat(self.settings.indent_width * node.depth);
        let (glyph, icon_style) = self.icon(node);

        let name_style = if node.is_dir() {
            Style::default()
                .fg(theme.tree_dir_fg)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.tree_file_fg)
        };

        let line = Line::from(vec![
            Span::styled(marker, Style::default().fg(theme.cursor_fg)),
            Span::raw(format!(" {}{} ", indent, Self::twisty(node))),
            Span::styled(glyph, icon_style),
            Span::raw(" "),
            Span::styled(node.name.clone(), name_style),
        ]);

        if is_cursor {
            line.style(
                Style::default()
                    .bg(theme.tree_selected_bg)
                    .fg(theme.tree_selected_fg)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            line.style(Style::default().bg(theme.tree_bg).fg(theme.tree_fg))
        }
    }
}

impl<'a> Widget for TreeWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let inner_area = if let Some(block) = &self.block {
            let inner = block.inner(area);
            block.clone().render(area, buf);
            inner
        } else {
            area
        };

        if inner_area.height == 0 || inner_area.width == 0 {
            return;
        }

        if self.visible.is_empty() {
            let line = Line::from(Span::styled(
                EMPTY_PLACEHOLDER,
                Style::default().fg(self.settings.theme.footer_fg),
            ));
            buf.set_line(inner_area.x, inner_area.y, &line, inner_area.width);
            return;
        }

        let rows = self
            .visible
            .iter()
            .enumerate()
            .skip(self.scroll_offset)
            .take(inner_area.height as usize);

        for (i, (index, &id)) in rows.enumerate() {
            let y = inner_area.y + i as u16;
            let line = self.row(index, id);
            buf.set_line(inner_area.x, y, &line, inner_area.width);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AppConfig, TreeConfig};
    use crate::fs::tree::NodeKind;
    use std::path::Path;

    fn ascii_settings() -> ViewSettings {
        ViewSettings::from_config(&AppConfig {
            tree: TreeConfig {
                use_icons: Some(false),
                ..Default::default()
            },
            ..Default::default()
        })
    }

    /// root/{X/{f.txt}, a.txt} with X expanded.
    fn sample_tree() -> FileTree {
        let mut tree = FileTree::new(Path::new("/work/root"));
        let root = tree.root();
        let x = tree.add_child(root, "X", NodeKind::Directory);
        tree.add_child(x, "f.txt", NodeKind::File);
        tree.add_child(root, "a.txt", NodeKind::File);
        tree.expand(x);
        tree
    }

    fn row_text(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width)
            .map(|x| buf.cell((x, y)).unwrap().symbol().to_string())
            .collect::<String>()
            .trim_end()
            .to_string()
    }

    fn render(tree: &FileTree, visible: &[NodeId], cursor: usize, scroll: usize, height: u16) -> Buffer {
        let settings = ascii_settings();
        let area = Rect::new(0, 0, 40, height);
        let mut buf = Buffer::empty(area);
        TreeWidget::new(tree, visible, cursor, &settings)
            .scroll_offset(scroll)
            .render(area, &mut buf);
        buf
    }

    #[test]
    fn renders_rows_with_marker_indent_twisty_icon_and_name() {
        let tree = sample_tree();
        let visible = tree.visible();
        let buf = render(&tree, &visible, 1, 0, 6);

        assert_eq!(row_text(&buf, 0), "  ▾ [D] root");
        assert_eq!(row_text(&buf, 1), ">   ▾ [D] X");
        assert_eq!(row_text(&buf, 2), "        [F] f.txt");
        assert_eq!(row_text(&buf, 3), "      [F] a.txt");
        assert_eq!(row_text(&buf, 4), "");
    }

    #[test]
    fn collapsed_directory_uses_closed_twisty() {
        let mut tree = sample_tree();
        let x = tree.children(tree.root())[0];
        tree.collapse(x);
        let visible = tree.visible();
        let buf = render(&tree, &visible, 0, 0, 4);
        assert_eq!(row_text(&buf, 0), "> ▾ [D] root");
        assert_eq!(row_text(&buf, 1), "    ▸ [D] X");
    }

    #[test]
    fn scroll_offset_skips_leading_rows() {
        let tree = sample_tree();
        let visible = tree.visible();
        let buf = render(&tree, &visible, 3, 2, 2);
        assert_eq!(row_text(&buf, 0), "        [F] f.txt");
        assert_eq!(row_text(&buf, 1), ">     [F] a.txt");
    }

    #[test]
    fn empty_sequence_shows_placeholder() {
        let tree = sample_tree();
        let buf = render(&tree, &[], 0, 0, 3);
        assert_eq!(row_text(&buf, 0), EMPTY_PLACEHOLDER);
    }

    #[test]
    fn icons_mode_uses_resolver_and_fallback() {
        let tree = sample_tree();
        let settings = ViewSettings::default();
        let widget = TreeWidget::new(&tree, &[], 0, &settings);

        let rs = {
            let mut t = FileTree::new(Path::new("/p"));
            let root = t.root();
            t.add_child(root, "lib.rs", NodeKind::File);
            t.add_child(root, "notes.unknownext", NodeKind::File);
            t
        };
        let kids = rs.children(rs.root());
        let rs_widget = TreeWidget::new(&rs, &[], 0, &settings);
        assert_eq!(rs_widget.icon(&rs[kids[0]]).0, "\u{e7a8}");
        assert_eq!(rs_widget.icon(&rs[kids[1]]).0, icons::FILE_ICON);

        let x = tree.children(tree.root())[0];
        assert_eq!(widget.icon(&tree[x]).0, icons::DIR_OPEN_ICON);
    }

    #[test]
    fn cursor_row_is_highlighted() {
        let tree = sample_tree();
        let visible = tree.visible();
        let settings = ascii_settings();
        let area = Rect::new(0, 0, 30, 4);
        let mut buf = Buffer::empty(area);
        TreeWidget::new(&tree, &visible, 2, &settings).render(area, &mut buf);

        assert_eq!(buf.cell((0, 2)).unwrap().bg, settings.theme.tree_selected_bg);
        assert_ne!(buf.cell((0, 1)).unwrap().bg, settings.theme.tree_selected_bg);
    }
}
