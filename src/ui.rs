use ratatui::{
    layout::{Constraint, Layout},
    style::Style,
    widgets::{Block, Borders},
    Frame,
};

use crate::app::App;
use crate::components::footer::FooterWidget;
use crate::components::tree::TreeWidget;

/// Render the application UI: the tree panel and the footer line.
pub fn render(app: &mut App, frame: &mut Frame) {
    let [tree_area, footer_area] =
        Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(frame.area());

    let theme = &app.settings.theme;
    let block = Block::default()
        .title(format!(" {} ", app.tree[app.tree.root()].path.display()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border_fg));

    // Keep the cursor row inside the window before drawing it.
    let inner = block.inner(tree_area);
    app.tree_area = inner;
    app.nav.update_scroll(inner.height as usize);

    let visible = app.tree.visible();
    let tree_widget = TreeWidget::new(&app.tree, &visible, app.nav.cursor(), &app.settings)
        .scroll_offset(app.nav.scroll_offset())
        .block(block);
    frame.render_widget(tree_widget, tree_area);
    frame.render_widget(FooterWidget::new(&app.settings.theme), footer_area);
}
