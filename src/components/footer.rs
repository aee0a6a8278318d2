use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

use crate::theme::ThemeColors;

/// Always-visible quit hint.
pub const QUIT_HINT: &str = "(q to quit)";

const KEY_HINTS: &[(&str, &str)] = &[
    ("j/k", "move"),
    ("h/l", "collapse/expand"),
    ("enter", "toggle"),
    ("g/G", "first/last"),
];

/// Static help line drawn under the tree.
pub struct FooterWidget<'a> {
    theme: &'a ThemeColors,
}

impl<'a> FooterWidget<'a> {
    pub fn new(theme: &'a ThemeColors) -> Self {
        Self { theme }
    }
}

impl<'a> Widget for FooterWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        let dim = Style::default().fg(self.theme.footer_fg);
        let key = dim.add_modifier(Modifier::BOLD);

        let mut spans = vec![Span::styled(QUIT_HINT, dim)];
        for (keys, what) in KEY_HINTS {
            spans.push(Span::styled("  ", dim));
            spans.push(Span::styled(*keys, key));
            spans.push(Span::styled(format!(" {}", what), dim));
        }

        buf.set_line(area.x, area.y, &Line::from(spans), area.width);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::dark_theme;

    #[test]
    fn renders_quit_hint_first() {
        let theme = dark_theme();
        let area = Rect::new(0, 0, 80, 1);
        let mut buf = Buffer::empty(area);
        FooterWidget::new(&theme).render(area, &mut buf);

        let content: String = (0..80)
            .map(|x| buf.cell((x, 0)).unwrap().symbol().to_string())
            .collect();
        assert!(content.starts_with(QUIT_HINT));
        assert!(content.contains("enter toggle"));
    }

    #[test]
    fn zero_area_does_not_panic() {
        let theme = dark_theme();
        let area = Rect::new(0, 0, 0, 0);
        let mut buf = Buffer::empty(area);
        FooterWidget::new(&theme).render(area, &mut buf);
    }
}
