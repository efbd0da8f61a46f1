//! Help overlay widget

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};

const SECTIONS: [(&str, &[(&str, &str)]); 4] = [
    (
        "Setup",
        &[
            ("Tab / ↓", "Next field"),
            ("Shift+Tab / ↑", "Previous field"),
            ("← / →", "Change count or difficulty"),
            ("Enter", "Start the quiz"),
            ("Esc", "Dismiss error / cancel generation"),
        ],
    ),
    (
        "Quiz",
        &[
            ("1-4 / A-D", "Choose an answer"),
            ("Enter", "Next question"),
            ("Esc", "Back to setup"),
        ],
    ),
    (
        "Results",
        &[("r / Enter", "Play again"), ("h / Esc", "New quiz")],
    ),
    (
        "Anywhere",
        &[("Ctrl+C", "Quit"), ("? / F1", "Toggle this help")],
    ),
];

/// Widget for rendering help overlay
pub struct HelpWidget;

impl HelpWidget {
    pub fn new() -> Self {
        Self
    }

    /// Rows needed to show every binding inside the border
    pub fn height() -> u16 {
        let rows: usize = SECTIONS.iter().map(|(_, keys)| keys.len() + 2).sum();
        rows as u16 + 2
    }

    fn build_help_text() -> Vec<Line<'static>> {
        let mut lines = Vec::new();
        for (title, bindings) in SECTIONS {
            lines.push(Line::from(Span::styled(
                title,
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )));
            for (keys, description) in bindings {
                lines.push(Line::from(vec![
                    Span::styled(format!("  {:<16}", keys), Style::default().fg(Color::Yellow)),
                    Span::raw(*description),
                ]));
            }
            lines.push(Line::from(""));
        }
        lines
    }
}

impl Default for HelpWidget {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for HelpWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Help (any key to close) ")
            .border_style(Style::default().fg(Color::Cyan));

        Paragraph::new(Self::build_help_text())
            .block(block)
            .wrap(Wrap { trim: false })
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_help_lists_bindings() {
        let area = Rect::new(0, 0, 60, HelpWidget::height());
        let mut buf = Buffer::empty(area);
        HelpWidget::new().render(area, &mut buf);

        let content = buf.content().iter().map(|c| c.symbol()).collect::<String>();
        assert!(content.contains("Choose an answer"));
        assert!(content.contains("Toggle this help"));
    }
}
