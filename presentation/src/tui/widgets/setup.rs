//! Setup screen: topic input, count and difficulty selectors, start button

use crate::tui::state::{SetupField, SetupForm};
use quizzly_domain::{DifficultySetting, QUESTION_COUNT_CHOICES};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph, Widget, Wrap},
};

pub struct SetupWidget<'a> {
    form: &'a SetupForm,
    topics: &'a [String],
    error: Option<&'a str>,
    generating: bool,
    spinner: char,
}

impl<'a> SetupWidget<'a> {
    pub fn new(form: &'a SetupForm, topics: &'a [String]) -> Self {
        Self {
            form,
            topics,
            error: None,
            generating: false,
            spinner: ' ',
        }
    }

    pub fn error(mut self, error: Option<&'a str>) -> Self {
        self.error = error;
        self
    }

    pub fn generating(mut self, generating: bool, spinner: char) -> Self {
        self.generating = generating;
        self.spinner = spinner;
        self
    }

    fn label(&self, field: SetupField, text: &'static str) -> Span<'static> {
        let style = if self.form.focus == field {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Cyan)
        };
        Span::styled(text, style)
    }

    fn choice(&self, text: String, selected: bool, focused: bool) -> Span<'static> {
        let style = match (selected, focused) {
            (true, true) => Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
            (true, false) => Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan),
            (false, _) => Style::default().fg(Color::Gray),
        };
        Span::styled(format!(" {} ", text), style)
    }

    fn topic_block(&self) -> Paragraph<'a> {
        let focused = self.form.focus == SetupField::Topic;
        let (before, at, after) = self.form.topic_parts();

        let line = if self.form.topic.is_empty() && !focused {
            Line::from(Span::styled(
                "e.g. Space, Roman history, Jazz",
                Style::default().fg(Color::DarkGray),
            ))
        } else if focused {
            let cursor = at.map(String::from).unwrap_or_else(|| " ".to_string());
            Line::from(vec![
                Span::raw(before),
                Span::styled(cursor, Style::default().add_modifier(Modifier::REVERSED)),
                Span::raw(after),
            ])
        } else {
            Line::from(self.form.topic.as_str())
        };

        let border = if focused { Color::Yellow } else { Color::DarkGray };
        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border))
                .title(self.label(SetupField::Topic, " Topic ")),
        )
    }

    fn count_line(&self) -> Line<'static> {
        let focused = self.form.focus == SetupField::Count;
        let mut spans = vec![self.label(SetupField::Count, "Questions   ")];
        let offered = QUESTION_COUNT_CHOICES.contains(&self.form.question_count);
        for count in QUESTION_COUNT_CHOICES {
            spans.push(self.choice(
                count.to_string(),
                count == self.form.question_count,
                focused,
            ));
            spans.push(Span::raw(" "));
        }
        if !offered {
            spans.push(self.choice(self.form.question_count.to_string(), true, focused));
        }
        Line::from(spans)
    }

    fn difficulty_line(&self) -> Line<'static> {
        let focused = self.form.focus == SetupField::Difficulty;
        let mut spans = vec![self.label(SetupField::Difficulty, "Difficulty  ")];
        for difficulty in DifficultySetting::ALL {
            spans.push(self.choice(
                difficulty.to_string(),
                difficulty == self.form.difficulty,
                focused,
            ));
            spans.push(Span::raw(" "));
        }
        Line::from(spans)
    }

    fn start_line(&self) -> Line<'static> {
        if self.generating {
            return Line::from(vec![
                Span::styled(
                    format!("{} ", self.spinner),
                    Style::default().fg(Color::Green),
                ),
                Span::styled(
                    "Generating questions...",
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::ITALIC),
                ),
                Span::styled("  (Esc to cancel)", Style::default().fg(Color::DarkGray)),
            ]);
        }
        let style = if self.form.focus == SetupField::Start {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Green)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Green)
        };
        Line::from(Span::styled("[ Start Quiz ]", style))
    }
}

impl Widget for SetupWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Quiz Setup ")
            .padding(Padding::horizontal(1));
        let inner = block.inner(area);
        block.render(area, buf);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // topic
                Constraint::Length(1),
                Constraint::Length(1), // count
                Constraint::Length(1),
                Constraint::Length(1), // difficulty
                Constraint::Length(1),
                Constraint::Length(1), // start
                Constraint::Length(1),
                Constraint::Length(3), // error
                Constraint::Min(0),    // topics
            ])
            .split(inner);

        self.topic_block().render(chunks[0], buf);
        Paragraph::new(self.count_line()).render(chunks[2], buf);
        Paragraph::new(self.difficulty_line()).render(chunks[4], buf);
        Paragraph::new(self.start_line()).render(chunks[6], buf);

        if let Some(error) = self.error {
            Paragraph::new(vec![
                Line::from(Span::styled(
                    error,
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(
                    "Esc to dismiss",
                    Style::default().fg(Color::DarkGray),
                )),
            ])
            .wrap(Wrap { trim: true })
            .render(chunks[8], buf);
        }

        if !self.topics.is_empty() {
            let text = vec![
                Line::from(Span::styled(
                    "Available topics",
                    Style::default().fg(Color::Cyan),
                )),
                Line::from(Span::styled(
                    self.topics.join(", "),
                    Style::default().fg(Color::DarkGray),
                )),
            ];
            Paragraph::new(text)
                .wrap(Wrap { trim: true })
                .render(chunks[9], buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quizzly_domain::QuizSettings;

    fn form() -> SetupForm {
        SetupForm::from_settings(&QuizSettings::new("Space", 10, DifficultySetting::Mixed).unwrap())
    }

    fn rendered(widget: SetupWidget<'_>) -> String {
        let area = Rect::new(0, 0, 70, 20);
        let mut buf = Buffer::empty(area);
        widget.render(area, &mut buf);
        buf.content().iter().map(|c| c.symbol()).collect()
    }

    #[test]
    fn test_setup_renders_form() {
        let form = form();
        let topics = vec!["History".to_string(), "Space".to_string()];
        let content = rendered(SetupWidget::new(&form, &topics));

        assert!(content.contains("Quiz Setup"));
        assert!(content.contains("Space"));
        assert!(content.contains(" 15 "));
        assert!(content.contains("mixed"));
        assert!(content.contains("Start Quiz"));
        assert!(content.contains("History, Space"));
    }

    #[test]
    fn test_setup_shows_error_and_spinner() {
        let form = form();
        let content = rendered(
            SetupWidget::new(&form, &[])
                .error(Some("Please enter a topic"))
                .generating(true, '⠋'),
        );
        assert!(content.contains("Please enter a topic"));
        assert!(content.contains("Generating questions..."));
        assert!(!content.contains("Start Quiz"));
    }

    #[test]
    fn test_custom_count_is_shown() {
        let mut form = form();
        form.question_count = 7;
        let content = rendered(SetupWidget::new(&form, &[]));
        assert!(content.contains(" 7 "));
    }
}
