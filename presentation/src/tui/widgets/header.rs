//! Header widget: shows the question source, quiz settings and phase

use quizzly_application::QuizPhase;
use quizzly_domain::QuizSettings;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

pub struct HeaderWidget<'a> {
    provider: &'a str,
    settings: Option<&'a QuizSettings>,
    phase: QuizPhase,
    generating: bool,
}

impl<'a> HeaderWidget<'a> {
    pub fn new(
        provider: &'a str,
        settings: Option<&'a QuizSettings>,
        phase: QuizPhase,
        generating: bool,
    ) -> Self {
        Self {
            provider,
            settings,
            phase,
            generating,
        }
    }

    fn phase_label(&self) -> (&'static str, Color) {
        match self.phase {
            QuizPhase::Setup if self.generating => ("Generating", Color::Yellow),
            QuizPhase::Setup => ("Setup", Color::Cyan),
            QuizPhase::Active => ("Quiz", Color::Green),
            QuizPhase::Results => ("Results", Color::Magenta),
        }
    }
}

impl Widget for HeaderWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (phase_text, phase_color) = self.phase_label();

        let mut spans = vec![
            Span::styled("◉ ", Style::default().fg(Color::Green)),
            Span::styled(
                phase_text,
                Style::default()
                    .fg(phase_color)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" | "),
            Span::styled(self.provider, Style::default().fg(Color::White)),
        ];

        if let Some(settings) = self.settings {
            spans.push(Span::raw(" | "));
            spans.push(Span::styled(
                settings.topic.as_str(),
                Style::default().fg(Color::Yellow),
            ));
            spans.push(Span::styled(
                format!(" ({}, {})", settings.difficulty, settings.question_count()),
                Style::default().fg(Color::DarkGray),
            ));
        }

        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Quizzly ")
            .style(Style::default().fg(Color::White));

        Paragraph::new(Line::from(spans))
            .block(block)
            .render(area, buf);
    }
}
