//! Results screen: score, accuracy and performance badge

use quizzly_application::ReplayMode;
use quizzly_domain::{PerformanceTier, QuizResult, QuizSettings};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Padding, Paragraph, Widget},
};

pub struct ResultsWidget<'a> {
    result: &'a QuizResult,
    settings: Option<&'a QuizSettings>,
    replay: ReplayMode,
}

impl<'a> ResultsWidget<'a> {
    pub fn new(result: &'a QuizResult, settings: Option<&'a QuizSettings>, replay: ReplayMode) -> Self {
        Self {
            result,
            settings,
            replay,
        }
    }

    fn badge(tier: PerformanceTier) -> (&'static str, Color) {
        match tier {
            PerformanceTier::Trophy => ("🏆", Color::Yellow),
            PerformanceTier::Target => ("🎯", Color::Cyan),
            PerformanceTier::Zap => ("⚡", Color::Magenta),
        }
    }
}

impl Widget for ResultsWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Results ")
            .padding(Padding::horizontal(1));
        let inner = block.inner(area);
        block.render(area, buf);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(2), // badge + message
                Constraint::Length(1),
                Constraint::Length(4), // stats
                Constraint::Length(1), // accuracy gauge
                Constraint::Length(1),
                Constraint::Min(1), // replay hint
            ])
            .split(inner);

        let (icon, color) = Self::badge(self.result.performance_tier());
        Paragraph::new(vec![
            Line::from(Span::raw(icon)),
            Line::from(Span::styled(
                self.result.performance_message(),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )),
        ])
        .alignment(Alignment::Center)
        .render(chunks[1], buf);

        let label = Style::default().fg(Color::Cyan);
        let mut stats = vec![
            Line::from(vec![
                Span::styled("Score      ", label),
                Span::styled(
                    format!("{} / {}", self.result.score, self.result.max_score()),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(vec![
                Span::styled("Correct    ", label),
                Span::styled(
                    self.result.correct_answers().to_string(),
                    Style::default().fg(Color::Green),
                ),
                Span::styled("   Incorrect  ", label),
                Span::styled(
                    self.result.incorrect_answers().to_string(),
                    Style::default().fg(Color::Red),
                ),
            ]),
        ];
        if let Some(settings) = self.settings {
            stats.push(Line::from(vec![
                Span::styled("Topic      ", label),
                Span::raw(format!("{} ({})", settings.topic, settings.difficulty)),
            ]));
        }
        Paragraph::new(stats).render(chunks[3], buf);

        Gauge::default()
            .gauge_style(Style::default().fg(color).bg(Color::Black))
            .percent(self.result.percentage().min(100) as u16)
            .label(format!("{}% accuracy", self.result.percentage()))
            .render(chunks[4], buf);

        let replay = match self.replay {
            ReplayMode::SameQuestions => "r: play the same questions again",
            ReplayMode::Regenerate => "r: play again with new questions",
        };
        Paragraph::new(vec![
            Line::from(Span::styled(replay, Style::default().fg(Color::DarkGray))),
            Line::from(Span::styled(
                "h: new quiz   q: quit",
                Style::default().fg(Color::DarkGray),
            )),
        ])
        .render(chunks[6], buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quizzly_domain::DifficultySetting;

    fn rendered(widget: ResultsWidget<'_>) -> String {
        let area = Rect::new(0, 0, 60, 16);
        let mut buf = Buffer::empty(area);
        widget.render(area, &mut buf);
        buf.content().iter().map(|c| c.symbol()).collect()
    }

    #[test]
    fn test_results_for_one_of_three() {
        let result = QuizResult::new(10, 3);
        let settings = QuizSettings::new("Space", 3, DifficultySetting::Mixed).unwrap();
        let content = rendered(ResultsWidget::new(
            &result,
            Some(&settings),
            ReplayMode::SameQuestions,
        ));

        assert!(content.contains("KEEP PUSHING FORWARD"));
        assert!(content.contains("10 / 30"));
        assert!(content.contains("33% accuracy"));
        assert!(content.contains("Space (mixed)"));
        assert!(content.contains("same questions"));
    }

    #[test]
    fn test_replay_hint_follows_mode() {
        let result = QuizResult::new(30, 3);
        let content = rendered(ResultsWidget::new(&result, None, ReplayMode::Regenerate));
        assert!(content.contains("new questions"));
        assert!(content.contains("30 / 30"));
    }

    #[test]
    fn test_badges_differ_per_tier() {
        let (trophy, _) = ResultsWidget::badge(PerformanceTier::Trophy);
        let (zap, _) = ResultsWidget::badge(PerformanceTier::Zap);
        assert_ne!(trophy, zap);
    }
}
