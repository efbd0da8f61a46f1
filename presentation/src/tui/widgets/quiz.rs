//! Quiz screen: progress, countdown, question, options and feedback

use quizzly_domain::{POINTS_PER_QUESTION, Question, QuizSession, SessionPhase};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Padding, Paragraph, Widget, Wrap},
};

pub struct QuizWidget<'a> {
    session: &'a QuizSession,
}

impl<'a> QuizWidget<'a> {
    pub fn new(session: &'a QuizSession) -> Self {
        Self { session }
    }

    fn timer_color(remaining: u32) -> Color {
        match remaining {
            0..=5 => Color::Red,
            6..=10 => Color::Yellow,
            _ => Color::Green,
        }
    }

    fn option_line(&self, question: &'a Question, index: usize) -> Line<'a> {
        let label = Question::option_label(index);
        let text = question.options()[index].as_str();

        if self.session.phase() == SessionPhase::AwaitingAnswer {
            return Line::from(vec![
                Span::styled(
                    format!(" {} ", label),
                    Style::default()
                        .fg(Color::Black)
                        .bg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw(format!("  {}", text)),
            ]);
        }

        let chosen = self.session.current_answer() == Some(index);
        let (style, marker) = if question.is_correct(index) {
            (
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
                "  ✓",
            )
        } else if chosen {
            (
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                "  ✗",
            )
        } else {
            (Style::default().fg(Color::DarkGray), "")
        };
        Line::from(vec![
            Span::styled(format!(" {} ", label), style),
            Span::styled(format!("  {}{}", text, marker), style),
        ])
    }

    fn feedback_lines(&self, question: &Question) -> Vec<Line<'static>> {
        if self.session.phase() != SessionPhase::ShowingFeedback {
            return vec![Line::from(Span::styled(
                "Press 1-4 or A-D to answer",
                Style::default().fg(Color::DarkGray),
            ))];
        }

        let answer = format!(
            "{}) {}",
            Question::option_label(question.correct()),
            question.correct_option()
        );
        let verdict = match self.session.current_answer() {
            None => Line::from(Span::styled(
                format!("⏰ Time's up! The answer was {}", answer),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )),
            Some(choice) if question.is_correct(choice) => Line::from(Span::styled(
                format!("Correct! +{} points", POINTS_PER_QUESTION),
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            )),
            Some(_) => Line::from(Span::styled(
                format!("Wrong. The answer was {}", answer),
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )),
        };

        let next = if self.session.is_last_question() {
            "Press Enter to see your results"
        } else {
            "Press Enter for the next question"
        };
        vec![
            verdict,
            Line::from(Span::styled(next, Style::default().fg(Color::DarkGray))),
        ]
    }
}

impl Widget for QuizWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let question = self.session.current_question();

        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(
                " Question {} of {} ",
                self.session.current_index() + 1,
                self.session.total_questions()
            ))
            .title_bottom(Line::from(format!(" Score: {} ", self.session.score())).right_aligned())
            .padding(Padding::horizontal(1));
        let inner = block.inner(area);
        block.render(area, buf);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // progress
                Constraint::Length(1), // timer
                Constraint::Length(1),
                Constraint::Min(2),    // question
                Constraint::Length(1),
                Constraint::Length(7), // options
                Constraint::Length(2), // feedback
            ])
            .split(inner);

        Gauge::default()
            .gauge_style(Style::default().fg(Color::Blue).bg(Color::Black))
            .ratio(self.session.progress().clamp(0.0, 1.0))
            .label(format!(
                "{}/{} · {}",
                self.session.current_index() + 1,
                self.session.total_questions(),
                question.difficulty()
            ))
            .render(chunks[0], buf);

        let remaining = self.session.time_remaining();
        let limit = question.time_limit_secs().max(1);
        Gauge::default()
            .gauge_style(
                Style::default()
                    .fg(Self::timer_color(remaining))
                    .bg(Color::Black),
            )
            .ratio((f64::from(remaining) / f64::from(limit)).clamp(0.0, 1.0))
            .label(format!("⏱ {}s", remaining))
            .render(chunks[1], buf);

        Paragraph::new(Line::from(Span::styled(
            question.text(),
            Style::default().add_modifier(Modifier::BOLD),
        )))
        .wrap(Wrap { trim: true })
        .render(chunks[3], buf);

        let mut options = Vec::with_capacity(question.options().len() * 2);
        for index in 0..question.options().len() {
            options.push(self.option_line(question, index));
            options.push(Line::from(""));
        }
        Paragraph::new(options)
            .wrap(Wrap { trim: false })
            .render(chunks[5], buf);

        Paragraph::new(self.feedback_lines(question))
            .wrap(Wrap { trim: true })
            .render(chunks[6], buf);
    }
}
