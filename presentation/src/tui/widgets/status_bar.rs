//! Status bar widget: screen indicator + key hints + flash messages

use crate::tui::keys::Screen;
use crate::tui::state::SetupField;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

pub struct StatusBarWidget<'a> {
    screen: Screen,
    generating: bool,
    flash: Option<&'a str>,
}

impl<'a> StatusBarWidget<'a> {
    pub fn new(screen: Screen, generating: bool, flash: Option<&'a str>) -> Self {
        Self {
            screen,
            generating,
            flash,
        }
    }

    fn indicator(&self) -> (&'static str, Color) {
        match self.screen {
            Screen::Setup(_) => ("SETUP", Color::Blue),
            Screen::Question => ("ANSWER", Color::Green),
            Screen::Feedback => ("REVIEW", Color::Yellow),
            Screen::Results => ("RESULTS", Color::Magenta),
        }
    }

    fn hints(&self) -> &'static str {
        match self.screen {
            Screen::Setup(_) if self.generating => "Esc:cancel  Ctrl+C:quit",
            Screen::Setup(SetupField::Topic) => "Enter:start  Tab:next field  F1:help  Ctrl+C:quit",
            Screen::Setup(_) => "←/→:change  Tab:next field  Enter:start  ?:help  q:quit",
            Screen::Question => "1-4/A-D:answer  Esc:home  ?:help  q:quit",
            Screen::Feedback => "Enter:continue  Esc:home  q:quit",
            Screen::Results => "r:play again  h:home  q:quit",
        }
    }
}

impl Widget for StatusBarWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // Fill background
        let bg_style = Style::default().bg(Color::DarkGray).fg(Color::White);
        for x in area.left()..area.right() {
            buf[(x, area.y)].set_style(bg_style).set_char(' ');
        }

        let (indicator, color) = self.indicator();
        let indicator_span = Span::styled(
            format!(" {} ", indicator),
            Style::default()
                .fg(Color::Black)
                .bg(color)
                .add_modifier(Modifier::BOLD),
        );
        let indicator_width = indicator.len() as u16 + 2;
        buf.set_line(
            area.x,
            area.y,
            &Line::from(vec![indicator_span]),
            indicator_width,
        );

        let right_text = self.flash.unwrap_or_else(|| self.hints());
        let right_width = right_text.chars().count() as u16;
        let right_x = area.right().saturating_sub(right_width + 1);
        if right_x > area.x + indicator_width {
            let right_line = Line::from(Span::styled(
                right_text,
                Style::default().fg(Color::White).bg(Color::DarkGray),
            ));
            buf.set_line(right_x, area.y, &right_line, right_width + 1);
        }
    }
}
