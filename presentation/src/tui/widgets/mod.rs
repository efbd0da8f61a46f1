//! TUI widgets: ratatui components for the main layout
//!
//! Layout:
//! ┌── Header (3) ────────────────────────────────────┐
//! ├── Body (flex): setup | quiz | results ───────────┤
//! └── StatusBar (1) ─────────────────────────────────┘

pub mod header;
pub mod help;
pub mod quiz;
pub mod results;
pub mod setup;
pub mod status_bar;

pub use header::HeaderWidget;
pub use help::HelpWidget;
pub use quiz::QuizWidget;
pub use results::ResultsWidget;
pub use setup::SetupWidget;
pub use status_bar::StatusBarWidget;

use ratatui::layout::{Constraint, Direction, Flex, Layout, Rect};

/// Compute the main layout regions from a terminal area
pub struct MainLayout {
    pub header: Rect,
    pub body: Rect,
    pub status_bar: Rect,
}

impl MainLayout {
    pub fn compute(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(5),
                Constraint::Length(1),
            ])
            .split(area);

        Self {
            header: chunks[0],
            body: chunks[1],
            status_bar: chunks[2],
        }
    }
}

/// Rectangle of the given size centered in `area`, clamped to it
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height.min(area.height))])
        .flex(Flex::Center)
        .areas(area);
    let [rect] = Layout::horizontal([Constraint::Length(width.min(area.width))])
        .flex(Flex::Center)
        .areas(row);
    rect
}
